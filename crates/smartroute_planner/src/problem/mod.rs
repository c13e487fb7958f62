pub mod fleet;
pub mod kilometers;
pub mod location;
pub mod shipment;
pub mod time_window;
pub mod trip_planning_problem;
pub mod vehicle_type;
