pub mod grouping;
pub mod planner_params;
pub mod route_distance;
pub mod summary;
pub mod trip;
pub mod trip_builder;
pub mod vehicle_assignment;
