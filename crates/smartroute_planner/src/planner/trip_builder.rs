use tracing::{Level, debug, instrument};

use crate::{
    debug_elapsed,
    error::PlanningError,
    planner::{
        grouping::{GroupingBounds, group_shipments},
        planner_params::PlannerParams,
        route_distance::{estimate_route_distance, round_trip_path},
        trip::{Trip, Utilization},
        vehicle_assignment::VehicleAssigner,
    },
    problem::{
        fleet::FleetState, time_window::TimeWindow, trip_planning_problem::TripPlanningProblem,
    },
};

/// Turns every time window of a problem into trips.
///
/// Windows are handled one after the other in input order and share one
/// [`FleetState`], so budgets used up by an early window are gone for the
/// later ones. Trip ids keep counting across windows.
pub struct TripBuilder<'a> {
    problem: &'a TripPlanningProblem,
    params: &'a PlannerParams,
}

impl<'a> TripBuilder<'a> {
    pub fn new(problem: &'a TripPlanningProblem, params: &'a PlannerParams) -> Self {
        TripBuilder { problem, params }
    }

    #[instrument(skip_all, level = Level::DEBUG)]
    pub fn build(&self, fleet: &mut FleetState) -> Result<Vec<Trip>, PlanningError> {
        self.params.validate()?;

        let vehicle_types = self.problem.vehicle_types();
        let bounds = GroupingBounds::from_vehicle_types(vehicle_types)?;
        let assigner = VehicleAssigner::new(vehicle_types, self.params)?;
        assigner.check_fleet(fleet)?;

        let store = self.problem.store();
        let mut trips: Vec<Trip> = Vec::with_capacity(self.problem.number_of_shipments());

        for window in self.problem.windows() {
            let time_window = TimeWindow::parse(window.label())?;
            let window_seconds = time_window.duration().as_secs_f64();

            let groups = debug_elapsed!(
                "group_shipments",
                group_shipments(store, window.shipments(), bounds)
            );

            debug!(
                window = window.label(),
                shipments = window.shipments().len(),
                groups = groups.len(),
                "Grouped time window"
            );

            for group in groups {
                let path = round_trip_path(store, group.locations());
                let distance = estimate_route_distance(&path);
                let shipment_count = group.len();
                let trip_time = self.params.trip_time(distance, shipment_count)?;
                let vehicle_type = assigner.assign(shipment_count, distance, fleet);

                let utilization = Utilization {
                    capacity: shipment_count as f64 / bounds.max_capacity() as f64,
                    time: trip_time.as_secs_f64() / window_seconds,
                    coverage: distance / bounds.max_radius(),
                };

                let trip = Trip::new(
                    trips.len() + 1,
                    window.label().to_owned(),
                    group.shipments().iter().map(|&shipment| shipment.clone()).collect(),
                    distance,
                    trip_time,
                    vehicle_type.to_owned(),
                    utilization,
                );

                debug!(
                    trip = trip.id(),
                    vehicle_type,
                    shipments = shipment_count,
                    %distance,
                    "Built trip"
                );

                trips.push(trip);
            }
        }

        Ok(trips)
    }
}

/// Plans `problem` with `params`, drawing vehicles from `fleet`.
pub fn build_trips(
    problem: &TripPlanningProblem,
    params: &PlannerParams,
    fleet: &mut FleetState,
) -> Result<Vec<Trip>, PlanningError> {
    TripBuilder::new(problem, params).build(fleet)
}
