use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    planner::{
        planner_params::PlannerParams,
        trip::{Trip, Utilization},
    },
    problem::{
        fleet::{Availability, FleetState},
        kilometers::Kilometers,
    },
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct VehicleTypeUsage {
    pub vehicle_type: String,
    pub trips: usize,
    /// Budget left after planning; `None` for the untracked fallback type.
    pub remaining: Option<Availability>,
}

/// Totals over one planning run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PlanSummary {
    pub trips: usize,
    pub shipments: usize,
    pub total_distance: Kilometers,
    pub total_trip_time_minutes: f64,
    pub vehicle_types: Vec<VehicleTypeUsage>,
    pub mean_utilization: Option<Utilization>,
}

impl PlanSummary {
    pub fn new(trips: &[Trip], fleet: &FleetState, params: &PlannerParams) -> Self {
        let mut names = params.vehicle_priority.iter().collect::<Vec<_>>();
        if !names.contains(&&params.fallback_vehicle_type) {
            names.push(&params.fallback_vehicle_type);
        }

        let vehicle_types = names
            .into_iter()
            .map(|name| VehicleTypeUsage {
                vehicle_type: name.clone(),
                trips: trips
                    .iter()
                    .filter(|trip| trip.vehicle_type() == name)
                    .count(),
                remaining: fleet.remaining(name),
            })
            .collect();

        PlanSummary {
            trips: trips.len(),
            shipments: trips.iter().map(Trip::number_of_shipments).sum(),
            total_distance: trips.iter().map(Trip::distance).sum(),
            total_trip_time_minutes: trips.iter().map(Trip::trip_time_minutes).sum(),
            vehicle_types,
            mean_utilization: mean_utilization(trips),
        }
    }
}

fn mean_utilization(trips: &[Trip]) -> Option<Utilization> {
    if trips.is_empty() {
        return None;
    }

    let count = trips.len() as f64;
    let mean = |ratio: fn(&Utilization) -> f64| {
        trips.iter().map(|trip| ratio(trip.utilization())).sum::<f64>() / count
    };

    Some(Utilization {
        capacity: mean(|u: &Utilization| u.capacity),
        time: mean(|u: &Utilization| u.time),
        coverage: mean(|u: &Utilization| u.coverage),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        planner::trip_builder::build_trips,
        test_utils::{self, MORNING},
    };

    #[test]
    fn test_summary_counts_trips_per_vehicle_type() {
        let store = test_utils::store();
        let problem = test_utils::create_test_problem(
            test_utils::shipments_north(&store, &[1.0, 2.0, 3.0, 4.0, 5.0], MORNING),
            vec![
                test_utils::vehicle_type("3W", 2, Some(15.0)),
                test_utils::vehicle_type("4W-EV", 2, Some(100.0)),
                test_utils::vehicle_type("4W", 2, None),
            ],
        );
        let params = PlannerParams {
            fleet_limits: vec![
                (String::from("3W"), Availability::Limited(1)),
                (String::from("4W-EV"), Availability::Limited(1)),
                (String::from("4W"), Availability::Unlimited),
            ],
            ..PlannerParams::default()
        };
        let mut fleet = params.initial_fleet();

        let trips = build_trips(&problem, &params, &mut fleet).unwrap();
        let summary = PlanSummary::new(&trips, &fleet, &params);

        assert_eq!(summary.trips, 3);
        assert_eq!(summary.shipments, 5);
        assert_eq!(
            summary.vehicle_types,
            vec![
                VehicleTypeUsage {
                    vehicle_type: String::from("3W"),
                    trips: 1,
                    remaining: Some(Availability::Limited(0)),
                },
                VehicleTypeUsage {
                    vehicle_type: String::from("4W-EV"),
                    trips: 1,
                    remaining: Some(Availability::Limited(0)),
                },
                VehicleTypeUsage {
                    vehicle_type: String::from("4W"),
                    trips: 1,
                    remaining: Some(Availability::Unlimited),
                },
            ]
        );

        let expected_distance: f64 = trips.iter().map(|trip| trip.distance().value()).sum();
        test_utils::assert_km_eq(summary.total_distance, expected_distance);
        assert!(summary.mean_utilization.is_some());
    }

    #[test]
    fn test_empty_plan() {
        let params = PlannerParams {
            fallback_vehicle_type: String::from("van"),
            ..PlannerParams::default()
        };

        let summary = PlanSummary::new(&[], &params.initial_fleet(), &params);

        assert_eq!(summary.trips, 0);
        assert_eq!(summary.mean_utilization, None);
        assert_eq!(summary.vehicle_types.len(), 4);
        assert_eq!(summary.vehicle_types[3].vehicle_type, "van");
        assert_eq!(summary.vehicle_types[3].remaining, None);
    }
}
