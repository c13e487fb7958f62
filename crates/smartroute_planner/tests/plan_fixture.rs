use std::path::PathBuf;

use smartroute_planner::{
    json::{loader::read_planning_input, types::JsonTripPlan},
    planner::{summary::PlanSummary, trip::Trip, trip_builder::build_trips},
    problem::fleet::Availability,
};

fn data_fixture_path(fixture: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../data/fixtures/smartroute/")
        .join(fixture)
}

#[test]
fn test_plan_two_windows_fixture() {
    let input = read_planning_input(data_fixture_path("two_windows/input.json")).unwrap();
    let mut fleet = input.params.initial_fleet();

    let trips = build_trips(&input.problem, &input.params, &mut fleet).unwrap();

    // every shipment exactly once
    let mut planned = trips
        .iter()
        .flat_map(Trip::shipment_ids)
        .map(str::to_owned)
        .collect::<Vec<_>>();
    planned.sort();
    let mut expected = input
        .problem
        .shipments()
        .map(|shipment| shipment.external_id().to_owned())
        .collect::<Vec<_>>();
    expected.sort();
    assert_eq!(planned, expected);

    // ids run 1..=n across both windows, evening window first as in the file
    let ids = trips.iter().map(Trip::id).collect::<Vec<_>>();
    assert_eq!(ids, (1..=trips.len()).collect::<Vec<_>>());
    assert_eq!(trips[0].time_window(), "16:00:00-19:00:00");
    assert_eq!(trips.last().unwrap().time_window(), "09:00:00-12:00:00");

    assert!(trips.iter().all(|trip| trip.number_of_shipments() <= 25));

    for (name, initial) in [("3W", 1), ("4W-EV", 1)] {
        let used = trips.iter().filter(|trip| trip.vehicle_type() == name).count();
        assert!(used <= initial);
        assert_eq!(fleet.remaining(name), Some(Availability::Limited(initial - used)));
    }
    assert_eq!(fleet.remaining("4W"), Some(Availability::Unlimited));

    let summary = PlanSummary::new(&trips, &fleet, &input.params);
    assert_eq!(summary.shipments, 16);
}

#[test]
fn test_trip_plan_serialization_is_stable() {
    let plan = || {
        let input = read_planning_input(data_fixture_path("two_windows/input.json")).unwrap();
        let mut fleet = input.params.initial_fleet();
        let trips = build_trips(&input.problem, &input.params, &mut fleet).unwrap();
        let summary = PlanSummary::new(&trips, &fleet, &input.params);

        serde_json::to_string(&JsonTripPlan::new(&trips, summary)).unwrap()
    };

    assert_eq!(plan(), plan());

    let parsed: JsonTripPlan = serde_json::from_str(&plan()).unwrap();
    assert_eq!(parsed.summary.trips, parsed.trips.len());
}

#[test]
fn test_missing_file_is_reported() {
    let error = read_planning_input(data_fixture_path("does_not_exist.json"))
        .err()
        .unwrap();

    assert!(error.to_string().contains("does_not_exist.json"));
}
