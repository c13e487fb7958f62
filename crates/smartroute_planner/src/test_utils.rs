use geo::{Destination, Haversine};

use crate::problem::{
    kilometers::Kilometers,
    location::Location,
    shipment::Shipment,
    trip_planning_problem::{TripPlanningProblem, TripPlanningProblemBuilder},
    vehicle_type::VehicleTypeSpec,
};

pub const MORNING: &str = "09:00:00-12:00:00";
pub const EVENING: &str = "16:00:00-19:00:00";

pub fn store() -> Location {
    Location::from_lat_lon(19.0760, 72.8777)
}

/// Point `km` kilometers from `origin` along `bearing` degrees.
pub fn location_at(origin: &Location, bearing: f64, km: f64) -> Location {
    let haversine = Haversine;
    let point = haversine.destination(origin.into(), bearing, km * 1000.0);

    Location::from_lat_lon(point.y(), point.x())
}

pub fn location_north_of(origin: &Location, km: f64) -> Location {
    location_at(origin, 0.0, km)
}

pub fn shipment_at(id: &str, store: &Location, km: f64, window: &str) -> Shipment {
    Shipment::new(
        id.to_owned(),
        location_north_of(store, km),
        window.to_owned(),
    )
}

/// Shipments `s1..sn` north of the store at the given distances.
pub fn shipments_north(store: &Location, distances: &[f64], window: &str) -> Vec<Shipment> {
    distances
        .iter()
        .enumerate()
        .map(|(index, km)| shipment_at(&format!("s{}", index + 1), store, *km, window))
        .collect()
}

pub fn vehicle_type(name: &str, capacity: usize, max_radius: Option<f64>) -> VehicleTypeSpec {
    VehicleTypeSpec::new(name.to_owned(), Some(capacity), max_radius.map(Kilometers::new))
}

/// 3W, 4W-EV and 4W with generous limits: max capacity 50, max radius 100 km.
pub fn default_vehicle_types() -> Vec<VehicleTypeSpec> {
    vec![
        vehicle_type("3W", 5, Some(15.0)),
        vehicle_type("4W-EV", 25, Some(100.0)),
        vehicle_type("4W", 50, None),
    ]
}

pub fn create_test_problem(
    shipments: Vec<Shipment>,
    vehicle_types: Vec<VehicleTypeSpec>,
) -> TripPlanningProblem {
    let mut builder = TripPlanningProblemBuilder::default();
    builder
        .set_store(store())
        .set_shipments(shipments)
        .set_vehicle_types(vehicle_types);

    builder.build().unwrap()
}

pub fn assert_km_eq(actual: Kilometers, expected: f64) {
    assert!(
        (actual.value() - expected).abs() < 1e-6,
        "expected {expected} km, got {actual}"
    );
}
