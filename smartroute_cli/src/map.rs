use geojson::{Feature, FeatureCollection, Geometry, JsonObject, Value};
use serde_json::json;
use smartroute_planner::{
    planner::{
        planner_params::{ELECTRIC_FOUR_WHEELER, FOUR_WHEELER, THREE_WHEELER},
        trip::Trip,
    },
    problem::location::Location,
};

pub fn vehicle_color(vehicle_type: &str) -> &'static str {
    match vehicle_type {
        THREE_WHEELER => "blue",
        ELECTRIC_FOUR_WHEELER => "green",
        FOUR_WHEELER => "red",
        _ => "gray",
    }
}

fn position(location: &Location) -> Vec<f64> {
    vec![location.lon(), location.lat()]
}

fn feature(value: Value, properties: JsonObject) -> Feature {
    Feature {
        bbox: None,
        geometry: Some(Geometry::new(value)),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}

fn properties(value: serde_json::Value) -> JsonObject {
    match value {
        serde_json::Value::Object(map) => map,
        _ => JsonObject::new(),
    }
}

/// Store marker, one line per trip (store, stops, store) and one marker per
/// shipment, colored after the assigned vehicle type.
pub fn trips_to_geojson(store: &Location, trips: &[Trip]) -> FeatureCollection {
    let mut features = vec![feature(
        Value::Point(position(store)),
        properties(json!({ "kind": "store" })),
    )];

    for trip in trips {
        let color = vehicle_color(trip.vehicle_type());
        let path = trip.path(store).iter().map(position).collect();

        features.push(feature(
            Value::LineString(path),
            properties(json!({
                "kind": "trip",
                "trip_id": trip.id(),
                "vehicle_type": trip.vehicle_type(),
                "time_window": trip.time_window(),
                "distance_km": trip.distance().value(),
                "color": color,
            })),
        ));

        features.extend(trip.shipments().iter().map(|shipment| {
            feature(
                Value::Point(position(shipment.location())),
                properties(json!({
                    "kind": "shipment",
                    "shipment_id": shipment.external_id(),
                    "trip_id": trip.id(),
                    "vehicle_type": trip.vehicle_type(),
                    "color": color,
                })),
            )
        }));
    }

    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}

#[cfg(test)]
mod tests {
    use smartroute_planner::{
        planner::{planner_params::PlannerParams, trip_builder::build_trips},
        problem::{
            kilometers::Kilometers, shipment::Shipment,
            trip_planning_problem::TripPlanningProblemBuilder, vehicle_type::VehicleTypeSpec,
        },
    };

    use super::*;

    const MORNING: &str = "09:00:00-12:00:00";

    fn vehicle_type(name: &str, capacity: usize, max_radius: Option<f64>) -> VehicleTypeSpec {
        VehicleTypeSpec::new(name.to_owned(), Some(capacity), max_radius.map(Kilometers::new))
    }

    fn plan() -> (Location, Vec<Trip>) {
        let store = Location::from_lat_lon(12.9716, 77.5946);
        let shipments = vec![
            Shipment::new(
                String::from("a"),
                Location::from_lat_lon(12.98, 77.60),
                String::from(MORNING),
            ),
            Shipment::new(
                String::from("b"),
                Location::from_lat_lon(12.99, 77.61),
                String::from(MORNING),
            ),
        ];

        let mut builder = TripPlanningProblemBuilder::default();
        builder
            .set_store(store)
            .set_shipments(shipments)
            .set_vehicle_types(vec![
                vehicle_type("3W", 5, Some(15.0)),
                vehicle_type("4W-EV", 8, Some(20.0)),
                vehicle_type("4W", 25, None),
            ]);
        let problem = builder.build().unwrap();
        let params = PlannerParams::default();
        let mut fleet = params.initial_fleet();
        let trips = build_trips(&problem, &params, &mut fleet).unwrap();

        (store, trips)
    }

    #[test]
    fn test_vehicle_color() {
        assert_eq!(vehicle_color("3W"), "blue");
        assert_eq!(vehicle_color("4W-EV"), "green");
        assert_eq!(vehicle_color("4W"), "red");
        assert_eq!(vehicle_color("truck"), "gray");
    }

    #[test]
    fn test_trips_to_geojson() {
        let (store, trips) = plan();
        assert_eq!(trips.len(), 1);

        let collection = trips_to_geojson(&store, &trips);

        // store, one line, two shipments
        assert_eq!(collection.features.len(), 4);

        let line = &collection.features[1];
        match &line.geometry.as_ref().unwrap().value {
            Value::LineString(path) => {
                assert_eq!(path.len(), 4);
                assert_eq!(path.first(), path.last());
                assert_eq!(path[0], vec![store.lon(), store.lat()]);
            }
            other => panic!("expected a line string, got {other:?}"),
        }

        let properties = line.properties.as_ref().unwrap();
        assert_eq!(properties["trip_id"], 1);
        assert_eq!(properties["color"], "blue");
    }
}
