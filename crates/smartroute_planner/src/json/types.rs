use std::collections::BTreeMap;

use jiff::SignedDuration;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::{
    error::{ConfigurationError, PlanningError},
    json::coerce::{coerce_capacity, coerce_identifier, coerce_radius},
    planner::{planner_params::PlannerParams, summary::PlanSummary, trip::Trip},
    problem::{
        fleet::Availability,
        location::Location,
        shipment::Shipment,
        trip_planning_problem::{TripPlanningProblem, TripPlanningProblemBuilder},
        vehicle_type::VehicleTypeSpec,
    },
};

/// Planning input file. Field names also accept the column headers of the
/// legacy spreadsheet export.
#[derive(Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename = "PlanningInput")]
pub struct JsonPlanningInput {
    pub store: JsonStore,
    pub shipments: Vec<JsonShipment>,
    pub vehicle_types: Vec<JsonVehicleType>,

    /// Trip budget per vehicle type, `null` for unlimited. Merged over the
    /// default budgets.
    pub fleet: Option<BTreeMap<String, Option<usize>>>,
    pub params: Option<JsonPlannerParams>,
}

#[derive(Serialize, Deserialize, JsonSchema)]
#[serde(rename = "Store")]
pub struct JsonStore {
    #[serde(alias = "Latitude", alias = "Latitute")]
    pub latitude: f64,
    #[serde(alias = "Longitude")]
    pub longitude: f64,
}

#[derive(Serialize, Deserialize, JsonSchema)]
#[serde(rename = "Shipment")]
pub struct JsonShipment {
    /// String or number.
    #[serde(alias = "Shipment ID")]
    pub id: serde_json::Value,
    #[serde(alias = "Latitude")]
    pub latitude: f64,
    #[serde(alias = "Longitude")]
    pub longitude: f64,
    /// `HH:MM:SS-HH:MM:SS`
    #[serde(alias = "Delivery Timeslot")]
    pub time_window: String,
}

#[derive(Serialize, Deserialize, JsonSchema)]
#[serde(rename = "VehicleType")]
pub struct JsonVehicleType {
    #[serde(alias = "Vehicle Type")]
    pub name: String,
    /// Number or numeric string. Anything else leaves the type without a
    /// capacity.
    #[serde(default, alias = "Shipments_Capacity")]
    pub capacity: serde_json::Value,
    /// Number or numeric string. Missing means unbounded.
    #[serde(default, alias = "Max Trip Radius (in KM)")]
    pub max_radius_km: serde_json::Value,
}

#[derive(Serialize, Deserialize, JsonSchema, Default)]
#[serde(deny_unknown_fields, rename = "PlannerParams")]
pub struct JsonPlannerParams {
    pub travel_time_per_km: Option<SignedDuration>,
    pub delivery_time_per_shipment: Option<SignedDuration>,
    pub vehicle_priority: Option<Vec<String>>,
    pub fallback_vehicle_type: Option<String>,
}

/// A loaded problem together with the parameters it should be planned with.
pub struct PlanningInput {
    pub problem: TripPlanningProblem,
    pub params: PlannerParams,
}

impl JsonPlanningInput {
    #[instrument(skip_all, level = "debug")]
    pub fn build_problem(self) -> Result<PlanningInput, PlanningError> {
        let mut builder = TripPlanningProblemBuilder::default();

        if !is_valid_coordinate(self.store.latitude, self.store.longitude) {
            return Err(ConfigurationError::InvalidStoreLocation {
                latitude: self.store.latitude,
                longitude: self.store.longitude,
            }
            .into());
        }
        builder.set_store(Location::from_lat_lon(
            self.store.latitude,
            self.store.longitude,
        ));

        let shipments = self
            .shipments
            .into_iter()
            .enumerate()
            .map(|(index, shipment)| shipment.into_shipment(index))
            .collect::<Result<Vec<_>, _>>()?;
        builder.set_shipments(shipments);

        let vehicle_types = self
            .vehicle_types
            .into_iter()
            .map(|vehicle_type| {
                let capacity = coerce_capacity(&vehicle_type.name, &vehicle_type.capacity);
                let max_radius = coerce_radius(&vehicle_type.name, &vehicle_type.max_radius_km);
                VehicleTypeSpec::new(vehicle_type.name, capacity, max_radius)
            })
            .collect::<Vec<_>>();
        builder.set_vehicle_types(vehicle_types);

        let mut params = PlannerParams::default();
        if let Some(overrides) = self.params {
            overrides.apply(&mut params);
        }
        if let Some(fleet) = self.fleet {
            merge_fleet_limits(&mut params, fleet);
        }

        let problem = builder.build()?;

        debug!(
            windows = problem.windows().len(),
            shipments = problem.number_of_shipments(),
            vehicle_types = problem.vehicle_types().len(),
            "Loaded planning input"
        );

        Ok(PlanningInput { problem, params })
    }
}

impl JsonShipment {
    fn into_shipment(self, index: usize) -> Result<Shipment, PlanningError> {
        let id = coerce_identifier(&self.id).ok_or_else(|| PlanningError::InvalidShipment {
            index,
            reason: format!("identifier {} is neither a string nor a number", self.id),
        })?;

        if !is_valid_coordinate(self.latitude, self.longitude) {
            return Err(PlanningError::InvalidShipment {
                index,
                reason: format!(
                    "coordinates ({}, {}) of '{id}' are out of range",
                    self.latitude, self.longitude
                ),
            });
        }

        Ok(Shipment::new(
            id,
            Location::from_lat_lon(self.latitude, self.longitude),
            self.time_window,
        ))
    }
}

/// WGS84 latitude and longitude ranges.
fn is_valid_coordinate(latitude: f64, longitude: f64) -> bool {
    (-90.0..=90.0).contains(&latitude) && (-180.0..=180.0).contains(&longitude)
}

impl JsonPlannerParams {
    fn apply(self, params: &mut PlannerParams) {
        if let Some(travel_time_per_km) = self.travel_time_per_km {
            params.travel_time_per_km = travel_time_per_km;
        }

        if let Some(delivery_time_per_shipment) = self.delivery_time_per_shipment {
            params.delivery_time_per_shipment = delivery_time_per_shipment;
        }

        if let Some(vehicle_priority) = self.vehicle_priority {
            params.vehicle_priority = vehicle_priority;
        }

        if let Some(fallback_vehicle_type) = self.fallback_vehicle_type {
            params.fallback_vehicle_type = fallback_vehicle_type;
        }
    }
}

fn merge_fleet_limits(params: &mut PlannerParams, fleet: BTreeMap<String, Option<usize>>) {
    for (name, limit) in fleet {
        let availability = Availability::from(limit);

        match params
            .fleet_limits
            .iter()
            .position(|(existing, _)| *existing == name)
        {
            Some(position) => params.fleet_limits[position].1 = availability,
            None => params.fleet_limits.push((name, availability)),
        }
    }
}

/// One row of the trip report.
#[derive(Debug, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename = "Trip")]
pub struct JsonTrip {
    pub trip_id: usize,
    pub shipment_ids: Vec<String>,
    pub latitudes: Vec<f64>,
    pub longitudes: Vec<f64>,
    pub time_window: String,
    pub shipments: usize,
    pub distance_km: f64,
    pub trip_time_minutes: f64,
    pub vehicle_type: String,
    pub capacity_utilization: f64,
    pub time_utilization: f64,
    pub coverage_utilization: f64,
}

impl From<&Trip> for JsonTrip {
    fn from(trip: &Trip) -> Self {
        JsonTrip {
            trip_id: trip.id(),
            shipment_ids: trip.shipment_ids().map(str::to_owned).collect(),
            latitudes: trip.shipments().iter().map(|s| s.location().lat()).collect(),
            longitudes: trip.shipments().iter().map(|s| s.location().lon()).collect(),
            time_window: trip.time_window().to_owned(),
            shipments: trip.number_of_shipments(),
            distance_km: trip.distance().value(),
            trip_time_minutes: trip.trip_time_minutes(),
            vehicle_type: trip.vehicle_type().to_owned(),
            capacity_utilization: trip.utilization().capacity,
            time_utilization: trip.utilization().time,
            coverage_utilization: trip.utilization().coverage,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename = "TripPlan")]
pub struct JsonTripPlan {
    pub trips: Vec<JsonTrip>,
    pub summary: PlanSummary,
}

impl JsonTripPlan {
    pub fn new(trips: &[Trip], summary: PlanSummary) -> Self {
        JsonTripPlan {
            trips: trips.iter().map(JsonTrip::from).collect(),
            summary,
        }
    }
}
