use jiff::SignedDuration;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::problem::{kilometers::Kilometers, location::Location, shipment::Shipment};

/// Sequential trip number, starting at 1 for the whole run.
pub type TripId = usize;

/// Ratios against the largest trip any vehicle type could make.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Utilization {
    /// Shipments over the maximum capacity across vehicle types.
    pub capacity: f64,
    /// Trip time over the time window duration.
    pub time: f64,
    /// Route distance over the maximum radius across vehicle types.
    pub coverage: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    id: TripId,
    time_window: String,
    shipments: Vec<Shipment>,
    distance: Kilometers,
    trip_time: SignedDuration,
    vehicle_type: String,
    utilization: Utilization,
}

impl Trip {
    pub(crate) fn new(
        id: TripId,
        time_window: String,
        shipments: Vec<Shipment>,
        distance: Kilometers,
        trip_time: SignedDuration,
        vehicle_type: String,
        utilization: Utilization,
    ) -> Self {
        Trip {
            id,
            time_window,
            shipments,
            distance,
            trip_time,
            vehicle_type,
            utilization,
        }
    }

    pub fn id(&self) -> TripId {
        self.id
    }

    pub fn time_window(&self) -> &str {
        &self.time_window
    }

    pub fn shipments(&self) -> &[Shipment] {
        &self.shipments
    }

    pub fn shipment_ids(&self) -> impl Iterator<Item = &str> {
        self.shipments.iter().map(Shipment::external_id)
    }

    pub fn number_of_shipments(&self) -> usize {
        self.shipments.len()
    }

    /// Estimated round trip from the store through every stop in order.
    pub fn distance(&self) -> Kilometers {
        self.distance
    }

    pub fn trip_time(&self) -> SignedDuration {
        self.trip_time
    }

    pub fn trip_time_minutes(&self) -> f64 {
        self.trip_time.as_secs_f64() / 60.0
    }

    pub fn vehicle_type(&self) -> &str {
        &self.vehicle_type
    }

    pub fn utilization(&self) -> &Utilization {
        &self.utilization
    }

    /// Waypoints the distance was measured over.
    pub fn path(&self, store: &Location) -> Vec<Location> {
        crate::planner::route_distance::round_trip_path(
            store,
            self.shipments.iter().map(Shipment::location),
        )
    }
}
