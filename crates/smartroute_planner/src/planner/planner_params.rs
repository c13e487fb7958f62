use jiff::SignedDuration;

use crate::{
    error::ConfigurationError,
    problem::{
        fleet::{Availability, FleetState},
        kilometers::Kilometers,
    },
};

pub const THREE_WHEELER: &str = "3W";
pub const ELECTRIC_FOUR_WHEELER: &str = "4W-EV";
pub const FOUR_WHEELER: &str = "4W";

#[derive(Clone, Debug)]
pub struct PlannerParams {
    /// Driving time for one kilometer of estimated route.
    pub travel_time_per_km: SignedDuration,
    /// Handover time spent at each stop.
    pub delivery_time_per_shipment: SignedDuration,

    /// Vehicle types tried in this order for every trip.
    pub vehicle_priority: Vec<String>,
    /// Used when no priority type fits; never capacity-checked.
    pub fallback_vehicle_type: String,

    /// Starting budget of every priority vehicle type.
    pub fleet_limits: Vec<(String, Availability)>,
}

impl Default for PlannerParams {
    fn default() -> Self {
        PlannerParams {
            travel_time_per_km: SignedDuration::from_mins(5),
            delivery_time_per_shipment: SignedDuration::from_mins(10),
            vehicle_priority: vec![
                String::from(THREE_WHEELER),
                String::from(ELECTRIC_FOUR_WHEELER),
                String::from(FOUR_WHEELER),
            ],
            fallback_vehicle_type: String::from(FOUR_WHEELER),
            fleet_limits: vec![
                (String::from(THREE_WHEELER), Availability::Limited(50)),
                (String::from(ELECTRIC_FOUR_WHEELER), Availability::Limited(25)),
                (String::from(FOUR_WHEELER), Availability::Unlimited),
            ],
        }
    }
}

impl PlannerParams {
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.travel_time_per_km.is_negative() {
            return Err(ConfigurationError::InvalidParameter {
                name: "travel_time_per_km",
                reason: format!("{} is negative", self.travel_time_per_km),
            });
        }

        if self.delivery_time_per_shipment.is_negative() {
            return Err(ConfigurationError::InvalidParameter {
                name: "delivery_time_per_shipment",
                reason: format!("{} is negative", self.delivery_time_per_shipment),
            });
        }

        if self.fallback_vehicle_type.trim().is_empty() {
            return Err(ConfigurationError::InvalidParameter {
                name: "fallback_vehicle_type",
                reason: String::from("must not be empty"),
            });
        }

        Ok(())
    }

    /// Fresh ledger holding the configured budgets.
    pub fn initial_fleet(&self) -> FleetState {
        FleetState::new(self.fleet_limits.iter().cloned())
    }

    /// Driving time over `distance` plus handover time at every stop. Fails
    /// when the result does not fit a [`SignedDuration`].
    pub fn trip_time(
        &self,
        distance: Kilometers,
        shipments: usize,
    ) -> Result<SignedDuration, ConfigurationError> {
        let out_of_range = |name: &'static str| ConfigurationError::InvalidParameter {
            name,
            reason: format!("trip time over {distance} with {shipments} stops is out of range"),
        };

        let driving = SignedDuration::try_from_secs_f64(
            distance.value() * self.travel_time_per_km.as_secs_f64(),
        )
        .map_err(|_| out_of_range("travel_time_per_km"))?;
        let handover = SignedDuration::try_from_secs_f64(
            shipments as f64 * self.delivery_time_per_shipment.as_secs_f64(),
        )
        .map_err(|_| out_of_range("delivery_time_per_shipment"))?;

        driving
            .checked_add(handover)
            .ok_or_else(|| out_of_range("delivery_time_per_shipment"))
    }
}
