use tracing::debug;

use crate::{
    error::ConfigurationError,
    planner::planner_params::PlannerParams,
    problem::{fleet::FleetState, kilometers::Kilometers, vehicle_type::VehicleTypeSpec},
};

/// Picks a vehicle type for each trip from a fixed priority list.
///
/// The first priority type with budget left in the [`FleetState`] whose
/// capacity and radius fit the trip is taken, consuming one unit of its
/// budget. When none fits, the fallback type is returned and the fleet is left
/// untouched. Results therefore depend on call order: the same trip can get a
/// different type once a budget runs out.
pub struct VehicleAssigner<'a> {
    priority: Vec<&'a VehicleTypeSpec>,
    fallback: &'a str,
}

impl<'a> VehicleAssigner<'a> {
    pub fn new(
        vehicle_types: &'a [VehicleTypeSpec],
        params: &'a PlannerParams,
    ) -> Result<Self, ConfigurationError> {
        let priority = params
            .vehicle_priority
            .iter()
            .map(|name| {
                vehicle_types
                    .iter()
                    .find(|spec| spec.name() == name)
                    .ok_or_else(|| ConfigurationError::UnknownPriorityVehicleType(name.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(VehicleAssigner {
            priority,
            fallback: &params.fallback_vehicle_type,
        })
    }

    /// Every priority type must have a budget in `fleet`.
    pub fn check_fleet(&self, fleet: &FleetState) -> Result<(), ConfigurationError> {
        match self.priority.iter().find(|spec| !fleet.tracks(spec.name())) {
            Some(spec) => Err(ConfigurationError::MissingFleetLimit(spec.name().to_owned())),
            None => Ok(()),
        }
    }

    pub fn assign(
        &self,
        shipment_count: usize,
        distance: Kilometers,
        fleet: &mut FleetState,
    ) -> &'a str {
        for spec in &self.priority {
            if fleet.is_available(spec.name()) && spec.can_serve(shipment_count, distance) {
                fleet.take(spec.name());
                return spec.name();
            }
        }

        debug!(
            shipment_count,
            %distance,
            fallback = self.fallback,
            "No priority vehicle type available for trip"
        );

        self.fallback
    }
}
