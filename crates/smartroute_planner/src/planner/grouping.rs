use tracing::warn;

use crate::{
    error::ConfigurationError,
    problem::{
        kilometers::Kilometers, location::Location, shipment::Shipment,
        vehicle_type::VehicleTypeSpec,
    },
};

/// Largest trip any vehicle type could take. Bounds the grouping pass only;
/// per-type limits are checked later when a vehicle is assigned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroupingBounds {
    max_capacity: usize,
    max_radius: Kilometers,
}

impl GroupingBounds {
    pub fn new(max_capacity: usize, max_radius: Kilometers) -> Result<Self, ConfigurationError> {
        if max_capacity == 0 {
            return Err(ConfigurationError::UndefinedMaximumCapacity);
        }

        if !max_radius.value().is_finite() || max_radius.value() <= 0.0 {
            return Err(ConfigurationError::UndefinedMaximumRadius);
        }

        Ok(GroupingBounds {
            max_capacity,
            max_radius,
        })
    }

    /// Maxima across all types. Unknown capacities and unbounded radii do not
    /// take part.
    pub fn from_vehicle_types(
        vehicle_types: &[VehicleTypeSpec],
    ) -> Result<Self, ConfigurationError> {
        if vehicle_types.is_empty() {
            return Err(ConfigurationError::NoVehicleTypes);
        }

        let max_capacity = vehicle_types
            .iter()
            .filter_map(VehicleTypeSpec::capacity)
            .max()
            .ok_or(ConfigurationError::UndefinedMaximumCapacity)?;

        let max_radius = vehicle_types
            .iter()
            .filter_map(VehicleTypeSpec::max_radius)
            .filter(|radius| radius.value().is_finite())
            .max()
            .ok_or(ConfigurationError::UndefinedMaximumRadius)?;

        GroupingBounds::new(max_capacity, max_radius)
    }

    pub fn max_capacity(&self) -> usize {
        self.max_capacity
    }

    pub fn max_radius(&self) -> Kilometers {
        self.max_radius
    }
}

/// Shipments bundled into one candidate trip, in the order they were taken.
#[derive(Debug, Clone, Default)]
pub struct ShipmentGroup<'a> {
    shipments: Vec<&'a Shipment>,
    store_distance: Kilometers,
}

impl<'a> ShipmentGroup<'a> {
    fn push(&mut self, shipment: &'a Shipment, store_distance: Kilometers) {
        self.shipments.push(shipment);
        self.store_distance += store_distance;
    }

    pub fn shipments(&self) -> &[&'a Shipment] {
        &self.shipments
    }

    pub fn len(&self) -> usize {
        self.shipments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shipments.is_empty()
    }

    /// Sum of every member's distance from the store. This is the budget the
    /// grouping pass checks against the maximum radius, not a route length.
    pub fn store_distance(&self) -> Kilometers {
        self.store_distance
    }

    pub fn locations(&self) -> impl Iterator<Item = &'a Location> + '_ {
        self.shipments.iter().copied().map(Shipment::location)
    }
}

/// Greedy nearest-to-store partition of one window's shipments.
///
/// Shipments are sorted by distance from the store. Each pass scans what is
/// left in that order and takes a shipment while the group is below
/// `max_capacity` and the running sum of store distances stays within
/// `max_radius`. A pass always closes its group, even with budget left.
///
/// A shipment that is farther than `max_radius` on its own cannot join any
/// group; it is emitted alone so nothing is dropped.
pub fn group_shipments<'a>(
    store: &Location,
    shipments: &'a [Shipment],
    bounds: GroupingBounds,
) -> Vec<ShipmentGroup<'a>> {
    let mut pool = shipments
        .iter()
        .map(|shipment| (shipment, shipment.distance_from(store)))
        .collect::<Vec<_>>();
    pool.sort_by(|(_, a), (_, b)| a.cmp(b));

    let mut groups = Vec::new();

    while !pool.is_empty() {
        let mut group = ShipmentGroup::default();
        let mut remaining = Vec::with_capacity(pool.len());

        for (shipment, distance) in pool {
            if group.len() < bounds.max_capacity
                && group.store_distance + distance <= bounds.max_radius
            {
                group.push(shipment, distance);
            } else {
                remaining.push((shipment, distance));
            }
        }

        if group.is_empty() {
            let (shipment, distance) = remaining.remove(0);
            warn!(
                shipment = shipment.external_id(),
                %distance,
                max_radius = %bounds.max_radius,
                "Shipment is beyond the maximum trip radius, planning it alone"
            );
            group.push(shipment, distance);
        }

        groups.push(group);
        pool = remaining;
    }

    groups
}
