use crate::problem::kilometers::Kilometers;

/// Capacity and reach of one vehicle class.
///
/// `capacity` is `None` when the loaded value was missing or malformed: such a
/// type is left out of the maximum capacity and can never be picked from the
/// priority list. `max_radius` is `None` when the type has no radius limit.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleTypeSpec {
    name: String,
    capacity: Option<usize>,
    max_radius: Option<Kilometers>,
}

impl VehicleTypeSpec {
    pub fn new(name: String, capacity: Option<usize>, max_radius: Option<Kilometers>) -> Self {
        VehicleTypeSpec {
            name,
            capacity,
            max_radius,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    pub fn max_radius(&self) -> Option<Kilometers> {
        self.max_radius
    }

    /// Whether one trip of `shipments` stops over `distance` fits this type.
    pub fn can_serve(&self, shipments: usize, distance: Kilometers) -> bool {
        self.capacity.is_some_and(|capacity| shipments <= capacity)
            && self.max_radius.is_none_or(|radius| distance <= radius)
    }
}
