use fxhash::FxHashMap;

use crate::{
    error::ConfigurationError,
    problem::{location::Location, shipment::Shipment, vehicle_type::VehicleTypeSpec},
};

/// Shipments sharing one time window label, in input order.
#[derive(Debug, Clone)]
pub struct WindowShipments {
    label: String,
    shipments: Vec<Shipment>,
}

impl WindowShipments {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn shipments(&self) -> &[Shipment] {
        &self.shipments
    }
}

pub struct TripPlanningProblem {
    store: Location,
    windows: Vec<WindowShipments>,
    vehicle_types: Vec<VehicleTypeSpec>,
}

impl TripPlanningProblem {
    pub fn store(&self) -> &Location {
        &self.store
    }

    /// Windows in order of first appearance in the input.
    pub fn windows(&self) -> &[WindowShipments] {
        &self.windows
    }

    pub fn vehicle_types(&self) -> &[VehicleTypeSpec] {
        &self.vehicle_types
    }

    pub fn vehicle_type(&self, name: &str) -> Option<&VehicleTypeSpec> {
        self.vehicle_types.iter().find(|spec| spec.name() == name)
    }

    pub fn shipments(&self) -> impl Iterator<Item = &Shipment> {
        self.windows.iter().flat_map(|window| window.shipments.iter())
    }

    pub fn number_of_shipments(&self) -> usize {
        self.windows.iter().map(|window| window.shipments.len()).sum()
    }
}

#[derive(Default)]
pub struct TripPlanningProblemBuilder {
    store: Option<Location>,
    shipments: Vec<Shipment>,
    vehicle_types: Vec<VehicleTypeSpec>,
}

impl TripPlanningProblemBuilder {
    pub fn set_store(&mut self, store: Location) -> &mut TripPlanningProblemBuilder {
        self.store = Some(store);
        self
    }

    pub fn add_shipment(&mut self, shipment: Shipment) -> &mut TripPlanningProblemBuilder {
        self.shipments.push(shipment);
        self
    }

    pub fn set_shipments(&mut self, shipments: Vec<Shipment>) -> &mut TripPlanningProblemBuilder {
        self.shipments = shipments;
        self
    }

    pub fn set_vehicle_types(
        &mut self,
        vehicle_types: Vec<VehicleTypeSpec>,
    ) -> &mut TripPlanningProblemBuilder {
        self.vehicle_types = vehicle_types;
        self
    }

    pub fn build(self) -> Result<TripPlanningProblem, ConfigurationError> {
        let store = self.store.ok_or(ConfigurationError::MissingStore)?;

        let mut windows: Vec<WindowShipments> = Vec::new();
        let mut window_positions: FxHashMap<String, usize> = FxHashMap::default();

        for shipment in self.shipments {
            let position = window_positions.get(shipment.time_window()).copied();

            match position {
                Some(position) => windows[position].shipments.push(shipment),
                None => {
                    window_positions.insert(shipment.time_window().to_owned(), windows.len());
                    windows.push(WindowShipments {
                        label: shipment.time_window().to_owned(),
                        shipments: vec![shipment],
                    });
                }
            }
        }

        Ok(TripPlanningProblem {
            store,
            windows,
            vehicle_types: self.vehicle_types,
        })
    }
}
