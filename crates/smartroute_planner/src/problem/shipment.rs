use crate::problem::{kilometers::Kilometers, location::Location};

#[derive(Debug, Clone, PartialEq)]
pub struct Shipment {
    external_id: String,
    location: Location,
    time_window: String,
}

impl Shipment {
    pub fn new(external_id: String, location: Location, time_window: String) -> Self {
        Shipment {
            external_id,
            location,
            time_window,
        }
    }

    pub fn external_id(&self) -> &str {
        &self.external_id
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Raw time window label, e.g. `09:00:00-12:00:00`.
    pub fn time_window(&self) -> &str {
        &self.time_window
    }

    pub fn distance_from(&self, store: &Location) -> Kilometers {
        store.haversine_distance(&self.location)
    }
}
