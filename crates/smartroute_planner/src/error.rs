use thiserror::Error;

use crate::problem::time_window::TimeWindowError;

#[derive(Debug, Error)]
pub enum PlanningError {
    #[error("invalid time window: {0}")]
    Parse(#[from] TimeWindowError),

    #[error("invalid configuration: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("shipment #{index} is invalid: {reason}")]
    InvalidShipment { index: usize, reason: String },
}

/// Inputs that make the utilization ratios or the vehicle priority undefined.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigurationError {
    #[error("no vehicle types are loaded")]
    NoVehicleTypes,

    #[error("the maximum shipment capacity across vehicle types is zero or undefined")]
    UndefinedMaximumCapacity,

    #[error("the maximum trip radius across vehicle types is zero or undefined")]
    UndefinedMaximumRadius,

    #[error("priority vehicle type '{0}' is not among the loaded vehicle types")]
    UnknownPriorityVehicleType(String),

    #[error("priority vehicle type '{0}' has no fleet limit")]
    MissingFleetLimit(String),

    #[error("store location is missing")]
    MissingStore,

    #[error("store coordinates ({latitude}, {longitude}) are out of range")]
    InvalidStoreLocation { latitude: f64, longitude: f64 },

    #[error("parameter '{name}' is invalid: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}
