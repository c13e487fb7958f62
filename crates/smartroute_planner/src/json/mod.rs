mod coerce;
pub mod loader;
pub mod schema;
pub mod types;
