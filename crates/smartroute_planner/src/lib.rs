pub mod error;
pub mod json;
pub mod planner;
pub mod problem;
mod utils;

#[cfg(test)]
pub(crate) mod test_utils;
