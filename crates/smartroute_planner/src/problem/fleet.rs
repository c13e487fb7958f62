use fxhash::FxHashMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Remaining number of trips a vehicle type may still take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    Limited(usize),
    Unlimited,
}

impl Availability {
    pub fn is_available(&self) -> bool {
        match self {
            Availability::Limited(remaining) => *remaining > 0,
            Availability::Unlimited => true,
        }
    }
}

impl From<Option<usize>> for Availability {
    fn from(value: Option<usize>) -> Self {
        match value {
            Some(count) => Availability::Limited(count),
            None => Availability::Unlimited,
        }
    }
}

/// Remaining budget per priority vehicle type for a single planning run.
///
/// Counts only go down. The fallback vehicle type is never tracked here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FleetState {
    remaining: FxHashMap<String, Availability>,
}

impl FleetState {
    pub fn new<I, S>(limits: I) -> Self
    where
        I: IntoIterator<Item = (S, Availability)>,
        S: Into<String>,
    {
        FleetState {
            remaining: limits
                .into_iter()
                .map(|(name, availability)| (name.into(), availability))
                .collect(),
        }
    }

    pub fn tracks(&self, vehicle_type: &str) -> bool {
        self.remaining.contains_key(vehicle_type)
    }

    pub fn remaining(&self, vehicle_type: &str) -> Option<Availability> {
        self.remaining.get(vehicle_type).copied()
    }

    pub fn is_available(&self, vehicle_type: &str) -> bool {
        self.remaining
            .get(vehicle_type)
            .is_some_and(Availability::is_available)
    }

    /// Consumes one trip of `vehicle_type`. Returns `false`, leaving the state
    /// untouched, when the type is untracked or exhausted.
    pub(crate) fn take(&mut self, vehicle_type: &str) -> bool {
        match self.remaining.get_mut(vehicle_type) {
            Some(Availability::Limited(remaining)) if *remaining > 0 => {
                *remaining -= 1;
                true
            }
            Some(Availability::Unlimited) => true,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_decrements_until_exhausted() {
        let mut fleet = FleetState::new([("3W", Availability::Limited(2))]);

        assert!(fleet.take("3W"));
        assert!(fleet.take("3W"));
        assert!(!fleet.take("3W"));

        assert_eq!(fleet.remaining("3W"), Some(Availability::Limited(0)));
        assert!(!fleet.is_available("3W"));
    }

    #[test]
    fn test_unlimited_is_never_consumed() {
        let mut fleet = FleetState::new([("4W", Availability::Unlimited)]);

        for _ in 0..1000 {
            assert!(fleet.take("4W"));
        }

        assert_eq!(fleet.remaining("4W"), Some(Availability::Unlimited));
    }

    #[test]
    fn test_untracked_type_is_unavailable() {
        let mut fleet = FleetState::new([("3W", Availability::Limited(1))]);

        assert!(!fleet.tracks("bike"));
        assert!(!fleet.is_available("bike"));
        assert!(!fleet.take("bike"));
    }

    #[test]
    fn test_availability_from_option() {
        assert_eq!(Availability::from(Some(3)), Availability::Limited(3));
        assert_eq!(Availability::from(None), Availability::Unlimited);
    }
}
