use serde_json::Value;
use tracing::warn;

use crate::problem::kilometers::Kilometers;

/// Numbers and numeric strings; anything else is `None`.
fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// Missing or malformed capacities become `None` and are logged.
/// Fractional capacities are floored.
pub(crate) fn coerce_capacity(vehicle_type: &str, value: &Value) -> Option<usize> {
    match as_number(value) {
        Some(capacity) if capacity.is_finite() && capacity >= 0.0 => Some(capacity.floor() as usize),
        _ => {
            warn!(
                vehicle_type,
                value = %value,
                "Shipment capacity is not a number, vehicle type is excluded from capacity checks"
            );
            None
        }
    }
}

/// `None` means unbounded. A missing or infinite radius is unbounded without
/// notice; a malformed one is logged.
pub(crate) fn coerce_radius(vehicle_type: &str, value: &Value) -> Option<Kilometers> {
    if value.is_null() {
        return None;
    }

    match as_number(value) {
        Some(radius) if radius.is_finite() => Some(Kilometers::new(radius)),
        Some(_) => None,
        None => {
            warn!(
                vehicle_type,
                value = %value,
                "Max trip radius is not a number, treating it as unbounded"
            );
            None
        }
    }
}

pub(crate) fn coerce_identifier(value: &Value) -> Option<String> {
    match value {
        Value::String(text) if !text.trim().is_empty() => Some(text.trim().to_owned()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_capacity_coercion() {
        assert_eq!(coerce_capacity("3W", &json!(5)), Some(5));
        assert_eq!(coerce_capacity("3W", &json!(5.9)), Some(5));
        assert_eq!(coerce_capacity("3W", &json!(" 12 ")), Some(12));
        assert_eq!(coerce_capacity("3W", &json!("many")), None);
        assert_eq!(coerce_capacity("3W", &json!(null)), None);
        assert_eq!(coerce_capacity("3W", &json!(-2)), None);
        assert_eq!(coerce_capacity("3W", &json!("inf")), None);
    }

    #[test]
    fn test_radius_coercion() {
        assert_eq!(coerce_radius("3W", &json!(15)), Some(Kilometers::new(15.0)));
        assert_eq!(coerce_radius("3W", &json!("7.5")), Some(Kilometers::new(7.5)));
        assert_eq!(coerce_radius("4W", &json!(null)), None);
        assert_eq!(coerce_radius("4W", &json!("")), None);
        assert_eq!(coerce_radius("4W", &json!("NaN")), None);
        assert_eq!(coerce_radius("4W", &json!("unlimited")), None);
    }

    #[test]
    fn test_identifier_coercion() {
        assert_eq!(coerce_identifier(&json!("S-1 ")), Some(String::from("S-1")));
        assert_eq!(coerce_identifier(&json!(1042)), Some(String::from("1042")));
        assert_eq!(coerce_identifier(&json!("")), None);
        assert_eq!(coerce_identifier(&json!(null)), None);
        assert_eq!(coerce_identifier(&json!([1])), None);
    }
}
