use schemars::schema_for;

use crate::json::types;

pub fn generate_input_json_schema() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&schema_for!(types::JsonPlanningInput))
}

pub fn generate_output_json_schema() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&schema_for!(types::JsonTripPlan))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_schema_lists_top_level_fields() {
        let schema: serde_json::Value =
            serde_json::from_str(&generate_input_json_schema().unwrap()).unwrap();

        let properties = schema["properties"].as_object().unwrap();
        for field in ["store", "shipments", "vehicle_types", "fleet", "params"] {
            assert!(properties.contains_key(field), "missing {field}");
        }
    }

    #[test]
    fn test_output_schema_is_generated() {
        let schema = generate_output_json_schema().unwrap();

        assert!(schema.contains("trip_time_minutes"));
    }
}
