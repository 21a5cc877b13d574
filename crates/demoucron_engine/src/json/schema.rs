use schemars::schema_for;
use serde_json::json;

use crate::json::types;

pub fn generate_json_schema() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&json!({
        "request": schema_for!(types::JsonProcessRequest),
        "solution": schema_for!(types::JsonSolution),
    }))
}
