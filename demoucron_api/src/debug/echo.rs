use axum::Json;
use schemars::JsonSchema;
use serde::Serialize;
use serde_json::Value;

use crate::extract::ApiJson;

/// Describes what the service received, to debug clients that send
/// malformed matrices.
#[derive(Serialize, JsonSchema)]
pub struct EchoResponse {
    received_data: Value,
    data_type: &'static str,
    matrix_type: Option<&'static str>,
    row_lengths: Option<Vec<Option<usize>>>,
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

pub async fn echo_handler(ApiJson(body): ApiJson<Value>) -> Json<EchoResponse> {
    let matrix = body.get("matrix");

    let row_lengths = matrix.and_then(Value::as_array).map(|rows| {
        rows.iter()
            .map(|row| row.as_array().map(Vec::len))
            .collect()
    });

    Json(EchoResponse {
        data_type: json_type(&body),
        matrix_type: matrix.map(json_type),
        row_lengths,
        received_data: body,
    })
}
