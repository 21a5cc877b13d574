use std::sync::Arc;

use axum::{Json, extract::State};
use demoucron_engine::json::types::{JsonProcessRequest, JsonSolution};
use schemars::JsonSchema;
use serde::Serialize;
use tracing::{info, warn};

use crate::{error::ApiError, extract::ApiJson, state::AppState};

#[derive(Debug, Serialize, JsonSchema)]
pub struct ProcessResponse {
    success: bool,
    results: JsonSolution,
    message: String,
}

pub async fn post_handler(
    State(state): State<Arc<AppState>>,
    ApiJson(body): ApiJson<JsonProcessRequest>,
) -> Result<Json<ProcessResponse>, ApiError> {
    let params = state.solver_params;
    let mode = body.mode;

    let solved = tokio::task::spawn_blocking(move || {
        body.solve(params)
            .map(|solution| JsonSolution::from(&solution))
    })
    .await
    .map_err(anyhow::Error::from)?;

    let results = solved.inspect_err(|error| warn!("Rejected matrix: {error}"))?;

    info!(
        n = results.n,
        %mode,
        has_path = results.path.is_some(),
        "Processed matrix"
    );

    Ok(Json(ProcessResponse {
        success: true,
        results,
        message: String::from("Success"),
    }))
}
