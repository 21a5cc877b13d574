use std::sync::Arc;

use axum::{Json, extract::State};
use jiff::Timestamp;
use schemars::JsonSchema;
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize, JsonSchema)]
pub struct HealthResponse {
    status: String,
    message: String,
    started_at: Timestamp,
}

pub async fn health_handler(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: String::from("OK"),
        message: String::from("Demoucron engine is running"),
        started_at: state.started_at,
    })
}

#[cfg(test)]
mod tests {
    use demoucron_engine::solver::solver_params::SolverParams;

    use super::*;

    #[tokio::test]
    async fn test_health_handler() {
        let state = Arc::new(AppState::new(SolverParams::default()));

        let Json(response) = health_handler(State(state.clone())).await;

        assert_eq!(response.status, "OK");
        assert_eq!(response.started_at, state.started_at);
    }
}
