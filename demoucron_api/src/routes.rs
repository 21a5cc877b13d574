use std::sync::Arc;

use aide::axum::{
    ApiRouter,
    routing::{get, post},
};

use crate::{
    debug::echo::echo_handler, health::get_health::health_handler,
    process::post_handler::post_handler, state::AppState,
};

pub fn api_routes(state: Arc<AppState>) -> ApiRouter {
    aide::generate::infer_responses(true);
    let router = ApiRouter::new()
        .api_route("/process", post(post_handler))
        .api_route("/health", get(health_handler))
        .api_route("/test", post(echo_handler))
        .with_state(state);

    aide::generate::infer_responses(false);

    router
}
