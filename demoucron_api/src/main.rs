mod config;
mod debug;
mod docs;
mod error;
mod extract;
mod health;
mod process;
mod routes;
mod state;

use std::sync::Arc;

use aide::openapi::OpenApi;
use aide::transform::TransformOpenApi;
use axum::http::Method;
use axum::{Extension, serve};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tracing::{Level, info};

use crate::config::ApiConfig;
use crate::docs::{API_TITLE, docs_routes};
use crate::routes::api_routes;
use crate::state::AppState;

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

const OPENAPI_OUTPUT: &str = "schemas/openapi.json";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::from_filename("./.env.local").ok();
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();
    aide::generate::on_error(|error| tracing::error!("{}", error));
    aide::generate::extract_schemas(true);

    let config = ApiConfig::from_env()?;
    info!(
        no_edge = %config.solver_params.no_edge,
        max_vertices = ?config.solver_params.max_vertices,
        "Loaded configuration"
    );

    let state = Arc::new(AppState::new(config.solver_params));

    let cors_layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_origin(Any)
        .allow_headers(Any);

    let mut api = OpenApi::default();

    let app: axum::Router = aide::axum::ApiRouter::new()
        .nest_api_service("/docs", docs_routes())
        .nest_api_service("/api", api_routes(state))
        .finish_api_with(&mut api, api_docs);

    if std::env::args().any(|a| a == "--generate-openapi") {
        std::fs::create_dir_all("schemas")?;
        std::fs::write(OPENAPI_OUTPUT, serde_json::to_string_pretty(&api)?)?;
        info!("OpenAPI document written to {OPENAPI_OUTPUT}");
        return Ok(());
    }

    let app = app
        .layer(ServiceBuilder::new().layer(cors_layer))
        .layer(Extension(Arc::new(api)));

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    info!("Demoucron API listening on {}", config.bind_address);

    serve(listener, app).await?;

    Ok(())
}

fn api_docs(api: TransformOpenApi) -> TransformOpenApi {
    api.title(API_TITLE)
}
