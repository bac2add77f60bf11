//! Axum application setup.

use std::net::SocketAddr;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use super::handlers;
use super::state::AppState;

/// Create the Axum router with all routes.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::intro))
        .route("/health", get(handlers::health))
        .route("/v1/validate", post(handlers::create_validation_task))
        .route("/v1/validate/core", post(handlers::validate_both))
        .route("/v1/validate/structure", post(handlers::validate_structure))
        .route("/v1/validate/schema", post(handlers::validate_schema))
        .route("/v1/validate/:task_id", get(handlers::get_validation_task))
        .layer(cors)
        .with_state(state)
}

/// Start the HTTP server.
pub async fn run_server(state: AppState, addr: SocketAddr) -> Result<(), Box<dyn std::error::Error>> {
    let app = create_router(state);

    tracing::info!(%addr, "validation API listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
