//! Service banner and health endpoints.

use axum::Json;
use serde_json::{json, Value};

/// GET / - service banner.
pub async fn intro() -> &'static str {
    tracing::debug!("request at root endpoint");
    "tabqc API entry point"
}

/// GET /health - liveness probe.
pub async fn health() -> Json<Value> {
    tracing::debug!("health check endpoint called");
    Json(json!({"status": 200, "message": "Service online"}))
}
