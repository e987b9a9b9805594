use axum::{extract::State, Json};
use chrono::Utc;
use serde_json::{json, Value};

use crate::shared::AppState;

/// Liveness probe with process uptime
///
/// GET /health and GET /api/health
pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "timestamp": Utc::now().to_rfc3339(),
        "uptime": state.started_at.elapsed().as_secs_f64(),
    }))
}

/// Service info served at the root path
///
/// GET /
pub async fn service_info() -> Json<Value> {
    Json(json!({
        "name": "AURA Backend API",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running",
    }))
}
