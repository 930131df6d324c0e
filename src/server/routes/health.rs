//! Health Routes
//!
//! - GET /_ledger/health/live - Liveness check (process is alive)
//! - GET /_ledger/health - Full health status

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::server::dto::HealthResponse;
use crate::server::state::AppState;

/// GET /_ledger/health/live
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /_ledger/health
///
/// Reports unhealthy if the route table fails validation.
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let status = match state.app.validate() {
        Ok(()) => "healthy",
        Err(_) => "unhealthy",
    };

    Json(HealthResponse {
        status: status.to_string(),
        shell: state.app.kind().to_string(),
        routes: state.app.table().len(),
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
