//! Route Catalogue
//!
//! - GET /_ledger/api/routes - All route entries in declaration order
//! - GET /_ledger/api/routes/:name - One entry by name

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::routing::RouteSummary;
use crate::server::dto::RoutesResponse;
use crate::server::error::{ServerError, ServerResult};
use crate::server::state::AppState;

/// GET /_ledger/api/routes
pub async fn list_routes(State(state): State<Arc<AppState>>) -> Json<RoutesResponse> {
    Json(RoutesResponse {
        shell: state.app.kind().to_string(),
        routes: state.app.table().summaries(),
    })
}

/// GET /_ledger/api/routes/:name
pub async fn get_route(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> ServerResult<Json<RouteSummary>> {
    state
        .app
        .table()
        .by_name(&name)
        .map(|entry| Json(entry.summary()))
        .ok_or(ServerError::RouteNotFound(name))
}
