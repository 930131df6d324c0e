//! Page Rendering
//!
//! Fallback handler: every path not claimed by another route is treated as a
//! navigation request for the app shell.

use axum::{
    extract::State,
    http::{header, Method, StatusCode, Uri},
    response::{Html, IntoResponse, Redirect, Response},
};
use std::sync::Arc;

use crate::app::Navigation;
use crate::server::state::AppState;

/// GET *
pub async fn render_page(
    State(state): State<Arc<AppState>>,
    method: Method,
    uri: Uri,
) -> Response {
    if method != Method::GET && method != Method::HEAD {
        return (
            StatusCode::METHOD_NOT_ALLOWED,
            [(header::ALLOW, "GET, HEAD")],
        )
            .into_response();
    }

    match state.app.navigate(uri.path()) {
        Navigation::Page { status, document } => {
            let status = StatusCode::from_u16(status).unwrap_or(StatusCode::OK);
            (status, Html(document.to_html())).into_response()
        }
        Navigation::Redirect { location } => Redirect::temporary(&location).into_response(),
    }
}
