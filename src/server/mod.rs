//! Ledger Web HTTP Server
//!
//! Serves one app shell over HTTP, built with Axum.
//!
//! # Endpoints
//!
//! ## Pages
//! - `GET /*` - Resolve the path against the route table and render the
//!   document (404 with an empty content slot, or a redirect, on a miss)
//!
//! Operations endpoints live under `/_ledger`, a prefix route tables may not
//! use, so they never shadow a page.
//!
//! ## Route catalogue
//! - `GET /_ledger/api/routes` - List route entries
//! - `GET /_ledger/api/routes/:name` - Look up an entry by name
//!
//! ## Health
//! - `GET /_ledger/health/live` - Liveness check
//! - `GET /_ledger/health` - Full health status
//!
//! # Example
//!
//! ```rust,ignore
//! use ledger_web::app::{AppShell, ShellKind};
//! use ledger_web::config::ServerConfig;
//! use ledger_web::server::{serve, AppState};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let state = AppState::new(AppShell::with_defaults(ShellKind::Plots));
//!     serve(state, &ServerConfig::default()).await?;
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ServerError, ServerResult};
pub use state::AppState;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::routing::OPS_PREFIX;

/// Build the router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/routes", get(routes::catalog::list_routes))
        .route("/routes/:name", get(routes::catalog::get_route));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/", get(routes::health::full_health));

    let ops_routes = Router::new()
        .nest("/api", api_routes)
        .nest("/health", health_routes);

    let shared_state = Arc::new(state);

    Router::new()
        .nest(OPS_PREFIX, ops_routes)
        .fallback(routes::pages::render_page)
        .layer(TraceLayer::new_for_http())
        .with_state(shared_state)
}

/// Start the server. Fails before binding if the route table is invalid.
pub async fn serve(state: AppState, config: &ServerConfig) -> Result<(), ServerError> {
    if let Err(e) = state.app.validate() {
        tracing::error!(error = %e, shell = %state.app.kind(), "Route table failed validation");
        return Err(e.into());
    }

    tracing::info!(
        shell = %state.app.kind(),
        routes = state.app.table().len(),
        not_found = ?state.app.not_found_policy(),
        "Route table ready"
    );

    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Ledger web listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServerError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Ledger web shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{AppShell, NotFoundPolicy, ShellKind};
    use crate::layout::{Document, DocumentMetadata, FontConfig};
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        response::Response,
    };
    use tower::util::ServiceExt;

    fn create_test_app(kind: ShellKind) -> Router {
        build_router(AppState::new(AppShell::with_defaults(kind)))
    }

    async fn send_get(app: Router, uri: &str) -> Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_string(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_health_live() {
        let response = send_get(create_test_app(ShellKind::Plots), "/_ledger/health/live").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_full() {
        let response = send_get(create_test_app(ShellKind::Plots), "/_ledger/health").await;
        assert_eq!(response.status(), StatusCode::OK);

        let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["shell"], "plots");
        assert_eq!(json["routes"], 2);
    }

    #[tokio::test]
    async fn test_render_root() {
        let response = send_get(create_test_app(ShellKind::Plots), "/").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/html"));

        let html = body_string(response).await;
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"id="app""#));
        assert!(html.contains(r#"href="/plot""#));
        assert!(html.contains("example plot"));
    }

    #[tokio::test]
    async fn test_render_plot() {
        let response = send_get(create_test_app(ShellKind::Plots), "/plot").await;
        assert_eq!(response.status(), StatusCode::OK);

        let html = body_string(response).await;
        assert!(html.contains(r#"id="data-plot""#));
        assert_eq!(html.matches("<nav").count(), 1);
    }

    #[tokio::test]
    async fn test_render_unknown_path_blank() {
        let response = send_get(create_test_app(ShellKind::Pages), "/snl-tool").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let html = body_string(response).await;
        let doc = Document::new(html.trim_start_matches("<!DOCTYPE html>"));
        assert_eq!(doc.count_tag("nav"), 1);
        assert!(doc.is_content_empty());
    }

    #[tokio::test]
    async fn test_legacy_ops_paths_are_pages() {
        for path in ["/health", "/health/live", "/api/routes", "/api/routes/Home"] {
            let response = send_get(create_test_app(ShellKind::Plots), path).await;
            assert_eq!(response.status(), StatusCode::NOT_FOUND, "{}", path);
            assert!(response.headers()[header::CONTENT_TYPE]
                .to_str()
                .unwrap()
                .starts_with("text/html"));
        }
    }

    #[tokio::test]
    async fn test_head_request_renders_page_status() {
        for (path, status) in [("/plot", StatusCode::OK), ("/unknown", StatusCode::NOT_FOUND)] {
            let response = create_test_app(ShellKind::Plots)
                .oneshot(
                    Request::builder()
                        .method("HEAD")
                        .uri(path)
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();

            assert_eq!(response.status(), status, "{}", path);
            assert!(response.headers()[header::CONTENT_TYPE]
                .to_str()
                .unwrap()
                .starts_with("text/html"));
        }
    }

    #[tokio::test]
    async fn test_render_unknown_path_redirect() {
        let app = AppShell::new(
            ShellKind::Plots,
            DocumentMetadata::default(),
            FontConfig::default(),
            NotFoundPolicy::RedirectToRoot,
        );
        let response = send_get(build_router(AppState::new(app)), "/unknown").await;

        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(response.headers()[header::LOCATION], "/");
    }

    #[tokio::test]
    async fn test_query_string_is_not_part_of_path() {
        let response = send_get(create_test_app(ShellKind::Plots), "/plot?series=paid").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_post_to_page_not_allowed() {
        let response = create_test_app(ShellKind::Plots)
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/plot")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_list_routes() {
        let response = send_get(create_test_app(ShellKind::Plots), "/_ledger/api/routes").await;
        assert_eq!(response.status(), StatusCode::OK);

        let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(json["shell"], "plots");
        assert_eq!(json["routes"][0]["path"], "/");
        assert_eq!(json["routes"][1]["name"], "DataPlot");
        assert_eq!(json["routes"][1]["component"], "DataPlotPage");
    }

    #[tokio::test]
    async fn test_get_route_by_name() {
        let response = send_get(create_test_app(ShellKind::Plots), "/_ledger/api/routes/DataPlot").await;
        assert_eq!(response.status(), StatusCode::OK);

        let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(json["path"], "/plot");
    }

    #[tokio::test]
    async fn test_get_route_by_name_missing() {
        let response = send_get(create_test_app(ShellKind::Pages), "/_ledger/api/routes/DataPlot").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(json["error"]["code"], "ROUTE_NOT_FOUND");
        assert!(json["request_id"].is_string());
    }
}
