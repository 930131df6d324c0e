//! # Ledger Web
//!
//! Server-rendered web shells for Ledger Analytics: a declarative route table,
//! an exact-match path resolver and a layout composer that wraps every view in
//! a persistent shell.
//!
//! ## Modules
//!
//! - [`routing`]: Route table construction, validation and path resolution
//! - [`view`]: View capability and the leaf views of each app shell
//! - [`layout`]: Leptos root layout, metadata, shells and the layout composer
//! - [`app`]: App shells tying a table, a composer and a not-found policy together
//! - [`server`]: HTTP server with Axum
//! - [`config`]: TOML and environment configuration
//!
//! ## Quick Start
//!
//! ```rust
//! use ledger_web::app::{AppShell, Navigation, ShellKind};
//!
//! let app = AppShell::with_defaults(ShellKind::Plots);
//!
//! match app.navigate("/plot") {
//!     Navigation::Page { status, document } => {
//!         assert_eq!(status, 200);
//!         assert!(document.to_html().contains("data-plot"));
//!     }
//!     Navigation::Redirect { location } => panic!("redirected to {}", location),
//! }
//!
//! assert!(!app.resolve("/unknown").is_found());
//! ```

pub mod app;
pub mod config;
pub mod layout;
pub mod logging;
pub mod routing;
pub mod server;
pub mod view;

// Re-export top-level types for convenience
pub use app::{AppShell, Navigation, NotFoundPolicy, ShellKind};

pub use routing::{build_table, resolve, Resolution, RouteEntry, RouteSummary, RouteTable, TableError};

pub use layout::{Document, DocumentMetadata, FontConfig, LayoutComposer, Shell};

pub use view::{ViewComponent, ViewRef};

pub use server::{build_router, serve, AppState, ServerError};

pub use config::{Config, ConfigError, LoadedConfig, LoggingConfig, ServerConfig};
