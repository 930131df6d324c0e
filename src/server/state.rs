//! Application State
//!
//! Shared state accessible by all handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use std::sync::Arc;
use std::time::Instant;

use crate::app::AppShell;

/// Shared application state for all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    /// The app shell being served; immutable after startup
    pub app: Arc<AppShell>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    pub fn new(app: AppShell) -> Self {
        Self {
            app: Arc::new(app),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
