//! Data Transfer Objects
//!
//! JSON response types for the health and route catalogue endpoints.

use serde::Serialize;

use crate::routing::RouteSummary;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// "healthy" or "unhealthy"
    pub status: String,
    /// App shell being served
    pub shell: String,
    /// Number of routes in the table
    pub routes: usize,
    pub uptime_seconds: u64,
    pub version: String,
}

/// Route catalogue response
#[derive(Debug, Serialize)]
pub struct RoutesResponse {
    pub shell: String,
    /// Entries in declaration order
    pub routes: Vec<RouteSummary>,
}
