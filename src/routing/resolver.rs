//! Path resolution.
//!
//! # Responsibilities
//! - Match a requested path against a route table
//! - Return the matched entry or an explicit `NotFound`
//!
//! # Design Decisions
//! - Pure function of `(path, table)`, no shared state
//! - Exact, case-sensitive comparison; no trimming or decoding
//! - O(n) scan in declaration order, first match wins

use super::table::{RouteEntry, RouteTable};

/// Outcome of resolving a path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<'a> {
    Found(&'a RouteEntry),
    NotFound { path: String },
}

impl<'a> Resolution<'a> {
    pub fn entry(&self) -> Option<&'a RouteEntry> {
        match self {
            Resolution::Found(entry) => Some(entry),
            Resolution::NotFound { .. } => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Resolution::Found(_))
    }
}

/// Resolve `path` against `table`
pub fn resolve<'a>(path: &str, table: &'a RouteTable) -> Resolution<'a> {
    match table.iter().find(|entry| entry.path == path) {
        Some(entry) => {
            tracing::debug!(path, route = %entry.name, "Resolved route");
            Resolution::Found(entry)
        }
        None => {
            tracing::debug!(path, "No route matched");
            Resolution::NotFound {
                path: path.to_string(),
            }
        }
    }
}
