//! Route table error types
//!
//! Construction defects in a route table. These are found by
//! [`RouteTable::validate`](super::RouteTable::validate), never while resolving.

use thiserror::Error;

/// Defects in a route table literal
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// Route path does not begin with `/`
    #[error("Route path is not absolute: {0:?}")]
    RelativePath(String),

    /// Two entries share a path
    #[error("Duplicate route path: {0}")]
    DuplicatePath(String),

    /// Route path falls under the operations prefix served by the HTTP layer
    #[error("Route path is reserved for operations endpoints: {0}")]
    ReservedPath(String),

    /// Two entries share a name
    #[error("Duplicate route name: {0}")]
    DuplicateName(String),
}
