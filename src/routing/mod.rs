//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Navigation request (path string)
//!     → resolver.rs (scan table in declaration order)
//!     → Return: Found(&RouteEntry) or NotFound
//!
//! Table construction (at startup):
//!     compiled-in literal list
//!     → build_table(shell kind)
//!     → validate (absolute, outside the ops prefix, unique paths and names)
//!     → share immutably behind Arc
//! ```
//!
//! # Design Decisions
//! - Tables built once, immutable at runtime
//! - Exact string matching only
//! - Deterministic: same input always matches same route
//! - First match wins (declaration order)
//! - A miss is a value, not an error

pub mod error;
pub mod resolver;
pub mod table;

pub use error::TableError;
pub use resolver::{resolve, Resolution};
pub use table::{build_table, is_reserved_path, RouteEntry, RouteSummary, RouteTable, OPS_PREFIX};
