//! Route table construction and lookup.
//!
//! # Responsibilities
//! - Hold the ordered path → view mapping for one app shell
//! - Build the compiled-in tables at startup
//! - Look up entries by name
//! - Validate path syntax and uniqueness
//!
//! # Design Decisions
//! - Tables are plain ordered data; matching lives in the resolver
//! - Immutable after construction, shared behind `Arc`
//! - Validation is a separate step so `build_table` stays infallible

use std::collections::HashSet;

use serde::Serialize;

use super::error::TableError;
use crate::app::ShellKind;
use crate::view::{pages, plots, ViewRef};

/// Prefix of the health and catalogue endpoints. Page routes may not use it.
pub const OPS_PREFIX: &str = "/_ledger";

/// True when `path` is the operations prefix or lies beneath it
pub fn is_reserved_path(path: &str) -> bool {
    path.strip_prefix(OPS_PREFIX)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}

/// One row of a route table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: String,
    pub name: String,
    pub component: ViewRef,
}

impl RouteEntry {
    pub fn new(path: impl Into<String>, name: impl Into<String>, component: ViewRef) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            component,
        }
    }

    pub fn summary(&self) -> RouteSummary {
        RouteSummary {
            path: self.path.clone(),
            name: self.name.clone(),
            component: self.component.name().to_string(),
        }
    }
}

/// Serializable view of a route entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteSummary {
    pub path: String,
    pub name: String,
    pub component: String,
}

/// Ordered, immutable sequence of route entries
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    pub fn new(entries: Vec<RouteEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RouteEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.path.as_str())
    }

    /// First entry with the given name
    pub fn by_name(&self, name: &str) -> Option<&RouteEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Path of the named entry, for building links
    pub fn url_for(&self, name: &str) -> Option<&str> {
        self.by_name(name).map(|e| e.path.as_str())
    }

    pub fn summaries(&self) -> Vec<RouteSummary> {
        self.entries.iter().map(RouteEntry::summary).collect()
    }

    /// Check that every path is absolute, outside [`OPS_PREFIX`], and that
    /// paths and names are unique
    pub fn validate(&self) -> Result<(), TableError> {
        let mut paths = HashSet::new();
        let mut names = HashSet::new();

        for entry in &self.entries {
            if !entry.path.starts_with('/') {
                return Err(TableError::RelativePath(entry.path.clone()));
            }
            if is_reserved_path(&entry.path) {
                return Err(TableError::ReservedPath(entry.path.clone()));
            }
            if !paths.insert(entry.path.as_str()) {
                return Err(TableError::DuplicatePath(entry.path.clone()));
            }
            if !names.insert(entry.name.as_str()) {
                return Err(TableError::DuplicateName(entry.name.clone()));
            }
        }

        Ok(())
    }
}

impl<'a> IntoIterator for &'a RouteTable {
    type Item = &'a RouteEntry;
    type IntoIter = std::slice::Iter<'a, RouteEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Build the compiled-in route table for an app shell
pub fn build_table(kind: ShellKind) -> RouteTable {
    let entries = match kind {
        ShellKind::Pages => vec![RouteEntry::new(
            "/",
            "Home",
            ViewRef::new("HomePage", pages::HomePage),
        )],
        ShellKind::Plots => vec![
            RouteEntry::new("/", "Home", ViewRef::new("HomePage", plots::HomePage)),
            RouteEntry::new(
                "/plot",
                "DataPlot",
                ViewRef::new("DataPlotPage", plots::DataPlotPage),
            ),
        ],
    };

    RouteTable::new(entries)
}
