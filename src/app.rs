//! App Shells
//!
//! An app shell is one independent front end: its route table, its layout
//! composer and its policy for paths that match nothing. The two shells never
//! share navigation state.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::layout::{
    Document, DocumentMetadata, FontConfig, LayoutComposer, RouterLayout, StackedLayout,
};
use crate::routing::{build_table, resolve, Resolution, RouteTable, TableError};

/// Which app shell to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShellKind {
    /// File-based pages under a root layout
    Pages,
    /// Explicit route table with a data plot view
    Plots,
}

impl ShellKind {
    pub const ALL: [ShellKind; 2] = [ShellKind::Pages, ShellKind::Plots];

    pub fn as_str(&self) -> &'static str {
        match self {
            ShellKind::Pages => "pages",
            ShellKind::Plots => "plots",
        }
    }
}

impl fmt::Display for ShellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShellKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pages" => Ok(ShellKind::Pages),
            "plots" => Ok(ShellKind::Plots),
            other => Err(format!("Unknown shell: {}", other)),
        }
    }
}

/// What to do with a path that matches no route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NotFoundPolicy {
    /// Render the shell with an empty content slot (404)
    #[default]
    Blank,
    /// Redirect to the home route
    RedirectToRoot,
}

impl FromStr for NotFoundPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "blank" => Ok(NotFoundPolicy::Blank),
            "redirect-to-root" | "redirect" => Ok(NotFoundPolicy::RedirectToRoot),
            other => Err(format!("Unknown not-found policy: {}", other)),
        }
    }
}

/// Result of handling one navigation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Page { status: u16, document: Document },
    Redirect { location: String },
}

/// Name of the entry used as the redirect target
const HOME_ROUTE: &str = "Home";

/// One front end: table, composer and not-found policy
#[derive(Debug, Clone)]
pub struct AppShell {
    kind: ShellKind,
    table: RouteTable,
    composer: LayoutComposer,
    not_found: NotFoundPolicy,
}

impl AppShell {
    /// Build a shell from its compiled-in route table
    pub fn new(
        kind: ShellKind,
        metadata: DocumentMetadata,
        font: FontConfig,
        not_found: NotFoundPolicy,
    ) -> Self {
        let table = build_table(kind);
        let composer = match kind {
            ShellKind::Pages => {
                let shell = StackedLayout::new(metadata.title.clone(), &table);
                LayoutComposer::new(shell, metadata, font)
            }
            ShellKind::Plots => LayoutComposer::new(RouterLayout::new(&table), metadata, font),
        };

        Self {
            kind,
            table,
            composer,
            not_found,
        }
    }

    /// Shell with default metadata and a blank not-found slot
    pub fn with_defaults(kind: ShellKind) -> Self {
        Self::new(
            kind,
            DocumentMetadata::default(),
            FontConfig::default(),
            NotFoundPolicy::default(),
        )
    }

    pub fn kind(&self) -> ShellKind {
        self.kind
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn composer(&self) -> &LayoutComposer {
        &self.composer
    }

    pub fn not_found_policy(&self) -> NotFoundPolicy {
        self.not_found
    }

    pub fn validate(&self) -> Result<(), TableError> {
        self.table.validate()
    }

    pub fn resolve(&self, path: &str) -> Resolution<'_> {
        resolve(path, &self.table)
    }

    /// Resolve and compose one navigation request
    pub fn navigate(&self, path: &str) -> Navigation {
        let resolution = self.resolve(path);

        if !resolution.is_found() {
            if let Some(location) = self.redirect_target(path) {
                tracing::debug!(path, %location, "Redirecting unmatched path");
                return Navigation::Redirect { location };
            }
        }

        let status = if resolution.is_found() { 200 } else { 404 };
        Navigation::Page {
            status,
            document: self.composer.render(&resolution),
        }
    }

    fn redirect_target(&self, path: &str) -> Option<String> {
        if self.not_found != NotFoundPolicy::RedirectToRoot {
            return None;
        }
        let home = self
            .table
            .by_name(HOME_ROUTE)
            .or_else(|| self.table.entries().first())?;

        (home.path != path).then(|| home.path.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(nav: Navigation) -> (u16, Document) {
        match nav {
            Navigation::Page { status, document } => (status, document),
            Navigation::Redirect { location } => panic!("unexpected redirect to {}", location),
        }
    }

    #[test]
    fn test_shell_kind_parsing() {
        assert_eq!("pages".parse::<ShellKind>(), Ok(ShellKind::Pages));
        assert_eq!("PLOTS".parse::<ShellKind>(), Ok(ShellKind::Plots));
        assert!("vue".parse::<ShellKind>().is_err());
        assert_eq!(ShellKind::Plots.to_string(), "plots");
    }

    #[test]
    fn test_policy_parsing() {
        assert_eq!("blank".parse::<NotFoundPolicy>(), Ok(NotFoundPolicy::Blank));
        assert_eq!(
            "redirect-to-root".parse::<NotFoundPolicy>(),
            Ok(NotFoundPolicy::RedirectToRoot)
        );
        assert!("404".parse::<NotFoundPolicy>().is_err());
    }

    #[test]
    fn test_navigate_found() {
        let app = AppShell::with_defaults(ShellKind::Plots);
        let (status, doc) = page(app.navigate("/plot"));

        assert_eq!(status, 200);
        assert!(doc.content_html().unwrap().contains(r#"id="data-plot""#));
    }

    #[test]
    fn test_navigate_not_found_blank() {
        let app = AppShell::with_defaults(ShellKind::Plots);
        let (status, doc) = page(app.navigate("/unknown"));

        assert_eq!(status, 404);
        assert_eq!(doc.count_tag("nav"), 1);
        assert!(doc.is_content_empty());
    }

    #[test]
    fn test_navigate_redirects_to_root() {
        let app = AppShell::new(
            ShellKind::Pages,
            DocumentMetadata::default(),
            FontConfig::default(),
            NotFoundPolicy::RedirectToRoot,
        );

        assert_eq!(
            app.navigate("/snl-tool"),
            Navigation::Redirect {
                location: "/".to_string()
            }
        );
        assert_eq!(page(app.navigate("/")).0, 200);
    }

    #[test]
    fn test_pages_title_is_brand() {
        let app = AppShell::with_defaults(ShellKind::Pages);
        let (_, doc) = page(app.navigate("/"));
        let html = doc.to_html();
        let brand_link = &html[html.find(r#"href="/""#).unwrap()..];
        assert!(brand_link.contains("Ledger Analytics"));
    }

    #[test]
    fn test_shells_are_independent() {
        let pages = AppShell::with_defaults(ShellKind::Pages);
        let plots = AppShell::with_defaults(ShellKind::Plots);

        assert!(!pages.resolve("/plot").is_found());
        assert!(plots.resolve("/plot").is_found());
        assert!(pages.validate().is_ok());
        assert!(plots.validate().is_ok());
    }

    #[test]
    fn test_navigate_from_many_threads() {
        let app = std::sync::Arc::new(AppShell::with_defaults(ShellKind::Plots));
        let expected = page(app.navigate("/plot")).1;

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let app = std::sync::Arc::clone(&app);
                std::thread::spawn(move || {
                    let (status, doc) = page(app.navigate("/plot"));
                    let (miss_status, _) = page(app.navigate("/nowhere"));
                    (status, miss_status, doc)
                })
            })
            .collect();

        for handle in handles {
            let (status, miss_status, doc) = handle.join().unwrap();
            assert_eq!(status, 200);
            assert_eq!(miss_status, 404);
            assert_eq!(doc, expected);
        }
    }
}
