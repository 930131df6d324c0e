//! Layout Composer
//!
//! Turns a [`Resolution`] into a full [`Document`]: the resolved view (or an
//! empty slot on a miss) inside the shell, inside the root `<html>` layout.

use std::sync::Arc;

use leptos::ssr::render_to_string;
use leptos::*;

use super::document::Document;
use super::metadata::{class_names, DocumentHead, DocumentMetadata, FontConfig};
use super::shell::Shell;
use crate::routing::Resolution;
use crate::view::ViewRef;

/// `<html>` root: head from the metadata, font class on the body
#[component]
pub fn RootLayout(
    metadata: DocumentMetadata,
    font: FontConfig,
    children: Children,
) -> impl IntoView {
    let body_class = class_names(&[font.class_name().as_str(), "h-full"]);

    view! {
        <html lang="en" class="h-full">
            <DocumentHead metadata=metadata font=font/>
            <body class=body_class>{children()}</body>
        </html>
    }
}

/// Composes routed views into documents
#[derive(Clone)]
pub struct LayoutComposer {
    shell: Arc<dyn Shell>,
    metadata: DocumentMetadata,
    font: FontConfig,
}

impl LayoutComposer {
    pub fn new(shell: impl Shell + 'static, metadata: DocumentMetadata, font: FontConfig) -> Self {
        Self {
            shell: Arc::new(shell),
            metadata,
            font,
        }
    }

    pub fn metadata(&self) -> &DocumentMetadata {
        &self.metadata
    }

    /// Render a resolution. A miss yields the shell with an empty content slot.
    pub fn render(&self, resolution: &Resolution<'_>) -> Document {
        self.document(resolution.entry().map(|entry| entry.component.clone()))
    }

    /// Wrap a view, or nothing, in the shell and root layout
    pub fn document(&self, content: Option<ViewRef>) -> Document {
        let shell = Arc::clone(&self.shell);
        let metadata = self.metadata.clone();
        let font = self.font.clone();

        let html = render_to_string(move || {
            let content = content.map_or_else(|| ().into_view(), |view| view.render());
            view! {
                <RootLayout metadata=metadata font=font>
                    {shell.wrap(content)}
                </RootLayout>
            }
        });

        Document::new(html.to_string())
    }
}

impl std::fmt::Debug for LayoutComposer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayoutComposer")
            .field("metadata", &self.metadata)
            .field("font", &self.font)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::ShellKind;
    use crate::layout::StackedLayout;
    use crate::routing::{build_table, resolve};

    fn composer() -> LayoutComposer {
        let table = build_table(ShellKind::Pages);
        LayoutComposer::new(
            StackedLayout::new("Ledger Analytics", &table),
            DocumentMetadata::default(),
            FontConfig::default(),
        )
    }

    #[test]
    fn test_render_home_nests_view_in_shell() {
        let table = build_table(ShellKind::Pages);
        let doc = composer().render(&resolve("/", &table));

        assert_eq!(doc.count_tag("nav"), 1);
        assert_eq!(doc.count_tag("body"), 1);
        assert_eq!(doc.count_tag("main"), 1);

        let slot = doc.content_html().unwrap();
        assert!(slot.contains("Welcome to Ledger Analytics"));
        assert!(slot.contains(r#"href="/snl-tool""#));
    }

    #[test]
    fn test_render_not_found_leaves_slot_empty() {
        let table = build_table(ShellKind::Pages);
        let doc = composer().render(&resolve("/snl-tool", &table));

        assert_eq!(doc.count_tag("nav"), 1);
        assert!(doc.is_content_empty());
    }

    #[test]
    fn test_document_root_layout() {
        let html = composer().document(None).to_html();

        assert!(html.starts_with("<!DOCTYPE html><html"));
        assert!(html.contains(r#"lang="en""#));
        assert!(html.contains(r#"class="font-inter h-full""#));
        assert!(html.contains("<title"));
        assert!(html.contains("Ledger Analytics"));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let table = build_table(ShellKind::Pages);
        let c = composer();
        assert_eq!(c.render(&resolve("/", &table)), c.render(&resolve("/", &table)));
    }
}
