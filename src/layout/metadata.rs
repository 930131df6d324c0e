//! Document Metadata
//!
//! Static head configuration applied once per document. Values are passed
//! through as configured.

use leptos::*;
use serde::{Deserialize, Serialize};

const GLOBAL_STYLESHEET: &str = "/globals.css";
const FONTS_BASE_URL: &str = "https://fonts.googleapis.com/css2";

/// Title, description and icon of every rendered page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default = "default_icon")]
    pub icon: String,
}

fn default_title() -> String {
    "Ledger Analytics".to_string()
}

fn default_icon() -> String {
    "/favicon.png".to_string()
}

impl Default for DocumentMetadata {
    fn default() -> Self {
        Self {
            title: default_title(),
            description: String::new(),
            icon: default_icon(),
        }
    }
}

/// Web font applied to the document body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontConfig {
    #[serde(default = "default_family")]
    pub family: String,

    #[serde(default = "default_subsets")]
    pub subsets: Vec<String>,
}

fn default_family() -> String {
    "Inter".to_string()
}

fn default_subsets() -> Vec<String> {
    vec!["latin".to_string()]
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            family: default_family(),
            subsets: default_subsets(),
        }
    }
}

impl FontConfig {
    /// CSS class selecting this font, e.g. `font-inter`
    pub fn class_name(&self) -> String {
        let slug: String = self
            .family
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-")
            .to_lowercase();
        format!("font-{}", slug)
    }

    pub fn stylesheet_url(&self) -> String {
        format!(
            "{}?family={}&display=swap",
            FONTS_BASE_URL,
            self.family.split_whitespace().collect::<Vec<_>>().join("+")
        )
    }
}

/// `<head>` of every document: charset, title, description, icon and
/// stylesheets
#[component]
pub fn DocumentHead(metadata: DocumentMetadata, font: FontConfig) -> impl IntoView {
    let DocumentMetadata {
        title,
        description,
        icon,
    } = metadata;
    let font_stylesheet = font.stylesheet_url();

    view! {
        <head>
            <meta charset="utf-8"/>
            <meta name="viewport" content="width=device-width, initial-scale=1"/>
            <title>{title}</title>
            <meta name="description" content=description/>
            <link rel="icon" href=icon/>
            <link rel="stylesheet" href=font_stylesheet/>
            <link rel="stylesheet" href=GLOBAL_STYLESHEET/>
        </head>
    }
}

/// Join class names, skipping empty ones
pub fn class_names(names: &[&str]) -> String {
    names
        .iter()
        .map(|n| n.trim())
        .filter(|n| !n.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let meta = DocumentMetadata::default();
        assert_eq!(meta.title, "Ledger Analytics");
        assert_eq!(meta.description, "");
        assert_eq!(meta.icon, "/favicon.png");
    }

    #[test]
    fn test_font_class_and_url() {
        let font = FontConfig::default();
        assert_eq!(font.class_name(), "font-inter");
        assert_eq!(
            font.stylesheet_url(),
            "https://fonts.googleapis.com/css2?family=Inter&display=swap"
        );

        let font = FontConfig {
            family: "Roboto Mono".to_string(),
            subsets: vec![],
        };
        assert_eq!(font.class_name(), "font-roboto-mono");
        assert!(font.stylesheet_url().contains("family=Roboto+Mono"));
    }

    #[test]
    fn test_head_passes_metadata_through() {
        let metadata = DocumentMetadata {
            title: "Reserving Dashboard".to_string(),
            description: "Loss triangles".to_string(),
            icon: "/i.png".to_string(),
        };
        let html = leptos::ssr::render_to_string(move || {
            view! { <DocumentHead metadata=metadata font=FontConfig::default()/> }
        })
        .to_string();

        assert!(html.contains("<title"));
        assert!(html.contains("Reserving Dashboard"));
        assert!(html.contains(r#"content="Loss triangles""#));
        assert!(html.contains(r#"href="/i.png""#));
        assert!(html.contains(r#"href="/globals.css""#));
        assert!(html.contains("family=Inter"));
    }

    #[test]
    fn test_head_escapes_metadata() {
        let metadata = DocumentMetadata {
            title: "P&L <draft>".to_string(),
            ..DocumentMetadata::default()
        };
        let html = leptos::ssr::render_to_string(move || {
            view! { <DocumentHead metadata=metadata font=FontConfig::default()/> }
        })
        .to_string();

        assert!(html.contains("P&amp;L"));
        assert!(html.contains("&lt;draft"));
        assert!(!html.contains("<draft>"));
    }

    #[test]
    fn test_class_names() {
        assert_eq!(class_names(&["font-inter", "", " h-full "]), "font-inter h-full");
        assert_eq!(class_names(&[]), "");
    }

    #[test]
    fn test_partial_metadata_deserializes_with_defaults() {
        let meta: DocumentMetadata = toml::from_str(r#"description = "Reserving""#).unwrap();
        assert_eq!(meta.title, "Ledger Analytics");
        assert_eq!(meta.description, "Reserving");
    }
}
