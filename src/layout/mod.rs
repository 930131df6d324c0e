//! Layout Composition
//!
//! Everything between a resolved route and the final HTML document:
//!
//! - [`document`]: the rendered page and queries over it
//! - [`metadata`]: head configuration (title, description, icon, font)
//! - [`shell`]: persistent chrome wrapped around every view
//! - [`composer`]: renders a resolution through the shell and root layout

pub mod composer;
pub mod document;
pub mod metadata;
pub mod shell;

pub use composer::{LayoutComposer, RootLayout};
pub use document::Document;
pub use metadata::{class_names, DocumentHead, DocumentMetadata, FontConfig};
pub use shell::{NavLink, RouterLayout, Shell, StackedLayout};

/// `id` of the element that receives the routed view
pub const CONTENT_SLOT_ID: &str = "content";
