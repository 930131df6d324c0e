//! View Components
//!
//! Opaque renderable units referenced by route entries. The router and the
//! layout composer only ever call [`ViewRef::render`]; they never look at what
//! a view is. Any zero-argument Leptos component is a view.

pub mod pages;
pub mod plots;

use std::fmt;
use std::sync::Arc;

use leptos::IntoView;

/// A renderable unit of page content
pub trait ViewComponent: Send + Sync {
    /// Produce the content for this view
    fn render(&self) -> leptos::View;
}

impl<F, V> ViewComponent for F
where
    F: Fn() -> V + Send + Sync,
    V: IntoView,
{
    fn render(&self) -> leptos::View {
        self().into_view()
    }
}

/// Shared handle to a view, tagged with a stable component name
///
/// Two handles compare equal when they carry the same component name, which
/// lets route tables be compared by value without inspecting the views.
#[derive(Clone)]
pub struct ViewRef {
    name: &'static str,
    view: Arc<dyn ViewComponent>,
}

impl ViewRef {
    pub fn new(name: &'static str, view: impl ViewComponent + 'static) -> Self {
        Self {
            name,
            view: Arc::new(view),
        }
    }

    /// Component name, e.g. `HomePage`
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Render the view. Must run inside a reactive runtime, e.g. under
    /// `leptos::ssr::render_to_string`.
    pub fn render(&self) -> leptos::View {
        self.view.render()
    }
}

impl PartialEq for ViewRef {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for ViewRef {}

impl fmt::Debug for ViewRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ViewRef").field(&self.name).finish()
    }
}
