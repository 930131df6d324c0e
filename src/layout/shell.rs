//! Layout Shells
//!
//! Persistent chrome applied to every routed view. A shell has one content
//! slot and renders identically for every route.

use leptos::*;

use super::CONTENT_SLOT_ID;
use crate::routing::RouteTable;

const SLOT_CLASS: &str = "mx-auto max-w-7xl px-4 py-8";
const STACKED_LINK_CLASS: &str = "rounded-md px-3 py-2 text-sm text-gray-300 hover:bg-gray-700";

/// Wraps page content in the app chrome
pub trait Shell: Send + Sync {
    /// Place `content` in the shell's content slot. Runs inside the
    /// rendering runtime.
    fn wrap(&self, content: View) -> View;
}

/// Navigation link derived from a route entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub href: String,
    pub label: String,
}

impl NavLink {
    fn from_table(table: &RouteTable) -> Vec<Self> {
        table
            .iter()
            .map(|e| NavLink {
                href: e.path.clone(),
                label: e.name.clone(),
            })
            .collect()
    }
}

#[component]
fn NavItem(link: NavLink, link_class: &'static str) -> impl IntoView {
    view! { <a href=link.href class=link_class>{link.label}</a> }
}

#[component]
fn ContentSlot(children: Children) -> impl IntoView {
    view! { <main id=CONTENT_SLOT_ID class=SLOT_CLASS>{children()}</main> }
}

/// Stacked layout: top navigation bar above the page body
#[derive(Debug, Clone)]
pub struct StackedLayout {
    brand: String,
    links: Vec<NavLink>,
}

impl StackedLayout {
    pub fn new(brand: impl Into<String>, table: &RouteTable) -> Self {
        Self {
            brand: brand.into(),
            links: NavLink::from_table(table),
        }
    }

    pub fn links(&self) -> &[NavLink] {
        &self.links
    }
}

impl Shell for StackedLayout {
    fn wrap(&self, content: View) -> View {
        let brand = self.brand.clone();
        let links = self
            .links
            .iter()
            .cloned()
            .map(|link| view! { <NavItem link=link link_class=STACKED_LINK_CLASS/> })
            .collect_view();

        view! {
            <div class="min-h-full" data-layout="stacked">
                <nav class="bg-gray-800">
                    <div class="mx-auto flex h-16 max-w-7xl items-center justify-between px-4">
                        <a href="/" class="text-xl font-bold text-white">{brand}</a>
                        <div class="flex items-center space-x-4">{links}</div>
                    </div>
                </nav>
                <ContentSlot>{content}</ContentSlot>
            </div>
        }
        .into_view()
    }
}

/// Router layout: `#app` mount point with router links
#[derive(Debug, Clone)]
pub struct RouterLayout {
    links: Vec<NavLink>,
}

impl RouterLayout {
    pub fn new(table: &RouteTable) -> Self {
        Self {
            links: NavLink::from_table(table),
        }
    }

    pub fn links(&self) -> &[NavLink] {
        &self.links
    }
}

impl Shell for RouterLayout {
    fn wrap(&self, content: View) -> View {
        let links = self
            .links
            .iter()
            .cloned()
            .enumerate()
            .map(|(i, link)| {
                let separator = (i > 0).then_some(" | ");
                view! { {separator} <NavItem link=link link_class="router-link"/> }
            })
            .collect_view();

        view! {
            <div id="app" data-layout="router">
                <nav class="router-nav">{links}</nav>
                <ContentSlot>{content}</ContentSlot>
            </div>
        }
        .into_view()
    }
}
