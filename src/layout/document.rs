//! Rendered Documents
//!
//! The output of the layout composer: the server-rendered `<html>` root as
//! produced by Leptos, plus read-only queries over it used by handlers and
//! tests.

use crate::layout::CONTENT_SLOT_ID;

const DOCTYPE: &str = "<!DOCTYPE html>";

/// A complete page: the `<html>` root and everything under it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    root: String,
}

impl Document {
    /// Wrap the rendered `<html>` element
    pub fn new(root: impl Into<String>) -> Self {
        Self { root: root.into() }
    }

    /// Markup of the `<html>` element, without the doctype
    pub fn root_html(&self) -> &str {
        &self.root
    }

    /// Markup inside the content slot, if the shell exposes one
    pub fn content_html(&self) -> Option<&str> {
        content_slot_html(&self.root)
    }

    /// True when the content slot exists and carries no markup beyond
    /// hydration comments
    pub fn is_content_empty(&self) -> bool {
        self.content_html()
            .map(|inner| strip_comments(inner).trim().is_empty())
            .unwrap_or(false)
    }

    /// Number of opening tags named `tag`
    pub fn count_tag(&self, tag: &str) -> usize {
        count_tag(&self.root, tag)
    }

    pub fn to_html(&self) -> String {
        format!("{}{}", DOCTYPE, self.root)
    }
}

/// Inner markup of the `<main id="content">` slot
pub fn content_slot_html(html: &str) -> Option<&str> {
    let marker = format!("id=\"{}\"", CONTENT_SLOT_ID);
    let attr_at = html.find(&marker)?;
    let open_end = attr_at + html[attr_at..].find('>')? + 1;
    let close_at = open_end + html[open_end..].find("</main>")?;
    Some(&html[open_end..close_at])
}

fn count_tag(html: &str, tag: &str) -> usize {
    let open = format!("<{}", tag);
    html.match_indices(&open)
        .filter(|(at, _)| {
            matches!(
                html[at + open.len()..].chars().next(),
                Some(' ' | '>' | '/')
            )
        })
        .count()
}

fn strip_comments(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut rest = html;
    while let Some(start) = rest.find("<!--") {
        out.push_str(&rest[..start]);
        match rest[start..].find("-->") {
            Some(end) => rest = &rest[start + end + 3..],
            None => {
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}
