//! Views for the pages app shell.

use leptos::*;

/// Landing page with a link into the SNL tool
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="home">
            <h1>"Welcome to Ledger Analytics"</h1>
            <p>
                "Navigate to the " <a href="/snl-tool">"SNL Tool"</a> " page."
            </p>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::ssr::render_to_string;

    #[test]
    fn test_home_links_to_snl_tool() {
        let html = render_to_string(HomePage).to_string();

        assert!(html.contains(r#"href="/snl-tool""#));
        assert!(html.contains("SNL Tool"));
        assert!(html.contains("Welcome to Ledger Analytics"));
    }

    #[test]
    fn test_home_does_not_open_its_own_main() {
        let html = render_to_string(HomePage).to_string();

        assert!(html.contains("<section"));
        assert!(!html.contains("<main"));
    }
}
