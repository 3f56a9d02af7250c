//! Privacy policy and terms of service, rendered from bundled Markdown.

#[cfg(test)]
#[path = "legal_test.rs"]
mod legal_test;

use leptos::prelude::*;
use leptos_meta::Title;
use pulldown_cmark::{Event, Options, Parser, html};

const PRIVACY_MD: &str = include_str!("../../content/privacy.md");
const TERMS_MD: &str = include_str!("../../content/terms.md");

/// Render Markdown to HTML, dropping any raw HTML in the source.
pub(crate) fn render_markdown_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_SMART_PUNCTUATION);

    let parser = Parser::new_ext(markdown, options).filter(|event| !matches!(event, Event::Html(_) | Event::InlineHtml(_)));

    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

#[component]
fn LegalDocument(title: &'static str, markdown: &'static str) -> impl IntoView {
    let body = render_markdown_html(markdown);
    view! {
        <Title text=format!("{title} · Staylane")/>
        <article class="legal-page" inner_html=body></article>
    }
}

#[component]
pub fn PrivacyPage() -> impl IntoView {
    view! { <LegalDocument title="Privacy Policy" markdown=PRIVACY_MD/> }
}

#[component]
pub fn TermsPage() -> impl IntoView {
    view! { <LegalDocument title="Terms of Service" markdown=TERMS_MD/> }
}
