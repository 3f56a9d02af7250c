//! Page footer with legal links.

use chrono::Datelike;
use leptos::prelude::*;

use crate::util::dates::today_local;

#[component]
pub fn SiteFooter() -> impl IntoView {
    let year = today_local().year();
    view! {
        <footer class="site-footer">
            <nav class="site-footer__links">
                <a href="/about">"About"</a>
                <a href="/case-studies">"Case studies"</a>
                <a href="/become-host">"Become a host"</a>
                <a href="/privacy">"Privacy"</a>
                <a href="/terms">"Terms"</a>
            </nav>
            <p class="site-footer__copy">{format!("© {year} Staylane. All rights reserved.")}</p>
        </footer>
    }
}
