//! Fallback for unknown routes.

use leptos::prelude::*;
use leptos_meta::Title;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
        response.set_status(http::StatusCode::NOT_FOUND);
    }

    view! {
        <Title text="Page not found · Staylane"/>
        <section class="not-found">
            <h1>"We couldn't find that page"</h1>
            <p>"The link may be out of date, or the page may have moved."</p>
            <a class="button" href="/">"Back to home"</a>
        </section>
    }
}
