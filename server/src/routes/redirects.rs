//! Permanent redirects from the previous site's URLs.

#[cfg(test)]
#[path = "redirects_test.rs"]
mod redirects_test;

use axum::extract::Path;
use axum::response::Redirect;

pub async fn to_login() -> Redirect {
    Redirect::permanent("/login")
}

pub async fn to_become_host() -> Redirect {
    Redirect::permanent("/become-host")
}

pub async fn to_privacy() -> Redirect {
    Redirect::permanent("/privacy")
}

pub async fn to_terms() -> Redirect {
    Redirect::permanent("/terms")
}

pub async fn to_case_study(Path(slug): Path<String>) -> Redirect {
    Redirect::permanent(&case_study_target(&slug))
}

/// `/case-studies/<slug>` for slug-shaped input, else the list page.
pub(crate) fn case_study_target(slug: &str) -> String {
    let slug = slug.trim().to_ascii_lowercase();
    let slug_shaped = !slug.is_empty() && slug.chars().all(|c| c.is_ascii_alphanumeric() || c == '-');
    if slug_shaped { format!("/case-studies/{slug}") } else { "/case-studies".to_owned() }
}
