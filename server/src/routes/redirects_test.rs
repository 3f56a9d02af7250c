use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

use super::*;

fn location(resp: &Response) -> &str {
    resp.headers().get(header::LOCATION).and_then(|v| v.to_str().ok()).unwrap_or_default()
}

// =============================================================================
// Handlers
// =============================================================================

#[tokio::test]
async fn signin_goes_to_login() {
    let resp = to_login().await.into_response();
    assert_eq!(resp.status(), StatusCode::PERMANENT_REDIRECT);
    assert_eq!(location(&resp), "/login");
}

#[tokio::test]
async fn host_goes_to_become_host() {
    let resp = to_become_host().await.into_response();
    assert_eq!(location(&resp), "/become-host");
}

#[tokio::test]
async fn legal_pages_move_to_short_paths() {
    assert_eq!(location(&to_privacy().await.into_response()), "/privacy");
    assert_eq!(location(&to_terms().await.into_response()), "/terms");
}

#[tokio::test]
async fn case_study_keeps_slug() {
    let resp = to_case_study(Path("porto-riverside-loft".to_owned())).await.into_response();
    assert_eq!(resp.status(), StatusCode::PERMANENT_REDIRECT);
    assert_eq!(location(&resp), "/case-studies/porto-riverside-loft");
}

// =============================================================================
// case_study_target
// =============================================================================

#[test]
fn target_lowercases_slug() {
    assert_eq!(case_study_target("Sintra-Hillside-Cabin"), "/case-studies/sintra-hillside-cabin");
}

#[test]
fn odd_slugs_fall_back_to_list() {
    for bad in ["", "   ", "../admin", "a b", "x?y=1", "//evil.com"] {
        assert_eq!(case_study_target(bad), "/case-studies", "{bad:?}");
    }
}
