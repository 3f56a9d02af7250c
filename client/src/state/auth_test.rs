use super::*;

fn user(name: &str) -> User {
    User {
        id: "u1".to_owned(),
        name: name.to_owned(),
        email: "ana@example.com".to_owned(),
        role: "guest".to_owned(),
    }
}

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.loading);
}

#[test]
fn pending_is_loading_without_user() {
    let state = AuthState::pending();
    assert!(state.loading);
    assert!(!state.is_signed_in());
}

// =============================================================
// Signed-in helpers
// =============================================================

#[test]
fn signed_in_stops_loading() {
    let state = AuthState::signed_in(user("Ana Lima"));
    assert!(state.is_signed_in());
    assert!(!state.loading);
}

#[test]
fn greeting_uses_first_name() {
    assert_eq!(AuthState::signed_in(user("Ana Lima")).greeting_name(), Some("Ana".to_owned()));
}

#[test]
fn greeting_falls_back_to_email_for_blank_name() {
    assert_eq!(
        AuthState::signed_in(user("   ")).greeting_name(),
        Some("ana@example.com".to_owned())
    );
}

#[test]
fn greeting_absent_when_signed_out() {
    assert_eq!(AuthState::default().greeting_name(), None);
}

// =============================================================
// Restore from storage
// =============================================================

#[test]
fn restored_needs_token_and_user() {
    assert!(AuthState::restored(Some("tok".to_owned()), Some(user("Ana Silva"))).is_signed_in());
    assert!(!AuthState::restored(None, Some(user("Ana Silva"))).is_signed_in());
    assert!(!AuthState::restored(Some("tok".to_owned()), None).is_signed_in());
}

#[test]
fn restored_is_never_loading() {
    assert!(!AuthState::restored(None, None).loading);
}
