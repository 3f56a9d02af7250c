//! Session-expiry signal and login redirect targets.
//!
//! SYSTEM CONTEXT
//! ==============
//! Any authenticated API call that comes back 401 sets `expired`; the
//! `SessionExpiredModal` watches it, clears storage, and sends the visitor to
//! `/login?next=<where they were>`. The login page reads `next` back through
//! [`sanitize_next`] so it can only ever redirect within this site.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::api::ApiError;

/// Whether the expired-session prompt is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub expired: bool,
}

impl SessionState {
    /// Record the outcome of an API call. Returns `true` if it expired the
    /// session.
    pub fn observe(&mut self, err: &ApiError) -> bool {
        if matches!(err, ApiError::Unauthorized) {
            self.expired = true;
        }
        self.expired
    }
}

/// `/login` URL that returns to `current_path` after signing in.
#[must_use]
pub fn login_redirect(current_path: &str) -> String {
    let next = sanitize_next(Some(current_path));
    if next == "/" || next.starts_with("/login") {
        return "/login".to_owned();
    }
    format!("/login?next={}", urlencoding::encode(&next))
}

/// Accept only same-site absolute paths; everything else becomes `/`.
#[must_use]
pub fn sanitize_next(raw: Option<&str>) -> String {
    let Some(raw) = raw.map(str::trim) else {
        return "/".to_owned();
    };
    let same_site = raw.starts_with('/')
        && !raw.starts_with("//")
        && !raw.contains('\\')
        && !raw.contains("://")
        && !raw.chars().any(char::is_control);
    if same_site { raw.to_owned() } else { "/".to_owned() }
}
