//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Seeded from `SessionStore` on hydration and updated by the login form and
//! the session-expired modal. The nav bar reads it to choose between
//! "Log in" and the signed-in greeting.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    /// `true` until the stored session has been read in the browser.
    pub loading: bool,
}

impl AuthState {
    /// Initial state before hydration has looked at storage.
    #[must_use]
    pub fn pending() -> Self {
        Self { user: None, loading: true }
    }

    #[must_use]
    pub fn signed_in(user: User) -> Self {
        Self { user: Some(user), loading: false }
    }

    /// State rebuilt from storage. A user without a token is treated as
    /// signed out.
    #[must_use]
    pub fn restored(token: Option<String>, user: Option<User>) -> Self {
        match (token, user) {
            (Some(_), Some(user)) => Self::signed_in(user),
            _ => Self::default(),
        }
    }

    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    /// First name for the nav greeting.
    #[must_use]
    pub fn greeting_name(&self) -> Option<String> {
        let user = self.user.as_ref()?;
        let first = user.name.split_whitespace().next().unwrap_or(&user.email);
        Some(first.to_owned())
    }
}
