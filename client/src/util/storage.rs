//! Browser `localStorage` client for the signed-in session.
//!
//! SYSTEM CONTEXT
//! ==============
//! One [`SessionStore`] is built by `App` and handed out through context, so
//! pages and the API client share the same keys without reaching for a global.
//! Every method is a no-op (or `None`) outside the browser, which keeps SSR
//! rendering deterministic.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::net::types::User;

pub const TOKEN_KEY: &str = "staylane_token";
pub const USER_KEY: &str = "staylane_user";

/// Handle to the persisted auth token and user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionStore {
    token_key: &'static str,
    user_key: &'static str,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(TOKEN_KEY, USER_KEY)
    }
}

impl SessionStore {
    #[must_use]
    pub const fn new(token_key: &'static str, user_key: &'static str) -> Self {
        Self { token_key, user_key }
    }

    /// Stored bearer token, if any.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        load_raw(self.token_key).filter(|t| !t.is_empty())
    }

    /// Stored user, if any.
    #[must_use]
    pub fn user(&self) -> Option<User> {
        load_json(self.user_key)
    }

    /// Persist a fresh login.
    pub fn save(&self, token: &str, user: &User) {
        save_raw(self.token_key, token);
        save_json(self.user_key, user);
    }

    /// Forget the session (logout, expiry).
    pub fn clear(&self) {
        remove(self.token_key);
        remove(self.user_key);
    }
}

/// Load a JSON value from `localStorage` for `key`.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    let raw = load_raw(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("discarding unreadable {key} from storage: {e}");
            remove(key);
            None
        }
    }
}

/// Save a JSON value to `localStorage` for `key`.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(raw) => save_raw(key, &raw),
        Err(e) => log::warn!("could not serialize {key} for storage: {e}"),
    }
}

fn load_raw(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

fn save_raw(key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        if storage.set_item(key, value).is_err() {
            log::warn!("localStorage rejected write for {key}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

fn remove(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_is_empty_outside_the_browser() {
        let store = SessionStore::default();
        assert_eq!(store.token(), None);
        assert_eq!(store.user(), None);
    }

    #[test]
    fn save_and_clear_are_callable_without_a_browser() {
        let store = SessionStore::new("t", "u");
        let user = User {
            id: "u1".to_owned(),
            name: "Ana".to_owned(),
            email: "ana@example.com".to_owned(),
            role: "guest".to_owned(),
        };
        store.save("tok", &user);
        store.clear();
        assert_eq!(store.token(), None);
    }

    #[test]
    fn load_json_is_none_without_a_browser() {
        assert_eq!(load_json::<Vec<String>>("anything"), None);
    }
}
