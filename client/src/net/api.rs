//! REST client for the booking backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call returns [`ApiError::Unavailable`]; forms only
//! submit from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Calls return `Result<_, ApiError>`. Pages show the `Display` text inline.
//! [`ApiError::Unauthorized`] is only produced for requests that carried a
//! bearer token, and callers route it to the session-expired modal.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Deserialize;

use super::types::{GeoLocation, HostApplication, LoginResponse, VisitPayload};
#[cfg(feature = "hydrate")]
use super::types::{ForgotPasswordRequest, GeoLookup, LoginRequest, ResetPasswordRequest};
use crate::util::storage::SessionStore;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("your session has expired")]
    Unauthorized,
    #[error("{message}")]
    Rejected { status: u16, message: String },
    #[error("request failed: {status}")]
    Status { status: u16 },
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

/// Error body shape used by the backend for 4xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Map a non-2xx response to an [`ApiError`].
///
/// A 401 means "session expired" only when the request was authenticated;
/// on login it is an ordinary credential rejection.
pub(crate) fn error_for_status(status: u16, body: &str, authenticated: bool) -> ApiError {
    if status == 401 && authenticated {
        return ApiError::Unauthorized;
    }
    if (400..500).contains(&status) {
        if let Ok(ErrorBody { message }) = serde_json::from_str::<ErrorBody>(body) {
            if !message.trim().is_empty() {
                return ApiError::Rejected { status, message };
            }
        }
    }
    ApiError::Status { status }
}

pub(crate) fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// HTTP client bound to one backend base URL and session store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiClient {
    base: String,
    geo_url: String,
    store: SessionStore,
}

impl ApiClient {
    #[must_use]
    pub fn new(base: impl Into<String>, geo_url: impl Into<String>, store: SessionStore) -> Self {
        let base = base.into().trim_end_matches('/').to_owned();
        Self { base, geo_url: geo_url.into(), store }
    }

    #[must_use]
    pub fn store(&self) -> SessionStore {
        self.store
    }

    /// Absolute URL for an API path such as `/auth/login`.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base, path.trim_start_matches('/'))
    }

    /// `POST /auth/login`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] for bad credentials, or a transport error.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let body = LoginRequest { email: email.to_owned(), password: password.to_owned() };
            let resp = self.post_json("/auth/login", &body, false).await?;
            resp.json::<LoginResponse>().await.map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email, password);
            Err(ApiError::Unavailable)
        }
    }

    /// `POST /auth/forgot-password`. The backend answers 200 whether or not
    /// the account exists.
    ///
    /// # Errors
    ///
    /// Returns a transport or status error.
    pub async fn request_password_reset(&self, email: &str) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let body = ForgotPasswordRequest { email: email.to_owned() };
            self.post_json("/auth/forgot-password", &body, false).await.map(|_| ())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = email;
            Err(ApiError::Unavailable)
        }
    }

    /// `POST /auth/reset-password` with the token from the emailed link.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] for an expired or reused token.
    pub async fn reset_password(&self, token: &str, password: &str) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let body = ResetPasswordRequest { token: token.to_owned(), password: password.to_owned() };
            self.post_json("/auth/reset-password", &body, false).await.map(|_| ())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, password);
            Err(ApiError::Unavailable)
        }
    }

    /// `POST /hosts/applications`. Sends the bearer token when signed in.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Unauthorized`] when a stored token was rejected.
    pub async fn submit_host_application(&self, application: &HostApplication) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            self.post_json("/hosts/applications", application, true).await.map(|_| ())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = application;
            Err(ApiError::Unavailable)
        }
    }

    /// `POST /analytics/visits`.
    ///
    /// # Errors
    ///
    /// Returns a transport or status error; the tracker logs and drops it.
    pub async fn record_visit(&self, payload: &VisitPayload) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            self.post_json("/analytics/visits", payload, false).await.map(|_| ())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = payload;
            Err(ApiError::Unavailable)
        }
    }

    /// `GET` the configured geo-IP endpoint.
    ///
    /// # Errors
    ///
    /// Returns a transport, status, or decode error.
    pub async fn lookup_geo(&self) -> Result<GeoLocation, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&self.geo_url)
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(ApiError::Status { status: resp.status() });
            }
            let lookup: GeoLookup = resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
            Ok(lookup.into())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    #[cfg(feature = "hydrate")]
    async fn post_json<B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
        with_auth: bool,
    ) -> Result<gloo_net::http::Response, ApiError> {
        let mut request = gloo_net::http::Request::post(&self.endpoint(path));
        let token = if with_auth { self.store.token() } else { None };
        if let Some(token) = &token {
            request = request.header("Authorization", &bearer(token));
        }
        let resp = request
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if resp.ok() {
            return Ok(resp);
        }
        let status = resp.status();
        let text = resp.text().await.unwrap_or_default();
        Err(error_for_status(status, &text, token.is_some()))
    }
}
