//! Server configuration parsed from environment variables.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read once at startup (after `.env` is loaded). The `site` half is handed
//! to the Leptos shell and embedded in every page for the browser; the rest
//! only concerns the host process.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;

use client::config::SiteConfig;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_SITE_DIR: &str = "../site";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{key} must be a port number, got {value:?}")]
    InvalidPort { key: &'static str, value: String },
    #[error("{key} must be an http(s) URL, got {value:?}")]
    InvalidUrl { key: &'static str, value: String },
    #[error("{key} must be one of 1/true/yes/on or 0/false/no/off, got {value:?}")]
    InvalidBool { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Static files served for paths the app does not route.
    pub site_dir: PathBuf,
    pub site: SiteConfig,
}

impl ServerConfig {
    /// Build typed config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `SITE_DIR`: default `../site`
    /// - `STAYLANE_API_BASE`, `STAYLANE_GEO_URL`: http(s) URLs
    /// - `STAYLANE_WHATSAPP_NUMBER`: bubble hidden when unset
    /// - `STAYLANE_TRACKING`: boolean, default on
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is set but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Self::from_env`] with an injectable variable source.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is set but unparseable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let port = match get("PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort { key: "PORT", value: raw })?,
            None => DEFAULT_PORT,
        };
        let site_dir = get("SITE_DIR").map_or_else(default_site_dir, PathBuf::from);

        let defaults = SiteConfig::default();
        let site = SiteConfig {
            api_base: url_or(get("STAYLANE_API_BASE"), "STAYLANE_API_BASE", defaults.api_base)?,
            geo_url: url_or(get("STAYLANE_GEO_URL"), "STAYLANE_GEO_URL", defaults.geo_url)?,
            whatsapp_number: get("STAYLANE_WHATSAPP_NUMBER").unwrap_or(defaults.whatsapp_number),
            whatsapp_message: get("STAYLANE_WHATSAPP_MESSAGE").unwrap_or(defaults.whatsapp_message),
            tracking_enabled: match get("STAYLANE_TRACKING") {
                Some(raw) => {
                    parse_bool(&raw).ok_or(ConfigError::InvalidBool { key: "STAYLANE_TRACKING", value: raw })?
                }
                None => defaults.tracking_enabled,
            },
        }
        .normalized();

        Ok(Self { port, site_dir, site })
    }
}

fn default_site_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_SITE_DIR)
}

fn url_or(raw: Option<String>, key: &'static str, default: String) -> Result<String, ConfigError> {
    match raw {
        Some(url) if url.starts_with("https://") || url.starts_with("http://") => Ok(url),
        Some(url) => Err(ConfigError::InvalidUrl { key, value: url }),
        None => Ok(default),
    }
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
