//! Site-wide runtime configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server builds a [`SiteConfig`] from its environment and embeds it in
//! the HTML shell as `<script id="site-config" type="application/json">`.
//! The hydrated client reads the same element back, so both render passes
//! agree on API endpoints and feature toggles without a rebuild.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

/// DOM id of the embedded config script.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

pub const DEFAULT_API_BASE: &str = "https://api.staylane.com/v1";
pub const DEFAULT_GEO_URL: &str = "https://ipapi.co/json/";
pub const DEFAULT_WHATSAPP_MESSAGE: &str = "Hi Staylane! I have a question about listing my property.";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Backend REST base URL, without trailing slash.
    pub api_base: String,
    /// Geo-IP lookup endpoint used by the visitor tracker.
    pub geo_url: String,
    /// WhatsApp contact number; the bubble is hidden when it has no digits.
    pub whatsapp_number: String,
    pub whatsapp_message: String,
    pub tracking_enabled: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_owned(),
            geo_url: DEFAULT_GEO_URL.to_owned(),
            whatsapp_number: String::new(),
            whatsapp_message: DEFAULT_WHATSAPP_MESSAGE.to_owned(),
            tracking_enabled: true,
        }
    }
}

impl SiteConfig {
    /// Normalize user-supplied values (trailing slashes, whitespace).
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.api_base = self.api_base.trim().trim_end_matches('/').to_owned();
        self.geo_url = self.geo_url.trim().to_owned();
        self.whatsapp_number = self.whatsapp_number.trim().to_owned();
        self
    }

    /// JSON body for the embedded `<script>` tag.
    ///
    /// `</` is escaped so a value can never terminate the script element.
    #[must_use]
    pub fn to_script_json(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|_| "{}".to_owned())
            .replace("</", "<\\/")
    }

    /// Parse the embedded JSON, falling back to defaults for anything missing.
    #[must_use]
    pub fn from_script_json(raw: &str) -> Self {
        match serde_json::from_str::<Self>(raw) {
            Ok(config) => config.normalized(),
            Err(e) => {
                log::warn!("site config unreadable, using defaults: {e}");
                Self::default()
            }
        }
    }

    /// Read the config embedded by the server into the current document.
    #[must_use]
    pub fn from_document() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let raw = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
                .and_then(|el| el.text_content());
            match raw {
                Some(raw) => Self::from_script_json(&raw),
                None => Self::default(),
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::default()
        }
    }

    /// The config provided by the composition root, or defaults.
    #[must_use]
    pub fn current() -> Self {
        use_context::<Self>().unwrap_or_default()
    }
}
