//! Browser glue for the visitor tracker: route-change hook, payload
//! assembly, and the debounced send task.

#[cfg(test)]
#[path = "beacon_test.rs"]
mod beacon_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use super::VisitTracker;
#[cfg(feature = "hydrate")]
use super::{DEBOUNCE_MS, Dispatch, GeoCache};
use crate::config::SiteConfig;
use crate::net::api::ApiClient;
use crate::net::types::{GeoLocation, VisitPayload};

/// Context the browser can tell us about the visit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BrowserInfo {
    pub referrer: Option<String>,
    pub language: Option<String>,
    pub timezone: Option<String>,
    pub screen: Option<String>,
}

impl BrowserInfo {
    /// Read referrer, language, timezone and screen size. Empty outside the
    /// browser.
    #[must_use]
    pub fn collect() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let Some(window) = web_sys::window() else {
                return Self::default();
            };
            let referrer = window.document().map(|d| d.referrer()).filter(|r| !r.is_empty());
            let screen = window
                .screen()
                .ok()
                .and_then(|s| format_screen(s.width().ok()?, s.height().ok()?));
            Self { referrer, language: window.navigator().language(), timezone: browser_timezone(), screen }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::default()
        }
    }
}

#[cfg(feature = "hydrate")]
fn browser_timezone() -> Option<String> {
    let format = js_sys::Intl::DateTimeFormat::new(&js_sys::Array::new(), &js_sys::Object::new());
    js_sys::Reflect::get(&format.resolved_options(), &wasm_bindgen::JsValue::from_str("timeZone"))
        .ok()?
        .as_string()
}

/// `WIDTHxHEIGHT`, or `None` for a zero/negative size.
#[must_use]
pub fn format_screen(width: i32, height: i32) -> Option<String> {
    (width > 0 && height > 0).then(|| format!("{width}x{height}"))
}

#[must_use]
pub fn build_payload(path: &str, browser: BrowserInfo, location: Option<GeoLocation>) -> VisitPayload {
    VisitPayload {
        path: path.to_owned(),
        referrer: browser.referrer,
        language: browser.language,
        timezone: browser.timezone,
        screen: browser.screen,
        location: location.unwrap_or_default(),
    }
}

/// Report every route change. Call once from inside `<Router>`.
pub fn install_visit_tracker(api: ApiClient, config: &SiteConfig) {
    if !config.tracking_enabled {
        log::debug!("visitor tracking disabled by site config");
        return;
    }
    let location = use_location();
    let tracker = VisitTracker::new();

    Effect::new(move || {
        let path = location.pathname.get();
        let ticket = tracker.schedule();

        #[cfg(feature = "hydrate")]
        {
            let tracker = tracker.clone();
            let api = api.clone();
            leptos::task::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(DEBOUNCE_MS).await;
                report(tracker, api, ticket, path).await;
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (ticket, path, &api);
        }
    });
}

#[cfg(feature = "hydrate")]
async fn report(tracker: VisitTracker, api: ApiClient, ticket: u64, path: String) {
    match tracker.begin(ticket, &path) {
        Dispatch::Send => {}
        skipped => {
            log::debug!("visit to {path} not reported: {skipped:?}");
            return;
        }
    }

    let location = resolve_geo(&tracker, &api).await;
    let payload = build_payload(&path, BrowserInfo::collect(), location);
    match api.record_visit(&payload).await {
        Ok(()) => log::debug!("visit reported: {path}"),
        Err(e) => log::warn!("visit beacon failed for {path}: {e}"),
    }
    tracker.finish();
}

#[cfg(feature = "hydrate")]
async fn resolve_geo(tracker: &VisitTracker, api: &ApiClient) -> Option<GeoLocation> {
    match tracker.geo() {
        GeoCache::Resolved(geo) => return Some(geo),
        GeoCache::Unavailable => return None,
        GeoCache::Unknown => {}
    }
    match api.lookup_geo().await {
        Ok(geo) => {
            tracker.set_geo(GeoCache::Resolved(geo.clone()));
            Some(geo)
        }
        Err(e) => {
            log::info!("geo lookup failed, reporting without location: {e}");
            tracker.set_geo(GeoCache::Unavailable);
            None
        }
    }
}
