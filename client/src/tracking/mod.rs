//! Visitor tracking beacon.
//!
//! DESIGN
//! ======
//! Every route change schedules a report. Reports are debounced
//! ([`DEBOUNCE_MS`]): each trigger bumps a generation counter and only the
//! task holding the latest generation fires. A fire is then dropped if a
//! report is already in flight or if the path was already reported in this
//! page session. At most one request is ever outstanding.
//!
//! TRADE-OFFS
//! ==========
//! Tracking is best-effort: dropped triggers are not queued and failed
//! requests are logged, not retried. A path is marked reported when its
//! request starts, so a failed report is never repeated either.

pub mod beacon;

#[cfg(test)]
#[path = "tracker_test.rs"]
mod tracker_test;

use std::collections::HashSet;
use std::sync::{Arc, Mutex, PoisonError};

use crate::net::types::GeoLocation;

/// Quiet period after the last trigger before a report fires.
pub const DEBOUNCE_MS: u32 = 200;

/// Outcome of a debounced fire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dispatch {
    /// Send the report now; call [`TrackerState::finish`] when it settles.
    Send,
    /// A newer trigger arrived during the debounce window.
    Superseded,
    /// Another report is still outstanding.
    InFlight,
    /// This path was already reported.
    Duplicate,
}

/// Cached geo lookup; fetched at most once per page session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum GeoCache {
    #[default]
    Unknown,
    Resolved(GeoLocation),
    Unavailable,
}

#[derive(Debug, Default)]
pub struct TrackerState {
    generation: u64,
    in_flight: bool,
    reported: HashSet<String>,
    geo: GeoCache,
}

impl TrackerState {
    /// Register a trigger and return its debounce ticket.
    pub fn schedule(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    /// Decide whether the fire for `ticket` should report `path`.
    pub fn begin(&mut self, ticket: u64, path: &str) -> Dispatch {
        if ticket != self.generation {
            return Dispatch::Superseded;
        }
        if self.in_flight {
            return Dispatch::InFlight;
        }
        if self.reported.contains(path) {
            return Dispatch::Duplicate;
        }
        self.in_flight = true;
        self.reported.insert(path.to_owned());
        Dispatch::Send
    }

    /// Release the in-flight guard.
    pub fn finish(&mut self) {
        self.in_flight = false;
    }

    #[must_use]
    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    #[must_use]
    pub fn has_reported(&self, path: &str) -> bool {
        self.reported.contains(path)
    }

    #[must_use]
    pub fn geo(&self) -> &GeoCache {
        &self.geo
    }

    pub fn set_geo(&mut self, geo: GeoCache) {
        self.geo = geo;
    }
}

/// Shared handle to one [`TrackerState`], cloned into each debounce task.
#[derive(Clone, Debug, Default)]
pub struct VisitTracker {
    state: Arc<Mutex<TrackerState>>,
}

impl VisitTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn with<R>(&self, f: impl FnOnce(&mut TrackerState) -> R) -> R {
        let mut guard = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut *guard)
    }

    pub fn schedule(&self) -> u64 {
        self.with(TrackerState::schedule)
    }

    pub fn begin(&self, ticket: u64, path: &str) -> Dispatch {
        self.with(|s| s.begin(ticket, path))
    }

    pub fn finish(&self) {
        self.with(TrackerState::finish);
    }

    #[must_use]
    pub fn geo(&self) -> GeoCache {
        self.with(|s| s.geo().clone())
    }

    pub fn set_geo(&self, geo: GeoCache) {
        self.with(|s| s.set_geo(geo));
    }
}
