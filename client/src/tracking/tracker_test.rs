use super::*;

// =============================================================
// Debounce
// =============================================================

#[test]
fn only_latest_ticket_fires() {
    let mut state = TrackerState::default();
    let first = state.schedule();
    let second = state.schedule();
    assert_eq!(state.begin(first, "/about"), Dispatch::Superseded);
    assert_eq!(state.begin(second, "/about"), Dispatch::Send);
}

#[test]
fn superseded_fire_does_not_mark_path() {
    let mut state = TrackerState::default();
    let stale = state.schedule();
    state.schedule();
    state.begin(stale, "/terms");
    assert!(!state.has_reported("/terms"));
    assert!(!state.is_in_flight());
}

// =============================================================
// In-flight guard
// =============================================================

#[test]
fn fire_while_in_flight_is_dropped() {
    let mut state = TrackerState::default();
    let ticket = state.schedule();
    assert_eq!(state.begin(ticket, "/"), Dispatch::Send);
    let ticket = state.schedule();
    assert_eq!(state.begin(ticket, "/about"), Dispatch::InFlight);
    assert!(!state.has_reported("/about"));
}

#[test]
fn finish_releases_the_guard() {
    let mut state = TrackerState::default();
    let ticket = state.schedule();
    state.begin(ticket, "/");
    state.finish();
    let ticket = state.schedule();
    assert_eq!(state.begin(ticket, "/about"), Dispatch::Send);
}

// =============================================================
// Deduplication
// =============================================================

#[test]
fn each_path_reports_once() {
    let mut state = TrackerState::default();
    let ticket = state.schedule();
    assert_eq!(state.begin(ticket, "/privacy"), Dispatch::Send);
    state.finish();
    let ticket = state.schedule();
    assert_eq!(state.begin(ticket, "/privacy"), Dispatch::Duplicate);
    assert!(!state.is_in_flight());
}

// =============================================================
// VisitTracker handle
// =============================================================

#[test]
fn clones_share_state() {
    let tracker = VisitTracker::new();
    let task = tracker.clone();
    let ticket = tracker.schedule();
    assert_eq!(task.begin(ticket, "/"), Dispatch::Send);
    assert_eq!(tracker.begin(tracker.schedule(), "/x"), Dispatch::InFlight);
    task.finish();
    assert_eq!(tracker.begin(tracker.schedule(), "/x"), Dispatch::Send);
}

#[test]
fn geo_cache_starts_unknown_and_is_shared() {
    let tracker = VisitTracker::new();
    assert_eq!(tracker.geo(), GeoCache::Unknown);
    tracker.clone().set_geo(GeoCache::Unavailable);
    assert_eq!(tracker.geo(), GeoCache::Unavailable);
}
