//! Local-clock and display helpers around the `calendar` crate.

#[cfg(test)]
#[path = "dates_test.rs"]
mod dates_test;

use calendar::{NaiveDate, parse_optional};

/// The visitor's local calendar date.
///
/// On the server this is the host's date; the picker re-renders with the
/// browser's date once hydrated.
#[must_use]
pub fn today_local() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Parse a canonical date prop. Empty means "none"; a malformed value is
/// logged and also treated as "none".
#[must_use]
pub fn parse_prop(raw: &str, field: &str) -> Option<NaiveDate> {
    match parse_optional(raw) {
        Ok(date) => date,
        Err(e) => {
            log::warn!("ignoring date picker {field} {raw:?}: {e}");
            None
        }
    }
}

/// Human label for a selected date, e.g. `Mon, Mar 10, 2025`.
#[must_use]
pub fn display_label(date: NaiveDate) -> String {
    date.format("%a, %b %-d, %Y").to_string()
}
