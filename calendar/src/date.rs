//! Canonical `YYYY-MM-DD` date strings.
//!
//! Every value that crosses the widget boundary (`value`, `min`, occupied
//! dates, `on_change` emissions) uses this form. Parsing is strict: the shape
//! must be exactly four digits, dash, two digits, dash, two digits, and the
//! result must be a real calendar day.

#[cfg(test)]
#[path = "date_test.rs"]
mod date_test;

use chrono::NaiveDate;

/// `chrono` format string for canonical dates.
pub const CANONICAL_FORMAT: &str = "%Y-%m-%d";

const CANONICAL_LEN: usize = 10;

/// Error returned by [`parse_canonical`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateParseError {
    /// The input was empty or whitespace only.
    #[error("empty date string")]
    Empty,
    /// The input is not shaped like `YYYY-MM-DD`.
    #[error("malformed date {0:?} (expected YYYY-MM-DD)")]
    Malformed(String),
    /// The input is shaped correctly but names a day that does not exist.
    #[error("no such calendar day: {0:?}")]
    OutOfRange(String),
}

/// Parse a canonical `YYYY-MM-DD` string.
///
/// # Errors
///
/// Returns [`DateParseError`] when the string is empty, not zero-padded
/// `YYYY-MM-DD`, or names an impossible day such as `2025-02-30`.
pub fn parse_canonical(raw: &str) -> Result<NaiveDate, DateParseError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(DateParseError::Empty);
    }
    if !has_canonical_shape(trimmed) {
        return Err(DateParseError::Malformed(trimmed.to_owned()));
    }
    NaiveDate::parse_from_str(trimmed, CANONICAL_FORMAT)
        .map_err(|_| DateParseError::OutOfRange(trimmed.to_owned()))
}

/// Parse an optional canonical date where the empty string means "none".
///
/// # Errors
///
/// Returns [`DateParseError`] for non-empty input that fails
/// [`parse_canonical`].
pub fn parse_optional(raw: &str) -> Result<Option<NaiveDate>, DateParseError> {
    match parse_canonical(raw) {
        Ok(date) => Ok(Some(date)),
        Err(DateParseError::Empty) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Format a date as canonical `YYYY-MM-DD`.
#[must_use]
pub fn format_canonical(date: NaiveDate) -> String {
    date.format(CANONICAL_FORMAT).to_string()
}

fn has_canonical_shape(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.len() == CANONICAL_LEN
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}
