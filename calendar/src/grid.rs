//! Month cursor and the fixed 6x7 calendar grid.
//!
//! The grid always has [`GRID_CELLS`] entries: it starts on the Sunday on or
//! before the first of the month and runs row-major, so leading cells belong
//! to the previous month and trailing cells to the next one.

#[cfg(test)]
#[path = "grid_test.rs"]
mod grid_test;

use chrono::{Datelike, Days, NaiveDate};

/// Number of cells in a month grid (6 weeks of 7 days).
pub const GRID_CELLS: usize = 42;

/// Column headers, Sunday first.
pub const WEEKDAY_LABELS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

// Keep a one-year margin inside chrono's representable range so grid padding
// on either side never leaves it.
const MIN_YEAR: i32 = -262_000;
const MAX_YEAR: i32 = 262_000;

/// A displayed month: year plus month number (1-12).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Build a cursor, rejecting month numbers outside 1-12 and years outside
    /// the supported range.
    #[must_use]
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if !(1..=12).contains(&month) || !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return None;
        }
        Some(Self { year, month })
    }

    /// The month containing `date`.
    #[must_use]
    pub fn of(date: NaiveDate) -> Self {
        Self { year: date.year().clamp(MIN_YEAR, MAX_YEAR), month: date.month() }
    }

    #[must_use]
    pub fn year(self) -> i32 {
        self.year
    }

    #[must_use]
    pub fn month(self) -> u32 {
        self.month
    }

    /// First day of this month.
    #[must_use]
    pub fn first_day(self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    /// Whether `date` falls inside this month.
    #[must_use]
    pub fn contains(self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Shift by `delta` whole months (negative moves backwards), saturating at
    /// the supported year range.
    #[must_use]
    pub fn shift(self, delta: i32) -> Self {
        let index = i64::from(self.year) * 12 + i64::from(self.month - 1) + i64::from(delta);
        let year = index.div_euclid(12);
        let month = index.rem_euclid(12);
        if year < i64::from(MIN_YEAR) {
            return Self { year: MIN_YEAR, month: 1 };
        }
        if year > i64::from(MAX_YEAR) {
            return Self { year: MAX_YEAR, month: 12 };
        }
        Self {
            year: i32::try_from(year).unwrap_or(self.year),
            month: u32::try_from(month).map_or(self.month, |m| m + 1),
        }
    }

    /// Header title such as `March 2025`.
    #[must_use]
    pub fn title(self) -> String {
        self.first_day().format("%B %Y").to_string()
    }
}

/// The 42 dates shown for `month`, Sunday-first and row-major.
#[must_use]
pub fn month_grid(month: YearMonth) -> Vec<NaiveDate> {
    let first = month.first_day();
    let lead = u64::from(first.weekday().num_days_from_sunday());
    let start = first.checked_sub_days(Days::new(lead)).unwrap_or(first);
    start.iter_days().take(GRID_CELLS).collect()
}
