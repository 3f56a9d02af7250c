//! Per-day validity classification.
//!
//! Interaction and presentation read the same classification. Order of
//! precedence for a rendered cell:
//!
//! 1. outside the displayed month (padding cell, always inert);
//! 2. the currently selected value (sticky even if it later became
//!    occupied or past);
//! 3. before the `min` bound, past, occupied, today, plain valid.

#[cfg(test)]
#[path = "classify_test.rs"]
mod classify_test;

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::date::parse_canonical;
use crate::grid::YearMonth;

/// Presentation class of one calendar cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DayClass {
    Selected,
    Occupied,
    Past,
    BeforeMin,
    ValidCurrentMonth,
    ValidToday,
    OutsideMonth,
}

impl DayClass {
    /// Whether a click on a cell of this class may select it.
    #[must_use]
    pub fn is_selectable(self) -> bool {
        matches!(self, Self::ValidCurrentMonth | Self::ValidToday)
    }

    /// BEM modifier class for the day button.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Selected => "date-picker__day date-picker__day--selected",
            Self::Occupied => "date-picker__day date-picker__day--occupied",
            Self::Past => "date-picker__day date-picker__day--past",
            Self::BeforeMin => "date-picker__day date-picker__day--before-min",
            Self::ValidCurrentMonth => "date-picker__day",
            Self::ValidToday => "date-picker__day date-picker__day--today",
            Self::OutsideMonth => "date-picker__day date-picker__day--outside",
        }
    }
}

/// Dates that are unavailable for selection (already booked, blocked, ...).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OccupiedSet(HashSet<NaiveDate>);

impl OccupiedSet {
    /// Build from canonical `YYYY-MM-DD` strings. Entries that do not parse
    /// are skipped.
    #[must_use]
    pub fn from_canonical<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(raw.into_iter().flat_map(|s| parse_canonical(s.as_ref())).collect())
    }

    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.0.contains(&date)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<NaiveDate> for OccupiedSet {
    fn from_iter<T: IntoIterator<Item = NaiveDate>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Inputs that decide whether a day can be picked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Constraints {
    /// The caller's local calendar date.
    pub today: NaiveDate,
    /// Inclusive lower bound.
    pub min: Option<NaiveDate>,
    pub occupied: OccupiedSet,
}

impl Constraints {
    #[must_use]
    pub fn new(today: NaiveDate) -> Self {
        Self { today, min: None, occupied: OccupiedSet::default() }
    }

    #[must_use]
    pub fn with_min(mut self, min: Option<NaiveDate>) -> Self {
        self.min = min;
        self
    }

    #[must_use]
    pub fn with_occupied(mut self, occupied: OccupiedSet) -> Self {
        self.occupied = occupied;
        self
    }

    /// Classify `date` ignoring month membership and selection.
    #[must_use]
    pub fn availability(&self, date: NaiveDate) -> DayClass {
        if self.min.is_some_and(|min| date < min) {
            DayClass::BeforeMin
        } else if date < self.today {
            DayClass::Past
        } else if self.occupied.contains(date) {
            DayClass::Occupied
        } else if date == self.today {
            DayClass::ValidToday
        } else {
            DayClass::ValidCurrentMonth
        }
    }

    /// Not occupied, not past, not before `min`.
    #[must_use]
    pub fn is_selectable(&self, date: NaiveDate) -> bool {
        self.availability(date).is_selectable()
    }
}

/// Classify one grid cell for rendering.
#[must_use]
pub fn classify(
    date: NaiveDate,
    displayed: YearMonth,
    selected: Option<NaiveDate>,
    constraints: &Constraints,
) -> DayClass {
    if !displayed.contains(date) {
        DayClass::OutsideMonth
    } else if selected == Some(date) {
        DayClass::Selected
    } else {
        constraints.availability(date)
    }
}
