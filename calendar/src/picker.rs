//! Selection controller for one date-picker widget.
//!
//! STATE MACHINE
//! =============
//! ```text
//!            toggle (enabled)
//!   Closed ───────────────────▶ Open
//!     ▲                          │
//!     └──────────────────────────┘
//!       valid select | outside pointer | Escape | toggle
//! ```
//!
//! Month navigation never touches the selection, and a rejected click never
//! touches anything. The controlled `value` is pushed back in through
//! [`DatePicker::sync_displayed_month_to_value`] whenever the owner changes it.

#[cfg(test)]
#[path = "picker_test.rs"]
mod picker_test;

use chrono::NaiveDate;

use crate::classify::{Constraints, DayClass, classify};
use crate::date::format_canonical;
use crate::grid::{YearMonth, month_grid};

/// Overlay visibility.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Overlay {
    #[default]
    Closed,
    Open,
}

/// One rendered grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub class: DayClass,
    /// In the displayed month and passes the validity rules.
    pub interactive: bool,
}

/// Selection + view state of a single picker instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DatePicker {
    selected: Option<NaiveDate>,
    displayed: YearMonth,
    overlay: Overlay,
    disabled: bool,
    constraints: Constraints,
}

impl DatePicker {
    /// Start closed, showing the month of `value` (or of today when empty).
    #[must_use]
    pub fn new(value: Option<NaiveDate>, constraints: Constraints) -> Self {
        let displayed = YearMonth::of(value.unwrap_or(constraints.today));
        Self { selected: value, displayed, overlay: Overlay::Closed, disabled: false, constraints }
    }

    #[must_use]
    pub fn selected(&self) -> Option<NaiveDate> {
        self.selected
    }

    #[must_use]
    pub fn displayed(&self) -> YearMonth {
        self.displayed
    }

    #[must_use]
    pub fn overlay(&self) -> Overlay {
        self.overlay
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.overlay == Overlay::Open
    }

    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    #[must_use]
    pub fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    /// Replace today/min/occupied, e.g. after the owner refetches bookings.
    pub fn set_constraints(&mut self, constraints: Constraints) {
        self.constraints = constraints;
    }

    /// Disabling also closes an open overlay.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        if disabled {
            self.overlay = Overlay::Closed;
        }
    }

    /// Whether a click on `date` would be accepted right now.
    #[must_use]
    pub fn can_select(&self, date: NaiveDate) -> bool {
        self.displayed.contains(date) && self.constraints.is_selectable(date)
    }

    /// Accept a click on `date`.
    ///
    /// Returns the canonical string to hand to the owner's `on_change` and
    /// closes the overlay. Returns `None` and changes nothing when the date is
    /// outside the displayed month, occupied, past, or before `min`.
    pub fn select_date(&mut self, date: NaiveDate) -> Option<String> {
        if !self.can_select(date) {
            return None;
        }
        self.selected = Some(date);
        self.overlay = Overlay::Closed;
        Some(format_canonical(date))
    }

    /// Move the displayed month by `delta` months.
    pub fn navigate_month(&mut self, delta: i32) {
        self.displayed = self.displayed.shift(delta);
    }

    /// Show the month containing today.
    pub fn go_to_today(&mut self) {
        self.displayed = YearMonth::of(self.constraints.today);
    }

    /// Flip the overlay. Ignored while disabled.
    pub fn toggle_open(&mut self) -> Overlay {
        if !self.disabled {
            self.overlay = match self.overlay {
                Overlay::Closed => Overlay::Open,
                Overlay::Open => Overlay::Closed,
            };
        }
        self.overlay
    }

    /// Close after a pointer-down outside the widget (or Escape). Returns
    /// `true` when the overlay was open.
    pub fn close_on_outside_interaction(&mut self) -> bool {
        let was_open = self.is_open();
        self.overlay = Overlay::Closed;
        was_open
    }

    /// Adopt an externally supplied value. A date also resets the displayed
    /// month to that date's month; `None` clears the selection only.
    pub fn sync_displayed_month_to_value(&mut self, value: Option<NaiveDate>) {
        self.selected = value;
        if let Some(date) = value {
            self.displayed = YearMonth::of(date);
        }
    }

    /// The 42 cells of the displayed month, classified.
    #[must_use]
    pub fn cells(&self) -> Vec<DayCell> {
        month_grid(self.displayed)
            .into_iter()
            .map(|date| DayCell {
                date,
                class: classify(date, self.displayed, self.selected, &self.constraints),
                interactive: self.can_select(date),
            })
            .collect()
    }
}
