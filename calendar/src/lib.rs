//! # calendar
//!
//! Date-picker model shared by the booking forms: canonical `YYYY-MM-DD`
//! dates, the 6x7 month grid, the per-day validity classifier, and the
//! open/close + selection controller.
//!
//! DESIGN
//! ======
//! Everything here is a plain value type with no browser or clock access.
//! The caller passes in "today" so rendering stays deterministic under SSR and
//! in tests; the Leptos `DatePicker` component owns one [`DatePicker`] per
//! widget instance and re-renders from [`DatePicker::cells`].

pub mod classify;
pub mod date;
pub mod grid;
pub mod picker;

pub use classify::{Constraints, DayClass, OccupiedSet, classify};
pub use date::{DateParseError, format_canonical, parse_canonical, parse_optional};
pub use grid::{GRID_CELLS, WEEKDAY_LABELS, YearMonth, month_grid};
pub use picker::{DayCell, DatePicker, Overlay};

pub use chrono::NaiveDate;
