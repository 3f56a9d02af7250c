use super::*;
use crate::classify::OccupiedSet;
use crate::date::parse_canonical;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// value=2025-03-10, min=2025-03-01, occupied=[2025-03-15], today=2025-03-05.
fn booking_picker() -> DatePicker {
    let constraints = Constraints::new(ymd(2025, 3, 5))
        .with_min(Some(parse_canonical("2025-03-01").unwrap()))
        .with_occupied(OccupiedSet::from_canonical(["2025-03-15"]));
    let mut picker = DatePicker::new(Some(ymd(2025, 3, 10)), constraints);
    picker.toggle_open();
    picker
}

// =============================================================
// Construction
// =============================================================

#[test]
fn new_displays_month_of_value() {
    let picker = DatePicker::new(Some(ymd(2025, 7, 4)), Constraints::new(ymd(2025, 3, 5)));
    assert_eq!(picker.displayed(), YearMonth::new(2025, 7).unwrap());
    assert_eq!(picker.overlay(), Overlay::Closed);
}

#[test]
fn new_without_value_displays_month_of_today() {
    let picker = DatePicker::new(None, Constraints::new(ymd(2025, 3, 5)));
    assert_eq!(picker.displayed(), YearMonth::new(2025, 3).unwrap());
    assert_eq!(picker.selected(), None);
}

// =============================================================
// select_date
// =============================================================

#[test]
fn clicking_occupied_day_is_a_no_op() {
    let mut picker = booking_picker();
    let before = picker.clone();
    assert_eq!(picker.select_date(ymd(2025, 3, 15)), None);
    assert_eq!(picker, before);
    assert!(picker.is_open());
}

#[test]
fn clicking_valid_day_emits_canonical_string_and_closes() {
    let mut picker = booking_picker();
    assert_eq!(picker.select_date(ymd(2025, 3, 20)), Some("2025-03-20".to_owned()));
    assert_eq!(picker.selected(), Some(ymd(2025, 3, 20)));
    assert_eq!(picker.overlay(), Overlay::Closed);
}

#[test]
fn clicking_outside_month_day_is_inert() {
    let mut picker = booking_picker();
    let before = picker.clone();
    assert_eq!(picker.select_date(ymd(2025, 2, 28)), None);
    assert_eq!(picker, before);
}

#[test]
fn clicking_past_or_before_min_day_is_a_no_op() {
    let constraints = Constraints::new(ymd(2025, 3, 12)).with_min(Some(ymd(2025, 3, 8)));
    let mut picker = DatePicker::new(None, constraints);
    picker.toggle_open();
    assert_eq!(picker.select_date(ymd(2025, 3, 7)), None);
    assert_eq!(picker.select_date(ymd(2025, 3, 11)), None);
    assert!(picker.is_open());
    assert_eq!(picker.selected(), None);
}

#[test]
fn selecting_twice_emits_twice() {
    let mut picker = booking_picker();
    let first = picker.select_date(ymd(2025, 3, 20));
    picker.toggle_open();
    let second = picker.select_date(ymd(2025, 3, 20));
    assert_eq!(first, second);
    assert_eq!(second, Some("2025-03-20".to_owned()));
}

#[test]
fn selecting_today_is_allowed() {
    let mut picker = booking_picker();
    assert_eq!(picker.select_date(ymd(2025, 3, 5)), Some("2025-03-05".to_owned()));
}

// =============================================================
// navigate_month
// =============================================================

#[test]
fn navigation_keeps_selection_and_overlay() {
    let mut picker = booking_picker();
    picker.navigate_month(1);
    assert_eq!(picker.displayed(), YearMonth::new(2025, 4).unwrap());
    assert_eq!(picker.selected(), Some(ymd(2025, 3, 10)));
    assert!(picker.is_open());
}

#[test]
fn navigating_twelve_forward_and_back_restores_month() {
    let mut picker = booking_picker();
    let start = picker.displayed();
    for _ in 0..12 {
        picker.navigate_month(1);
    }
    for _ in 0..12 {
        picker.navigate_month(-1);
    }
    assert_eq!(picker.displayed(), start);
}

#[test]
fn days_of_other_months_become_clickable_after_navigation() {
    let mut picker = booking_picker();
    assert_eq!(picker.select_date(ymd(2025, 4, 2)), None);
    picker.navigate_month(1);
    assert_eq!(picker.select_date(ymd(2025, 4, 2)), Some("2025-04-02".to_owned()));
}

#[test]
fn go_to_today_shows_todays_month() {
    let mut picker = booking_picker();
    picker.navigate_month(5);
    picker.go_to_today();
    assert_eq!(picker.displayed(), YearMonth::new(2025, 3).unwrap());
}

// =============================================================
// Overlay lifecycle
// =============================================================

#[test]
fn toggle_flips_between_closed_and_open() {
    let mut picker = DatePicker::new(None, Constraints::new(ymd(2025, 3, 5)));
    assert_eq!(picker.toggle_open(), Overlay::Open);
    assert_eq!(picker.toggle_open(), Overlay::Closed);
}

#[test]
fn disabled_picker_never_opens() {
    let mut picker = DatePicker::new(None, Constraints::new(ymd(2025, 3, 5)));
    picker.set_disabled(true);
    assert_eq!(picker.toggle_open(), Overlay::Closed);
    assert!(!picker.is_open());
}

#[test]
fn disabling_closes_an_open_overlay() {
    let mut picker = booking_picker();
    picker.set_disabled(true);
    assert!(!picker.is_open());
}

#[test]
fn outside_interaction_closes_only_when_open() {
    let mut picker = booking_picker();
    assert!(picker.close_on_outside_interaction());
    assert!(!picker.is_open());
    assert!(!picker.close_on_outside_interaction());
}

// =============================================================
// sync_displayed_month_to_value
// =============================================================

#[test]
fn external_value_change_resets_displayed_month() {
    let mut picker = booking_picker();
    picker.navigate_month(4);
    picker.sync_displayed_month_to_value(Some(ymd(2026, 1, 9)));
    assert_eq!(picker.displayed(), YearMonth::new(2026, 1).unwrap());
    assert_eq!(picker.selected(), Some(ymd(2026, 1, 9)));
}

#[test]
fn clearing_value_keeps_displayed_month() {
    let mut picker = booking_picker();
    picker.navigate_month(2);
    picker.sync_displayed_month_to_value(None);
    assert_eq!(picker.selected(), None);
    assert_eq!(picker.displayed(), YearMonth::new(2025, 5).unwrap());
}

// =============================================================
// cells
// =============================================================

#[test]
fn cells_cover_the_grid_and_mark_interactivity() {
    let picker = booking_picker();
    let cells = picker.cells();
    assert_eq!(cells.len(), 42);

    let find = |date: NaiveDate| cells.iter().find(|c| c.date == date).copied().unwrap();
    assert_eq!(find(ymd(2025, 2, 28)).class, DayClass::OutsideMonth);
    assert!(!find(ymd(2025, 2, 28)).interactive);
    assert_eq!(find(ymd(2025, 3, 10)).class, DayClass::Selected);
    assert!(find(ymd(2025, 3, 10)).interactive);
    assert_eq!(find(ymd(2025, 3, 15)).class, DayClass::Occupied);
    assert!(!find(ymd(2025, 3, 15)).interactive);
    assert_eq!(find(ymd(2025, 3, 3)).class, DayClass::Past);
    assert_eq!(find(ymd(2025, 3, 5)).class, DayClass::ValidToday);
    assert_eq!(find(ymd(2025, 3, 20)).class, DayClass::ValidCurrentMonth);
}
