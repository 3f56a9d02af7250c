use super::*;
use chrono::Weekday;

fn ym(year: i32, month: u32) -> YearMonth {
    YearMonth::new(year, month).unwrap()
}

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// =============================================================
// month_grid
// =============================================================

#[test]
fn grid_has_42_consecutive_days_starting_sunday_for_every_month() {
    for year in 1900..=2100 {
        for month in 1..=12 {
            let grid = month_grid(ym(year, month));
            assert_eq!(grid.len(), GRID_CELLS, "{year}-{month}");
            assert_eq!(grid[0].weekday(), Weekday::Sun, "{year}-{month}");
            for pair in grid.windows(2) {
                assert_eq!(pair[0].succ_opt(), Some(pair[1]), "{year}-{month}");
            }
        }
    }
}

#[test]
fn grid_covers_every_day_of_the_month() {
    for (year, month) in [(2024, 2), (2025, 2), (2025, 3), (2025, 8), (2026, 5)] {
        let cursor = ym(year, month);
        let grid = month_grid(cursor);
        let in_month = grid.iter().filter(|d| cursor.contains(**d)).count();
        let expected = cursor.shift(1).first_day().pred_opt().unwrap().day() as usize;
        assert_eq!(in_month, expected, "{year}-{month}");
    }
}

#[test]
fn grid_pads_with_previous_month_when_first_is_midweek() {
    // 2025-03-01 is a Saturday, so six February days lead the grid.
    let grid = month_grid(ym(2025, 3));
    assert_eq!(grid[0], ymd(2025, 2, 23));
    assert_eq!(grid[6], ymd(2025, 3, 1));
    assert_eq!(grid[41], ymd(2025, 4, 5));
}

#[test]
fn grid_starts_on_first_when_month_begins_sunday() {
    // 2025-06-01 is a Sunday.
    let grid = month_grid(ym(2025, 6));
    assert_eq!(grid[0], ymd(2025, 6, 1));
    assert_eq!(grid[41], ymd(2025, 7, 12));
}

#[test]
fn grid_is_deterministic() {
    assert_eq!(month_grid(ym(2030, 1)), month_grid(ym(2030, 1)));
}

// =============================================================
// YearMonth
// =============================================================

#[test]
fn year_month_rejects_out_of_range_months() {
    assert!(YearMonth::new(2025, 0).is_none());
    assert!(YearMonth::new(2025, 13).is_none());
    assert!(YearMonth::new(2025, 12).is_some());
}

#[test]
fn shift_crosses_year_boundaries() {
    assert_eq!(ym(2025, 12).shift(1), ym(2026, 1));
    assert_eq!(ym(2025, 1).shift(-1), ym(2024, 12));
    assert_eq!(ym(2025, 3).shift(-15), ym(2023, 12));
    assert_eq!(ym(2025, 3).shift(0), ym(2025, 3));
}

#[test]
fn forward_then_back_twelve_months_is_identity() {
    for month in 1..=12 {
        let start = ym(2025, month);
        let mut cursor = start;
        for _ in 0..12 {
            cursor = cursor.shift(1);
        }
        assert_eq!(cursor, ym(2026, month));
        for _ in 0..12 {
            cursor = cursor.shift(-1);
        }
        assert_eq!(cursor, start);
    }
}

#[test]
fn of_uses_the_dates_month() {
    assert_eq!(YearMonth::of(ymd(2025, 3, 31)), ym(2025, 3));
}

#[test]
fn title_names_month_and_year() {
    assert_eq!(ym(2025, 3).title(), "March 2025");
}

#[test]
fn weekday_labels_are_sunday_first() {
    assert_eq!(WEEKDAY_LABELS[0], "Su");
    assert_eq!(WEEKDAY_LABELS[6], "Sa");
}
