use super::*;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// =============================================================
// parse_canonical
// =============================================================

#[test]
fn parse_canonical_accepts_zero_padded_date() {
    assert_eq!(parse_canonical("2025-03-10"), Ok(ymd(2025, 3, 10)));
}

#[test]
fn parse_canonical_trims_surrounding_whitespace() {
    assert_eq!(parse_canonical("  2025-12-01 "), Ok(ymd(2025, 12, 1)));
}

#[test]
fn parse_canonical_rejects_empty() {
    assert_eq!(parse_canonical(""), Err(DateParseError::Empty));
    assert_eq!(parse_canonical("   "), Err(DateParseError::Empty));
}

#[test]
fn parse_canonical_rejects_unpadded_components() {
    assert!(matches!(parse_canonical("2025-3-10"), Err(DateParseError::Malformed(_))));
    assert!(matches!(parse_canonical("2025-03-1"), Err(DateParseError::Malformed(_))));
}

#[test]
fn parse_canonical_rejects_other_layouts() {
    for raw in ["03/10/2025", "2025/03/10", "2025-03-10T00:00:00", "March 10, 2025", "abcd-ef-gh"] {
        assert!(
            matches!(parse_canonical(raw), Err(DateParseError::Malformed(_))),
            "expected malformed for {raw:?}"
        );
    }
}

#[test]
fn parse_canonical_rejects_impossible_days() {
    assert!(matches!(parse_canonical("2025-02-30"), Err(DateParseError::OutOfRange(_))));
    assert!(matches!(parse_canonical("2025-13-01"), Err(DateParseError::OutOfRange(_))));
    assert!(matches!(parse_canonical("2025-00-10"), Err(DateParseError::OutOfRange(_))));
}

#[test]
fn parse_canonical_accepts_leap_day_only_in_leap_years() {
    assert_eq!(parse_canonical("2024-02-29"), Ok(ymd(2024, 2, 29)));
    assert!(parse_canonical("2025-02-29").is_err());
}

// =============================================================
// parse_optional
// =============================================================

#[test]
fn parse_optional_maps_empty_to_none() {
    assert_eq!(parse_optional(""), Ok(None));
}

#[test]
fn parse_optional_propagates_malformed() {
    assert!(parse_optional("tomorrow").is_err());
}

// =============================================================
// format_canonical
// =============================================================

#[test]
fn format_canonical_zero_pads() {
    assert_eq!(format_canonical(ymd(2025, 3, 5)), "2025-03-05");
}

#[test]
fn error_messages_name_the_input() {
    let err = parse_canonical("2025/03/10").unwrap_err();
    assert_eq!(err.to_string(), "malformed date \"2025/03/10\" (expected YYYY-MM-DD)");
}
