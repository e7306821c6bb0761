//! The shared behavior again, run against the JS `Date` backend.
#![cfg(target_arch = "wasm32")]

use tinytime::{new_time_provider, ParseError, TimeProvider};
use wasm_bindgen_test::wasm_bindgen_test;

const SEC: i64 = 1_000_000_000;
const DAY: i64 = 86_400 * SEC;

// 2021-06-22 21:25:34 UTC
const TEST_UNIX_SECONDS: i64 = 1_624_397_134;
const TEST_UNIX_NANO: i64 = TEST_UNIX_SECONDS * SEC;

#[wasm_bindgen_test]
fn test_epoch_exactness() {
    let tp = new_time_provider();
    assert_eq!(tp.format_date(0i64), "1970-01-01");
    assert_eq!(tp.format_date_time(0i64), "1970-01-01 00:00:00");
    assert_eq!(tp.format_date_time_short(0i64), "1970-01-01 00:00");
    assert_eq!(tp.parse_date("1970-01-01"), Ok(0));
}

#[wasm_bindgen_test]
fn test_fields_read_through_date() {
    let tp = new_time_provider();
    assert_eq!(tp.format_date_time(TEST_UNIX_NANO), "2021-06-22 21:25:34");
    assert_eq!(tp.format_date_time(-SEC), "1969-12-31 23:59:59");
    assert_eq!(tp.format_date_time(-1i64), "1970-01-01 00:00:00");
    assert_eq!(tp.unix_nano_to_time(TEST_UNIX_NANO), "21:25:34");
}

#[wasm_bindgen_test]
fn test_calendar_strictness() {
    let tp = new_time_provider();
    assert!(matches!(
        tp.parse_date("2024-02-30"),
        Err(ParseError::CalendarDate(_))
    ));
    assert!(matches!(
        tp.parse_date("2023-02-29"),
        Err(ParseError::CalendarDate(_))
    ));
    assert_eq!(tp.parse_date("2024-02-29"), Ok(1_709_164_800 * SEC));
}

#[wasm_bindgen_test]
fn test_calendar_bounds_pass_through() {
    let tp = new_time_provider();
    assert_eq!(tp.format_date("0000-01-01"), "0000-01-01");
    assert_eq!(tp.format_date("9999-12-31"), "9999-12-31");
    assert_eq!(tp.format_date_time("9999-12-31 23:59:59"), "9999-12-31 23:59:59");
}

#[wasm_bindgen_test]
fn test_round_trip_known_instant() {
    let tp = new_time_provider();
    let date = tp.format_date(TEST_UNIX_NANO);
    let time = tp.format_time(TEST_UNIX_NANO);
    assert_eq!(tp.parse_date_time(&date, &time), Ok(TEST_UNIX_NANO));
    assert_eq!(tp.format_date(date.clone()), date);
}

#[wasm_bindgen_test]
fn test_unix_seconds_to_date() {
    let tp = new_time_provider();
    assert_eq!(tp.unix_seconds_to_date(TEST_UNIX_SECONDS), "2021-06-22 21:25");
    assert_eq!(tp.unix_seconds_to_date(-62_167_219_200), "0000-01-01 00:00");
    assert_eq!(tp.unix_seconds_to_date(253_402_300_800), "");
}

#[wasm_bindgen_test]
fn test_now_and_is_today() {
    let tp = new_time_provider();
    let now = tp.now();
    // After 2020-01-01, in whole milliseconds.
    assert!(now > 1_577_836_800 * SEC);
    assert_eq!(now % 1_000_000, 0);
    assert!(tp.is_today(now));
    assert!(!tp.is_today(now - 2 * DAY));
    assert!(tp.is_past(now - SEC));
    assert!(tp.is_future(now + DAY));
}
