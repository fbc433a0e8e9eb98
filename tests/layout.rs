//! Tests for reference-time layouts.

use chrono::{DateTime, FixedOffset, TimeZone, Timelike};
use tmplog::fmt::TimeLayout;

/// The reference instant itself: Mon Jan 2 15:04:05 2006, seven hours west of UTC.
fn reference(nanos: u32) -> DateTime<FixedOffset> {
    FixedOffset::west_opt(7 * 3600)
        .unwrap()
        .with_ymd_and_hms(2006, 1, 2, 15, 4, 5)
        .unwrap()
        .with_nanosecond(nanos)
        .unwrap()
}

fn utc(secs: i64, nanos: u32) -> DateTime<FixedOffset> {
    DateTime::from_timestamp(secs, nanos).unwrap().fixed_offset()
}

fn render(layout: &str, time: &DateTime<FixedOffset>) -> String {
    TimeLayout::parse(layout).format(time)
}

#[test]
fn default_layout_is_stamp() {
    let layout = TimeLayout::default();
    assert_eq!(layout.as_str(), "Jan _2 15:04:05");
    assert_eq!(layout.format(&utc(1, 1)), "Jan  1 00:00:01");
}

#[test]
fn reference_time_reproduces_numeric_layouts() {
    let t = reference(0);
    for layout in ["2006-01-02 15:04:05", "01/02/06", "15:04", "Jan 2, 2006", "-0700", "-07:00"] {
        assert_eq!(render(layout, &t), layout);
    }
}

#[test]
fn names() {
    let t = reference(0);
    assert_eq!(render("Monday, January 2", &t), "Monday, January 2");
    assert_eq!(render("Mon Jan _2", &t), "Mon Jan  2");
}

#[test]
fn twelve_hour_clock() {
    let t = reference(0);
    assert_eq!(render("3:04PM", &t), "3:04PM");
    assert_eq!(render("03:04 pm", &t), "03:04 pm");
    assert_eq!(render("3PM", &utc(0, 0)), "12AM");
}

#[test]
fn unpadded_fields() {
    let t = utc(3 * 3600 + 7 * 60 + 9, 0);
    assert_eq!(render("1/2 3:4:5", &t), "1/1 3:7:9");
}

#[test]
fn day_of_year() {
    let t = utc(40 * 86_400, 0);
    assert_eq!(render("002|__2", &t), "041| 41");
}

#[test]
fn zones() {
    assert_eq!(render("MST", &reference(0)), "-0700");
    assert_eq!(render("MST", &utc(0, 0)), "UTC");
    assert_eq!(render("Z07:00", &utc(0, 0)), "Z");
    assert_eq!(render("Z07:00", &reference(0)), "-07:00");
    assert_eq!(render("-07", &reference(0)), "-07");
    assert_eq!(render("-07:00:00", &utc(0, 0)), "+00:00:00");
}

#[test]
fn rfc3339_shape() {
    assert_eq!(
        render("2006-01-02T15:04:05Z07:00", &utc(0, 0)),
        "1970-01-01T00:00:00Z"
    );
}

#[test]
fn fractional_seconds() {
    let t = reference(123_456_789);
    assert_eq!(render("05.000", &t), "05.123");
    assert_eq!(render("05,000000", &t), "05,123456");
    assert_eq!(render("05.999999999", &t), "05.123456789");

    let t = reference(120_000_000);
    assert_eq!(render("05.999", &t), "05.12");
    assert_eq!(render("05.000", &t), "05.120");

    let t = reference(0);
    assert_eq!(render("05.999", &t), "05");
}

#[test]
fn unrecognized_text_is_literal() {
    let t = reference(0);
    assert_eq!(render("Month: xxy", &t), "Month: xxy");
    assert_eq!(render("_2006", &t), "_2006");
    assert_eq!(render("", &t), "");
}
