//! Time layouts written against the reference time `Mon Jan 2 15:04:05 MST 2006`.
//!
//! A layout is an example rendering of that exact instant: `15:04` means
//! "24-hour clock, zero-padded minutes", `Jan _2` means "abbreviated month,
//! space-padded day". Anything that is not a recognized chunk is copied through.

use chrono::{DateTime, Datelike, FixedOffset, Timelike};
use std::fmt::Write;

/// Layout used by a bare `%{time}` token.
pub const STAMP: &str = "Jan _2 15:04:05";

const LONG_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const LONG_DAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// How many offset components a numeric zone chunk prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OffsetWidth {
    /// `-07`
    Hours,
    /// `-0700`, `-07:00`
    Minutes,
    /// `-070000`, `-07:00:00`
    Seconds,
}

/// One recognized piece of the reference time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chunk {
    /// `January`
    LongMonth,
    /// `Jan`
    Month,
    /// `1`
    NumMonth,
    /// `01`
    ZeroMonth,
    /// `Monday`
    LongWeekDay,
    /// `Mon`
    WeekDay,
    /// `2`
    Day,
    /// `_2`
    UnderDay,
    /// `02`
    ZeroDay,
    /// `__2`
    UnderYearDay,
    /// `002`
    ZeroYearDay,
    /// `15`
    Hour,
    /// `3`
    Hour12,
    /// `03`
    ZeroHour12,
    /// `4`
    Minute,
    /// `04`
    ZeroMinute,
    /// `5`
    Second,
    /// `05`
    ZeroSecond,
    /// `2006`
    LongYear,
    /// `06`
    Year,
    /// `PM`
    UpperPm,
    /// `pm`
    LowerPm,
    /// `MST`
    ZoneName,
    /// `-0700` family; `zulu` chunks (`Z0700`) print `Z` for a zero offset.
    Offset {
        width: OffsetWidth,
        colon: bool,
        zulu: bool,
    },
    /// `.000` (fixed digits) or `.999` (trailing zeros trimmed); `,` separators work too.
    Fraction {
        separator: char,
        digits: usize,
        trim: bool,
    },
}

/// Parsed layout piece.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutSegment {
    Literal(String),
    Chunk(Chunk),
}

/// Pre-parsed layout, rendered against a timestamp on every log call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeLayout {
    source: String,
    segments: Vec<LayoutSegment>,
}

impl TimeLayout {
    /// Splits `layout` into literal text and reference-time chunks.
    #[must_use]
    pub fn parse(layout: &str) -> Self {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut rest = layout;

        while let Some(c) = rest.chars().next() {
            if let Some((chunk, len)) = next_chunk(rest) {
                if !literal.is_empty() {
                    segments.push(LayoutSegment::Literal(std::mem::take(&mut literal)));
                }
                segments.push(LayoutSegment::Chunk(chunk));
                rest = &rest[len..];
            } else {
                literal.push(c);
                rest = &rest[c.len_utf8()..];
            }
        }

        if !literal.is_empty() {
            segments.push(LayoutSegment::Literal(literal));
        }

        Self {
            source: layout.to_string(),
            segments,
        }
    }

    /// The layout string as written.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    #[must_use]
    pub fn segments(&self) -> &[LayoutSegment] {
        &self.segments
    }

    /// Renders `time` in its own offset.
    #[must_use]
    pub fn format(&self, time: &DateTime<FixedOffset>) -> String {
        let mut out = String::with_capacity(self.source.len() + 8);
        for segment in &self.segments {
            match segment {
                LayoutSegment::Literal(s) => out.push_str(s),
                LayoutSegment::Chunk(chunk) => write_chunk(&mut out, *chunk, time),
            }
        }
        out
    }
}

impl Default for TimeLayout {
    fn default() -> Self {
        Self::parse(STAMP)
    }
}

fn starts_with_lowercase(s: &str) -> bool {
    s.bytes().next().is_some_and(|b| b.is_ascii_lowercase())
}

/// Recognizes the chunk at the start of `rest`, returning it with its byte length.
fn next_chunk(rest: &str) -> Option<(Chunk, usize)> {
    let b = rest.as_bytes();
    match b[0] {
        b'J' if rest.starts_with("Jan") => {
            if rest.starts_with("January") {
                Some((Chunk::LongMonth, 7))
            } else if starts_with_lowercase(&rest[3..]) {
                None
            } else {
                Some((Chunk::Month, 3))
            }
        }
        b'M' => {
            if rest.starts_with("Monday") {
                Some((Chunk::LongWeekDay, 6))
            } else if rest.starts_with("Mon") && !starts_with_lowercase(&rest[3..]) {
                Some((Chunk::WeekDay, 3))
            } else if rest.starts_with("MST") {
                Some((Chunk::ZoneName, 3))
            } else {
                None
            }
        }
        b'0' => match b.get(1).copied() {
            Some(d @ b'1'..=b'6') => {
                let chunk = [
                    Chunk::ZeroMonth,
                    Chunk::ZeroDay,
                    Chunk::ZeroHour12,
                    Chunk::ZeroMinute,
                    Chunk::ZeroSecond,
                    Chunk::Year,
                ][usize::from(d - b'1')];
                Some((chunk, 2))
            }
            Some(b'0') if b.get(2) == Some(&b'2') => Some((Chunk::ZeroYearDay, 3)),
            _ => None,
        },
        b'1' if rest.starts_with("15") => Some((Chunk::Hour, 2)),
        b'1' => Some((Chunk::NumMonth, 1)),
        b'2' if rest.starts_with("2006") => Some((Chunk::LongYear, 4)),
        b'2' => Some((Chunk::Day, 1)),
        // `_2006` is a literal underscore followed by the year.
        b'_' if rest.starts_with("_2006") => None,
        b'_' if rest.starts_with("_2") => Some((Chunk::UnderDay, 2)),
        b'_' if rest.starts_with("__2") => Some((Chunk::UnderYearDay, 3)),
        b'3' => Some((Chunk::Hour12, 1)),
        b'4' => Some((Chunk::Minute, 1)),
        b'5' => Some((Chunk::Second, 1)),
        b'P' if rest.starts_with("PM") => Some((Chunk::UpperPm, 2)),
        b'p' if rest.starts_with("pm") => Some((Chunk::LowerPm, 2)),
        b'-' => offset_chunk(&rest[1..], false).map(|(c, len)| (c, len + 1)),
        b'Z' => offset_chunk(&rest[1..], true).map(|(c, len)| (c, len + 1)),
        b'.' | b',' => fraction_chunk(b),
        _ => None,
    }
}

fn offset_chunk(after_sign: &str, zulu: bool) -> Option<(Chunk, usize)> {
    const FORMS: [(&str, OffsetWidth, bool); 5] = [
        ("07:00:00", OffsetWidth::Seconds, true),
        ("070000", OffsetWidth::Seconds, false),
        ("07:00", OffsetWidth::Minutes, true),
        ("0700", OffsetWidth::Minutes, false),
        ("07", OffsetWidth::Hours, false),
    ];
    FORMS
        .iter()
        .find(|(form, _, _)| after_sign.starts_with(form))
        .map(|&(form, width, colon)| (Chunk::Offset { width, colon, zulu }, form.len()))
}

fn fraction_chunk(b: &[u8]) -> Option<(Chunk, usize)> {
    let digit = *b.get(1)?;
    if digit != b'0' && digit != b'9' {
        return None;
    }
    let run = b[1..].iter().take_while(|&&c| c == digit).count();
    if b.get(1 + run).is_some_and(u8::is_ascii_digit) {
        return None;
    }
    Some((
        Chunk::Fraction {
            separator: char::from(b[0]),
            digits: run,
            trim: digit == b'9',
        },
        1 + run,
    ))
}

fn write_chunk(out: &mut String, chunk: Chunk, t: &DateTime<FixedOffset>) {
    let month = LONG_MONTHS[t.month0() as usize];
    let weekday = LONG_DAYS[t.weekday().num_days_from_sunday() as usize];
    let (pm, hour12) = t.hour12();

    // Writing into a String cannot fail.
    let _ = match chunk {
        Chunk::LongMonth => write!(out, "{month}"),
        Chunk::Month => write!(out, "{}", &month[..3]),
        Chunk::NumMonth => write!(out, "{}", t.month()),
        Chunk::ZeroMonth => write!(out, "{:02}", t.month()),
        Chunk::LongWeekDay => write!(out, "{weekday}"),
        Chunk::WeekDay => write!(out, "{}", &weekday[..3]),
        Chunk::Day => write!(out, "{}", t.day()),
        Chunk::UnderDay => write!(out, "{:>2}", t.day()),
        Chunk::ZeroDay => write!(out, "{:02}", t.day()),
        Chunk::UnderYearDay => write!(out, "{:>3}", t.ordinal()),
        Chunk::ZeroYearDay => write!(out, "{:03}", t.ordinal()),
        Chunk::Hour => write!(out, "{:02}", t.hour()),
        Chunk::Hour12 => write!(out, "{hour12}"),
        Chunk::ZeroHour12 => write!(out, "{hour12:02}"),
        Chunk::Minute => write!(out, "{}", t.minute()),
        Chunk::ZeroMinute => write!(out, "{:02}", t.minute()),
        Chunk::Second => write!(out, "{}", t.second()),
        Chunk::ZeroSecond => write!(out, "{:02}", t.second()),
        Chunk::LongYear if t.year() < 0 => write!(out, "-{:04}", -t.year()),
        Chunk::LongYear => write!(out, "{:04}", t.year()),
        Chunk::Year => write!(out, "{:02}", t.year().rem_euclid(100)),
        Chunk::UpperPm => write!(out, "{}", if pm { "PM" } else { "AM" }),
        Chunk::LowerPm => write!(out, "{}", if pm { "pm" } else { "am" }),
        Chunk::ZoneName => write_zone_name(out, t.offset().local_minus_utc()),
        Chunk::Offset { width, colon, zulu } => {
            write_offset(out, t.offset().local_minus_utc(), width, colon, zulu)
        }
        Chunk::Fraction {
            separator,
            digits,
            trim,
        } => write_fraction(out, t.nanosecond(), separator, digits, trim),
    };
}

/// A fixed offset carries no abbreviation, so only UTC gets a name.
fn write_zone_name(out: &mut String, offset_secs: i32) -> std::fmt::Result {
    if offset_secs == 0 {
        return out.write_str("UTC");
    }
    let sign = if offset_secs < 0 { '-' } else { '+' };
    let minutes = offset_secs.unsigned_abs() / 60;
    write!(out, "{sign}{:02}{:02}", minutes / 60, minutes % 60)
}

fn write_offset(
    out: &mut String,
    offset_secs: i32,
    width: OffsetWidth,
    colon: bool,
    zulu: bool,
) -> std::fmt::Result {
    if zulu && offset_secs == 0 {
        return out.write_char('Z');
    }
    let sign = if offset_secs < 0 { '-' } else { '+' };
    let abs = offset_secs.unsigned_abs();
    let sep = if colon { ":" } else { "" };
    let (h, m, s) = (abs / 3600, (abs / 60) % 60, abs % 60);
    match width {
        OffsetWidth::Hours => write!(out, "{sign}{h:02}"),
        OffsetWidth::Minutes => write!(out, "{sign}{h:02}{sep}{m:02}"),
        OffsetWidth::Seconds => write!(out, "{sign}{h:02}{sep}{m:02}{sep}{s:02}"),
    }
}

fn write_fraction(
    out: &mut String,
    nanos: u32,
    separator: char,
    digits: usize,
    trim: bool,
) -> std::fmt::Result {
    // Leap seconds are reported as nanos >= 1e9.
    let all = format!("{:09}", nanos % 1_000_000_000);
    let mut frac = &all[..digits.min(9)];
    if trim {
        frac = frac.trim_end_matches('0');
        if frac.is_empty() {
            return Ok(());
        }
    }
    write!(out, "{separator}{frac}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stamp_segments() {
        let layout = TimeLayout::parse(STAMP);
        assert_eq!(
            layout.segments(),
            &[
                LayoutSegment::Chunk(Chunk::Month),
                LayoutSegment::Literal(" ".to_string()),
                LayoutSegment::Chunk(Chunk::UnderDay),
                LayoutSegment::Literal(" ".to_string()),
                LayoutSegment::Chunk(Chunk::Hour),
                LayoutSegment::Literal(":".to_string()),
                LayoutSegment::Chunk(Chunk::ZeroMinute),
                LayoutSegment::Literal(":".to_string()),
                LayoutSegment::Chunk(Chunk::ZeroSecond),
            ]
        );
    }

    #[test]
    fn lowercase_suffix_keeps_names_literal() {
        let layout = TimeLayout::parse("Month");
        assert_eq!(
            layout.segments(),
            &[LayoutSegment::Literal("Month".to_string())]
        );
    }

    #[test]
    fn underscore_before_long_year_is_literal() {
        let layout = TimeLayout::parse("_2006");
        assert_eq!(
            layout.segments(),
            &[
                LayoutSegment::Literal("_".to_string()),
                LayoutSegment::Chunk(Chunk::LongYear),
            ]
        );
    }

    #[test]
    fn fraction_followed_by_digit_is_literal() {
        assert_eq!(fraction_chunk(b".0001"), None);
        assert_eq!(
            fraction_chunk(b".999x"),
            Some((
                Chunk::Fraction {
                    separator: '.',
                    digits: 3,
                    trim: true
                },
                4
            ))
        );
    }
}
