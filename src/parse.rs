//! Strict parsing of date and time strings.
//!
//! Shapes are checked byte-for-byte before any number is read, and dates are
//! converted through the platform calendar and formatted back: a date the
//! calendar silently moves (2024-02-30 → 2024-03-01) is rejected.

use crate::civil::{NANOS_PER_SEC, SECS_PER_DAY};
use crate::error::{ParseError, Result};
use crate::{calendar_at, platform, MINUTES_PER_DAY};

/// Parses "YYYY-MM-DD" into nanoseconds at midnight UTC of that date.
pub(crate) fn parse_date(input: &str) -> Result<i64> {
    date_secs(input)?
        .checked_mul(NANOS_PER_SEC)
        .ok_or_else(|| ParseError::OutOfRange(input.to_owned()))
}

/// True iff `input` is exactly "YYYY-MM-DD" and names a real day, whether or
/// not its midnight fits in a nanosecond count.
pub(crate) fn is_date(input: &str) -> bool {
    date_secs(input).is_ok()
}

/// Seconds at midnight UTC of a strict "YYYY-MM-DD" date.
fn date_secs(input: &str) -> Result<i64> {
    let bad_format = || ParseError::DateFormat(input.to_owned());

    let bytes = input.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return Err(bad_format());
    }
    let year = digits(&bytes[0..4]).ok_or_else(bad_format)?;
    let month = digits(&bytes[5..7]).ok_or_else(bad_format)?;
    let day = digits(&bytes[8..10]).ok_or_else(bad_format)?;

    let invalid = || ParseError::CalendarDate(input.to_owned());
    let secs = platform::midnight_secs(i64::from(year), month as u8, day as u8)
        .ok_or_else(invalid)?;
    match calendar_at(secs) {
        Some(civil) if civil.date() == input => Ok(secs),
        _ => Err(invalid()),
    }
}

/// Parses "HH:MM" or "HH:MM:SS" into minutes since midnight. Seconds are
/// validated and then dropped.
pub(crate) fn parse_time(input: &str) -> Result<i16> {
    let (hour, minute, _) = clock_fields(input)?;
    let minutes = i16::from(hour) * 60 + i16::from(minute);
    debug_assert!(minutes < MINUTES_PER_DAY);
    Ok(minutes)
}

/// Combines a "YYYY-MM-DD" date and an "HH:MM" / "HH:MM:SS" time into
/// nanoseconds UTC. "HH:MM" means "HH:MM:00".
pub(crate) fn parse_date_time(date: &str, time: &str) -> Result<i64> {
    let combine = || -> Result<i64> {
        let midnight = parse_date(date)?;
        let (hour, minute, second) = clock_fields(time)?;
        let secs = i64::from(hour) * 3600 + i64::from(minute) * 60 + i64::from(second);
        debug_assert!(secs < SECS_PER_DAY);
        midnight
            .checked_add(secs * NANOS_PER_SEC)
            .ok_or_else(|| ParseError::OutOfRange(format!("{date} {time}")))
    };
    combine().map_err(|source| ParseError::DateTime {
        date: date.to_owned(),
        time: time.to_owned(),
        source: Box::new(source),
    })
}

/// True iff `input` is exactly "YYYY-MM-DD HH:MM:SS" with valid fields.
/// Like [`is_date`], this does not require the value to fit in nanoseconds.
pub(crate) fn is_date_time(input: &str) -> bool {
    split_date_time(input, 19)
}

/// True iff `input` is exactly "YYYY-MM-DD HH:MM" with valid fields.
pub(crate) fn is_date_time_short(input: &str) -> bool {
    split_date_time(input, 16)
}

fn split_date_time(input: &str, len: usize) -> bool {
    if input.len() != len || !input.is_ascii() || input.as_bytes()[10] != b' ' {
        return false;
    }
    is_date(&input[..10]) && clock_fields(&input[11..]).is_ok()
}

/// Hours, minutes and seconds (0 when absent) of "HH:MM" or "HH:MM:SS".
fn clock_fields(input: &str) -> Result<(u8, u8, u8)> {
    let bad_format = || ParseError::TimeFormat(input.to_owned());

    let bytes = input.as_bytes();
    if !matches!(bytes.len(), 5 | 8) || bytes[2] != b':' {
        return Err(bad_format());
    }
    let hour = digits(&bytes[0..2]).ok_or_else(bad_format)? as u8;
    let minute = digits(&bytes[3..5]).ok_or_else(bad_format)? as u8;
    let second = if bytes.len() == 8 {
        if bytes[5] != b':' {
            return Err(bad_format());
        }
        digits(&bytes[6..8]).ok_or_else(bad_format)? as u8
    } else {
        0
    };

    if hour > 23 {
        return Err(ParseError::Hours(hour));
    }
    if minute > 59 {
        return Err(ParseError::Minutes(minute));
    }
    if second > 59 {
        return Err(ParseError::Seconds(second));
    }
    Ok((hour, minute, second))
}

/// Base-10 value of a run of ASCII digits; `None` on anything else.
fn digits(bytes: &[u8]) -> Option<u32> {
    bytes.iter().try_fold(0u32, |acc, &b| {
        b.is_ascii_digit().then(|| acc * 10 + u32::from(b - b'0'))
    })
}
