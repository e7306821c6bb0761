//! Fixed-width formatting. Every function returns "" when its input cannot be
//! coerced; display paths show a blank field instead of failing.

use crate::civil::{secs_from_nanos, Civil};
use crate::value::TimeValue;
use crate::{calendar_at, parse};

fn civil(value: &TimeValue) -> Option<Civil> {
    value
        .to_instant()
        .and_then(|nanos| calendar_at(secs_from_nanos(nanos)))
}

/// Text that already passes `valid` is returned as-is.
fn pass_through(value: &TimeValue, valid: impl Fn(&str) -> bool) -> Option<String> {
    match value {
        TimeValue::Text(s) if valid(s) => Some(s.clone()),
        _ => None,
    }
}

/// "YYYY-MM-DD".
pub(crate) fn date(value: &TimeValue) -> String {
    pass_through(value, parse::is_date)
        .or_else(|| civil(value).map(|c| c.date()))
        .unwrap_or_default()
}

/// "HH:MM:SS" for an instant, "HH:MM" for minutes of day.
pub(crate) fn time(value: &TimeValue) -> String {
    if let TimeValue::Int16(_) = value {
        return value
            .to_minutes_of_day()
            .map(|m| format!("{:02}:{:02}", m / 60, m % 60))
            .unwrap_or_default();
    }
    pass_through(value, |s| parse::parse_time(s).is_ok())
        .or_else(|| civil(value).map(|c| c.time()))
        .unwrap_or_default()
}

/// "YYYY-MM-DD HH:MM:SS".
pub(crate) fn date_time(value: &TimeValue) -> String {
    pass_through(value, parse::is_date_time)
        .or_else(|| civil(value).map(|c| format!("{} {}", c.date(), c.time())))
        .unwrap_or_default()
}

/// "YYYY-MM-DD HH:MM", seconds truncated.
pub(crate) fn date_time_short(value: &TimeValue) -> String {
    pass_through(value, parse::is_date_time_short)
        .or_else(|| civil(value).map(|c| format!("{} {}", c.date(), c.time_short())))
        .unwrap_or_default()
}

/// "YYYY-MM-DD HH:MM" for whole Unix seconds.
pub(crate) fn unix_seconds(secs: i64) -> String {
    calendar_at(secs)
        .map(|c| format!("{} {}", c.date(), c.time_short()))
        .unwrap_or_default()
}

/// "HH:MM:SS" for anything that coerces to an instant; no pass-through.
pub(crate) fn unix_nano_time(value: &TimeValue) -> String {
    civil(value).map(|c| c.time()).unwrap_or_default()
}
