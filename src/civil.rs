//! Proleptic Gregorian calendar arithmetic in UTC.
//!
//! Seconds are mapped to calendar days with floor semantics, so instants before
//! the epoch land on the previous day rather than being folded toward 1970.

pub(crate) const SECS_PER_DAY: i64 = 86_400;
pub(crate) const NANOS_PER_SEC: i64 = 1_000_000_000;
pub(crate) const NANOS_PER_DAY: i64 = SECS_PER_DAY * NANOS_PER_SEC;

/// 0000-01-01 00:00:00 UTC.
pub(crate) const MIN_CALENDAR_SECS: i64 = -62_167_219_200;
/// 9999-12-31 23:59:59 UTC.
pub(crate) const MAX_CALENDAR_SECS: i64 = 253_402_300_799;

/// Broken-down UTC calendar fields for one second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct Civil {
    pub(crate) year: i64,
    pub(crate) month: u8,
    pub(crate) day: u8,
    pub(crate) hour: u8,
    pub(crate) minute: u8,
    pub(crate) second: u8,
}

impl Civil {
    /// Formats as "YYYY-MM-DD".
    pub(crate) fn date(&self) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }

    /// Formats as "HH:MM:SS".
    pub(crate) fn time(&self) -> String {
        format!("{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }

    /// Formats as "HH:MM", dropping the seconds.
    pub(crate) fn time_short(&self) -> String {
        format!("{:02}:{:02}", self.hour, self.minute)
    }
}

/// Whole seconds in `nanos`, truncated toward zero.
pub(crate) fn secs_from_nanos(nanos: i64) -> i64 {
    nanos / NANOS_PER_SEC
}

/// Days since 1970-01-01 of the UTC date holding `nanos`.
pub(crate) fn day_index(nanos: i64) -> i64 {
    secs_from_nanos(nanos).div_euclid(SECS_PER_DAY)
}

/// Converts Unix epoch seconds to calendar fields using Howard Hinnant's civil_from_days algorithm.
#[cfg_attr(target_arch = "wasm32", allow(dead_code))]
pub(crate) fn civil_from_secs(secs: i64) -> Civil {
    let day_secs = secs.rem_euclid(SECS_PER_DAY);
    let hour = (day_secs / 3600) as u8;
    let minute = ((day_secs % 3600) / 60) as u8;
    let second = (day_secs % 60) as u8;

    let z = secs.div_euclid(SECS_PER_DAY) + 719_468; // shift epoch to 0000-03-01
    let era = if z >= 0 { z } else { z - 146_096 } / 146_097;
    let doe = z - era * 146_097; // day of era [0, 146096]
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365; // year of era [0, 399]
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100); // day of year [0, 365]
    let mp = (5 * doy + 2) / 153; // month proxy [0, 11]
    let day = (doy - (153 * mp + 2) / 5 + 1) as u8;
    let month = if mp < 10 { mp + 3 } else { mp - 9 } as u8;
    let year = if month <= 2 { y + 1 } else { y };

    Civil {
        year,
        month,
        day,
        hour,
        minute,
        second,
    }
}

/// Days since 1970-01-01 for the given fields, via Hinnant's days_from_civil.
///
/// Out-of-range days roll over into the following month (2023-02-29 lands on
/// 2023-03-01); callers that need strictness compare the result back against
/// their input.
#[cfg_attr(target_arch = "wasm32", allow(dead_code))]
pub(crate) fn days_from_civil(year: i64, month: u8, day: u8) -> i64 {
    let m = i64::from(month);
    let d = i64::from(day);
    let y = if m <= 2 { year - 1 } else { year };
    let era = if y >= 0 { y } else { y - 399 } / 400;
    let yoe = y - era * 400;
    let doy = (153 * (if m > 2 { m - 3 } else { m + 9 }) + 2) / 5 + d - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}
