//! A small UTC time provider that behaves the same on native targets and in
//! the browser.
//!
//! Application code talks to the [`TimeProvider`] trait. [`new_time_provider`]
//! returns the implementation for the current build: native targets read the
//! system clock and use integer calendar math, `wasm32` goes through the host's
//! JavaScript `Date`. Formatting, parsing and day arithmetic run through one
//! shared engine, so both backends agree on every output.
//!
//! ```
//! use tinytime::{new_time_provider, TimeProvider};
//!
//! let tp = new_time_provider();
//! assert_eq!(tp.format_date_time(0i64), "1970-01-01 00:00:00");
//! assert_eq!(tp.parse_time("08:30:45"), Ok(510));
//! assert!(tp.parse_date("2023-02-29").is_err());
//! ```

use std::sync::atomic::{AtomicI64, Ordering};

mod civil;
mod error;
mod format;
mod parse;
#[cfg(not(target_arch = "wasm32"))]
mod timer;
mod value;

use civil::{Civil, MAX_CALENDAR_SECS, MIN_CALENDAR_SECS, NANOS_PER_DAY};

pub use error::{ParseError, Result};
#[cfg(not(target_arch = "wasm32"))]
pub use timer::{after_func, Timer};
pub use value::TimeValue;

/// Minutes in a day; minute-of-day values live in `0..MINUTES_PER_DAY`.
pub const MINUTES_PER_DAY: i16 = 1440;

// --- Platform backends ---

#[cfg(not(target_arch = "wasm32"))]
mod platform {
    use std::time::{SystemTime, UNIX_EPOCH};

    use crate::civil::{self, Civil, SECS_PER_DAY};

    pub(crate) const BACKEND: &str = "native";

    pub(crate) fn now_nanos() -> i64 {
        match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(since) => i64::try_from(since.as_nanos()).unwrap_or(i64::MAX),
            Err(err) => i64::try_from(err.duration().as_nanos()).map_or(i64::MIN, |n| -n),
        }
    }

    pub(crate) fn calendar(secs: i64) -> Option<Civil> {
        Some(civil::civil_from_secs(secs))
    }

    pub(crate) fn midnight_secs(year: i64, month: u8, day: u8) -> Option<i64> {
        Some(civil::days_from_civil(year, month, day) * SECS_PER_DAY)
    }
}

#[cfg(target_arch = "wasm32")]
mod platform {
    use js_sys::Date;

    use crate::civil::Civil;

    pub(crate) const BACKEND: &str = "js-date";

    pub(crate) fn now_nanos() -> i64 {
        // Date.now() is whole milliseconds.
        Date::now() as i64 * 1_000_000
    }

    pub(crate) fn calendar(secs: i64) -> Option<Civil> {
        let date = Date::new_0();
        if !date.set_time(secs as f64 * 1000.0).is_finite() {
            return None;
        }
        Some(Civil {
            year: i64::from(date.get_utc_full_year()),
            month: date.get_utc_month() as u8 + 1,
            day: date.get_utc_date() as u8,
            hour: date.get_utc_hours() as u8,
            minute: date.get_utc_minutes() as u8,
            second: date.get_utc_seconds() as u8,
        })
    }

    /// Date rolls overflowing days into the next month, like the native path.
    pub(crate) fn midnight_secs(year: i64, month: u8, day: u8) -> Option<i64> {
        let date = Date::new_0();
        date.set_time(0.0);
        let ms = date.set_utc_full_year_with_month_date(
            u32::try_from(year).ok()?,
            i32::from(month) - 1,
            i32::from(day),
        );
        ms.is_finite().then(|| (ms / 1000.0) as i64)
    }
}

/// Calendar fields for `secs`, or `None` outside years 0000-9999.
pub(crate) fn calendar_at(secs: i64) -> Option<Civil> {
    if !(MIN_CALENDAR_SECS..=MAX_CALENDAR_SECS).contains(&secs) {
        return None;
    }
    platform::calendar(secs)
}

// --- Clock sources ---

/// Where "now" comes from: nanoseconds since the Unix epoch, UTC.
pub trait Clock: Send + Sync {
    fn unix_nano(&self) -> i64;
}

/// The host clock of the current build target.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn unix_nano(&self) -> i64 {
        platform::now_nanos()
    }
}

/// A clock that only moves when told to.
#[derive(Debug, Default)]
pub struct FixedClock {
    nanos: AtomicI64,
}

impl FixedClock {
    pub fn new(nanos: i64) -> Self {
        Self {
            nanos: AtomicI64::new(nanos),
        }
    }

    pub fn set(&self, nanos: i64) {
        self.nanos.store(nanos, Ordering::SeqCst);
    }

    /// Moves the clock by `delta` nanoseconds (negative goes back), saturating
    /// at the ends of the `i64` range.
    pub fn advance(&self, delta: i64) {
        // The closure never returns None, so the update always succeeds.
        let _ = self
            .nanos
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| {
                Some(n.saturating_add(delta))
            });
    }
}

impl Clock for FixedClock {
    fn unix_nano(&self) -> i64 {
        self.nanos.load(Ordering::SeqCst)
    }
}

impl<F> Clock for F
where
    F: Fn() -> i64 + Send + Sync,
{
    fn unix_nano(&self) -> i64 {
        self()
    }
}

// --- Capability set ---

/// Everything application code may ask of the time provider.
///
/// Instants are `i64` nanoseconds since the Unix epoch, UTC. Times of day are
/// `i16` minutes since midnight.
pub trait TimeProvider {
    /// Current instant.
    fn now(&self) -> i64;

    /// Same as [`now`](TimeProvider::now).
    fn unix_nano(&self) -> i64 {
        self.now()
    }

    /// "YYYY-MM-DD", or "" if `value` does not coerce to an instant.
    /// A string that already is a valid date is returned unchanged.
    fn format_date<V: Into<TimeValue>>(&self, value: V) -> String;

    /// "HH:MM:SS" for an instant, "HH:MM" for an `i16` minute of day, or "".
    /// A valid "HH:MM" or "HH:MM:SS" string is returned unchanged.
    fn format_time<V: Into<TimeValue>>(&self, value: V) -> String;

    /// "YYYY-MM-DD HH:MM:SS", or "".
    fn format_date_time<V: Into<TimeValue>>(&self, value: V) -> String;

    /// "YYYY-MM-DD HH:MM" with seconds truncated, or "".
    fn format_date_time_short<V: Into<TimeValue>>(&self, value: V) -> String;

    /// Midnight UTC of a strict "YYYY-MM-DD" date.
    fn parse_date(&self, date: &str) -> Result<i64>;

    /// Minutes since midnight of "HH:MM" or "HH:MM:SS"; seconds are checked and dropped.
    fn parse_time(&self, time: &str) -> Result<i16>;

    /// Instant of a "YYYY-MM-DD" date at an "HH:MM" or "HH:MM:SS" time, UTC.
    fn parse_date_time(&self, date: &str, time: &str) -> Result<i64>;

    /// Whether `nanos` falls on today's UTC date. Reads the clock on every call.
    fn is_today(&self, nanos: i64) -> bool;

    fn is_past(&self, nanos: i64) -> bool;

    fn is_future(&self, nanos: i64) -> bool;

    /// Whole days from `from` to `to`, truncated toward zero.
    fn days_between(&self, from: i64, to: i64) -> i64;

    /// "YYYY-MM-DD HH:MM" for whole Unix seconds, or "" outside years 0000-9999.
    fn unix_seconds_to_date(&self, seconds: i64) -> String;

    /// "HH:MM:SS" for anything that coerces to an instant, or "".
    fn unix_nano_to_time<V: Into<TimeValue>>(&self, value: V) -> String;
}

/// The time provider, generic over its clock.
#[derive(Debug, Clone, Default)]
pub struct Provider<C = SystemClock> {
    clock: C,
}

/// Returns the provider for the current build target, reading the host clock.
pub fn new_time_provider() -> Provider {
    tracing::debug!(backend = platform::BACKEND, "time provider ready");
    Provider::new()
}

impl Provider {
    pub fn new() -> Self {
        Self { clock: SystemClock }
    }
}

impl<C: Clock> Provider<C> {
    /// A provider that takes "now" from `clock`.
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Runs `f` once on a background thread after `delay_ms` milliseconds.
    ///
    /// See [`after_func`] for the thread cost of a pending timer.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn after_func<F>(&self, delay_ms: u64, f: F) -> Timer
    where
        F: FnOnce() + Send + 'static,
    {
        timer::after_func(delay_ms, f)
    }
}

impl<C: Clock> TimeProvider for Provider<C> {
    fn now(&self) -> i64 {
        self.clock.unix_nano()
    }

    fn format_date<V: Into<TimeValue>>(&self, value: V) -> String {
        format::date(&value.into())
    }

    fn format_time<V: Into<TimeValue>>(&self, value: V) -> String {
        format::time(&value.into())
    }

    fn format_date_time<V: Into<TimeValue>>(&self, value: V) -> String {
        format::date_time(&value.into())
    }

    fn format_date_time_short<V: Into<TimeValue>>(&self, value: V) -> String {
        format::date_time_short(&value.into())
    }

    fn parse_date(&self, date: &str) -> Result<i64> {
        parse::parse_date(date)
    }

    fn parse_time(&self, time: &str) -> Result<i16> {
        parse::parse_time(time)
    }

    fn parse_date_time(&self, date: &str, time: &str) -> Result<i64> {
        parse::parse_date_time(date, time)
    }

    fn is_today(&self, nanos: i64) -> bool {
        civil::day_index(nanos) == civil::day_index(self.now())
    }

    fn is_past(&self, nanos: i64) -> bool {
        nanos < self.now()
    }

    fn is_future(&self, nanos: i64) -> bool {
        nanos > self.now()
    }

    fn days_between(&self, from: i64, to: i64) -> i64 {
        // The difference can exceed i64; the day count cannot.
        ((i128::from(to) - i128::from(from)) / i128::from(NANOS_PER_DAY)) as i64
    }

    fn unix_seconds_to_date(&self, seconds: i64) -> String {
        format::unix_seconds(seconds)
    }

    fn unix_nano_to_time<V: Into<TimeValue>>(&self, value: V) -> String {
        format::unix_nano_time(&value.into())
    }
}
