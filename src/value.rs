//! The closed set of input shapes the formatting operations accept.

use crate::parse;

/// A value handed to a formatting operation.
///
/// Integers and floats are nanoseconds since the Unix epoch, except `Int16`
/// which is a time of day in minutes since midnight. Build one with `From`:
///
/// ```
/// use tinytime::TimeValue;
///
/// assert_eq!(TimeValue::from(42i64), TimeValue::Int64(42));
/// assert_eq!(TimeValue::from(510i16), TimeValue::Int16(510));
/// assert_eq!(TimeValue::from(None::<i64>), TimeValue::Unsupported);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum TimeValue {
    Int64(i64),
    Int16(i16),
    Float64(f64),
    Text(String),
    Unsupported,
}

impl TimeValue {
    /// Coerces to nanoseconds since the epoch.
    ///
    /// Floats truncate toward zero and must be finite and inside the `i64`
    /// range. Strings must be base-10 integers with an optional leading `-`;
    /// the empty string is taken as `0`. `Int16` is a time of day, not an
    /// instant, and never coerces.
    pub fn to_instant(&self) -> Option<i64> {
        match self {
            Self::Int64(nanos) => Some(*nanos),
            Self::Float64(nanos) => float_to_nanos(*nanos),
            Self::Text(s) => integer_string(s),
            Self::Int16(_) | Self::Unsupported => None,
        }
    }

    /// Coerces to minutes since midnight, `0..=1439`.
    ///
    /// Accepts `Int16` in range, or a string in "HH:MM" / "HH:MM:SS" shape.
    pub fn to_minutes_of_day(&self) -> Option<i16> {
        match self {
            Self::Int16(minutes) if (0..crate::MINUTES_PER_DAY).contains(minutes) => Some(*minutes),
            Self::Text(s) => parse::parse_time(s).ok(),
            _ => None,
        }
    }
}

fn float_to_nanos(value: f64) -> Option<i64> {
    // i64::MAX is not representable as f64; 2^63 is the first value past it.
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    let value = value.trunc();
    (value >= -LIMIT && value < LIMIT).then_some(value as i64)
}

fn integer_string(s: &str) -> Option<i64> {
    if s.is_empty() {
        return Some(0);
    }
    let unsigned = s.strip_prefix('-').unwrap_or(s);
    if unsigned.is_empty() || !unsigned.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

impl From<i64> for TimeValue {
    fn from(nanos: i64) -> Self {
        Self::Int64(nanos)
    }
}

impl From<i32> for TimeValue {
    fn from(nanos: i32) -> Self {
        Self::Int64(i64::from(nanos))
    }
}

impl From<isize> for TimeValue {
    fn from(nanos: isize) -> Self {
        // isize is at most 64 bits on every supported target.
        Self::Int64(nanos as i64)
    }
}

impl From<i16> for TimeValue {
    fn from(minutes: i16) -> Self {
        Self::Int16(minutes)
    }
}

impl From<f64> for TimeValue {
    fn from(nanos: f64) -> Self {
        Self::Float64(nanos)
    }
}

impl From<String> for TimeValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for TimeValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<&String> for TimeValue {
    fn from(s: &String) -> Self {
        Self::Text(s.clone())
    }
}

/// `None` is the absent value: it never coerces.
impl<T: Into<TimeValue>> From<Option<T>> for TimeValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Unsupported, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers_are_nanoseconds() {
        assert_eq!(TimeValue::from(1_624_397_134_000_000_000i64).to_instant(), Some(1_624_397_134_000_000_000));
        assert_eq!(TimeValue::from(-5i32).to_instant(), Some(-5));
        assert_eq!(TimeValue::from(7isize).to_instant(), Some(7));
    }

    #[test]
    fn test_float_truncates_toward_zero() {
        assert_eq!(TimeValue::from(1.9f64).to_instant(), Some(1));
        assert_eq!(TimeValue::from(-1.9f64).to_instant(), Some(-1));
        assert_eq!(TimeValue::from(0.0f64).to_instant(), Some(0));
        assert_eq!(
            TimeValue::from(1_624_397_134_000_000_000f64).to_instant(),
            Some(1_624_397_134_000_000_000)
        );
    }

    #[test]
    fn test_float_outside_i64_fails() {
        assert_eq!(TimeValue::from(f64::NAN).to_instant(), None);
        assert_eq!(TimeValue::from(f64::INFINITY).to_instant(), None);
        assert_eq!(TimeValue::from(f64::NEG_INFINITY).to_instant(), None);
        assert_eq!(TimeValue::from(1e19f64).to_instant(), None);
        assert_eq!(TimeValue::from(-9_223_372_036_854_775_808f64).to_instant(), Some(i64::MIN));
    }

    #[test]
    fn test_integer_strings() {
        assert_eq!(TimeValue::from("1624397134000000000").to_instant(), Some(1_624_397_134_000_000_000));
        assert_eq!(TimeValue::from("-1000").to_instant(), Some(-1000));
        assert_eq!(TimeValue::from("0").to_instant(), Some(0));
    }

    #[test]
    fn test_empty_string_is_epoch() {
        assert_eq!(TimeValue::from("").to_instant(), Some(0));
        assert_eq!(TimeValue::from("").to_minutes_of_day(), None);
    }

    #[test]
    fn test_non_integer_strings_fail() {
        for s in ["abc", "12a", "-", "+5", " 5", "1.5", "--1", "99999999999999999999"] {
            assert_eq!(TimeValue::from(s).to_instant(), None, "{s}");
        }
    }

    #[test]
    fn test_int16_is_not_an_instant() {
        assert_eq!(TimeValue::from(510i16).to_instant(), None);
    }

    #[test]
    fn test_minutes_of_day() {
        assert_eq!(TimeValue::from(0i16).to_minutes_of_day(), Some(0));
        assert_eq!(TimeValue::from(1439i16).to_minutes_of_day(), Some(1439));
        assert_eq!(TimeValue::from(1440i16).to_minutes_of_day(), None);
        assert_eq!(TimeValue::from(-1i16).to_minutes_of_day(), None);
        assert_eq!(TimeValue::from("08:30:45").to_minutes_of_day(), Some(510));
        assert_eq!(TimeValue::from("25:00").to_minutes_of_day(), None);
        assert_eq!(TimeValue::from(510i64).to_minutes_of_day(), None);
    }

    #[test]
    fn test_unsupported_never_coerces() {
        assert_eq!(TimeValue::Unsupported.to_instant(), None);
        assert_eq!(TimeValue::Unsupported.to_minutes_of_day(), None);
        assert_eq!(TimeValue::from(None::<&str>), TimeValue::Unsupported);
        assert_eq!(TimeValue::from(Some(3i64)), TimeValue::Int64(3));
    }
}
