use thiserror::Error;

/// Why a date or time string was rejected.
///
/// The variant is the cause class; the message text is for humans only.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("invalid date format: {0:?} (want YYYY-MM-DD)")]
    DateFormat(String),

    /// Well-formed, but names a day the calendar does not have (e.g. 2023-02-29).
    #[error("invalid calendar date: {0:?}")]
    CalendarDate(String),

    #[error("invalid time format: {0:?} (want HH:MM or HH:MM:SS)")]
    TimeFormat(String),

    #[error("invalid hours: {0}")]
    Hours(u8),

    #[error("invalid minutes: {0}")]
    Minutes(u8),

    #[error("invalid seconds: {0}")]
    Seconds(u8),

    /// Valid on the calendar, but outside what an i64 nanosecond count can hold.
    #[error("out of range for a nanosecond timestamp: {0:?}")]
    OutOfRange(String),

    #[error("invalid date/time: {date:?} {time:?}")]
    DateTime {
        date: String,
        time: String,
        #[source]
        source: Box<ParseError>,
    },
}

pub type Result<T> = std::result::Result<T, ParseError>;
