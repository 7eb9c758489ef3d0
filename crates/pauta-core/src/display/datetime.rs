//! DateTime display utilities.
//!
//! Wrapper types for formatting timestamps in a consistent, human-readable
//! format using the system timezone.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

/// Formats a `Timestamp` as `YYYY-MM-DD HH:MM:SS TZ` in the system timezone.
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M:%S %Z")
        )
    }
}

/// Formats a `Timestamp` as a calendar date (`YYYY-MM-DD`, system timezone).
/// Used where the time of day is noise, e.g. the agenda and trash expiry.
pub struct LocalDate<'a>(pub &'a Timestamp);

impl fmt::Display for LocalDate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0.to_zoned(TimeZone::system()).strftime("%Y-%m-%d")
        )
    }
}
