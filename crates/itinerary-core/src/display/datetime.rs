//! DateTime display utilities.
//!
//! Wrapper types that format instants and durations consistently. Trip-level
//! values use the system time zone; activity times use the record's own time
//! zone when it names a known zone.

use std::fmt;

use jiff::{tz::TimeZone, SignedDuration, Timestamp};

/// Formats a `Timestamp` as `YYYY-MM-DD HH:MM:SS TZ` in the system time zone.
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl<'a> fmt::Display for LocalDateTime<'a> {
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

/// Formats a `Timestamp` as the `YYYY-MM-DD` day in the system time zone.
pub struct LocalDate<'a>(pub &'a Timestamp);

impl<'a> fmt::Display for LocalDate<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_zoned(TimeZone::system()).date())
    }
}

/// Formats a `Timestamp` in the IANA zone `tz_id`, falling back to the
/// system zone when the id is missing or unknown.
pub struct ZonedDateTime<'a> {
    pub timestamp: &'a Timestamp,
    pub tz_id: Option<&'a str>,
}

impl<'a> ZonedDateTime<'a> {
    pub fn new(timestamp: &'a Timestamp, tz_id: Option<&'a str>) -> Self {
        Self { timestamp, tz_id }
    }
}

impl<'a> fmt::Display for ZonedDateTime<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tz = self
            .tz_id
            .and_then(|id| TimeZone::get(id).ok())
            .unwrap_or_else(TimeZone::system);
        write!(
            f,
            "{}",
            self.timestamp.to_zoned(tz).strftime("%Y-%m-%d %H:%M %Z")
        )
    }
}

/// Formats a signed duration as hours and minutes, e.g. `2h 05m` or `-1h 30m`.
pub struct HumanDuration(pub SignedDuration);

impl fmt::Display for HumanDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secs = self.0.as_secs();
        let sign = if secs < 0 { "-" } else { "" };
        let minutes = secs.unsigned_abs() / 60;
        let (days, hours, minutes) = (minutes / 1440, (minutes / 60) % 24, minutes % 60);
        if days > 0 {
            write!(f, "{sign}{days}d {hours}h {minutes:02}m")
        } else {
            write!(f, "{sign}{hours}h {minutes:02}m")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zoned_datetime_uses_record_zone() {
        let ts: Timestamp = "2024-01-01T08:00:00Z".parse().unwrap();
        let output = ZonedDateTime::new(&ts, Some("Asia/Tokyo")).to_string();
        assert_eq!(output, "2024-01-01 17:00 JST");
    }

    #[test]
    fn test_human_duration() {
        assert_eq!(
            HumanDuration(SignedDuration::from_mins(125)).to_string(),
            "2h 05m"
        );
        assert_eq!(
            HumanDuration(SignedDuration::from_mins(-90)).to_string(),
            "-1h 30m"
        );
        assert_eq!(
            HumanDuration(SignedDuration::from_hours(50)).to_string(),
            "2d 2h 00m"
        );
    }
}
