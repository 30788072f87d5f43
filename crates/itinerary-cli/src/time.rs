//! Parsing of user-entered dates and times.
//!
//! Accepts an RFC 3339 instant (`2024-05-02T09:00:00Z`), a civil date-time
//! (`2024-05-02T09:00` or `2024-05-02 09:00`) or a bare date (`2024-05-02`,
//! meaning the start of that day). Civil values are resolved in the given IANA
//! time zone, or the system time zone when none is given.

use anyhow::{anyhow, Context, Result};
use jiff::{
    civil::{Date, DateTime},
    tz::TimeZone,
    Timestamp,
};

pub fn resolve_instant(text: &str, tz_id: Option<&str>) -> Result<Timestamp> {
    let text = text.trim();
    if let Ok(instant) = text.parse::<Timestamp>() {
        return Ok(instant);
    }

    let tz = match tz_id {
        Some(id) => TimeZone::get(id).with_context(|| format!("Unknown time zone '{id}'"))?,
        None => TimeZone::system(),
    };

    if let Ok(datetime) = text.parse::<DateTime>() {
        return Ok(datetime.to_zoned(tz)?.timestamp());
    }
    if let Ok(date) = text.parse::<Date>() {
        return Ok(date.to_zoned(tz)?.timestamp());
    }

    Err(anyhow!(
        "Cannot read '{text}' as a date or time; use e.g. 2024-05-02, 2024-05-02T09:00 or 2024-05-02T09:00:00Z"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rfc3339_instant_ignores_zone() {
        let instant = resolve_instant("2024-05-02T09:00:00Z", Some("Asia/Tokyo")).unwrap();
        assert_eq!(instant.to_string(), "2024-05-02T09:00:00Z");
    }

    #[test]
    fn test_civil_datetime_resolved_in_zone() {
        let instant = resolve_instant("2024-01-01T17:00", Some("Asia/Tokyo")).unwrap();
        assert_eq!(instant.to_string(), "2024-01-01T08:00:00Z");
    }

    #[test]
    fn test_date_is_start_of_day() {
        let instant = resolve_instant("2024-01-01", Some("America/New_York")).unwrap();
        assert_eq!(instant.to_string(), "2024-01-01T05:00:00Z");
    }

    #[test]
    fn test_rejects_garbage_and_unknown_zones() {
        assert!(resolve_instant("next tuesday", Some("UTC")).is_err());
        assert!(resolve_instant("2024-01-01", Some("Nowhere/City")).is_err());
    }
}
