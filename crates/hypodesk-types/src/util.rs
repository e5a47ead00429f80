use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

use crate::{Error, Result};

/// Parse a timestamp as sent by the backend.
///
/// Accepts plain `YYYY-MM-DD` (read as midnight), RFC 3339 timestamps
/// (normalized to UTC) and naive `YYYY-MM-DD[T ]HH:MM:SS[.fff]` timestamps.
pub fn parse_backend_timestamp(raw: &str) -> Result<NaiveDateTime> {
    let raw = raw.trim();

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN));
    }

    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(ts.naive_utc());
    }

    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(ts) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Ok(ts);
        }
    }

    Err(Error::InvalidDate(raw.to_string()))
}

/// Calendar date of a backend timestamp.
pub fn parse_backend_date(raw: &str) -> Result<NaiveDate> {
    parse_backend_timestamp(raw).map(|ts| ts.date())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        ymd(y, m, d).and_hms_opt(h, min, 0).unwrap()
    }

    #[test]
    fn test_plain_date_reads_as_midnight() {
        assert_eq!(
            parse_backend_timestamp("2025-10-30").unwrap(),
            at(2025, 10, 30, 0, 0)
        );
    }

    #[test]
    fn test_timestamps_keep_time_of_day() {
        assert_eq!(
            parse_backend_timestamp("2025-10-30T08:00:00").unwrap(),
            at(2025, 10, 30, 8, 0)
        );
        assert_eq!(
            parse_backend_timestamp("2025-10-30 23:10:00.5").unwrap(),
            ymd(2025, 10, 30).and_hms_milli_opt(23, 10, 0, 500).unwrap()
        );
        assert_eq!(
            parse_backend_timestamp("2025-10-30T23:10:00+02:00").unwrap(),
            at(2025, 10, 30, 21, 10)
        );
    }

    #[test]
    fn test_parse_plain_date() {
        assert_eq!(parse_backend_date("2025-10-30").unwrap(), ymd(2025, 10, 30));
    }

    #[test]
    fn test_parse_timestamps_keep_calendar_date() {
        assert_eq!(
            parse_backend_date("2025-10-30T23:10:00Z").unwrap(),
            ymd(2025, 10, 30)
        );
        assert_eq!(
            parse_backend_date("2025-10-30T08:00:00.123").unwrap(),
            ymd(2025, 10, 30)
        );
        assert_eq!(
            parse_backend_date("2025-10-30 08:00:00").unwrap(),
            ymd(2025, 10, 30)
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(
            parse_backend_date("30/10/2025"),
            Err(Error::InvalidDate("30/10/2025".to_string()))
        );
    }
}
