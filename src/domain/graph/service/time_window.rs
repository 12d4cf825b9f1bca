use chrono::{DateTime, NaiveDateTime, TimeDelta, Utc};

use crate::domain::graph::error::GraphError;

pub const REQUEST_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Length of the window used when a request names no start time.
pub const DEFAULT_WINDOW_HOURS: i64 = 24;

/// Resolves optional request times against `now`. Missing or blank values
/// fall back to `now` for the end and 24 hours before `now` for the start.
pub fn resolve_window(
    start_time: Option<&str>,
    end_time: Option<&str>,
    now: DateTime<Utc>,
) -> Result<(DateTime<Utc>, DateTime<Utc>), GraphError> {
    let start = match non_blank(start_time) {
        Some(s) => parse_request_time(s, "start")?,
        None => now - TimeDelta::hours(DEFAULT_WINDOW_HOURS),
    };
    let end = match non_blank(end_time) {
        Some(e) => parse_request_time(e, "end")?,
        None => now,
    };
    Ok((start, end))
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn parse_request_time(value: &str, which: &str) -> Result<DateTime<Utc>, GraphError> {
    NaiveDateTime::parse_from_str(value, REQUEST_DATETIME_FORMAT)
        .map(|t| t.and_utc())
        .map_err(|_| GraphError::InvalidRequest(format!("Invalid {} time {:?}", which, value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2016, 1, 2, 12, 0, 0).unwrap()
    }

    #[test]
    fn defaults_to_last_day() {
        let (start, end) = resolve_window(None, Some("  "), now()).unwrap();
        assert_eq!(end, now());
        assert_eq!(start, Utc.with_ymd_and_hms(2016, 1, 1, 12, 0, 0).unwrap());
    }

    #[test]
    fn parses_explicit_times() {
        let (start, end) =
            resolve_window(Some("2016-01-01 04:05:00"), Some("2016-01-01 04:10:30"), now())
                .unwrap();
        assert_eq!(start, Utc.with_ymd_and_hms(2016, 1, 1, 4, 5, 0).unwrap());
        assert_eq!(end, Utc.with_ymd_and_hms(2016, 1, 1, 4, 10, 30).unwrap());
    }

    #[test]
    fn rejects_malformed_times() {
        let err = resolve_window(Some("yesterday"), None, now()).unwrap_err();
        assert_eq!(
            err,
            GraphError::InvalidRequest("Invalid start time \"yesterday\"".into())
        );
        assert!(resolve_window(None, Some("2016-01-01T04:05:00Z"), now()).is_err());
    }
}
