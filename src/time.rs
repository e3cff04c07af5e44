// File: src/time.rs

use chrono::{DateTime, FixedOffset};

/// Converts the CLF textual timestamp (e.g. "10/Nov/2000:13:55:36 -0700")
/// into a timezone-aware instant. The numeric offset embedded in the log
/// is kept as-is rather than being normalized to UTC, so reports can show
/// times the way the server recorded them.
pub fn parse_clf_date(raw: &str) -> Result<DateTime<FixedOffset>, chrono::ParseError> {
    DateTime::parse_from_str(raw, "%d/%b/%Y:%H:%M:%S %z")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Offset, Timelike};

    #[test]
    fn parses_clf_timestamp_and_keeps_the_offset() {
        let dt = parse_clf_date("10/Nov/2000:13:55:36 -0700").unwrap();
        assert_eq!(dt.to_rfc3339(), "2000-11-10T13:55:36-07:00");
        // The local wall-clock hour is preserved, not shifted to UTC.
        assert_eq!(dt.hour(), 13);
        assert_eq!(dt.offset().fix().local_minus_utc(), -7 * 3600);
    }

    #[test]
    fn rejects_a_timestamp_without_an_offset() {
        assert!(parse_clf_date("10/Nov/2000:13:55:36").is_err());
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_clf_date("not a date").is_err());
    }
}
