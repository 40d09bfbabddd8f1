use chrono::NaiveDateTime;

use crate::consts::TIMESTAMP_FORMAT;

/// Parse a trip timestamp. Fractional seconds and an ISO `T` separator are
/// accepted as well as the plain dataset layout.
pub(crate) fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT) {
        return Some(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(dt);
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn parses_dataset_layout() {
        let dt = parse_timestamp("2017-06-23 15:09:32").unwrap();
        assert_eq!(dt.year(), 2017);
        assert_eq!(dt.month(), 6);
        assert_eq!(dt.hour(), 15);
    }

    #[test]
    fn parses_fractional_and_iso() {
        assert!(parse_timestamp("2017-06-23 15:09:32.123").is_some());
        assert!(parse_timestamp("2017-06-23T15:09:32").is_some());
        assert!(parse_timestamp(" 2017-06-23 15:09:32 ").is_some());
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_timestamp("").is_none());
        assert!(parse_timestamp("2017-06-23").is_none());
        assert!(parse_timestamp("yesterday").is_none());
        assert!(parse_timestamp("2017-13-01 00:00:00").is_none());
    }
}
