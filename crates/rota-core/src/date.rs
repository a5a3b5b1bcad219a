use chrono::NaiveDate;

use crate::error::RecurrenceError;

/// Wire format for calendar dates: fixed-width `YYYYMMDD`.
pub const DATE_FORMAT: &str = "%Y%m%d";

/// Parse an 8-digit `YYYYMMDD` string into a calendar date.
///
/// Only the exact 8-digit form is accepted; wrong length, non-numeric input,
/// and impossible calendar dates (month 13, day 32) are all rejected.
pub fn parse_compact(s: &str) -> Result<NaiveDate, RecurrenceError> {
    if s.len() != 8 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(RecurrenceError::InvalidDate(s.to_string()));
    }
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .map_err(|_| RecurrenceError::InvalidDate(s.to_string()))
}

/// Format a calendar date in its 8-digit `YYYYMMDD` wire representation.
pub fn format_compact(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_dates() {
        assert_eq!(
            parse_compact("20240301"),
            Ok(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())
        );
        // Feb 29 exists in leap years only.
        assert!(parse_compact("20240229").is_ok());
        assert!(parse_compact("20230229").is_err());
    }

    #[test]
    fn rejects_wrong_shapes() {
        for input in ["", "2024031", "202403011", "2024-03-01", "2024030a", "abcdefgh"] {
            assert_eq!(
                parse_compact(input),
                Err(RecurrenceError::InvalidDate(input.to_string())),
                "input {input:?} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_impossible_calendar_dates() {
        assert!(parse_compact("20241301").is_err());
        assert!(parse_compact("20240132").is_err());
        assert!(parse_compact("20240400").is_err());
    }

    #[test]
    fn round_trips_through_the_wire_format() {
        let date = parse_compact("20240115").unwrap();
        let formatted = format_compact(date);
        assert_eq!(formatted, "20240115");
        assert_eq!(formatted.len(), 8);
        assert!(formatted.bytes().all(|b| b.is_ascii_digit()));
    }
}
