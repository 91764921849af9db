//! Shared utility functions for Thermogrid crates.

/// Date utility functions
pub mod dates {
    use chrono::{Datelike, NaiveDate};

    /// Date format used by the temperature CSV: "YYYY-MM-DD"
    pub const DATE_FORMAT: &str = "%Y-%m-%d";

    /// Full English month names, indexed by `month - 1`.
    pub const MONTH_NAMES: [&str; 12] = [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ];

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_date(date: &NaiveDate) -> String {
        date.format(DATE_FORMAT).to_string()
    }

    /// Parse a date string in "YYYY-MM-DD" format. Surrounding whitespace is ignored.
    pub fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
        Ok(NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)?)
    }

    /// Split a date into its (year, month, day) parts.
    pub fn decompose(date: &NaiveDate) -> (i32, u32, u32) {
        (date.year(), date.month(), date.day())
    }

    /// Full month name for a 1-based month number.
    pub fn month_name(month: u32) -> Option<&'static str> {
        match month {
            1..=12 => Some(MONTH_NAMES[(month - 1) as usize]),
            _ => None,
        }
    }

    /// Format a year and month as "YYYY-MM", e.g. (2017, 6) -> "2017-06".
    pub fn format_year_month(year: i32, month: u32) -> String {
        format!("{year:04}-{month:02}")
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use chrono::NaiveDate;

        #[test]
        fn test_format_and_parse() {
            let date = NaiveDate::from_ymd_opt(2023, 6, 15).unwrap();
            let formatted = format_date(&date);
            assert_eq!(formatted, "2023-06-15");
            let parsed = parse_date(&formatted).unwrap();
            assert_eq!(parsed, date);
        }

        #[test]
        fn test_parse_date_trims_whitespace() {
            let parsed = parse_date(" 2017-06-01 ").unwrap();
            assert_eq!(decompose(&parsed), (2017, 6, 1));
        }

        #[test]
        fn test_parse_date_rejects_other_formats() {
            assert!(parse_date("20170601").is_err());
            assert!(parse_date("2017-13-01").is_err());
            assert!(parse_date("").is_err());
        }

        #[test]
        fn test_month_name() {
            assert_eq!(month_name(1), Some("January"));
            assert_eq!(month_name(12), Some("December"));
            assert_eq!(month_name(0), None);
            assert_eq!(month_name(13), None);
        }

        #[test]
        fn test_format_year_month() {
            assert_eq!(format_year_month(2017, 6), "2017-06");
            assert_eq!(format_year_month(2008, 12), "2008-12");
        }
    }
}

/// Number formatting for temperature readouts.
pub mod format {
    /// Placeholder shown when a value is missing.
    pub const NOT_AVAILABLE: &str = "N/A";

    /// Format a temperature to one decimal place, or "N/A" when absent.
    pub fn format_temperature(value: Option<f64>) -> String {
        match value {
            Some(v) if v.is_finite() => format!("{v:.1}"),
            _ => NOT_AVAILABLE.to_string(),
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_format_temperature() {
            assert_eq!(format_temperature(Some(33.0)), "33.0");
            assert_eq!(format_temperature(Some(26.54)), "26.5");
            assert_eq!(format_temperature(Some(-3.26)), "-3.3");
            assert_eq!(format_temperature(None), "N/A");
            assert_eq!(format_temperature(Some(f64::NAN)), "N/A");
        }
    }
}
