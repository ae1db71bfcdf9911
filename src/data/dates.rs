//! Report date selection and parsing

use crate::error::AppError;
use chrono::{Local, NaiveDate, Utc};
use tracing::info;

/// Returns the calendar day before `today`.
///
/// Falls back to `today` itself only at the minimum representable date.
pub fn yesterday(today: NaiveDate) -> NaiveDate {
    today.pred_opt().unwrap_or(today)
}

/// Parses a user supplied date in `YYYY-MM-DD` or `YYYYMMDD` form.
pub fn parse_date(input: &str) -> Result<NaiveDate, AppError> {
    let input = input.trim();
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(input, "%Y%m%d"))
        .map_err(|e| {
            AppError::datetime_parse_error(format!(
                "Invalid date '{input}' (expected YYYY-MM-DD): {e}"
            ))
        })
}

/// Picks the date to report on: the requested one, or yesterday in local time.
pub fn determine_report_date(custom_date: Option<&str>) -> Result<NaiveDate, AppError> {
    // Use UTC internally, convert to local time for the calendar day
    let today = Utc::now().with_timezone(&Local).date_naive();
    determine_report_date_from(custom_date, today)
}

/// Same as [`determine_report_date`] with an injected "today" for deterministic tests.
pub fn determine_report_date_from(
    custom_date: Option<&str>,
    today: NaiveDate,
) -> Result<NaiveDate, AppError> {
    match custom_date {
        Some(date) => parse_date(date),
        None => {
            let date = yesterday(today);
            info!("Using yesterday's date: {date}");
            Ok(date)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_yesterday_crosses_month_and_year() {
        assert_eq!(yesterday(ymd(2019, 10, 7)), ymd(2019, 10, 6));
        assert_eq!(yesterday(ymd(2020, 3, 1)), ymd(2020, 2, 29));
        assert_eq!(yesterday(ymd(2021, 1, 1)), ymd(2020, 12, 31));
    }

    #[test]
    fn test_parse_date_formats() {
        assert_eq!(parse_date("2019-10-06").unwrap(), ymd(2019, 10, 6));
        assert_eq!(parse_date("20191006").unwrap(), ymd(2019, 10, 6));
        assert_eq!(parse_date(" 2019-10-06 ").unwrap(), ymd(2019, 10, 6));
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        assert!(matches!(parse_date("06.10.2019"), Err(AppError::DateTimeParse(_))));
        assert!(matches!(parse_date("2019-02-30"), Err(AppError::DateTimeParse(_))));
        assert!(matches!(parse_date(""), Err(AppError::DateTimeParse(_))));
    }

    #[test]
    fn test_determine_report_date_defaults_to_yesterday() {
        let today = ymd(2019, 10, 7);
        assert_eq!(determine_report_date_from(None, today).unwrap(), ymd(2019, 10, 6));
    }

    #[test]
    fn test_determine_report_date_uses_custom_date() {
        let today = ymd(2019, 10, 7);
        assert_eq!(
            determine_report_date_from(Some("2019-04-10"), today).unwrap(),
            ymd(2019, 4, 10)
        );
        assert!(determine_report_date_from(Some("yesterday"), today).is_err());
    }
}
