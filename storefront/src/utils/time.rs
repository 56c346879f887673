//! Business timezone dates and display labels

use chrono::NaiveDate;
use chrono_tz::Tz;

/// Today's date in the business timezone
pub fn today(tz: Tz) -> NaiveDate {
    chrono::Utc::now().with_timezone(&tz).date_naive()
}

/// "Tuesday, October 20"
pub fn weekday_month_day(date: NaiveDate) -> String {
    date.format("%A, %B %-d").to_string()
}

/// "Tuesday, October 20, 2026"
pub fn long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 20).unwrap();
        assert_eq!(weekday_month_day(date), "Tuesday, October 20");
        assert_eq!(long_date(date), "Tuesday, October 20, 2026");
    }

    #[test]
    fn test_single_digit_day_has_no_padding() {
        let date = NaiveDate::from_ymd_opt(2026, 11, 3).unwrap();
        assert_eq!(long_date(date), "Tuesday, November 3, 2026");
    }
}
