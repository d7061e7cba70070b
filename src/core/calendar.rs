use chrono::{Datelike, NaiveDate};

/// Weekday index with Sunday = 0 through Saturday = 6.
pub fn day_of_week(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_sunday()
}

/// ISO-8601 week number (weeks start Monday, week 1 holds the first Thursday).
pub fn week_of_year(date: NaiveDate) -> u32 {
    date.iso_week().week()
}
