//! Calendar-month helpers used by all month-scoped aggregation.

use chrono::{Datelike, Duration, NaiveDate};

use crewledger_domain::Engagement;

pub use crewledger_domain::calculate_days;

/// Returns the month key for `date`: the first calendar day of the month
/// containing it. All month-scoped grouping and invoice lookups key on this.
pub fn month_key(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap()
}

/// Returns the first day of the month after the one containing `date`.
pub fn next_month(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1).unwrap()
}

/// Returns the last calendar day of the month containing `date`.
pub fn month_end(date: NaiveDate) -> NaiveDate {
    next_month(date) - Duration::days(1)
}

/// An engagement qualifies for a month when it is active, started on or
/// before the month's last day, and has no end date before the month's first
/// day.
pub fn is_engagement_active_in_month(engagement: &Engagement, month: NaiveDate) -> bool {
    if !engagement.is_active {
        return false;
    }
    let start = month_key(month);
    if engagement.start_date > month_end(start) {
        return false;
    }
    if let Some(end_date) = engagement.end_date {
        if end_date < start {
            return false;
        }
    }
    true
}
