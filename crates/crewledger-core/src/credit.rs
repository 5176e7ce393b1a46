//! Credit accumulation: explicit holiday-credit records plus implicit credits
//! from untaken holidays.

use chrono::NaiveDate;
use uuid::Uuid;

use crewledger_domain::{DayOffRequest, DayOffStatus, Engagement, Holiday, HolidayCredit};

use crate::period::month_key;

/// Total credit days an engagement earns in `month`: explicit credits dated
/// in the month plus untaken holidays in the month that no explicit credit
/// covers.
///
/// The suppression lookup is date-exact and deliberately month-agnostic:
/// credits are recorded by date, so a credit dated in another month still
/// suppresses a holiday that falls on the same calendar date.
pub fn credit_days_in_month(
    engagement_id: Uuid,
    month: NaiveDate,
    holiday_credits: &[HolidayCredit],
    holidays: Option<&[Holiday]>,
) -> u32 {
    let month = month_key(month);
    let explicit: u32 = holiday_credits
        .iter()
        .filter(|credit| credit.engagement_id == engagement_id && month_key(credit.date) == month)
        .map(|credit| credit.credit_days)
        .sum();

    let implicit = holidays
        .map(|holidays| {
            holidays
                .iter()
                .filter(|holiday| {
                    holiday.engagement_id == engagement_id
                        && !holiday.is_taken
                        && month_key(holiday.date) == month
                        && !has_exact_credit(holiday, holiday_credits)
                })
                .count() as u32
        })
        .unwrap_or(0);

    explicit + implicit
}

/// Running credit balance for an engagement from its start date to present:
/// all explicit and implicit credits on or after the start, minus approved
/// day-off days whose requests start on or after the start. May be negative.
///
/// Used by day-off calendar displays; shares the credit-counting rules of
/// [`credit_days_in_month`] but spans the whole engagement and nets out
/// approved time off.
pub fn running_credit_balance(
    engagement: &Engagement,
    day_off_requests: &[DayOffRequest],
    holiday_credits: &[HolidayCredit],
    holidays: Option<&[Holiday]>,
) -> i64 {
    let start = engagement.start_date;

    let explicit: i64 = holiday_credits
        .iter()
        .filter(|credit| credit.engagement_id == engagement.id && credit.date >= start)
        .map(|credit| credit.credit_days as i64)
        .sum();

    let implicit = holidays
        .map(|holidays| {
            holidays
                .iter()
                .filter(|holiday| {
                    holiday.engagement_id == engagement.id
                        && !holiday.is_taken
                        && holiday.date >= start
                        && !has_exact_credit(holiday, holiday_credits)
                })
                .count() as i64
        })
        .unwrap_or(0);

    let approved: i64 = day_off_requests
        .iter()
        .filter(|req| {
            req.engagement_id == engagement.id
                && req.status == DayOffStatus::ClientApproved
                && req.start_date >= start
        })
        .map(|req| req.days as i64)
        .sum();

    explicit + implicit - approved
}

fn has_exact_credit(holiday: &Holiday, holiday_credits: &[HolidayCredit]) -> bool {
    holiday_credits
        .iter()
        .any(|credit| credit.engagement_id == holiday.engagement_id && credit.date == holiday.date)
}
