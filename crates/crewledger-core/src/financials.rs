//! The monthly financial calculator: approved day-off totals, credit offsets,
//! and the three-section breakdown per engagement.

use chrono::NaiveDate;

use crewledger_domain::{
    DayOffRequest, DayOffStatus, Engagement, Holiday, HolidayCredit, MonthlyFinancials, PeriodUnit,
};

use crate::credit::credit_days_in_month;
use crate::period::{is_engagement_active_in_month, month_key};

/// Average weeks per month, used to normalize weekly rates to a monthly basis.
pub const WEEKS_PER_MONTH: f64 = 52.0 / 12.0;

/// Computes the monthly breakdown for every engagement active in `month`.
///
/// Output order follows the input engagement order. Credits offset approved
/// time off before any charge applies, so the billable deduction never goes
/// negative. No currency rounding happens here; formatting is a presentation
/// concern.
///
/// `month` may be any date in the target month; it is normalized to the
/// month key before aggregation.
pub fn calculate_monthly_financials(
    engagements: &[Engagement],
    day_off_requests: &[DayOffRequest],
    holiday_credits: &[HolidayCredit],
    month: NaiveDate,
    holidays: Option<&[Holiday]>,
) -> Vec<MonthlyFinancials> {
    let month = month_key(month);
    engagements
        .iter()
        .filter(|engagement| is_engagement_active_in_month(engagement, month))
        .map(|engagement| {
            let approved_days: u32 = day_off_requests
                .iter()
                .filter(|req| {
                    req.engagement_id == engagement.id
                        && req.status == DayOffStatus::ClientApproved
                        && month_key(req.start_date) == month
                })
                .map(|req| req.days)
                .sum();

            let credit_days = credit_days_in_month(engagement.id, month, holiday_credits, holidays);
            let billable_deduction_days = approved_days.saturating_sub(credit_days);
            let deduction = billable_deduction_days as f64;

            let monthly_price = monthly_rate(engagement.price_per_period, engagement.period_unit);
            let monthly_salary = monthly_rate(engagement.salary_per_period, engagement.period_unit);

            let section2_client_invoice =
                monthly_price - deduction * engagement.client_dayoff_rate;
            let section3_dev_pay = monthly_salary - deduction * engagement.dev_dayoff_rate;
            let section1_company_net = section2_client_invoice - section3_dev_pay;

            MonthlyFinancials {
                engagement_id: engagement.id,
                month,
                approved_days,
                credit_days,
                billable_deduction_days,
                section2_client_invoice,
                section3_dev_pay,
                section1_company_net,
            }
        })
        .collect()
}

fn monthly_rate(rate: f64, unit: PeriodUnit) -> f64 {
    match unit {
        PeriodUnit::Month => rate,
        PeriodUnit::Week => rate * WEEKS_PER_MONTH,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crewledger_domain::{Currency, DayOffType};
    use uuid::Uuid;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn month_engagement() -> Engagement {
        Engagement::new(
            Uuid::new_v4(),
            Uuid::new_v4(),
            date(2024, 1, 1),
            Currency::Usd,
            15000.0,
            10000.0,
            750.0,
            500.0,
            PeriodUnit::Month,
        )
    }

    fn approved_request(engagement: &Engagement, start: NaiveDate, end: NaiveDate) -> DayOffRequest {
        let mut request = DayOffRequest::new(
            engagement.id,
            engagement.developer_id,
            engagement.client_id,
            start,
            end,
            DayOffType::Vacation,
        );
        request.status = DayOffStatus::ClientApproved;
        request
    }

    #[test]
    fn five_approved_days_without_credits() {
        let eng = month_engagement();
        let request = approved_request(&eng, date(2024, 3, 4), date(2024, 3, 8));
        let results = calculate_monthly_financials(
            std::slice::from_ref(&eng),
            &[request],
            &[],
            date(2024, 3, 1),
            None,
        );
        assert_eq!(results.len(), 1);
        let entry = &results[0];
        assert_eq!(entry.approved_days, 5);
        assert_eq!(entry.credit_days, 0);
        assert_eq!(entry.billable_deduction_days, 5);
        assert_eq!(entry.section2_client_invoice, 15000.0 - 3750.0);
        assert_eq!(entry.section3_dev_pay, 10000.0 - 2500.0);
        assert_eq!(entry.section1_company_net, 11250.0 - 7500.0);
    }

    #[test]
    fn untaken_holiday_offsets_one_billable_day() {
        let eng = month_engagement();
        let request = approved_request(&eng, date(2024, 3, 4), date(2024, 3, 8));
        let holidays = vec![Holiday::new(eng.id, date(2024, 3, 15), "Company Day")];
        let results = calculate_monthly_financials(
            std::slice::from_ref(&eng),
            &[request],
            &[],
            date(2024, 3, 1),
            Some(&holidays),
        );
        let entry = &results[0];
        assert_eq!(entry.credit_days, 1);
        assert_eq!(entry.billable_deduction_days, 4);
        assert_eq!(entry.section2_client_invoice, 15000.0 - 4.0 * 750.0);
        assert_eq!(entry.section3_dev_pay, 10000.0 - 4.0 * 500.0);
    }

    #[test]
    fn weekly_rates_normalize_to_monthly() {
        let mut eng = month_engagement();
        eng.period_unit = PeriodUnit::Week;
        eng.price_per_period = 3000.0;
        eng.salary_per_period = 1200.0;
        let results =
            calculate_monthly_financials(std::slice::from_ref(&eng), &[], &[], date(2024, 3, 1), None);
        let entry = &results[0];
        assert_eq!(entry.section2_client_invoice, 3000.0 * 52.0 / 12.0);
        assert_eq!(entry.section2_client_invoice, 13000.0);
        assert_eq!(entry.section3_dev_pay, 1200.0 * 52.0 / 12.0);
    }

    #[test]
    fn credits_exceeding_approved_days_floor_the_deduction_at_zero() {
        let eng = month_engagement();
        let request = approved_request(&eng, date(2024, 3, 4), date(2024, 3, 5));
        let credits = vec![HolidayCredit::new(eng.id, date(2024, 3, 11), 4)];
        let results = calculate_monthly_financials(
            std::slice::from_ref(&eng),
            &[request],
            &credits,
            date(2024, 3, 1),
            None,
        );
        let entry = &results[0];
        assert_eq!(entry.approved_days, 2);
        assert_eq!(entry.credit_days, 4);
        assert_eq!(entry.billable_deduction_days, 0);
        assert_eq!(entry.section2_client_invoice, 15000.0);
    }

    #[test]
    fn mid_month_dates_aggregate_like_the_month_key() {
        let eng = month_engagement();
        let request = approved_request(&eng, date(2024, 3, 4), date(2024, 3, 8));
        let results = calculate_monthly_financials(
            std::slice::from_ref(&eng),
            std::slice::from_ref(&request),
            &[],
            date(2024, 3, 17),
            None,
        );
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].month, date(2024, 3, 1));
        assert_eq!(results[0].approved_days, 5);
    }

    #[test]
    fn requests_outside_the_month_are_ignored() {
        let eng = month_engagement();
        let request = approved_request(&eng, date(2024, 2, 26), date(2024, 3, 1));
        // The request starts in February, so March sees no approved days.
        let results = calculate_monthly_financials(
            std::slice::from_ref(&eng),
            &[request],
            &[],
            date(2024, 3, 1),
            None,
        );
        assert_eq!(results[0].approved_days, 0);
    }

    #[test]
    fn ended_engagements_are_excluded() {
        let eng = month_engagement().with_end_date(date(2024, 2, 29));
        let results =
            calculate_monthly_financials(std::slice::from_ref(&eng), &[], &[], date(2024, 3, 1), None);
        assert!(results.is_empty());
    }

    #[test]
    fn output_preserves_input_engagement_order() {
        let first = month_engagement();
        let second = month_engagement();
        let engagements = vec![first.clone(), second.clone()];
        let results = calculate_monthly_financials(&engagements, &[], &[], date(2024, 3, 1), None);
        assert_eq!(results[0].engagement_id, first.id);
        assert_eq!(results[1].engagement_id, second.id);
    }
}
