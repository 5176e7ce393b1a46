//! Validated mutations for roster entities.

use chrono::Utc;
use uuid::Uuid;

use crewledger_domain::{
    calculate_days, DayOffRequest, DayOffStatus, Engagement, Holiday, HolidayCredit, Roster,
};

use crate::error::CoreError;

/// Provides validated mutations over a [`Roster`].
///
/// The financial engine itself is pure; every write to roster data funnels
/// through here so invariants (non-negative rates, day counts matching spans,
/// status transitions) hold before anything is persisted.
pub struct RosterService;

impl RosterService {
    /// Adds an engagement after checking rates, date order, and references.
    pub fn add_engagement(roster: &mut Roster, engagement: Engagement) -> Result<Uuid, CoreError> {
        Self::validate_engagement(roster, &engagement)?;
        Ok(roster.add_engagement(engagement))
    }

    /// Overwrites an engagement's fields with the provided changeset.
    pub fn edit_engagement(
        roster: &mut Roster,
        id: Uuid,
        changes: Engagement,
    ) -> Result<(), CoreError> {
        Self::validate_engagement(roster, &changes)?;
        let engagement = roster
            .engagement_mut(id)
            .ok_or(CoreError::EngagementNotFound(id))?;
        engagement.developer_id = changes.developer_id;
        engagement.client_id = changes.client_id;
        engagement.start_date = changes.start_date;
        engagement.end_date = changes.end_date;
        engagement.currency = changes.currency;
        engagement.price_per_period = changes.price_per_period;
        engagement.salary_per_period = changes.salary_per_period;
        engagement.client_dayoff_rate = changes.client_dayoff_rate;
        engagement.dev_dayoff_rate = changes.dev_dayoff_rate;
        engagement.period_unit = changes.period_unit;
        engagement.is_active = changes.is_active;
        roster.touch();
        Ok(())
    }

    /// Removes an engagement when no day-off requests reference it.
    pub fn remove_engagement(roster: &mut Roster, id: Uuid) -> Result<(), CoreError> {
        if roster
            .day_off_requests
            .iter()
            .any(|req| req.engagement_id == id)
        {
            return Err(CoreError::Validation(
                "Engagement has linked day-off requests".into(),
            ));
        }
        let before = roster.engagements.len();
        roster.engagements.retain(|engagement| engagement.id != id);
        if roster.engagements.len() == before {
            return Err(CoreError::EngagementNotFound(id));
        }
        roster.touch();
        Ok(())
    }

    /// Records a day-off request in `Submitted` state with its day count
    /// re-derived from the inclusive span.
    pub fn submit_day_off(
        roster: &mut Roster,
        mut request: DayOffRequest,
    ) -> Result<Uuid, CoreError> {
        if roster.engagement(request.engagement_id).is_none() {
            return Err(CoreError::EngagementNotFound(request.engagement_id));
        }
        if request.end_date < request.start_date {
            return Err(CoreError::Validation(
                "Day-off end date precedes start date".into(),
            ));
        }
        request.days = calculate_days(request.start_date, request.end_date);
        request.status = DayOffStatus::Submitted;
        Ok(roster.add_day_off_request(request))
    }

    /// Moves a request along its lifecycle. Submitted requests may be
    /// approved, rejected, or cancelled; drafts may be submitted or
    /// cancelled. Terminal states never transition again.
    pub fn review_day_off(
        roster: &mut Roster,
        id: Uuid,
        decision: DayOffStatus,
        reviewed_by: Option<Uuid>,
    ) -> Result<(), CoreError> {
        let request = roster
            .day_off_request_mut(id)
            .ok_or(CoreError::RequestNotFound(id))?;
        let allowed = matches!(
            (request.status, decision),
            (
                DayOffStatus::Submitted,
                DayOffStatus::ClientApproved
                    | DayOffStatus::ClientRejected
                    | DayOffStatus::Cancelled,
            ) | (
                DayOffStatus::Draft,
                DayOffStatus::Submitted | DayOffStatus::Cancelled,
            )
        );
        if !allowed {
            return Err(CoreError::Validation(format!(
                "Cannot move day-off request from {:?} to {:?}",
                request.status, decision
            )));
        }
        request.status = decision;
        request.reviewed_by = reviewed_by;
        request.updated_at = Utc::now();
        roster.touch();
        Ok(())
    }

    /// Deletes a day-off request. Approved requests survive normal workflows;
    /// this is the administrative override.
    pub fn remove_day_off(roster: &mut Roster, id: Uuid) -> Result<(), CoreError> {
        let before = roster.day_off_requests.len();
        roster.day_off_requests.retain(|req| req.id != id);
        if roster.day_off_requests.len() == before {
            return Err(CoreError::RequestNotFound(id));
        }
        roster.touch();
        Ok(())
    }

    /// Adds a holiday for an existing engagement.
    pub fn add_holiday(roster: &mut Roster, holiday: Holiday) -> Result<Uuid, CoreError> {
        if roster.engagement(holiday.engagement_id).is_none() {
            return Err(CoreError::EngagementNotFound(holiday.engagement_id));
        }
        Ok(roster.add_holiday(holiday))
    }

    /// Grants explicit credit days to an existing engagement.
    pub fn add_holiday_credit(
        roster: &mut Roster,
        credit: HolidayCredit,
    ) -> Result<Uuid, CoreError> {
        if roster.engagement(credit.engagement_id).is_none() {
            return Err(CoreError::EngagementNotFound(credit.engagement_id));
        }
        if credit.credit_days == 0 {
            return Err(CoreError::Validation(
                "Credit must grant at least one day".into(),
            ));
        }
        Ok(roster.add_holiday_credit(credit))
    }

    /// Flips a holiday's taken flag. Marking a holiday "not taken"
    /// materializes a one-day credit dated on the holiday, unless a
    /// date-exact credit already covers that engagement and date. Marking it
    /// "taken" leaves explicit credits in place.
    pub fn set_holiday_taken(roster: &mut Roster, id: Uuid, taken: bool) -> Result<(), CoreError> {
        let holiday = roster.holiday_mut(id).ok_or(CoreError::HolidayNotFound(id))?;
        holiday.is_taken = taken;
        let engagement_id = holiday.engagement_id;
        let holiday_date = holiday.date;
        let holiday_name = holiday.name.clone();

        if !taken {
            let already_credited = roster
                .holiday_credits
                .iter()
                .any(|credit| credit.engagement_id == engagement_id && credit.date == holiday_date);
            if !already_credited {
                let credit = HolidayCredit::new(engagement_id, holiday_date, 1)
                    .with_note(format!("{holiday_name} not taken"));
                roster.add_holiday_credit(credit);
            }
        }
        roster.touch();
        Ok(())
    }

    fn validate_engagement(roster: &Roster, engagement: &Engagement) -> Result<(), CoreError> {
        if roster.developer(engagement.developer_id).is_none() {
            return Err(CoreError::Validation("Unknown developer".into()));
        }
        if roster.client(engagement.client_id).is_none() {
            return Err(CoreError::Validation("Unknown client".into()));
        }
        if let Some(end_date) = engagement.end_date {
            if end_date < engagement.start_date {
                return Err(CoreError::Validation(
                    "Engagement end date precedes start date".into(),
                ));
            }
        }
        let rates = [
            engagement.price_per_period,
            engagement.salary_per_period,
            engagement.client_dayoff_rate,
            engagement.dev_dayoff_rate,
        ];
        if rates.iter().any(|rate| *rate < 0.0 || !rate.is_finite()) {
            return Err(CoreError::Validation(
                "Engagement rates must be non-negative".into(),
            ));
        }
        Ok(())
    }
}
