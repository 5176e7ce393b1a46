use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::{calculate_days, Displayable, Identifiable};

/// Lifecycle states of a day-off request. Only `ClientApproved` requests
/// count toward billing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DayOffStatus {
    Draft,
    Submitted,
    ClientApproved,
    ClientRejected,
    Cancelled,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DayOffType {
    Vacation,
    SickLeave,
    Personal,
    Unpaid,
}

/// A claim for one or more consecutive calendar days off against one engagement.
///
/// `days` always equals the inclusive span of `[start_date, end_date]`;
/// the constructor derives it and edits go through the roster service, which
/// re-derives it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayOffRequest {
    pub id: Uuid,
    pub engagement_id: Uuid,
    pub developer_id: Uuid,
    pub client_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub days: u32,
    #[serde(rename = "type")]
    pub kind: DayOffType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub status: DayOffStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_by: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewed_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DayOffRequest {
    pub fn new(
        engagement_id: Uuid,
        developer_id: Uuid,
        client_id: Uuid,
        start_date: NaiveDate,
        end_date: NaiveDate,
        kind: DayOffType,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            engagement_id,
            developer_id,
            client_id,
            start_date,
            end_date,
            days: calculate_days(start_date, end_date),
            kind,
            reason: None,
            status: DayOffStatus::Submitted,
            submitted_by: None,
            reviewed_by: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self.status,
            DayOffStatus::ClientApproved | DayOffStatus::ClientRejected | DayOffStatus::Cancelled
        )
    }
}

impl Identifiable for DayOffRequest {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Displayable for DayOffRequest {
    fn display_label(&self) -> String {
        format!("dayoff:{} [{:?}]", self.id, self.status)
    }
}
