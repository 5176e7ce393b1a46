use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::{Currency, Displayable, Identifiable, PeriodUnit};

/// A time-bounded contractual relationship between one developer and one client.
///
/// Rates are quoted per `period_unit`. `client_dayoff_rate` and
/// `dev_dayoff_rate` are the per-day deductions applied to the client invoice
/// and the developer pay for each billable day off.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Engagement {
    pub id: Uuid,
    pub developer_id: Uuid,
    pub client_id: Uuid,
    pub start_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    pub currency: Currency,
    pub price_per_period: f64,
    pub salary_per_period: f64,
    pub client_dayoff_rate: f64,
    pub dev_dayoff_rate: f64,
    pub period_unit: PeriodUnit,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Engagement {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        developer_id: Uuid,
        client_id: Uuid,
        start_date: NaiveDate,
        currency: Currency,
        price_per_period: f64,
        salary_per_period: f64,
        client_dayoff_rate: f64,
        dev_dayoff_rate: f64,
        period_unit: PeriodUnit,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            developer_id,
            client_id,
            start_date,
            end_date: None,
            currency,
            price_per_period,
            salary_per_period,
            client_dayoff_rate,
            dev_dayoff_rate,
            period_unit,
            is_active: true,
            created_at: Utc::now(),
        }
    }

    pub fn with_end_date(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self
    }
}

impl Identifiable for Engagement {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Displayable for Engagement {
    fn display_label(&self) -> String {
        format!("engagement:{} ({})", self.id, self.currency)
    }
}
