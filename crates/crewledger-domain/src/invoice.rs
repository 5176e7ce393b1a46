use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::{Currency, PeriodUnit};
use crate::engagement::Engagement;

/// The computed monthly breakdown for one engagement. Derived, never
/// persisted directly; persisted snapshots live in [`Invoice`].
///
/// `month` is a month key: the first calendar day of the month it covers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyFinancials {
    pub engagement_id: Uuid,
    pub month: NaiveDate,
    pub approved_days: u32,
    pub credit_days: u32,
    pub billable_deduction_days: u32,
    pub section2_client_invoice: f64,
    pub section3_dev_pay: f64,
    pub section1_company_net: f64,
}

/// A persisted point-in-time snapshot of a [`MonthlyFinancials`] result plus
/// the engagement's rate inputs at generation time. Keyed uniquely by
/// (engagement_id, month); saving again for the same key replaces the prior
/// snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: String,
    pub engagement_id: Uuid,
    pub month: NaiveDate,
    pub approved_days: u32,
    pub credit_days: u32,
    pub billable_deduction_days: u32,
    pub section2_client_invoice: f64,
    pub section3_dev_pay: f64,
    pub section1_company_net: f64,
    pub price_per_period: f64,
    pub salary_per_period: f64,
    pub client_dayoff_rate: f64,
    pub dev_dayoff_rate: f64,
    pub period_unit: PeriodUnit,
    pub currency: Currency,
    pub created_at: DateTime<Utc>,
}

impl Invoice {
    /// Snapshots a computed result together with the engagement's current
    /// rate inputs.
    pub fn from_financials(
        financials: &MonthlyFinancials,
        engagement: &Engagement,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: format!("{}-{}", financials.engagement_id, financials.month),
            engagement_id: financials.engagement_id,
            month: financials.month,
            approved_days: financials.approved_days,
            credit_days: financials.credit_days,
            billable_deduction_days: financials.billable_deduction_days,
            section2_client_invoice: financials.section2_client_invoice,
            section3_dev_pay: financials.section3_dev_pay,
            section1_company_net: financials.section1_company_net,
            price_per_period: engagement.price_per_period,
            salary_per_period: engagement.salary_per_period,
            client_dayoff_rate: engagement.client_dayoff_rate,
            dev_dayoff_rate: engagement.dev_dayoff_rate,
            period_unit: engagement.period_unit,
            currency: engagement.currency,
            created_at,
        }
    }
}

impl From<&Invoice> for MonthlyFinancials {
    /// Reconstructs the derived view from a stored snapshot, fields unchanged.
    fn from(invoice: &Invoice) -> Self {
        Self {
            engagement_id: invoice.engagement_id,
            month: invoice.month,
            approved_days: invoice.approved_days,
            credit_days: invoice.credit_days,
            billable_deduction_days: invoice.billable_deduction_days,
            section2_client_invoice: invoice.section2_client_invoice,
            section3_dev_pay: invoice.section3_dev_pay,
            section1_company_net: invoice.section1_company_net,
        }
    }
}
