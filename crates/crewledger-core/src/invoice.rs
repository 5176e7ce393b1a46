//! Invoice materialization: read a persisted snapshot, recompute-and-persist,
//! or refresh credits over a frozen snapshot, depending on whether the target
//! month is closed.

use std::collections::{BTreeSet, HashSet};

use async_trait::async_trait;
use chrono::NaiveDate;
use futures::future;
use uuid::Uuid;

use crewledger_domain::{
    DayOffRequest, Engagement, Holiday, HolidayCredit, Invoice, MonthlyFinancials,
};

use crate::credit::credit_days_in_month;
use crate::error::CoreError;
use crate::financials::calculate_monthly_financials;
use crate::period::{is_engagement_active_in_month, month_key, next_month};
use crate::time::Clock;

/// Persistence boundary for invoice snapshots.
///
/// `save_invoice` upserts by (engagement_id, month): saving again for the
/// same key replaces the prior snapshot.
#[async_trait]
pub trait InvoiceStore: Send + Sync {
    async fn get_invoices(
        &self,
        month: NaiveDate,
        engagement_id: Option<Uuid>,
    ) -> Result<Vec<Invoice>, CoreError>;

    async fn save_invoice(&self, invoice: &Invoice) -> Result<(), CoreError>;
}

/// Reconstructs the derived view from a frozen snapshot while refreshing the
/// credit figure from current records. Monetary sections stay as generated.
pub fn financials_from_snapshot(
    invoice: &Invoice,
    credit_days: u32,
) -> MonthlyFinancials {
    MonthlyFinancials {
        credit_days,
        ..MonthlyFinancials::from(invoice)
    }
}

/// Returns the monthly breakdown for `month`, reusing persisted invoices when
/// the month is closed and fully covered, and computing (and, for closed
/// months, persisting) fresh results otherwise.
///
/// Closed months must stay stable even as credit records arrive
/// retroactively, so the fast path keeps the frozen monetary sections and
/// only recomputes `credit_days` from live data. Store failures never
/// propagate: a failed read falls back to fresh computation and a failed
/// write is logged and swallowed.
///
/// `month` may be any date in the target month; it is normalized to the
/// month key first.
pub async fn get_or_generate_invoices(
    store: &dyn InvoiceStore,
    clock: &dyn Clock,
    engagements: &[Engagement],
    day_off_requests: &[DayOffRequest],
    holiday_credits: &[HolidayCredit],
    month: NaiveDate,
    holidays: Option<&[Holiday]>,
) -> Vec<MonthlyFinancials> {
    let month = month_key(month);
    let is_past_month = month < month_key(clock.today());

    let active_engagements: Vec<&Engagement> = engagements
        .iter()
        .filter(|engagement| is_engagement_active_in_month(engagement, month))
        .collect();

    if is_past_month && !active_engagements.is_empty() {
        match store.get_invoices(month, None).await {
            Ok(existing) => {
                let covered: HashSet<Uuid> =
                    existing.iter().map(|invoice| invoice.engagement_id).collect();
                let all_covered = active_engagements
                    .iter()
                    .all(|engagement| covered.contains(&engagement.id));
                if all_covered && !existing.is_empty() {
                    return existing
                        .iter()
                        .map(|invoice| {
                            if engagements
                                .iter()
                                .any(|engagement| engagement.id == invoice.engagement_id)
                            {
                                let credit_days = credit_days_in_month(
                                    invoice.engagement_id,
                                    month,
                                    holiday_credits,
                                    holidays,
                                );
                                financials_from_snapshot(invoice, credit_days)
                            } else {
                                // Engagement deleted since generation: pass the
                                // stored fields through unchanged.
                                MonthlyFinancials::from(invoice)
                            }
                        })
                        .collect();
                }
            }
            Err(err) => {
                tracing::warn!(%month, error = %err, "failed to fetch existing invoices, recomputing");
            }
        }
    }

    let financials =
        calculate_monthly_financials(engagements, day_off_requests, holiday_credits, month, holidays);

    if is_past_month && !financials.is_empty() {
        let generated_at = clock.now();
        let invoices: Vec<Invoice> = financials
            .iter()
            .filter_map(|entry| {
                match engagements
                    .iter()
                    .find(|engagement| engagement.id == entry.engagement_id)
                {
                    Some(engagement) => Some(Invoice::from_financials(entry, engagement, generated_at)),
                    None => {
                        tracing::warn!(engagement_id = %entry.engagement_id, "engagement missing during snapshot, skipping persist");
                        None
                    }
                }
            })
            .collect();

        let results = future::join_all(
            invoices.iter().map(|invoice| store.save_invoice(invoice)),
        )
        .await;
        for (invoice, result) in invoices.iter().zip(results) {
            if let Err(err) = result {
                tracing::warn!(engagement_id = %invoice.engagement_id, %month, error = %err, "failed to persist invoice");
            }
        }
    }

    financials
}

/// Distinct month keys across all active engagements, from each engagement's
/// start month through the earlier of its end month or the current month,
/// most recent first.
pub fn get_available_months(engagements: &[Engagement], clock: &dyn Clock) -> Vec<NaiveDate> {
    let today = clock.today();
    let mut months = BTreeSet::new();

    for engagement in engagements.iter().filter(|e| e.is_active) {
        let end = engagement.end_date.map_or(today, |date| date.min(today));
        let mut current = month_key(engagement.start_date);
        while current <= end {
            if is_engagement_active_in_month(engagement, current) {
                months.insert(current);
            }
            current = next_month(current);
        }
    }

    months.into_iter().rev().collect()
}
