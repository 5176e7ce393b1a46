mod common;

use common::{
    approved_request, date, monthly_engagement, FailingInvoiceStore, FixedClock, MemoryInvoiceStore,
};
use crewledger::{get_or_generate_invoices, HolidayCredit};

#[tokio::test]
async fn past_months_are_persisted_once_and_reused() {
    let store = MemoryInvoiceStore::new();
    let clock = FixedClock::at(2024, 4, 10);
    let eng = monthly_engagement(date(2024, 1, 1));
    let requests = vec![approved_request(&eng, date(2024, 3, 4), date(2024, 3, 8))];
    let engagements = vec![eng.clone()];

    let first = get_or_generate_invoices(
        &store,
        &clock,
        &engagements,
        &requests,
        &[],
        date(2024, 3, 1),
        None,
    )
    .await;
    assert_eq!(first.len(), 1);
    assert_eq!(first[0].billable_deduction_days, 5);
    assert_eq!(store.save_calls(), 1);
    assert_eq!(store.stored().len(), 1);

    let second = get_or_generate_invoices(
        &store,
        &clock,
        &engagements,
        &requests,
        &[],
        date(2024, 3, 1),
        None,
    )
    .await;
    assert_eq!(second, first);
    // The second call served from the store without regenerating.
    assert_eq!(store.save_calls(), 1);
}

#[tokio::test]
async fn current_month_is_never_persisted() {
    let store = MemoryInvoiceStore::new();
    let clock = FixedClock::at(2024, 3, 15);
    let eng = monthly_engagement(date(2024, 1, 1));

    let results = get_or_generate_invoices(
        &store,
        &clock,
        std::slice::from_ref(&eng),
        &[],
        &[],
        date(2024, 3, 1),
        None,
    )
    .await;
    assert_eq!(results.len(), 1);
    assert_eq!(store.get_calls(), 0);
    assert_eq!(store.save_calls(), 0);
}

#[tokio::test]
async fn retroactive_credits_refresh_frozen_snapshots() {
    let store = MemoryInvoiceStore::new();
    let clock = FixedClock::at(2024, 4, 10);
    let eng = monthly_engagement(date(2024, 1, 1));
    let requests = vec![approved_request(&eng, date(2024, 3, 4), date(2024, 3, 8))];
    let engagements = vec![eng.clone()];

    let generated = get_or_generate_invoices(
        &store,
        &clock,
        &engagements,
        &requests,
        &[],
        date(2024, 3, 1),
        None,
    )
    .await;
    assert_eq!(generated[0].credit_days, 0);
    assert_eq!(generated[0].billable_deduction_days, 5);
    let frozen_invoice = generated[0].section2_client_invoice;

    // A credit granted after generation shows up in the derived view, but the
    // monetary sections and the stored deduction stay frozen.
    let credits = vec![HolidayCredit::new(eng.id, date(2024, 3, 11), 2)];
    let refreshed = get_or_generate_invoices(
        &store,
        &clock,
        &engagements,
        &requests,
        &credits,
        date(2024, 3, 1),
        None,
    )
    .await;
    assert_eq!(refreshed[0].credit_days, 2);
    assert_eq!(refreshed[0].billable_deduction_days, 5);
    assert_eq!(refreshed[0].section2_client_invoice, frozen_invoice);
    assert_eq!(store.save_calls(), 1);
}

#[tokio::test]
async fn partial_coverage_triggers_regeneration() {
    let store = MemoryInvoiceStore::new();
    let clock = FixedClock::at(2024, 4, 10);
    let first = monthly_engagement(date(2024, 1, 1));

    let initial = get_or_generate_invoices(
        &store,
        &clock,
        std::slice::from_ref(&first),
        &[],
        &[],
        date(2024, 3, 1),
        None,
    )
    .await;
    assert_eq!(initial.len(), 1);
    assert_eq!(store.save_calls(), 1);

    // A second engagement active in March appears later; the stored month no
    // longer covers every active engagement, so the batch is regenerated.
    let second = monthly_engagement(date(2024, 2, 1));
    let engagements = vec![first.clone(), second.clone()];
    let regenerated =
        get_or_generate_invoices(&store, &clock, &engagements, &[], &[], date(2024, 3, 1), None)
            .await;
    assert_eq!(regenerated.len(), 2);
    assert_eq!(store.save_calls(), 3);
    assert_eq!(store.stored().len(), 2);
}

#[tokio::test]
async fn store_failures_fall_back_to_fresh_computation() {
    let store = FailingInvoiceStore::default();
    let clock = FixedClock::at(2024, 4, 10);
    let eng = monthly_engagement(date(2024, 1, 1));
    let requests = vec![approved_request(&eng, date(2024, 3, 4), date(2024, 3, 8))];

    let results = get_or_generate_invoices(
        &store,
        &clock,
        std::slice::from_ref(&eng),
        &requests,
        &[],
        date(2024, 3, 1),
        None,
    )
    .await;
    // Both the failed read and the failed writes are swallowed; the caller
    // still gets the computed breakdown.
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].approved_days, 5);
    assert_eq!(store.save_attempts(), 1);
}

#[tokio::test]
async fn removed_engagement_passes_stored_snapshot_through() {
    let store = MemoryInvoiceStore::new();
    let clock = FixedClock::at(2024, 4, 10);
    let kept = monthly_engagement(date(2024, 1, 1));
    let removed = monthly_engagement(date(2024, 1, 1));
    let engagements = vec![kept.clone(), removed.clone()];

    get_or_generate_invoices(&store, &clock, &engagements, &[], &[], date(2024, 3, 1), None).await;
    assert_eq!(store.stored().len(), 2);

    // Credits for the removed engagement must not resurrect it; its stored
    // figures pass through untouched.
    let credits = vec![HolidayCredit::new(removed.id, date(2024, 3, 11), 3)];
    let remaining = vec![kept.clone()];
    let results = get_or_generate_invoices(
        &store,
        &clock,
        &remaining,
        &[],
        &credits,
        date(2024, 3, 1),
        None,
    )
    .await;
    let entry = results
        .iter()
        .find(|entry| entry.engagement_id == removed.id)
        .expect("removed engagement snapshot present");
    assert_eq!(entry.credit_days, 0);
}
