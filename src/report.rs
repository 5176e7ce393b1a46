//! The invoice report surface behind `crewledger_cli`.

use std::error::Error;

use crewledger_config::ConfigManager;
use crewledger_core::{
    get_available_months, get_or_generate_invoices, month_key, roster_warnings,
    storage::RosterStorage, Clock, SystemClock,
};
use crewledger_domain::Roster;
use crewledger_storage_json::{seed_demo_roster, JsonInvoiceStore, JsonRosterStorage};

/// Seeds an empty store, then prints the invoice report for the most recent
/// closed month (or the current month when nothing is closed yet).
pub async fn run() -> Result<(), Box<dyn Error>> {
    let config = ConfigManager::with_default_dir()?.load()?;
    let storage = JsonRosterStorage::new(config.resolve_data_root())?;

    seed_demo_roster(&storage, &config.default_roster)?;
    let roster = storage.load_roster(&config.default_roster)?;
    for warning in roster_warnings(&roster) {
        tracing::warn!("{warning}");
    }

    let clock = SystemClock;
    let months = get_available_months(&roster.engagements, &clock);
    if months.is_empty() {
        println!("No engagement months available yet.");
        return Ok(());
    }

    let current = month_key(clock.today());
    let target = months
        .iter()
        .copied()
        .find(|month| *month < current)
        .unwrap_or(months[0]);

    let invoice_store = JsonInvoiceStore::new(config.resolve_invoice_root())?;
    let financials = get_or_generate_invoices(
        &invoice_store,
        &clock,
        &roster.engagements,
        &roster.day_off_requests,
        &roster.holiday_credits,
        target,
        Some(&roster.holidays),
    )
    .await;

    println!("Invoice report for {target} ({} engagements)", financials.len());
    println!(
        "{:<20} {:<20} {:>8} {:>8} {:>8} {:>14} {:>12} {:>12}",
        "Developer", "Client", "Approved", "Credits", "Billable", "Client invoice", "Dev pay", "Company net"
    );
    for entry in &financials {
        let (developer, client, currency) = labels(&roster, entry.engagement_id);
        println!(
            "{:<20} {:<20} {:>8} {:>8} {:>8} {:>11.2} {} {:>9.2} {} {:>9.2} {}",
            developer,
            client,
            entry.approved_days,
            entry.credit_days,
            entry.billable_deduction_days,
            entry.section2_client_invoice,
            currency,
            entry.section3_dev_pay,
            currency,
            entry.section1_company_net,
            currency,
        );
    }

    println!();
    println!("Available months: {}", join_months(&months));
    Ok(())
}

fn labels(roster: &Roster, engagement_id: uuid::Uuid) -> (String, String, String) {
    match roster.engagement(engagement_id) {
        Some(engagement) => {
            let developer = roster
                .developer(engagement.developer_id)
                .map(|d| d.name.clone())
                .unwrap_or_else(|| engagement.developer_id.to_string());
            let client = roster
                .client(engagement.client_id)
                .map(|c| c.name.clone())
                .unwrap_or_else(|| engagement.client_id.to_string());
            (developer, client, engagement.currency.to_string())
        }
        None => (engagement_id.to_string(), "(removed)".into(), String::new()),
    }
}

fn join_months(months: &[chrono::NaiveDate]) -> String {
    months
        .iter()
        .map(|month| month.format("%Y-%m").to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
