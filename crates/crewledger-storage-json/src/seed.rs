//! Demo-data bootstrap: writes a sample roster once, only into an empty store.

use chrono::NaiveDate;

use crewledger_core::{storage::RosterStorage, CoreError, RosterService};
use crewledger_domain::{Client, Currency, Developer, Engagement, PeriodUnit, Role, Roster, User};

/// Seeds a demo roster under `name` unless a document already exists.
/// Returns true when a roster was written. Safe to call at every startup.
pub fn seed_demo_roster(storage: &dyn RosterStorage, name: &str) -> Result<bool, CoreError> {
    if storage.roster_exists(name) {
        return Ok(false);
    }

    let mut roster = Roster::new(name);
    roster.add_user(User::new("admin@hr.com", "Admin User", Role::Admin));

    let alice = Developer::new("Alice Johnson");
    let bob = Developer::new("Bob Smith");
    let acme = Client::new("Acme Corp");
    let techstart = Client::new("TechStart Inc");

    let first = Engagement::new(
        alice.id,
        acme.id,
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        Currency::Usd,
        15000.0,
        10000.0,
        750.0,
        500.0,
        PeriodUnit::Month,
    );
    let second = Engagement::new(
        bob.id,
        techstart.id,
        NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
        Currency::Usd,
        12000.0,
        8000.0,
        600.0,
        400.0,
        PeriodUnit::Month,
    );

    roster.add_developer(alice);
    roster.add_developer(bob);
    roster.add_client(acme);
    roster.add_client(techstart);
    RosterService::add_engagement(&mut roster, first)?;
    RosterService::add_engagement(&mut roster, second)?;

    storage.save_roster(name, &roster)?;
    tracing::info!(roster = name, "seeded demo roster");
    Ok(true)
}
