//! Crewledger tracks developers, clients, and billing engagements, and
//! derives the monthly three-section invoice breakdown from day-off and
//! holiday-credit records.

pub mod report;

pub use crewledger_config as config;
pub use crewledger_core::*;
// Both sub-crates expose an `invoice` module; the engine's is the useful one.
pub use crewledger_core::invoice;
pub use crewledger_domain::*;
pub use crewledger_storage_json as storage_json;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("crewledger=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
        tracing::info!("Crewledger tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
