//! Shared traits, enums, and date helpers for engagement bookkeeping.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Exposes a stable identifier for entities stored in the roster.
pub trait Identifiable {
    fn id(&self) -> Uuid;
}

/// Converts an entity into a user-facing display label.
pub trait Displayable {
    fn display_label(&self) -> String;
}

/// Billing currencies supported by engagements and invoices.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Usd,
    Eur,
    Gbp,
    Idr,
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Idr => "IDR",
        };
        f.write_str(code)
    }
}

/// Billing cadence an engagement's rates are quoted in.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PeriodUnit {
    #[default]
    Month,
    Week,
}

impl fmt::Display for PeriodUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PeriodUnit::Month => "month",
            PeriodUnit::Week => "week",
        };
        f.write_str(label)
    }
}

/// Access roles carried by user accounts.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Employee,
    ClientApprover,
}

/// Returns the inclusive day count of the span between two calendar dates.
///
/// Both endpoints are counted and argument order does not matter:
/// `calculate_days(d, d)` is 1 for any date `d`.
pub fn calculate_days(start_date: NaiveDate, end_date: NaiveDate) -> u32 {
    (end_date - start_date).num_days().unsigned_abs() as u32 + 1
}
