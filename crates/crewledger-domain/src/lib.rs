//! crewledger-domain
//!
//! Pure domain models (Roster, Engagement, DayOffRequest, Holiday, Invoice, etc.).
//! No I/O, no storage. Only data types, core enums, and date helpers.

pub mod common;
pub mod dayoff;
pub mod engagement;
pub mod holiday;
pub mod invoice;
pub mod people;
pub mod roster;

pub use common::*;
pub use dayoff::*;
pub use engagement::*;
pub use holiday::*;
pub use invoice::*;
pub use people::*;
pub use roster::*;
