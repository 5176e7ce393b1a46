//! crewledger-core
//!
//! The monthly financial derivation engine plus validated roster mutations.
//! Depends on crewledger-domain. No terminal I/O, no concrete storage.

pub mod credit;
pub mod error;
pub mod financials;
pub mod invoice;
pub mod period;
pub mod roster_service;
pub mod storage;
pub mod time;

pub use credit::*;
pub use error::CoreError;
pub use financials::*;
pub use invoice::*;
pub use period::*;
pub use roster_service::*;
pub use storage::*;
pub use time::*;
