use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Engagement not found: {0}")]
    EngagementNotFound(Uuid),
    #[error("Day-off request not found: {0}")]
    RequestNotFound(Uuid),
    #[error("Holiday not found: {0}")]
    HolidayNotFound(Uuid),
    #[error("Roster not found: {0}")]
    RosterNotFound(String),
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(String),
}
