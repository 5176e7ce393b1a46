use chrono::{DateTime, NaiveDate, Utc};

/// Source of "now" for everything month-sensitive: the past-month check in
/// invoice materialization, snapshot stamps, and available-month ranges.
/// Injected so those paths stay deterministic under test.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// The current UTC calendar date.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Production clock backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
