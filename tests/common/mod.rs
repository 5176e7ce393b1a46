#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use uuid::Uuid;

use crewledger::{
    Clock, CoreError, Currency, DayOffRequest, DayOffStatus, DayOffType, Engagement, Invoice,
    InvoiceStore, PeriodUnit,
};

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    pub fn at(year: i32, month: u32, day: u32) -> Self {
        Self(Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

pub fn monthly_engagement(start: NaiveDate) -> Engagement {
    Engagement::new(
        Uuid::new_v4(),
        Uuid::new_v4(),
        start,
        Currency::Usd,
        15000.0,
        10000.0,
        750.0,
        500.0,
        PeriodUnit::Month,
    )
}

pub fn approved_request(engagement: &Engagement, start: NaiveDate, end: NaiveDate) -> DayOffRequest {
    let mut request = DayOffRequest::new(
        engagement.id,
        engagement.developer_id,
        engagement.client_id,
        start,
        end,
        DayOffType::Vacation,
    );
    request.status = DayOffStatus::ClientApproved;
    request
}

/// In-memory invoice store with call counters, so tests can assert which
/// paths of the materialization policy were exercised.
#[derive(Default)]
pub struct MemoryInvoiceStore {
    invoices: Mutex<Vec<Invoice>>,
    get_calls: AtomicUsize,
    save_calls: AtomicUsize,
}

impl MemoryInvoiceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_calls(&self) -> usize {
        self.get_calls.load(Ordering::SeqCst)
    }

    pub fn save_calls(&self) -> usize {
        self.save_calls.load(Ordering::SeqCst)
    }

    pub fn stored(&self) -> Vec<Invoice> {
        self.invoices.lock().expect("store lock").clone()
    }
}

#[async_trait]
impl InvoiceStore for MemoryInvoiceStore {
    async fn get_invoices(
        &self,
        month: NaiveDate,
        engagement_id: Option<Uuid>,
    ) -> Result<Vec<Invoice>, CoreError> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        let invoices = self.invoices.lock().expect("store lock");
        Ok(invoices
            .iter()
            .filter(|invoice| invoice.month == month)
            .filter(|invoice| engagement_id.map_or(true, |id| invoice.engagement_id == id))
            .cloned()
            .collect())
    }

    async fn save_invoice(&self, invoice: &Invoice) -> Result<(), CoreError> {
        self.save_calls.fetch_add(1, Ordering::SeqCst);
        let mut invoices = self.invoices.lock().expect("store lock");
        invoices.retain(|existing| {
            existing.engagement_id != invoice.engagement_id || existing.month != invoice.month
        });
        invoices.push(invoice.clone());
        Ok(())
    }
}

/// Store whose every operation fails, for exercising the fallback paths.
#[derive(Default)]
pub struct FailingInvoiceStore {
    save_attempts: AtomicUsize,
}

impl FailingInvoiceStore {
    pub fn save_attempts(&self) -> usize {
        self.save_attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl InvoiceStore for FailingInvoiceStore {
    async fn get_invoices(
        &self,
        _month: NaiveDate,
        _engagement_id: Option<Uuid>,
    ) -> Result<Vec<Invoice>, CoreError> {
        Err(CoreError::Storage("store offline".into()))
    }

    async fn save_invoice(&self, _invoice: &Invoice) -> Result<(), CoreError> {
        self.save_attempts.fetch_add(1, Ordering::SeqCst);
        Err(CoreError::Storage("store offline".into()))
    }
}
