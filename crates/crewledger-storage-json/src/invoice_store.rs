use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::Mutex;
use uuid::Uuid;

use crewledger_core::{invoice::InvoiceStore, CoreError};
use crewledger_domain::Invoice;

const INVOICE_EXTENSION: &str = "json";
const TMP_SUFFIX: &str = "tmp";

/// Filesystem-backed invoice store: one JSON file per month, entries keyed by
/// engagement id within the file. Saving replaces any entry with the same
/// engagement id, giving the (engagement_id, month) upsert semantics the
/// materialization policy relies on.
pub struct JsonInvoiceStore {
    invoices_dir: PathBuf,
    // Serializes read-modify-write cycles on the month files; concurrent
    // saves for the same month would otherwise drop each other's entries.
    write_lock: Mutex<()>,
}

impl JsonInvoiceStore {
    pub fn new(invoices_dir: PathBuf) -> Result<Self, CoreError> {
        std::fs::create_dir_all(&invoices_dir)?;
        Ok(Self {
            invoices_dir,
            write_lock: Mutex::new(()),
        })
    }

    pub fn month_path(&self, month: NaiveDate) -> PathBuf {
        self.invoices_dir
            .join(format!("{month}.{INVOICE_EXTENSION}"))
    }

    async fn read_month(&self, month: NaiveDate) -> Result<Vec<Invoice>, CoreError> {
        let path = self.month_path(month);
        match tokio::fs::read_to_string(&path).await {
            Ok(data) => {
                serde_json::from_str(&data).map_err(|err| CoreError::Serde(err.to_string()))
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(err) => Err(err.into()),
        }
    }

    async fn write_month(&self, month: NaiveDate, invoices: &[Invoice]) -> Result<(), CoreError> {
        let path = self.month_path(month);
        let data = serde_json::to_string_pretty(invoices)
            .map_err(|err| CoreError::Serde(err.to_string()))?;
        let tmp = tmp_path(&path);
        tokio::fs::write(&tmp, data.as_bytes()).await?;
        tokio::fs::rename(&tmp, &path).await?;
        Ok(())
    }
}

#[async_trait]
impl InvoiceStore for JsonInvoiceStore {
    async fn get_invoices(
        &self,
        month: NaiveDate,
        engagement_id: Option<Uuid>,
    ) -> Result<Vec<Invoice>, CoreError> {
        let mut invoices = self.read_month(month).await?;
        if let Some(engagement_id) = engagement_id {
            invoices.retain(|invoice| invoice.engagement_id == engagement_id);
        }
        Ok(invoices)
    }

    async fn save_invoice(&self, invoice: &Invoice) -> Result<(), CoreError> {
        let _guard = self.write_lock.lock().await;
        let mut invoices = self.read_month(invoice.month).await?;
        invoices.retain(|existing| existing.engagement_id != invoice.engagement_id);
        invoices.push(invoice.clone());
        self.write_month(invoice.month, &invoices).await
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}
