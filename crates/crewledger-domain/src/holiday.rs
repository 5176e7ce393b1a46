use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::{Displayable, Identifiable};

/// A calendar date marked as a company or public holiday for one engagement.
///
/// While `is_taken` is false the date yields one implicit credit day, unless
/// an explicit [`HolidayCredit`] already covers the same engagement and date.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holiday {
    pub id: Uuid,
    pub engagement_id: Uuid,
    pub date: NaiveDate,
    pub name: String,
    pub is_taken: bool,
    pub created_at: DateTime<Utc>,
}

impl Holiday {
    pub fn new(engagement_id: Uuid, date: NaiveDate, name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            engagement_id,
            date,
            name: name.into(),
            is_taken: false,
            created_at: Utc::now(),
        }
    }
}

/// An explicit grant of credit days to an engagement, dated.
///
/// Covers both manually granted credits and credits materialized when a
/// holiday is toggled to "not taken".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HolidayCredit {
    pub id: Uuid,
    pub engagement_id: Uuid,
    pub date: NaiveDate,
    pub credit_days: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl HolidayCredit {
    pub fn new(engagement_id: Uuid, date: NaiveDate, credit_days: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            engagement_id,
            date,
            credit_days,
            note: None,
            created_by: None,
            created_at: Utc::now(),
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

impl Identifiable for Holiday {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Identifiable for HolidayCredit {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Displayable for Holiday {
    fn display_label(&self) -> String {
        format!("{} ({})", self.name, self.date)
    }
}
