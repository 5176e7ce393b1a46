use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::dayoff::DayOffRequest;
use crate::engagement::Engagement;
use crate::holiday::{Holiday, HolidayCredit};
use crate::people::{Client, Developer, User};

/// The aggregate document a company's contractor bookkeeping lives in:
/// people, engagements, day-off requests, holidays, and holiday credits.
///
/// Invoices are deliberately not part of the roster; they are append/upsert
/// snapshots owned by the invoice store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Roster {
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub developers: Vec<Developer>,
    #[serde(default)]
    pub clients: Vec<Client>,
    #[serde(default)]
    pub engagements: Vec<Engagement>,
    #[serde(default)]
    pub day_off_requests: Vec<DayOffRequest>,
    #[serde(default)]
    pub holiday_credits: Vec<HolidayCredit>,
    #[serde(default)]
    pub holidays: Vec<Holiday>,
}

impl Roster {
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            name: name.into(),
            created_at: now,
            updated_at: now,
            users: Vec::new(),
            developers: Vec::new(),
            clients: Vec::new(),
            engagements: Vec::new(),
            day_off_requests: Vec::new(),
            holiday_credits: Vec::new(),
            holidays: Vec::new(),
        }
    }

    /// True when no records of any kind have been added yet.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
            && self.developers.is_empty()
            && self.clients.is_empty()
            && self.engagements.is_empty()
            && self.day_off_requests.is_empty()
            && self.holiday_credits.is_empty()
            && self.holidays.is_empty()
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn add_user(&mut self, user: User) -> Uuid {
        let id = user.id;
        self.users.push(user);
        self.touch();
        id
    }

    pub fn add_developer(&mut self, developer: Developer) -> Uuid {
        let id = developer.id;
        self.developers.push(developer);
        self.touch();
        id
    }

    pub fn add_client(&mut self, client: Client) -> Uuid {
        let id = client.id;
        self.clients.push(client);
        self.touch();
        id
    }

    pub fn add_engagement(&mut self, engagement: Engagement) -> Uuid {
        let id = engagement.id;
        self.engagements.push(engagement);
        self.touch();
        id
    }

    pub fn add_day_off_request(&mut self, request: DayOffRequest) -> Uuid {
        let id = request.id;
        self.day_off_requests.push(request);
        self.touch();
        id
    }

    pub fn add_holiday(&mut self, holiday: Holiday) -> Uuid {
        let id = holiday.id;
        self.holidays.push(holiday);
        self.touch();
        id
    }

    pub fn add_holiday_credit(&mut self, credit: HolidayCredit) -> Uuid {
        let id = credit.id;
        self.holiday_credits.push(credit);
        self.touch();
        id
    }

    pub fn developer(&self, id: Uuid) -> Option<&Developer> {
        self.developers.iter().find(|d| d.id == id)
    }

    pub fn client(&self, id: Uuid) -> Option<&Client> {
        self.clients.iter().find(|c| c.id == id)
    }

    pub fn engagement(&self, id: Uuid) -> Option<&Engagement> {
        self.engagements.iter().find(|e| e.id == id)
    }

    pub fn engagement_mut(&mut self, id: Uuid) -> Option<&mut Engagement> {
        self.engagements.iter_mut().find(|e| e.id == id)
    }

    pub fn day_off_request(&self, id: Uuid) -> Option<&DayOffRequest> {
        self.day_off_requests.iter().find(|r| r.id == id)
    }

    pub fn day_off_request_mut(&mut self, id: Uuid) -> Option<&mut DayOffRequest> {
        self.day_off_requests.iter_mut().find(|r| r.id == id)
    }

    pub fn holiday(&self, id: Uuid) -> Option<&Holiday> {
        self.holidays.iter().find(|h| h.id == id)
    }

    pub fn holiday_mut(&mut self, id: Uuid) -> Option<&mut Holiday> {
        self.holidays.iter_mut().find(|h| h.id == id)
    }
}
