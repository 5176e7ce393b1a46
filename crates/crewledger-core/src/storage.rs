use std::collections::HashSet;

use crewledger_domain::Roster;

use crate::CoreError;

/// Abstraction over persistence backends capable of storing roster documents.
pub trait RosterStorage: Send + Sync {
    fn save_roster(&self, name: &str, roster: &Roster) -> Result<(), CoreError>;
    fn load_roster(&self, name: &str) -> Result<Roster, CoreError>;
    fn roster_exists(&self, name: &str) -> bool;
}

/// Detects dangling references within a roster snapshot.
pub fn roster_warnings(roster: &Roster) -> Vec<String> {
    let developer_ids: HashSet<_> = roster.developers.iter().map(|d| d.id).collect();
    let client_ids: HashSet<_> = roster.clients.iter().map(|c| c.id).collect();
    let engagement_ids: HashSet<_> = roster.engagements.iter().map(|e| e.id).collect();
    let mut warnings = Vec::new();

    for engagement in &roster.engagements {
        if !developer_ids.contains(&engagement.developer_id) {
            warnings.push(format!(
                "engagement {} references unknown developer {}",
                engagement.id, engagement.developer_id
            ));
        }
        if !client_ids.contains(&engagement.client_id) {
            warnings.push(format!(
                "engagement {} references unknown client {}",
                engagement.id, engagement.client_id
            ));
        }
    }
    for request in &roster.day_off_requests {
        if !engagement_ids.contains(&request.engagement_id) {
            warnings.push(format!(
                "day-off request {} references unknown engagement {}",
                request.id, request.engagement_id
            ));
        }
    }
    for holiday in &roster.holidays {
        if !engagement_ids.contains(&holiday.engagement_id) {
            warnings.push(format!(
                "holiday {} references unknown engagement {}",
                holiday.id, holiday.engagement_id
            ));
        }
    }
    for credit in &roster.holiday_credits {
        if !engagement_ids.contains(&credit.engagement_id) {
            warnings.push(format!(
                "holiday credit {} references unknown engagement {}",
                credit.id, credit.engagement_id
            ));
        }
    }

    warnings
}
