//! crewledger-storage-json
//!
//! Filesystem-backed JSON persistence: one document per roster, one file per
//! invoice month, plus the idempotent demo-data seeder.

use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crewledger_core::{storage::RosterStorage, CoreError};
use crewledger_domain::Roster;

pub mod invoice_store;
pub mod seed;

pub use invoice_store::JsonInvoiceStore;
pub use seed::seed_demo_roster;

const ROSTER_EXTENSION: &str = "json";
const TMP_SUFFIX: &str = "tmp";

/// Filesystem-backed JSON persistence for roster documents.
#[derive(Clone)]
pub struct JsonRosterStorage {
    rosters_dir: PathBuf,
}

impl JsonRosterStorage {
    pub fn new(rosters_dir: PathBuf) -> Result<Self, CoreError> {
        fs::create_dir_all(&rosters_dir)?;
        Ok(Self { rosters_dir })
    }

    pub fn roster_path(&self, name: &str) -> PathBuf {
        self.rosters_dir
            .join(format!("{}.{}", canonical_name(name), ROSTER_EXTENSION))
    }

    pub fn list_rosters(&self) -> Result<Vec<String>, CoreError> {
        if !self.rosters_dir.exists() {
            return Ok(Vec::new());
        }
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.rosters_dir)? {
            let entry = entry?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            if path.extension().and_then(|ext| ext.to_str()) != Some(ROSTER_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }
}

impl RosterStorage for JsonRosterStorage {
    fn save_roster(&self, name: &str, roster: &Roster) -> Result<(), CoreError> {
        let path = self.roster_path(name);
        let data = serde_json::to_string_pretty(roster)
            .map_err(|err| CoreError::Serde(err.to_string()))?;
        let tmp = tmp_path(&path);
        write_atomic(&tmp, &data)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn load_roster(&self, name: &str) -> Result<Roster, CoreError> {
        let path = self.roster_path(name);
        if !path.exists() {
            return Err(CoreError::RosterNotFound(name.to_string()));
        }
        let data = fs::read_to_string(path)?;
        serde_json::from_str(&data).map_err(|err| CoreError::Serde(err.to_string()))
    }

    fn roster_exists(&self, name: &str) -> bool {
        self.roster_path(name).exists()
    }
}

fn canonical_name(name: &str) -> String {
    let sanitized: String = name
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'a'..='z' | '0'..='9' => c,
            _ => '_',
        })
        .collect();
    if sanitized.trim_matches('_').is_empty() {
        "roster".into()
    } else {
        sanitized
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

fn write_atomic(path: &Path, data: &str) -> Result<(), CoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
