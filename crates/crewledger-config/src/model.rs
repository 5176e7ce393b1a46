use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Stores user-configurable application preferences and metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "Config::default_currency_value")]
    pub default_currency: String,
    #[serde(default = "Config::default_roster_value")]
    pub default_roster: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    /// Optional custom root directory for roster documents.
    pub data_root: Option<PathBuf>,

    #[serde(skip_serializing_if = "Option::is_none")]
    /// Optional custom root directory for invoice files.
    pub invoice_root: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_currency: Self::default_currency_value(),
            default_roster: Self::default_roster_value(),
            data_root: None,
            invoice_root: None,
        }
    }
}

impl Config {
    pub fn default_currency_value() -> String {
        "USD".into()
    }

    pub fn default_roster_value() -> String {
        "company".into()
    }

    pub fn resolve_data_root(&self) -> PathBuf {
        if let Some(path) = &self.data_root {
            return path.clone();
        }
        base_dir().join("rosters")
    }

    pub fn resolve_invoice_root(&self) -> PathBuf {
        if let Some(path) = &self.invoice_root {
            return path.clone();
        }
        base_dir().join("invoices")
    }
}

fn base_dir() -> PathBuf {
    let base = dirs::data_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."));
    base.join("crewledger")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_missing_fields() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config.default_currency, "USD");
        assert_eq!(config.default_roster, "company");
        assert!(config.data_root.is_none());
    }

    #[test]
    fn explicit_roots_win_over_platform_dirs() {
        let config = Config {
            data_root: Some(PathBuf::from("/tmp/rosters")),
            invoice_root: Some(PathBuf::from("/tmp/invoices")),
            ..Config::default()
        };
        assert_eq!(config.resolve_data_root(), PathBuf::from("/tmp/rosters"));
        assert_eq!(config.resolve_invoice_root(), PathBuf::from("/tmp/invoices"));
    }
}
