//! Configuration structures.

use journal_core::AccountSettings;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub app: AppSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub journal: JournalSettings,
    #[serde(default = "default_account")]
    pub account: AccountSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app: AppSettings::default(),
            logging: LoggingConfig::default(),
            journal: JournalSettings::default(),
            account: default_account(),
        }
    }
}

/// General app settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub name: String,
    pub environment: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            name: "trade-journal".to_string(),
            environment: "development".to_string(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

/// Where the journal lives and how eagerly it is saved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalSettings {
    /// Path to the journal JSON file
    pub path: String,
    /// Debounce window for background saves, in milliseconds
    pub save_debounce_ms: u64,
}

impl Default for JournalSettings {
    fn default() -> Self {
        Self {
            path: "journal.json".to_string(),
            save_debounce_ms: 500,
        }
    }
}

/// Account defaults used when the journal file does not exist yet. Once a
/// journal has been created, the persisted account settings win.
fn default_account() -> AccountSettings {
    AccountSettings {
        size: dec!(10000),
        risk_percent: dec!(1),
        max_position_percent: dec!(25),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::load_config;
    use rust_decimal_macros::dec;
    use std::io::Write;

    #[test]
    fn test_defaults_without_file() {
        let config = load_config(std::path::Path::new("does-not-exist.toml")).unwrap();
        assert_eq!(config.app.name, "trade-journal");
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.journal.path, "journal.json");
    }

    #[test]
    fn test_file_overrides() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
[journal]
path = "trades/main.json"
save_debounce_ms = 100

[account]
size = "25000"
risk_percent = "0.5"
max_position_percent = "20"
"#
        )
        .unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.journal.path, "trades/main.json");
        assert_eq!(config.journal.save_debounce_ms, 100);
        assert_eq!(config.account.size, dec!(25000));
        assert_eq!(config.account.risk_percent, dec!(0.5));
    }
}
