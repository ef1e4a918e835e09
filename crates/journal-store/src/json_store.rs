//! JSON file store.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use journal_core::StoreError;
use tracing::debug;

use crate::{JournalSnapshot, JournalStore};

/// Stores the journal as a single pretty-printed JSON file.
///
/// Writes go through a sibling temp file and a rename, so a failed save
/// never truncates the existing journal.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl JournalStore for JsonFileStore {
    async fn load(&self) -> Result<JournalSnapshot, StoreError> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no journal file, starting empty");
            return Ok(JournalSnapshot::default());
        }

        let raw = tokio::fs::read_to_string(&self.path).await?;
        let snapshot = serde_json::from_str(&raw)?;
        Ok(snapshot)
    }

    async fn save(&self, snapshot: &JournalSnapshot) -> Result<(), StoreError> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                tokio::fs::create_dir_all(dir).await?;
            }
        }

        let raw = serde_json::to_string_pretty(snapshot)?;
        let temp = self.temp_path();
        tokio::fs::write(&temp, raw).await?;
        tokio::fs::rename(&temp, &self.path).await?;

        debug!(
            path = %self.path.display(),
            trades = snapshot.trades.len(),
            "journal saved"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use journal_core::{AccountSettings, SizingSnapshot, Trade, TradeStatus};
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    fn sample_snapshot() -> JournalSnapshot {
        JournalSnapshot {
            account: AccountSettings {
                size: dec!(10000),
                risk_percent: dec!(1),
                max_position_percent: dec!(25),
            },
            trades: vec![Trade {
                id: Uuid::new_v4(),
                ticker: "AAPL".to_string(),
                entry_price: dec!(50),
                entry_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
                initial_stop_loss: dec!(48),
                current_stop_loss: dec!(48),
                status: TradeStatus::Open,
                archived: false,
                sales: Vec::new(),
                snapshot: SizingSnapshot {
                    account_size: dec!(10000),
                    shares: 50,
                    position_size: dec!(2500),
                    risk_percent: dec!(1),
                    percent_of_account: dec!(25),
                },
                sell_plan: None,
            }],
        }
    }

    #[tokio::test]
    async fn test_missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("journal.json"));

        let snapshot = store.load().await.unwrap();
        assert!(snapshot.trades.is_empty());
        assert_eq!(snapshot.account, AccountSettings::default());
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("journal.json"));

        let snapshot = sample_snapshot();
        store.save(&snapshot).await.unwrap();

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded.account.size, dec!(10000));
        assert_eq!(loaded.trades.len(), 1);
        assert_eq!(loaded.trades[0].ticker, "AAPL");
        assert_eq!(loaded.trades[0].status, TradeStatus::Open);
    }

    #[tokio::test]
    async fn test_save_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("nested/deeper/journal.json"));

        store.save(&sample_snapshot()).await.unwrap();
        assert!(store.path().exists());
    }

    #[tokio::test]
    async fn test_no_temp_file_left_behind() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("journal.json"));

        store.save(&sample_snapshot()).await.unwrap();
        let entries: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec!["journal.json"]);
    }
}
