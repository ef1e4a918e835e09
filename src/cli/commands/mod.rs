//! Command implementations.

pub mod archive;
pub mod breakeven;
pub mod close;
pub mod heat;
pub mod list;
pub mod open;
pub mod sale;
pub mod set_account;
pub mod set_stop;
pub mod size;
pub mod validate;

use anyhow::{anyhow, Result};
use journal_app::Journal;
use journal_config::AppConfig;
use journal_core::AccountSettings;
use journal_store::{spawn_save_worker, JournalStore, JsonFileStore};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

/// Load the journal file and wire it to a save worker.
///
/// A brand-new journal takes its account settings from the config; once
/// persisted, the journal file's own settings win.
pub(crate) async fn open_journal(
    config: &AppConfig,
    journal_path: Option<&Path>,
) -> Result<Journal> {
    let path = journal_path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| config.journal.path.clone().into());

    let store = Arc::new(JsonFileStore::new(path));
    let mut snapshot = store.load().await?;
    if snapshot.trades.is_empty() && snapshot.account == AccountSettings::default() {
        snapshot.account = config.account.clone();
    }
    tracing::debug!(trades = snapshot.trades.len(), "journal loaded");

    let saver = spawn_save_worker(
        store,
        Duration::from_millis(config.journal.save_debounce_ms),
    );
    Ok(Journal::from_snapshot(snapshot, Some(saver)))
}

/// Resolve a ticker to the trade it most plausibly refers to.
pub(crate) fn resolve_ticker(journal: &Journal, ticker: &str) -> Result<Uuid> {
    journal
        .find_by_ticker(ticker)
        .map(|t| t.id)
        .ok_or_else(|| anyhow!("no trade found for {}", ticker.to_uppercase()))
}
