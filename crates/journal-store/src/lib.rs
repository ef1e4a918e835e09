//! Persistence for the trade journal.
//!
//! The journal itself is in-memory; this crate owns getting it on and off
//! disk. Saves are fire-and-forget through a debounced worker so the core
//! never blocks on (or observes a failure of) persistence.

mod json_store;
mod save_worker;

pub use json_store::JsonFileStore;
pub use save_worker::{spawn_save_worker, SaveHandle};

use async_trait::async_trait;
use journal_core::{AccountSettings, StoreError, Trade};
use serde::{Deserialize, Serialize};

/// The persisted form of the journal: account settings plus every trade.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JournalSnapshot {
    pub account: AccountSettings,
    pub trades: Vec<Trade>,
}

/// A place the journal can be loaded from and saved to.
#[async_trait]
pub trait JournalStore: Send + Sync {
    /// Load the full journal. A store with nothing persisted yet returns an
    /// empty snapshot, not an error.
    async fn load(&self) -> Result<JournalSnapshot, StoreError>;

    /// Persist the full journal.
    async fn save(&self, snapshot: &JournalSnapshot) -> Result<(), StoreError>;
}
