//! The journal service.
//!
//! Holds the in-memory trade collection and account settings, exposes the
//! risk operations to callers, and hands snapshots to the save worker after
//! every mutation.

mod service;

pub use service::{Journal, JournalError};
