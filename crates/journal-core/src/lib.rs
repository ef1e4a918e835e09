//! Core types and errors for the trade journal.
//!
//! This crate provides the foundational building blocks including:
//! - Trade, sale, and sizing-snapshot types
//! - Sell plan and target types (the R-level exit ladder)
//! - Account settings
//! - The error taxonomy shared across the journal

pub mod error;
pub mod types;

pub use error::{ExecutionError, SizingError, StoreError};
pub use types::*;
