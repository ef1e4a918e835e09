//! Error types for the trade journal.

use rust_decimal::Decimal;
use thiserror::Error;

/// Position sizing validation errors.
///
/// Missing or non-positive inputs are not errors; the sizer reports them as
/// an incomplete outcome so callers can render a neutral state.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SizingError {
    #[error("stop loss {stop} must be below entry price {entry}")]
    InvalidStopLoss { stop: Decimal, entry: Decimal },

    #[error("{field} must be within (0, 100], got {value}")]
    InvalidPercent { field: &'static str, value: Decimal },
}

/// Sell plan execution errors.
///
/// A rejected action leaves the trade and its plan untouched.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExecutionError {
    #[error("trade has no enabled sell plan")]
    PlanDisabled,

    #[error("no R{0} target in the sell plan")]
    TargetNotFound(u32),

    #[error("R{0} target was already executed")]
    AlreadyExecuted(u32),

    #[error("share count must be positive, got {0}")]
    InvalidShareCount(i64),

    #[error("cannot sell {requested} shares, only {remaining} remaining")]
    InsufficientShares { requested: i64, remaining: i64 },

    #[error("no position remaining to close")]
    NoPositionRemaining,
}

/// Persistence errors surfaced by the journal store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
