//! Core data types for the trade journal.

mod account;
mod sell_plan;
mod trade;

pub use account::AccountSettings;
pub use sell_plan::{RLevel, SellPlan, Target, TargetStatus};
pub use trade::{Sale, SizingSnapshot, Trade, TradeStatus};
