//! Trade, sale-history, and sizing-snapshot types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::SellPlan;

/// Lifecycle state of a trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TradeStatus {
    Open,
    PartiallyClosed,
    Closed,
    StoppedOut,
}

impl TradeStatus {
    /// Open and partially closed trades carry open risk.
    pub fn is_active(&self) -> bool {
        matches!(self, TradeStatus::Open | TradeStatus::PartiallyClosed)
    }
}

/// One entry in a trade's sale history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sale {
    /// Display label, e.g. "1/2" or "remaining"
    pub portion: String,
    /// Shares sold
    pub shares: i64,
    /// Fill price
    pub price: Decimal,
    /// Sale date
    pub date: NaiveDate,
}

/// Immutable record of the sizing inputs/outputs captured when the trade
/// was created. Risk aggregation falls back to `shares` when a trade has
/// no sell plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SizingSnapshot {
    pub account_size: Decimal,
    pub shares: i64,
    pub position_size: Decimal,
    pub risk_percent: Decimal,
    pub percent_of_account: Decimal,
}

/// A journaled position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trade {
    pub id: Uuid,
    pub ticker: String,
    pub entry_price: Decimal,
    pub entry_date: NaiveDate,
    pub initial_stop_loss: Decimal,
    pub current_stop_loss: Decimal,
    pub status: TradeStatus,
    pub archived: bool,
    /// Ordered history of partial sales
    pub sales: Vec<Sale>,
    /// Sizing record taken at creation, never updated
    pub snapshot: SizingSnapshot,
    pub sell_plan: Option<SellPlan>,
}

impl Trade {
    /// Risk per share at entry.
    pub fn initial_risk_per_share(&self) -> Decimal {
        self.entry_price - self.initial_stop_loss
    }

    /// The enabled sell plan, if any.
    pub fn active_plan(&self) -> Option<&SellPlan> {
        self.sell_plan.as_ref().filter(|p| p.enabled)
    }
}
