//! The journal context object.

use chrono::NaiveDate;
use journal_core::{
    AccountSettings, ExecutionError, SizingError, SizingSnapshot, Trade, TradeStatus,
};
use journal_risk::{HeatResult, PositionSummary, SizingInputs, SizingOutcome};
use journal_store::{JournalSnapshot, SaveHandle};
use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{debug, info};
use uuid::Uuid;

/// Service-level errors.
#[derive(Error, Debug)]
pub enum JournalError {
    #[error("no trade with id {0}")]
    TradeNotFound(Uuid),

    #[error("inputs do not size to a position")]
    NotSizable,

    #[error(transparent)]
    Sizing(#[from] SizingError),

    #[error(transparent)]
    Execution(#[from] ExecutionError),
}

/// The in-memory journal: account settings plus the full trade collection.
///
/// This is the single mutating actor. Every successful mutation pushes a
/// fresh snapshot to the save worker and recomputes open heat; persistence
/// failures never reach back into this state.
pub struct Journal {
    account: AccountSettings,
    trades: Vec<Trade>,
    saver: Option<SaveHandle>,
}

impl Journal {
    /// Build a journal from a loaded snapshot. Pass `None` for the saver to
    /// run without persistence (tests, dry runs).
    pub fn from_snapshot(snapshot: JournalSnapshot, saver: Option<SaveHandle>) -> Self {
        Self {
            account: snapshot.account,
            trades: snapshot.trades,
            saver,
        }
    }

    pub fn account(&self) -> &AccountSettings {
        &self.account
    }

    pub fn trades(&self) -> &[Trade] {
        &self.trades
    }

    /// Current state as a persistable snapshot.
    pub fn snapshot(&self) -> JournalSnapshot {
        JournalSnapshot {
            account: self.account.clone(),
            trades: self.trades.clone(),
        }
    }

    /// Release the save worker, flushing any pending write.
    pub async fn shutdown(self) {
        if let Some(saver) = self.saver {
            saver.shutdown().await;
        }
    }

    fn persist(&self) {
        if let Some(saver) = &self.saver {
            saver.enqueue(self.snapshot());
        }
    }

    fn trade_mut(&mut self, id: Uuid) -> Result<&mut Trade, JournalError> {
        self.trades
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(JournalError::TradeNotFound(id))
    }

    fn trade(&self, id: Uuid) -> Result<&Trade, JournalError> {
        self.trades
            .iter()
            .find(|t| t.id == id)
            .ok_or(JournalError::TradeNotFound(id))
    }

    /// The most recent active trade for a ticker, falling back to the most
    /// recent trade of any status.
    pub fn find_by_ticker(&self, ticker: &str) -> Option<&Trade> {
        let matches = || {
            self.trades
                .iter()
                .rev()
                .filter(move |t| t.ticker.eq_ignore_ascii_case(ticker))
        };
        matches()
            .find(|t| !t.archived && t.status.is_active())
            .or_else(|| matches().next())
    }

    /// Size a candidate position against the account settings.
    pub fn size(
        &self,
        entry_price: Decimal,
        stop_loss: Decimal,
    ) -> Result<SizingOutcome, SizingError> {
        journal_risk::size(&SizingInputs::new(
            self.account.size,
            self.account.risk_percent,
            self.account.max_position_percent,
            entry_price,
            stop_loss,
        ))
    }

    /// Size, snapshot, and open a trade with its sell plan attached.
    pub fn open_trade(
        &mut self,
        ticker: &str,
        entry_price: Decimal,
        stop_loss: Decimal,
        entry_date: NaiveDate,
    ) -> Result<&Trade, JournalError> {
        let result = match self.size(entry_price, stop_loss)? {
            SizingOutcome::Sized(result) => result,
            SizingOutcome::Incomplete => return Err(JournalError::NotSizable),
        };
        if result.shares <= 0 {
            return Err(JournalError::NotSizable);
        }

        let plan = journal_risk::generate_plan(result.shares, entry_price, stop_loss);

        let trade = Trade {
            id: Uuid::new_v4(),
            ticker: ticker.to_uppercase(),
            entry_price,
            entry_date,
            initial_stop_loss: stop_loss,
            current_stop_loss: stop_loss,
            status: TradeStatus::Open,
            archived: false,
            sales: Vec::new(),
            snapshot: SizingSnapshot {
                account_size: self.account.size,
                shares: result.shares,
                position_size: result.position_size,
                risk_percent: self.account.risk_percent,
                percent_of_account: result.percent_of_account,
            },
            sell_plan: Some(plan),
        };

        info!(ticker = %trade.ticker, shares = result.shares, "trade opened");
        let idx = self.trades.len();
        self.trades.push(trade);
        self.after_mutation();
        Ok(&self.trades[idx])
    }

    /// Log a partial sale against a ladder target.
    pub fn log_sale(
        &mut self,
        id: Uuid,
        r_level: u32,
        shares: i64,
        price: Decimal,
        date: NaiveDate,
    ) -> Result<(), JournalError> {
        let trade = self.trade_mut(id)?;
        journal_risk::log_sale(trade, r_level, shares, price, date)?;
        self.after_mutation();
        Ok(())
    }

    /// Close out whatever shares remain on a trade.
    pub fn close_remaining(
        &mut self,
        id: Uuid,
        exit_price: Decimal,
        exit_date: NaiveDate,
    ) -> Result<(), JournalError> {
        let trade = self.trade_mut(id)?;
        journal_risk::close_remaining(trade, exit_price, exit_date)?;
        self.after_mutation();
        Ok(())
    }

    /// Breakeven stop for the remaining shares, if any remain.
    pub fn breakeven(&self, id: Uuid) -> Result<Option<Decimal>, JournalError> {
        Ok(journal_risk::breakeven(self.trade(id)?))
    }

    /// Where the trade's plan currently stands.
    pub fn current_position(&self, id: Uuid) -> Result<PositionSummary, JournalError> {
        Ok(journal_risk::current_position(self.trade(id)?))
    }

    /// Move a trade's working stop.
    pub fn set_stop(&mut self, id: Uuid, stop: Decimal) -> Result<(), JournalError> {
        let trade = self.trade_mut(id)?;
        trade.current_stop_loss = stop;
        self.after_mutation();
        Ok(())
    }

    /// Archive a trade so it no longer counts toward open heat.
    pub fn archive(&mut self, id: Uuid) -> Result<(), JournalError> {
        let trade = self.trade_mut(id)?;
        trade.archived = true;
        self.after_mutation();
        Ok(())
    }

    /// Update account settings.
    pub fn set_account(&mut self, account: AccountSettings) {
        self.account = account;
        self.after_mutation();
    }

    /// Aggregate open heat, recomputed from scratch.
    pub fn open_heat(&self) -> HeatResult {
        journal_risk::aggregate(self.account.size, &self.trades)
    }

    fn after_mutation(&self) {
        let heat = self.open_heat();
        debug!(
            total_risk = %heat.total_risk,
            percent = %heat.percent,
            level = ?heat.level,
            "open heat recomputed"
        );
        self.persist();
    }
}
