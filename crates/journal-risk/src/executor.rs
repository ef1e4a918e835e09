//! Sell plan execution.
//!
//! The only mutating code in the risk engine. Each action validates fully
//! before touching the trade, so a rejection never leaves a half-applied
//! target behind.

use chrono::NaiveDate;
use journal_core::{
    ExecutionError, RLevel, Sale, Target, TargetStatus, Trade, TradeStatus,
};
use rust_decimal::Decimal;
use tracing::debug;

/// Derived view of where a planned position stands.
#[derive(Debug, Clone)]
pub struct PositionSummary {
    pub initial: i64,
    pub sold: i64,
    pub remaining: i64,
    pub completed_levels: usize,
    pub total_levels: usize,
    pub next_pending: Option<Target>,
}

/// Summarize a trade's plan in a single pass over its targets.
///
/// Trades without an enabled plan report their snapshot share count as both
/// initial and remaining.
pub fn current_position(trade: &Trade) -> PositionSummary {
    let Some(plan) = trade.active_plan() else {
        return PositionSummary {
            initial: trade.snapshot.shares,
            sold: 0,
            remaining: trade.snapshot.shares,
            completed_levels: 0,
            total_levels: 0,
            next_pending: None,
        };
    };

    let mut sold = 0;
    let mut completed = 0;
    let mut next_pending = None;

    for target in &plan.targets {
        match target.status {
            TargetStatus::Executed => {
                sold += target.shares_sold.unwrap_or(0);
                completed += 1;
            }
            TargetStatus::Pending => {
                if next_pending.is_none() {
                    next_pending = Some(target.clone());
                }
            }
        }
    }

    PositionSummary {
        initial: plan.initial_shares,
        sold,
        remaining: plan.initial_shares - sold,
        completed_levels: completed,
        total_levels: plan.targets.len(),
        next_pending,
    }
}

/// Log a partial sale against a pending ladder target.
///
/// Marks the target executed, appends to the trade's sale history, and
/// recomputes the trade status.
pub fn log_sale(
    trade: &mut Trade,
    r_level: u32,
    shares: i64,
    price: Decimal,
    date: NaiveDate,
) -> Result<(), ExecutionError> {
    if shares <= 0 {
        return Err(ExecutionError::InvalidShareCount(shares));
    }

    let plan = trade
        .sell_plan
        .as_mut()
        .filter(|p| p.enabled)
        .ok_or(ExecutionError::PlanDisabled)?;

    let idx = plan
        .targets
        .iter()
        .position(|t| t.r_level == RLevel::Multiple(r_level))
        .ok_or(ExecutionError::TargetNotFound(r_level))?;
    if plan.targets[idx].is_executed() {
        return Err(ExecutionError::AlreadyExecuted(r_level));
    }

    let remaining = plan.remaining();
    if shares > remaining {
        return Err(ExecutionError::InsufficientShares {
            requested: shares,
            remaining,
        });
    }

    // Validation passed; commit the transition.
    let target = &mut plan.targets[idx];
    target.status = TargetStatus::Executed;
    target.shares_sold = Some(shares);
    target.executed_price = Some(price);
    target.executed_date = Some(date);

    let portion = target.portion.clone();
    trade.sales.push(Sale {
        portion,
        shares,
        price,
        date,
    });

    let now_remaining = remaining - shares;
    trade.status = if now_remaining == 0 {
        TradeStatus::Closed
    } else {
        TradeStatus::PartiallyClosed
    };

    debug!(
        ticker = %trade.ticker,
        r_level,
        shares,
        remaining = now_remaining,
        "sale logged"
    );
    Ok(())
}

/// Close out whatever the ladder left behind.
///
/// Synthesizes an already-executed exit target for the full remainder and
/// closes the trade.
pub fn close_remaining(
    trade: &mut Trade,
    exit_price: Decimal,
    exit_date: NaiveDate,
) -> Result<(), ExecutionError> {
    let plan = trade
        .sell_plan
        .as_mut()
        .filter(|p| p.enabled)
        .ok_or(ExecutionError::PlanDisabled)?;

    let remaining = plan.remaining();
    if remaining <= 0 {
        return Err(ExecutionError::NoPositionRemaining);
    }

    plan.targets.push(Target {
        r_level: RLevel::Exit,
        portion: "remaining".to_string(),
        target_price: exit_price,
        planned_shares: remaining,
        status: TargetStatus::Executed,
        executed_date: Some(exit_date),
        executed_price: Some(exit_price),
        shares_sold: Some(remaining),
    });

    trade.sales.push(Sale {
        portion: "remaining".to_string(),
        shares: remaining,
        price: exit_price,
        date: exit_date,
    });
    trade.status = TradeStatus::Closed;

    debug!(ticker = %trade.ticker, shares = remaining, "remaining position closed");
    Ok(())
}

/// The stop price at which the whole position breaks even, given profit
/// already locked in by executed ladder targets.
///
/// Returns `None` when nothing remains; there is no position left to
/// protect and the division would be by zero.
pub fn breakeven(trade: &Trade) -> Option<Decimal> {
    let plan = trade.active_plan()?;

    let remaining = plan.remaining();
    if remaining <= 0 {
        return None;
    }

    let locked_profit: Decimal = plan
        .targets
        .iter()
        .filter(|t| t.is_executed() && !t.r_level.is_exit())
        .map(|t| {
            Decimal::from(t.shares_sold.unwrap_or(0))
                * (t.executed_price.unwrap_or(trade.entry_price) - trade.entry_price)
        })
        .sum();

    Some(trade.entry_price - locked_profit / Decimal::from(remaining))
}
