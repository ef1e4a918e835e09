//! Sell plan generation: the fixed R-level exit ladder.

use journal_core::{RLevel, SellPlan, Target, TargetStatus};
use rust_decimal::Decimal;

/// The ladder: at each R-level, the fraction of the *remaining* position to
/// sell. R1 takes half, R2 a third of what is left, and so on.
const LADDER: [(u32, i64, &str); 4] = [(1, 2, "1/2"), (2, 3, "1/3"), (3, 4, "1/4"), (4, 5, "1/5")];

/// Build the exit ladder for a freshly sized position.
///
/// Share counts are allocated sequentially with a floor at every step; the
/// arithmetic is path-dependent, so this must stay an explicit loop over a
/// shrinking remainder. Whatever survives the ladder becomes the runner.
pub fn generate_plan(shares: i64, entry_price: Decimal, stop_loss: Decimal) -> SellPlan {
    let risk_per_share = entry_price - stop_loss;

    let mut remaining = shares;
    let mut targets = Vec::with_capacity(LADDER.len());

    for (level, divisor, portion) in LADDER {
        let planned = remaining / divisor;
        remaining -= planned;

        let target_price =
            (entry_price + risk_per_share * Decimal::from(level)).round_dp(2);

        targets.push(Target {
            r_level: RLevel::Multiple(level),
            portion: portion.to_string(),
            target_price,
            planned_shares: planned,
            status: TargetStatus::Pending,
            executed_date: None,
            executed_price: None,
            shares_sold: None,
        });
    }

    SellPlan {
        enabled: true,
        initial_shares: shares,
        targets,
        runner: remaining,
    }
}
