//! Risk engine for the trade journal.
//!
//! Provides position sizing, sell plan generation and execution, and
//! portfolio-wide open heat aggregation. Everything here is synchronous:
//! the sizer, planner, and aggregator are pure functions over their inputs,
//! and the executor is the only code that mutates a trade.

mod executor;
mod open_heat;
mod planner;
mod position_sizer;

pub use executor::{breakeven, close_remaining, current_position, log_sale, PositionSummary};
pub use open_heat::{aggregate, HeatLevel, HeatResult};
pub use planner::generate_plan;
pub use position_sizer::{size, SizingInputs, SizingOutcome, SizingResult};
