//! Log a partial sale.

use crate::cli::SaleArgs;
use anyhow::Result;
use chrono::Utc;
use journal_config::AppConfig;
use std::path::Path;

use super::{open_journal, resolve_ticker};

pub async fn run(args: SaleArgs, config: &AppConfig, journal_path: Option<&Path>) -> Result<()> {
    let mut journal = open_journal(config, journal_path).await?;
    let id = resolve_ticker(&journal, &args.ticker)?;
    let date = args.date.unwrap_or_else(|| Utc::now().date_naive());

    journal.log_sale(id, args.level, args.shares, args.price, date)?;

    let summary = journal.current_position(id)?;
    println!(
        "Logged R{}: sold {} at ${:.2}. {} of {} shares remain ({}/{} levels done).",
        args.level,
        args.shares,
        args.price,
        summary.remaining,
        summary.initial,
        summary.completed_levels,
        summary.total_levels
    );
    if let Some(next) = summary.next_pending {
        println!(
            "Next target: {} at ${:.2} ({} shares)",
            next.r_level, next.target_price, next.planned_shares
        );
    }

    journal.shutdown().await;
    Ok(())
}
