//! Open a trade with a sell plan attached.

use crate::cli::OpenArgs;
use anyhow::Result;
use chrono::Utc;
use journal_config::AppConfig;
use std::path::Path;

use super::open_journal;

pub async fn run(args: OpenArgs, config: &AppConfig, journal_path: Option<&Path>) -> Result<()> {
    let mut journal = open_journal(config, journal_path).await?;
    let date = args.date.unwrap_or_else(|| Utc::now().date_naive());

    let trade = journal.open_trade(&args.ticker, args.entry, args.stop, date)?;

    println!(
        "Opened {}: {} shares at ${:.2}, stop ${:.2}",
        trade.ticker, trade.snapshot.shares, trade.entry_price, trade.initial_stop_loss
    );

    if let Some(plan) = &trade.sell_plan {
        println!();
        println!("Sell plan ({} shares):", plan.initial_shares);
        for target in &plan.targets {
            println!(
                "  {}  sell {:>6} ({})  at ${:.2}",
                target.r_level, target.planned_shares, target.portion, target.target_price
            );
        }
        println!("  runner: {} shares", plan.runner);
    }

    journal.shutdown().await;
    Ok(())
}
