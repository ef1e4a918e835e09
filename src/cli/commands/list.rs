//! List journaled trades.

use crate::cli::ListArgs;
use anyhow::Result;
use journal_config::AppConfig;
use journal_core::TradeStatus;
use std::path::Path;

use super::open_journal;

pub async fn run(args: ListArgs, config: &AppConfig, journal_path: Option<&Path>) -> Result<()> {
    let journal = open_journal(config, journal_path).await?;

    let trades: Vec<_> = journal
        .trades()
        .iter()
        .filter(|t| args.archived || !t.archived)
        .collect();

    if trades.is_empty() {
        println!("No trades journaled.");
    } else {
        println!(
            "{:<8} {:<12} {:>10} {:>10} {:>8} {:>17}",
            "TICKER", "ENTRY DATE", "ENTRY", "STOP", "SHARES", "STATUS"
        );
        for trade in trades {
            let status = match trade.status {
                TradeStatus::Open => "open",
                TradeStatus::PartiallyClosed => "partially closed",
                TradeStatus::Closed => "closed",
                TradeStatus::StoppedOut => "stopped out",
            };
            let remaining = journal
                .current_position(trade.id)
                .map(|s| s.remaining)
                .unwrap_or(trade.snapshot.shares);
            println!(
                "{:<8} {:<12} {:>10.2} {:>10.2} {:>8} {:>17}{}",
                trade.ticker,
                trade.entry_date.to_string(),
                trade.entry_price,
                trade.current_stop_loss,
                remaining,
                status,
                if trade.archived { " (archived)" } else { "" }
            );
        }
    }

    journal.shutdown().await;
    Ok(())
}
