//! Breakeven stop for a trade's remaining shares.

use crate::cli::TickerArgs;
use anyhow::Result;
use journal_config::AppConfig;
use std::path::Path;

use super::{open_journal, resolve_ticker};

pub async fn run(args: TickerArgs, config: &AppConfig, journal_path: Option<&Path>) -> Result<()> {
    let journal = open_journal(config, journal_path).await?;
    let id = resolve_ticker(&journal, &args.ticker)?;

    match journal.breakeven(id)? {
        Some(price) => println!(
            "{} breaks even with a stop at ${:.2}.",
            args.ticker.to_uppercase(),
            price
        ),
        None => println!(
            "{} has no shares remaining; breakeven does not apply.",
            args.ticker.to_uppercase()
        ),
    }

    journal.shutdown().await;
    Ok(())
}
