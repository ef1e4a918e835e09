//! Archive a trade.

use crate::cli::TickerArgs;
use anyhow::Result;
use journal_config::AppConfig;
use std::path::Path;

use super::{open_journal, resolve_ticker};

pub async fn run(args: TickerArgs, config: &AppConfig, journal_path: Option<&Path>) -> Result<()> {
    let mut journal = open_journal(config, journal_path).await?;
    let id = resolve_ticker(&journal, &args.ticker)?;

    journal.archive(id)?;
    println!("Archived {}.", args.ticker.to_uppercase());

    journal.shutdown().await;
    Ok(())
}
