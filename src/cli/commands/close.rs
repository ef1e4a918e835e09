//! Close the remainder of a position.

use crate::cli::CloseArgs;
use anyhow::Result;
use chrono::Utc;
use journal_config::AppConfig;
use std::path::Path;

use super::{open_journal, resolve_ticker};

pub async fn run(args: CloseArgs, config: &AppConfig, journal_path: Option<&Path>) -> Result<()> {
    let mut journal = open_journal(config, journal_path).await?;
    let id = resolve_ticker(&journal, &args.ticker)?;
    let date = args.date.unwrap_or_else(|| Utc::now().date_naive());

    let before = journal.current_position(id)?;
    journal.close_remaining(id, args.price, date)?;

    println!(
        "Closed {}: sold the remaining {} shares at ${:.2}.",
        args.ticker.to_uppercase(),
        before.remaining,
        args.price
    );

    journal.shutdown().await;
    Ok(())
}
