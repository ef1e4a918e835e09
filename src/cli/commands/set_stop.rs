//! Move a trade's working stop.

use crate::cli::SetStopArgs;
use anyhow::Result;
use journal_config::AppConfig;
use std::path::Path;

use super::{open_journal, resolve_ticker};

pub async fn run(
    args: SetStopArgs,
    config: &AppConfig,
    journal_path: Option<&Path>,
) -> Result<()> {
    let mut journal = open_journal(config, journal_path).await?;
    let id = resolve_ticker(&journal, &args.ticker)?;

    journal.set_stop(id, args.stop)?;

    let heat = journal.open_heat();
    println!(
        "Stop for {} moved to ${:.2}. Open heat is now ${:.2} ({:.2}%).",
        args.ticker.to_uppercase(),
        args.stop,
        heat.total_risk,
        heat.percent
    );

    journal.shutdown().await;
    Ok(())
}
