//! Update account settings.

use crate::cli::SetAccountArgs;
use anyhow::Result;
use journal_config::AppConfig;
use std::path::Path;

use super::open_journal;

pub async fn run(
    args: SetAccountArgs,
    config: &AppConfig,
    journal_path: Option<&Path>,
) -> Result<()> {
    let mut journal = open_journal(config, journal_path).await?;

    let mut account = journal.account().clone();
    if let Some(size) = args.size {
        account.size = size;
    }
    if let Some(risk) = args.risk {
        account.risk_percent = risk;
    }
    if let Some(max) = args.max {
        account.max_position_percent = max;
    }
    journal.set_account(account);

    let account = journal.account();
    let heat = journal.open_heat();
    println!(
        "Account: ${} at {}% risk per trade, {}% max position.",
        account.size, account.risk_percent, account.max_position_percent
    );
    println!(
        "Open heat is now ${:.2} ({:.2}%).",
        heat.total_risk, heat.percent
    );

    journal.shutdown().await;
    Ok(())
}
