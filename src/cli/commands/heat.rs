//! Aggregate open heat.

use crate::cli::HeatArgs;
use anyhow::Result;
use journal_config::AppConfig;
use journal_risk::HeatLevel;
use std::path::Path;

use super::open_journal;

pub async fn run(args: HeatArgs, config: &AppConfig, journal_path: Option<&Path>) -> Result<()> {
    let journal = open_journal(config, journal_path).await?;
    let heat = journal.open_heat();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&heat)?);
        journal.shutdown().await;
        return Ok(());
    }

    let label = match heat.level {
        HeatLevel::Cash => "CASH",
        HeatLevel::Freerolled => "FREEROLLED",
        HeatLevel::Low => "LOW",
        HeatLevel::Med => "MED",
        HeatLevel::High => "HIGH",
    };

    println!("Open heat: {}", label);
    println!("Active positions: {}", heat.active_positions);
    println!(
        "Total open risk:  ${:.2} ({:.2}% of ${:.2})",
        heat.total_risk,
        heat.percent,
        journal.account().size
    );

    journal.shutdown().await;
    Ok(())
}
