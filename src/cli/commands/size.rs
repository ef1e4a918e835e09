//! Size a position without touching the journal.

use crate::cli::SizeArgs;
use anyhow::Result;
use journal_config::AppConfig;
use journal_risk::{SizingInputs, SizingOutcome};

pub async fn run(args: SizeArgs, config: &AppConfig) -> Result<()> {
    let inputs = SizingInputs::new(
        args.account.unwrap_or(config.account.size),
        args.risk.unwrap_or(config.account.risk_percent),
        args.max.unwrap_or(config.account.max_position_percent),
        args.entry,
        args.stop,
    );

    match journal_risk::size(&inputs)? {
        SizingOutcome::Incomplete => {
            println!("Not enough input to size a position yet.");
        }
        SizingOutcome::Sized(result) => {
            println!("Shares:           {}", result.shares);
            println!("Position size:    ${:.2}", result.position_size);
            println!("Risk per share:   ${:.2}", result.risk_per_share);
            println!(
                "Actual risk:      ${:.2} ({:.2}% of account)",
                result.actual_risk, result.actual_risk_percent
            );
            println!("Pct of account:   {:.2}%", result.percent_of_account);
            println!("Stop distance:    {:.2}%", result.stop_distance_percent);
            if result.is_limited {
                println!("Note: size was clamped by the max-position cap.");
            }
        }
    }

    Ok(())
}
