//! Validate configuration command.

use anyhow::Result;
use journal_config::load_config;
use std::path::Path;

pub async fn run(config_path: &Path) -> Result<()> {
    println!("Validating configuration: {:?}", config_path);

    match load_config(config_path) {
        Ok(config) => {
            println!("Configuration is valid!");
            println!();
            println!("App: {}", config.app.name);
            println!("Environment: {}", config.app.environment);
            println!("Log level: {}", config.logging.level);
            println!("Journal file: {}", config.journal.path);
            println!("Save debounce: {}ms", config.journal.save_debounce_ms);
            println!("Account size: ${}", config.account.size);
            println!("Risk per trade: {}%", config.account.risk_percent);
            println!("Max position: {}%", config.account.max_position_percent);
        }
        Err(e) => {
            println!("Configuration error: {}", e);
            return Err(e.into());
        }
    }

    Ok(())
}
