//! Trade journal CLI application.

mod cli;
mod logging;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use logging::setup_logging;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = match cli.log_level {
        cli::LogLevel::Trace => "trace",
        cli::LogLevel::Debug => "debug",
        cli::LogLevel::Info => "info",
        cli::LogLevel::Warn => "warn",
        cli::LogLevel::Error => "error",
    };
    setup_logging(log_level, cli.json_logs);

    let config = journal_config::load_config(&cli.config)?;
    let journal_path = cli.journal.as_deref();

    // Execute command
    match cli.command {
        Commands::Size(args) => cli::commands::size::run(args, &config).await,
        Commands::Open(args) => cli::commands::open::run(args, &config, journal_path).await,
        Commands::LogSale(args) => cli::commands::sale::run(args, &config, journal_path).await,
        Commands::Close(args) => cli::commands::close::run(args, &config, journal_path).await,
        Commands::Breakeven(args) => {
            cli::commands::breakeven::run(args, &config, journal_path).await
        }
        Commands::Heat(args) => cli::commands::heat::run(args, &config, journal_path).await,
        Commands::List(args) => cli::commands::list::run(args, &config, journal_path).await,
        Commands::SetStop(args) => cli::commands::set_stop::run(args, &config, journal_path).await,
        Commands::Archive(args) => cli::commands::archive::run(args, &config, journal_path).await,
        Commands::SetAccount(args) => {
            cli::commands::set_account::run(args, &config, journal_path).await
        }
        Commands::ValidateConfig => cli::commands::validate::run(&cli.config).await,
    }
}
