//! CLI definitions.

pub mod commands;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use rust_decimal::Decimal;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "journal")]
#[command(author, version, about = "Trade journal: position sizing, sell plans, open heat")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Journal file path (overrides the configured path)
    #[arg(short, long)]
    pub journal: Option<PathBuf>,

    /// Log level
    #[arg(short, long, default_value = "warn")]
    pub log_level: LogLevel,

    /// Enable JSON log format
    #[arg(long)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Size a position without opening a trade
    Size(SizeArgs),
    /// Open a trade: size it, snapshot it, and attach a sell plan
    Open(OpenArgs),
    /// Log a partial sale against a ladder target
    LogSale(SaleArgs),
    /// Close the remaining shares of a trade
    Close(CloseArgs),
    /// Show the breakeven stop for a trade's remaining shares
    Breakeven(TickerArgs),
    /// Show aggregate open heat across the journal
    Heat(HeatArgs),
    /// List journaled trades
    List(ListArgs),
    /// Move a trade's working stop
    SetStop(SetStopArgs),
    /// Archive a trade
    Archive(TickerArgs),
    /// Update account settings
    SetAccount(SetAccountArgs),
    /// Validate configuration
    ValidateConfig,
}

#[derive(clap::Args)]
pub struct SizeArgs {
    /// Entry price
    #[arg(short, long)]
    pub entry: Decimal,

    /// Stop loss price
    #[arg(short, long)]
    pub stop: Decimal,

    /// Account size (defaults to the configured account)
    #[arg(long)]
    pub account: Option<Decimal>,

    /// Percent of the account to risk
    #[arg(long)]
    pub risk: Option<Decimal>,

    /// Max position as a percent of the account
    #[arg(long)]
    pub max: Option<Decimal>,
}

#[derive(clap::Args)]
pub struct OpenArgs {
    /// Ticker symbol
    pub ticker: String,

    /// Entry price
    #[arg(short, long)]
    pub entry: Decimal,

    /// Stop loss price
    #[arg(short, long)]
    pub stop: Decimal,

    /// Entry date (YYYY-MM-DD, defaults to today)
    #[arg(short, long)]
    pub date: Option<NaiveDate>,
}

#[derive(clap::Args)]
pub struct SaleArgs {
    /// Ticker symbol
    pub ticker: String,

    /// R-level of the target being hit
    #[arg(short, long)]
    pub level: u32,

    /// Shares sold
    #[arg(short, long)]
    pub shares: i64,

    /// Fill price
    #[arg(short, long)]
    pub price: Decimal,

    /// Sale date (YYYY-MM-DD, defaults to today)
    #[arg(short, long)]
    pub date: Option<NaiveDate>,
}

#[derive(clap::Args)]
pub struct CloseArgs {
    /// Ticker symbol
    pub ticker: String,

    /// Exit price
    #[arg(short, long)]
    pub price: Decimal,

    /// Exit date (YYYY-MM-DD, defaults to today)
    #[arg(short, long)]
    pub date: Option<NaiveDate>,
}

#[derive(clap::Args)]
pub struct HeatArgs {
    /// Emit the result as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(clap::Args)]
pub struct TickerArgs {
    /// Ticker symbol
    pub ticker: String,
}

#[derive(clap::Args)]
pub struct ListArgs {
    /// Include archived trades
    #[arg(long)]
    pub archived: bool,
}

#[derive(clap::Args)]
pub struct SetAccountArgs {
    /// Account size
    #[arg(long)]
    pub size: Option<Decimal>,

    /// Percent of the account to risk per trade
    #[arg(long)]
    pub risk: Option<Decimal>,

    /// Max position as a percent of the account
    #[arg(long)]
    pub max: Option<Decimal>,
}

#[derive(clap::Args)]
pub struct SetStopArgs {
    /// Ticker symbol
    pub ticker: String,

    /// New stop price
    #[arg(short, long)]
    pub stop: Decimal,
}
