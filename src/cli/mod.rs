//! CLI definitions.

pub mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "quant")]
#[command(author, version, about = "Quantitative analysis of historical price series")]
pub struct Cli {
    /// Log level
    #[arg(short, long, default_value = "info")]
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

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run indicators, performance metrics and backtests together
    Analyze(AnalyzeArgs),
    /// Compute the technical indicator snapshot
    Indicators(SeriesArgs),
    /// Compute performance and risk metrics
    Performance(PerformanceArgs),
    /// Run the strategy backtest battery
    Backtest(SeriesArgs),
}

#[derive(clap::Args)]
pub struct SeriesArgs {
    /// Price data file (CSV)
    #[arg(short, long)]
    pub data: PathBuf,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(clap::Args)]
pub struct PerformanceArgs {
    #[command(flatten)]
    pub series: SeriesArgs,

    /// Annual risk-free rate for Sharpe and Sortino
    #[arg(long, default_value = "0.02")]
    pub risk_free_rate: f64,
}

#[derive(clap::Args)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub series: SeriesArgs,

    /// Annual risk-free rate for Sharpe and Sortino
    #[arg(long, default_value = "0.02")]
    pub risk_free_rate: f64,

    /// Save the JSON result to a file
    #[arg(long)]
    pub save: Option<PathBuf>,
}
