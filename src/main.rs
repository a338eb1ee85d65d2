//! Quantitative analysis CLI application.

mod cli;
mod logging;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use logging::setup_logging;

fn main() -> Result<()> {
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

    // Execute command
    match cli.command {
        Commands::Analyze(args) => cli::commands::analyze::run(args),
        Commands::Indicators(args) => cli::commands::indicators::run(args),
        Commands::Performance(args) => cli::commands::performance::run(args),
        Commands::Backtest(args) => cli::commands::backtest::run(args),
    }
}
