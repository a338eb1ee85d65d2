//! Backtest command implementation.

use anyhow::Result;
use quant_backtest::BacktestEngine;

use crate::cli::{OutputFormat, SeriesArgs};

pub fn run(args: SeriesArgs) -> Result<()> {
    let series = super::load_series(&args.data)?;
    let results = BacktestEngine::new().run_all(&series);

    match args.output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&results)?),
        OutputFormat::Text => print!("{}", quant_report::render_backtests(&results)),
    }

    Ok(())
}
