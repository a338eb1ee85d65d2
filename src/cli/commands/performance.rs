//! Performance command implementation.

use anyhow::Result;
use quant_performance::PerformanceEngine;

use crate::cli::{OutputFormat, PerformanceArgs};

pub fn run(args: PerformanceArgs) -> Result<()> {
    let series = super::load_series(&args.series.data)?;
    let engine = PerformanceEngine::new().with_risk_free_rate(args.risk_free_rate);

    // Too little data is an analysis outcome, not a process failure.
    match engine.compute(&series) {
        Ok(metrics) => match args.series.output {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&metrics)?),
            OutputFormat::Text => print!("{}", quant_report::render_performance(&metrics)),
        },
        Err(err) => println!("No performance metrics: {err}"),
    }

    Ok(())
}
