//! Analyze command implementation.

use anyhow::Result;
use quant_backtest::BacktestEngine;
use quant_indicators::IndicatorEngine;
use quant_performance::PerformanceEngine;
use serde_json::json;
use tracing::info;

use crate::cli::{AnalyzeArgs, OutputFormat};

pub fn run(args: AnalyzeArgs) -> Result<()> {
    let series = super::load_series(&args.series.data)?;

    let indicators = IndicatorEngine::new().compute(&series);
    let performance = PerformanceEngine::new()
        .with_risk_free_rate(args.risk_free_rate)
        .compute(&series);
    let backtests = BacktestEngine::new().run_all(&series);

    let report = json!({
        "indicators": indicators,
        "performance": performance.as_ref().ok(),
        "backtests": backtests,
    });

    match args.series.output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => {
            println!("=== INDICATORS ===");
            print!("{}", quant_report::render_indicators(&indicators));
            println!();
            println!("=== PERFORMANCE ===");
            match &performance {
                Ok(metrics) => print!("{}", quant_report::render_performance(metrics)),
                Err(err) => println!("No performance metrics: {err}"),
            }
            println!();
            println!("=== BACKTESTS ===");
            print!("{}", quant_report::render_backtests(&backtests));
        }
    }

    if let Some(save_path) = &args.save {
        std::fs::write(save_path, serde_json::to_string_pretty(&report)?)?;
        info!(path = %save_path.display(), "analysis saved");
    }

    Ok(())
}
