//! Indicators command implementation.

use anyhow::Result;
use quant_indicators::IndicatorEngine;

use crate::cli::{OutputFormat, SeriesArgs};

pub fn run(args: SeriesArgs) -> Result<()> {
    let series = super::load_series(&args.data)?;
    let indicators = IndicatorEngine::new().compute(&series);

    match args.output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&indicators)?),
        OutputFormat::Text => print!("{}", quant_report::render_indicators(&indicators)),
    }

    Ok(())
}
