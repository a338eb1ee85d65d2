//! Command implementations.

pub mod analyze;
pub mod backtest;
pub mod indicators;
pub mod performance;

use anyhow::{Context, Result};
use quant_core::PriceSeries;
use std::path::Path;
use tracing::info;

/// Load the CSV series shared by every command.
pub(crate) fn load_series(path: &Path) -> Result<PriceSeries> {
    let series = quant_data::load_csv(path)
        .with_context(|| format!("failed to load price data from '{}'", path.display()))?;
    info!(len = series.len(), path = %path.display(), "price series loaded");
    Ok(series)
}
