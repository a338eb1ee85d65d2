//! Performance metrics computation.

use quant_core::stats::{mean, sample_std};
use quant_core::{AnalysisError, AnalysisResult, PerformanceMetrics, PriceSeries};
use tracing::debug;

use crate::drawdown::max_drawdown;

/// Trading days per year used for annualization.
pub const TRADING_DAYS: f64 = 252.0;

/// Minimum series length for any metric to be produced.
const MIN_POINTS: usize = 5;

/// Computes [`PerformanceMetrics`] from a price series.
///
/// Stateless apart from its configuration; safe to share across
/// threads.
#[derive(Debug, Clone)]
pub struct PerformanceEngine {
    /// Annual risk-free rate used in Sharpe and Sortino, e.g. 0.02.
    risk_free_rate: f64,
}

impl Default for PerformanceEngine {
    fn default() -> Self {
        Self {
            risk_free_rate: 0.02,
        }
    }
}

impl PerformanceEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the annual risk-free rate.
    pub fn with_risk_free_rate(mut self, rate: f64) -> Self {
        self.risk_free_rate = rate;
        self
    }

    /// Compute the full metrics record, or report why none exists.
    ///
    /// Daily returns are percentage changes between consecutive
    /// closes; pairs with a zero prior close are skipped. A series
    /// shorter than five points, or one without a single usable
    /// return pair, yields no record at all.
    pub fn compute(&self, series: &PriceSeries) -> AnalysisResult<PerformanceMetrics> {
        if series.len() < MIN_POINTS {
            return Err(AnalysisError::InsufficientData {
                required: MIN_POINTS,
                available: series.len(),
            });
        }

        let closes = series.closes();
        let mut daily_returns = Vec::with_capacity(closes.len() - 1);
        for i in 1..closes.len() {
            if closes[i - 1] != 0.0 {
                daily_returns.push((closes[i] - closes[i - 1]) / closes[i - 1] * 100.0);
            }
        }

        if daily_returns.is_empty() {
            return Err(AnalysisError::NoUsableReturns);
        }

        let total_return = if closes[0] != 0.0 {
            (closes[closes.len() - 1] - closes[0]) / closes[0] * 100.0
        } else {
            0.0
        };
        let days = series.len() as f64;
        let annual_return = total_return * TRADING_DAYS / days;

        let daily_mean = mean(&daily_returns);
        let daily_std = sample_std(&daily_returns);
        let volatility = daily_std * TRADING_DAYS.sqrt();

        let (max_dd, max_dd_duration) = max_drawdown(&closes);

        // Historical VaR at the 5th/1st percentile of sorted returns
        let mut sorted = daily_returns.clone();
        sorted.sort_by(|a, b| a.total_cmp(b));
        let var_95 = percentile_floor(&sorted, 0.05);
        let var_99 = percentile_floor(&sorted, 0.01);

        let risk_free_daily = self.risk_free_rate / TRADING_DAYS;
        let sharpe_ratio = if daily_std > 0.0 {
            (daily_mean - risk_free_daily * 100.0) / daily_std * TRADING_DAYS.sqrt()
        } else {
            0.0
        };

        let downside: Vec<f64> = daily_returns.iter().copied().filter(|r| *r < 0.0).collect();
        let sortino_ratio = if downside.is_empty() {
            0.0
        } else {
            let downside_std = sample_std(&downside);
            if downside_std > 0.0 {
                (daily_mean - risk_free_daily * 100.0) / downside_std * TRADING_DAYS.sqrt()
            } else {
                0.0
            }
        };

        let calmar_ratio = if max_dd != 0.0 {
            annual_return / max_dd.abs()
        } else {
            0.0
        };

        let positive_days = daily_returns.iter().filter(|r| **r > 0.0).count();
        let negative_days = daily_returns.iter().filter(|r| **r < 0.0).count();
        let best_day = daily_returns.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let worst_day = daily_returns.iter().cloned().fold(f64::INFINITY, f64::min);

        debug!(total_return, max_dd, sharpe_ratio, "performance computed");

        Ok(PerformanceMetrics {
            total_return,
            annual_return,
            daily_return_mean: daily_mean,
            daily_return_std: daily_std,
            volatility,
            max_drawdown: max_dd,
            max_drawdown_duration: max_dd_duration,
            var_95,
            var_99,
            sharpe_ratio,
            sortino_ratio,
            calmar_ratio,
            positive_days,
            negative_days,
            best_day,
            worst_day,
        })
    }
}

/// Value at `floor(n * fraction)` of an ascending-sorted slice, or
/// 0.0 when the index falls outside the slice.
fn percentile_floor(sorted: &[f64], fraction: f64) -> f64 {
    let idx = (sorted.len() as f64 * fraction) as usize;
    sorted.get(idx).copied().unwrap_or(0.0)
}
