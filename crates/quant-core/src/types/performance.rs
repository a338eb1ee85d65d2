//! Performance metrics over a full price series.

use serde::{Deserialize, Serialize};

/// Return, risk and risk-adjusted statistics over a price series.
///
/// Produced only when the series is long enough; a caller never sees
/// a partially filled record. Percentages are in percent units
/// (e.g. `total_return = 12.5` means +12.5%) and unrounded; display
/// precision is the presentation layer's concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceMetrics {
    // Return statistics
    /// Cumulative return, first to last close (%)
    pub total_return: f64,
    /// Annualized return, total scaled by 252/days (%)
    pub annual_return: f64,
    /// Mean daily return (%)
    pub daily_return_mean: f64,
    /// Sample standard deviation of daily returns (%)
    pub daily_return_std: f64,

    // Risk statistics
    /// Annualized volatility (%)
    pub volatility: f64,
    /// Maximum peak-to-trough drawdown (%)
    pub max_drawdown: f64,
    /// Duration of the maximum drawdown, in trading days
    pub max_drawdown_duration: usize,
    /// Historical 95% value at risk (%)
    pub var_95: f64,
    /// Historical 99% value at risk (%)
    pub var_99: f64,

    // Risk-adjusted returns
    pub sharpe_ratio: f64,
    pub sortino_ratio: f64,
    pub calmar_ratio: f64,

    // Day counts and extremes
    pub positive_days: usize,
    pub negative_days: usize,
    /// Best single-day return (%)
    pub best_day: f64,
    /// Worst single-day return (%)
    pub worst_day: f64,
}
