//! Backtest result types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of a simulated trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeAction {
    Buy,
    Sell,
}

impl fmt::Display for TradeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TradeAction::Buy => f.write_str("buy"),
            TradeAction::Sell => f.write_str("sell"),
        }
    }
}

/// One entry or exit recorded during a backtest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeSignal {
    pub date: NaiveDate,
    pub action: TradeAction,
    pub price: f64,
    /// Realized percentage profit; set on sells only.
    pub profit: Option<f64>,
    /// Human-readable trigger description.
    pub reason: String,
}

/// Aggregate outcome of one strategy over a series.
///
/// Always produced for a strategy that meets its length floor, even
/// with zero completed trades: the numeric fields then hold their
/// neutral zero values. This present-but-neutral policy deliberately
/// differs from the all-or-nothing performance metrics.
///
/// `max_drawdown` and `sharpe_ratio` are simplified proxies computed
/// from per-trade returns (worst single trade and mean/std of trade
/// profits), not running-equity measures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BacktestResult {
    /// Strategy identifier, e.g. "MA5/20 cross"
    pub strategy: String,
    /// Sum of per-trade percentage profits (%)
    pub total_return: f64,
    /// Total return scaled by 252/days (%)
    pub annual_return: f64,
    /// Absolute value of the single worst trade (%)
    pub max_drawdown: f64,
    /// Mean trade profit over its std, scaled by sqrt(trade count)
    pub sharpe_ratio: f64,
    /// Winning trades over completed trades (%)
    pub win_rate: f64,
    /// Mean winning profit over absolute mean losing profit
    pub profit_loss_ratio: f64,
    /// Number of completed (round-trip) trades
    pub trade_count: usize,
    /// Most recent signals, truncated to five entries
    pub signals: Vec<TradeSignal>,
}
