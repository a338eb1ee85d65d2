//! Technical indicator snapshot types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorical trading signal derived from the composite trend score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrendSignal {
    StrongBuy,
    Buy,
    #[default]
    Hold,
    Sell,
    StrongSell,
}

impl fmt::Display for TrendSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TrendSignal::StrongBuy => "strong buy",
            TrendSignal::Buy => "buy",
            TrendSignal::Hold => "hold",
            TrendSignal::Sell => "sell",
            TrendSignal::StrongSell => "strong sell",
        };
        f.write_str(s)
    }
}

/// Snapshot of all indicator values as of the last point of a series.
///
/// Every indicator field is `None` when the series is too short for
/// its period; `None` is never conflated with a computed zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TechnicalIndicators {
    // Moving averages
    pub ma5: Option<f64>,
    pub ma10: Option<f64>,
    pub ma20: Option<f64>,
    pub ma60: Option<f64>,
    pub ema12: Option<f64>,
    pub ema26: Option<f64>,

    // MACD
    pub macd: Option<f64>,
    pub macd_signal: Option<f64>,
    pub macd_hist: Option<f64>,

    // RSI
    pub rsi6: Option<f64>,
    pub rsi14: Option<f64>,

    // Bollinger bands
    pub boll_upper: Option<f64>,
    pub boll_middle: Option<f64>,
    pub boll_lower: Option<f64>,
    pub boll_width: Option<f64>,

    // KDJ (simplified, unsmoothed variant)
    pub kdj_k: Option<f64>,
    pub kdj_d: Option<f64>,
    pub kdj_j: Option<f64>,

    // Volatility
    pub atr: Option<f64>,

    /// Composite trend score, clamped to [-100, 100].
    pub trend_score: i32,
    /// Categorical signal derived from the score.
    pub signal: TrendSignal,
}
