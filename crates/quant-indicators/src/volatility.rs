//! Volatility indicators.

use quant_core::stats::sample_std;
use serde::{Deserialize, Serialize};

use crate::moving_average::sma;

/// Bollinger band snapshot as of the last value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BollingerSnapshot {
    /// Upper band (middle + k * std)
    pub upper: f64,
    /// Middle band (SMA)
    pub middle: f64,
    /// Lower band (middle - k * std)
    pub lower: f64,
    /// Band width as a percentage of the middle band; `None` when the
    /// middle band is zero.
    pub width: Option<f64>,
}

/// Bollinger Bands over the last `period` closes.
///
/// Band distance is `k` sample standard deviations. Returns `None`
/// with fewer than `period` points.
pub fn bollinger(closes: &[f64], period: usize, k: f64) -> Option<BollingerSnapshot> {
    let middle = sma(closes, period)?;
    let std = sample_std(&closes[closes.len() - period..]);

    let upper = middle + k * std;
    let lower = middle - k * std;
    let width = if middle != 0.0 {
        Some((upper - lower) / middle * 100.0)
    } else {
        None
    };

    Some(BollingerSnapshot {
        upper,
        middle,
        lower,
        width,
    })
}

/// Average True Range as of the last value.
///
/// Plain mean of the last `period` true ranges, where each day's true
/// range is the largest of high-low, |high - prior close| and
/// |low - prior close|. Requires `period + 1` closes.
pub fn atr(highs: &[f64], lows: &[f64], closes: &[f64], period: usize) -> Option<f64> {
    let len = highs.len().min(lows.len()).min(closes.len());
    if period == 0 || len < period + 1 {
        return None;
    }

    let mut true_ranges = Vec::with_capacity(len - 1);
    for i in 1..len {
        let high_low = highs[i] - lows[i];
        let high_close = (highs[i] - closes[i - 1]).abs();
        let low_close = (lows[i] - closes[i - 1]).abs();
        true_ranges.push(high_low.max(high_close).max(low_close));
    }

    let sum: f64 = true_ranges[true_ranges.len() - period..].iter().sum();
    Some(sum / period as f64)
}
