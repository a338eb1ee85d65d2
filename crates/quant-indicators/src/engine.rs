//! Indicator snapshot engine.

use quant_core::{PriceSeries, TechnicalIndicators};
use tracing::debug;

use crate::momentum::{kdj, macd, rsi};
use crate::moving_average::{ema, sma};
use crate::scoring::trend_score;
use crate::volatility::{atr, bollinger};

/// Minimum series length below which no indicator is computed.
const MIN_POINTS: usize = 5;

/// Computes a [`TechnicalIndicators`] snapshot from a price series.
///
/// Stateless; a single instance can be shared freely across threads
/// and concurrent computations over different series never interact.
#[derive(Debug, Clone, Default)]
pub struct IndicatorEngine;

impl IndicatorEngine {
    pub fn new() -> Self {
        Self
    }

    /// Compute all indicators as of the last point of `series`.
    ///
    /// A series shorter than five points yields the all-absent
    /// default: every field `None`, score 0, hold signal.
    pub fn compute(&self, series: &PriceSeries) -> TechnicalIndicators {
        if series.len() < MIN_POINTS {
            debug!(len = series.len(), "series below indicator floor");
            return TechnicalIndicators::default();
        }

        let closes = series.closes();
        let highs = series.highs();
        let lows = series.lows();

        let mut ind = TechnicalIndicators {
            ma5: sma(&closes, 5),
            ma10: sma(&closes, 10),
            ma20: sma(&closes, 20),
            ma60: sma(&closes, 60),
            ema12: ema(&closes, 12),
            ema26: ema(&closes, 26),
            rsi6: rsi(&closes, 6),
            rsi14: rsi(&closes, 14),
            atr: atr(&highs, &lows, &closes, 14),
            ..Default::default()
        };

        let macd_snapshot = macd(&closes, 12, 26, 9);
        ind.macd = macd_snapshot.line;
        ind.macd_signal = macd_snapshot.signal;
        ind.macd_hist = macd_snapshot.histogram;

        if let Some(bands) = bollinger(&closes, 20, 2.0) {
            ind.boll_upper = Some(bands.upper);
            ind.boll_middle = Some(bands.middle);
            ind.boll_lower = Some(bands.lower);
            ind.boll_width = bands.width;
        }

        if let Some(snapshot) = kdj(&highs, &lows, &closes, 9) {
            ind.kdj_k = Some(snapshot.k);
            ind.kdj_d = Some(snapshot.d);
            ind.kdj_j = Some(snapshot.j);
        }

        let current_price = *closes.last().unwrap_or(&0.0);
        let (score, signal) = trend_score(current_price, &ind);
        ind.trend_score = score;
        ind.signal = signal;

        debug!(score, %signal, "indicator snapshot computed");
        ind
    }
}
