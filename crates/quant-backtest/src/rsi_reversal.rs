//! RSI mean-reversion strategy.

use quant_core::{BacktestResult, PriceSeries, TradeAction, TradeSignal};
use quant_indicators::rsi;
use tracing::debug;

use crate::engine::BacktestStrategy;
use crate::statistics::summarize;

/// Long-only RSI threshold-crossing reversal.
///
/// Buys when the RSI crosses upward through the oversold threshold
/// and sells when it crosses downward through the overbought
/// threshold. The RSI is evaluated walk-forward, on the full prefix
/// up to each index.
#[derive(Debug, Clone)]
pub struct RsiReversalStrategy {
    period: usize,
    oversold: f64,
    overbought: f64,
}

impl RsiReversalStrategy {
    /// Create a strategy with custom thresholds.
    pub fn new(period: usize, oversold: f64, overbought: f64) -> Self {
        assert!(period > 0, "period must be greater than 0");
        assert!(oversold < overbought, "oversold must be below overbought");
        Self {
            period,
            oversold,
            overbought,
        }
    }
}

impl Default for RsiReversalStrategy {
    fn default() -> Self {
        Self::new(14, 30.0, 70.0)
    }
}

impl BacktestStrategy for RsiReversalStrategy {
    fn name(&self) -> String {
        format!("RSI({})", self.period)
    }

    fn run(&self, series: &PriceSeries) -> Option<BacktestResult> {
        if series.len() < self.period + 10 {
            return None;
        }

        let closes = series.closes();
        let dates = series.dates();

        let mut signals = Vec::new();
        let mut trades = Vec::new();
        let mut entry_price: Option<f64> = None;

        for i in self.period + 1..closes.len() {
            let (Some(current), Some(prev)) = (
                rsi(&closes[..=i], self.period),
                rsi(&closes[..i], self.period),
            ) else {
                continue;
            };

            if prev <= self.oversold && current > self.oversold && entry_price.is_none() {
                entry_price = Some(closes[i]);
                debug!(date = %dates[i], rsi = current, "oversold rebound entry");
                signals.push(TradeSignal {
                    date: dates[i],
                    action: TradeAction::Buy,
                    price: closes[i],
                    profit: None,
                    reason: "RSI rebounded from oversold zone".to_string(),
                });
            } else if prev >= self.overbought && current < self.overbought {
                if let Some(entry) = entry_price.take() {
                    let profit = (closes[i] - entry) / entry * 100.0;
                    trades.push(profit);
                    debug!(date = %dates[i], rsi = current, profit, "overbought exit");
                    signals.push(TradeSignal {
                        date: dates[i],
                        action: TradeAction::Sell,
                        price: closes[i],
                        profit: Some(profit),
                        reason: "RSI fell from overbought zone".to_string(),
                    });
                }
            }
        }

        Some(summarize(self.name(), &trades, signals, series.len()))
    }
}
