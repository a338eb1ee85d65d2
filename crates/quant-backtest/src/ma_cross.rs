//! Moving-average crossover strategy.

use quant_core::{BacktestResult, PriceSeries, TradeAction, TradeSignal};
use tracing::debug;

use crate::engine::BacktestStrategy;
use crate::statistics::summarize;

/// Long-only fast/slow SMA crossover.
///
/// A golden cross (fast SMA moving from at-or-below to above the slow
/// SMA) opens the single allowed position; the symmetric death cross
/// closes it and books the round trip. An open position at series end
/// is left open and contributes no trade.
#[derive(Debug, Clone)]
pub struct MaCrossStrategy {
    fast: usize,
    slow: usize,
}

impl MaCrossStrategy {
    /// Create a crossover strategy; `fast` must be below `slow`.
    pub fn new(fast: usize, slow: usize) -> Self {
        assert!(fast > 0 && fast < slow, "fast period must be below slow");
        Self { fast, slow }
    }

    fn window_mean(closes: &[f64], end: usize, period: usize) -> f64 {
        let window = &closes[end + 1 - period..=end];
        window.iter().sum::<f64>() / period as f64
    }
}

impl BacktestStrategy for MaCrossStrategy {
    fn name(&self) -> String {
        format!("MA{}/{} cross", self.fast, self.slow)
    }

    fn run(&self, series: &PriceSeries) -> Option<BacktestResult> {
        // Ten bars beyond the slow period, else no meaningful sample.
        if series.len() < self.slow + 10 {
            return None;
        }

        let closes = series.closes();
        let dates = series.dates();

        let mut signals = Vec::new();
        let mut trades = Vec::new();
        let mut entry_price: Option<f64> = None;

        for i in self.slow..closes.len() {
            let fast_ma = Self::window_mean(&closes, i, self.fast);
            let slow_ma = Self::window_mean(&closes, i, self.slow);
            let prev_fast = Self::window_mean(&closes, i - 1, self.fast);
            let prev_slow = Self::window_mean(&closes, i - 1, self.slow);

            if prev_fast <= prev_slow && fast_ma > slow_ma && entry_price.is_none() {
                entry_price = Some(closes[i]);
                debug!(date = %dates[i], price = closes[i], "golden cross entry");
                signals.push(TradeSignal {
                    date: dates[i],
                    action: TradeAction::Buy,
                    price: closes[i],
                    profit: None,
                    reason: format!("MA{} crossed above MA{}", self.fast, self.slow),
                });
            } else if prev_fast >= prev_slow && fast_ma < slow_ma {
                if let Some(entry) = entry_price.take() {
                    let profit = (closes[i] - entry) / entry * 100.0;
                    trades.push(profit);
                    debug!(date = %dates[i], profit, "death cross exit");
                    signals.push(TradeSignal {
                        date: dates[i],
                        action: TradeAction::Sell,
                        price: closes[i],
                        profit: Some(profit),
                        reason: format!("MA{} crossed below MA{}", self.fast, self.slow),
                    });
                }
            }
        }

        Some(summarize(self.name(), &trades, signals, series.len()))
    }
}
