//! Backtest battery engine.

use quant_core::{BacktestResult, PriceSeries};
use tracing::debug;

use crate::ma_cross::MaCrossStrategy;
use crate::rsi_reversal::RsiReversalStrategy;

/// Trading days per year used for annualizing trade returns.
pub(crate) const TRADING_DAYS: f64 = 252.0;

/// A rule-based strategy simulated over a price series.
///
/// `run` yields `None` only when the series is below the strategy's
/// length floor; a qualifying series always yields a result, even
/// with zero completed trades.
pub trait BacktestStrategy: Send + Sync {
    /// Strategy identifier used in results and reports.
    fn name(&self) -> String;

    /// Simulate the strategy over the series.
    fn run(&self, series: &PriceSeries) -> Option<BacktestResult>;
}

/// Runs a battery of strategies over a series.
///
/// The default battery is MA 5/20 cross, MA 10/30 cross and RSI(14)
/// with 30/70 thresholds.
pub struct BacktestEngine {
    strategies: Vec<Box<dyn BacktestStrategy>>,
}

impl BacktestEngine {
    /// Engine with the default strategy battery.
    pub fn new() -> Self {
        Self {
            strategies: vec![
                Box::new(MaCrossStrategy::new(5, 20)),
                Box::new(MaCrossStrategy::new(10, 30)),
                Box::new(RsiReversalStrategy::default()),
            ],
        }
    }

    /// Engine with no strategies registered.
    pub fn empty() -> Self {
        Self {
            strategies: Vec::new(),
        }
    }

    /// Register an additional strategy.
    pub fn with_strategy(mut self, strategy: Box<dyn BacktestStrategy>) -> Self {
        self.strategies.push(strategy);
        self
    }

    /// Run every registered strategy, in registration order.
    ///
    /// Strategies whose length floor exceeds the series contribute no
    /// entry.
    pub fn run_all(&self, series: &PriceSeries) -> Vec<BacktestResult> {
        self.strategies
            .iter()
            .filter_map(|strategy| {
                let result = strategy.run(series);
                if result.is_none() {
                    debug!(strategy = %strategy.name(), len = series.len(), "series below strategy floor");
                }
                result
            })
            .collect()
    }
}

impl Default for BacktestEngine {
    fn default() -> Self {
        Self::new()
    }
}
