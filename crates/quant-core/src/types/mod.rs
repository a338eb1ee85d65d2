//! Value types produced and consumed by the engines.

mod backtest;
mod indicators;
mod performance;
mod price;

pub use backtest::{BacktestResult, TradeAction, TradeSignal};
pub use indicators::{TechnicalIndicators, TrendSignal};
pub use performance::PerformanceMetrics;
pub use price::{PricePoint, PriceSeries};
