//! Rule-based strategy backtesting.
//!
//! Simulates long-only single-position strategies over a price series
//! and aggregates per-trade statistics. Unlike the performance engine,
//! a strategy that completes zero trades still yields a result with
//! neutral zero statistics; only a series below a strategy's length
//! floor yields nothing for that strategy.

pub mod engine;
pub mod ma_cross;
pub mod rsi_reversal;
mod statistics;

pub use engine::{BacktestEngine, BacktestStrategy};
pub use ma_cross::MaCrossStrategy;
pub use rsi_reversal::RsiReversalStrategy;
