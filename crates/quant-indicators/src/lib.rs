//! Technical indicator engine.
//!
//! Indicator primitives over closing-price slices:
//! - Moving averages (SMA, EMA)
//! - Momentum oscillators (RSI, MACD, KDJ)
//! - Volatility measures (Bollinger Bands, ATR)
//!
//! Every primitive reports insufficient history as `None` rather than
//! an error or a zero. [`IndicatorEngine`] bundles them into a single
//! snapshot with a composite trend score and categorical signal.

pub mod engine;
pub mod momentum;
pub mod moving_average;
mod scoring;
pub mod volatility;

pub use engine::IndicatorEngine;
pub use momentum::{kdj, macd, rsi, KdjSnapshot, MacdSnapshot};
pub use moving_average::{ema, ema_series, sma};
pub use volatility::{atr, bollinger, BollingerSnapshot};
