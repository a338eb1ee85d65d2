//! Performance metrics engine.
//!
//! Computes return, risk and risk-adjusted statistics over a full
//! price series. Insufficient history is reported through
//! [`quant_core::AnalysisError`]; a caller never observes a partially
//! filled [`quant_core::PerformanceMetrics`].

pub mod drawdown;
pub mod engine;

pub use drawdown::max_drawdown;
pub use engine::PerformanceEngine;
