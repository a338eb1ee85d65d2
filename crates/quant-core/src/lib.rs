//! Core types for the quant analysis engine.
//!
//! This crate provides the foundational building blocks including:
//! - Price series types (PricePoint, PriceSeries)
//! - Engine output types (TechnicalIndicators, PerformanceMetrics, BacktestResult)
//! - Shared statistics helpers
//! - The error taxonomy used across the engines

pub mod error;
pub mod stats;
pub mod types;

pub use error::{AnalysisError, AnalysisResult, DataError};
pub use types::*;
