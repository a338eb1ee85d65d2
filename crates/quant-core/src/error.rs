//! Error types for the quant analysis engine.
//!
//! Insufficient history is an expected outcome of every engine, not a
//! fault: single indicator fields report it as `None`, while the
//! performance engine reports it through [`AnalysisError`] so a caller
//! can never observe a partially filled metrics record.

use thiserror::Error;

/// Errors surfaced by the analysis engines.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("insufficient data: need {required} points, have {available}")]
    InsufficientData { required: usize, available: usize },

    #[error("no usable daily returns in series")]
    NoUsableReturns,
}

/// Data loading errors.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("no data available at {0}")]
    NoDataAvailable(String),

    #[error("parse error: {0}")]
    ParseError(String),

    #[error("could not parse date: {0}")]
    InvalidDate(String),

    #[error("series is empty")]
    EmptySeries,
}

/// Result type alias for analysis operations.
pub type AnalysisResult<T> = Result<T, AnalysisError>;
