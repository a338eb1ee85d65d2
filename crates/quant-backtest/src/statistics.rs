//! Aggregate trade statistics.

use quant_core::stats::{mean, sample_std};
use quant_core::{BacktestResult, TradeSignal};

use crate::engine::TRADING_DAYS;

/// Number of signal log entries retained on a completed-trade result.
const SIGNAL_LOG_LEN: usize = 5;

/// Fold per-trade percentage profits into a [`BacktestResult`].
///
/// With zero completed trades every numeric field is zero and the
/// signal log is kept as-is (it can hold at most one unmatched buy).
/// Otherwise the log is truncated to the most recent five entries.
///
/// Two simplifications apply: the drawdown is the single worst trade
/// rather than a running-equity measure, and a trade set without
/// losers uses an average loss of 1 so the profit/loss ratio stays
/// finite.
pub(crate) fn summarize(
    strategy: String,
    trades: &[f64],
    mut signals: Vec<TradeSignal>,
    days: usize,
) -> BacktestResult {
    if trades.is_empty() {
        return BacktestResult {
            strategy,
            total_return: 0.0,
            annual_return: 0.0,
            max_drawdown: 0.0,
            sharpe_ratio: 0.0,
            win_rate: 0.0,
            profit_loss_ratio: 0.0,
            trade_count: 0,
            signals,
        };
    }

    let total_return: f64 = trades.iter().sum();
    let annual_return = if days > 0 {
        total_return * TRADING_DAYS / days as f64
    } else {
        0.0
    };

    let wins: Vec<f64> = trades.iter().copied().filter(|t| *t > 0.0).collect();
    let losses: Vec<f64> = trades.iter().copied().filter(|t| *t < 0.0).collect();
    let win_rate = wins.len() as f64 / trades.len() as f64 * 100.0;

    let avg_win = if wins.is_empty() { 0.0 } else { mean(&wins) };
    // No losing trades: default the denominator to 1 to keep the
    // ratio defined.
    let avg_loss = if losses.is_empty() {
        1.0
    } else {
        mean(&losses).abs()
    };
    let profit_loss_ratio = if avg_loss > 0.0 { avg_win / avg_loss } else { 0.0 };

    let max_drawdown = trades
        .iter()
        .cloned()
        .fold(f64::INFINITY, f64::min)
        .abs();

    let std = sample_std(trades);
    let sharpe_ratio = if std > 0.0 {
        mean(trades) / std * (trades.len() as f64).sqrt()
    } else {
        0.0
    };

    if signals.len() > SIGNAL_LOG_LEN {
        signals.drain(..signals.len() - SIGNAL_LOG_LEN);
    }

    BacktestResult {
        strategy,
        total_return,
        annual_return,
        max_drawdown,
        sharpe_ratio,
        win_rate,
        profit_loss_ratio,
        trade_count: trades.len(),
        signals,
    }
}
