//! Plain-text rendering of analysis results.
//!
//! The engines emit unrounded floats; display precision lives here:
//! moving averages, MACD components and prices render at 4 decimal
//! places, oscillators, percentages and ratios at 2.

use quant_core::{BacktestResult, PerformanceMetrics, TechnicalIndicators};

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}

fn push_opt(out: &mut String, label: &str, value: Option<f64>, decimals: usize) {
    if let Some(v) = value {
        push_line(out, &format!("  {label}: {v:.decimals$}"));
    }
}

fn rsi_zone(value: f64) -> &'static str {
    if value > 70.0 {
        "overbought"
    } else if value < 30.0 {
        "oversold"
    } else {
        "neutral"
    }
}

/// Render an indicator snapshot as sectioned text.
///
/// Absent indicators are omitted entirely rather than shown as zero.
pub fn render_indicators(ind: &TechnicalIndicators) -> String {
    let mut s = String::new();

    push_line(&mut s, "TREND");
    push_opt(&mut s, "MA5", ind.ma5, 4);
    push_opt(&mut s, "MA10", ind.ma10, 4);
    push_opt(&mut s, "MA20", ind.ma20, 4);
    push_opt(&mut s, "MA60", ind.ma60, 4);
    push_opt(&mut s, "EMA12", ind.ema12, 4);
    push_opt(&mut s, "EMA26", ind.ema26, 4);

    push_line(&mut s, "MACD");
    push_opt(&mut s, "Line", ind.macd, 4);
    push_opt(&mut s, "Signal", ind.macd_signal, 4);
    if let Some(hist) = ind.macd_hist {
        let tone = if hist > 0.0 { "bullish" } else { "bearish" };
        push_line(&mut s, &format!("  Histogram: {hist:.4} ({tone})"));
    }

    push_line(&mut s, "RSI");
    if let Some(rsi) = ind.rsi6 {
        push_line(&mut s, &format!("  RSI(6): {rsi:.2} ({})", rsi_zone(rsi)));
    }
    if let Some(rsi) = ind.rsi14 {
        push_line(&mut s, &format!("  RSI(14): {rsi:.2} ({})", rsi_zone(rsi)));
    }

    push_line(&mut s, "BOLLINGER");
    push_opt(&mut s, "Upper", ind.boll_upper, 4);
    push_opt(&mut s, "Middle", ind.boll_middle, 4);
    push_opt(&mut s, "Lower", ind.boll_lower, 4);
    push_opt(&mut s, "Width %", ind.boll_width, 2);

    push_line(&mut s, "KDJ");
    if let (Some(k), Some(d), Some(j)) = (ind.kdj_k, ind.kdj_d, ind.kdj_j) {
        push_line(&mut s, &format!("  K: {k:.2}, D: {d:.2}, J: {j:.2}"));
    }

    push_opt(&mut s, "ATR", ind.atr, 4);

    push_line(&mut s, &format!("Trend score: {}", ind.trend_score));
    push_line(&mut s, &format!("Signal: {}", ind.signal));

    s
}

/// Render performance metrics as sectioned text.
pub fn render_performance(perf: &PerformanceMetrics) -> String {
    let mut s = String::new();

    push_line(&mut s, "RETURNS");
    push_line(&mut s, &format!("  Total return: {:+.2}%", perf.total_return));
    push_line(&mut s, &format!("  Annual return: {:+.2}%", perf.annual_return));
    push_line(&mut s, &format!("  Daily mean: {:+.4}%", perf.daily_return_mean));
    push_line(&mut s, &format!("  Daily std: {:.4}%", perf.daily_return_std));

    push_line(&mut s, "RISK");
    push_line(&mut s, &format!("  Annual volatility: {:.2}%", perf.volatility));
    push_line(&mut s, &format!("  Max drawdown: {:.2}%", perf.max_drawdown));
    push_line(
        &mut s,
        &format!("  Drawdown duration: {} days", perf.max_drawdown_duration),
    );
    push_line(&mut s, &format!("  VaR 95%: {:.2}%", perf.var_95));
    push_line(&mut s, &format!("  VaR 99%: {:.2}%", perf.var_99));

    push_line(&mut s, "RISK-ADJUSTED");
    push_line(&mut s, &format!("  Sharpe ratio: {:.2}", perf.sharpe_ratio));
    push_line(&mut s, &format!("  Sortino ratio: {:.2}", perf.sortino_ratio));
    push_line(&mut s, &format!("  Calmar ratio: {:.2}", perf.calmar_ratio));

    push_line(&mut s, "DAYS");
    push_line(&mut s, &format!("  Up days: {}", perf.positive_days));
    push_line(&mut s, &format!("  Down days: {}", perf.negative_days));
    push_line(&mut s, &format!("  Best day: {:+.2}%", perf.best_day));
    push_line(&mut s, &format!("  Worst day: {:+.2}%", perf.worst_day));

    s
}

/// Render backtest results as sectioned text, one block per strategy
/// with its three most recent signals.
pub fn render_backtests(results: &[BacktestResult]) -> String {
    if results.is_empty() {
        return "No backtest results (series below every strategy floor)\n".to_string();
    }

    let mut s = String::new();
    for result in results {
        push_line(&mut s, &format!("[{}]", result.strategy));
        push_line(&mut s, &format!("  Total return: {:+.2}%", result.total_return));
        push_line(&mut s, &format!("  Annual return: {:+.2}%", result.annual_return));
        push_line(&mut s, &format!("  Max drawdown: {:.2}%", result.max_drawdown));
        push_line(&mut s, &format!("  Sharpe ratio: {:.2}", result.sharpe_ratio));
        push_line(&mut s, &format!("  Win rate: {:.1}%", result.win_rate));
        push_line(
            &mut s,
            &format!("  Profit/loss ratio: {:.2}", result.profit_loss_ratio),
        );
        push_line(&mut s, &format!("  Trades: {}", result.trade_count));

        if !result.signals.is_empty() {
            push_line(&mut s, "  Recent signals:");
            let start = result.signals.len().saturating_sub(3);
            for signal in &result.signals[start..] {
                push_line(
                    &mut s,
                    &format!(
                        "    {} {} @ {:.4}",
                        signal.date, signal.action, signal.price
                    ),
                );
            }
        }
        s.push('\n');
    }

    s
}
