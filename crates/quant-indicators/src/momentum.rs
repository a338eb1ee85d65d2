//! Momentum oscillators.

use serde::{Deserialize, Serialize};

use crate::moving_average::{ema_series, sma};

/// Relative Strength Index as of the last value.
///
/// Uses plain averages of the last `period` gains and losses, not
/// Wilder smoothing. Returns 100 when the average loss is zero and
/// `None` with fewer than `period + 1` points.
pub fn rsi(closes: &[f64], period: usize) -> Option<f64> {
    if period == 0 || closes.len() < period + 1 {
        return None;
    }

    let mut gains = 0.0;
    let mut losses = 0.0;
    for i in closes.len() - period..closes.len() {
        let change = closes[i] - closes[i - 1];
        if change > 0.0 {
            gains += change;
        } else {
            losses += -change;
        }
    }

    let avg_gain = gains / period as f64;
    let avg_loss = losses / period as f64;

    if avg_loss == 0.0 {
        return Some(100.0);
    }
    Some(100.0 - 100.0 / (1.0 + avg_gain / avg_loss))
}

/// MACD snapshot as of the last value.
///
/// The signal line is only defined once `slow + signal` points exist,
/// so the three fields become present at different series lengths.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacdSnapshot {
    /// MACD line (fast EMA - slow EMA)
    pub line: Option<f64>,
    /// Signal line (SMA of the MACD line over prefix lengths)
    pub signal: Option<f64>,
    /// Histogram (line - signal)
    pub histogram: Option<f64>,
}

/// MACD with SMA signal line.
///
/// The line requires `slow` points; signal and histogram require
/// `slow + signal` points. The signal line averages the MACD line as
/// recomputed at every prefix length from `slow` to the current
/// length, which the aligned EMA series below produces in O(n).
pub fn macd(closes: &[f64], fast: usize, slow: usize, signal: usize) -> MacdSnapshot {
    if closes.len() < slow {
        return MacdSnapshot::default();
    }

    let fast_emas = ema_series(closes, fast);
    let slow_emas = ema_series(closes, slow);

    // fast_emas[i] covers the prefix of length fast + i, so the value
    // aligned with slow_emas[j] sits at offset slow - fast.
    let offset = slow - fast;
    let history: Vec<f64> = fast_emas[offset..]
        .iter()
        .zip(slow_emas.iter())
        .map(|(f, s)| f - s)
        .collect();

    let line = history.last().copied();

    if closes.len() < slow + signal {
        return MacdSnapshot {
            line,
            signal: None,
            histogram: None,
        };
    }

    let signal_line = sma(&history, signal);
    MacdSnapshot {
        line,
        signal: signal_line,
        histogram: line.zip(signal_line).map(|(l, s)| l - s),
    }
}

/// KDJ snapshot as of the last value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KdjSnapshot {
    pub k: f64,
    pub d: f64,
    pub j: f64,
}

/// KDJ stochastic oscillator, simplified variant.
///
/// RSV compares the last close against the high/low range of the last
/// `period` bars, midpointing at 50 when the range is zero. This
/// variant takes K = D = RSV with no recursive smoothing (the
/// textbook form smooths both), so J = 3K - 2D collapses to K.
pub fn kdj(highs: &[f64], lows: &[f64], closes: &[f64], period: usize) -> Option<KdjSnapshot> {
    let len = highs.len().min(lows.len()).min(closes.len());
    if period == 0 || len < period {
        return None;
    }

    let highest = highs[len - period..]
        .iter()
        .cloned()
        .fold(f64::NEG_INFINITY, f64::max);
    let lowest = lows[len - period..]
        .iter()
        .cloned()
        .fold(f64::INFINITY, f64::min);

    let rsv = if highest == lowest {
        50.0
    } else {
        (closes[len - 1] - lowest) / (highest - lowest) * 100.0
    };

    let k = rsv;
    let d = k;
    let j = 3.0 * k - 2.0 * d;

    Some(KdjSnapshot { k, d, j })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rsi_bounds() {
        let data: Vec<f64> = (0..30).map(|i| 100.0 + (i as f64 * 0.5).sin() * 5.0).collect();
        let value = rsi(&data, 14).unwrap();
        assert!((0.0..=100.0).contains(&value));
    }

    #[test]
    fn test_rsi_all_gains_is_100() {
        let data = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
        assert!((rsi(&data, 5).unwrap() - 100.0).abs() < 1e-10);
    }

    #[test]
    fn test_rsi_all_losses_is_zero() {
        let data = vec![7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0];
        assert!(rsi(&data, 5).unwrap().abs() < 1e-10);
    }

    #[test]
    fn test_rsi_flat_series_is_100() {
        // Zero deltas count as gains of zero, so the average loss is
        // zero and the oscillator pins at 100.
        let data = vec![100.0; 20];
        assert!((rsi(&data, 14).unwrap() - 100.0).abs() < 1e-10);
    }

    #[test]
    fn test_rsi_insufficient_data() {
        let data = vec![1.0; 14];
        assert!(rsi(&data, 14).is_none());
    }

    #[test]
    fn test_rsi_known_value() {
        // Deltas: +2, -1, +3. avg_gain = 5/3, avg_loss = 1/3, rs = 5
        // rsi = 100 - 100/6
        let data = vec![100.0, 102.0, 101.0, 104.0];
        let expected = 100.0 - 100.0 / 6.0;
        assert!((rsi(&data, 3).unwrap() - expected).abs() < 1e-10);
    }

    #[test]
    fn test_macd_below_slow_all_absent() {
        let data: Vec<f64> = (0..25).map(|i| 100.0 + i as f64).collect();
        let snapshot = macd(&data, 12, 26, 9);
        assert!(snapshot.line.is_none());
        assert!(snapshot.signal.is_none());
        assert!(snapshot.histogram.is_none());
    }

    #[test]
    fn test_macd_mid_range_line_only() {
        let data: Vec<f64> = (0..30).map(|i| 100.0 + i as f64).collect();
        let snapshot = macd(&data, 12, 26, 9);
        assert!(snapshot.line.is_some());
        assert!(snapshot.signal.is_none());
        assert!(snapshot.histogram.is_none());
    }

    #[test]
    fn test_macd_signal_absent_just_below_boundary() {
        // 34 points: one short of the slow + signal floor, so only
        // the line is defined.
        let data: Vec<f64> = (0..34).map(|i| 100.0 + i as f64).collect();
        let snapshot = macd(&data, 12, 26, 9);
        assert!(snapshot.line.is_some());
        assert!(snapshot.signal.is_none());
        assert!(snapshot.histogram.is_none());
    }

    #[test]
    fn test_macd_signal_present_at_boundary() {
        let data: Vec<f64> = (0..35).map(|i| 100.0 + i as f64).collect();
        let snapshot = macd(&data, 12, 26, 9);
        assert!(snapshot.signal.is_some());
        assert!(snapshot.histogram.is_some());
    }

    #[test]
    fn test_macd_full() {
        let data: Vec<f64> = (0..50).map(|i| 100.0 + i as f64).collect();
        let snapshot = macd(&data, 12, 26, 9);

        let line = snapshot.line.unwrap();
        let signal = snapshot.signal.unwrap();
        let histogram = snapshot.histogram.unwrap();

        // Steady uptrend: fast EMA above slow EMA
        assert!(line > 0.0);
        assert!((histogram - (line - signal)).abs() < 1e-10);
    }

    #[test]
    fn test_macd_signal_matches_prefix_recomputation() {
        let data: Vec<f64> = (0..40)
            .map(|i| 100.0 + (i as f64 * 0.3).sin() * 8.0)
            .collect();
        let snapshot = macd(&data, 12, 26, 9);

        // Recompute the line at every prefix length and take the
        // SMA(9) of that history.
        let mut history = Vec::new();
        for n in 26..=data.len() {
            let f = crate::ema(&data[..n], 12).unwrap();
            let s = crate::ema(&data[..n], 26).unwrap();
            history.push(f - s);
        }
        let expected_signal = sma(&history, 9).unwrap();

        assert!((snapshot.signal.unwrap() - expected_signal).abs() < 1e-10);
    }

    #[test]
    fn test_kdj_close_at_high() {
        let highs = vec![10.0, 11.0, 12.0, 13.0, 14.0];
        let lows = vec![8.0, 9.0, 10.0, 11.0, 12.0];
        let closes = vec![9.0, 10.0, 11.0, 12.0, 14.0];

        let snapshot = kdj(&highs, &lows, &closes, 5).unwrap();
        assert!((snapshot.k - 100.0).abs() < 1e-10);
        assert!((snapshot.d - snapshot.k).abs() < 1e-10);
        assert!((snapshot.j - snapshot.k).abs() < 1e-10);
    }

    #[test]
    fn test_kdj_zero_range_midpoints() {
        let flat = vec![100.0; 9];
        let snapshot = kdj(&flat, &flat, &flat, 9).unwrap();
        assert!((snapshot.k - 50.0).abs() < 1e-10);
    }

    #[test]
    fn test_kdj_insufficient_data() {
        let data = vec![1.0; 8];
        assert!(kdj(&data, &data, &data, 9).is_none());
    }
}
