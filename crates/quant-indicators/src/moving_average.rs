//! Moving average primitives.

/// Simple Moving Average over the last `period` values.
///
/// Returns `None` when fewer than `period` points are available.
pub fn sma(data: &[f64], period: usize) -> Option<f64> {
    if period == 0 || data.len() < period {
        return None;
    }
    let sum: f64 = data[data.len() - period..].iter().sum();
    Some(sum / period as f64)
}

/// Exponential Moving Average as of the last value.
///
/// Seeded with the SMA of the first `period` values, then updated with
/// multiplier `2 / (period + 1)`. Returns `None` when fewer than
/// `period` points are available.
pub fn ema(data: &[f64], period: usize) -> Option<f64> {
    ema_series(data, period).last().copied()
}

/// EMA recomputed at every prefix length from `period` to `data.len()`.
///
/// `result[i]` is the EMA of `data[..period + i]`; since the EMA
/// recurrence only appends, the whole family costs a single pass.
/// MACD uses this to price its signal line without quadratic prefix
/// recomputation.
pub fn ema_series(data: &[f64], period: usize) -> Vec<f64> {
    if period == 0 || data.len() < period {
        return vec![];
    }

    let multiplier = 2.0 / (period as f64 + 1.0);
    let mut result = Vec::with_capacity(data.len() - period + 1);

    // Initial SMA
    let sma: f64 = data[..period].iter().sum::<f64>() / period as f64;
    result.push(sma);

    let mut ema = sma;
    for &price in &data[period..] {
        ema = (price - ema) * multiplier + ema;
        result.push(ema);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sma() {
        let data = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        // Mean of the last 3 values: (3+4+5)/3
        assert!((sma(&data, 3).unwrap() - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_sma_exact_length_is_full_mean() {
        let data = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        assert!((sma(&data, 5).unwrap() - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_sma_insufficient_data() {
        assert!(sma(&[1.0, 2.0, 3.0], 5).is_none());
        assert!(sma(&[], 1).is_none());
    }

    #[test]
    fn test_ema() {
        let data = vec![1.0, 2.0, 3.0, 4.0];
        // Seed SMA of [1,2,3] = 2, multiplier = 0.5
        // ema = (4 - 2) * 0.5 + 2 = 3
        assert!((ema(&data, 3).unwrap() - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_ema_insufficient_data() {
        assert!(ema(&[1.0, 2.0], 3).is_none());
    }

    #[test]
    fn test_ema_series_matches_prefix_recomputation() {
        let data = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
        let series = ema_series(&data, 3);

        assert_eq!(series.len(), 5);
        for (i, &value) in series.iter().enumerate() {
            let fresh = ema(&data[..3 + i], 3).unwrap();
            assert!((value - fresh).abs() < 1e-10);
        }
    }

    #[test]
    fn test_flat_series_averages_equal_price() {
        let data = vec![100.0; 30];
        assert!((sma(&data, 20).unwrap() - 100.0).abs() < 1e-10);
        assert!((ema(&data, 12).unwrap() - 100.0).abs() < 1e-10);
    }
}
