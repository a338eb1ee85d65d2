//! Maximum drawdown.

/// Maximum peak-to-trough drawdown and its duration.
///
/// Tracks a running peak; a price above the peak resets it and zeroes
/// the day counter, otherwise the drawdown from the peak is compared
/// against the running maximum. The reported duration is the index
/// distance from peak to trough at the moment the maximum was
/// recorded, frozen there rather than extended by later bars.
///
/// Returns `(drawdown_pct, duration_days)`; the drawdown is always
/// non-negative and zero for a non-decreasing series.
pub fn max_drawdown(prices: &[f64]) -> (f64, usize) {
    if prices.is_empty() {
        return (0.0, 0);
    }

    let mut max_dd = 0.0;
    let mut max_dd_duration = 0;
    let mut peak = prices[0];
    let mut peak_idx = 0;

    for (i, &price) in prices.iter().enumerate() {
        if price > peak {
            peak = price;
            peak_idx = i;
        } else {
            let dd = if peak > 0.0 {
                (peak - price) / peak * 100.0
            } else {
                0.0
            };
            if dd > max_dd {
                max_dd = dd;
                max_dd_duration = i - peak_idx;
            }
        }
    }

    (max_dd, max_dd_duration)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monotonic_series_has_zero_drawdown() {
        let prices: Vec<f64> = (0..20).map(|i| 100.0 + i as f64).collect();
        let (dd, duration) = max_drawdown(&prices);
        assert_eq!(dd, 0.0);
        assert_eq!(duration, 0);
    }

    #[test]
    fn test_simple_drawdown() {
        // Peak 110 at index 1, trough 88 at index 3: 20%
        let prices = vec![100.0, 110.0, 99.0, 88.0, 95.0];
        let (dd, duration) = max_drawdown(&prices);
        assert!((dd - 20.0).abs() < 1e-10);
        assert_eq!(duration, 2);
    }

    #[test]
    fn test_duration_frozen_at_trough() {
        // Deepest point is index 2; the partial recovery afterwards
        // stays above it, so the duration stays at 2.
        let prices = vec![100.0, 90.0, 80.0, 85.0, 84.0];
        let (dd, duration) = max_drawdown(&prices);
        assert!((dd - 20.0).abs() < 1e-10);
        assert_eq!(duration, 2);
    }

    #[test]
    fn test_new_peak_resets_measurement() {
        // Recovery to a new peak at index 3, then a fresh 10% dip.
        let prices = vec![100.0, 95.0, 100.0, 120.0, 108.0];
        let (dd, duration) = max_drawdown(&prices);
        assert!((dd - 10.0).abs() < 1e-10);
        assert_eq!(duration, 1);
    }

    #[test]
    fn test_zero_peak_contributes_nothing() {
        let prices = vec![0.0, 0.0, 0.0];
        assert_eq!(max_drawdown(&prices), (0.0, 0));
    }

    #[test]
    fn test_empty_series() {
        assert_eq!(max_drawdown(&[]), (0.0, 0));
    }
}
