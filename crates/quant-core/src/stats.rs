//! Shared statistics helpers.

/// Arithmetic mean. Returns 0.0 for an empty slice.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    data.iter().sum::<f64>() / data.len() as f64
}

/// Sample standard deviation (n - 1 denominator).
///
/// Returns 0.0 when fewer than two points are available.
pub fn sample_std(data: &[f64]) -> f64 {
    if data.len() < 2 {
        return 0.0;
    }
    let m = mean(data);
    let variance = data.iter().map(|x| (x - m).powi(2)).sum::<f64>() / (data.len() - 1) as f64;
    variance.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean() {
        assert!((mean(&[1.0, 2.0, 3.0]) - 2.0).abs() < 1e-10);
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn test_sample_std() {
        // [2, 4, 6]: mean = 4, variance = (4 + 0 + 4) / 2 = 4
        assert!((sample_std(&[2.0, 4.0, 6.0]) - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_sample_std_degenerate() {
        assert_eq!(sample_std(&[]), 0.0);
        assert_eq!(sample_std(&[5.0]), 0.0);
        assert_eq!(sample_std(&[3.0, 3.0, 3.0]), 0.0);
    }
}
