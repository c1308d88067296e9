/// Point estimate for a salary range.
///
/// A one-sided range is skewed by 20% towards where the missing bound would
/// be: `lower * 1.2` or `upper * 0.8`. Bounds of zero or below count as
/// missing: platforms use `0` for "not specified", and a negative bound
/// would produce a negative salary.
pub fn estimate(lower: Option<f64>, upper: Option<f64>) -> Option<f64> {
    let lower = lower.filter(|bound| *bound > 0.0);
    let upper = upper.filter(|bound| *bound > 0.0);
    match (lower, upper) {
        (Some(lower), Some(upper)) => Some((lower + upper) / 2.0),
        (Some(lower), None) => Some(lower * 1.2),
        (None, Some(upper)) => Some(upper * 0.8),
        (None, None) => None,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn assert_close(actual: Option<f64>, expected: f64) {
        let actual = actual.expect("Expected an estimate");
        assert!(
            (actual - expected).abs() < 1e-6,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_both_bounds_use_mean() {
        assert_close(estimate(Some(100_000.0), Some(150_000.0)), 125_000.0);
        assert_close(estimate(Some(50.0), Some(50.0)), 50.0);
    }

    #[test]
    fn test_single_bound_is_skewed() {
        assert_close(estimate(Some(100.0), None), 120.0);
        assert_close(estimate(None, Some(100.0)), 80.0);
    }

    #[test]
    fn test_no_bounds() {
        assert_eq!(estimate(None, None), None);
    }

    #[test]
    fn test_zero_bound_counts_as_missing() {
        assert_close(estimate(Some(0.0), Some(100.0)), 80.0);
        assert_close(estimate(Some(100.0), Some(0.0)), 120.0);
        assert_eq!(estimate(Some(0.0), Some(0.0)), None);
    }

    #[test]
    fn test_negative_bound_counts_as_missing() {
        assert_close(estimate(Some(-100.0), Some(100.0)), 80.0);
        assert_close(estimate(Some(100.0), Some(-5.0)), 120.0);
        assert_eq!(estimate(Some(-1.0), None), None);
    }
}
