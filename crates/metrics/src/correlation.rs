//! Pearson correlation between two numeric series.

use statrs::statistics::Statistics;

/// Pearson correlation coefficient between two equal-length series.
///
/// Returns `None` when the coefficient is undefined: fewer than two points,
/// mismatched lengths, or either series constant. The undefined case is
/// surfaced as the absence of a value, never as NaN.
pub fn pearson(xs: &[f64], ys: &[f64]) -> Option<f64> {
    if xs.len() != ys.len() || xs.len() < 2 {
        return None;
    }

    let mean_x = xs.mean();
    let mean_y = ys.mean();
    let std_x = xs.std_dev();
    let std_y = ys.std_dev();

    if std_x <= 0.0 || std_y <= 0.0 {
        return None;
    }

    // Sample covariance, matching the sample standard deviations above.
    let n = xs.len() as f64;
    let cov = xs
        .iter()
        .zip(ys)
        .map(|(x, y)| (x - mean_x) * (y - mean_y))
        .sum::<f64>()
        / (n - 1.0);

    let r = cov / (std_x * std_y);
    Some(r.clamp(-1.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_perfect_positive() {
        let xs = [1.0, 2.0, 3.0, 4.0];
        let ys = [2.0, 4.0, 6.0, 8.0];
        assert_relative_eq!(pearson(&xs, &ys).unwrap(), 1.0);
    }

    #[test]
    fn test_perfect_negative() {
        let xs = [1.0, 2.0, 3.0];
        let ys = [6.0, 4.0, 2.0];
        assert_relative_eq!(pearson(&xs, &ys).unwrap(), -1.0);
    }

    #[test]
    fn test_known_value() {
        // Hand-computed: cov sum 8, Sxx = Syy = 10, r = 8/10.
        let xs = [1.0, 2.0, 3.0, 4.0, 5.0];
        let ys = [2.0, 1.0, 4.0, 3.0, 5.0];
        let r = pearson(&xs, &ys).unwrap();
        assert_relative_eq!(r, 0.8, epsilon = 1e-10);
    }

    #[test]
    fn test_too_few_points() {
        assert_eq!(pearson(&[1.0], &[2.0]), None);
        assert_eq!(pearson(&[], &[]), None);
    }

    #[test]
    fn test_constant_column_undefined() {
        let xs = [3.0, 3.0, 3.0];
        let ys = [1.0, 2.0, 3.0];
        assert_eq!(pearson(&xs, &ys), None);
        assert_eq!(pearson(&ys, &xs), None);
    }

    #[test]
    fn test_mismatched_lengths() {
        assert_eq!(pearson(&[1.0, 2.0], &[1.0, 2.0, 3.0]), None);
    }

    #[test]
    fn test_never_nan() {
        let xs = [5.0, 5.0];
        let ys = [5.0, 5.0];
        // Both constant: undefined, not NaN.
        assert_eq!(pearson(&xs, &ys), None);
    }
}
