//! Numeric helpers shared by the analyzers.
//!
//! All helpers are total: empty input and zero denominators map to 0 rather
//! than NaN, and no helper returns an infinity for finite input.
//!
//! Sums run over values divided by a power of two near the largest
//! magnitude. The division is exact, so ordinary inputs round exactly as
//! they would unscaled, while readings near `f64::MAX` can no longer
//! overflow an accumulator.

/// Power of two close to the largest magnitude in `values`; 1 when all are 0.
pub fn magnitude_scale(values: &[f64]) -> f64 {
    let max = values.iter().fold(0.0_f64, |acc, x| acc.max(x.abs()));
    if max == 0.0 || !max.is_finite() {
        return 1.0;
    }
    let exponent = (max.log2().floor() as i32).clamp(-1022, 1023);
    f64::from_bits(((exponent + 1023) as u64) << 52)
}

/// Clamp into the finite range; NaN becomes 0.
pub fn finite(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(f64::MIN, f64::MAX)
    }
}

/// Arithmetic mean; 0 for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let scale = magnitude_scale(values);
    let sum: f64 = values.iter().map(|x| x / scale).sum();
    finite(sum / values.len() as f64 * scale)
}

/// Population standard deviation around a precomputed mean.
pub fn population_std_dev(values: &[f64], mean: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let scale = magnitude_scale(values).max(magnitude_scale(&[mean]));
    let centre = mean / scale;
    let variance = values
        .iter()
        .map(|x| (x / scale - centre).powi(2))
        .sum::<f64>()
        / values.len() as f64;
    finite(variance.sqrt() * scale)
}

/// Distance of `value` from `mean` in standard deviations; 0 when `std_dev` is 0.
pub fn z_score(value: f64, mean: f64, std_dev: f64) -> f64 {
    if std_dev == 0.0 {
        return 0.0;
    }
    let scale = magnitude_scale(&[value, mean, std_dev]);
    finite((value / scale - mean / scale).abs() / (std_dev / scale))
}

/// Median of an ascending slice; mean of the two middle values for even lengths.
pub fn median_of_sorted(sorted: &[f64]) -> f64 {
    let n = sorted.len();
    if n == 0 {
        return 0.0;
    }
    if n % 2 == 0 {
        sorted[n / 2 - 1] / 2.0 + sorted[n / 2] / 2.0
    } else {
        sorted[n / 2]
    }
}

/// An ordinary least squares line `y = intercept + slope * x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearFit {
    /// Fitted value at `x`, clamped into the finite range.
    pub fn at(&self, x: f64) -> f64 {
        finite(self.intercept + self.slope * x)
    }
}

/// Fit `ys` against `xs` by ordinary least squares.
///
/// When every `x` is equal the normal-equation denominator
/// `n·Σx² − (Σx)²` is zero; the slope is then 0 and the line passes through
/// the mean of `ys`. Uses centered sums, which equal the textbook form
/// divided by `n` without its cancellation.
pub fn least_squares(xs: &[f64], ys: &[f64]) -> LinearFit {
    let n = xs.len().min(ys.len());
    if n == 0 {
        return LinearFit {
            slope: 0.0,
            intercept: 0.0,
        };
    }
    let (xs, ys) = (&xs[..n], &ys[..n]);
    let mean_x = mean(xs);
    let mean_y = mean(ys);

    let degenerate = xs.iter().all(|&x| x == xs[0]);
    let slope = if degenerate {
        0.0
    } else {
        let (scale_x, scale_y) = (magnitude_scale(xs), magnitude_scale(ys));
        let (centre_x, centre_y) = (mean_x / scale_x, mean_y / scale_y);
        let mut sxx = 0.0;
        let mut sxy = 0.0;
        for (x, y) in xs.iter().zip(ys) {
            let dx = x / scale_x - centre_x;
            sxx += dx * dx;
            sxy += dx * (y / scale_y - centre_y);
        }
        if sxx > 0.0 {
            finite(sxy / sxx * scale_y / scale_x)
        } else {
            0.0
        }
    };

    LinearFit {
        slope,
        intercept: finite(mean_y - slope * mean_x),
    }
}

/// Explained variance over total variance of `ys` against `fit`.
///
/// 0 when `ys` has no variance.
pub fn r_squared(xs: &[f64], ys: &[f64], fit: &LinearFit) -> f64 {
    let scale = magnitude_scale(ys);
    let centre = mean(ys) / scale;
    let total: f64 = ys.iter().map(|y| (y / scale - centre).powi(2)).sum();
    if total == 0.0 {
        return 0.0;
    }
    let explained: f64 = xs
        .iter()
        .map(|&x| (fit.at(x) / scale - centre).powi(2))
        .sum();
    let ratio = explained / total;
    if ratio.is_finite() {
        ratio.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Pearson correlation coefficient of two equal-length slices.
///
/// 0 when either side is constant.
pub fn pearson(xs: &[f64], ys: &[f64]) -> f64 {
    let n = xs.len().min(ys.len());
    if n == 0 {
        return 0.0;
    }
    let (xs, ys) = (&xs[..n], &ys[..n]);
    let (scale_x, scale_y) = (magnitude_scale(xs), magnitude_scale(ys));
    let mean_x = mean(xs) / scale_x;
    let mean_y = mean(ys) / scale_y;

    let mut sxy = 0.0;
    let mut sxx = 0.0;
    let mut syy = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        let dx = x / scale_x - mean_x;
        let dy = y / scale_y - mean_y;
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }

    let denominator = (sxx * syy).sqrt();
    if denominator == 0.0 || !denominator.is_finite() {
        return 0.0;
    }
    let r = sxy / denominator;
    if r.is_finite() {
        r.clamp(-1.0, 1.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_and_std_dev() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let m = mean(&values);
        assert!((m - 5.0).abs() < 1e-12);
        assert!((population_std_dev(&values, m) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_helpers_are_zero() {
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(population_std_dev(&[], 0.0), 0.0);
        assert_eq!(median_of_sorted(&[]), 0.0);
        assert_eq!(pearson(&[], &[]), 0.0);
        let fit = least_squares(&[], &[]);
        assert_eq!(fit.slope, 0.0);
        assert_eq!(fit.intercept, 0.0);
    }

    #[test]
    fn test_median_odd_and_even() {
        assert_eq!(median_of_sorted(&[1.0, 2.0, 3.0]), 2.0);
        assert_eq!(median_of_sorted(&[1.0, 2.0, 3.0, 4.0]), 2.5);
    }

    #[test]
    fn test_least_squares_exact_line() {
        let xs: Vec<f64> = (0..10).map(|i| i as f64).collect();
        let ys: Vec<f64> = xs.iter().map(|x| 10.0 + 2.0 * x).collect();
        let fit = least_squares(&xs, &ys);
        assert!((fit.slope - 2.0).abs() < 1e-10);
        assert!((fit.intercept - 10.0).abs() < 1e-10);
        assert!((r_squared(&xs, &ys, &fit) - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_least_squares_degenerate_x() {
        let fit = least_squares(&[3.0, 3.0, 3.0], &[1.0, 2.0, 6.0]);
        assert_eq!(fit.slope, 0.0);
        assert!((fit.intercept - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_r_squared_constant_y_is_zero() {
        let xs = [0.0, 1.0, 2.0];
        let ys = [4.0, 4.0, 4.0];
        let fit = least_squares(&xs, &ys);
        assert_eq!(r_squared(&xs, &ys, &fit), 0.0);
    }

    #[test]
    fn test_pearson_perfect_and_inverse() {
        let xs = [1.0, 2.0, 3.0, 4.0, 5.0];
        let ys = [2.0, 4.0, 6.0, 8.0, 10.0];
        let inverse = [10.0, 8.0, 6.0, 4.0, 2.0];
        assert!((pearson(&xs, &ys) - 1.0).abs() < 1e-12);
        assert!((pearson(&xs, &inverse) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_magnitude_scale_is_power_of_two() {
        assert_eq!(magnitude_scale(&[]), 1.0);
        assert_eq!(magnitude_scale(&[0.0, -0.0]), 1.0);
        assert_eq!(magnitude_scale(&[3.0, -5.0]), 4.0);
        assert_eq!(magnitude_scale(&[f64::MAX]), 2f64.powi(1023));
    }

    #[test]
    fn test_finite_clamps() {
        assert_eq!(finite(f64::NAN), 0.0);
        assert_eq!(finite(f64::INFINITY), f64::MAX);
        assert_eq!(finite(f64::NEG_INFINITY), f64::MIN);
        assert_eq!(finite(-2.5), -2.5);
    }

    #[test]
    fn test_huge_values_do_not_overflow() {
        let values = [1e308, 1e308, -1e308, 1.7e308, 0.0, 1e308, 1e308];
        let m = mean(&values);
        let std_dev = population_std_dev(&values, m);
        assert!(m.is_finite() && m > 0.0);
        assert!(std_dev.is_finite() && std_dev > 0.0);
        assert!(median_of_sorted(&[1.7e308, 1.7e308]).is_finite());
        assert!(z_score(1.7e308, -1.7e308, 1.0).is_finite());

        let all_max = [f64::MAX; 3];
        assert_eq!(mean(&all_max), f64::MAX);
        assert_eq!(population_std_dev(&all_max, f64::MAX), 0.0);

        let xs: Vec<f64> = (0..values.len()).map(|i| i as f64).collect();
        let fit = least_squares(&xs, &values);
        assert!(fit.slope.is_finite());
        assert!(fit.intercept.is_finite());
        let r2 = r_squared(&xs, &values, &fit);
        assert!((0.0..=1.0).contains(&r2));
        assert!(pearson(&xs, &values).abs() <= 1.0);
    }

    #[test]
    fn test_scaled_mean_matches_plain_sum() {
        let values = [0.1, 0.2, 0.3, 1e-3, 17.25];
        let plain = values.iter().sum::<f64>() / values.len() as f64;
        assert_eq!(mean(&values), plain);
    }

    #[test]
    fn test_z_score() {
        assert_eq!(z_score(5.0, 5.0, 0.0), 0.0);
        assert_eq!(z_score(100.0, 19.0, 27.0), 3.0);
        assert_eq!(z_score(10.0, 19.0, 27.0), 9.0 / 27.0);
    }

    #[test]
    fn test_pearson_constant_side_is_zero() {
        assert_eq!(pearson(&[1.0, 2.0, 3.0], &[5.0, 5.0, 5.0]), 0.0);
    }
}
