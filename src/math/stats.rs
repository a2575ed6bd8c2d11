//! Scalar statistics shared by the fitter and forecaster.

/// Arithmetic mean; 0 for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation (divide by n, not n-1); 0 for an empty slice.
pub fn population_std(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    let var = values.iter().map(|v| (v - m) * (v - m)).sum::<f64>() / values.len() as f64;
    var.sqrt()
}

/// Trailing rolling mean with a minimum period of 1.
///
/// Early positions average over however many values are available, so the
/// output has the same length as the input. `window` is clamped to ≥ 1.
pub fn rolling_mean(values: &[f64], window: usize) -> Vec<f64> {
    let window = window.max(1);
    let mut out = Vec::with_capacity(values.len());
    for i in 0..values.len() {
        let start = (i + 1).saturating_sub(window);
        out.push(mean(&values[start..=i]));
    }
    out
}

/// Mean of consecutive differences; 0 when fewer than 2 values.
pub fn mean_diff(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let diffs: Vec<f64> = values.windows(2).map(|w| w[1] - w[0]).collect();
    mean(&diffs)
}

/// Round to 2 decimal places, matching the response wire format.
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn population_std_divides_by_n() {
        // Values [2, 4]: mean 3, population variance ((1 + 1) / 2) = 1.
        let std = population_std(&[2.0, 4.0]);
        assert!((std - 1.0).abs() < 1e-12);
    }

    #[test]
    fn std_of_constant_series_is_zero() {
        assert_eq!(population_std(&[7.0; 10]), 0.0);
    }

    #[test]
    fn rolling_mean_respects_min_period() {
        let out = rolling_mean(&[1.0, 2.0, 3.0, 4.0], 3);
        assert!((out[0] - 1.0).abs() < 1e-12);
        assert!((out[1] - 1.5).abs() < 1e-12);
        assert!((out[2] - 2.0).abs() < 1e-12);
        assert!((out[3] - 3.0).abs() < 1e-12);
    }

    #[test]
    fn mean_diff_of_linear_series_is_step() {
        assert!((mean_diff(&[1.0, 3.0, 5.0]) - 2.0).abs() < 1e-12);
        assert_eq!(mean_diff(&[1.0]), 0.0);
    }

    #[test]
    fn round2_matches_wire_precision() {
        assert_eq!(round2(1.005), 1.0); // floating repr of 1.005 is just below
        assert_eq!(round2(2.675_001), 2.68);
        assert_eq!(round2(10.0), 10.0);
    }
}
