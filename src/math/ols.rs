//! Least squares solver for the linear trend.
//!
//! The trend model is first-order:
//!
//! ```text
//! minimize Σ (y_i - (β0 + β1 * i))^2
//! ```
//!
//! over the day-index sequence `i = 0..n-1`.
//!
//! Implementation choices:
//! - We build the tall `[1, i]` design matrix and solve via SVD, which stays
//!   robust even for short or flat series. (Nalgebra's `QR::solve` is intended
//!   for square systems and will panic for non-square matrices.)
//! - The parameter dimension is 2, so SVD cost is negligible for series up to
//!   a year or two of daily data.

use nalgebra::{DMatrix, DVector};

/// Solve a least squares problem using SVD.
///
/// Returns `None` if the system is too ill-conditioned to solve robustly.
pub fn solve_least_squares(x: &DMatrix<f64>, y: &DVector<f64>) -> Option<DVector<f64>> {
    let svd = x.clone().svd(true, true);

    // Try progressively looser tolerances if strict solve fails.
    for &tol in &[1e-10, 1e-8, 1e-6] {
        if let Ok(beta) = svd.solve(y, tol) {
            if beta.iter().all(|v| v.is_finite()) {
                return Some(beta);
            }
        }
    }

    None
}

/// Fit `y ≈ slope * i + intercept` over `i = 0..n-1`.
///
/// Returns `None` for n < 2 or an ill-conditioned system.
pub fn fit_linear_trend(y: &[f64]) -> Option<(f64, f64)> {
    let n = y.len();
    if n < 2 {
        return None;
    }

    let x = DMatrix::from_fn(n, 2, |r, c| if c == 0 { 1.0 } else { r as f64 });
    let y = DVector::from_row_slice(y);

    let beta = solve_least_squares(&x, &y)?;
    Some((beta[1], beta[0]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn least_squares_solves_simple_system() {
        // Fit y = 2 + 3x on x = [0,1,2]
        let x = DMatrix::from_row_slice(3, 2, &[1.0, 0.0, 1.0, 1.0, 1.0, 2.0]);
        let y = DVector::from_row_slice(&[2.0, 5.0, 8.0]);

        let beta = solve_least_squares(&x, &y).unwrap();
        assert!((beta[0] - 2.0).abs() < 1e-10);
        assert!((beta[1] - 3.0).abs() < 1e-10);
    }

    #[test]
    fn trend_recovers_exact_line() {
        let y: Vec<f64> = (0..10).map(|i| 4.0 + 1.5 * i as f64).collect();
        let (slope, intercept) = fit_linear_trend(&y).unwrap();
        assert!((slope - 1.5).abs() < 1e-9);
        assert!((intercept - 4.0).abs() < 1e-9);
    }

    #[test]
    fn trend_on_flat_series_is_zero_slope() {
        let y = vec![10.0; 14];
        let (slope, intercept) = fit_linear_trend(&y).unwrap();
        assert!(slope.abs() < 1e-9);
        assert!((intercept - 10.0).abs() < 1e-9);
    }

    #[test]
    fn trend_rejects_single_point() {
        assert!(fit_linear_trend(&[5.0]).is_none());
    }
}
