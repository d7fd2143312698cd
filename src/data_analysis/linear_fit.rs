// src/data_analysis/linear_fit.rs

use ndarray::ArrayView1;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegressionError {
    #[error("insufficient data points (need at least 2)")]
    TooFewPoints,
    #[error("invalid values in input")]
    NonFinite,
}

/// Ordinary least-squares line with standard-error style uncertainties.
/// Uncertainties are NaN when undefined (n <= 2, or all x identical).
#[derive(Debug, Clone, Copy)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
    pub r_squared: f64,
    pub slope_uncertainty: f64,
    pub intercept_uncertainty: f64,
}

/// Fits y = slope*x + intercept by minimizing the sum of squared residuals.
/// R^2 is 1 - SS_res/SS_tot over the supplied values, so callers passing
/// log-transformed data get a transformed-space R^2.
pub fn least_squares(
    x: ArrayView1<f64>,
    y: ArrayView1<f64>,
) -> Result<LinearFit, RegressionError> {
    let n = x.len();
    if n < 2 || y.len() != n {
        return Err(RegressionError::TooFewPoints);
    }
    if x.iter().chain(y.iter()).any(|v| !v.is_finite()) {
        return Err(RegressionError::NonFinite);
    }

    let x_mean = x.mean().unwrap_or(0.0);
    let y_mean = y.mean().unwrap_or(0.0);

    let mut sxx = 0.0;
    let mut sxy = 0.0;
    for (&xv, &yv) in x.iter().zip(y.iter()) {
        let dx = xv - x_mean;
        sxx += dx * dx;
        sxy += dx * (yv - y_mean);
    }

    // All x identical: the flat line through the mean minimizes the
    // residuals; its uncertainties are undefined.
    let slope = if sxx > 0.0 { sxy / sxx } else { 0.0 };
    let intercept = y_mean - slope * x_mean;

    let mut ss_res = 0.0;
    let mut ss_tot = 0.0;
    for (&xv, &yv) in x.iter().zip(y.iter()) {
        let r = yv - (slope * xv + intercept);
        ss_res += r * r;
        let d = yv - y_mean;
        ss_tot += d * d;
    }
    let r_squared = if ss_tot > 0.0 {
        1.0 - ss_res / ss_tot
    } else if ss_res < f64::EPSILON {
        // Constant y hit exactly.
        1.0
    } else {
        0.0
    };

    // Residual standard error with n-2 degrees of freedom.
    let (slope_uncertainty, intercept_uncertainty) = if n > 2 && sxx > 0.0 {
        let sigma = (ss_res / (n - 2) as f64).sqrt();
        (
            sigma / sxx.sqrt(),
            sigma * (1.0 / n as f64 + x_mean * x_mean / sxx).sqrt(),
        )
    } else {
        (f64::NAN, f64::NAN)
    };

    Ok(LinearFit {
        slope,
        intercept,
        r_squared,
        slope_uncertainty,
        intercept_uncertainty,
    })
}


// src/data_analysis/linear_fit.rs
