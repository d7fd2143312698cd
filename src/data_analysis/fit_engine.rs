// src/data_analysis/fit_engine.rs

use ndarray::Array1;

use crate::data_analysis::linear_fit::least_squares;
use crate::types::AxisScaleMode;

/// Outcome of a curve fit under one axis-scale mode. When `error` is set all
/// other fields are in their failed state (None coefficients, NaN
/// uncertainties, empty equation strings).
#[derive(Debug, Clone)]
pub struct FitResult {
    /// Slope in the linearized space.
    pub slope: Option<f64>,
    /// Intercept in the linearized space.
    pub intercept: Option<f64>,
    /// Coefficient of determination, computed in the linearized space.
    pub r_squared: Option<f64>,
    /// Back-transformed amplitude: e^intercept for log-y and log-log modes,
    /// the intercept itself otherwise.
    pub a: Option<f64>,
    /// Back-transformed exponent or slope; equal to `slope` today but kept
    /// separate so the display layer never reaches into fit internals.
    pub b: Option<f64>,
    pub slope_uncertainty: f64,
    pub intercept_uncertainty: f64,
    pub a_uncertainty: f64,
    pub equation_text: String,
    pub equation_latex: String,
    pub error: Option<String>,
}

impl Default for FitResult {
    fn default() -> Self {
        FitResult {
            slope: None,
            intercept: None,
            r_squared: None,
            a: None,
            b: None,
            slope_uncertainty: f64::NAN,
            intercept_uncertainty: f64::NAN,
            a_uncertainty: f64::NAN,
            equation_text: String::new(),
            equation_latex: String::new(),
            error: None,
        }
    }
}

impl FitResult {
    pub fn failed(message: impl Into<String>) -> Self {
        FitResult {
            error: Some(message.into()),
            ..FitResult::default()
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Compact single-line form used as a legend entry.
    pub fn legend_label(&self, mode: AxisScaleMode) -> String {
        let (b, intercept, a) = match (self.b, self.intercept, self.a) {
            (Some(b), Some(i), a) => (b, i, a),
            _ => return String::new(),
        };
        match mode {
            AxisScaleMode::Linear => format!("y = {b:.3}x {intercept:+.3}"),
            AxisScaleMode::LogY => {
                format!("y = {} exp({b:.2}x)", sci(a.unwrap_or(f64::NAN), 2))
            }
            AxisScaleMode::LogX => format!("y = {b:.2} ln(x) {intercept:+.2}"),
            AxisScaleMode::LogLog => {
                format!("y = {} x^{b:.2}", sci(a.unwrap_or(f64::NAN), 2))
            }
        }
    }

    /// Evaluates the fitted curve at `x` in data space. None when the fit
    /// failed or the model is undefined at `x` (log of a non-positive value).
    pub fn predict(&self, x: f64, mode: AxisScaleMode) -> Option<f64> {
        let b = self.b?;
        let intercept = self.intercept?;
        match mode {
            AxisScaleMode::Linear => Some(b * x + intercept),
            AxisScaleMode::LogY => Some(self.a? * (b * x).exp()),
            AxisScaleMode::LogX => {
                if x > 0.0 {
                    Some(b * x.ln() + intercept)
                } else {
                    None
                }
            }
            AxisScaleMode::LogLog => {
                if x > 0.0 {
                    Some(self.a? * x.powf(b))
                } else {
                    None
                }
            }
        }
    }
}

/// Fits the model family selected by `mode`: points are transformed into the
/// space where the model is a straight line, fitted there, and the
/// coefficients are transformed back.
pub fn fit(x: &[f64], y: &[f64], mode: AxisScaleMode) -> FitResult {
    let (fx, fy): (Vec<f64>, Vec<f64>) = match mode {
        AxisScaleMode::Linear => (x.to_vec(), y.to_vec()),
        AxisScaleMode::LogY => {
            let kept: Vec<(f64, f64)> = x
                .iter()
                .zip(y.iter())
                .filter(|(_, &yv)| yv > 0.0)
                .map(|(&xv, &yv)| (xv, yv.ln()))
                .collect();
            if kept.is_empty() {
                return FitResult::failed(
                    "positive Y values are required for a log-scale Y fit",
                );
            }
            kept.into_iter().unzip()
        }
        AxisScaleMode::LogX => {
            let kept: Vec<(f64, f64)> = x
                .iter()
                .zip(y.iter())
                .filter(|(&xv, _)| xv > 0.0)
                .map(|(&xv, &yv)| (xv.ln(), yv))
                .collect();
            if kept.is_empty() {
                return FitResult::failed(
                    "positive X values are required for a log-scale X fit",
                );
            }
            kept.into_iter().unzip()
        }
        AxisScaleMode::LogLog => {
            let kept: Vec<(f64, f64)> = x
                .iter()
                .zip(y.iter())
                .filter(|(&xv, &yv)| xv > 0.0 && yv > 0.0)
                .map(|(&xv, &yv)| (xv.ln(), yv.ln()))
                .collect();
            if kept.is_empty() {
                return FitResult::failed(
                    "positive X and Y values are required for a log-log fit",
                );
            }
            kept.into_iter().unzip()
        }
    };

    let fx = Array1::from(fx);
    let fy = Array1::from(fy);
    let line = match least_squares(fx.view(), fy.view()) {
        Ok(line) => line,
        Err(e) => return FitResult::failed(e.to_string()),
    };

    let mut result = FitResult {
        slope: Some(line.slope),
        intercept: Some(line.intercept),
        r_squared: Some(line.r_squared),
        b: Some(line.slope),
        slope_uncertainty: line.slope_uncertainty,
        intercept_uncertainty: line.intercept_uncertainty,
        ..FitResult::default()
    };

    match mode {
        AxisScaleMode::Linear | AxisScaleMode::LogX => {
            result.a = Some(line.intercept);
            result.a_uncertainty = line.intercept_uncertainty;
        }
        AxisScaleMode::LogY | AxisScaleMode::LogLog => {
            let a = line.intercept.exp();
            result.a = Some(a);
            // First-order propagation through e^intercept.
            result.a_uncertainty = a * line.intercept_uncertainty;
        }
    }

    let (text, latex) = format_equations(&result, mode);
    result.equation_text = text;
    result.equation_latex = latex;
    result
}

struct PlusMinus {
    text: String,
    latex: String,
}

// The "±" part is omitted entirely when the uncertainty is undefined.
fn pm_fixed(err: f64, decimals: usize) -> PlusMinus {
    if !err.is_finite() {
        return PlusMinus {
            text: String::new(),
            latex: String::new(),
        };
    }
    PlusMinus {
        text: format!(" ± {err:.decimals$}"),
        latex: format!(" \\pm {err:.decimals$}"),
    }
}

fn pm_sci(err: f64, decimals: usize) -> PlusMinus {
    if !err.is_finite() {
        return PlusMinus {
            text: String::new(),
            latex: String::new(),
        };
    }
    PlusMinus {
        text: format!(" ± {}", sci(err, decimals)),
        latex: format!(" \\pm {}", sci(err, decimals)),
    }
}

fn sci(v: f64, decimals: usize) -> String {
    format!("{v:.decimals$e}")
}

fn format_equations(result: &FitResult, mode: AxisScaleMode) -> (String, String) {
    let b = result.b.unwrap_or(f64::NAN);
    let intercept = result.intercept.unwrap_or(f64::NAN);
    match mode {
        AxisScaleMode::Linear => {
            let db = pm_fixed(result.slope_uncertainty, 3);
            let di = pm_fixed(result.intercept_uncertainty, 3);
            (
                format!("y = ({b:.3}{})x + ({intercept:.3}{})", db.text, di.text),
                format!(
                    "$y = ({b:.3}{})x + ({intercept:.3}{})$",
                    db.latex, di.latex
                ),
            )
        }
        AxisScaleMode::LogY => {
            let a = result.a.unwrap_or(f64::NAN);
            let da = pm_sci(result.a_uncertainty, 1);
            let db = pm_fixed(result.slope_uncertainty, 2);
            (
                format!(
                    "y = ({}{}) exp(({b:.2}{})x)",
                    sci(a, 2),
                    da.text,
                    db.text
                ),
                format!(
                    "$y = ({}{}) e^{{({b:.2}{})x}}$",
                    sci(a, 2),
                    da.latex,
                    db.latex
                ),
            )
        }
        AxisScaleMode::LogX => {
            let db = pm_fixed(result.slope_uncertainty, 2);
            let di = pm_fixed(result.intercept_uncertainty, 2);
            (
                format!(
                    "y = ({b:.2}{}) ln(x) + ({intercept:.2}{})",
                    db.text, di.text
                ),
                format!(
                    "$y = ({b:.2}{}) \\ln(x) + ({intercept:.2}{})$",
                    db.latex, di.latex
                ),
            )
        }
        AxisScaleMode::LogLog => {
            let a = result.a.unwrap_or(f64::NAN);
            let da = pm_sci(result.a_uncertainty, 1);
            let db = pm_fixed(result.slope_uncertainty, 2);
            (
                format!(
                    "y = ({}{}) x^({b:.2}{})",
                    sci(a, 2),
                    da.text,
                    db.text
                ),
                format!(
                    "$y = ({}{}) x^{{({b:.2}{})}}$",
                    sci(a, 2),
                    da.latex,
                    db.latex
                ),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64, tol: f64) {
        assert!((a - b).abs() < tol, "{a} not within {tol} of {b}");
    }

    #[test]
    fn linear_fit_recovers_line() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let y = [3.0, 5.0, 7.0, 9.0];
        let fit = fit(&x, &y, AxisScaleMode::Linear);
        assert!(fit.is_ok());
        assert_close(fit.b.unwrap(), 2.0, 1e-12);
        assert_close(fit.intercept.unwrap(), 1.0, 1e-12);
        // Coefficients are present in every successful fit; A is just the
        // intercept outside the exponential modes.
        assert_close(fit.a.unwrap(), 1.0, 1e-12);
        assert_close(fit.a_uncertainty, fit.intercept_uncertainty, 1e-12);
        assert!(fit.equation_text.starts_with("y = (2.000"));
        assert!(fit.equation_latex.starts_with("$y = (2.000"));
    }

    #[test]
    fn log_y_fit_recovers_exponential() {
        // y = 2 e^{0.5 x}
        let x = [0.0, 1.0, 2.0, 3.0];
        let y: Vec<f64> = x.iter().map(|v: &f64| 2.0 * (0.5 * v).exp()).collect();
        let fit = fit(&x, &y, AxisScaleMode::LogY);
        assert!(fit.is_ok());
        assert_close(fit.b.unwrap(), 0.5, 1e-10);
        assert_close(fit.a.unwrap(), 2.0, 1e-10);
        assert_close(fit.r_squared.unwrap(), 1.0, 1e-12);
        assert!(fit.equation_text.contains("exp("));
    }

    #[test]
    fn log_log_fit_recovers_power_law() {
        // y = 3 x^{-2}
        let x = [1.0, 2.0, 4.0, 8.0];
        let y: Vec<f64> = x.iter().map(|v: &f64| 3.0 * v.powf(-2.0)).collect();
        let fit = fit(&x, &y, AxisScaleMode::LogLog);
        assert!(fit.is_ok());
        assert_close(fit.b.unwrap(), -2.0, 1e-10);
        assert_close(fit.a.unwrap(), 3.0, 1e-10);
    }

    #[test]
    fn log_x_fit_recovers_logarithmic_curve() {
        // y = 4 ln(x) + 1
        let x = [1.0, 2.0, 4.0, 10.0];
        let y: Vec<f64> = x.iter().map(|v: &f64| 4.0 * v.ln() + 1.0).collect();
        let fit = fit(&x, &y, AxisScaleMode::LogX);
        assert!(fit.is_ok());
        assert_close(fit.b.unwrap(), 4.0, 1e-10);
        assert_close(fit.intercept.unwrap(), 1.0, 1e-10);
        assert_close(fit.a.unwrap(), 1.0, 1e-10);
    }

    #[test]
    fn log_y_filters_non_positive_values_before_fitting() {
        let x = [0.0, 1.0, 2.0, 3.0];
        let y = [-1.0, 2.0, 4.0, 0.0];
        // Only the two positive-y points remain; the fit succeeds on them.
        let fit = fit(&x, &y, AxisScaleMode::LogY);
        assert!(fit.is_ok());
        assert_close(fit.b.unwrap(), 2.0f64.ln(), 1e-10);
    }

    #[test]
    fn log_y_without_any_positive_points_reports_positivity() {
        let x = [1.0, 2.0, 3.0];
        let y = [-1.0, 0.0, -5.0];
        let fit = fit(&x, &y, AxisScaleMode::LogY);
        assert!(!fit.is_ok());
        assert_eq!(
            fit.error.as_deref(),
            Some("positive Y values are required for a log-scale Y fit")
        );
        assert!(fit.slope.is_none());
        assert!(fit.equation_text.is_empty());
    }

    #[test]
    fn single_surviving_point_reports_too_few_points() {
        // One positive y is a count problem, not a positivity problem.
        let x = [1.0, 2.0, 3.0];
        let y = [-1.0, 0.0, 5.0];
        let fit = fit(&x, &y, AxisScaleMode::LogY);
        assert_eq!(
            fit.error.as_deref(),
            Some("insufficient data points (need at least 2)")
        );
    }

    #[test]
    fn log_log_failure_message_names_both_axes() {
        let fit = fit(&[-1.0, -2.0], &[1.0, 2.0], AxisScaleMode::LogLog);
        assert_eq!(
            fit.error.as_deref(),
            Some("positive X and Y values are required for a log-log fit")
        );
    }

    #[test]
    fn predict_is_undefined_left_of_zero_under_log_x() {
        let x = [1.0, 2.0, 4.0];
        let y: Vec<f64> = x.iter().map(|v: &f64| 2.0 * v.ln() + 1.0).collect();
        let fit = fit(&x, &y, AxisScaleMode::LogX);
        assert!(fit.predict(-1.0, AxisScaleMode::LogX).is_none());
        assert!(fit.predict(2.0, AxisScaleMode::LogX).is_some());
    }

    #[test]
    fn two_point_fit_omits_undefined_uncertainties() {
        let fit = fit(&[1.0, 2.0], &[3.0, 5.0], AxisScaleMode::Linear);
        assert!(fit.is_ok());
        assert_eq!(fit.equation_text, "y = (2.000)x + (1.000)");
        assert!(!fit.equation_latex.contains("\\pm"));
    }

    #[test]
    fn legend_label_matches_mode() {
        let x = [1.0, 2.0, 3.0];
        let y = [2.0, 4.0, 6.0];
        let linear = fit(&x, &y, AxisScaleMode::Linear);
        assert_eq!(linear.legend_label(AxisScaleMode::Linear), "y = 2.000x +0.000");

        let failed = FitResult::failed("nope");
        assert_eq!(failed.legend_label(AxisScaleMode::Linear), "");
    }
}

// src/data_analysis/fit_engine.rs
