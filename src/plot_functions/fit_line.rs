// src/plot_functions/fit_line.rs

use plotters::style::RGBColor;

use crate::constants::{FIT_LINE_SAMPLES, LINE_WIDTH_PLOT, LOG_FALLBACK_DATA_RANGE};
use crate::data_analysis::fit_engine::FitResult;
use crate::plot_framework::{LineSeriesSpec, LineStyle, PlotSurface};
use crate::plot_functions::axis_range::positive_extent;
use crate::types::{AxisRange, AxisScaleMode};

/// Sample positions spanning the visible x-range: evenly spaced on a linear
/// axis, geometrically spaced on a log axis. The last sample always lands on
/// the range end.
pub fn fit_line_x_samples(
    final_xlim: AxisRange,
    x_data: &[f64],
    x_is_log: bool,
) -> Vec<f64> {
    let n = FIT_LINE_SAMPLES;
    let (start, end) = final_xlim;

    if !x_is_log {
        let step = (end - start) / (n - 1) as f64;
        return (0..n).map(|i| start + step * i as f64).collect();
    }

    // A log axis needs a strictly positive span. A non-positive lower bound
    // is replaced while the displayed upper bound is kept; only a still
    // degenerate pair falls back to the data extent or a fixed default.
    let mut start = start;
    let mut end = end;
    if start <= 0.0 {
        start = match positive_extent(x_data) {
            Some((lo, _)) => lo,
            None => f64::EPSILON,
        };
    }
    if end <= start {
        (start, end) = match positive_extent(x_data) {
            Some((lo, hi)) if hi > lo => (lo, hi),
            _ => LOG_FALLBACK_DATA_RANGE,
        };
    }

    let log_start = start.ln();
    let log_step = (end.ln() - log_start) / (n - 1) as f64;
    let mut samples: Vec<f64> = (0..n).map(|i| (log_start + log_step * i as f64).exp()).collect();
    if let Some(last) = samples.last_mut() {
        *last = end;
    }
    samples
}

/// Evaluates a successful fit across the visible x-range and adds it to the
/// surface as a line series. Samples where the model is undefined, non-finite,
/// or non-positive under a log y-axis are dropped. Failed fits add nothing.
#[allow(clippy::too_many_arguments)]
pub fn render_fit_line(
    surface: &mut PlotSurface,
    final_xlim: AxisRange,
    x_data: &[f64],
    fit: &FitResult,
    mode: AxisScaleMode,
    style: LineStyle,
    color: RGBColor,
    legend_label: Option<String>,
) {
    if !fit.is_ok() {
        return;
    }

    let y_is_log = mode.y_is_log();
    let data: Vec<(f64, f64)> = fit_line_x_samples(final_xlim, x_data, mode.x_is_log())
        .into_iter()
        .filter_map(|x| {
            let y = fit.predict(x, mode)?;
            if !y.is_finite() || (y_is_log && y <= 0.0) {
                return None;
            }
            Some((x, y))
        })
        .collect();

    if data.is_empty() {
        return;
    }

    surface.add_line(LineSeriesSpec {
        data,
        label: legend_label.unwrap_or_default(),
        color,
        stroke_width: LINE_WIDTH_PLOT,
        style,
    });
}


// src/plot_functions/fit_line.rs
