// src/plot_functions/plot_chart.rs

use log::warn;
use ndarray::Array1;

use std::error::Error;
use std::path::Path;

use crate::constants::{COLOR_DATA_POINTS, COLOR_FIT_PRIMARY, COLOR_FIT_SECONDARY};
use crate::data_analysis::fit_engine::{fit, FitResult};
use crate::data_input::dataset::Dataset;
use crate::plot_framework::{LineStyle, PlotSurface, PointSeriesSpec};
use crate::plot_functions::axis_range::{auto_axis_ranges, resolve_axis_ranges};
use crate::plot_functions::fit_line::render_fit_line;
use crate::settings::GraphSettings;
use crate::types::AxisRange;

/// Everything a caller needs to report on a finished chart besides the
/// drawable surface itself.
#[derive(Debug, Clone)]
pub struct ChartReport {
    pub primary_fit: Option<FitResult>,
    pub secondary_fit: Option<FitResult>,
    pub final_xlim: AxisRange,
    pub final_ylim: AxisRange,
}

/// Vertical error per point, when error bars are requested: the explicit
/// third column if the input had one, otherwise the standard error of the
/// mean of y applied uniformly. None when errors cannot be computed.
fn error_bar_values(dataset: &Dataset, settings: &GraphSettings) -> Option<Vec<f64>> {
    if !settings.show_error_bars {
        return None;
    }
    if let Some(errors) = &dataset.y_error {
        return Some(errors.clone());
    }
    let n = dataset.len();
    if n < 2 {
        return None;
    }
    let se = Array1::from(dataset.y.clone()).std(1.0) / (n as f64).sqrt();
    Some(vec![se; n])
}

/// Points restricted to the second fit's x-interval. A missing bound leaves
/// that side unbounded.
fn restrict_fit_range(
    x: &[f64],
    y: &[f64],
    min: Option<f64>,
    max: Option<f64>,
) -> (Vec<f64>, Vec<f64>) {
    let lo = min.unwrap_or(f64::NEG_INFINITY);
    let hi = max.unwrap_or(f64::INFINITY);
    x.iter()
        .zip(y.iter())
        .filter(|(&xv, _)| xv >= lo && xv <= hi)
        .map(|(&xv, &yv)| (xv, yv))
        .unzip()
}

/// Assembles the chart: resolved axis ranges, the data series, and any
/// requested fit lines. Fit failures are logged and skipped so the data
/// still renders.
pub fn build_chart(dataset: &Dataset, settings: &GraphSettings) -> (PlotSurface, ChartReport) {
    let mode = settings.plot_type;
    let (auto_xlim, auto_ylim) = auto_axis_ranges(&dataset.x, &dataset.y, mode);
    let (final_xlim, final_ylim) = resolve_axis_ranges(
        auto_xlim,
        auto_ylim,
        mode,
        settings,
        &dataset.x,
        &dataset.y,
    );

    let mut surface = PlotSurface::new(settings);
    surface.x_range = Some(final_xlim);
    surface.y_range = Some(final_ylim);

    // Points a log axis cannot place are dropped from the display only; the
    // numeric dataset is left intact for fitting.
    let errors = error_bar_values(dataset, settings);
    let mut data = Vec::with_capacity(dataset.len());
    let mut kept_errors = errors.as_ref().map(|_| Vec::with_capacity(dataset.len()));
    for (i, (&xv, &yv)) in dataset.x.iter().zip(dataset.y.iter()).enumerate() {
        if (mode.x_is_log() && xv <= 0.0) || (mode.y_is_log() && yv <= 0.0) {
            continue;
        }
        data.push((xv, yv));
        if let (Some(kept), Some(all)) = (kept_errors.as_mut(), errors.as_ref()) {
            kept.push(all[i]);
        }
    }
    surface.add_points(PointSeriesSpec {
        data,
        y_error: kept_errors,
        label: settings.data_legend_label.clone(),
        color: *COLOR_DATA_POINTS,
    });

    let mut report = ChartReport {
        primary_fit: None,
        secondary_fit: None,
        final_xlim,
        final_ylim,
    };

    if settings.show_fitting {
        let result = fit(&dataset.x, &dataset.y, mode);
        if let Some(message) = &result.error {
            warn!("fit skipped: {message}");
        } else {
            render_fit_line(
                &mut surface,
                final_xlim,
                &dataset.x,
                &result,
                mode,
                LineStyle::Solid,
                *COLOR_FIT_PRIMARY,
                Some(result.legend_label(mode)),
            );
        }
        report.primary_fit = Some(result);
    }

    if settings.show_fitting_2 {
        let (rx, ry) = restrict_fit_range(
            &dataset.x,
            &dataset.y,
            settings.fit_range_x_min,
            settings.fit_range_x_max,
        );
        let result = fit(&rx, &ry, mode);
        if let Some(message) = &result.error {
            warn!("range fit skipped: {message}");
        } else {
            render_fit_line(
                &mut surface,
                final_xlim,
                &rx,
                &result,
                mode,
                LineStyle::Dashed,
                *COLOR_FIT_SECONDARY,
                Some(format!("{} (range)", result.legend_label(mode))),
            );
        }
        report.secondary_fit = Some(result);
    }

    (surface, report)
}

/// Builds the chart and writes both export formats.
pub fn render_chart(
    dataset: &Dataset,
    settings: &GraphSettings,
    png_path: &Path,
    svg_path: &Path,
) -> Result<ChartReport, Box<dyn Error>> {
    let (surface, report) = build_chart(dataset, settings);
    surface.render_png(png_path)?;
    surface.render_svg(svg_path)?;
    Ok(report)
}


// src/plot_functions/plot_chart.rs
