// src/plot_framework.rs

use plotters::coord::Shift;
use plotters::element::ErrorBar;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;

use std::error::Error;
use std::path::Path;

use crate::constants::{
    DATA_POINT_SIZE, ERROR_BAR_WIDTH, FONT_SIZE_TICK_LABEL, LINE_WIDTH_LEGEND, PLOT_HEIGHT,
    PLOT_WIDTH, RANGE_PADDING_DEGENERATE, RANGE_PADDING_FRACTION, RASTER_SCALE,
};
use crate::settings::GraphSettings;
use crate::types::{AxisRange, AxisScaleMode};

/// Calculate plot range with padding.
/// Adds 15% padding, or a fixed padding for near-zero spans.
pub fn calculate_range(min_val: f64, max_val: f64) -> (f64, f64) {
    let (min, max) = if min_val <= max_val {
        (min_val, max_val)
    } else {
        (max_val, min_val)
    };
    let span = max - min;
    let padding = if span < 1e-6 {
        RANGE_PADDING_DEGENERATE
    } else {
        span * RANGE_PADDING_FRACTION
    };
    (min - padding, max + padding)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Solid,
    Dashed,
}

#[derive(Clone)]
pub struct LineSeriesSpec {
    pub data: Vec<(f64, f64)>,
    pub label: String,
    pub color: RGBColor,
    pub stroke_width: u32,
    pub style: LineStyle,
}

#[derive(Clone)]
pub struct PointSeriesSpec {
    pub data: Vec<(f64, f64)>,
    /// Symmetric vertical error per point; same length as `data` when present.
    pub y_error: Option<Vec<f64>>,
    pub label: String,
    pub color: RGBColor,
}

/// Backend-independent description of one chart. Built up by the plotting
/// layer and rendered identically to raster and vector targets.
pub struct PlotSurface {
    pub scale: AxisScaleMode,
    pub x_label: String,
    pub y_label: String,
    /// Resolved display limits. Rendering fails if these are unset.
    pub x_range: Option<AxisRange>,
    pub y_range: Option<AxisRange>,
    pub points: Vec<PointSeriesSpec>,
    pub lines: Vec<LineSeriesSpec>,
    pub show_legend: bool,
    pub axis_label_fontsize: u32,
    pub legend_fontsize: u32,
    pub tick_length: u32,
}

impl PlotSurface {
    pub fn new(settings: &GraphSettings) -> Self {
        PlotSurface {
            scale: settings.plot_type,
            x_label: settings.x_label.clone(),
            y_label: settings.y_label.clone(),
            x_range: None,
            y_range: None,
            points: Vec::new(),
            lines: Vec::new(),
            show_legend: settings.show_legend,
            axis_label_fontsize: settings.axis_label_fontsize,
            legend_fontsize: settings.legend_fontsize,
            tick_length: settings.tick_length,
        }
    }

    pub fn add_points(&mut self, series: PointSeriesSpec) {
        self.points.push(series);
    }

    pub fn add_line(&mut self, series: LineSeriesSpec) {
        self.lines.push(series);
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Raster export at RASTER_SCALE times the base size, with all fonts and
    /// strokes scaled to match.
    pub fn render_png(&self, path: &Path) -> Result<(), Box<dyn Error>> {
        let sf = RASTER_SCALE;
        let root =
            BitMapBackend::new(path, (PLOT_WIDTH * sf, PLOT_HEIGHT * sf)).into_drawing_area();
        self.draw_on(&root, sf)?;
        root.present()?;
        Ok(())
    }

    /// Vector export at the base size.
    pub fn render_svg(&self, path: &Path) -> Result<(), Box<dyn Error>> {
        let root = SVGBackend::new(path, (PLOT_WIDTH, PLOT_HEIGHT)).into_drawing_area();
        self.draw_on(&root, 1)?;
        root.present()?;
        Ok(())
    }

    fn draw_on<DB: DrawingBackend>(
        &self,
        root: &DrawingArea<DB, Shift>,
        sf: u32,
    ) -> Result<(), Box<dyn Error>>
    where
        DB::ErrorType: 'static,
    {
        root.fill(&WHITE)?;
        let (x_min, x_max) = self.x_range.ok_or("x-axis range was not resolved")?;
        let (y_min, y_max) = self.y_range.ok_or("y-axis range was not resolved")?;
        let this = self;

        // The chart type differs per coordinate spec, so the body is stamped
        // out once per axis-scale combination.
        macro_rules! render_chart {
            ($x_spec:expr, $y_spec:expr) => {{
                let mut chart = ChartBuilder::on(root)
                    .margin((10 * sf) as i32)
                    .x_label_area_size((55 * sf) as i32)
                    .y_label_area_size((75 * sf) as i32)
                    .build_cartesian_2d($x_spec, $y_spec)?;

                chart
                    .configure_mesh()
                    .x_desc(this.x_label.as_str())
                    .y_desc(this.y_label.as_str())
                    .light_line_style(WHITE.mix(0.7))
                    .label_style(("sans-serif", FONT_SIZE_TICK_LABEL * sf).into_font())
                    .axis_desc_style(
                        ("sans-serif", this.axis_label_fontsize * sf).into_font(),
                    )
                    .set_all_tick_mark_size((this.tick_length * sf) as i32)
                    .draw()?;

                let mut legend_entries = 0usize;

                for series in &this.points {
                    let color = series.color;
                    let point_size = (DATA_POINT_SIZE * sf) as i32;
                    let drawn = if let Some(errors) = &series.y_error {
                        let y_is_log = this.scale.y_is_log();
                        chart.draw_series(series.data.iter().zip(errors.iter()).map(
                            |(&(x, y), &e)| {
                                // Log axes cannot represent a whisker at or
                                // below zero.
                                let mut lower = y - e;
                                if y_is_log && lower <= 0.0 {
                                    lower = f64::MIN_POSITIVE;
                                }
                                ErrorBar::new_vertical(
                                    x,
                                    lower,
                                    y,
                                    y + e,
                                    color.filled(),
                                    ERROR_BAR_WIDTH * sf,
                                )
                            },
                        ))?
                    } else {
                        chart.draw_series(
                            series
                                .data
                                .iter()
                                .map(|&(x, y)| Circle::new((x, y), point_size, color.filled())),
                        )?
                    };
                    if this.show_legend && !series.label.is_empty() {
                        drawn.label(series.label.as_str()).legend(move |(x, y)| {
                            Circle::new((x + (10 * sf) as i32, y), point_size, color.filled())
                        });
                        legend_entries += 1;
                    }
                }

                for series in &this.lines {
                    let color = series.color;
                    let style = color.stroke_width(series.stroke_width * sf);
                    let drawn = match series.style {
                        LineStyle::Solid => chart
                            .draw_series(LineSeries::new(series.data.iter().cloned(), style))?,
                        LineStyle::Dashed => chart.draw_series(DashedLineSeries::new(
                            series.data.iter().cloned(),
                            (8 * sf) as i32,
                            (6 * sf) as i32,
                            style,
                        ))?,
                    };
                    if this.show_legend && !series.label.is_empty() {
                        let legend_width = LINE_WIDTH_LEGEND * sf;
                        drawn.label(series.label.as_str()).legend(move |(x, y)| {
                            PathElement::new(
                                vec![(x, y), (x + (20 * sf) as i32, y)],
                                color.stroke_width(legend_width),
                            )
                        });
                        legend_entries += 1;
                    }
                }

                if legend_entries > 0 {
                    chart
                        .configure_series_labels()
                        .position(SeriesLabelPosition::UpperRight)
                        .background_style(WHITE.mix(0.8))
                        .border_style(BLACK)
                        .label_font(("sans-serif", this.legend_fontsize * sf).into_font())
                        .draw()?;
                }
            }};
        }

        match this.scale {
            AxisScaleMode::Linear => render_chart!(x_min..x_max, y_min..y_max),
            AxisScaleMode::LogY => render_chart!(x_min..x_max, (y_min..y_max).log_scale()),
            AxisScaleMode::LogX => render_chart!((x_min..x_max).log_scale(), y_min..y_max),
            AxisScaleMode::LogLog => {
                render_chart!((x_min..x_max).log_scale(), (y_min..y_max).log_scale())
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_padding_is_fifteen_percent() {
        let (lo, hi) = calculate_range(0.0, 10.0);
        assert!((lo - (-1.5)).abs() < 1e-12);
        assert!((hi - 11.5).abs() < 1e-12);
    }

    #[test]
    fn degenerate_range_gets_fixed_padding() {
        let (lo, hi) = calculate_range(5.0, 5.0);
        assert!((lo - 4.5).abs() < 1e-12);
        assert!((hi - 5.5).abs() < 1e-12);
    }

    #[test]
    fn reversed_inputs_are_reordered() {
        let (lo, hi) = calculate_range(10.0, 0.0);
        assert!(lo < hi);
        assert!((hi - 11.5).abs() < 1e-12);
    }
}

// src/plot_framework.rs
