// src/constants.rs

// Import specific colors needed
use plotters::style::colors::full_palette::{BLUE, GREEN, RED};
use plotters::style::RGBColor;

// Base chart dimensions (used for the SVG export). The raster export is the
// same chart scaled up by RASTER_SCALE, a 300-DPI equivalent of the base size.
pub const PLOT_WIDTH: u32 = 1000;
pub const PLOT_HEIGHT: u32 = 700;
pub const RASTER_SCALE: u32 = 3;

// Number of samples used when drawing a fit curve across the visible x-range.
pub const FIT_LINE_SAMPLES: usize = 200;

// Fallbacks when a log-scale range cannot be derived from the data: a wide
// sampling span for fit lines, and a narrower display default for axes.
pub const LOG_FALLBACK_DATA_RANGE: (f64, f64) = (1e-3, 1e3);
pub const LOG_FALLBACK_RANGE: (f64, f64) = (1e-1, 1e1);
// Expansion applied to a manual log-scale max that does not clear the
// corrected min.
pub const LOG_RANGE_EXPANSION: f64 = 100.0;

// Padding policy for automatic linear-axis limits.
pub const RANGE_PADDING_FRACTION: f64 = 0.15;
pub const RANGE_PADDING_DEGENERATE: f64 = 0.5;
// Multiplicative padding for automatic log-axis limits.
pub const LOG_RANGE_PADDING_FACTOR: f64 = 1.5;

// --- Plot Color Assignments ---
pub const COLOR_DATA_POINTS: &RGBColor = &BLUE;
pub const COLOR_FIT_PRIMARY: &RGBColor = &RED;
pub const COLOR_FIT_SECONDARY: &RGBColor = &GREEN;

// Font sizes (the *_DEFAULT values are overridable via GraphSettings).
pub const FONT_SIZE_AXIS_LABEL_DEFAULT: u32 = 14;
pub const FONT_SIZE_TICK_LABEL: u32 = 12;
pub const FONT_SIZE_LEGEND_DEFAULT: u32 = 20;
pub const TICK_LENGTH_DEFAULT: u32 = 5;

// Marker and stroke sizing
pub const DATA_POINT_SIZE: u32 = 3;
pub const ERROR_BAR_WIDTH: u32 = 6;
pub const LINE_WIDTH_PLOT: u32 = 2;
pub const LINE_WIDTH_LEGEND: u32 = 2;

// src/constants.rs
