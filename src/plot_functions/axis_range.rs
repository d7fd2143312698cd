// src/plot_functions/axis_range.rs

use log::warn;

use crate::constants::{LOG_FALLBACK_RANGE, LOG_RANGE_EXPANSION, LOG_RANGE_PADDING_FACTOR};
use crate::plot_framework::calculate_range;
use crate::settings::{AxisRangeMode, GraphSettings};
use crate::types::{AxisRange, AxisScaleMode};

/// Smallest and largest strictly positive finite values, if any exist.
pub fn positive_extent(data: &[f64]) -> Option<(f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &v in data {
        if v.is_finite() && v > 0.0 {
            min = min.min(v);
            max = max.max(v);
        }
    }
    if min.is_finite() {
        Some((min, max))
    } else {
        None
    }
}

/// Automatic limits for one axis. Linear axes get padded min/max of the
/// finite data; log axes get the positive extent expanded multiplicatively,
/// or a wide default when no positive values exist.
pub fn auto_axis_range(data: &[f64], is_log: bool) -> AxisRange {
    if is_log {
        return match positive_extent(data) {
            Some((lo, hi)) => (lo / LOG_RANGE_PADDING_FACTOR, hi * LOG_RANGE_PADDING_FACTOR),
            None => LOG_FALLBACK_RANGE,
        };
    }

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &v in data {
        if v.is_finite() {
            min = min.min(v);
            max = max.max(v);
        }
    }
    if !min.is_finite() {
        return (0.0, 1.0);
    }
    calculate_range(min, max)
}

pub fn auto_axis_ranges(
    x_data: &[f64],
    y_data: &[f64],
    mode: AxisScaleMode,
) -> (AxisRange, AxisRange) {
    (
        auto_axis_range(x_data, mode.x_is_log()),
        auto_axis_range(y_data, mode.y_is_log()),
    )
}

/// Applies the axis-range policy on top of the automatic limits and returns
/// the final display ranges. Invalid requests degrade with a warning rather
/// than failing the render.
pub fn resolve_axis_ranges(
    auto_xlim: AxisRange,
    auto_ylim: AxisRange,
    mode: AxisScaleMode,
    settings: &GraphSettings,
    x_data: &[f64],
    y_data: &[f64],
) -> (AxisRange, AxisRange) {
    match settings.axis_range_mode {
        AxisRangeMode::Auto => (auto_xlim, auto_ylim),
        AxisRangeMode::ForceOrigin => {
            if mode != AxisScaleMode::Linear {
                warn!("force-origin only applies to linear axes; using automatic limits");
                return (auto_xlim, auto_ylim);
            }
            (
                (auto_xlim.0.min(0.0), auto_xlim.1.max(0.0)),
                (auto_ylim.0.min(0.0), auto_ylim.1.max(0.0)),
            )
        }
        AxisRangeMode::Manual => (
            apply_manual_override(
                auto_xlim,
                settings.x_axis_min,
                settings.x_axis_max,
                mode.x_is_log(),
                x_data,
                "x",
            ),
            apply_manual_override(
                auto_ylim,
                settings.y_axis_min,
                settings.y_axis_max,
                mode.y_is_log(),
                y_data,
                "y",
            ),
        ),
    }
}

/// One axis of the manual mode. Both bounds must be given and ordered;
/// otherwise the automatic range is kept. Log axes additionally correct
/// non-positive bounds from the positive data extent.
fn apply_manual_override(
    current: AxisRange,
    min_set: Option<f64>,
    max_set: Option<f64>,
    is_log: bool,
    data: &[f64],
    axis_name: &str,
) -> AxisRange {
    let (mut min, mut max) = match (min_set, max_set) {
        (Some(min), Some(max)) => (min, max),
        (None, None) => return current,
        _ => {
            warn!("manual {axis_name}-axis range needs both bounds; using automatic limits");
            return current;
        }
    };

    if !min.is_finite() || !max.is_finite() || min >= max {
        warn!(
            "invalid manual {axis_name}-axis range [{min}, {max}]; using automatic limits"
        );
        return current;
    }

    if is_log {
        if min <= 0.0 {
            min = match positive_extent(data) {
                Some((lo, _)) => lo,
                None => f64::EPSILON,
            };
            warn!("manual {axis_name}-axis min must be positive on a log axis; using {min}");
        }
        if max <= min {
            max = match positive_extent(data) {
                Some((_, hi)) if hi > min => hi,
                _ => min * LOG_RANGE_EXPANSION,
            };
        }
    }

    (min, max)
}


// src/plot_functions/axis_range.rs
