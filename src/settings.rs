// src/settings.rs

use serde::Deserialize;

use crate::constants::{
    FONT_SIZE_AXIS_LABEL_DEFAULT, FONT_SIZE_LEGEND_DEFAULT, TICK_LENGTH_DEFAULT,
};
use crate::types::AxisScaleMode;

/// How the final display limits are chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisRangeMode {
    #[default]
    Auto,
    /// Extend both axes to include the origin. Linear scales only; ignored
    /// when either axis is logarithmic.
    ForceOrigin,
    /// Use the per-axis manual bounds where both ends are given.
    Manual,
}

/// One render pass worth of configuration. Built fresh per interaction and
/// never mutated while a pass runs.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GraphSettings {
    pub plot_type: AxisScaleMode,
    pub x_label: String,
    pub y_label: String,
    pub data_legend_label: String,
    pub show_legend: bool,
    /// Fit the whole dataset with the mode-appropriate model.
    pub show_fitting: bool,
    /// Second, independent fit restricted to `fit_range_x_min..=fit_range_x_max`.
    pub show_fitting_2: bool,
    /// A missing bound leaves that side of the second fit's range unbounded.
    pub fit_range_x_min: Option<f64>,
    pub fit_range_x_max: Option<f64>,
    pub axis_range_mode: AxisRangeMode,
    pub x_axis_min: Option<f64>,
    pub x_axis_max: Option<f64>,
    pub y_axis_min: Option<f64>,
    pub y_axis_max: Option<f64>,
    /// Draw vertical error bars: the third data column when present,
    /// otherwise the standard error of the mean of y for every point.
    pub show_error_bars: bool,
    pub axis_label_fontsize: u32,
    pub legend_fontsize: u32,
    pub tick_length: u32,
}

impl Default for GraphSettings {
    fn default() -> Self {
        Self {
            plot_type: AxisScaleMode::Linear,
            x_label: "X".to_string(),
            y_label: "Y".to_string(),
            data_legend_label: "data".to_string(),
            show_legend: true,
            show_fitting: false,
            show_fitting_2: false,
            fit_range_x_min: None,
            fit_range_x_max: None,
            axis_range_mode: AxisRangeMode::Auto,
            x_axis_min: None,
            x_axis_max: None,
            y_axis_min: None,
            y_axis_max: None,
            show_error_bars: false,
            axis_label_fontsize: FONT_SIZE_AXIS_LABEL_DEFAULT,
            legend_fontsize: FONT_SIZE_LEGEND_DEFAULT,
            tick_length: TICK_LENGTH_DEFAULT,
        }
    }
}

impl GraphSettings {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let settings = GraphSettings::from_json("{}").unwrap();
        assert_eq!(settings.plot_type, AxisScaleMode::Linear);
        assert_eq!(settings.axis_range_mode, AxisRangeMode::Auto);
        assert!(settings.show_legend);
        assert!(!settings.show_fitting);
        assert_eq!(settings.x_label, "X");
    }

    #[test]
    fn scale_and_range_modes_deserialize() {
        let settings = GraphSettings::from_json(
            r#"{
                "plot_type": "log_y",
                "axis_range_mode": "manual",
                "x_axis_min": 0.5,
                "x_axis_max": 20.0,
                "show_fitting": true
            }"#,
        )
        .unwrap();
        assert_eq!(settings.plot_type, AxisScaleMode::LogY);
        assert_eq!(settings.axis_range_mode, AxisRangeMode::Manual);
        assert_eq!(settings.x_axis_min, Some(0.5));
        assert!(settings.show_fitting);
    }
}
