// src/types.rs

use serde::Deserialize;

/// Which plot axes are logarithmic. This decides the linearizing transform
/// used for fitting and the positivity constraints for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisScaleMode {
    #[default]
    Linear,
    LogY,
    LogX,
    LogLog,
}

impl AxisScaleMode {
    pub fn x_is_log(self) -> bool {
        matches!(self, AxisScaleMode::LogX | AxisScaleMode::LogLog)
    }

    pub fn y_is_log(self) -> bool {
        matches!(self, AxisScaleMode::LogY | AxisScaleMode::LogLog)
    }
}

/// Display limits for one axis. Invariant: min < max, both finite, and both
/// strictly positive when the axis is log-scaled.
pub type AxisRange = (f64, f64);
