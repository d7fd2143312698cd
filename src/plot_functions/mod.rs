// src/plot_functions/mod.rs

pub mod axis_range;
pub mod fit_line;
pub mod plot_chart;

// src/plot_functions/mod.rs
