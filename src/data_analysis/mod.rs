// src/data_analysis/mod.rs

pub mod fit_engine;
pub mod linear_fit;

// src/data_analysis/mod.rs
