// src/data_input/mod.rs

pub mod dataset;
pub mod text_parser;

// src/data_input/mod.rs
