// src/export/mod.rs

pub mod latex;

// src/export/mod.rs
