// src/data_analysis/mod.rs

pub mod anova;
pub mod descriptive;
pub mod inference;
pub mod regression;

// src/data_analysis/mod.rs
