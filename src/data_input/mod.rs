// src/data_input/mod.rs

pub mod csv_loader;
pub mod dataset;
pub mod synthetic;

// src/data_input/mod.rs
