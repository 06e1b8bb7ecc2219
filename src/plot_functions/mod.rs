// src/plot_functions/mod.rs

pub mod plot_box;
pub mod plot_compare_distributions;
pub mod plot_control_chart;
pub mod plot_histogram;
pub mod plot_scatter;

// src/plot_functions/mod.rs
