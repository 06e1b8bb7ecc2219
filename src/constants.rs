// src/constants.rs

// Import specific colors needed
use plotters::style::colors::full_palette::{BLUE, GREEN, GREY, ORANGE, PURPLE, RED, TEAL};
use plotters::style::RGBColor;

// Plot dimensions.
pub const PLOT_WIDTH: u32 = 1280;
pub const PLOT_HEIGHT: u32 = 720;

// Default number of histogram bins when the caller does not specify one.
pub const DEFAULT_HISTOGRAM_BINS: usize = 20;

// Default confidence level for interval estimates.
pub const DEFAULT_CONFIDENCE_LEVEL: f64 = 0.95;

// Control chart limits are placed this many sample standard deviations from the mean.
pub const CONTROL_LIMIT_SIGMA: f64 = 3.0;

// A pivot below this magnitude during elimination marks the design matrix as rank deficient.
pub const RANK_PIVOT_TOLERANCE: f64 = 1e-10;

// --- Plot Color Assignments ---
pub const COLOR_SCATTER_POINTS: &RGBColor = &BLUE;
pub const COLOR_HISTOGRAM_BARS: &RGBColor = &TEAL;
pub const COLOR_BOX_FILL: &RGBColor = &TEAL;
pub const COLOR_BOX_MEDIAN: &RGBColor = &RED;
pub const COLOR_CONTROL_TRACE: &RGBColor = &BLUE;
pub const COLOR_CONTROL_CENTER: &RGBColor = &GREEN;
pub const COLOR_CONTROL_LIMITS: &RGBColor = &RED;
pub const COLOR_WHISKER: &RGBColor = &GREY;

// Per-group colors for overlaid distribution comparisons; cycled when a
// grouping column has more levels than entries here.
pub const GROUP_COLOR_PALETTE: [&RGBColor; 5] = [&BLUE, &ORANGE, &GREEN, &PURPLE, &RED];

// Font sizes
pub const FONT_SIZE_CHART_TITLE: u32 = 24;
pub const FONT_SIZE_AXIS_LABEL: u32 = 14;
pub const FONT_SIZE_LEGEND: u32 = 14;
pub const FONT_SIZE_GROUP_LABEL: u32 = 15;

// Stroke widths for lines
pub const LINE_WIDTH_PLOT: u32 = 1;
pub const LINE_WIDTH_MEDIAN: u32 = 2;
pub const LINE_WIDTH_LEGEND: u32 = 2;

// Marker radius for scatter points.
pub const SCATTER_POINT_RADIUS: i32 = 3;

// src/constants.rs
