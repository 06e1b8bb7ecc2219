// src/plot_functions/plot_histogram.rs

use crate::constants::{COLOR_HISTOGRAM_BARS, DEFAULT_HISTOGRAM_BINS};
use crate::data_input::dataset::{ColumnId, FormulationDataset};
use crate::plot_framework::{calculate_range, HistogramConfig, HistogramSeries};
use crate::plot_functions::plot_scatter::column_extent;
use crate::types::AnalysisResult;

/// Builds a histogram descriptor for a numeric column.
/// `bins` defaults to [`DEFAULT_HISTOGRAM_BINS`] when `None`.
pub fn histogram(
    dataset: &FormulationDataset,
    column: ColumnId,
    bins: Option<usize>,
) -> AnalysisResult<HistogramConfig> {
    let values = dataset.numeric_column(column)?;
    let bins = bins.unwrap_or(DEFAULT_HISTOGRAM_BINS).max(1);

    let (min, max) = column_extent(&values, column)?;
    let bin_edges = equal_width_edges(min, max, bins);
    let counts = bin_counts(&values, &bin_edges);

    Ok(HistogramConfig {
        title: format!("Distribution of {column}"),
        x_label: column.name().to_string(),
        y_label: "Frequency".to_string(),
        bin_edges,
        series: vec![HistogramSeries {
            label: column.name().to_string(),
            color: *COLOR_HISTOGRAM_BARS,
            counts,
        }],
    })
}

/// Equal-width bin edges covering [min, max]; a degenerate range is padded
/// so constant columns still get a drawable bin.
pub fn equal_width_edges(min: f64, max: f64, bins: usize) -> Vec<f64> {
    let (start, end) = if max - min > 0.0 {
        (min, max)
    } else {
        calculate_range(min, max)
    };
    let width = (end - start) / bins as f64;
    (0..=bins).map(|i| start + width * i as f64).collect()
}

/// Counts values per bin; the final bin is closed on the right so the
/// column maximum is included.
pub fn bin_counts(values: &[f64], bin_edges: &[f64]) -> Vec<usize> {
    let bins = bin_edges.len().saturating_sub(1);
    let mut counts = vec![0usize; bins];
    if bins == 0 {
        return counts;
    }
    let start = bin_edges[0];
    let end = bin_edges[bins];
    let width = (end - start) / bins as f64;
    for &value in values {
        if value < start || value > end || width <= 0.0 {
            continue;
        }
        let bin = (((value - start) / width) as usize).min(bins - 1);
        counts[bin] += 1;
    }
    counts
}


// src/plot_functions/plot_histogram.rs
