// src/plot_functions/plot_compare_distributions.rs

use crate::constants::{DEFAULT_HISTOGRAM_BINS, GROUP_COLOR_PALETTE};
use crate::data_input::dataset::{distinct_levels, ColumnId, FormulationDataset};
use crate::plot_framework::{HistogramConfig, HistogramSeries};
use crate::plot_functions::plot_histogram::{bin_counts, equal_width_edges};
use crate::plot_functions::plot_scatter::column_extent;
use crate::types::AnalysisResult;

/// Builds an overlaid histogram descriptor comparing the distribution of a
/// response column across the levels of a grouping column. All groups share
/// the bin edges of the pooled data so the overlays are comparable.
pub fn compare_distributions(
    dataset: &FormulationDataset,
    group_column: ColumnId,
    response_column: ColumnId,
) -> AnalysisResult<HistogramConfig> {
    let keys = dataset.categorical_column(group_column)?;
    let values = dataset.numeric_column(response_column)?;

    let (min, max) = column_extent(&values, response_column)?;
    let bin_edges = equal_width_edges(min, max, DEFAULT_HISTOGRAM_BINS);

    let series = distinct_levels(keys)
        .into_iter()
        .enumerate()
        .map(|(index, level)| {
            let group_values: Vec<f64> = keys
                .iter()
                .zip(&values)
                .filter(|(key, _)| **key == level)
                .map(|(_, value)| *value)
                .collect();
            HistogramSeries {
                label: level,
                color: *GROUP_COLOR_PALETTE[index % GROUP_COLOR_PALETTE.len()],
                counts: bin_counts(&group_values, &bin_edges),
            }
        })
        .collect();

    Ok(HistogramConfig {
        title: format!("{response_column} by {group_column}"),
        x_label: response_column.name().to_string(),
        y_label: "Frequency".to_string(),
        bin_edges,
        series,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_input::synthetic::generate_dataset;
    use crate::types::AnalysisError;

    #[test]
    fn group_counts_partition_the_rows() {
        let dataset = generate_dataset(100, 17);
        let config =
            compare_distributions(&dataset, ColumnId::FormulationType, ColumnId::DrugRelease)
                .unwrap();
        assert_eq!(config.series.len(), 2);
        let total: usize = config
            .series
            .iter()
            .flat_map(|s| s.counts.iter())
            .sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn numeric_grouping_column_is_rejected() {
        let dataset = generate_dataset(10, 17);
        assert!(matches!(
            compare_distributions(&dataset, ColumnId::Ph, ColumnId::DrugRelease),
            Err(AnalysisError::NotCategorical(ColumnId::Ph))
        ));
    }
}

// src/plot_functions/plot_compare_distributions.rs
