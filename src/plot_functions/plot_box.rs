// src/plot_functions/plot_box.rs

use crate::constants::COLOR_BOX_FILL;
use crate::data_analysis::descriptive::five_number_summary_sorted;
use crate::data_input::dataset::{distinct_levels, ColumnId, FormulationDataset};
use crate::plot_framework::{BoxPlotConfig, GroupBoxStats};
use crate::types::{AnalysisError, AnalysisResult};

/// Builds a grouped box plot descriptor: one five-number box per level of
/// the grouping column.
pub fn box_plot(
    dataset: &FormulationDataset,
    group_column: ColumnId,
    value_column: ColumnId,
) -> AnalysisResult<BoxPlotConfig> {
    let keys = dataset.categorical_column(group_column)?;
    let values = dataset.numeric_column(value_column)?;
    if values.is_empty() {
        return Err(AnalysisError::InsufficientData {
            column: value_column,
            needed: 1,
            found: 0,
        });
    }

    let groups = distinct_levels(keys)
        .into_iter()
        .map(|level| {
            let mut group_values: Vec<f64> = keys
                .iter()
                .zip(&values)
                .filter(|(key, _)| **key == level)
                .map(|(_, value)| *value)
                .collect();
            group_values.sort_by(f64::total_cmp);
            let (min, q1, median, q3, max) = five_number_summary_sorted(&group_values);
            GroupBoxStats {
                label: level,
                min,
                q1,
                median,
                q3,
                max,
            }
        })
        .collect();

    Ok(BoxPlotConfig {
        title: format!("{value_column} by {group_column}"),
        x_label: group_column.name().to_string(),
        y_label: value_column.name().to_string(),
        box_color: *COLOR_BOX_FILL,
        groups,
    })
}


// src/plot_functions/plot_box.rs
