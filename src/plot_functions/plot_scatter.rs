// src/plot_functions/plot_scatter.rs

use ndarray::Array1;
use ndarray_stats::QuantileExt;

use crate::constants::{COLOR_SCATTER_POINTS, LINE_WIDTH_PLOT};
use crate::data_input::dataset::{ColumnId, FormulationDataset};
use crate::plot_framework::{calculate_range, PlotConfig, PlotSeries, SeriesMarker};
use crate::types::{AnalysisError, AnalysisResult};

/// Builds a scatter chart descriptor of one numeric column against another.
pub fn scatter_plot(
    dataset: &FormulationDataset,
    x_column: ColumnId,
    y_column: ColumnId,
) -> AnalysisResult<PlotConfig> {
    let xs = dataset.numeric_column(x_column)?;
    let ys = dataset.numeric_column(y_column)?;

    let (x_min, x_max) = column_extent(&xs, x_column)?;
    let (y_min, y_max) = column_extent(&ys, y_column)?;
    let (x_start, x_end) = calculate_range(x_min, x_max);
    let (y_start, y_end) = calculate_range(y_min, y_max);

    Ok(PlotConfig {
        title: format!("{y_column} vs {x_column}"),
        x_range: x_start..x_end,
        y_range: y_start..y_end,
        series: vec![PlotSeries {
            data: xs.into_iter().zip(ys).collect(),
            label: String::new(),
            color: *COLOR_SCATTER_POINTS,
            stroke_width: LINE_WIDTH_PLOT,
            marker: SeriesMarker::Points,
        }],
        x_label: x_column.name().to_string(),
        y_label: y_column.name().to_string(),
    })
}

/// Min and max of a column, as an insufficient-data error when the column
/// is empty or contains non-finite values.
pub fn column_extent(values: &[f64], column: ColumnId) -> AnalysisResult<(f64, f64)> {
    let array = Array1::from(values.to_vec());
    match (array.min(), array.max()) {
        (Ok(&min), Ok(&max)) => Ok((min, max)),
        _ => Err(AnalysisError::InsufficientData {
            column,
            needed: 1,
            found: 0,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_input::synthetic::generate_dataset;

    #[test]
    fn scatter_pairs_every_row() {
        let dataset = generate_dataset(40, 8);
        let config = scatter_plot(
            &dataset,
            ColumnId::ExcipientConcentration,
            ColumnId::DrugRelease,
        )
        .unwrap();
        assert_eq!(config.series.len(), 1);
        assert_eq!(config.series[0].data.len(), 40);
        assert!(config.x_range.start < config.x_range.end);
        assert!(config.y_range.start < config.y_range.end);
    }

    #[test]
    fn categorical_axis_is_rejected() {
        let dataset = generate_dataset(10, 8);
        assert!(matches!(
            scatter_plot(&dataset, ColumnId::FormulationType, ColumnId::DrugRelease),
            Err(AnalysisError::NotNumeric(ColumnId::FormulationType))
        ));
    }

    #[test]
    fn empty_dataset_is_insufficient() {
        let dataset = FormulationDataset::default();
        assert!(matches!(
            scatter_plot(&dataset, ColumnId::Viscosity, ColumnId::DrugRelease),
            Err(AnalysisError::InsufficientData { .. })
        ));
    }
}

// src/plot_functions/plot_scatter.rs
