// src/plot_functions/plot_control_chart.rs

use crate::constants::{
    COLOR_CONTROL_CENTER, COLOR_CONTROL_LIMITS, COLOR_CONTROL_TRACE, CONTROL_LIMIT_SIGMA,
    LINE_WIDTH_PLOT,
};
use crate::data_analysis::descriptive::{mean, sample_std_dev};
use crate::data_input::dataset::{ColumnId, FormulationDataset};
use crate::plot_framework::{calculate_range, PlotConfig, PlotSeries, SeriesMarker};
use crate::plot_functions::plot_scatter::column_extent;
use crate::types::AnalysisResult;

/// Builds a control chart descriptor: the monitored parameter against
/// `Time`, with a center line at the mean and control limits at
/// mean ± [`CONTROL_LIMIT_SIGMA`] sample standard deviations.
///
/// Callers holding a user-supplied parameter name resolve it with
/// [`ColumnId::from_name`] first, so an unrecognized name is a structured
/// missing-column error rather than an empty chart.
pub fn control_chart(
    dataset: &FormulationDataset,
    parameter_column: ColumnId,
) -> AnalysisResult<PlotConfig> {
    let times = dataset.numeric_column(ColumnId::Time)?;
    let values = dataset.numeric_column(parameter_column)?;

    let (time_min, time_max) = column_extent(&times, ColumnId::Time)?;
    let (value_min, value_max) = column_extent(&values, parameter_column)?;

    let center = mean(&values);
    let mut series = vec![PlotSeries {
        data: times.iter().copied().zip(values.iter().copied()).collect(),
        label: parameter_column.name().to_string(),
        color: *COLOR_CONTROL_TRACE,
        stroke_width: LINE_WIDTH_PLOT,
        marker: SeriesMarker::Line,
    }];

    // Control limits need a dispersion estimate; with a single observation
    // only the trace is drawn.
    let mut limit_min = value_min;
    let mut limit_max = value_max;
    if values.len() >= 2 {
        let sigma = sample_std_dev(&values);
        let upper = center + CONTROL_LIMIT_SIGMA * sigma;
        let lower = center - CONTROL_LIMIT_SIGMA * sigma;
        limit_min = limit_min.min(lower);
        limit_max = limit_max.max(upper);

        series.push(horizontal_line(
            time_min,
            time_max,
            center,
            format!("Mean = {center:.2}"),
            *COLOR_CONTROL_CENTER,
        ));
        series.push(horizontal_line(
            time_min,
            time_max,
            upper,
            format!("UCL = {upper:.2}"),
            *COLOR_CONTROL_LIMITS,
        ));
        series.push(horizontal_line(
            time_min,
            time_max,
            lower,
            format!("LCL = {lower:.2}"),
            *COLOR_CONTROL_LIMITS,
        ));
    }

    let (y_start, y_end) = calculate_range(limit_min, limit_max);
    Ok(PlotConfig {
        title: format!("Control Chart: {parameter_column}"),
        x_range: time_min..(time_max + 1e-9),
        y_range: y_start..y_end,
        series,
        x_label: ColumnId::Time.name().to_string(),
        y_label: parameter_column.name().to_string(),
    })
}

fn horizontal_line(
    x_start: f64,
    x_end: f64,
    y: f64,
    label: String,
    color: plotters::style::RGBColor,
) -> PlotSeries {
    PlotSeries {
        data: vec![(x_start, y), (x_end, y)],
        label,
        color,
        stroke_width: LINE_WIDTH_PLOT,
        marker: SeriesMarker::Line,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_input::synthetic::generate_dataset;
    use crate::types::AnalysisError;

    #[test]
    fn chart_carries_trace_and_control_limits() {
        let dataset = generate_dataset(60, 19);
        let config = control_chart(&dataset, ColumnId::Viscosity).unwrap();
        assert_eq!(config.series.len(), 4);
        assert_eq!(config.series[0].data.len(), 60);
        // Limits sit symmetrically around the center line.
        let center = config.series[1].data[0].1;
        let upper = config.series[2].data[0].1;
        let lower = config.series[3].data[0].1;
        assert!((upper - center - (center - lower)).abs() < 1e-9);
    }

    #[test]
    fn unknown_parameter_name_is_a_missing_column_error() {
        let dataset = generate_dataset(10, 19);
        let result =
            ColumnId::from_name("Dissolution_Rate").and_then(|column| control_chart(&dataset, column));
        assert!(matches!(result, Err(AnalysisError::UnknownColumn(_))));
    }

    #[test]
    fn categorical_parameter_is_rejected() {
        let dataset = generate_dataset(10, 19);
        assert!(matches!(
            control_chart(&dataset, ColumnId::StorageCondition),
            Err(AnalysisError::NotNumeric(ColumnId::StorageCondition))
        ));
    }
}

// src/plot_functions/plot_control_chart.rs
