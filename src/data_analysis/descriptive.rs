// src/data_analysis/descriptive.rs

use crate::data_input::dataset::{distinct_levels, ColumnId, ColumnKind, FormulationDataset};
use crate::types::{AnalysisError, AnalysisResult};

/// Arithmetic mean. NaN on an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Unbiased sample standard deviation (n - 1 denominator).
/// NaN with fewer than two observations; exactly 0 on a constant slice.
pub fn sample_std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return f64::NAN;
    }
    let m = mean(values);
    let ss: f64 = values.iter().map(|v| (v - m).powi(2)).sum();
    (ss / (values.len() as f64 - 1.0)).sqrt()
}

/// Interpolated quantile of a pre-sorted slice, `q` in [0, 1].
pub fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    if sorted.is_empty() {
        return f64::NAN;
    }
    let position = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    if lower == upper {
        sorted[lower]
    } else {
        let weight = position - lower as f64;
        sorted[lower] * (1.0 - weight) + sorted[upper] * weight
    }
}

/// Five-number summary (min, q1, median, q3, max) of a pre-sorted slice.
pub fn five_number_summary_sorted(sorted: &[f64]) -> (f64, f64, f64, f64, f64) {
    (
        sorted.first().copied().unwrap_or(f64::NAN),
        quantile_sorted(sorted, 0.25),
        quantile_sorted(sorted, 0.5),
        quantile_sorted(sorted, 0.75),
        sorted.last().copied().unwrap_or(f64::NAN),
    )
}

/// Descriptive statistics for one numeric column.
#[derive(Debug, Clone)]
pub struct NumericSummary {
    pub column: ColumnId,
    pub count: usize,
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

/// Level counts and mode for one categorical column.
#[derive(Debug, Clone)]
pub struct CategoricalSummary {
    pub column: ColumnId,
    pub count: usize,
    /// (level, occurrences) in first-seen order.
    pub level_counts: Vec<(String, usize)>,
    /// Most frequent level; empty string on an empty column.
    pub mode: String,
}

/// Per-column descriptive statistics for the whole dataset.
#[derive(Debug, Clone)]
pub struct DatasetSummary {
    pub rows: usize,
    pub numeric: Vec<NumericSummary>,
    pub categorical: Vec<CategoricalSummary>,
}

/// Computes per-column descriptive statistics: count, mean, standard
/// deviation and quartiles for numeric columns, level counts and mode for
/// categorical columns. Always succeeds on a well-formed dataset.
pub fn summary_statistics(dataset: &FormulationDataset) -> DatasetSummary {
    let mut numeric = Vec::new();
    let mut categorical = Vec::new();

    for column in ColumnId::ALL {
        match column.kind() {
            ColumnKind::Numeric => {
                // numeric_column cannot fail for a numeric ColumnId
                let values = dataset.numeric_column(column).unwrap_or_default();
                numeric.push(summarize_numeric(column, &values));
            }
            ColumnKind::Categorical => {
                let labels = dataset.categorical_column(column).unwrap_or(&[]);
                categorical.push(summarize_categorical(column, labels));
            }
        }
    }

    DatasetSummary {
        rows: dataset.rows(),
        numeric,
        categorical,
    }
}

fn summarize_numeric(column: ColumnId, values: &[f64]) -> NumericSummary {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let (min, q1, median, q3, max) = five_number_summary_sorted(&sorted);
    NumericSummary {
        column,
        count: values.len(),
        mean: mean(values),
        std_dev: sample_std_dev(values),
        min,
        q1,
        median,
        q3,
        max,
    }
}

fn summarize_categorical(column: ColumnId, labels: &[String]) -> CategoricalSummary {
    let levels = distinct_levels(labels);
    let level_counts: Vec<(String, usize)> = levels
        .into_iter()
        .map(|level| {
            let count = labels.iter().filter(|l| **l == level).count();
            (level, count)
        })
        .collect();
    let mode = level_counts
        .iter()
        .max_by_key(|(_, count)| *count)
        .map(|(level, _)| level.clone())
        .unwrap_or_default();
    CategoricalSummary {
        column,
        count: labels.len(),
        level_counts,
        mode,
    }
}

/// Reports the batch-to-batch variability of a quality attribute as a
/// formatted string: the sample standard deviation of the column.
pub fn batch_variability(
    dataset: &FormulationDataset,
    parameter: ColumnId,
) -> AnalysisResult<String> {
    let values = dataset.numeric_column(parameter)?;
    if values.len() < 2 {
        return Err(AnalysisError::InsufficientData {
            column: parameter,
            needed: 2,
            found: values.len(),
        });
    }
    let std_dev = sample_std_dev(&values);
    Ok(format!(
        "Batch variability in {parameter}: standard deviation = {std_dev:.4} over {} observations",
        values.len()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_input::synthetic::generate_dataset;

    #[test]
    fn std_dev_of_constant_column_is_exactly_zero() {
        let values = vec![5.0; 10];
        assert_eq!(sample_std_dev(&values), 0.0);
    }

    #[test]
    fn quartiles_interpolate() {
        let sorted = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(quantile_sorted(&sorted, 0.5), 2.5);
        assert_eq!(quantile_sorted(&sorted, 0.25), 1.75);
        assert_eq!(quantile_sorted(&sorted, 0.0), 1.0);
        assert_eq!(quantile_sorted(&sorted, 1.0), 4.0);
    }

    #[test]
    fn summary_counts_match_row_count() {
        let dataset = generate_dataset(80, 3);
        let summary = summary_statistics(&dataset);
        assert_eq!(summary.rows, 80);
        assert!(summary.numeric.iter().all(|s| s.count == 80));
        assert!(summary.categorical.iter().all(|s| s.count == 80));
        for s in &summary.numeric {
            assert!(s.min <= s.q1 && s.q1 <= s.median && s.median <= s.q3 && s.q3 <= s.max);
        }
        for s in &summary.categorical {
            let total: usize = s.level_counts.iter().map(|(_, c)| c).sum();
            assert_eq!(total, 80);
        }
    }

    #[test]
    fn batch_variability_on_constant_column_reports_zero() {
        let mut dataset = generate_dataset(10, 5);
        dataset.viscosity = vec![5.0; 10];
        let report = batch_variability(&dataset, ColumnId::Viscosity).unwrap();
        assert!(report.contains("standard deviation = 0.0000"));
    }

    #[test]
    fn batch_variability_needs_two_observations() {
        let dataset = generate_dataset(1, 5);
        assert!(matches!(
            batch_variability(&dataset, ColumnId::Viscosity),
            Err(AnalysisError::InsufficientData { found: 1, .. })
        ));
    }

    #[test]
    fn batch_variability_rejects_categorical_column() {
        let dataset = generate_dataset(10, 5);
        assert!(matches!(
            batch_variability(&dataset, ColumnId::FormulationType),
            Err(AnalysisError::NotNumeric(ColumnId::FormulationType))
        ));
    }
}

// src/data_analysis/descriptive.rs
