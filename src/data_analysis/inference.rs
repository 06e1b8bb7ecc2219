// src/data_analysis/inference.rs

use statrs::distribution::{ContinuousCDF, StudentsT};

use crate::constants::DEFAULT_CONFIDENCE_LEVEL;
use crate::data_analysis::descriptive::{mean, sample_std_dev};
use crate::data_input::dataset::{distinct_levels, ColumnId, FormulationDataset};
use crate::types::{AnalysisError, AnalysisResult};

/// Result of a two-sample Welch t test.
#[derive(Debug, Clone)]
pub struct TTestResult {
    pub group_column: ColumnId,
    pub response_column: ColumnId,
    pub group_labels: [String; 2],
    pub group_means: [f64; 2],
    pub group_counts: [usize; 2],
    pub t_stat: f64,
    pub df: f64,
    pub p_value: f64,
    /// First group mean minus second group mean.
    pub mean_difference: f64,
    pub ci_lower: f64,
    pub ci_upper: f64,
    pub confidence: f64,
}

/// Confidence interval for the mean of one numeric column.
#[derive(Debug, Clone)]
pub struct ConfidenceInterval {
    pub column: ColumnId,
    pub count: usize,
    pub mean: f64,
    pub half_width: f64,
    pub lower: f64,
    pub upper: f64,
    pub confidence: f64,
}

/// Two-sided p-value for a t statistic with `df` degrees of freedom.
fn two_sided_p(t_stat: f64, df: f64) -> f64 {
    match StudentsT::new(0.0, 1.0, df) {
        Ok(dist) => (2.0 * (1.0 - dist.cdf(t_stat.abs()))).clamp(0.0, 1.0),
        Err(_) => f64::NAN,
    }
}

/// Two-sided critical t value for the given confidence level.
fn t_critical(confidence: f64, df: f64) -> f64 {
    match StudentsT::new(0.0, 1.0, df) {
        Ok(dist) => dist.inverse_cdf(1.0 - (1.0 - confidence) / 2.0),
        Err(_) => f64::NAN,
    }
}

/// Compares the response means of the two groups defined by a grouping
/// column, using Welch's unequal-variance t test.
///
/// Fails unless the grouping column has exactly two levels and each group
/// has at least two observations.
pub fn compare_means(
    dataset: &FormulationDataset,
    group_column: ColumnId,
    response_column: ColumnId,
) -> AnalysisResult<TTestResult> {
    let keys = dataset.group_keys(group_column)?;
    let response = dataset.numeric_column(response_column)?;
    let levels = distinct_levels(&keys);
    if levels.len() != 2 {
        return Err(AnalysisError::WrongLevelCount {
            column: group_column,
            expected: 2,
            found: levels.len(),
        });
    }

    let split: Vec<Vec<f64>> = levels
        .iter()
        .map(|level| {
            keys.iter()
                .zip(&response)
                .filter(|(key, _)| *key == level)
                .map(|(_, value)| *value)
                .collect()
        })
        .collect();
    for group in &split {
        if group.len() < 2 {
            return Err(AnalysisError::InsufficientData {
                column: response_column,
                needed: 2,
                found: group.len(),
            });
        }
    }

    let (m1, m2) = (mean(&split[0]), mean(&split[1]));
    let (s1, s2) = (sample_std_dev(&split[0]), sample_std_dev(&split[1]));
    let (n1, n2) = (split[0].len() as f64, split[1].len() as f64);

    let se2 = s1.powi(2) / n1 + s2.powi(2) / n2;
    let t_stat = if se2 == 0.0 {
        0.0
    } else {
        (m1 - m2) / se2.sqrt()
    };

    // Welch-Satterthwaite degrees of freedom; falls back to the pooled df
    // when both group variances are zero.
    let denominator =
        (s1.powi(2) / n1).powi(2) / (n1 - 1.0) + (s2.powi(2) / n2).powi(2) / (n2 - 1.0);
    let df = if denominator == 0.0 {
        n1 + n2 - 2.0
    } else {
        se2.powi(2) / denominator
    };

    let confidence = DEFAULT_CONFIDENCE_LEVEL;
    let mean_difference = m1 - m2;
    let margin = t_critical(confidence, df) * se2.sqrt();

    Ok(TTestResult {
        group_column,
        response_column,
        group_labels: [levels[0].clone(), levels[1].clone()],
        group_means: [m1, m2],
        group_counts: [split[0].len(), split[1].len()],
        t_stat,
        df,
        p_value: two_sided_p(t_stat, df),
        mean_difference,
        ci_lower: mean_difference - margin,
        ci_upper: mean_difference + margin,
        confidence,
    })
}

/// Confidence interval for the mean of a numeric column, using the t
/// distribution with n - 1 degrees of freedom.
pub fn confidence_interval(
    dataset: &FormulationDataset,
    column: ColumnId,
    confidence: f64,
) -> AnalysisResult<ConfidenceInterval> {
    let values = dataset.numeric_column(column)?;
    if values.len() < 2 {
        return Err(AnalysisError::InsufficientData {
            column,
            needed: 2,
            found: values.len(),
        });
    }

    let n = values.len() as f64;
    let m = mean(&values);
    let standard_error = sample_std_dev(&values) / n.sqrt();
    let half_width = t_critical(confidence, n - 1.0) * standard_error;

    Ok(ConfidenceInterval {
        column,
        count: values.len(),
        mean: m,
        half_width,
        lower: m - half_width,
        upper: m + half_width,
        confidence,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_input::synthetic::generate_dataset;

    fn two_group_dataset(a: &[f64], b: &[f64]) -> FormulationDataset {
        let mut dataset = generate_dataset(a.len() + b.len(), 11);
        dataset.drug_release = a.iter().chain(b).copied().collect();
        dataset.formulation_type = std::iter::repeat("Type A".to_string())
            .take(a.len())
            .chain(std::iter::repeat("Type B".to_string()).take(b.len()))
            .collect();
        dataset
    }

    #[test]
    fn welch_t_test_matches_reference_values() {
        // Reference computed with R: t.test(c(1,2,3,4,5), c(2,4,6,8,10))
        let dataset = two_group_dataset(&[1.0, 2.0, 3.0, 4.0, 5.0], &[2.0, 4.0, 6.0, 8.0, 10.0]);
        let result =
            compare_means(&dataset, ColumnId::FormulationType, ColumnId::DrugRelease).unwrap();

        assert!((result.t_stat - (-1.8974)).abs() < 1e-3);
        assert!((result.mean_difference - (-3.0)).abs() < 1e-12);
        assert!((0.0..=1.0).contains(&result.p_value));
        assert!(result.ci_lower < result.mean_difference);
        assert!(result.ci_upper > result.mean_difference);
    }

    #[test]
    fn identical_groups_give_zero_t_and_p_of_one() {
        let dataset = two_group_dataset(&[5.0, 5.0, 5.0], &[5.0, 5.0, 5.0]);
        let result =
            compare_means(&dataset, ColumnId::FormulationType, ColumnId::DrugRelease).unwrap();
        assert_eq!(result.t_stat, 0.0);
        assert!((result.p_value - 1.0).abs() < 1e-12);
    }

    #[test]
    fn three_level_grouping_column_is_rejected() {
        let dataset = generate_dataset(60, 2);
        let err =
            compare_means(&dataset, ColumnId::StorageCondition, ColumnId::DrugRelease).unwrap_err();
        assert!(matches!(
            err,
            AnalysisError::WrongLevelCount {
                expected: 2,
                found: 3,
                ..
            }
        ));
    }

    #[test]
    fn interval_brackets_the_sample_mean() {
        let dataset = generate_dataset(100, 9);
        let interval = confidence_interval(&dataset, ColumnId::DrugRelease, 0.95).unwrap();
        assert!(interval.lower <= interval.mean);
        assert!(interval.mean <= interval.upper);
        assert!(interval.half_width > 0.0);
    }

    #[test]
    fn interval_needs_two_observations() {
        let dataset = generate_dataset(1, 9);
        assert!(matches!(
            confidence_interval(&dataset, ColumnId::DrugRelease, 0.95),
            Err(AnalysisError::InsufficientData { found: 1, .. })
        ));
    }

    #[test]
    fn repeated_calls_are_bit_identical() {
        let dataset = generate_dataset(100, 4);
        let a = compare_means(&dataset, ColumnId::FormulationType, ColumnId::DrugRelease).unwrap();
        let b = compare_means(&dataset, ColumnId::FormulationType, ColumnId::DrugRelease).unwrap();
        assert_eq!(a.t_stat.to_bits(), b.t_stat.to_bits());
        assert_eq!(a.p_value.to_bits(), b.p_value.to_bits());
        assert_eq!(a.ci_lower.to_bits(), b.ci_lower.to_bits());
    }
}

// src/data_analysis/inference.rs
