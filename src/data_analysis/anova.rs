// src/data_analysis/anova.rs

use statrs::distribution::{ContinuousCDF, FisherSnedecor};

use crate::data_analysis::descriptive::mean;
use crate::data_input::dataset::{distinct_levels, ColumnId, FormulationDataset};
use crate::types::{AnalysisError, AnalysisResult};

/// One-way analysis of variance table.
#[derive(Debug, Clone)]
pub struct AnovaResult {
    pub response_column: ColumnId,
    pub factor_column: ColumnId,
    /// Number of distinct factor levels.
    pub levels: usize,
    pub ss_between: f64,
    pub ss_within: f64,
    pub ss_total: f64,
    pub df_between: usize,
    pub df_within: usize,
    pub ms_between: f64,
    pub ms_within: f64,
    pub f_stat: f64,
    pub p_value: f64,
}

/// One-way analysis of variance of a response against a factor column.
///
/// Groups are the distinct values of the factor, so both categorical
/// columns and discretized numeric factors are accepted. Fails when the
/// factor is constant or no within-group degrees of freedom remain.
pub fn anova(
    dataset: &FormulationDataset,
    response_column: ColumnId,
    factor_column: ColumnId,
) -> AnalysisResult<AnovaResult> {
    let keys = dataset.group_keys(factor_column)?;
    let response = dataset.numeric_column(response_column)?;
    let levels = distinct_levels(&keys);
    if levels.len() < 2 {
        return Err(AnalysisError::ConstantFactor(factor_column));
    }

    let n = response.len();
    let df_within = n.saturating_sub(levels.len());
    if df_within == 0 {
        return Err(AnalysisError::InsufficientData {
            column: response_column,
            needed: levels.len() + 1,
            found: n,
        });
    }

    let grand_mean = mean(&response);
    let mut ss_between = 0.0;
    let mut ss_within = 0.0;
    for level in &levels {
        let group: Vec<f64> = keys
            .iter()
            .zip(&response)
            .filter(|(key, _)| *key == level)
            .map(|(_, value)| *value)
            .collect();
        let group_mean = mean(&group);
        ss_between += group.len() as f64 * (group_mean - grand_mean).powi(2);
        ss_within += group.iter().map(|v| (v - group_mean).powi(2)).sum::<f64>();
    }

    let df_between = levels.len() - 1;
    let ms_between = ss_between / df_between as f64;
    let ms_within = ss_within / df_within as f64;
    let f_stat = if ms_within == 0.0 {
        f64::INFINITY
    } else {
        ms_between / ms_within
    };

    let p_value = if f_stat.is_finite() {
        match FisherSnedecor::new(df_between as f64, df_within as f64) {
            Ok(dist) => (1.0 - dist.cdf(f_stat)).clamp(0.0, 1.0),
            Err(_) => f64::NAN,
        }
    } else {
        0.0
    };

    Ok(AnovaResult {
        response_column,
        factor_column,
        levels: levels.len(),
        ss_between,
        ss_within,
        ss_total: ss_between + ss_within,
        df_between,
        df_within,
        ms_between,
        ms_within,
        f_stat,
        p_value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_input::synthetic::generate_dataset;

    #[test]
    fn anova_matches_reference_values() {
        // Reference computed with R:
        //   summary(aov(y ~ g)) for y = (1,2,3, 2,3,4, 6,7,8), g = (a,a,a, b,b,b, c,c,c)
        //   F = 21.0 on (2, 6) df
        let mut dataset = generate_dataset(9, 13);
        dataset.drug_release = vec![1.0, 2.0, 3.0, 2.0, 3.0, 4.0, 6.0, 7.0, 8.0];
        dataset.storage_condition = ["Refrigerated", "Room Temp", "Accelerated"]
            .iter()
            .flat_map(|s| std::iter::repeat(s.to_string()).take(3))
            .collect();

        let result = anova(&dataset, ColumnId::DrugRelease, ColumnId::StorageCondition).unwrap();
        assert_eq!(result.levels, 3);
        assert_eq!(result.df_between, 2);
        assert_eq!(result.df_within, 6);
        assert!((result.ss_between - 42.0).abs() < 1e-9);
        assert!((result.ss_within - 6.0).abs() < 1e-9);
        assert!((result.f_stat - 21.0).abs() < 1e-9);
        assert!((0.0..=1.0).contains(&result.p_value));
        assert!(result.p_value < 0.05);
    }

    #[test]
    fn constant_factor_is_rejected() {
        let mut dataset = generate_dataset(10, 13);
        dataset.formulation_type = vec!["Type A".to_string(); 10];
        assert!(matches!(
            anova(&dataset, ColumnId::DrugRelease, ColumnId::FormulationType),
            Err(AnalysisError::ConstantFactor(ColumnId::FormulationType))
        ));
    }

    #[test]
    fn numeric_factor_groups_by_distinct_value() {
        let mut dataset = generate_dataset(6, 13);
        dataset.excipient_concentration = vec![0.1, 0.1, 0.1, 0.3, 0.3, 0.3];
        let result = anova(
            &dataset,
            ColumnId::DrugRelease,
            ColumnId::ExcipientConcentration,
        )
        .unwrap();
        assert_eq!(result.levels, 2);
        assert!((result.ss_total - (result.ss_between + result.ss_within)).abs() < 1e-9);
    }

    #[test]
    fn all_singleton_groups_are_rejected() {
        // Every row its own factor level leaves no within-group df.
        let mut dataset = generate_dataset(5, 13);
        dataset.excipient_concentration = vec![0.1, 0.2, 0.3, 0.4, 0.5];
        assert!(matches!(
            anova(
                &dataset,
                ColumnId::DrugRelease,
                ColumnId::ExcipientConcentration
            ),
            Err(AnalysisError::InsufficientData { .. })
        ));
    }
}

// src/data_analysis/anova.rs
