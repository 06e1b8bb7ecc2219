// src/data_analysis/regression.rs

use ndarray::{Array1, Array2};
use statrs::distribution::{ContinuousCDF, StudentsT};

use crate::constants::RANK_PIVOT_TOLERANCE;
use crate::data_analysis::descriptive::mean;
use crate::data_input::dataset::{ColumnId, FormulationDataset};
use crate::types::{AnalysisError, AnalysisResult};

/// One row of the fitted coefficient table.
#[derive(Debug, Clone)]
pub struct CoefficientEntry {
    /// "(Intercept)" or the predictor column name.
    pub term: String,
    pub estimate: f64,
    pub std_error: f64,
    pub t_stat: f64,
    pub p_value: f64,
}

/// Ordinary least squares fit summary.
#[derive(Debug, Clone)]
pub struct RegressionResult {
    pub response_column: ColumnId,
    pub coefficients: Vec<CoefficientEntry>,
    pub r_squared: f64,
    pub adj_r_squared: f64,
    pub residual_std_error: f64,
    pub df_residual: usize,
}

/// Fits an ordinary least squares regression of a response on one or more
/// predictor columns, with an intercept term.
///
/// Fails on a rank-deficient design matrix (collinear or constant
/// predictors) or when fewer rows than free parameters remain.
pub fn linear_regression(
    dataset: &FormulationDataset,
    response_column: ColumnId,
    predictor_columns: &[ColumnId],
) -> AnalysisResult<RegressionResult> {
    if predictor_columns.is_empty() {
        return Err(AnalysisError::NoPredictors);
    }

    let response = dataset.numeric_column(response_column)?;
    let predictors: Vec<Vec<f64>> = predictor_columns
        .iter()
        .map(|&column| dataset.numeric_column(column))
        .collect::<AnalysisResult<_>>()?;

    let n = response.len();
    let terms = predictor_columns.len() + 1;
    if n < terms + 1 {
        return Err(AnalysisError::InsufficientData {
            column: response_column,
            needed: terms + 1,
            found: n,
        });
    }

    // Design matrix with a leading intercept column.
    let design = Array2::from_shape_fn((n, terms), |(row, col)| {
        if col == 0 {
            1.0
        } else {
            predictors[col - 1][row]
        }
    });
    let y = Array1::from(response);

    let xtx = design.t().dot(&design);
    let xty = design.t().dot(&y);

    let term_name = |index: usize| -> String {
        if index == 0 {
            "(Intercept)".to_string()
        } else {
            predictor_columns[index - 1].name().to_string()
        }
    };

    let xtx_inv =
        invert_symmetric(&xtx).map_err(|col| AnalysisError::RankDeficient(term_name(col)))?;
    let beta = xtx_inv.dot(&xty);

    let fitted = design.dot(&beta);
    let residuals = &y - &fitted;
    let sse: f64 = residuals.iter().map(|r| r * r).sum();
    let y_mean = mean(y.as_slice().unwrap_or(&[]));
    let sst: f64 = y.iter().map(|v| (v - y_mean).powi(2)).sum();

    let df_residual = n - terms;
    let sigma2 = sse / df_residual as f64;
    let residual_std_error = sigma2.sqrt();

    let t_dist = StudentsT::new(0.0, 1.0, df_residual as f64).ok();
    let coefficients = (0..terms)
        .map(|index| {
            let estimate = beta[index];
            let std_error = (sigma2 * xtx_inv[(index, index)]).sqrt();
            let t_stat = if std_error == 0.0 {
                0.0
            } else {
                estimate / std_error
            };
            let p_value = match &t_dist {
                Some(dist) => (2.0 * (1.0 - dist.cdf(t_stat.abs()))).clamp(0.0, 1.0),
                None => f64::NAN,
            };
            CoefficientEntry {
                term: term_name(index),
                estimate,
                std_error,
                t_stat,
                p_value,
            }
        })
        .collect();

    let r_squared = if sst == 0.0 { 1.0 } else { 1.0 - sse / sst };
    let adj_r_squared =
        1.0 - (1.0 - r_squared) * (n as f64 - 1.0) / (n as f64 - terms as f64);

    Ok(RegressionResult {
        response_column,
        coefficients,
        r_squared,
        adj_r_squared,
        residual_std_error,
        df_residual,
    })
}

/// Inverts a symmetric positive semi-definite matrix by Gauss-Jordan
/// elimination with partial pivoting. `Err(col)` reports the column whose
/// pivot fell below the rank tolerance.
fn invert_symmetric(matrix: &Array2<f64>) -> Result<Array2<f64>, usize> {
    let size = matrix.nrows();
    let mut work = matrix.clone();
    let mut inverse = Array2::<f64>::eye(size);

    // Scale the tolerance to the matrix magnitude so the rank check is not
    // sensitive to the units of the predictor columns.
    let scale = matrix
        .iter()
        .fold(0.0f64, |acc, v| acc.max(v.abs()))
        .max(1.0);
    let tolerance = RANK_PIVOT_TOLERANCE * scale;

    for col in 0..size {
        // Partial pivoting within the remaining rows.
        let mut pivot_row = col;
        for candidate in col + 1..size {
            if work[(candidate, col)].abs() > work[(pivot_row, col)].abs() {
                pivot_row = candidate;
            }
        }
        if work[(pivot_row, col)].abs() < tolerance {
            return Err(col);
        }
        if pivot_row != col {
            for k in 0..size {
                work.swap((pivot_row, k), (col, k));
                inverse.swap((pivot_row, k), (col, k));
            }
        }

        let pivot = work[(col, col)];
        for k in 0..size {
            work[(col, k)] /= pivot;
            inverse[(col, k)] /= pivot;
        }
        for row in 0..size {
            if row == col {
                continue;
            }
            let factor = work[(row, col)];
            if factor == 0.0 {
                continue;
            }
            for k in 0..size {
                work[(row, k)] -= factor * work[(col, k)];
                inverse[(row, k)] -= factor * inverse[(col, k)];
            }
        }
    }
    Ok(inverse)
}


// src/data_analysis/regression.rs
