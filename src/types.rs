// src/types.rs
// Structured error type shared by every analysis and chart operation.

use thiserror::Error;

use crate::data_input::dataset::ColumnId;

/// Result alias used throughout the analysis layer.
pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// Failure taxonomy for the toolkit. Every operation propagates these
/// immediately to the caller; there is no local recovery or retry.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// A string column name that does not belong to the formulation schema.
    #[error("unknown column '{0}': not part of the formulation dataset schema")]
    UnknownColumn(String),

    /// A numeric operation was pointed at a categorical column.
    #[error("column '{0}' is not numeric")]
    NotNumeric(ColumnId),

    /// A grouping operation was pointed at a numeric column.
    #[error("column '{0}' is not categorical")]
    NotCategorical(ColumnId),

    /// A grouping column did not have the cardinality the test requires.
    #[error("grouping column '{column}' has {found} level(s), expected exactly {expected}")]
    WrongLevelCount {
        column: ColumnId,
        expected: usize,
        found: usize,
    },

    /// Fewer observations than the statistic needs.
    #[error("column '{column}' has {found} observation(s), need at least {needed}")]
    InsufficientData {
        column: ColumnId,
        needed: usize,
        found: usize,
    },

    /// Analysis of variance factor with a single distinct value.
    #[error("factor column '{0}' is constant; analysis of variance needs at least two levels")]
    ConstantFactor(ColumnId),

    /// Degenerate regression design (collinear or constant predictors).
    #[error("design matrix is rank deficient at term '{0}'")]
    RankDeficient(String),

    /// Regression called without predictor columns.
    #[error("linear regression needs at least one predictor column")]
    NoPredictors,

    /// A CSV cell that could not be parsed into the column's type.
    #[error("row {row}: cannot parse '{value}' for column '{column}'")]
    BadCell {
        row: usize,
        column: ColumnId,
        value: String,
    },

    /// The CSV header is missing a schema column.
    #[error("CSV input is missing required column '{0}'")]
    MissingCsvColumn(&'static str),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
