// src/data_input/dataset.rs

use std::fmt;

use crate::types::{AnalysisError, AnalysisResult};

/// Categorical levels used by the synthetic generator for `Formulation_Type`.
pub const FORMULATION_TYPE_LEVELS: [&str; 2] = ["Type A", "Type B"];

/// Categorical levels used by the synthetic generator for `Storage_Condition`.
pub const STORAGE_CONDITION_LEVELS: [&str; 3] = ["Refrigerated", "Room Temp", "Accelerated"];

/// Typed identifier for each column of the formulation schema.
///
/// Column references are resolved at compile time through this enum; the
/// string world enters only through [`ColumnId::from_name`], which fails
/// fast with a structured error for names outside the schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnId {
    Time,
    ExcipientConcentration,
    DrugRelease,
    ParticleSize,
    FormulationType,
    Viscosity,
    StabilityIndex,
    StorageCondition,
    Ph,
    DrugContent,
}

/// Whether a column carries numeric values or categorical labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Numeric,
    Categorical,
}

impl ColumnId {
    /// Every column of the schema, in table order.
    pub const ALL: [ColumnId; 10] = [
        ColumnId::Time,
        ColumnId::ExcipientConcentration,
        ColumnId::DrugRelease,
        ColumnId::ParticleSize,
        ColumnId::FormulationType,
        ColumnId::Viscosity,
        ColumnId::StabilityIndex,
        ColumnId::StorageCondition,
        ColumnId::Ph,
        ColumnId::DrugContent,
    ];

    /// The column's header name as it appears in CSV input.
    pub fn name(self) -> &'static str {
        match self {
            ColumnId::Time => "Time",
            ColumnId::ExcipientConcentration => "Excipient_Concentration",
            ColumnId::DrugRelease => "Drug_Release",
            ColumnId::ParticleSize => "Particle_Size",
            ColumnId::FormulationType => "Formulation_Type",
            ColumnId::Viscosity => "Viscosity",
            ColumnId::StabilityIndex => "Stability_Index",
            ColumnId::StorageCondition => "Storage_Condition",
            ColumnId::Ph => "pH",
            ColumnId::DrugContent => "Drug_Content",
        }
    }

    /// Resolves a header name to a typed column identifier.
    pub fn from_name(name: &str) -> AnalysisResult<ColumnId> {
        ColumnId::ALL
            .iter()
            .copied()
            .find(|c| c.name() == name)
            .ok_or_else(|| AnalysisError::UnknownColumn(name.to_string()))
    }

    pub fn kind(self) -> ColumnKind {
        match self {
            ColumnId::FormulationType | ColumnId::StorageCondition => ColumnKind::Categorical,
            _ => ColumnKind::Numeric,
        }
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An in-memory formulation dataset: one `Vec` per schema column, all of
/// equal length. The toolkit never mutates it; every operation borrows it.
#[derive(Debug, Default, Clone)]
pub struct FormulationDataset {
    pub time: Vec<i64>,
    pub excipient_concentration: Vec<f64>,
    pub drug_release: Vec<f64>,
    pub particle_size: Vec<f64>,
    pub formulation_type: Vec<String>,
    pub viscosity: Vec<f64>,
    pub stability_index: Vec<f64>,
    pub storage_condition: Vec<String>,
    pub ph: Vec<f64>,
    pub drug_content: Vec<f64>,
}

impl FormulationDataset {
    /// Number of rows. All columns share this length on a well-formed dataset.
    pub fn rows(&self) -> usize {
        self.time.len()
    }

    /// Checks the equal-length invariant across all ten columns.
    pub fn is_well_formed(&self) -> bool {
        let n = self.time.len();
        self.excipient_concentration.len() == n
            && self.drug_release.len() == n
            && self.particle_size.len() == n
            && self.formulation_type.len() == n
            && self.viscosity.len() == n
            && self.stability_index.len() == n
            && self.storage_condition.len() == n
            && self.ph.len() == n
            && self.drug_content.len() == n
    }

    /// Returns a numeric column as `f64` values (`Time` is widened from its
    /// integer representation). Categorical columns are a kind error.
    pub fn numeric_column(&self, column: ColumnId) -> AnalysisResult<Vec<f64>> {
        match column {
            ColumnId::Time => Ok(self.time.iter().map(|&t| t as f64).collect()),
            ColumnId::ExcipientConcentration => Ok(self.excipient_concentration.clone()),
            ColumnId::DrugRelease => Ok(self.drug_release.clone()),
            ColumnId::ParticleSize => Ok(self.particle_size.clone()),
            ColumnId::Viscosity => Ok(self.viscosity.clone()),
            ColumnId::StabilityIndex => Ok(self.stability_index.clone()),
            ColumnId::Ph => Ok(self.ph.clone()),
            ColumnId::DrugContent => Ok(self.drug_content.clone()),
            ColumnId::FormulationType | ColumnId::StorageCondition => {
                Err(AnalysisError::NotNumeric(column))
            }
        }
    }

    /// Returns a categorical column's labels. Numeric columns are a kind error.
    pub fn categorical_column(&self, column: ColumnId) -> AnalysisResult<&[String]> {
        match column {
            ColumnId::FormulationType => Ok(&self.formulation_type),
            ColumnId::StorageCondition => Ok(&self.storage_condition),
            _ => Err(AnalysisError::NotCategorical(column)),
        }
    }

    /// Labels usable as grouping keys: categorical columns group by label,
    /// numeric columns group by distinct value (shortest round-trip
    /// formatting, so distinct values stay distinct keys).
    pub fn group_keys(&self, column: ColumnId) -> AnalysisResult<Vec<String>> {
        match column.kind() {
            ColumnKind::Categorical => Ok(self.categorical_column(column)?.to_vec()),
            ColumnKind::Numeric => Ok(self
                .numeric_column(column)?
                .iter()
                .map(|v| format!("{v}"))
                .collect()),
        }
    }
}

/// Distinct values of a grouping key in first-seen order.
pub fn distinct_levels(keys: &[String]) -> Vec<String> {
    let mut levels: Vec<String> = Vec::new();
    for key in keys {
        if !levels.iter().any(|l| l == key) {
            levels.push(key.clone());
        }
    }
    levels
}


// src/data_input/dataset.rs
