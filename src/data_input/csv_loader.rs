// src/data_input/csv_loader.rs

use std::path::Path;

use csv::{ReaderBuilder, WriterBuilder};

use crate::data_input::dataset::{ColumnId, ColumnKind, FormulationDataset};
use crate::types::{AnalysisError, AnalysisResult};

/// Parses a headered CSV file into a formulation dataset.
///
/// All ten schema columns must be present in the header (any order, extra
/// columns are ignored). Unparseable numeric cells fail fast with the row
/// and column that violated the schema.
pub fn load_dataset(input_file_path: &Path) -> AnalysisResult<FormulationDataset> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(input_file_path)?;

    // --- Header Index Mapping ---
    let headers = reader.headers()?.clone();
    let mut column_indices: [Option<usize>; 10] = [None; 10];
    for (idx, header) in headers.iter().enumerate() {
        if let Ok(column) = ColumnId::from_name(header) {
            let slot = ColumnId::ALL.iter().position(|c| *c == column);
            if let Some(slot) = slot {
                column_indices[slot] = Some(idx);
            }
        }
    }
    for (slot, column) in ColumnId::ALL.iter().enumerate() {
        if column_indices[slot].is_none() {
            return Err(AnalysisError::MissingCsvColumn(column.name()));
        }
    }

    let mut dataset = FormulationDataset::default();
    for (row_index, record) in reader.records().enumerate() {
        let record = record?;
        for (slot, column) in ColumnId::ALL.iter().enumerate() {
            let csv_index = column_indices[slot].unwrap_or(slot);
            let cell = record.get(csv_index).unwrap_or("");
            push_cell(&mut dataset, *column, cell, row_index)?;
        }
    }
    Ok(dataset)
}

/// Writes a dataset back out as a headered CSV file.
pub fn write_dataset(dataset: &FormulationDataset, output_file_path: &Path) -> AnalysisResult<()> {
    let mut writer = WriterBuilder::new().from_path(output_file_path)?;
    writer.write_record(ColumnId::ALL.iter().map(|c| c.name()))?;

    for row in 0..dataset.rows() {
        writer.write_record([
            dataset.time[row].to_string(),
            dataset.excipient_concentration[row].to_string(),
            dataset.drug_release[row].to_string(),
            dataset.particle_size[row].to_string(),
            dataset.formulation_type[row].clone(),
            dataset.viscosity[row].to_string(),
            dataset.stability_index[row].to_string(),
            dataset.storage_condition[row].clone(),
            dataset.ph[row].to_string(),
            dataset.drug_content[row].to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

fn push_cell(
    dataset: &mut FormulationDataset,
    column: ColumnId,
    cell: &str,
    row: usize,
) -> AnalysisResult<()> {
    let bad_cell = || AnalysisError::BadCell {
        row,
        column,
        value: cell.to_string(),
    };

    if column.kind() == ColumnKind::Numeric && column != ColumnId::Time {
        let value: f64 = cell.parse().map_err(|_| bad_cell())?;
        match column {
            ColumnId::ExcipientConcentration => dataset.excipient_concentration.push(value),
            ColumnId::DrugRelease => dataset.drug_release.push(value),
            ColumnId::ParticleSize => dataset.particle_size.push(value),
            ColumnId::Viscosity => dataset.viscosity.push(value),
            ColumnId::StabilityIndex => dataset.stability_index.push(value),
            ColumnId::Ph => dataset.ph.push(value),
            ColumnId::DrugContent => dataset.drug_content.push(value),
            _ => {}
        }
        return Ok(());
    }

    match column {
        ColumnId::Time => dataset.time.push(cell.parse().map_err(|_| bad_cell())?),
        ColumnId::FormulationType => dataset.formulation_type.push(cell.to_string()),
        ColumnId::StorageCondition => dataset.storage_condition.push(cell.to_string()),
        _ => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_input::synthetic::generate_dataset;

    #[test]
    fn writer_and_loader_round_trip() {
        let dataset = generate_dataset(25, 7);
        let dir = std::env::temp_dir();
        let path = dir.join("formulation_round_trip.csv");

        write_dataset(&dataset, &path).unwrap();
        let reloaded = load_dataset(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(reloaded.rows(), dataset.rows());
        assert!(reloaded.is_well_formed());
        assert_eq!(reloaded.time, dataset.time);
        assert_eq!(reloaded.formulation_type, dataset.formulation_type);
        for (a, b) in reloaded.drug_release.iter().zip(&dataset.drug_release) {
            assert!((a - b).abs() < 1e-12);
        }
    }

    #[test]
    fn loader_reports_missing_schema_column() {
        let dir = std::env::temp_dir();
        let path = dir.join("formulation_missing_column.csv");
        std::fs::write(&path, "Time,Viscosity\n1,1000.0\n").unwrap();

        let err = load_dataset(&path).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(matches!(err, AnalysisError::MissingCsvColumn(_)));
    }

    #[test]
    fn loader_reports_bad_numeric_cell() {
        let dir = std::env::temp_dir();
        let path = dir.join("formulation_bad_cell.csv");
        let header = "Time,Excipient_Concentration,Drug_Release,Particle_Size,Formulation_Type,\
                      Viscosity,Stability_Index,Storage_Condition,pH,Drug_Content";
        let row = "1,0.2,not-a-number,150.0,Type A,1200.0,92.0,Room Temp,7.0,98.5";
        std::fs::write(&path, format!("{header}\n{row}\n")).unwrap();

        let err = load_dataset(&path).unwrap_err();
        std::fs::remove_file(&path).ok();
        match err {
            AnalysisError::BadCell { row, column, value } => {
                assert_eq!(row, 0);
                assert_eq!(column, ColumnId::DrugRelease);
                assert_eq!(value, "not-a-number");
            }
            other => panic!("expected BadCell, got {other:?}"),
        }
    }
}

// src/data_input/csv_loader.rs
