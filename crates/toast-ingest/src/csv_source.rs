use std::path::{Path, PathBuf};

use csv::ReaderBuilder;
use tracing::debug;

use toast_model::{CellValue, CollectError, Result, Row, Table};

use crate::TableSource;

/// Reads named tables from a folder of CSV exports: table `TournamentData`
/// lives in `<root>/TournamentData.csv`, and so on.
#[derive(Debug, Clone)]
pub struct CsvTableSource {
    root: PathBuf,
}

impl CsvTableSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn table_path(&self, table: &str) -> PathBuf {
        self.root.join(format!("{table}.csv"))
    }
}

impl TableSource for CsvTableSource {
    fn read_table(&self, table: &str) -> Result<Table> {
        let path = self.table_path(table);
        if !path.exists() {
            return Err(CollectError::MissingTable(table.to_string()));
        }
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .from_path(&path)
            .map_err(|error| {
                CollectError::Message(format!("read {}: {error}", path.display()))
            })?;

        let headers: Vec<String> = reader
            .headers()
            .map_err(|error| {
                CollectError::Message(format!("read headers {}: {error}", path.display()))
            })?
            .iter()
            .map(|header| header.trim_matches('\u{feff}').trim().to_string())
            .collect();

        let mut out = Table::new(table, headers.clone());
        for (idx, record) in reader.records().enumerate() {
            let record = record.map_err(|error| CollectError::MalformedCell {
                table: table.to_string(),
                row: idx + 1,
                message: error.to_string(),
            })?;
            let mut row = Row::default();
            for (column, value) in headers.iter().zip(record.iter()) {
                row.set(column.clone(), parse_cell(value));
            }
            out.push_row(row);
        }
        debug!(table, rows = out.rows.len(), "read table");
        Ok(out)
    }
}

/// Parse a raw cell: empty becomes missing, numerics become numbers, the
/// rest stays text. Values are trimmed.
pub fn parse_cell(raw: &str) -> CellValue {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return CellValue::Missing;
    }
    match trimmed.parse::<f64>() {
        Ok(value) => CellValue::Number(value),
        Err(_) => CellValue::Text(trimmed.to_string()),
    }
}
