use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{CollectError, Result};

/// A single cell read from a source table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Number(f64),
    Text(String),
    Missing,
}

impl CellValue {
    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// Integral numeric value, or `None` for text, missing, or fractional
    /// cells.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            CellValue::Number(value) if value.fract() == 0.0 => Some(*value as i64),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(value) => Some(value),
            _ => None,
        }
    }

    /// Human-readable rendition for messages and name fields. Integral
    /// numbers render without a trailing `.0`.
    pub fn as_display(&self) -> Option<String> {
        match self {
            CellValue::Text(value) => Some(value.clone()),
            CellValue::Number(value) if value.fract() == 0.0 => Some(format!("{}", *value as i64)),
            CellValue::Number(value) => Some(format!("{value}")),
            CellValue::Missing => None,
        }
    }
}

/// One table row: named cells keyed by column header.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub cells: BTreeMap<String, CellValue>,
}

impl Row {
    pub fn get(&self, column: &str) -> &CellValue {
        static MISSING: CellValue = CellValue::Missing;
        self.cells.get(column).unwrap_or(&MISSING)
    }

    pub fn set(&mut self, column: impl Into<String>, value: CellValue) {
        self.cells.insert(column.into(), value);
    }
}

/// An in-memory copy of one named source table. The header set is resolved
/// once at read time; consumers check required columns up front via
/// [`Table::require_columns`] rather than probing per row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub name: String,
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

impl Table {
    pub fn new(name: impl Into<String>, columns: Vec<String>) -> Self {
        Self {
            name: name.into(),
            columns,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.columns.iter().any(|name| name == column)
    }

    /// Fail fast with a [`CollectError::MissingColumn`] if any required
    /// header is absent.
    pub fn require_columns(&self, required: &[&str]) -> Result<()> {
        for column in required {
            if !self.has_column(column) {
                return Err(CollectError::MissingColumn {
                    table: self.name.clone(),
                    column: (*column).to_string(),
                });
            }
        }
        Ok(())
    }
}
