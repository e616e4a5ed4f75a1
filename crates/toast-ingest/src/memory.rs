use std::collections::BTreeMap;

use toast_model::{CollectError, Result, Row, Table};

use crate::TableSource;
use crate::csv_source::parse_cell;

/// In-memory table source for tests and fixtures.
#[derive(Debug, Clone, Default)]
pub struct MemoryTableSource {
    tables: BTreeMap<String, Table>,
}

impl MemoryTableSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, table: Table) {
        self.tables.insert(table.name.clone(), table);
    }

    #[must_use]
    pub fn with_table(mut self, table: Table) -> Self {
        self.insert(table);
        self
    }
}

impl TableSource for MemoryTableSource {
    fn read_table(&self, table: &str) -> Result<Table> {
        self.tables
            .get(table)
            .cloned()
            .ok_or_else(|| CollectError::MissingTable(table.to_string()))
    }
}

/// Build a table from string cells, parsing each cell the same way the CSV
/// source does (empty string means missing).
pub fn table_from_rows(name: &str, columns: &[&str], rows: &[&[&str]]) -> Table {
    let mut table = Table::new(name, columns.iter().map(|c| (*c).to_string()).collect());
    for cells in rows {
        let mut row = Row::default();
        for (column, value) in columns.iter().zip(cells.iter()) {
            row.set((*column).to_string(), parse_cell(value));
        }
        table.push_row(row);
    }
    table
}
