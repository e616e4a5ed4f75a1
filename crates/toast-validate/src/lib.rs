//! Validation of scoring and rubric inputs ahead of award resolution.
//!
//! All checks across all required tables run to completion before the
//! report is surfaced, so one pass shows every problem. Any accumulated
//! error blocks the downstream pipeline; warnings never do.

mod report_json;
mod specs;

pub use report_json::write_ceremony_report_json;
pub use specs::{ColumnSpec, TableSpec, ValueRule, scoring_table_specs};

use tracing::info;

use toast_ingest::TableSource;
use toast_model::{CeremonyReport, Division};

/// Validate every required table against its column constraints.
///
/// An unreadable table or missing column is recorded as an error and the
/// scan continues with the next table or column (batch accumulation, not
/// fail-fast).
pub fn validate(
    source: &dyn TableSource,
    specs: &[TableSpec],
    division: Option<Division>,
) -> CeremonyReport {
    let mut report = CeremonyReport::new();
    for spec in specs {
        validate_table(source, spec, division, &mut report);
    }
    info!(
        errors = report.error_count(),
        warnings = report.warning_count(),
        "validation finished"
    );
    report
}

fn validate_table(
    source: &dyn TableSource,
    spec: &TableSpec,
    division: Option<Division>,
    report: &mut CeremonyReport,
) {
    let context = match division {
        Some(division) => format!("{} ({division})", spec.table),
        None => spec.table.to_string(),
    };

    let table = match source.read_table(spec.table) {
        Ok(table) => table,
        Err(error) => {
            report.add_error(&context, format!("could not read table: {error}"));
            return;
        }
    };

    for column in spec.columns {
        if !table.has_column(column.name) {
            report.add_error(&context, format!("missing column: {}", column.name));
            continue;
        }
        let mut blanks = 0usize;
        let mut invalid = 0usize;
        for row in &table.rows {
            let cell = row.get(column.name);
            if cell.is_missing() {
                blanks += 1;
            } else if !column.rule.allows(cell) {
                invalid += 1;
            }
        }
        if blanks > 0 {
            report.add_error(&context, format!("{} has {blanks} blank cell(s)", column.name));
        }
        if invalid > 0 {
            report.add_error(
                &context,
                format!(
                    "{} has {invalid} value(s) outside {}",
                    column.name,
                    column.rule.describe()
                ),
            );
        }
    }
}
