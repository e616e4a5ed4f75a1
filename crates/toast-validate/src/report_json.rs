use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::Utc;
use serde::Serialize;

use toast_model::{CeremonyReport, IssueSeverity};

const REPORT_SCHEMA: &str = "toast.ceremony-report";
const REPORT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Serialize)]
struct CeremonyReportPayload<'a> {
    schema: &'static str,
    schema_version: u32,
    generated_at: String,
    tournament: &'a str,
    error_count: usize,
    warning_count: usize,
    issues: Vec<IssueJson<'a>>,
}

#[derive(Debug, Serialize)]
struct IssueJson<'a> {
    severity: IssueSeverity,
    context: &'a str,
    message: &'a str,
}

/// Write the run's issue report as a machine-readable JSON sidecar.
pub fn write_ceremony_report_json(
    output_dir: &Path,
    tournament: &str,
    report: &CeremonyReport,
) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)?;
    let output_path = output_dir.join("ceremony_report.json");
    let payload = CeremonyReportPayload {
        schema: REPORT_SCHEMA,
        schema_version: REPORT_SCHEMA_VERSION,
        generated_at: Utc::now().to_rfc3339(),
        tournament,
        error_count: report.error_count(),
        warning_count: report.warning_count(),
        issues: report
            .issues
            .iter()
            .map(|issue| IssueJson {
                severity: issue.severity,
                context: &issue.context,
                message: &issue.message,
            })
            .collect(),
    };
    let json = serde_json::to_string_pretty(&payload)?;
    std::fs::write(&output_path, format!("{json}\n"))?;
    Ok(output_path)
}
