use std::path::PathBuf;

use toast_model::{CeremonyReport, Division};

/// Result of one pipeline run, consumed by the summary printer and the
/// exit-code decision.
#[derive(Debug)]
pub struct RunResult {
    pub tournament_name: String,
    pub divisions: Vec<DivisionSummary>,
    pub report: CeremonyReport,
    /// Distinct template variables bound during composition.
    pub variables_bound: usize,
    /// Written script, absent on errors or dry runs.
    pub output_path: Option<PathBuf>,
    /// Written issue report sidecar, absent only on dry runs.
    pub report_path: Option<PathBuf>,
}

#[derive(Debug)]
pub struct DivisionSummary {
    pub division: Option<Division>,
    pub teams: usize,
    pub advancing: usize,
    pub alternates: usize,
    pub winners: usize,
}
