use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    Error,
    Warning,
}

/// One validation or resolution finding, tied to the table or division it
/// came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CeremonyIssue {
    pub severity: IssueSeverity,
    /// Table name or division label the issue was found in.
    pub context: String,
    pub message: String,
}

/// Accumulated issues for one run. Checks push into the report and keep
/// going; callers inspect [`CeremonyReport::has_errors`] once at stage
/// boundaries. Errors block rendering; warnings never do.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CeremonyReport {
    pub issues: Vec<CeremonyIssue>,
}

impl CeremonyReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_error(&mut self, context: &str, message: impl Into<String>) {
        self.issues.push(CeremonyIssue {
            severity: IssueSeverity::Error,
            context: context.to_string(),
            message: message.into(),
        });
    }

    pub fn add_warning(&mut self, context: &str, message: impl Into<String>) {
        self.issues.push(CeremonyIssue {
            severity: IssueSeverity::Warning,
            context: context.to_string(),
            message: message.into(),
        });
    }

    pub fn extend(&mut self, issues: impl IntoIterator<Item = CeremonyIssue>) {
        self.issues.extend(issues);
    }

    pub fn merge(&mut self, other: CeremonyReport) {
        self.issues.extend(other.issues);
    }

    pub fn error_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.severity == IssueSeverity::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.severity == IssueSeverity::Warning)
            .count()
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    pub fn errors(&self) -> impl Iterator<Item = &CeremonyIssue> {
        self.issues
            .iter()
            .filter(|issue| issue.severity == IssueSeverity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &CeremonyIssue> {
        self.issues
            .iter()
            .filter(|issue| issue.severity == IssueSeverity::Warning)
    }
}

/// Single place to decide how the two historically inconsistent checks are
/// classified. Defaults keep both advisory; the CLI can promote either to
/// `Error`, which blocks rendering through the normal report gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeverityPolicy {
    pub duplicate_award: IssueSeverity,
    pub count_mismatch: IssueSeverity,
}

impl Default for SeverityPolicy {
    fn default() -> Self {
        Self {
            duplicate_award: IssueSeverity::Warning,
            count_mismatch: IssueSeverity::Warning,
        }
    }
}
