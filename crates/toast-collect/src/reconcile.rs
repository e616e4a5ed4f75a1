use std::collections::BTreeMap;

use tracing::debug;

use toast_ingest::{TableSource, columns, tables};
use toast_model::{
    AwardDefinition, AwardKind, AwardScope, CeremonyIssue, Division, IssueSeverity, Result,
    SeverityPolicy, TeamRecord,
};

use crate::resolver::issue_context;
use crate::rows::team_identity;

/// Explicit accumulator for tournament-scoped award totals. Resolution runs
/// once per division; the state collects per-award winner counts and the
/// final comparison against the allocation happens in [`finish`].
///
/// [`finish`]: ReconciliationState::finish
#[derive(Debug, Default)]
pub struct ReconciliationState {
    totals: BTreeMap<String, u32>,
}

impl ReconciliationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record how many winners one division resolved for an award.
    /// Division-scoped awards are not reconciled and are ignored here.
    pub fn record(&mut self, definition: &AwardDefinition, resolved: usize) {
        if definition.scope != AwardScope::Tournament {
            return;
        }
        *self.totals.entry(definition.id.clone()).or_insert(0) += resolved as u32;
    }

    /// Compare aggregated totals against each tournament-scoped allocation,
    /// and surface judged-award label gaps once per award rather than per
    /// division. Neither deficit nor surplus blocks by itself; severity
    /// comes from the policy.
    pub fn finish(
        self,
        catalog: &[AwardDefinition],
        policy: SeverityPolicy,
    ) -> Vec<CeremonyIssue> {
        let mut issues = Vec::new();
        for definition in catalog
            .iter()
            .filter(|definition| definition.scope == AwardScope::Tournament)
        {
            let allocated = definition.count_for(None);
            let total = self.totals.get(&definition.id).copied().unwrap_or(0);
            debug!(award = %definition.name, total, allocated, "reconciling tournament award");
            if definition.kind == AwardKind::Judged {
                for place in 1..=allocated {
                    if definition.label_for_place(place).is_none() {
                        issues.push(CeremonyIssue {
                            severity: IssueSeverity::Warning,
                            context: "Tournament".to_string(),
                            message: format!(
                                "{} has no selection label defined for place {place}",
                                definition.name
                            ),
                        });
                    }
                }
            }
            if total < allocated {
                issues.push(CeremonyIssue {
                    severity: policy.count_mismatch,
                    context: "Tournament".to_string(),
                    message: format!(
                        "{}: {total} selected, {allocated} allocated ({} under-allocated)",
                        definition.name,
                        allocated - total
                    ),
                });
            } else if total > allocated {
                issues.push(CeremonyIssue {
                    severity: policy.count_mismatch,
                    context: "Tournament".to_string(),
                    message: format!(
                        "{}: {total} selected, {allocated} allocated ({} over-allocated)",
                        definition.name,
                        total - allocated
                    ),
                });
            }
        }
        issues
    }
}

/// Scan a division's award-selection column for values assigned to more
/// than one team. Each offending label is reported once, naming every team
/// that carries it.
pub fn detect_duplicate_awards(
    source: &dyn TableSource,
    division: Option<Division>,
    policy: SeverityPolicy,
) -> Result<Vec<CeremonyIssue>> {
    let table = source.read_table(tables::TOURNAMENT_DATA)?;
    table.require_columns(&[columns::TEAM_NUMBER, columns::TEAM_NAME, columns::AWARD])?;

    let mut by_label: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for (idx, row) in table.rows.iter().enumerate() {
        let Some(label) = row.get(columns::AWARD).as_text() else {
            continue;
        };
        let (team_number, team_name) = team_identity(&table, idx, row)?;
        by_label
            .entry(label.to_string())
            .or_default()
            .push(format!("team {team_number}, {team_name}"));
    }

    let context = issue_context(division);
    let mut issues = Vec::new();
    for (label, teams) in by_label {
        if teams.len() > 1 {
            issues.push(CeremonyIssue {
                severity: policy.duplicate_award,
                context: context.clone(),
                message: format!(
                    "award '{label}' assigned to {} teams: {}",
                    teams.len(),
                    teams.join("; ")
                ),
            });
        }
    }
    Ok(issues)
}

/// Check the advancing selection against the division's allotted count.
/// Selecting fewer than allotted is advisory; selecting more is an error.
pub fn check_advancing_count(
    advancing: &[TeamRecord],
    allowed: u32,
    division: Option<Division>,
) -> Vec<CeremonyIssue> {
    let context = issue_context(division);
    let selected = advancing.len() as u32;
    let mut issues = Vec::new();
    if selected < allowed {
        issues.push(CeremonyIssue {
            severity: IssueSeverity::Warning,
            context: context.clone(),
            message: format!(
                "{selected} advancing team(s) selected of {allowed} permitted"
            ),
        });
    } else if selected > allowed {
        issues.push(CeremonyIssue {
            severity: IssueSeverity::Error,
            context,
            message: format!(
                "{selected} advancing team(s) selected but only {allowed} permitted"
            ),
        });
    }
    issues
}

/// Advisory check on the alternate-advancer selection: exactly one is
/// expected, zero or several are worth a look.
pub fn check_alternates(
    alternates: &[TeamRecord],
    division: Option<Division>,
) -> Vec<CeremonyIssue> {
    let context = issue_context(division);
    match alternates.len() {
        1 => Vec::new(),
        0 => vec![CeremonyIssue {
            severity: IssueSeverity::Warning,
            context,
            message: "no alternate advancing team selected".to_string(),
        }],
        many => vec![CeremonyIssue {
            severity: IssueSeverity::Warning,
            context,
            message: format!("{many} alternate advancing teams selected (expected 1)"),
        }],
    }
}
