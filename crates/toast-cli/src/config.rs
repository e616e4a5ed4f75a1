//! Tournament configuration: divisions, the award catalog, script tag
//! names, and render settings, loaded from `tournament.json`.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail, ensure};
use serde::Deserialize;

use toast_model::{AwardAllocation, AwardDefinition, AwardKind, AwardScope, Division};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TournamentConfig {
    pub tournament_name: String,
    /// Alternate announcement lines between two presenters.
    #[serde(default)]
    pub dual_presenter: bool,
    #[serde(default = "default_template_file")]
    pub template_file: String,
    #[serde(default = "default_output_file")]
    pub output_file: String,
    /// Placeholders that must be bound for the render to succeed.
    #[serde(default)]
    pub critical_variables: Vec<String>,
    pub divisions: Vec<DivisionSource>,
    pub awards: Vec<AwardConfig>,
}

fn default_template_file() -> String {
    "template.html".to_string()
}

fn default_output_file() -> String {
    "ceremony.html".to_string()
}

/// One division's data folder. `division` stays `None` for an undivided
/// tournament, which must then have exactly one entry.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DivisionSource {
    #[serde(default)]
    pub division: Option<Division>,
    pub data_dir: PathBuf,
    /// Advancing slots allotted to this division, when the event tracks
    /// advancement.
    #[serde(default)]
    pub advancing_allowed: Option<u32>,
}

/// Template placeholder names an award's winner lines bind to.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScriptTags {
    #[serde(default)]
    pub d1: Option<String>,
    #[serde(default)]
    pub d2: Option<String>,
    #[serde(default)]
    pub tournament: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AwardConfig {
    pub id: String,
    pub name: String,
    pub kind: AwardKind,
    pub scope: AwardScope,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub division_counts: BTreeMap<Division, u32>,
    #[serde(default)]
    pub tournament_count: Option<u32>,
    #[serde(default)]
    pub script_tags: ScriptTags,
}

impl AwardConfig {
    /// Build the resolver-facing definition, checking that the allocation
    /// style matches the scope.
    pub fn definition(&self) -> Result<AwardDefinition> {
        let allocation = match self.scope {
            AwardScope::Tournament => {
                let count = self.tournament_count.with_context(|| {
                    format!("award '{}': tournament scope requires tournament_count", self.id)
                })?;
                AwardAllocation::Tournament(count)
            }
            AwardScope::Division => {
                ensure!(
                    !self.division_counts.is_empty(),
                    "award '{}': division scope requires division_counts",
                    self.id
                );
                AwardAllocation::PerDivision(self.division_counts.clone())
            }
        };
        Ok(AwardDefinition {
            id: self.id.clone(),
            name: self.name.clone(),
            kind: self.kind,
            scope: self.scope,
            labels: self.labels.clone(),
            allocation,
        })
    }

    /// Placeholder name the winner lines bind to when resolved within the
    /// given division. Undivided tournaments bind through the `d1` tag.
    pub fn tag_for(&self, division: Option<Division>) -> Option<&str> {
        let tags = &self.script_tags;
        match self.scope {
            AwardScope::Tournament => tags.tournament.as_deref(),
            AwardScope::Division => match division.unwrap_or(Division::D1) {
                Division::D1 => tags.d1.as_deref(),
                Division::D2 => tags.d2.as_deref(),
            },
        }
    }
}

/// Read and check the configuration file.
pub fn load_config(path: &Path) -> Result<TournamentConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read configuration: {}", path.display()))?;
    let config: TournamentConfig = serde_json::from_str(&text)
        .with_context(|| format!("parse configuration: {}", path.display()))?;
    validate_config(&config)?;
    Ok(config)
}

fn validate_config(config: &TournamentConfig) -> Result<()> {
    ensure!(!config.divisions.is_empty(), "at least one division entry is required");
    ensure!(config.divisions.len() <= 2, "at most two division entries are supported");
    if config.divisions.len() == 2 {
        let first = config.divisions[0].division;
        let second = config.divisions[1].division;
        if first.is_none() || second.is_none() || first == second {
            bail!("two division entries must name distinct divisions");
        }
    }
    ensure!(!config.awards.is_empty(), "at least one award entry is required");
    for award in &config.awards {
        award.definition()?;
        if award.kind == AwardKind::Judged {
            ensure!(
                !award.labels.is_empty(),
                "award '{}': judged awards require selection labels",
                award.id
            );
        }
    }
    Ok(())
}
