//! Ceremony generation pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Validate**: Check every scoring and rubric table, all divisions
//! 2. **Collect**: Read rosters, resolve award winners, reconcile counts
//! 3. **Compose**: Build announcement lines and template variables
//! 4. **Render**: Substitute placeholders with critical-variable gating
//! 5. **Write**: Emit the script and the issue report sidecar
//!
//! Validation errors stop the run before collection; later errors block the
//! write stage but the full report is still produced. Every stage takes
//! typed inputs and returns typed results.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use toast_collect::{
    ReconciliationState, check_advancing_count, check_alternates, detect_duplicate_awards,
    list_advancing, list_alternates, list_teams, resolve,
};
use toast_ingest::CsvTableSource;
use toast_model::{
    AwardDefinition, AwardKind, AwardScope, AwardWinner, CeremonyReport, Division, SeverityPolicy,
    TeamRecord,
};
use toast_report::{HighlightTracker, compose_team_list, compose_winners, render, write_script};
use toast_validate::{scoring_table_specs, validate, write_ceremony_report_json};

use crate::config::{AwardConfig, TournamentConfig};
use crate::types::{DivisionSummary, RunResult};

#[derive(Debug, Clone, Copy, Default)]
pub struct PipelineOptions {
    /// Validate and resolve but write nothing.
    pub dry_run: bool,
    pub policy: SeverityPolicy,
}

struct CollectedDivision {
    division: Option<Division>,
    teams: Vec<TeamRecord>,
    advancing: Vec<TeamRecord>,
    alternates: Vec<TeamRecord>,
    /// Winners per award, indexed into the configured award list.
    winners: Vec<(usize, Vec<AwardWinner>)>,
}

/// Run the whole pipeline for one tournament folder.
pub fn run(root: &Path, config: &TournamentConfig, options: &PipelineOptions) -> Result<RunResult> {
    let sources: Vec<(Option<Division>, CsvTableSource)> = config
        .divisions
        .iter()
        .map(|entry| (entry.division, CsvTableSource::new(root.join(&entry.data_dir))))
        .collect();

    let definitions = config
        .awards
        .iter()
        .map(AwardConfig::definition)
        .collect::<Result<Vec<_>>>()?;

    let mut report = CeremonyReport::new();

    {
        let _span = info_span!("validate").entered();
        for (division, source) in &sources {
            report.merge(validate(source, scoring_table_specs(), *division));
        }
    }
    if report.has_errors() {
        info!(
            errors = report.error_count(),
            "validation failed; skipping collection"
        );
        let report_path = write_report_sidecar(root, config, &report, options)?;
        return Ok(RunResult {
            tournament_name: config.tournament_name.clone(),
            divisions: Vec::new(),
            report,
            variables_bound: 0,
            output_path: None,
            report_path,
        });
    }

    let mut collected = Vec::with_capacity(sources.len());
    let mut reconciliation = ReconciliationState::new();
    {
        let _span = info_span!("collect").entered();
        for (entry, (division, source)) in config.divisions.iter().zip(&sources) {
            collected.push(collect_division(
                source,
                *division,
                entry.advancing_allowed,
                &definitions,
                options.policy,
                &mut reconciliation,
                &mut report,
            )?);
        }
        report.extend(reconciliation.finish(&definitions, options.policy));
    }

    let variables = {
        let _span = info_span!("compose").entered();
        compose_variables(config, &definitions, &collected, &mut report)
    };

    let outcome = {
        let _span = info_span!("render").entered();
        let template_path = root.join(&config.template_file);
        let template = std::fs::read_to_string(&template_path)
            .with_context(|| format!("read template: {}", template_path.display()))?;
        let critical: BTreeSet<String> = config.critical_variables.iter().cloned().collect();
        render(&template, &variables, &critical)
    };
    for name in &outcome.errors {
        report.add_error("Render", format!("missing critical variable: {name}"));
    }
    for name in &outcome.warnings {
        report.add_warning("Render", format!("missing variable (empty substitution): {name}"));
    }

    let mut output_path = None;
    if !options.dry_run
        && !report.has_errors()
        && let Some(text) = &outcome.text
    {
        let _span = info_span!("write").entered();
        let path = root.join(&config.output_file);
        write_script(&path, text).with_context(|| format!("write script: {}", path.display()))?;
        info!(path = %path.display(), "ceremony script written");
        output_path = Some(path);
    }
    // The issue sidecar goes out even when errors block the script, so the
    // caller can read what went wrong.
    let report_path = write_report_sidecar(root, config, &report, options)?;

    Ok(RunResult {
        tournament_name: config.tournament_name.clone(),
        divisions: collected.iter().map(summarize_division).collect(),
        report,
        variables_bound: variables.len(),
        output_path,
        report_path,
    })
}

fn write_report_sidecar(
    root: &Path,
    config: &TournamentConfig,
    report: &CeremonyReport,
    options: &PipelineOptions,
) -> Result<Option<std::path::PathBuf>> {
    if options.dry_run {
        return Ok(None);
    }
    let path = write_ceremony_report_json(root, &config.tournament_name, report)?;
    Ok(Some(path))
}

fn collect_division(
    source: &CsvTableSource,
    division: Option<Division>,
    advancing_allowed: Option<u32>,
    definitions: &[AwardDefinition],
    policy: SeverityPolicy,
    reconciliation: &mut ReconciliationState,
    report: &mut CeremonyReport,
) -> Result<CollectedDivision> {
    let teams = list_teams(source, division)?;
    let advancing = list_advancing(source, division)?;
    let alternates = list_alternates(source, division)?;
    info!(
        ?division,
        teams = teams.len(),
        advancing = advancing.len(),
        "collected rosters"
    );

    report.extend(detect_duplicate_awards(source, division, policy)?);
    if let Some(allowed) = advancing_allowed {
        report.extend(check_advancing_count(&advancing, allowed, division));
        report.extend(check_alternates(&alternates, division));
    }

    let mut winners = Vec::new();
    for (index, definition) in definitions.iter().enumerate() {
        let resolved = resolve(definition, source, division, report)?;
        reconciliation.record(definition, resolved.len());
        winners.push((index, resolved));
    }

    Ok(CollectedDivision {
        division,
        teams,
        advancing,
        alternates,
        winners,
    })
}

fn summarize_division(collected: &CollectedDivision) -> DivisionSummary {
    DivisionSummary {
        division: collected.division,
        teams: collected.teams.len(),
        advancing: collected.advancing.len(),
        alternates: collected.alternates.len(),
        winners: collected
            .winners
            .iter()
            .map(|(_, winners)| winners.len())
            .sum(),
    }
}

/// Bind every template variable: the tournament name, per-division team and
/// advancing lists, and per-award winner blocks with their `_count` and
/// `_this_these` grammar companions.
fn compose_variables(
    config: &TournamentConfig,
    definitions: &[AwardDefinition],
    collected: &[CollectedDivision],
    report: &mut CeremonyReport,
) -> BTreeMap<String, String> {
    let mut variables = BTreeMap::new();
    variables.insert("tournament_name".to_string(), config.tournament_name.clone());

    for division in collected {
        let mut tracker = HighlightTracker::new(config.dual_presenter);
        variables.insert(
            team_list_tag(division.division).to_string(),
            compose_team_list(&division.teams, &mut tracker).join("\n"),
        );
        let mut tracker = HighlightTracker::new(config.dual_presenter);
        variables.insert(
            advancing_list_tag(division.division).to_string(),
            compose_team_list(&division.advancing, &mut tracker).join("\n"),
        );
    }

    // Division-scoped awards bind per division; tournament-scoped winners
    // from all divisions merge into one block.
    let mut tournament_winners: BTreeMap<usize, Vec<AwardWinner>> = BTreeMap::new();
    for division in collected {
        for (index, winners) in &division.winners {
            let award = &config.awards[*index];
            let definition = &definitions[*index];
            if definition.scope == AwardScope::Tournament {
                tournament_winners
                    .entry(*index)
                    .or_default()
                    .extend(winners.iter().cloned());
                continue;
            }
            bind_winner_block(
                &mut variables,
                award,
                definition,
                division.division,
                winners,
                config.dual_presenter,
                report,
            );
        }
    }
    for (index, winners) in &tournament_winners {
        bind_winner_block(
            &mut variables,
            &config.awards[*index],
            &definitions[*index],
            None,
            winners,
            config.dual_presenter,
            report,
        );
    }

    variables
}

fn bind_winner_block(
    variables: &mut BTreeMap<String, String>,
    award: &AwardConfig,
    definition: &AwardDefinition,
    division: Option<Division>,
    winners: &[AwardWinner],
    dual_presenter: bool,
    report: &mut CeremonyReport,
) {
    let Some(tag) = award.tag_for(division) else {
        if !winners.is_empty() {
            let context = match division {
                Some(division) => division.to_string(),
                None => "Tournament".to_string(),
            };
            report.add_warning(
                &context,
                format!("award '{}' has no script tag; winners not announced", award.id),
            );
        }
        return;
    };
    let include_score = definition.kind == AwardKind::RankBased;
    let mut tracker = HighlightTracker::new(dual_presenter);
    let lines = compose_winners(winners, include_score, &mut tracker);
    variables.insert(tag.to_string(), lines.join("\n"));
    variables.insert(format!("{tag}_count"), winners.len().to_string());
    variables.insert(
        format!("{tag}_this_these"),
        if winners.len() == 1 {
            "this team".to_string()
        } else {
            "these teams".to_string()
        },
    );
}

fn team_list_tag(division: Option<Division>) -> &'static str {
    match division {
        Some(Division::D1) => "div1_list",
        Some(Division::D2) => "div2_list",
        None => "team_list",
    }
}

fn advancing_list_tag(division: Option<Division>) -> &'static str {
    match division {
        Some(Division::D1) => "adv_div1_list",
        Some(Division::D2) => "adv_div2_list",
        None => "adv_list",
    }
}
