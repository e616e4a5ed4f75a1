use tracing::{debug, info};

use toast_ingest::{TableSource, columns, tables};
use toast_model::{
    AwardDefinition, AwardKind, AwardScope, AwardWinner, CeremonyReport, CollectError, Division,
    Result, Table,
};

use crate::rows::team_identity;

/// Resolve one award's winners within a division.
///
/// Winners are computed in ascending place order internally but the
/// returned sequence is in descending place order (place 1 last), ready for
/// suspense-style ceremony narration. Non-blocking findings (unselected
/// labels, duplicate selections) are pushed onto `report`.
pub fn resolve(
    definition: &AwardDefinition,
    source: &dyn TableSource,
    division: Option<Division>,
    report: &mut CeremonyReport,
) -> Result<Vec<AwardWinner>> {
    let count = definition.count_for(division);
    if count == 0 {
        return Ok(Vec::new());
    }
    let table = source.read_table(tables::TOURNAMENT_DATA)?;
    let winners = match definition.kind {
        AwardKind::RankBased => resolve_by_rank(definition, &table, division, count)?,
        AwardKind::Judged => resolve_by_label(definition, &table, division, count, report)?,
    };
    info!(
        award = %definition.name,
        ?division,
        winners = winners.len(),
        "resolved award"
    );
    Ok(winners)
}

/// Rank-based strategy: the scoring pipeline upstream guarantees contiguous
/// ranks 1..=N, so an absent rank is fatal rather than repairable.
fn resolve_by_rank(
    definition: &AwardDefinition,
    table: &Table,
    division: Option<Division>,
    count: u32,
) -> Result<Vec<AwardWinner>> {
    table.require_columns(&[
        columns::TEAM_NUMBER,
        columns::TEAM_NAME,
        columns::ROBOT_GAME_RANK,
        columns::MAX_ROBOT_GAME_SCORE,
    ])?;

    let mut winners = Vec::with_capacity(count as usize);
    for place in 1..=count {
        let (idx, row) = table
            .rows
            .iter()
            .enumerate()
            .find(|(_, row)| {
                row.get(columns::ROBOT_GAME_RANK).as_int() == Some(i64::from(place))
            })
            .ok_or(CollectError::MissingRank { rank: place, count })?;
        let (team_number, team_name) = team_identity(table, idx, row)?;
        let score = row
            .get(columns::MAX_ROBOT_GAME_SCORE)
            .as_number()
            .ok_or_else(|| CollectError::MalformedCell {
                table: table.name.clone(),
                row: idx + 1,
                message: format!("{} is not numeric", columns::MAX_ROBOT_GAME_SCORE),
            })?;
        winners.push(AwardWinner {
            team_number,
            team_name,
            award_name: definition.name.clone(),
            place,
            division,
            score: Some(score),
        });
    }
    winners.reverse();
    Ok(winners)
}

/// Label-based strategy: exact match of the award-selection column against
/// the label for each place. Zero matches for a place under-allocates with
/// a warning; multiple matches all win, with a duplicate warning naming
/// every team.
fn resolve_by_label(
    definition: &AwardDefinition,
    table: &Table,
    division: Option<Division>,
    count: u32,
    report: &mut CeremonyReport,
) -> Result<Vec<AwardWinner>> {
    table.require_columns(&[columns::TEAM_NUMBER, columns::TEAM_NAME, columns::AWARD])?;
    let context = issue_context(division);

    let mut winners = Vec::new();
    for place in 1..=count {
        let Some(label) = definition.label_for_place(place) else {
            // A tournament-scoped label gap would repeat per division;
            // reconciliation reports it once.
            if definition.scope == AwardScope::Division {
                report.add_warning(
                    &context,
                    format!(
                        "{} has no selection label defined for place {place}",
                        definition.name
                    ),
                );
            }
            continue;
        };

        let mut matches = Vec::new();
        for (idx, row) in table.rows.iter().enumerate() {
            if row.get(columns::AWARD).as_text() == Some(label) {
                matches.push(team_identity(table, idx, row)?);
            }
        }

        if matches.is_empty() {
            // Tournament-scoped awards may legitimately leave a label
            // unselected in one division; only the aggregated total is
            // reconciled.
            if definition.scope == AwardScope::Division {
                report.add_warning(
                    &context,
                    format!("{} '{label}' not selected", definition.name),
                );
            }
            debug!(award = %definition.name, label, "no selection for label");
            continue;
        }

        if matches.len() > 1 {
            let teams = matches
                .iter()
                .map(|(number, name)| format!("team {number}, {name}"))
                .collect::<Vec<_>>()
                .join("; ");
            report.add_warning(
                &context,
                format!(
                    "{} '{label}' selected {} times (expected 1): {teams}",
                    definition.name,
                    matches.len()
                ),
            );
        }

        for (team_number, team_name) in matches {
            winners.push(AwardWinner {
                team_number,
                team_name,
                award_name: definition.name.clone(),
                place,
                division,
                score: None,
            });
        }
    }
    winners.reverse();
    Ok(winners)
}

pub(crate) fn issue_context(division: Option<Division>) -> String {
    match division {
        Some(division) => division.to_string(),
        None => "Tournament".to_string(),
    }
}
