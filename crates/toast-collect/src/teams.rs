use tracing::debug;

use toast_ingest::{TableSource, columns, tables};
use toast_model::{Division, Result, Row, TeamRecord};

use crate::rows::team_identity;

/// All teams in the division's tournament data table, ascending by team
/// number.
pub fn list_teams(
    source: &dyn TableSource,
    division: Option<Division>,
) -> Result<Vec<TeamRecord>> {
    collect_teams(source, division, &[], |_| true)
}

/// Teams whose `Advance?` flag is the `Yes` sentinel, ascending by team
/// number.
pub fn list_advancing(
    source: &dyn TableSource,
    division: Option<Division>,
) -> Result<Vec<TeamRecord>> {
    collect_teams(source, division, &[columns::ADVANCE], |row| {
        has_advance_flag(row, "Yes")
    })
}

/// Teams marked as alternate advancers (`Advance?` = `Alt`).
pub fn list_alternates(
    source: &dyn TableSource,
    division: Option<Division>,
) -> Result<Vec<TeamRecord>> {
    collect_teams(source, division, &[columns::ADVANCE], |row| {
        has_advance_flag(row, "Alt")
    })
}

fn collect_teams(
    source: &dyn TableSource,
    division: Option<Division>,
    extra_columns: &[&str],
    keep: impl Fn(&Row) -> bool,
) -> Result<Vec<TeamRecord>> {
    let table = source.read_table(tables::TOURNAMENT_DATA)?;
    table.require_columns(&[columns::TEAM_NUMBER, columns::TEAM_NAME])?;
    table.require_columns(extra_columns)?;

    let mut teams = Vec::new();
    for (idx, row) in table.rows.iter().enumerate() {
        if !keep(row) {
            continue;
        }
        let (team_number, team_name) = team_identity(&table, idx, row)?;
        teams.push(TeamRecord {
            team_number,
            team_name,
            division,
        });
    }
    teams.sort_by_key(|team| team.team_number);
    debug!(count = teams.len(), ?division, "collected teams");
    Ok(teams)
}

fn has_advance_flag(row: &Row, sentinel: &str) -> bool {
    row.get(columns::ADVANCE)
        .as_text()
        .is_some_and(|value| value.trim().eq_ignore_ascii_case(sentinel))
}
