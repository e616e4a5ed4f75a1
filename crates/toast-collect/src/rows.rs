use toast_model::{CollectError, Result, Row, Table};

use toast_ingest::columns;

/// Pull the team number and name out of a tournament data row. Malformed
/// identity cells are fatal; every downstream record needs both.
pub(crate) fn team_identity(table: &Table, idx: usize, row: &Row) -> Result<(u32, String)> {
    let team_number = row
        .get(columns::TEAM_NUMBER)
        .as_int()
        .and_then(|value| u32::try_from(value).ok())
        .filter(|value| *value > 0)
        .ok_or_else(|| CollectError::MalformedCell {
            table: table.name.clone(),
            row: idx + 1,
            message: format!("{} is not a positive integer", columns::TEAM_NUMBER),
        })?;
    let team_name = row
        .get(columns::TEAM_NAME)
        .as_display()
        .filter(|name| !name.is_empty())
        .ok_or_else(|| CollectError::MalformedCell {
            table: table.name.clone(),
            row: idx + 1,
            message: format!("{} is empty", columns::TEAM_NAME),
        })?;
    Ok((team_number, team_name))
}
