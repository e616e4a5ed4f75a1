//! Team directory behavior over in-memory tournament data.

use toast_ingest::{MemoryTableSource, table_from_rows, tables};
use toast_model::{CollectError, Division};

use toast_collect::{list_advancing, list_alternates, list_teams};

const COLUMNS: &[&str] = &[
    "Team Number",
    "Team Name",
    "Max Robot Game Score",
    "Robot Game Rank",
    "Award",
    "Advance?",
];

fn source() -> MemoryTableSource {
    MemoryTableSource::new().with_table(table_from_rows(
        tables::TOURNAMENT_DATA,
        COLUMNS,
        &[
            &["303", "Hawks", "410", "3", "", "Alt"],
            &["101", "Eagles", "450", "1", "", "Yes"],
            &["202", "Falcons", "430", "2", "", "yes"],
        ],
    ))
}

#[test]
fn teams_ordered_ascending_by_number() {
    let teams = list_teams(&source(), Some(Division::D1)).expect("list teams");
    let numbers: Vec<u32> = teams.iter().map(|t| t.team_number).collect();
    assert_eq!(numbers, vec![101, 202, 303]);
    assert!(teams.iter().all(|t| t.division == Some(Division::D1)));
}

#[test]
fn advancing_filters_yes_sentinel_case_insensitively() {
    let advancing = list_advancing(&source(), None).expect("list advancing");
    let numbers: Vec<u32> = advancing.iter().map(|t| t.team_number).collect();
    assert_eq!(numbers, vec![101, 202]);
}

#[test]
fn alternates_filter_alt_sentinel() {
    let alternates = list_alternates(&source(), None).expect("list alternates");
    assert_eq!(alternates.len(), 1);
    assert_eq!(alternates[0].team_name, "Hawks");
}

#[test]
fn missing_roster_column_is_fatal() {
    let source = MemoryTableSource::new().with_table(table_from_rows(
        tables::TOURNAMENT_DATA,
        &["Team Number", "Coach Name"],
        &[&["101", "Sam"]],
    ));
    let error = list_teams(&source, None).expect_err("Team Name is absent");
    assert!(matches!(error, CollectError::MissingColumn { .. }));
}

#[test]
fn missing_advance_column_is_fatal_for_advancing_only() {
    let source = MemoryTableSource::new().with_table(table_from_rows(
        tables::TOURNAMENT_DATA,
        &["Team Number", "Team Name"],
        &[&["101", "Eagles"]],
    ));
    assert!(list_teams(&source, None).is_ok());
    let error = list_advancing(&source, None).expect_err("Advance? is absent");
    match error {
        CollectError::MissingColumn { column, .. } => assert_eq!(column, "Advance?"),
        other => panic!("expected MissingColumn, got {other}"),
    }
}

#[test]
fn malformed_team_number_is_fatal() {
    let source = MemoryTableSource::new().with_table(table_from_rows(
        tables::TOURNAMENT_DATA,
        &["Team Number", "Team Name"],
        &[&["eagles", "Eagles"]],
    ));
    let error = list_teams(&source, None).expect_err("non-numeric team number");
    assert!(matches!(error, CollectError::MalformedCell { .. }));
}

#[test]
fn numeric_team_name_is_kept_as_display_text() {
    let source = MemoryTableSource::new().with_table(table_from_rows(
        tables::TOURNAMENT_DATA,
        &["Team Number", "Team Name"],
        &[&["101", "42"]],
    ));
    let teams = list_teams(&source, None).expect("list teams");
    assert_eq!(teams[0].team_name, "42");
}
