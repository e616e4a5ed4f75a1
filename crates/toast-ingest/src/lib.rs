//! Table ingestion for tournament data.
//!
//! The core reads named tables through the [`TableSource`] trait and never
//! touches the storage behind it. [`CsvTableSource`] serves a folder of
//! per-table CSV exports (one file per named table); [`MemoryTableSource`]
//! backs tests.

mod csv_source;
mod memory;

pub use csv_source::{CsvTableSource, parse_cell};
pub use memory::{MemoryTableSource, table_from_rows};

use toast_model::{Result, Table};

/// Supplies named tables for one division's data set. Each read returns a
/// fully materialized copy; the source holds no open handles between calls.
pub trait TableSource {
    fn read_table(&self, table: &str) -> Result<Table>;
}

/// Well-known table names.
pub mod tables {
    pub const TOURNAMENT_DATA: &str = "TournamentData";
    pub const ROBOT_GAME: &str = "RobotGameScores";
    pub const INNOVATION: &str = "InnovationProjectResults";
    pub const ROBOT_DESIGN: &str = "RobotDesignResults";
    pub const CORE_VALUES: &str = "CoreValuesResults";
}

/// Well-known column headers in the tournament data table.
pub mod columns {
    pub const TEAM_NUMBER: &str = "Team Number";
    pub const TEAM_NAME: &str = "Team Name";
    pub const MAX_ROBOT_GAME_SCORE: &str = "Max Robot Game Score";
    pub const ROBOT_GAME_RANK: &str = "Robot Game Rank";
    pub const AWARD: &str = "Award";
    pub const ADVANCE: &str = "Advance?";
}
