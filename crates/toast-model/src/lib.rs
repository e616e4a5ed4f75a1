//! Shared domain types for ceremony script generation: teams and divisions,
//! the award catalog, resolved winners, the in-memory table row model, and
//! the issue report accumulated across a run.

pub mod award;
pub mod error;
pub mod report;
pub mod table;
pub mod team;

pub use award::{AwardAllocation, AwardDefinition, AwardKind, AwardScope, AwardWinner};
pub use error::{CollectError, Result};
pub use report::{CeremonyIssue, CeremonyReport, IssueSeverity, SeverityPolicy};
pub use table::{CellValue, Row, Table};
pub use team::{Division, TeamRecord};
