//! Data collection for ceremony generation: team rosters and advancing
//! subsets, award winner resolution, duplicate-selection detection, and
//! tournament-level count reconciliation.
//!
//! Everything here reads through [`toast_ingest::TableSource`] and returns
//! explicit results: fatal structural problems surface as
//! [`toast_model::CollectError`], advisory findings accumulate in a
//! [`toast_model::CeremonyReport`].

mod reconcile;
mod resolver;
mod rows;
mod teams;

pub use reconcile::{
    ReconciliationState, check_advancing_count, check_alternates, detect_duplicate_awards,
};
pub use resolver::resolve;
pub use teams::{list_advancing, list_alternates, list_teams};
