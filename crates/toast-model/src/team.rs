use std::fmt;

use serde::{Deserialize, Serialize};

/// A tournament bracket. Tournaments with enough teams split into two
/// parallel divisions; smaller tournaments run undivided (`None` on the
/// records that carry a division tag).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Division {
    D1,
    D2,
}

impl Division {
    /// Narration label used in ceremony text.
    pub fn label(self) -> &'static str {
        match self {
            Division::D1 => "Division 1",
            Division::D2 => "Division 2",
        }
    }
}

impl fmt::Display for Division {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A team as read from the tournament data table. Read-only, sourced fresh
/// each run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRecord {
    pub team_number: u32,
    pub team_name: String,
    pub division: Option<Division>,
}
