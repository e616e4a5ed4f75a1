use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::team::Division;

/// Whether an award is allocated per division or once per tournament.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AwardScope {
    Division,
    Tournament,
}

/// How winners are determined: from the pre-computed robot game rank column,
/// or by matching judge-selected labels in the award column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AwardKind {
    RankBased,
    Judged,
}

/// Allocated winner counts for one award.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AwardAllocation {
    /// Count per division. An undivided tournament keeps its single count
    /// under [`Division::D1`].
    PerDivision(BTreeMap<Division, u32>),
    /// A single tournament-wide count; winners may come from any division.
    Tournament(u32),
}

/// Static description of one award in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AwardDefinition {
    pub id: String,
    pub name: String,
    pub kind: AwardKind,
    pub scope: AwardScope,
    /// One selection label per place, place 1 first
    /// (e.g. `"Robot Design 1st Place"`).
    pub labels: Vec<String>,
    pub allocation: AwardAllocation,
}

impl AwardDefinition {
    /// Allocated count when resolving within the given division.
    pub fn count_for(&self, division: Option<Division>) -> u32 {
        match &self.allocation {
            AwardAllocation::Tournament(count) => *count,
            AwardAllocation::PerDivision(counts) => {
                let key = division.unwrap_or(Division::D1);
                counts.get(&key).copied().unwrap_or(0)
            }
        }
    }

    pub fn label_for_place(&self, place: u32) -> Option<&str> {
        self.labels.get(place as usize - 1).map(String::as_str)
    }
}

/// A resolved winner. `score` is present only for rank-resolved awards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AwardWinner {
    pub team_number: u32,
    pub team_name: String,
    pub award_name: String,
    /// 1-based, 1 = best.
    pub place: u32,
    pub division: Option<Division>,
    pub score: Option<f64>,
}
