use std::fmt::Write as _;

use toast_model::{AwardWinner, TeamRecord};

/// English ordinal for a 1-based place. The teens always take `th`,
/// including 111 and 113.
pub fn ordinal(n: u32) -> String {
    let suffix = match n % 100 {
        11..=13 => "th",
        _ => match n % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    };
    format!("{n}{suffix}")
}

/// Alternates announcement lines between two presenters by tagging each
/// wrapped line with `highlight-0` / `highlight-1`. When disabled the
/// tracker passes text through untouched and never changes state.
///
/// Build a fresh tracker for every composition pass; state is meaningful
/// only within one pass.
#[derive(Debug)]
pub struct HighlightTracker {
    enabled: bool,
    state: u8,
}

impl HighlightTracker {
    pub fn new(enabled: bool) -> Self {
        Self { enabled, state: 0 }
    }

    /// Wrap one announcement in the current presenter's marker, then flip.
    pub fn wrap(&mut self, text: &str) -> String {
        if !self.enabled {
            return text.to_string();
        }
        let wrapped = format!("<span class=\"highlight-{}\">{text}</span>", self.state);
        self.state = 1 - self.state;
        wrapped
    }

    /// [`wrap`] plus a `<p>` block around the result.
    ///
    /// [`wrap`]: HighlightTracker::wrap
    pub fn wrap_paragraph(&mut self, text: &str) -> String {
        format!("<p>{}</p>", self.wrap(text))
    }
}

/// One `Team <number>, <name>` paragraph per team, in the order given.
pub fn compose_team_list(teams: &[TeamRecord], highlight: &mut HighlightTracker) -> Vec<String> {
    teams
        .iter()
        .map(|team| highlight.wrap_paragraph(&format!("Team {}, {}", team.team_number, team.team_name)))
        .collect()
}

/// One announcement paragraph per winner, in the order given (resolution
/// already emits descending place order, so place 1 lands last).
pub fn compose_winners(
    winners: &[AwardWinner],
    include_score: bool,
    highlight: &mut HighlightTracker,
) -> Vec<String> {
    winners
        .iter()
        .map(|winner| {
            let mut line = String::from("The ");
            if let Some(division) = winner.division {
                let _ = write!(line, "{division} ");
            }
            let _ = write!(
                line,
                "{} place {} award ",
                ordinal(winner.place),
                winner.award_name
            );
            if include_score && let Some(score) = winner.score {
                let _ = write!(line, "with a score of {} points ", score as i64);
            }
            let _ = write!(
                line,
                "goes to team number {}, {}",
                winner.team_number, winner.team_name
            );
            highlight.wrap_paragraph(&line)
        })
        .collect()
}
