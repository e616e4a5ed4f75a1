//! Announcement composition: ordinals, presenter highlighting, and line
//! wording.

use proptest::prelude::*;

use toast_model::{AwardWinner, Division, TeamRecord};
use toast_report::{HighlightTracker, compose_team_list, compose_winners, ordinal};

#[test]
fn ordinal_suffixes() {
    assert_eq!(ordinal(1), "1st");
    assert_eq!(ordinal(2), "2nd");
    assert_eq!(ordinal(3), "3rd");
    assert_eq!(ordinal(4), "4th");
    assert_eq!(ordinal(11), "11th");
    assert_eq!(ordinal(12), "12th");
    assert_eq!(ordinal(13), "13th");
    assert_eq!(ordinal(21), "21st");
    assert_eq!(ordinal(101), "101st");
    assert_eq!(ordinal(111), "111th");
    assert_eq!(ordinal(112), "112th");
    assert_eq!(ordinal(122), "122nd");
}

proptest! {
    #[test]
    fn ordinal_suffix_matches_last_digits(n in 1u32..100_000) {
        let text = ordinal(n);
        let expected = if (11..=13).contains(&(n % 100)) {
            "th"
        } else {
            match n % 10 {
                1 => "st",
                2 => "nd",
                3 => "rd",
                _ => "th",
            }
        };
        prop_assert!(text.starts_with(&n.to_string()));
        prop_assert!(text.ends_with(expected));
        prop_assert_eq!(text.len(), n.to_string().len() + 2);
    }
}

#[test]
fn disabled_tracker_is_identity() {
    let mut tracker = HighlightTracker::new(false);
    assert_eq!(tracker.wrap("hello"), "hello");
    assert_eq!(tracker.wrap("hello"), "hello");
    assert_eq!(tracker.wrap_paragraph("hello"), "<p>hello</p>");
}

#[test]
fn enabled_tracker_alternates_presenters() {
    let mut tracker = HighlightTracker::new(true);
    assert_eq!(tracker.wrap("a"), "<span class=\"highlight-0\">a</span>");
    assert_eq!(tracker.wrap("b"), "<span class=\"highlight-1\">b</span>");
    assert_eq!(tracker.wrap("c"), "<span class=\"highlight-0\">c</span>");
    assert_eq!(tracker.wrap("d"), "<span class=\"highlight-1\">d</span>");
}

#[test]
fn team_list_preserves_input_order() {
    let teams = vec![
        TeamRecord {
            team_number: 101,
            team_name: "Eagles".to_string(),
            division: Some(Division::D1),
        },
        TeamRecord {
            team_number: 202,
            team_name: "Falcons".to_string(),
            division: Some(Division::D1),
        },
    ];
    let mut tracker = HighlightTracker::new(false);
    let lines = compose_team_list(&teams, &mut tracker);
    assert_eq!(lines, vec!["<p>Team 101, Eagles</p>", "<p>Team 202, Falcons</p>"]);
}

fn winner(place: u32, number: u32, name: &str, score: Option<f64>) -> AwardWinner {
    AwardWinner {
        team_number: number,
        team_name: name.to_string(),
        award_name: "Robot Game".to_string(),
        place,
        division: Some(Division::D1),
        score,
    }
}

#[test]
fn winner_line_includes_division_and_score() {
    let winners = vec![
        winner(2, 202, "Falcons", Some(430.0)),
        winner(1, 101, "Eagles", Some(450.0)),
    ];
    let mut tracker = HighlightTracker::new(false);
    let lines = compose_winners(&winners, true, &mut tracker);
    assert_eq!(
        lines,
        vec![
            "<p>The Division 1 2nd place Robot Game award with a score of 430 points \
             goes to team number 202, Falcons</p>",
            "<p>The Division 1 1st place Robot Game award with a score of 450 points \
             goes to team number 101, Eagles</p>",
        ]
    );
}

#[test]
fn winner_line_omits_score_for_judged_awards() {
    let winners = vec![AwardWinner {
        team_number: 303,
        team_name: "Hawks".to_string(),
        award_name: "Core Values".to_string(),
        place: 1,
        division: None,
        score: None,
    }];
    let mut tracker = HighlightTracker::new(false);
    let lines = compose_winners(&winners, false, &mut tracker);
    assert_eq!(
        lines,
        vec!["<p>The 1st place Core Values award goes to team number 303, Hawks</p>"]
    );
}

#[test]
fn score_suppressed_when_not_requested_even_if_present() {
    let winners = vec![winner(1, 101, "Eagles", Some(450.0))];
    let mut tracker = HighlightTracker::new(false);
    let lines = compose_winners(&winners, false, &mut tracker);
    assert_eq!(
        lines,
        vec!["<p>The Division 1 1st place Robot Game award goes to team number 101, Eagles</p>"]
    );
}

#[test]
fn dual_presenter_alternation_spans_winner_lines() {
    let winners = vec![
        winner(2, 202, "Falcons", None),
        winner(1, 101, "Eagles", None),
    ];
    let mut tracker = HighlightTracker::new(true);
    let lines = compose_winners(&winners, false, &mut tracker);
    assert!(lines[0].contains("highlight-0"));
    assert!(lines[1].contains("highlight-1"));
}
