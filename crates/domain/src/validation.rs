//! Structural validation of reported results
//!
//! Validation never aborts: every check runs against an immutable snapshot of
//! the result and contributes at most one failure. The checks form a fixed,
//! ordered pipeline, so the failure list is deterministic and its wording is
//! stable enough to show to users as-is.

use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::Serialize;

use crate::{GameResult, GameRules, PlayerId, WINNING_RANK};

/// Which part of the result a failure is reported against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureField {
    /// The team composition of the result
    Teams,
    /// The result as a whole
    Base,
}

impl FailureField {
    fn label(&self) -> Option<&'static str> {
        match self {
            Self::Teams => Some("Teams"),
            Self::Base => None,
        }
    }
}

/// A single rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationFailure {
    pub field: FailureField,
    pub message: String,
}

impl ValidationFailure {
    pub fn teams(message: impl Into<String>) -> Self {
        Self {
            field: FailureField::Teams,
            message: message.into(),
        }
    }

    pub fn base(message: impl Into<String>) -> Self {
        Self {
            field: FailureField::Base,
            message: message.into(),
        }
    }

    /// Message prefixed with its field label, e.g. "Teams must have a winner".
    pub fn full_message(&self) -> String {
        match self.field.label() {
            Some(label) => format!("{} {}", label, self.message),
            None => self.message.clone(),
        }
    }
}

/// Ordered, de-duplicated set of failures. Empty means valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResultErrors {
    failures: Vec<ValidationFailure>,
}

impl ResultErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a failure unless an identical one is already present.
    pub fn push(&mut self, failure: ValidationFailure) {
        if !self.failures.contains(&failure) {
            self.failures.push(failure);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn len(&self) -> usize {
        self.failures.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationFailure> {
        self.failures.iter()
    }

    /// Every message, in pipeline order.
    pub fn messages(&self) -> Vec<&str> {
        self.failures.iter().map(|f| f.message.as_str()).collect()
    }

    /// Messages reported against one field.
    pub fn on(&self, field: FailureField) -> Vec<&str> {
        self.failures
            .iter()
            .filter(|f| f.field == field)
            .map(|f| f.message.as_str())
            .collect()
    }

    pub fn full_messages(&self) -> Vec<String> {
        self.failures.iter().map(ValidationFailure::full_message).collect()
    }

    pub fn contains(&self, message: &str) -> bool {
        self.failures.iter().any(|f| f.message == message)
    }
}

impl FromIterator<ValidationFailure> for ResultErrors {
    fn from_iter<I: IntoIterator<Item = ValidationFailure>>(iter: I) -> Self {
        let mut errors = Self::new();
        for failure in iter {
            errors.push(failure);
        }
        errors
    }
}

impl fmt::Display for ResultErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full_messages().join(", "))
    }
}

type Check = fn(&GameRules, &GameResult) -> Option<ValidationFailure>;

/// Pipeline order is message order.
const CHECKS: [Check; 9] = [
    has_winner,
    has_unique_players,
    meets_min_teams,
    meets_max_teams,
    meets_min_players_per_team,
    meets_max_players_per_team,
    has_positive_ranks,
    respects_tie_policy,
    winner_is_not_loser,
];

/// Applies a game's rules to candidate results.
#[derive(Debug, Clone, Copy)]
pub struct ResultValidator<'a> {
    rules: &'a GameRules,
}

impl<'a> ResultValidator<'a> {
    pub fn new(rules: &'a GameRules) -> Self {
        Self { rules }
    }

    pub fn validate(&self, result: &GameResult) -> ResultErrors {
        CHECKS
            .iter()
            .filter_map(|check| check(self.rules, result))
            .collect()
    }
}

fn has_winner(_: &GameRules, result: &GameResult) -> Option<ValidationFailure> {
    let has_first_place = result.teams().iter().any(|t| t.rank() == WINNING_RANK);
    (!has_first_place).then(|| ValidationFailure::teams("must have a winner"))
}

/// A player may appear in at most one team. Repeats inside a single team's
/// list are not counted here.
fn has_unique_players(_: &GameRules, result: &GameResult) -> Option<ValidationFailure> {
    let mut team_counts: HashMap<PlayerId, usize> = HashMap::new();
    for team in result.teams() {
        let members: HashSet<PlayerId> = team.players().iter().map(|p| p.id()).collect();
        for id in members {
            *team_counts.entry(id).or_default() += 1;
        }
    }
    team_counts
        .values()
        .any(|&count| count > 1)
        .then(|| ValidationFailure::teams("must have unique players"))
}

fn meets_min_teams(rules: &GameRules, result: &GameResult) -> Option<ValidationFailure> {
    let min = rules.min_teams()?;
    (result.teams().len() < min as usize)
        .then(|| ValidationFailure::teams(format!("must have at least {} teams", min)))
}

fn meets_max_teams(rules: &GameRules, result: &GameResult) -> Option<ValidationFailure> {
    let max = rules.max_teams()?;
    (result.teams().len() > max as usize)
        .then(|| ValidationFailure::teams(format!("must have at most {} teams", max)))
}

fn meets_min_players_per_team(
    rules: &GameRules,
    result: &GameResult,
) -> Option<ValidationFailure> {
    let min = rules.min_players_per_team()?;
    result
        .teams()
        .iter()
        .any(|t| t.player_count() < min as usize)
        .then(|| {
            ValidationFailure::teams(format!("must have at least {} players per team", min))
        })
}

fn meets_max_players_per_team(
    rules: &GameRules,
    result: &GameResult,
) -> Option<ValidationFailure> {
    let max = rules.max_players_per_team()?;
    result
        .teams()
        .iter()
        .any(|t| t.player_count() > max as usize)
        .then(|| ValidationFailure::teams(format!("must have at most {} players per team", max)))
}

fn has_positive_ranks(_: &GameRules, result: &GameResult) -> Option<ValidationFailure> {
    result
        .teams()
        .iter()
        .any(|t| t.rank() < WINNING_RANK)
        .then(|| ValidationFailure::teams("must have positive ranks"))
}

fn respects_tie_policy(rules: &GameRules, result: &GameResult) -> Option<ValidationFailure> {
    if rules.allows_ties() {
        return None;
    }
    let mut seen = HashSet::new();
    let tied = result.teams().iter().any(|t| !seen.insert(t.rank()));
    tied.then(|| ValidationFailure::teams("game does not allow ties"))
}

/// Only meaningful once both a winner and a loser can be determined.
fn winner_is_not_loser(_: &GameRules, result: &GameResult) -> Option<ValidationFailure> {
    let winners = result.winners();
    let losers = result.losers();
    if winners.is_empty() || losers.is_empty() {
        return None;
    }
    let loser_ids: HashSet<PlayerId> = losers.iter().map(|p| p.id()).collect();
    winners
        .iter()
        .any(|p| loser_ids.contains(&p.id()))
        .then(|| ValidationFailure::base("Winner and loser can't be the same player"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameId, Player, PlayerName};
    use chrono::{TimeZone, Utc};

    fn player(name: &str) -> Player {
        Player::new(PlayerName::new(name).unwrap())
    }

    fn players(count: usize) -> Vec<Player> {
        (1..=count).map(|i| player(&format!("player{}", i))).collect()
    }

    fn draft() -> GameResult {
        GameResult::new(GameId::new(), Utc.timestamp_opt(1_700_000_000, 0).unwrap())
    }

    /// One single-player team per rank.
    fn result_with_ranks(ranks: &[i32]) -> GameResult {
        let mut result = draft();
        for (rank, p) in ranks.iter().zip(players(ranks.len())) {
            result.build_team(*rank, vec![p]);
        }
        result
    }

    mod winner {
        use super::*;

        #[test]
        fn requires_a_rank_one_team() {
            let result = result_with_ranks(&[2, 3]);
            let errors = result.validate(&GameRules::default());
            assert!(errors.on(FailureField::Teams).contains(&"must have a winner"));
        }

        #[test]
        fn zero_teams_has_no_winner() {
            let errors = draft().validate(&GameRules::default());
            assert!(errors.contains("must have a winner"));
        }

        #[test]
        fn zero_teams_skips_winner_loser_similarity() {
            let errors = draft().validate(&GameRules::default());
            assert!(errors.on(FailureField::Base).is_empty());
            assert!(!errors.contains("Winner and loser can't be the same player"));
        }

        #[test]
        fn single_rank_one_team_with_distinct_players_is_valid() {
            let errors = result_with_ranks(&[1, 2, 3]).validate(&GameRules::default());
            assert!(!errors.contains("must have a winner"));
            assert!(!errors.contains("must have unique players"));
            assert!(errors.is_empty());
        }
    }

    mod uniqueness {
        use super::*;

        #[test]
        fn same_player_in_two_teams_is_rejected() {
            let shared = player("shared");
            let mut result = draft();
            result
                .build_team(1, vec![shared.clone()])
                .build_team(2, vec![shared]);

            let errors = result.validate(&GameRules::default());
            assert!(errors.on(FailureField::Teams).contains(&"must have unique players"));
            assert_eq!(
                errors.on(FailureField::Base),
                vec!["Winner and loser can't be the same player"]
            );
        }

        #[test]
        fn reported_once_for_many_repeats() {
            let (a, b) = (player("a"), player("b"));
            let mut result = draft();
            result
                .build_team(1, vec![a.clone(), b.clone()])
                .build_team(2, vec![a.clone(), b.clone()])
                .build_team(3, vec![a, b]);

            let errors = result.validate(&GameRules::default());
            let count = errors
                .messages()
                .iter()
                .filter(|m| **m == "must have unique players")
                .count();
            assert_eq!(count, 1);
        }

        #[test]
        fn repeat_within_one_team_is_not_a_cross_team_duplicate() {
            let repeated = player("repeated");
            let mut result = draft();
            result
                .build_team(1, vec![player("winner")])
                .build_team(2, vec![repeated.clone(), repeated]);

            let errors = result.validate(&GameRules::default());
            assert!(errors.is_empty());
        }

        #[test]
        fn tied_winners_sharing_a_player_skip_similarity() {
            let shared = player("shared");
            let mut result = draft();
            result
                .build_team(1, vec![shared.clone()])
                .build_team(1, vec![shared]);

            let errors = result.validate(&GameRules::default());
            assert_eq!(errors.messages(), vec!["must have unique players"]);
        }
    }

    mod team_count {
        use super::*;

        #[test]
        fn below_minimum_reports_only_minimum() {
            let rules = GameRules::default().with_team_bounds(Some(4), None);
            let errors = result_with_ranks(&[1, 2]).validate(&rules);
            assert_eq!(errors.messages(), vec!["must have at least 4 teams"]);
        }

        #[test]
        fn below_minimum_with_both_bounds_set() {
            let rules = GameRules::default().with_team_bounds(Some(4), Some(5));
            let errors = result_with_ranks(&[1, 2, 3]).validate(&rules);
            assert_eq!(errors.messages(), vec!["must have at least 4 teams"]);
        }

        #[test]
        fn below_minimum_with_tied_losers() {
            let rules = GameRules::default().with_team_bounds(Some(4), Some(5));
            let errors = result_with_ranks(&[1, 2, 2]).validate(&rules);
            assert_eq!(
                errors.on(FailureField::Teams),
                vec!["must have at least 4 teams"]
            );
        }

        #[test]
        fn above_maximum_reports_only_maximum() {
            let rules = GameRules::default().with_team_bounds(None, Some(4));
            let errors = result_with_ranks(&[1, 2, 2, 3, 2]).validate(&rules);
            assert_eq!(errors.messages(), vec!["must have at most 4 teams"]);
        }

        #[test]
        fn unbounded_allows_any_count() {
            let errors = result_with_ranks(&[1, 2, 2, 3, 2, 4]).validate(&GameRules::default());
            assert!(errors.is_empty());
        }

        #[test]
        fn exact_bounds_are_inclusive() {
            let rules = GameRules::default().with_team_bounds(Some(3), Some(3));
            assert!(result_with_ranks(&[1, 2, 3]).validate(&rules).is_empty());
        }
    }

    mod players_per_team {
        use super::*;

        #[test]
        fn team_below_minimum() {
            let ps = players(3);
            let rules = GameRules::default().with_players_per_team(Some(2), Some(2));
            let mut result = draft();
            result
                .build_team(1, vec![ps[0].clone()])
                .build_team(2, vec![ps[1].clone(), ps[2].clone()]);

            let errors = result.validate(&rules);
            assert_eq!(errors.messages(), vec!["must have at least 2 players per team"]);
        }

        #[test]
        fn team_above_maximum() {
            let ps = players(6);
            let rules = GameRules::default().with_players_per_team(Some(2), Some(3));
            let mut result = draft();
            result
                .build_team(1, ps[0..2].to_vec())
                .build_team(2, ps[2..6].to_vec());

            let errors = result.validate(&rules);
            assert_eq!(errors.messages(), vec!["must have at most 3 players per team"]);
        }

        #[test]
        fn one_message_per_bound_even_when_many_teams_violate() {
            let ps = players(3);
            let rules = GameRules::default().with_players_per_team(Some(2), None);
            let mut result = draft();
            result
                .build_team(1, vec![ps[0].clone()])
                .build_team(2, vec![ps[1].clone()])
                .build_team(3, vec![ps[2].clone()]);

            let errors = result.validate(&rules);
            assert_eq!(errors.messages(), vec!["must have at least 2 players per team"]);
        }

        #[test]
        fn both_bounds_can_fail_on_different_teams() {
            let ps = players(5);
            let rules = GameRules::default().with_players_per_team(Some(2), Some(3));
            let mut result = draft();
            result
                .build_team(1, vec![ps[0].clone()])
                .build_team(2, ps[1..5].to_vec());

            let errors = result.validate(&rules);
            assert_eq!(
                errors.messages(),
                vec![
                    "must have at least 2 players per team",
                    "must have at most 3 players per team",
                ]
            );
        }

        #[test]
        fn empty_team_fails_only_when_minimum_requires_players() {
            let mut result = draft();
            result
                .build_team(1, vec![player("solo")])
                .build_team(2, Vec::new());

            assert!(result.validate(&GameRules::default()).is_empty());

            let rules = GameRules::default().with_players_per_team(Some(1), None);
            assert_eq!(
                result.validate(&rules).messages(),
                vec!["must have at least 1 players per team"]
            );
        }

        #[test]
        fn unbounded_allows_large_teams() {
            let ps = players(6);
            let rules = GameRules::default().with_players_per_team(None, None);
            let mut result = draft();
            result
                .build_team(1, vec![ps[0].clone()])
                .build_team(2, ps[1..6].to_vec());

            assert!(result.validate(&rules).is_empty());
        }
    }

    mod ties {
        use super::*;

        #[test]
        fn shared_rank_rejected_when_ties_forbidden() {
            let rules = GameRules::default().with_ties_allowed(false);
            let errors = result_with_ranks(&[1, 1]).validate(&rules);
            assert_eq!(errors.messages(), vec!["game does not allow ties"]);
        }

        #[test]
        fn distinct_ranks_pass_when_ties_forbidden() {
            let rules = GameRules::default().with_ties_allowed(false);
            let errors = result_with_ranks(&[1, 2, 3]).validate(&rules);
            assert!(!errors.contains("game does not allow ties"));
        }

        #[test]
        fn shared_losing_rank_also_counts_as_tie() {
            let rules = GameRules::default().with_ties_allowed(false);
            let errors = result_with_ranks(&[1, 2, 2]).validate(&rules);
            assert_eq!(errors.messages(), vec!["game does not allow ties"]);
        }

        #[test]
        fn ties_allowed_by_default() {
            assert!(result_with_ranks(&[1, 1, 2]).validate(&GameRules::default()).is_empty());
        }
    }

    /// Rank positivity is checked in addition to the rule set, ahead of the
    /// tie policy.
    mod extra_rank_check {
        use super::*;

        #[test]
        fn extra_check_rejects_non_positive_rank_without_panicking() {
            let errors = result_with_ranks(&[-1, 1]).validate(&GameRules::default());
            assert_eq!(errors.messages(), vec!["must have positive ranks"]);
        }

        #[test]
        fn extra_check_follows_winner_rule_for_zero_rank() {
            let errors = result_with_ranks(&[0]).validate(&GameRules::default());
            assert_eq!(
                errors.messages(),
                vec!["must have a winner", "must have positive ranks"]
            );
        }

        #[test]
        fn extra_check_is_reported_before_tie_policy() {
            let rules = GameRules::default().with_ties_allowed(false);
            let errors = result_with_ranks(&[1, 0, 0]).validate(&rules);
            assert_eq!(
                errors.messages(),
                vec!["must have positive ranks", "game does not allow ties"]
            );
        }
    }

    mod ordering {
        use super::*;

        #[test]
        fn failures_follow_pipeline_order() {
            let shared = player("shared");
            let rules = GameRules::default()
                .with_team_bounds(Some(3), None)
                .with_players_per_team(Some(2), None)
                .with_ties_allowed(false);
            let mut result = draft();
            result
                .build_team(2, vec![shared.clone()])
                .build_team(2, vec![shared]);

            let errors = result.validate(&rules);
            assert_eq!(
                errors.messages(),
                vec![
                    "must have a winner",
                    "must have unique players",
                    "must have at least 3 teams",
                    "must have at least 2 players per team",
                    "game does not allow ties",
                ]
            );
        }

        #[test]
        fn full_messages_carry_field_prefix() {
            let errors = draft().validate(&GameRules::default());
            assert_eq!(errors.full_messages(), vec!["Teams must have a winner"]);
            assert_eq!(errors.to_string(), "Teams must have a winner");
        }

        #[test]
        fn push_deduplicates() {
            let mut errors = ResultErrors::new();
            errors.push(ValidationFailure::teams("must have a winner"));
            errors.push(ValidationFailure::teams("must have a winner"));
            assert_eq!(errors.len(), 1);
        }

        #[test]
        fn serializes_as_list_of_failures() {
            let errors = draft().validate(&GameRules::default());
            let json = serde_json::to_value(&errors).unwrap();
            assert_eq!(
                json,
                serde_json::json!([{ "field": "teams", "message": "must have a winner" }])
            );
        }
    }
}
