//! GameResult aggregate - one reported outcome of a game
//!
//! A result owns its teams outright. Teams are attached while the result is
//! still a draft (see [`GameResult::build_team`]), the draft is validated
//! against the game's [`GameRules`], and only then handed to a repository.
//! Repositories expose no update operation, so a persisted result never
//! changes; it can only be superseded by newer results.
//!
//! # Derivation
//!
//! Winners are the players of every team sharing the minimum rank present,
//! losers are everyone else. This is deliberately distinct from the
//! "must have a winner" validation rule, which looks for the literal rank 1.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::format_utc;
use crate::validation::{ResultErrors, ResultValidator};
use crate::{GameId, GameRules, Player, PlayerId, ResultId, Team};

/// A reported outcome: ranked teams of players for one game.
///
/// # Example
///
/// ```
/// use chrono::TimeZone;
/// use tally_domain::{GameId, GameResult, GameRules, Player, PlayerName};
///
/// let now = chrono::Utc.timestamp_opt(1_700_000_000, 0).unwrap();
/// let alice = Player::new(PlayerName::new("Alice").unwrap());
/// let bob = Player::new(PlayerName::new("Bob").unwrap());
///
/// let mut result = GameResult::new(GameId::new(), now);
/// result
///     .build_team(1, vec![alice.clone()])
///     .build_team(2, vec![bob.clone()]);
///
/// assert_eq!(result.winners(), vec![&alice]);
/// assert_eq!(result.losers(), vec![&bob]);
/// assert!(result.validate(&GameRules::default()).is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameResult {
    id: ResultId,
    game_id: GameId,
    teams: Vec<Team>,
    created_at: DateTime<Utc>,
}

/// Minimal externally rendered form of a result.
///
/// `winner` and `loser` are the names of the first winner and first loser;
/// `created_at` is rendered in UTC as `YYYY-MM-DD HH:MM:SS UTC`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultSummary {
    pub winner: Option<String>,
    pub loser: Option<String>,
    pub created_at: String,
}

impl GameResult {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Start a draft result with no teams.
    pub fn new(game_id: GameId, created_at: DateTime<Utc>) -> Self {
        Self {
            id: ResultId::new(),
            game_id,
            teams: Vec::new(),
            created_at,
        }
    }

    /// Attach a team to the draft. Teams keep construction order.
    pub fn build_team(
        &mut self,
        rank: i32,
        players: impl IntoIterator<Item = Player>,
    ) -> &mut Self {
        self.teams.push(Team::new(rank, players));
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn id(&self) -> ResultId {
        self.id
    }

    #[inline]
    pub fn game_id(&self) -> GameId {
        self.game_id
    }

    #[inline]
    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    #[inline]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    // =========================================================================
    // Derivation
    // =========================================================================

    /// The best (lowest) rank present, if there are any teams.
    pub fn first_place_rank(&self) -> Option<i32> {
        self.teams.iter().map(Team::rank).min()
    }

    /// Players of every team holding the first place rank.
    ///
    /// Teams in construction order, players in insertion order.
    pub fn winners(&self) -> Vec<&Player> {
        match self.first_place_rank() {
            Some(best) => self.players_where(|rank| rank == best),
            None => Vec::new(),
        }
    }

    /// Players of every team ranked strictly below first place.
    pub fn losers(&self) -> Vec<&Player> {
        match self.first_place_rank() {
            Some(best) => self.players_where(|rank| rank > best),
            None => Vec::new(),
        }
    }

    /// Winners followed by losers.
    pub fn players(&self) -> Vec<&Player> {
        let mut players = self.winners();
        players.extend(self.losers());
        players
    }

    pub fn includes(&self, player_id: PlayerId) -> bool {
        self.teams.iter().any(|team| team.contains(player_id))
    }

    fn players_where(&self, keep: impl Fn(i32) -> bool) -> Vec<&Player> {
        self.teams
            .iter()
            .filter(|team| keep(team.rank()))
            .flat_map(|team| team.players())
            .collect()
    }

    // =========================================================================
    // Behavior
    // =========================================================================

    /// Run every structural check against `rules`.
    pub fn validate(&self, rules: &GameRules) -> ResultErrors {
        ResultValidator::new(rules).validate(self)
    }

    /// Whether this result is the latest entry of one player's history.
    ///
    /// `history` is every result for that player in this result's game,
    /// ordered oldest first. When this result is part of the history it must
    /// be the last entry; otherwise nothing in the history may be newer.
    pub fn is_latest_among(&self, history: &[GameResult]) -> bool {
        match history.iter().position(|other| other.id == self.id) {
            Some(index) => index + 1 == history.len(),
            None => history
                .iter()
                .all(|other| other.created_at <= self.created_at),
        }
    }

    pub fn summary(&self) -> ResultSummary {
        ResultSummary {
            winner: self.winners().first().map(|p| p.name().to_string()),
            loser: self.losers().first().map(|p| p.name().to_string()),
            created_at: format_utc(self.created_at),
        }
    }
}
