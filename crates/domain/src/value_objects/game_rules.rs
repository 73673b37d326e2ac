//! Structural rules a reported result must satisfy for one game.

use serde::{Deserialize, Serialize};

/// Legal shapes of a result for one game.
///
/// Every bound is inclusive and optional; `None` means unbounded. Bounds are
/// assumed consistent (`min <= max`) when configured and are not re-checked
/// during result validation.
///
/// # Example
///
/// ```
/// use tally_domain::GameRules;
///
/// let rules = GameRules::default()
///     .with_team_bounds(Some(2), Some(4))
///     .with_ties_allowed(false);
///
/// assert_eq!(rules.min_teams(), Some(2));
/// assert!(!rules.allows_ties());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameRules {
    min_teams: Option<u32>,
    max_teams: Option<u32>,
    min_players_per_team: Option<u32>,
    max_players_per_team: Option<u32>,
    allow_ties: bool,
}

impl Default for GameRules {
    /// Unbounded team and player counts, ties allowed.
    fn default() -> Self {
        Self {
            min_teams: None,
            max_teams: None,
            min_players_per_team: None,
            max_players_per_team: None,
            allow_ties: true,
        }
    }
}

impl GameRules {
    pub fn with_team_bounds(mut self, min: Option<u32>, max: Option<u32>) -> Self {
        self.min_teams = min;
        self.max_teams = max;
        self
    }

    pub fn with_players_per_team(mut self, min: Option<u32>, max: Option<u32>) -> Self {
        self.min_players_per_team = min;
        self.max_players_per_team = max;
        self
    }

    pub fn with_ties_allowed(mut self, allow_ties: bool) -> Self {
        self.allow_ties = allow_ties;
        self
    }

    pub fn min_teams(&self) -> Option<u32> {
        self.min_teams
    }

    pub fn max_teams(&self) -> Option<u32> {
        self.max_teams
    }

    pub fn min_players_per_team(&self) -> Option<u32> {
        self.min_players_per_team
    }

    pub fn max_players_per_team(&self) -> Option<u32> {
        self.max_players_per_team
    }

    pub fn allows_ties(&self) -> bool {
        self.allow_ties
    }
}
