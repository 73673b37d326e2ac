//! Most-recent result resolution.

use std::collections::HashSet;
use std::sync::Arc;

use tally_domain::{GameId, GameResult, PlayerId, ResultId};

use crate::entities::Results;
use crate::infrastructure::ports::RepoError;

/// Answers whether a result is still the latest word for all its players.
pub struct MostRecentResolver {
    results: Arc<Results>,
}

impl MostRecentResolver {
    pub fn new(results: Arc<Results>) -> Self {
        Self { results }
    }

    /// True iff no player in `result` has a later result in the same game.
    pub async fn is_most_recent(&self, result: &GameResult) -> Result<bool, RepoError> {
        let mut checked = HashSet::new();
        for player in result.players() {
            if !checked.insert(player.id()) {
                continue;
            }
            let history = self.results_for_game(player.id(), result.game_id()).await?;
            if !result.is_latest_among(&history) {
                tracing::debug!(
                    result_id = %result.id(),
                    player_id = %player.id(),
                    "Result superseded for player"
                );
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Look up a recorded result and resolve it. `None` when no result has
    /// that id.
    pub async fn is_most_recent_by_id(&self, id: ResultId) -> Result<Option<bool>, RepoError> {
        match self.results.get(id).await? {
            Some(result) => Ok(Some(self.is_most_recent(&result).await?)),
            None => Ok(None),
        }
    }

    /// A player's results in one game, ordered by recording time.
    pub async fn results_for_game(
        &self,
        player_id: PlayerId,
        game_id: GameId,
    ) -> Result<Vec<GameResult>, RepoError> {
        self.results.for_game(player_id, game_id).await
    }
}
