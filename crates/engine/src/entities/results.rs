//! Result entity operations.

use std::sync::Arc;
use tally_domain::{GameId, GameResult, PlayerId, ResultId, ResultSummary};

use crate::infrastructure::ports::{RepoError, ResultRepo};

/// Result entity operations.
pub struct Results {
    repo: Arc<dyn ResultRepo>,
}

impl Results {
    pub fn new(repo: Arc<dyn ResultRepo>) -> Self {
        Self { repo }
    }

    pub async fn get(&self, id: ResultId) -> Result<Option<GameResult>, RepoError> {
        self.repo.get(id).await
    }

    pub async fn save(&self, result: &GameResult) -> Result<(), RepoError> {
        self.repo.save(result).await
    }

    /// A player's results restricted to one game, oldest first.
    pub async fn for_game(
        &self,
        player_id: PlayerId,
        game_id: GameId,
    ) -> Result<Vec<GameResult>, RepoError> {
        self.repo.list_for_player_in_game(player_id, game_id).await
    }

    /// Exported summaries of a player's results in one game, oldest first.
    pub async fn summaries_for_game(
        &self,
        player_id: PlayerId,
        game_id: GameId,
    ) -> Result<Vec<ResultSummary>, RepoError> {
        let results = self.for_game(player_id, game_id).await?;
        Ok(results.iter().map(GameResult::summary).collect())
    }
}
