//! In-memory result store. Insertion order is recording order.

use async_trait::async_trait;
use tally_domain::{GameId, GameResult, PlayerId, ResultId};
use tokio::sync::RwLock;

use crate::infrastructure::ports::{RepoError, ResultRepo};

#[derive(Default)]
pub struct InMemoryResultRepo {
    results: RwLock<Vec<GameResult>>,
}

impl InMemoryResultRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ResultRepo for InMemoryResultRepo {
    async fn save(&self, result: &GameResult) -> Result<(), RepoError> {
        let mut results = self.results.write().await;
        if results.iter().any(|r| r.id() == result.id()) {
            return Err(RepoError::constraint(format!(
                "result {} is already recorded",
                result.id()
            )));
        }
        results.push(result.clone());
        Ok(())
    }

    async fn get(&self, id: ResultId) -> Result<Option<GameResult>, RepoError> {
        Ok(self
            .results
            .read()
            .await
            .iter()
            .find(|r| r.id() == id)
            .cloned())
    }

    async fn list_for_player_in_game(
        &self,
        player_id: PlayerId,
        game_id: GameId,
    ) -> Result<Vec<GameResult>, RepoError> {
        Ok(self
            .results
            .read()
            .await
            .iter()
            .filter(|r| r.game_id() == game_id && r.includes(player_id))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use tally_domain::{Player, PlayerName};

    fn player(name: &str) -> Player {
        Player::new(PlayerName::new(name).unwrap())
    }

    fn result_for(game_id: GameId, winner: &Player, secs: i64) -> GameResult {
        let at = Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap();
        let mut result = GameResult::new(game_id, at);
        result
            .build_team(1, vec![winner.clone()])
            .build_team(2, vec![player("opponent")]);
        result
    }

    #[tokio::test]
    async fn lists_only_the_requested_game() {
        let repo = InMemoryResultRepo::new();
        let alice = player("alice");
        let (game1, game2) = (GameId::new(), GameId::new());
        let in_game1 = result_for(game1, &alice, 0);
        let in_game2 = result_for(game2, &alice, 1);
        repo.save(&in_game1).await.unwrap();
        repo.save(&in_game2).await.unwrap();

        assert_eq!(
            repo.list_for_player_in_game(alice.id(), game1).await.unwrap(),
            vec![in_game1]
        );
        assert_eq!(
            repo.list_for_player_in_game(alice.id(), game2).await.unwrap(),
            vec![in_game2]
        );
    }

    #[tokio::test]
    async fn lists_in_recording_order() {
        let repo = InMemoryResultRepo::new();
        let alice = player("alice");
        let game_id = GameId::new();
        let first = result_for(game_id, &alice, 0);
        let second = result_for(game_id, &alice, 0);
        repo.save(&first).await.unwrap();
        repo.save(&second).await.unwrap();

        let ids: Vec<ResultId> = repo
            .list_for_player_in_game(alice.id(), game_id)
            .await
            .unwrap()
            .iter()
            .map(GameResult::id)
            .collect();
        assert_eq!(ids, vec![first.id(), second.id()]);
    }

    #[tokio::test]
    async fn saving_twice_is_rejected() {
        let repo = InMemoryResultRepo::new();
        let result = result_for(GameId::new(), &player("alice"), 0);
        repo.save(&result).await.unwrap();

        let err = repo.save(&result).await.unwrap_err();
        assert!(matches!(err, RepoError::ConstraintViolation(_)));
    }
}
