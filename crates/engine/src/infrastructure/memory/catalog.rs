//! Keyed in-memory stores for games, players, and current ratings.

use std::collections::HashMap;

use async_trait::async_trait;
use tally_domain::{Game, GameId, Player, PlayerId, Rating};
use tokio::sync::RwLock;

use crate::infrastructure::ports::{GameRepo, PlayerRepo, RatingRepo, RepoError};

#[derive(Default)]
pub struct InMemoryGameRepo {
    games: RwLock<HashMap<GameId, Game>>,
}

impl InMemoryGameRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GameRepo for InMemoryGameRepo {
    async fn get(&self, id: GameId) -> Result<Option<Game>, RepoError> {
        Ok(self.games.read().await.get(&id).cloned())
    }

    async fn save(&self, game: &Game) -> Result<(), RepoError> {
        self.games.write().await.insert(game.id(), game.clone());
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryPlayerRepo {
    players: RwLock<HashMap<PlayerId, Player>>,
}

impl InMemoryPlayerRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PlayerRepo for InMemoryPlayerRepo {
    async fn get(&self, id: PlayerId) -> Result<Option<Player>, RepoError> {
        Ok(self.players.read().await.get(&id).cloned())
    }

    async fn save(&self, player: &Player) -> Result<(), RepoError> {
        self.players.write().await.insert(player.id(), player.clone());
        Ok(())
    }
}

/// Current rating per (player, game). Saving replaces the previous value.
#[derive(Default)]
pub struct InMemoryRatingRepo {
    ratings: RwLock<HashMap<(PlayerId, GameId), Rating>>,
}

impl InMemoryRatingRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RatingRepo for InMemoryRatingRepo {
    async fn get_for(
        &self,
        player_id: PlayerId,
        game_id: GameId,
    ) -> Result<Option<Rating>, RepoError> {
        Ok(self.ratings.read().await.get(&(player_id, game_id)).cloned())
    }

    async fn save(&self, rating: &Rating) -> Result<(), RepoError> {
        self.ratings
            .write()
            .await
            .insert((rating.player_id, rating.game_id), rating.clone());
        Ok(())
    }
}
