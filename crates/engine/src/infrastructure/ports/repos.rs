//! Repository port traits for storage access.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tally_domain::{
    Game, GameId, GameResult, Player, PlayerId, Rating, RatingHistoryEvent, ResultId,
};

use super::error::RepoError;

// =============================================================================
// Database Ports (one per entity type)
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GameRepo: Send + Sync {
    async fn get(&self, id: GameId) -> Result<Option<Game>, RepoError>;
    async fn save(&self, game: &Game) -> Result<(), RepoError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlayerRepo: Send + Sync {
    async fn get(&self, id: PlayerId) -> Result<Option<Player>, RepoError>;
    async fn save(&self, player: &Player) -> Result<(), RepoError>;
}

/// Durable results. There is no update or delete.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ResultRepo: Send + Sync {
    /// Persist a new result. Saving an id that already exists is a
    /// constraint violation.
    async fn save(&self, result: &GameResult) -> Result<(), RepoError>;
    async fn get(&self, id: ResultId) -> Result<Option<GameResult>, RepoError>;

    /// Every result for `game_id` that involves `player_id`, oldest first.
    async fn list_for_player_in_game(
        &self,
        player_id: PlayerId,
        game_id: GameId,
    ) -> Result<Vec<GameResult>, RepoError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RatingRepo: Send + Sync {
    async fn get_for(
        &self,
        player_id: PlayerId,
        game_id: GameId,
    ) -> Result<Option<Rating>, RepoError>;
    async fn save(&self, rating: &Rating) -> Result<(), RepoError>;
}

// =============================================================================
// Rating History Ledger Storage
// =============================================================================

/// Append-only rating history.
///
/// Implementations must serialize `append` per (player, game) pair and assign
/// each event a sequence greater than every earlier event for that pair.
/// Readers must never observe a partially appended event.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RatingHistoryRepo: Send + Sync {
    async fn append(
        &self,
        rating: &Rating,
        value: i64,
        recorded_at: DateTime<Utc>,
    ) -> Result<RatingHistoryEvent, RepoError>;

    /// Events for the pair, most recent first.
    async fn events_for(
        &self,
        player_id: PlayerId,
        game_id: GameId,
    ) -> Result<Vec<RatingHistoryEvent>, RepoError>;
}
