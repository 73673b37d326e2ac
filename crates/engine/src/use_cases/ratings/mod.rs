//! Rating use cases.
//!
//! Ratings are calculated elsewhere; these use cases only store the value a
//! calculation produced and append it to the history ledger.

use std::sync::Arc;

use dashmap::DashMap;
use tally_domain::{GameId, PlayerId, Rating, RatingHistoryEvent};
use tokio::sync::Mutex;

use crate::entities::{LedgerError, RatingHistoryLedger};
use crate::infrastructure::ports::RatingRepo;

/// Container for rating use cases.
pub struct RatingUseCases {
    pub record: Arc<RecordRating>,
    pub ledger: Arc<RatingHistoryLedger>,
}

impl RatingUseCases {
    pub fn new(record: Arc<RecordRating>, ledger: Arc<RatingHistoryLedger>) -> Self {
        Self { record, ledger }
    }
}

/// Set a player's current rating for a game and log it in the ledger.
///
/// Calls for one (player, game) pair run one at a time, so the stored rating
/// always matches the newest ledger event and first use creates one rating.
pub struct RecordRating {
    ratings: Arc<dyn RatingRepo>,
    ledger: Arc<RatingHistoryLedger>,
    pair_locks: DashMap<(PlayerId, GameId), Arc<Mutex<()>>>,
}

impl RecordRating {
    pub fn new(ratings: Arc<dyn RatingRepo>, ledger: Arc<RatingHistoryLedger>) -> Self {
        Self {
            ratings,
            ledger,
            pair_locks: DashMap::new(),
        }
    }

    /// The rating is created on first use, so the ledger append always has a
    /// known subject.
    pub async fn execute(
        &self,
        player_id: PlayerId,
        game_id: GameId,
        value: i64,
    ) -> Result<RatingHistoryEvent, LedgerError> {
        let lock = self
            .pair_locks
            .entry((player_id, game_id))
            .or_default()
            .value()
            .clone();
        let _pair = lock.lock().await;

        let rating = match self.ratings.get_for(player_id, game_id).await? {
            Some(existing) => Rating { value, ..existing },
            None => Rating::new(player_id, game_id, value),
        };
        self.ratings.save(&rating).await?;
        self.ledger.append(player_id, game_id, value).await
    }
}
