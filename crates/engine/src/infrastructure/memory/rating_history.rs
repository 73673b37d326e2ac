//! In-memory rating history ledger storage.
//!
//! Each (player, game) pair gets its own lock, so appends for one pair are
//! serialized while appends for different pairs proceed independently. The
//! sequence counter is shared and only advanced while the pair's write lock is
//! held, which keeps per-pair sequence order identical to append order.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use tally_domain::{GameId, PlayerId, Rating, RatingHistoryEvent};
use tokio::sync::RwLock;

use crate::infrastructure::ports::{RatingHistoryRepo, RepoError};

type PairKey = (PlayerId, GameId);
type EventLog = Arc<RwLock<Vec<RatingHistoryEvent>>>;

#[derive(Default)]
pub struct InMemoryRatingHistory {
    logs: DashMap<PairKey, EventLog>,
    next_sequence: AtomicU64,
}

impl InMemoryRatingHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clone the pair's log handle so no map guard is held across an await.
    fn log_for(&self, key: PairKey) -> EventLog {
        self.logs.entry(key).or_default().value().clone()
    }

    fn existing_log(&self, key: &PairKey) -> Option<EventLog> {
        self.logs.get(key).map(|entry| entry.value().clone())
    }
}

#[async_trait]
impl RatingHistoryRepo for InMemoryRatingHistory {
    async fn append(
        &self,
        rating: &Rating,
        value: i64,
        recorded_at: DateTime<Utc>,
    ) -> Result<RatingHistoryEvent, RepoError> {
        let log = self.log_for((rating.player_id, rating.game_id));
        let mut events = log.write().await;
        let sequence = self.next_sequence.fetch_add(1, Ordering::SeqCst) + 1;
        let event = RatingHistoryEvent::new(rating, value, sequence, recorded_at);
        events.push(event.clone());
        Ok(event)
    }

    async fn events_for(
        &self,
        player_id: PlayerId,
        game_id: GameId,
    ) -> Result<Vec<RatingHistoryEvent>, RepoError> {
        let Some(log) = self.existing_log(&(player_id, game_id)) else {
            return Ok(Vec::new());
        };
        let events = log.read().await;
        Ok(events.iter().rev().cloned().collect())
    }
}
