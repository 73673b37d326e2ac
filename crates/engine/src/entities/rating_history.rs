//! Rating history ledger.
//!
//! The ledger records rating values produced by an external rating
//! calculation. It never computes ratings and never rewrites history: the only
//! write is [`RatingHistoryLedger::append`].

use std::sync::Arc;

use tally_domain::{sort_most_recent_first, GameId, PlayerId, RatingHistoryEvent};

use crate::infrastructure::ports::{ClockPort, RatingHistoryRepo, RatingRepo, RepoError};

#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    /// No rating exists for the pair, so there is nothing to record against.
    #[error("Unknown rating subject: player {player_id} in game {game_id}")]
    UnknownSubject { player_id: PlayerId, game_id: GameId },
    #[error(transparent)]
    Repo(#[from] RepoError),
}

/// Append-only, per (player, game) rating history.
pub struct RatingHistoryLedger {
    ratings: Arc<dyn RatingRepo>,
    history: Arc<dyn RatingHistoryRepo>,
    clock: Arc<dyn ClockPort>,
}

impl RatingHistoryLedger {
    pub fn new(
        ratings: Arc<dyn RatingRepo>,
        history: Arc<dyn RatingHistoryRepo>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            ratings,
            history,
            clock,
        }
    }

    /// Record `value` as the newest rating event for the pair.
    pub async fn append(
        &self,
        player_id: PlayerId,
        game_id: GameId,
        value: i64,
    ) -> Result<RatingHistoryEvent, LedgerError> {
        let rating = self
            .ratings
            .get_for(player_id, game_id)
            .await?
            .ok_or(LedgerError::UnknownSubject { player_id, game_id })?;

        let event = self.history.append(&rating, value, self.clock.now()).await?;

        tracing::info!(
            player_id = %player_id,
            game_id = %game_id,
            value,
            sequence = event.sequence,
            "Recorded rating history event"
        );
        Ok(event)
    }

    /// Every event for the pair, most recent first.
    pub async fn events_for(
        &self,
        player_id: PlayerId,
        game_id: GameId,
    ) -> Result<Vec<RatingHistoryEvent>, LedgerError> {
        let mut events = self.history.events_for(player_id, game_id).await?;
        sort_most_recent_first(&mut events);
        Ok(events)
    }
}
