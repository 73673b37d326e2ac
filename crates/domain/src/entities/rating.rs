//! Rating entities - a player's skill value per game and its history

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{GameId, PlayerId, RatingHistoryEventId, RatingId};

/// Current rating of one player in one game.
///
/// Values come from an external rating calculation; nothing here computes
/// deltas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub id: RatingId,
    pub player_id: PlayerId,
    pub game_id: GameId,
    pub value: i64,
}

impl Rating {
    pub fn new(player_id: PlayerId, game_id: GameId, value: i64) -> Self {
        Self {
            id: RatingId::new(),
            player_id,
            game_id,
            value,
        }
    }
}

/// One recorded rating value for a (player, game) pair.
///
/// `sequence` is assigned by the ledger at append time and is strictly
/// increasing in append order. It is the ordering key; `recorded_at` is
/// informational only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingHistoryEvent {
    pub id: RatingHistoryEventId,
    pub rating_id: RatingId,
    pub player_id: PlayerId,
    pub game_id: GameId,
    pub value: i64,
    pub sequence: u64,
    pub recorded_at: DateTime<Utc>,
}

impl RatingHistoryEvent {
    pub fn new(rating: &Rating, value: i64, sequence: u64, recorded_at: DateTime<Utc>) -> Self {
        Self {
            id: RatingHistoryEventId::new(),
            rating_id: rating.id,
            player_id: rating.player_id,
            game_id: rating.game_id,
            value,
            sequence,
            recorded_at,
        }
    }
}

/// Sort events most-recent first (later sequence numbers first).
pub fn sort_most_recent_first(events: &mut [RatingHistoryEvent]) {
    events.sort_by(|a, b| b.sequence.cmp(&a.sequence));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn sorts_by_descending_sequence() {
        let rating = Rating::new(PlayerId::new(), GameId::new(), 1002);
        let at = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        let mut events = vec![
            RatingHistoryEvent::new(&rating, 1000, 1, at),
            RatingHistoryEvent::new(&rating, 1002, 3, at),
            RatingHistoryEvent::new(&rating, 1001, 2, at),
        ];

        sort_most_recent_first(&mut events);

        let values: Vec<i64> = events.iter().map(|e| e.value).collect();
        assert_eq!(values, vec![1002, 1001, 1000]);
    }

    #[test]
    fn event_copies_subject_from_rating() {
        let rating = Rating::new(PlayerId::new(), GameId::new(), 1500);
        let at = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        let event = RatingHistoryEvent::new(&rating, 1490, 7, at);
        assert_eq!(event.rating_id, rating.id);
        assert_eq!(event.player_id, rating.player_id);
        assert_eq!(event.game_id, rating.game_id);
    }
}
