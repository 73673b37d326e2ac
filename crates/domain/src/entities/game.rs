//! Game entity - the rules context results are reported under

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{GameId, GameName, GameRules};

/// A game and the rules that govern its results.
///
/// `updated_at` is a denormalized "last activity" marker. Nothing in the
/// domain cascades into it; the application layer calls [`Game::touch`] after
/// a result for this game has been durably created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    id: GameId,
    name: GameName,
    rules: GameRules,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Game {
    pub fn new(name: GameName, rules: GameRules, now: DateTime<Utc>) -> Self {
        Self {
            id: GameId::new(),
            name,
            rules,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> GameId {
        self.id
    }

    pub fn name(&self) -> &GameName {
        &self.name
    }

    pub fn rules(&self) -> &GameRules {
        &self.rules
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Mark the game as modified at `now`. `updated_at` never moves
    /// backwards.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        if now > self.updated_at {
            self.updated_at = now;
        }
    }
}
