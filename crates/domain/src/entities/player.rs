//! Player entity - an identity that takes part in results

use serde::{Deserialize, Serialize};

use crate::{PlayerId, PlayerName};

/// A player with a display name.
///
/// Players outlive any single result; teams hold copies keyed by `id`, so
/// identity comparisons always go through [`Player::id`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    name: PlayerName,
}

impl Player {
    pub fn new(name: PlayerName) -> Self {
        Self {
            id: PlayerId::new(),
            name,
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn name(&self) -> &PlayerName {
        &self.name
    }
}
