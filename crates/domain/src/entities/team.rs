//! Team - a ranked group of players inside one result

use serde::{Deserialize, Serialize};

use crate::{Player, PlayerId};

/// Rank that denotes first place.
pub const WINNING_RANK: i32 = 1;

/// A ranked group of players within a single result.
///
/// Lower rank is a better placement. The rank is stored as given: a zero or
/// negative rank is not a construction error, it fails result validation
/// instead. Player order is insertion order and duplicates are kept, since
/// uniqueness is a property of the whole result rather than of one team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    rank: i32,
    players: Vec<Player>,
}

impl Team {
    pub fn new(rank: i32, players: impl IntoIterator<Item = Player>) -> Self {
        Self {
            rank,
            players: players.into_iter().collect(),
        }
    }

    pub fn rank(&self) -> i32 {
        self.rank
    }

    /// Players in insertion order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn contains(&self, player_id: PlayerId) -> bool {
        self.players.iter().any(|p| p.id() == player_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PlayerName;

    fn player(name: &str) -> Player {
        Player::new(PlayerName::new(name).unwrap())
    }

    #[test]
    fn preserves_insertion_order() {
        let (a, b, c) = (player("a"), player("b"), player("c"));
        let team = Team::new(1, vec![c.clone(), a.clone(), b.clone()]);
        assert_eq!(team.players(), &[c, a, b]);
    }

    #[test]
    fn empty_team_is_constructible() {
        let team = Team::new(2, Vec::new());
        assert_eq!(team.player_count(), 0);
        assert_eq!(team.rank(), 2);
    }

    #[test]
    fn duplicate_entries_are_kept() {
        let a = player("a");
        let team = Team::new(3, vec![a.clone(), a.clone()]);
        assert_eq!(team.player_count(), 2);
        assert!(team.contains(a.id()));
    }

    #[test]
    fn negative_rank_is_stored_as_given() {
        let team = Team::new(-1, vec![player("a")]);
        assert_eq!(team.rank(), -1);
    }
}
