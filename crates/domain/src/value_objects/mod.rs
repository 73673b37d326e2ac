//! Value objects - Immutable objects defined by their attributes

mod game_rules;
mod names;

pub use game_rules::GameRules;
pub use names::{GameName, PlayerName};
