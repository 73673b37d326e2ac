//! Domain entities - Core business objects with identity

mod game;
mod player;
mod rating;
mod team;

pub use game::Game;
pub use player::Player;
pub use rating::{sort_most_recent_first, Rating, RatingHistoryEvent};
pub use team::{Team, WINNING_RANK};
