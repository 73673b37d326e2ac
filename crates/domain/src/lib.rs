//! Tally domain: result validation, outcome derivation, and rating history.
//!
//! Everything in this crate is synchronous and free of I/O. Storage, clocks,
//! and orchestration live in `tally-engine` behind port traits.

extern crate self as tally_domain;

pub mod aggregates;
pub mod common;
pub mod entities;
pub mod error;
pub mod ids;
pub mod validation;
pub mod value_objects;

pub use aggregates::{GameResult, ResultSummary};

pub use entities::{
    sort_most_recent_first, Game, Player, Rating, RatingHistoryEvent, Team, WINNING_RANK,
};

pub use error::DomainError;

// Re-export ID types
pub use ids::{GameId, PlayerId, RatingHistoryEventId, RatingId, ResultId};

pub use validation::{FailureField, ResultErrors, ResultValidator, ValidationFailure};

pub use value_objects::{GameName, GameRules, PlayerName};
