//! In-memory port implementations.
//!
//! Used by the scenario runner and by integration-style tests. Nothing here
//! persists across process restarts.

mod catalog;
mod rating_history;
mod results;

pub use catalog::{InMemoryGameRepo, InMemoryPlayerRepo, InMemoryRatingRepo};
pub use rating_history::InMemoryRatingHistory;
pub use results::InMemoryResultRepo;
