//! Application state and composition.

use std::sync::Arc;

use crate::entities::{RatingHistoryLedger, Results};
use crate::infrastructure::{
    clock::SystemClock,
    memory::{
        InMemoryGameRepo, InMemoryPlayerRepo, InMemoryRatingHistory, InMemoryRatingRepo,
        InMemoryResultRepo,
    },
    ports::{ClockPort, GameRepo, PlayerRepo, RatingHistoryRepo, RatingRepo, ResultRepo},
};
use crate::use_cases;

/// Main application state.
///
/// Holds all repository ports and use cases.
pub struct App {
    pub repositories: Repositories,
    pub use_cases: UseCases,
    pub clock: Arc<dyn ClockPort>,
}

/// Container for all repository ports.
#[derive(Clone)]
pub struct Repositories {
    pub game: Arc<dyn GameRepo>,
    pub player: Arc<dyn PlayerRepo>,
    pub result: Arc<dyn ResultRepo>,
    pub rating: Arc<dyn RatingRepo>,
    pub rating_history: Arc<dyn RatingHistoryRepo>,
}

impl Repositories {
    /// Fresh, empty in-memory storage for every port.
    pub fn in_memory() -> Self {
        Self {
            game: Arc::new(InMemoryGameRepo::new()),
            player: Arc::new(InMemoryPlayerRepo::new()),
            result: Arc::new(InMemoryResultRepo::new()),
            rating: Arc::new(InMemoryRatingRepo::new()),
            rating_history: Arc::new(InMemoryRatingHistory::new()),
        }
    }
}

/// Container for all use cases.
pub struct UseCases {
    pub results: use_cases::ResultUseCases,
    pub ratings: use_cases::RatingUseCases,
}

impl App {
    /// Create a new App with all dependencies wired up.
    pub fn new(repos: Repositories, clock: Arc<dyn ClockPort>) -> Self {
        let results = Arc::new(Results::new(repos.result.clone()));
        let ledger = Arc::new(RatingHistoryLedger::new(
            repos.rating.clone(),
            repos.rating_history.clone(),
            clock.clone(),
        ));

        let report = Arc::new(use_cases::ReportResult::new(
            repos.game.clone(),
            repos.player.clone(),
            results.clone(),
            clock.clone(),
        ));
        let most_recent = Arc::new(use_cases::MostRecentResolver::new(results));
        let record = Arc::new(use_cases::RecordRating::new(
            repos.rating.clone(),
            ledger.clone(),
        ));

        Self {
            repositories: repos,
            use_cases: UseCases {
                results: use_cases::ResultUseCases::new(report, most_recent),
                ratings: use_cases::RatingUseCases::new(record, ledger),
            },
            clock,
        }
    }

    /// In-memory storage with the system clock.
    pub fn in_memory() -> Self {
        Self::new(Repositories::in_memory(), Arc::new(SystemClock::new()))
    }
}
