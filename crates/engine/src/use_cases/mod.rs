//! Use cases - User story orchestration.
//!
//! Each module contains use cases for a specific domain area.
//! Use cases orchestrate across entity modules to fulfill user stories.

pub mod ratings;
pub mod results;

// Re-export main types
pub use ratings::{RatingUseCases, RecordRating};
pub use results::{
    MostRecentResolver, ReportResult, ReportResultError, ResultReport, ResultUseCases, TeamReport,
};
