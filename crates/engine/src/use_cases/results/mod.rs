//! Result use cases.
//!
//! Reporting runs the full validation pipeline before anything is persisted;
//! recency questions are answered from the stored result history.

use std::sync::Arc;

mod most_recent;
mod report;

pub use most_recent::MostRecentResolver;
pub use report::{ReportResult, ReportResultError, ResultReport, TeamReport};

/// Container for result use cases.
pub struct ResultUseCases {
    pub report: Arc<ReportResult>,
    pub most_recent: Arc<MostRecentResolver>,
}

impl ResultUseCases {
    pub fn new(report: Arc<ReportResult>, most_recent: Arc<MostRecentResolver>) -> Self {
        Self {
            report,
            most_recent,
        }
    }
}
