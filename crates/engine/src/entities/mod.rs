//! Entity modules - Domain capability encapsulation.
//!
//! Each module wraps operations for a domain entity type.
//! They depend on repository ports and provide the building blocks for use cases.

pub mod rating_history;
pub mod results;

pub use rating_history::{LedgerError, RatingHistoryLedger};
pub use results::Results;
