//! Common utility functions shared across the Tally domain and engine.
//!
//! # Design Principles
//!
//! - **Pure functions only** - no side effects, no I/O
//! - **Minimal dependencies** - only chrono for datetime utilities

pub mod datetime;

// Re-export commonly used functions at crate root for convenience
pub use datetime::{format_utc, UTC_DISPLAY_FORMAT};
