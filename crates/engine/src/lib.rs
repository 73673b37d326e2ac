//! Tally Engine library.
//!
//! Application layer around `tally-domain`: result reporting, recency
//! queries, and the rating history ledger.
//!
//! ## Structure
//!
//! - `entities/` - Entity modules wrapping repository ports
//! - `use_cases/` - User story orchestration across entities
//! - `infrastructure/` - Port traits and their in-memory adapters
//! - `scenario` - JSON scenario replay used by the binary
//! - `app` - Application composition

pub mod app;
pub mod config;
pub mod entities;
pub mod infrastructure;
pub mod scenario;
pub mod use_cases;

pub use app::App;
pub use config::EngineConfig;
