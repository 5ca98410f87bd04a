//! fintrack-core
//!
//! Gamification engine for the expense tracker: logging streaks, badge
//! evaluation, spending aggregates, and boundary validation of raw records.
//! Depends on fintrack-domain. No CLI, no terminal I/O, no storage.

pub mod badge_service;
pub mod error;
pub mod gamification_service;
pub mod ingest;
pub mod stats_service;
pub mod streak_service;
pub mod time;

pub use badge_service::*;
pub use error::CoreError;
pub use gamification_service::*;
pub use ingest::*;
pub use stats_service::*;
pub use streak_service::*;
pub use time::*;

#[cfg(test)]
mod tests;
