//! fintrack-domain
//!
//! Pure domain models (expense records, profiles, streaks, statistics, badges).
//! No I/O, no CLI, no storage. Only data types and core enums.

pub mod badge;
pub mod common;
pub mod expense;
pub mod profile;
pub mod stats;
pub mod streak;

pub use badge::*;
pub use common::*;
pub use expense::*;
pub use profile::*;
pub use stats::*;
pub use streak::*;
