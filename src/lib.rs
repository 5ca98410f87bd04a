#![doc(test(attr(deny(warnings))))]

//! Fintrack computes the gamification side of a personal finance tracker:
//! expense-logging streaks and achievement badges, plus the boundary and
//! reporting glue a frontend needs around them.

pub mod cli;
pub mod errors;
pub mod report;
pub mod utils;

pub use fintrack_config as config;
pub use fintrack_core as engine;
pub use fintrack_domain as domain;

/// Directive used when neither `RUST_LOG` nor the config supplies one.
pub const DEFAULT_LOG_FILTER: &str = "fintrack=info";

/// Initializes global tracing with the default filter.
pub fn init() {
    init_with_filter(DEFAULT_LOG_FILTER);
}

/// Initializes global tracing once; later calls are no-ops.
pub fn init_with_filter(filter: &str) {
    utils::init_tracing(filter);
    tracing::debug!(filter, "Fintrack tracing initialized.");
}
