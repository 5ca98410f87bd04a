use std::fmt;

use serde::{Deserialize, Serialize};

/// Settings controlling how the driver evaluates and reports gamification state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub day_boundary: DayBoundary,
    #[serde(default)]
    pub ingest_mode: IngestMode,
    #[serde(default = "Config::default_log_filter")]
    pub log_filter: String,
    #[serde(default = "Config::default_pretty_output")]
    pub pretty_output: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            day_boundary: DayBoundary::default(),
            ingest_mode: IngestMode::default(),
            log_filter: Self::default_log_filter(),
            pretty_output: Self::default_pretty_output(),
        }
    }
}

impl Config {
    pub fn default_log_filter() -> String {
        "fintrack=info".into()
    }

    pub fn default_pretty_output() -> bool {
        true
    }
}

/// Which calendar day counts as "today" when anchoring streaks.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DayBoundary {
    #[default]
    Local,
    Utc,
}

impl fmt::Display for DayBoundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DayBoundary::Local => "local",
            DayBoundary::Utc => "utc",
        };
        f.write_str(label)
    }
}

/// How invalid raw records are handled at the input boundary.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum IngestMode {
    /// Skip invalid records and report them.
    #[default]
    Lenient,
    /// Reject the whole input on the first invalid record.
    Strict,
}

impl fmt::Display for IngestMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            IngestMode::Lenient => "lenient",
            IngestMode::Strict => "strict",
        };
        f.write_str(label)
    }
}
