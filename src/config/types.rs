//! Crawl settings value types
//!
//! Small configuration objects consumed by an orchestrator: which target
//! lists an execution cycle processes, how results are routed to files, and
//! how often the cycle runs. No behavior is attached here.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// How an orchestrator handles one execution cycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunMode {
    /// Goes through one saved or passed list of pages
    OneList,
    /// Goes through the chosen lists
    MultiList,
    /// Goes through every saved and passed list
    #[default]
    AllLists,
}

impl RunMode {
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::OneList => "Will go through one saved or passed list of pages.",
            Self::MultiList => "Will go through the chosen lists.",
            Self::AllLists => "Will go through every saved and passed list.",
        }
    }
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OneList => write!(f, "one-list"),
            Self::MultiList => write!(f, "multi-list"),
            Self::AllLists => write!(f, "all-lists"),
        }
    }
}

/// How an orchestrator routes scraped results to files
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SaveMode {
    /// Results are not written anywhere
    #[default]
    None,
    /// Every result is appended to one file
    OneFile,
    /// One file per target
    MultiFile,
    /// One file per target plus a combined log
    Verbose,
}

/// Crawler behavior settings: run mode plus the period between executions
///
/// Immutable by convention — construct a new value to change it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrawlSettings {
    run_mode: RunMode,
    exec_period: Duration,
}

impl CrawlSettings {
    #[must_use]
    pub fn new(run_mode: RunMode, exec_period: Duration) -> Self {
        Self {
            run_mode,
            exec_period,
        }
    }

    #[must_use]
    pub fn run_mode(&self) -> RunMode {
        self.run_mode
    }

    /// Time between crawler executions; zero means "run once"
    #[must_use]
    pub fn exec_period(&self) -> Duration {
        self.exec_period
    }

    #[must_use]
    pub fn is_one_shot(&self) -> bool {
        self.exec_period.is_zero()
    }
}

impl Default for CrawlSettings {
    fn default() -> Self {
        Self {
            run_mode: RunMode::AllLists,
            exec_period: Duration::ZERO,
        }
    }
}
