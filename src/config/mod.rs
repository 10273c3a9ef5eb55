//! Configuration module for crawl orchestration
//!
//! This module provides the `CrawlSettings` value object and the run/save
//! mode selectors an orchestrator reads to drive its execution cycles.

// Sub-modules
pub mod types;

// Re-exports for public API
pub use types::{CrawlSettings, RunMode, SaveMode};
