//! A crawl session: settings plus the registry of targets
//!
//! Whoever drives fetch-and-extract cycles constructs a `CrawlSession` and
//! owns it explicitly — there is no ambient global instance. The session
//! performs no fetching or scheduling itself; it is the configuration the
//! orchestrator reads.

use tracing::debug;

use crate::config::CrawlSettings;
use crate::registry::{RegistryResult, TargetRegistry};

/// Owns the crawl settings and the collection of websites to scrape
#[derive(Debug, Clone, Default)]
pub struct CrawlSession {
    settings: CrawlSettings,
    registry: TargetRegistry,
}

impl CrawlSession {
    /// Create a session with default settings (all lists, run once)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session with explicit settings
    #[must_use]
    pub fn with_settings(settings: CrawlSettings) -> Self {
        debug!(run_mode = %settings.run_mode(), "starting crawl session");
        Self {
            settings,
            registry: TargetRegistry::new(),
        }
    }

    #[must_use]
    pub fn settings(&self) -> &CrawlSettings {
        &self.settings
    }

    #[must_use]
    pub fn registry(&self) -> &TargetRegistry {
        &self.registry
    }

    #[must_use]
    pub fn registry_mut(&mut self) -> &mut TargetRegistry {
        &mut self.registry
    }

    /// Register a website for data scraping. See
    /// [`TargetRegistry::add_target`].
    ///
    /// # Errors
    ///
    /// Propagates the registry failure modes unchanged.
    pub fn add_target(&mut self, url: &str, name: Option<&str>) -> RegistryResult<()> {
        self.registry.add_target(url, name, None, None)
    }

    /// Append an extraction path to a registered target. See
    /// [`TargetRegistry::add_path`].
    ///
    /// # Errors
    ///
    /// Propagates the registry failure modes unchanged.
    pub fn add_path(&mut self, key: &str, path: &str) -> RegistryResult<()> {
        self.registry.add_path(key, path)
    }

    /// All alias/URL keys of the registered targets, in insertion order
    #[must_use]
    pub fn target_names(&self) -> Vec<String> {
        self.registry.target_names()
    }
}
