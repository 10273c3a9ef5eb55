//! The target registry: a uniqueness-constrained index of crawl targets
//!
//! Targets are stored under a key that is either the caller-chosen alias or,
//! when no alias is given, the URL itself. Keys are unique; insertion order
//! is preserved so enumeration is deterministic. The registry exclusively
//! owns its targets and is append/mutate-in-place only — there is no remove
//! or whole-target update.

use std::collections::HashSet;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::registry::errors::{RegistryError, RegistryResult};
use crate::registry::list::TargetList;
use crate::registry::target::Target;

/// Collection of websites to scrape data from, keyed by alias or URL
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TargetRegistry {
    targets: IndexMap<String, Target>,
}

impl TargetRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a website for data scraping.
    ///
    /// The target is stored under `name` when one is given, under `url`
    /// otherwise. `file_name` routes results to a file and `paths` seeds the
    /// extraction-path list; both are optional.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::InvalidArgument`] when `url` is empty.
    /// - [`RegistryError::DuplicateKey`] when the resolved key is taken.
    /// - [`RegistryError::InvalidUrl`] when `url` fails validation.
    ///
    /// The registry is unchanged on every failure.
    pub fn add_target(
        &mut self,
        url: &str,
        name: Option<&str>,
        file_name: Option<&str>,
        paths: Option<&[String]>,
    ) -> RegistryResult<()> {
        if url.is_empty() {
            return Err(RegistryError::InvalidArgument("url"));
        }

        let key = name.unwrap_or(url);
        if self.targets.contains_key(key) {
            return Err(RegistryError::DuplicateKey {
                key: key.to_owned(),
            });
        }

        let mut target = Target::new(url)?;
        if let Some(name) = name {
            target.set_name(name);
        }
        if let Some(file_name) = file_name {
            target.set_file_name(file_name);
        }
        if let Some(paths) = paths {
            target.add_paths(paths.iter().cloned());
        }

        debug!(key, url, "registered crawl target");
        self.targets.insert(key.to_owned(), target);
        Ok(())
    }

    /// Register a batch of already-constructed targets, each keyed by its
    /// alias (or URL when it has none).
    ///
    /// The batch is all-or-nothing: every key is checked against the
    /// registry and against the rest of the batch before anything is
    /// inserted.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateKey`] on any collision, leaving the
    /// registry untouched.
    pub fn add_targets(&mut self, targets: Vec<Target>) -> RegistryResult<()> {
        let mut batch_keys = HashSet::new();
        for target in &targets {
            let key = target.registry_key();
            if self.targets.contains_key(key) || !batch_keys.insert(key) {
                return Err(RegistryError::DuplicateKey {
                    key: key.to_owned(),
                });
            }
        }

        debug!(count = targets.len(), "registering crawl target batch");
        for target in targets {
            let key = target.registry_key().to_owned();
            self.targets.insert(key, target);
        }
        Ok(())
    }

    /// Register every target of a named list.
    ///
    /// # Errors
    ///
    /// Same all-or-nothing semantics as [`TargetRegistry::add_targets`].
    pub fn add_list(&mut self, list: TargetList) -> RegistryResult<()> {
        debug!(list = list.name(), "registering target list");
        self.add_targets(list.into_targets())
    }

    /// Append an extraction path to the target registered under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::KeyNotFound`] when no target is registered
    /// under `key`.
    pub fn add_path(&mut self, key: &str, path: &str) -> RegistryResult<()> {
        let target = self.get_mut(key)?;
        target.add_path(path);
        Ok(())
    }

    /// Append extraction paths, in order, to the target registered under
    /// `key`. The key is checked once, up front.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::KeyNotFound`] when no target is registered
    /// under `key`; no path has been appended in that case.
    pub fn add_paths(&mut self, key: &str, paths: &[String]) -> RegistryResult<()> {
        let target = self.get_mut(key)?;
        for path in paths {
            target.add_path(path);
        }
        Ok(())
    }

    /// All alias/URL keys of the registered targets, in insertion order.
    ///
    /// The returned vector is a point-in-time snapshot; later registry
    /// mutations do not affect it, re-calling reflects current state.
    #[must_use]
    pub fn target_names(&self) -> Vec<String> {
        self.targets.keys().cloned().collect()
    }

    /// The target registered under `key`, if any
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Target> {
        self.targets.get(key)
    }

    /// Is a target registered under `key`?
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.targets.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Iterate the registered targets in insertion order
    pub fn targets(&self) -> impl Iterator<Item = &Target> {
        self.targets.values()
    }

    fn get_mut(&mut self, key: &str) -> RegistryResult<&mut Target> {
        self.targets
            .get_mut(key)
            .ok_or_else(|| RegistryError::KeyNotFound {
                key: key.to_owned(),
            })
    }
}
