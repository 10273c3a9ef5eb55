//! Named batches of targets
//!
//! A `TargetList` is the unit the [`RunMode`](crate::config::RunMode)
//! variants select over: a saved or passed list of websites to crawl in one
//! execution cycle.

use serde::{Deserialize, Serialize};

use crate::registry::target::Target;

/// A named list of websites to be crawled
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetList {
    name: String,
    targets: Vec<Target>,
}

impl TargetList {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            targets: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_targets(name: impl Into<String>, targets: Vec<Target>) -> Self {
        Self {
            name: name.into(),
            targets,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn push(&mut self, target: Target) {
        self.targets.push(target);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Target> {
        self.targets.iter()
    }

    #[must_use]
    pub fn into_targets(self) -> Vec<Target> {
        self.targets
    }
}

impl IntoIterator for TargetList {
    type Item = Target;
    type IntoIter = std::vec::IntoIter<Target>;

    fn into_iter(self) -> Self::IntoIter {
        self.targets.into_iter()
    }
}
