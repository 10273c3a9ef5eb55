//! The target entity: one configured crawl destination
//!
//! A `Target` is a validated URL plus the extraction metadata attached to
//! it: an ordered list of extraction-path expressions, an optional alias and
//! an optional output file name. Construction validates the URL; a `Target`
//! with an address that disagrees with its URL string is unrepresentable.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use url::Url;

use crate::registry::errors::{RegistryError, RegistryResult};
use crate::utils::url_utils::parse_http_url;

/// A targeted website and the configuration needed to scrape it
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "TargetRepr", into = "TargetRepr")]
pub struct Target {
    /// Website address as the caller supplied it
    url: String,
    /// Website address in structured form, derived from `url` at
    /// construction time
    address: Url,
    /// Alias the registry may key this target under
    name: Option<String>,
    /// When set, an orchestrator appends results to this file
    file_name: Option<String>,
    /// Extraction-path expressions pointing at the data, in append order
    paths: Vec<String>,
}

impl Target {
    /// Create a target for the given website.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidUrl`] when `url` is not an absolute
    /// http(s) address.
    pub fn new(url: &str) -> RegistryResult<Self> {
        let address = parse_http_url(url)?;
        Ok(Self {
            url: url.to_owned(),
            address,
            name: None,
            file_name: None,
            paths: Vec::new(),
        })
    }

    /// Create a target seeded with a single extraction path.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidUrl`] when `url` is not an absolute
    /// http(s) address.
    pub fn with_path(url: &str, path: &str) -> RegistryResult<Self> {
        let mut target = Self::new(url)?;
        target.add_path(path);
        Ok(target)
    }

    /// Create a target seeded with a list of extraction paths.
    ///
    /// An empty iterator is accepted and seeds nothing.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidUrl`] when `url` is not an absolute
    /// http(s) address.
    pub fn with_paths<I, S>(url: &str, paths: I) -> RegistryResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut target = Self::new(url)?;
        target.add_paths(paths);
        Ok(target)
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub fn address(&self) -> &Url {
        &self.address
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[must_use]
    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    #[must_use]
    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    /// Set the alias the registry keys this target under
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    /// Set the file results should be appended to
    pub fn set_file_name(&mut self, file_name: impl Into<String>) {
        self.file_name = Some(file_name.into());
    }

    /// The key the registry stores this target under: the alias when one is
    /// set, the URL otherwise.
    #[must_use]
    pub fn registry_key(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.url)
    }

    /// Append one extraction path.
    ///
    /// The string is stored as-is — blank strings included — and call order
    /// is preserved. No deduplication.
    pub fn add_path(&mut self, path: &str) {
        self.paths.push(path.to_owned());
    }

    /// Append extraction paths in iteration order.
    pub fn add_paths<I, S>(&mut self, paths: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for path in paths {
            self.paths.push(path.into());
        }
    }
}

/// Two targets are the same target iff they point at the same URL string;
/// alias, file routing and path lists never participate.
impl PartialEq for Target {
    fn eq(&self, other: &Self) -> bool {
        self.url == other.url
    }
}

impl Eq for Target {}

impl Hash for Target {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.url.hash(state);
    }
}

/// Wire form of [`Target`]: the derived `address` is not serialized, it is
/// re-parsed on deserialization so a stored target can never come back with
/// an address that disagrees with its URL.
#[derive(Serialize, Deserialize)]
struct TargetRepr {
    url: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    file_name: Option<String>,
    #[serde(default)]
    paths: Vec<String>,
}

impl TryFrom<TargetRepr> for Target {
    type Error = RegistryError;

    fn try_from(repr: TargetRepr) -> Result<Self, Self::Error> {
        let mut target = Target::new(&repr.url)?;
        target.name = repr.name;
        target.file_name = repr.file_name;
        target.paths = repr.paths;
        Ok(target)
    }
}

impl From<Target> for TargetRepr {
    fn from(target: Target) -> Self {
        Self {
            url: target.url,
            name: target.name,
            file_name: target.file_name,
            paths: target.paths,
        }
    }
}
