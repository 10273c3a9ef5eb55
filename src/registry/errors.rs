//! Error types for target registration and lookup
//!
//! Every failure in this crate is a caller-fixable condition reported
//! synchronously to the invoking operation; nothing is retried internally.

use thiserror::Error;

/// Result type alias for registry operations
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Error types for target registration and lookup
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A required argument was present but empty
    #[error("Invalid argument: '{0}' cannot be empty")]
    InvalidArgument(&'static str),

    /// A URL string that does not parse as an absolute http(s) address
    #[error("URL '{url}' has a wrong format, expected e.g. https://google.com")]
    InvalidUrl { url: String },

    /// A target is already registered under this key
    #[error("A target with the key '{key}' already exists")]
    DuplicateKey { key: String },

    /// No target registered under this key
    #[error("No target has been found for the key '{key}'")]
    KeyNotFound { key: String },
}

impl RegistryError {
    /// The alias/URL key involved in a collision or lookup miss, if any
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::DuplicateKey { key } | Self::KeyNotFound { key } => Some(key),
            Self::InvalidArgument(_) | Self::InvalidUrl { .. } => None,
        }
    }
}
