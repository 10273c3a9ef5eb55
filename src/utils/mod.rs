//! URL helpers shared across the crate
//!
//! This module provides the syntactic URL checks the registry relies on
//! when validating target addresses.

// Sub-modules
pub mod url_utils;

// Re-exports for public API
pub use url_utils::{is_valid_url, parse_http_url};
