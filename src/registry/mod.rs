//! Target registry and validation
//!
//! The core of the crate: the [`Target`] entity, the uniqueness-constrained
//! [`TargetRegistry`] that indexes targets by alias or URL, and the error
//! taxonomy shared by both.

// Sub-modules
pub mod errors;
pub mod list;
pub mod registry;
pub mod target;

// Re-exports for public API
pub use errors::{RegistryError, RegistryResult};
pub use list::TargetList;
pub use registry::TargetRegistry;
pub use target::Target;
