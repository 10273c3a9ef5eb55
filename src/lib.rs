//! Target registry and validation layer for web crawlers.
//!
//! This crate is the configuration core of a crawler: callers register
//! target websites by URL — optionally with an alias, an output file and a
//! set of extraction paths — and an external orchestrator enumerates the
//! registry to drive its fetch-and-extract cycles. URL validation is purely
//! syntactic; no network access happens here.
//!
//! ```
//! use crawl_targets::{CrawlSession, RunMode};
//!
//! # fn main() -> Result<(), crawl_targets::RegistryError> {
//! let mut session = CrawlSession::new();
//! session.add_target("https://example.com", Some("ex"))?;
//! session.add_path("ex", "//body/div")?;
//!
//! assert_eq!(session.target_names(), ["ex"]);
//! assert_eq!(session.settings().run_mode(), RunMode::AllLists);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod registry;
pub mod session;
pub mod utils;

pub use config::{CrawlSettings, RunMode, SaveMode};
pub use registry::{RegistryError, RegistryResult, Target, TargetList, TargetRegistry};
pub use session::CrawlSession;
pub use utils::is_valid_url;
