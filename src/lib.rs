//! # treedrift - Filesystem Metadata Drift Auditor
//!
//! Compares two directory trees, each local or reachable over ssh, and
//! reports which paths exist only on one side, which are common, and which
//! differ in ownership, permission bits, or size. No file contents are read;
//! the comparison works entirely on the metadata listing each side's
//! traversal produces.

// Module declarations
pub mod collector;
pub mod commands;
pub mod config;
pub mod report;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use config::Config;
pub use store::{DiffKind, DiffStore};
pub use types::{DriftError, MetaEntry, Side, SourceSpec};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
