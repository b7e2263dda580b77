//! confstore: alias-addressed configuration files
//!
//! Maps human-readable aliases to YAML files on disk, loads and parses them on
//! demand, and serves top-level key lookups. Every lookup re-reads the backing
//! file for the requested alias, so callers always see what is on disk.

pub mod config;
pub mod error;
pub mod registry;
pub mod selection;
pub mod store;

pub use error::{ConfigurationError, Result};
pub use registry::AliasRegistry;
pub use selection::{Aliases, Keys};
pub use store::ConfigStore;

/// Parsed document tree for a single alias.
pub use serde_yaml::{Mapping, Value};
