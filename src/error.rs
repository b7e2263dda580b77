//! Error type shared by every configuration operation.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigurationError>;

/// Errors raised while building a registry, loading files, or looking up keys.
#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("No configuration files provided.")]
    EmptyRegistry,

    #[error("Invalid alias registry: {reason}")]
    InvalidRegistry { reason: String },

    #[error("Alias '{alias}' not found in configuration files.")]
    UnknownAlias { alias: String },

    #[error("Configuration file '{}' for alias '{alias}' does not exist.", .path.display())]
    MissingFile { path: PathBuf, alias: String },

    #[error("Failed to read configuration file '{}' for alias '{alias}': {source}", .path.display())]
    Read {
        path: PathBuf,
        alias: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse configuration file '{}' for alias '{alias}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        alias: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Multiple configurations are loaded. Please specify an alias.")]
    AmbiguousAlias,

    #[error("Key '{key}' not found in configuration '{alias}'.")]
    KeyNotFound { key: String, alias: String },

    #[error("Configuration '{alias}' is not a mapping; top-level key lookup is unavailable")]
    NotAMapping { alias: String },

    #[error("Invalid keys argument: {reason}")]
    InvalidKeys { reason: String },

    #[error("Invalid aliases argument: {reason}")]
    InvalidAliases { reason: String },

    #[error("Invalid alias manifest '{}': {reason}", .path.display())]
    Manifest { path: PathBuf, reason: String },

    #[error("Configuration '{alias}' does not match the requested type: {source}")]
    Deserialize {
        alias: String,
        #[source]
        source: serde_yaml::Error,
    },
}

impl ConfigurationError {
    /// Alias the error refers to, when it names one.
    pub fn alias(&self) -> Option<&str> {
        match self {
            Self::UnknownAlias { alias }
            | Self::MissingFile { alias, .. }
            | Self::Read { alias, .. }
            | Self::Parse { alias, .. }
            | Self::KeyNotFound { alias, .. }
            | Self::NotAMapping { alias }
            | Self::Deserialize { alias, .. } => Some(alias),
            _ => None,
        }
    }
}
