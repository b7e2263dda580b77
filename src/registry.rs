//! Alias → file path registry

use crate::error::{ConfigurationError, Result};
use serde_yaml::Value;
use std::path::{Path, PathBuf};

/// Immutable mapping from alias to the file that backs it.
///
/// Never empty. Aliases iterate in registration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasRegistry {
    entries: Vec<(String, PathBuf)>,
}

impl AliasRegistry {
    /// Build a registry from `(alias, path)` pairs. A repeated alias keeps its
    /// first position and its last path.
    pub fn new<I, A, P>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (A, P)>,
        A: Into<String>,
        P: Into<PathBuf>,
    {
        let mut registry = Self { entries: Vec::new() };
        for (alias, path) in entries {
            registry.insert(alias.into(), path.into());
        }
        if registry.is_empty() {
            return Err(ConfigurationError::EmptyRegistry);
        }
        Ok(registry)
    }

    /// Read a registry from a TOML, YAML or JSON manifest file.
    pub fn from_manifest(path: impl AsRef<Path>) -> Result<Self> {
        crate::config::load_manifest(path.as_ref())
    }

    fn insert(&mut self, alias: String, path: PathBuf) {
        match self.entries.iter_mut().find(|(existing, _)| *existing == alias) {
            Some((_, slot)) => *slot = path,
            None => self.entries.push((alias, path)),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, alias: &str) -> bool {
        self.path(alias).is_some()
    }

    pub fn path(&self, alias: &str) -> Option<&Path> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == alias)
            .map(|(_, path)| path.as_path())
    }

    pub fn aliases(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(alias, _)| alias.as_str())
    }

    /// The only alias, when exactly one is registered.
    pub fn sole_alias(&self) -> Option<&str> {
        match self.entries.as_slice() {
            [(alias, _)] => Some(alias.as_str()),
            _ => None,
        }
    }
}

impl TryFrom<Value> for AliasRegistry {
    type Error = ConfigurationError;

    fn try_from(value: Value) -> Result<Self> {
        let mapping = match value {
            Value::Mapping(mapping) => mapping,
            Value::Null => return Err(ConfigurationError::EmptyRegistry),
            other => {
                return Err(ConfigurationError::InvalidRegistry {
                    reason: format!(
                        "expected a mapping of aliases to file paths, got {}",
                        kind_of(&other)
                    ),
                })
            }
        };

        let mut entries = Vec::with_capacity(mapping.len());
        for (alias, path) in mapping {
            let alias = match alias {
                Value::String(alias) => alias,
                other => {
                    return Err(ConfigurationError::InvalidRegistry {
                        reason: format!("alias must be a string, got {}", kind_of(&other)),
                    })
                }
            };
            let Value::String(path) = path else {
                return Err(ConfigurationError::InvalidRegistry {
                    reason: format!("path for alias '{alias}' must be a string"),
                });
            };
            entries.push((alias, path));
        }
        Self::new(entries)
    }
}

pub(crate) fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
