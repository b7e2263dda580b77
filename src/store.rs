//! Alias-addressed configuration store
//!
//! [`ConfigStore`] owns an [`AliasRegistry`] and the most recently loaded
//! document for each alias. Lookups always reload the requested alias first,
//! so a lookup never returns content older than the file on disk.
//!
//! The store is single-threaded: every mutating call takes `&mut self`. Wrap
//! it in a `Mutex` to share it across threads.

use crate::config::load_document;
use crate::error::{ConfigurationError, Result};
use crate::registry::AliasRegistry;
use crate::selection::{Aliases, Keys};
use serde::de::DeserializeOwned;
use serde_yaml::{Mapping, Value};
use std::collections::HashMap;

#[derive(Debug)]
pub struct ConfigStore {
    registry: AliasRegistry,
    loaded: HashMap<String, Value>,
}

impl ConfigStore {
    pub fn new(registry: AliasRegistry) -> Self {
        Self { registry, loaded: HashMap::new() }
    }

    pub fn registry(&self) -> &AliasRegistry {
        &self.registry
    }

    /// Last loaded document for `alias`, without touching the file.
    pub fn cached(&self, alias: &str) -> Option<&Value> {
        self.loaded.get(alias)
    }

    /// Re-read and re-parse the files behind `aliases`, in order.
    ///
    /// Stops at the first alias that is unknown or fails to load. Aliases
    /// processed before the failure keep their freshly loaded documents.
    pub fn reload(&mut self, aliases: impl Into<Aliases>) -> Result<()> {
        let aliases = match aliases.into() {
            Aliases::All => self.registry.aliases().map(str::to_string).collect(),
            Aliases::One(alias) => vec![alias],
            Aliases::Many(aliases) => aliases,
        };

        for alias in aliases {
            let Some(path) = self.registry.path(&alias) else {
                return Err(ConfigurationError::UnknownAlias { alias });
            };

            let document = match load_document(path, &alias) {
                Ok(document) => document,
                Err(e) => {
                    tracing::warn!("Failed to load configuration '{}': {}", alias, e);
                    return Err(e);
                }
            };
            tracing::debug!("Reloaded configuration '{}' from {}", alias, path.display());
            self.loaded.insert(alias, document);
        }

        Ok(())
    }

    /// Look up `keys` in the configuration for `alias`, reloading it first.
    ///
    /// `alias` may be omitted only when exactly one alias is registered.
    pub fn get(&mut self, keys: impl Into<Keys>, alias: Option<&str>) -> Result<Value> {
        let alias = self.resolve_alias(alias)?;
        self.reload(alias.as_str())?;

        let document = self
            .loaded
            .get(&alias)
            .cloned()
            .unwrap_or_else(|| Value::Mapping(Mapping::new()));

        select(document, keys.into(), &alias)
    }

    /// Like [`get`](Self::get), deserializing the result into `T`.
    pub fn get_as<T: DeserializeOwned>(
        &mut self,
        keys: impl Into<Keys>,
        alias: Option<&str>,
    ) -> Result<T> {
        let alias = self.resolve_alias(alias)?;
        let value = self.get(keys, Some(&alias))?;
        serde_yaml::from_value(value)
            .map_err(|source| ConfigurationError::Deserialize { alias, source })
    }

    fn resolve_alias(&self, alias: Option<&str>) -> Result<String> {
        match alias {
            Some(alias) if self.registry.contains(alias) => Ok(alias.to_string()),
            Some(alias) => Err(ConfigurationError::UnknownAlias { alias: alias.to_string() }),
            None => self
                .registry
                .sole_alias()
                .map(str::to_string)
                .ok_or(ConfigurationError::AmbiguousAlias),
        }
    }
}

fn select(document: Value, keys: Keys, alias: &str) -> Result<Value> {
    match keys {
        Keys::All => Ok(document),
        Keys::Single(key) => {
            let mut mapping = into_mapping(document, alias)?;
            take(&mut mapping, key, alias)
        }
        Keys::Many(requested) => {
            let mut mapping = into_mapping(document, alias)?;
            let mut result = Mapping::with_capacity(requested.len());
            for key in requested {
                if result.contains_key(key.as_str()) {
                    continue;
                }
                let value = take(&mut mapping, key.clone(), alias)?;
                result.insert(Value::String(key), value);
            }
            Ok(Value::Mapping(result))
        }
    }
}

fn into_mapping(document: Value, alias: &str) -> Result<Mapping> {
    match document {
        Value::Mapping(mapping) => Ok(mapping),
        _ => Err(ConfigurationError::NotAMapping { alias: alias.to_string() }),
    }
}

fn take(mapping: &mut Mapping, key: String, alias: &str) -> Result<Value> {
    mapping
        .remove(key.as_str())
        .ok_or_else(|| ConfigurationError::KeyNotFound { key, alias: alias.to_string() })
}
