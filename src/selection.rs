//! Key and alias selections passed to `get` and `reload`.

use crate::error::ConfigurationError;
use crate::registry::kind_of;
use serde_yaml::Value;

/// Which top-level keys a lookup returns.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Keys {
    /// The whole document.
    #[default]
    All,
    /// The value at one key.
    Single(String),
    /// A mapping of each requested key to its value, in request order.
    Many(Vec<String>),
}

/// Which aliases a reload covers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Aliases {
    /// Every registered alias.
    #[default]
    All,
    One(String),
    Many(Vec<String>),
}

impl From<&str> for Keys {
    fn from(key: &str) -> Self {
        Keys::Single(key.to_string())
    }
}

impl From<String> for Keys {
    fn from(key: String) -> Self {
        Keys::Single(key)
    }
}

impl<S: Into<String>> From<Vec<S>> for Keys {
    fn from(keys: Vec<S>) -> Self {
        Keys::Many(keys.into_iter().map(Into::into).collect())
    }
}

impl<S: AsRef<str>> From<&[S]> for Keys {
    fn from(keys: &[S]) -> Self {
        Keys::Many(keys.iter().map(|k| k.as_ref().to_string()).collect())
    }
}

impl<S: AsRef<str>, const N: usize> From<[S; N]> for Keys {
    fn from(keys: [S; N]) -> Self {
        Keys::Many(keys.iter().map(|k| k.as_ref().to_string()).collect())
    }
}

impl<T: Into<Keys>> From<Option<T>> for Keys {
    fn from(keys: Option<T>) -> Self {
        keys.map_or(Keys::All, Into::into)
    }
}

impl TryFrom<&Value> for Keys {
    type Error = ConfigurationError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Null => Ok(Keys::All),
            Value::String(key) => Ok(Keys::Single(key.clone())),
            Value::Sequence(items) => strings(items)
                .map(Keys::Many)
                .map_err(|reason| ConfigurationError::InvalidKeys { reason }),
            other => Err(ConfigurationError::InvalidKeys {
                reason: format!(
                    "keys must be null, a string, or a list of strings, got {}",
                    kind_of(other)
                ),
            }),
        }
    }
}

impl From<&str> for Aliases {
    fn from(alias: &str) -> Self {
        Aliases::One(alias.to_string())
    }
}

impl From<String> for Aliases {
    fn from(alias: String) -> Self {
        Aliases::One(alias)
    }
}

impl<S: Into<String>> From<Vec<S>> for Aliases {
    fn from(aliases: Vec<S>) -> Self {
        Aliases::Many(aliases.into_iter().map(Into::into).collect())
    }
}

impl<S: AsRef<str>> From<&[S]> for Aliases {
    fn from(aliases: &[S]) -> Self {
        Aliases::Many(aliases.iter().map(|a| a.as_ref().to_string()).collect())
    }
}

impl<S: AsRef<str>, const N: usize> From<[S; N]> for Aliases {
    fn from(aliases: [S; N]) -> Self {
        Aliases::Many(aliases.iter().map(|a| a.as_ref().to_string()).collect())
    }
}

impl<T: Into<Aliases>> From<Option<T>> for Aliases {
    fn from(aliases: Option<T>) -> Self {
        aliases.map_or(Aliases::All, Into::into)
    }
}

impl TryFrom<&Value> for Aliases {
    type Error = ConfigurationError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Null => Ok(Aliases::All),
            Value::String(alias) => Ok(Aliases::One(alias.clone())),
            Value::Sequence(items) => strings(items)
                .map(Aliases::Many)
                .map_err(|reason| ConfigurationError::InvalidAliases { reason }),
            other => Err(ConfigurationError::InvalidAliases {
                reason: format!(
                    "aliases must be null, a string, or a list of strings, got {}",
                    kind_of(other)
                ),
            }),
        }
    }
}

fn strings(items: &[Value]) -> Result<Vec<String>, String> {
    items
        .iter()
        .enumerate()
        .map(|(idx, item)| match item {
            Value::String(s) => Ok(s.clone()),
            other => Err(format!("entry {idx} must be a string, got {}", kind_of(other))),
        })
        .collect()
}
