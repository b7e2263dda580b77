//! Alias manifest loading
//!
//! A manifest is a flat `alias = "path"` table (TOML) or `alias: path` mapping
//! (YAML/JSON) describing an [`AliasRegistry`].

use crate::error::{ConfigurationError, Result};
use crate::registry::AliasRegistry;
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::{Path, PathBuf};

pub fn load_manifest(manifest_path: &Path) -> Result<AliasRegistry> {
    let content = fs::read_to_string(manifest_path)
        .map_err(|e| manifest_error(manifest_path, format!("failed reading: {e}")))?;

    let ext = manifest_path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let entries = match ext.as_str() {
        "toml" => parse_toml_manifest(&content, manifest_path)?,
        "yaml" | "yml" | "json" => parse_yaml_manifest(&content, manifest_path)?,
        other => {
            return Err(manifest_error(
                manifest_path,
                format!("unsupported manifest extension '.{other}'"),
            ))
        }
    };

    let base = manifest_path.parent().unwrap_or_else(|| Path::new(""));
    tracing::debug!(
        "Loaded {} alias(es) from manifest {}",
        entries.len(),
        manifest_path.display()
    );

    AliasRegistry::new(entries.into_iter().map(|(alias, path)| (alias, resolve(base, path))))
}

fn parse_toml_manifest(content: &str, manifest_path: &Path) -> Result<Vec<(String, String)>> {
    let table: toml::Table = toml::from_str(content)
        .map_err(|e| manifest_error(manifest_path, format!("invalid TOML alias table: {e}")))?;

    table
        .into_iter()
        .map(|(alias, path)| match path {
            toml::Value::String(path) => Ok((alias, path)),
            _ => Err(manifest_error(
                manifest_path,
                format!("path for alias '{alias}' must be a string"),
            )),
        })
        .collect()
}

fn parse_yaml_manifest(content: &str, manifest_path: &Path) -> Result<Vec<(String, String)>> {
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }
    let parsed: Option<Mapping> = serde_yaml::from_str(content)
        .map_err(|e| manifest_error(manifest_path, format!("invalid YAML alias mapping: {e}")))?;

    parsed
        .unwrap_or_default()
        .into_iter()
        .map(|(alias, path)| match (alias, path) {
            (Value::String(alias), Value::String(path)) => Ok((alias, path)),
            _ => Err(manifest_error(
                manifest_path,
                "aliases and paths must be strings".to_string(),
            )),
        })
        .collect()
}

fn resolve(base: &Path, path: String) -> PathBuf {
    let path = PathBuf::from(path);
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}

fn manifest_error(path: &Path, reason: String) -> ConfigurationError {
    ConfigurationError::Manifest { path: path.to_path_buf(), reason }
}
