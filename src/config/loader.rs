//! Config document loading

use crate::error::{ConfigurationError, Result};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Load and parse the document backing `alias`.
///
/// The file is read in full and closed before parsing. Merge keys (`<<`) are
/// resolved. An empty file, or one whose document is null or another blank
/// scalar or collection, yields an empty mapping.
pub fn load_document(path: &Path, alias: &str) -> Result<Value> {
    if !path.exists() {
        return Err(ConfigurationError::MissingFile {
            path: path.to_path_buf(),
            alias: alias.to_string(),
        });
    }

    let content = fs::read_to_string(path).map_err(|source| ConfigurationError::Read {
        path: path.to_path_buf(),
        alias: alias.to_string(),
        source,
    })?;

    parse_document(&content).map_err(|source| ConfigurationError::Parse {
        path: path.to_path_buf(),
        alias: alias.to_string(),
        source,
    })
}

fn parse_document(content: &str) -> std::result::Result<Value, serde_yaml::Error> {
    if content.trim().is_empty() {
        return Ok(Value::Mapping(Mapping::new()));
    }

    let mut value: Value = serde_yaml::from_str(content)?;
    value.apply_merge()?;

    if is_blank(&value) {
        return Ok(Value::Mapping(Mapping::new()));
    }
    Ok(value)
}

/// Documents with no content of their own: null, `false`, zero, `''`, `[]`, `{}`.
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Sequence(items) => items.is_empty(),
        Value::Mapping(mapping) => mapping.is_empty(),
        Value::Tagged(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(tmp: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = tmp.path().join(name);
        fs::write(&path, content).expect("write");
        path
    }

    #[test]
    fn test_load_yaml_mapping() {
        let tmp = TempDir::new().expect("tmp");
        let path = write(&tmp, "svc.yaml", "timeout: 30\ndebug: true\n");

        let doc = load_document(&path, "svc").expect("load");
        assert_eq!(doc["timeout"], Value::from(30));
        assert_eq!(doc["debug"], Value::from(true));
    }

    #[test]
    fn test_empty_file_is_empty_mapping() {
        let tmp = TempDir::new().expect("tmp");
        let path = write(&tmp, "empty.yaml", "");

        let doc = load_document(&path, "empty").expect("load");
        assert_eq!(doc, Value::Mapping(Mapping::new()));
    }

    #[test]
    fn test_comment_only_file_is_empty_mapping() {
        let tmp = TempDir::new().expect("tmp");
        let path = write(&tmp, "comments.yaml", "# nothing configured yet\n\n");

        let doc = load_document(&path, "comments").expect("load");
        assert_eq!(doc, Value::Mapping(Mapping::new()));
    }

    #[test]
    fn test_explicit_null_is_empty_mapping() {
        let tmp = TempDir::new().expect("tmp");
        let path = write(&tmp, "null.yaml", "~\n");

        let doc = load_document(&path, "null").expect("load");
        assert_eq!(doc, Value::Mapping(Mapping::new()));
    }

    #[test]
    fn test_json_document_loads() {
        let tmp = TempDir::new().expect("tmp");
        let path = write(&tmp, "svc.json", r#"{"ports": [80, 443], "name": "edge"}"#);

        let doc = load_document(&path, "svc").expect("load");
        assert_eq!(doc["name"], Value::from("edge"));
        assert_eq!(doc["ports"][1], Value::from(443));
    }

    #[test]
    fn test_missing_file_names_path_and_alias() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("absent.yaml");

        let err = load_document(&path, "absent").expect_err("missing file");
        assert!(matches!(err, ConfigurationError::MissingFile { .. }));
        let msg = err.to_string();
        assert!(msg.contains("absent.yaml"));
        assert!(msg.contains("'absent'"));
    }

    #[test]
    fn test_malformed_yaml_is_parse_error() {
        let tmp = TempDir::new().expect("tmp");
        let path = write(&tmp, "bad.yaml", "key: [unclosed\n");

        let err = load_document(&path, "bad").expect_err("parse failure");
        assert!(matches!(err, ConfigurationError::Parse { ref alias, .. } if alias == "bad"));
    }

    #[test]
    fn test_blank_documents_are_empty_mappings() {
        let tmp = TempDir::new().expect("tmp");
        for (name, content) in
            [("seq", "[]\n"), ("false", "false\n"), ("zero", "0\n"), ("str", "''\n")]
        {
            let path = write(&tmp, &format!("{name}.yaml"), content);
            let doc = load_document(&path, name).expect("load");
            assert_eq!(doc, Value::Mapping(Mapping::new()), "document {name}");
        }
    }

    #[test]
    fn test_non_blank_scalar_is_kept() {
        let tmp = TempDir::new().expect("tmp");
        let path = write(&tmp, "flag.yaml", "true\n");

        let doc = load_document(&path, "flag").expect("load");
        assert_eq!(doc, Value::from(true));
    }

    #[test]
    fn test_top_level_merge_key_is_applied() {
        let tmp = TempDir::new().expect("tmp");
        let path = write(
            &tmp,
            "svc.yaml",
            "defaults: &defaults\n  timeout: 30\n  retries: 2\n<<: *defaults\nretries: 5\n",
        );

        let doc = load_document(&path, "svc").expect("load");
        assert_eq!(doc.get("timeout"), Some(&Value::from(30)));
        assert_eq!(doc.get("retries"), Some(&Value::from(5)));
        assert!(doc.get("<<").is_none());
    }

    #[test]
    fn test_invalid_merge_is_parse_error() {
        let tmp = TempDir::new().expect("tmp");
        let path = write(&tmp, "bad.yaml", "<<: 3\n");

        let err = load_document(&path, "bad").expect_err("scalar merge");
        assert!(matches!(err, ConfigurationError::Parse { .. }));
    }

    #[test]
    fn test_directory_path_is_read_error() {
        let tmp = TempDir::new().expect("tmp");

        let err = load_document(tmp.path(), "dir").expect_err("directory");
        assert!(matches!(err, ConfigurationError::Read { .. }));
    }
}
