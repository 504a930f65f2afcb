//! TOML file snapshot source.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use toml::{Table, Value};

use super::source::{Keys, PropertySource};
use super::ConfigError;

/// A property source backed by a TOML file snapshot.
///
/// The file is read once at load time. Nested tables are exposed as dotted
/// keys, so `host` inside a `[server]` table becomes `server.host`. Files
/// can be marked as required or optional: a missing required file is an
/// error, a missing optional file yields an empty source.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    properties: BTreeMap<String, Value>,
}

impl FileSource {
    /// Loads a TOML file into a snapshot source.
    ///
    /// If `required` is true, loading fails when the file doesn't exist.
    pub fn load(path: impl AsRef<Path>, required: bool) -> Result<Self, ConfigError> {
        let path = path.as_ref().to_path_buf();
        let mut properties = BTreeMap::new();
        if let Some(table) = read_config_file(&path, required)? {
            flatten_into("", &table, &mut properties);
        }

        Ok(Self { path, properties })
    }

    /// Returns the path this source was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PropertySource for FileSource {
    fn keys(&self) -> Result<Keys<'_>, ConfigError> {
        Ok(Box::new(self.properties.keys().cloned()))
    }

    fn get(&self, key: &str) -> Result<Option<Value>, ConfigError> {
        Ok(self.properties.get(key).cloned())
    }
}

/// Reads and parses a TOML config file.
///
/// Returns `Ok(None)` if the file doesn't exist and `required` is false.
fn read_config_file(path: &Path, required: bool) -> Result<Option<Table>, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(contents) => {
            let table = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
                path: path.to_path_buf(),
                source: e,
            })?;
            Ok(Some(table))
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            if required {
                Err(ConfigError::FileNotFound(path.to_path_buf()))
            } else {
                Ok(None)
            }
        }
        Err(e) => Err(ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// Flattens nested tables into dotted keys; non-table leaves (including
/// arrays) become the stored values.
fn flatten_into(prefix: &str, table: &Table, out: &mut BTreeMap<String, Value>) {
    for (key, value) in table {
        let dotted = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };

        match value {
            Value::Table(nested) => flatten_into(&dotted, nested, out),
            other => {
                out.insert(dotted, other.clone());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_file_source_loads_valid_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "key = \"value\"").unwrap();

        let source = FileSource::load(file.path(), true).unwrap();

        assert_eq!(
            source.get("key").unwrap(),
            Some(Value::String("value".to_string()))
        );
    }

    #[test]
    fn test_nested_tables_flatten_to_dotted_keys() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "name = \"demo\"").unwrap();
        writeln!(file, "[server]").unwrap();
        writeln!(file, "host = \"localhost\"").unwrap();
        writeln!(file, "port = 8080").unwrap();
        writeln!(file, "[server.tls]").unwrap();
        writeln!(file, "enabled = false").unwrap();

        let source = FileSource::load(file.path(), true).unwrap();

        let keys: Vec<String> = source.keys().unwrap().collect();
        assert_eq!(
            keys,
            vec!["name", "server.host", "server.port", "server.tls.enabled"]
        );
        assert_eq!(
            source.get("server.port").unwrap(),
            Some(Value::Integer(8080))
        );
        assert_eq!(source.get("server").unwrap(), None);
    }

    #[test]
    fn test_arrays_stay_whole_values() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "hosts = [\"a\", \"b\"]").unwrap();

        let source = FileSource::load(file.path(), true).unwrap();

        assert_eq!(
            source.get("hosts").unwrap(),
            Some(Value::Array(vec![
                Value::String("a".to_string()),
                Value::String("b".to_string()),
            ]))
        );
    }

    #[test]
    fn test_file_source_required_missing() {
        let result = FileSource::load("/nonexistent/path/config.toml", true);

        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn test_file_source_optional_missing() {
        let source = FileSource::load("/nonexistent/path/config.toml", false).unwrap();

        assert!(source.keys().unwrap().next().is_none());
    }

    #[test]
    fn test_parse_error_carries_path() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "not valid toml [").unwrap();

        let result = FileSource::load(file.path(), true);

        match result {
            Err(ConfigError::ParseError { path, .. }) => assert_eq!(path, file.path()),
            other => panic!("expected parse error, got {:?}", other),
        }
    }
}
