use toml::Value;

use super::source::{Keys, PropertySource};
use super::ConfigError;

/// A property source over prefixed process environment variables.
///
/// Variables are mapped to config keys by stripping the prefix and
/// separator, splitting the remainder on the separator, lowercasing the
/// segments, and joining them with dots: with prefix `MYAPP` and separator
/// `__`, the variable `MYAPP__DATABASE__HOST` is exposed as `database.host`.
///
/// Values are coerced from strings to the most specific type: boolean,
/// integer, float, or string (fallback).
#[derive(Debug, Clone)]
pub struct EnvSource {
    prefix: String,
    separator: String,
}

impl EnvSource {
    /// Creates a source over variables starting with `prefix` + `separator`.
    pub fn new(prefix: impl Into<String>, separator: impl Into<String>) -> Self {
        let separator = separator.into();
        assert!(!separator.is_empty(), "separator must not be empty");
        Self {
            prefix: prefix.into(),
            separator,
        }
    }

    /// Maps a variable name to its config key, or `None` if it does not
    /// carry the prefix.
    fn key_for(&self, var: &str) -> Option<String> {
        let prefix_with_sep = format!("{}{}", self.prefix, self.separator);
        let path = var.strip_prefix(&prefix_with_sep)?;
        if path.is_empty() {
            return None;
        }

        let segments: Vec<String> = path
            .split(&self.separator)
            .map(|s| s.to_lowercase())
            .collect();
        Some(segments.join("."))
    }
}

impl PropertySource for EnvSource {
    fn keys(&self) -> Result<Keys<'_>, ConfigError> {
        Ok(Box::new(
            std::env::vars().filter_map(|(var, _)| self.key_for(&var)),
        ))
    }

    fn get(&self, key: &str) -> Result<Option<Value>, ConfigError> {
        for (var, value) in std::env::vars() {
            if self.key_for(&var).as_deref() == Some(key) {
                return Ok(Some(coerce_value(&value)));
            }
        }

        Ok(None)
    }
}

fn coerce_value(s: &str) -> Value {
    // Try boolean first (case-insensitive)
    if s.eq_ignore_ascii_case("true") {
        return Value::Boolean(true);
    }
    if s.eq_ignore_ascii_case("false") {
        return Value::Boolean(false);
    }

    // Try integer (only if it looks like an integer: optional minus, then digits)
    if looks_like_integer(s) {
        if let Ok(i) = s.parse::<i64>() {
            return Value::Integer(i);
        }
    }

    // Try float (if contains decimal point)
    if s.contains('.') {
        if let Ok(f) = s.parse::<f64>() {
            return Value::Float(f);
        }
    }

    // Fallback to string
    Value::String(s.to_string())
}

fn looks_like_integer(s: &str) -> bool {
    let s = s.strip_prefix('-').unwrap_or(s);
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefixed_vars_map_to_dotted_keys() {
        std::env::set_var("ROCONF_MAP__DATABASE__HOST", "localhost");
        std::env::set_var("ROCONF_MAP__DEBUG", "true");

        let source = EnvSource::new("ROCONF_MAP", "__");
        assert_eq!(
            source.get("database.host").unwrap(),
            Some(Value::String("localhost".to_string()))
        );
        assert_eq!(source.get("debug").unwrap(), Some(Value::Boolean(true)));
        assert_eq!(source.get("database").unwrap(), None);

        let mut keys: Vec<String> = source.keys().unwrap().collect();
        keys.sort();
        assert_eq!(keys, vec!["database.host", "debug"]);
    }

    #[test]
    fn test_unprefixed_vars_are_invisible() {
        std::env::set_var("ROCONF_OTHER_VALUE", "1");

        let source = EnvSource::new("ROCONF_INVIS", "__");
        assert!(source.keys().unwrap().next().is_none());
        assert_eq!(source.get("other_value").unwrap(), None);
    }

    #[test]
    fn test_value_coercion() {
        assert_eq!(coerce_value("true"), Value::Boolean(true));
        assert_eq!(coerce_value("FALSE"), Value::Boolean(false));
        assert_eq!(coerce_value("42"), Value::Integer(42));
        assert_eq!(coerce_value("-7"), Value::Integer(-7));
        assert_eq!(coerce_value("3.5"), Value::Float(3.5));
        assert_eq!(
            coerce_value("8080abc"),
            Value::String("8080abc".to_string())
        );
    }
}
