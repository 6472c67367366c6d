//! Flat key/value configuration blobs.
//!
//! A [`Configuration`] is what the configuration store reads and writes: a
//! map from string keys to scalar values. Typed views such as
//! [`DatabaseConfig`](super::DatabaseConfig) and
//! [`Settings`](crate::infrastructure::config::settings::Settings) are
//! extracted from it.

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// A scalar configuration value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl ConfigValue {
    /// Name of the value's type, used in diagnostics.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::Text(_) => "string",
        }
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{v}"),
            Self::Integer(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Text(v) => write!(f, "{v}"),
        }
    }
}

impl From<bool> for ConfigValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for ConfigValue {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for ConfigValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<String> for ConfigValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<&str> for ConfigValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

/// A named configuration blob.
///
/// Present-but-empty is valid and distinct from a missing resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Configuration(BTreeMap<String, ConfigValue>);

impl Configuration {
    /// Create an empty configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a value, returning the previous one if present.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<ConfigValue>,
    ) -> Option<ConfigValue> {
        self.0.insert(key.into(), value.into())
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.0.get(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConfigValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Read an optional string value.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidValue`] when the key holds a non-string.
    pub fn get_str(&self, key: &str) -> Result<Option<&str>, ConfigError> {
        match self.get(key) {
            None => Ok(None),
            Some(ConfigValue::Text(v)) => Ok(Some(v.as_str())),
            Some(other) => Err(type_mismatch(key, "string", other)),
        }
    }

    /// Read an optional boolean value.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidValue`] when the key holds a non-bool.
    pub fn get_bool(&self, key: &str) -> Result<Option<bool>, ConfigError> {
        match self.get(key) {
            None => Ok(None),
            Some(ConfigValue::Bool(v)) => Ok(Some(*v)),
            Some(other) => Err(type_mismatch(key, "bool", other)),
        }
    }

    /// Read an optional integer value.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidValue`] when the key holds a non-integer.
    pub fn get_i64(&self, key: &str) -> Result<Option<i64>, ConfigError> {
        match self.get(key) {
            None => Ok(None),
            Some(ConfigValue::Integer(v)) => Ok(Some(*v)),
            Some(other) => Err(type_mismatch(key, "integer", other)),
        }
    }

}

fn type_mismatch(key: &str, expected: &str, found: &ConfigValue) -> ConfigError {
    ConfigError::InvalidValue {
        field: key.to_string(),
        reason: format!("expected {expected}, found {}", found.kind()),
    }
}

impl<K, V> FromIterator<(K, V)> for Configuration
where
    K: Into<String>,
    V: Into<ConfigValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Result of looking up a configuration resource.
///
/// Absence is an expected outcome and is modeled here rather than as an
/// error; malformed content stays an `Err`.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigLookup {
    Found(Configuration),
    NotFound(PathBuf),
}

impl ConfigLookup {
    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Configuration {
        [
            ("host", ConfigValue::from("db.local")),
            ("retries", ConfigValue::from(3_i64)),
            ("live", ConfigValue::from(false)),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn typed_getters_return_matching_values() {
        let config = sample();
        assert_eq!(config.get_str("host").unwrap(), Some("db.local"));
        assert_eq!(config.get_i64("retries").unwrap(), Some(3));
        assert_eq!(config.get_bool("live").unwrap(), Some(false));
        assert_eq!(config.get_str("absent").unwrap(), None);
    }

    #[test]
    fn typed_getter_rejects_wrong_type() {
        let config = sample();
        match config.get_bool("host") {
            Err(ConfigError::InvalidValue { field, reason }) => {
                assert_eq!(field, "host");
                assert!(reason.contains("expected bool"));
            }
            other => panic!("expected InvalidValue, got {other:?}"),
        }
    }

    #[test]
    fn empty_configuration_is_valid() {
        let config: Configuration = serde_json::from_str("{}").unwrap();
        assert!(config.is_empty());
        assert_eq!(config, Configuration::new());
    }

    #[test]
    fn json_scalars_map_to_value_variants() {
        let config: Configuration =
            serde_json::from_str(r#"{"a": true, "b": 2, "c": 2.5, "d": "x"}"#).unwrap();
        assert_eq!(config.get("a"), Some(&ConfigValue::Bool(true)));
        assert_eq!(config.get("b"), Some(&ConfigValue::Integer(2)));
        assert_eq!(config.get("c"), Some(&ConfigValue::Float(2.5)));
        assert_eq!(config.get("d"), Some(&ConfigValue::Text("x".into())));
    }

    #[test]
    fn nested_values_are_rejected() {
        let result: std::result::Result<Configuration, _> =
            serde_json::from_str(r#"{"a": {"b": 1}}"#);
        assert!(result.is_err());
    }
}
