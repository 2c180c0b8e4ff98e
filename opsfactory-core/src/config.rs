//! Loosely-typed configuration bundles handed to constructors.
//!
//! A [`ConfigBundle`] carries whatever a caller supplies at creation time.
//! Constructors read it through the `require_*` accessors, which turn
//! missing or mistyped fields into [`ConfigError`]s.

use crate::{error::ConfigError, key::TypeKey};
use std::collections::HashMap;

/// Field holding the requested [`TypeKey`].
pub const OPS_TYPE: &str = "OpsType";

/// Field holding the base variant's heartbeat endpoint.
pub const POST_URL: &str = "PostUrl";

/// Field holding the special variant's upload flag.
pub const SEND_CONFIG: &str = "SendConfig";

/// A single configuration value.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum ConfigValue {
    /// A boolean flag.
    Bool(bool),
    /// A string.
    Str(String),
    /// A type key.
    Type(TypeKey),
}

impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        ConfigValue::Bool(value)
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        ConfigValue::Str(value.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        ConfigValue::Str(value)
    }
}

impl From<TypeKey> for ConfigValue {
    fn from(value: TypeKey) -> Self {
        ConfigValue::Type(value)
    }
}

/// An unordered mapping from field names to [`ConfigValue`]s.
///
/// # Example
///
/// ```rust,ignore
/// let bundle = ConfigBundle::new()
///     .with(OPS_TYPE, TypeKey::BASE)
///     .with(POST_URL, "http://ops.cloud.com/send_heartbeat");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ConfigBundle {
    values: HashMap<String, ConfigValue>,
}

impl ConfigBundle {
    /// Create an empty bundle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, returning the bundle.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<ConfigValue>) -> Self {
        self.insert(field, value);
        self
    }

    /// Set a field, returning the previous value if any.
    pub fn insert(
        &mut self,
        field: impl Into<String>,
        value: impl Into<ConfigValue>,
    ) -> Option<ConfigValue> {
        self.values.insert(field.into(), value.into())
    }

    /// Get a raw field value.
    pub fn get(&self, field: &str) -> Option<&ConfigValue> {
        self.values.get(field)
    }

    /// Check whether a field is present.
    pub fn contains(&self, field: &str) -> bool {
        self.values.contains_key(field)
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the bundle has no fields.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Read a required string field.
    pub fn require_str(&self, field: &'static str) -> Result<&str, ConfigError> {
        match self.values.get(field) {
            Some(ConfigValue::Str(s)) => Ok(s),
            Some(_) => Err(ConfigError::InvalidField {
                field,
                expected: "string",
            }),
            None => Err(ConfigError::MissingField { field }),
        }
    }

    /// Read a required boolean field.
    pub fn require_bool(&self, field: &'static str) -> Result<bool, ConfigError> {
        match self.values.get(field) {
            Some(ConfigValue::Bool(b)) => Ok(*b),
            Some(_) => Err(ConfigError::InvalidField {
                field,
                expected: "boolean",
            }),
            None => Err(ConfigError::MissingField { field }),
        }
    }

    /// Read the [`OPS_TYPE`] field.
    ///
    /// Returns `Ok(None)` when the field is absent. A string value is
    /// accepted as a key so bundles loaded from documents dispatch the same
    /// way as bundles built in code.
    pub fn type_key(&self) -> Result<Option<TypeKey>, ConfigError> {
        match self.values.get(OPS_TYPE) {
            Some(ConfigValue::Type(key)) => Ok(Some(key.clone())),
            Some(ConfigValue::Str(s)) => Ok(Some(TypeKey::new(s.clone()))),
            Some(ConfigValue::Bool(_)) => Err(ConfigError::InvalidField {
                field: OPS_TYPE,
                expected: "type key",
            }),
            None => Ok(None),
        }
    }
}

impl<K, V> FromIterator<(K, V)> for ConfigBundle
where
    K: Into<String>,
    V: Into<ConfigValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
