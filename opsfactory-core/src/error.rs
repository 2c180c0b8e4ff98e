//! Error types for opsfactory.
//!
//! - [`OpsError`] - Top-level error returned by construction and operations
//! - [`ConfigError`] - A config bundle is missing a field or holds the wrong type

use crate::key::TypeKey;
use thiserror::Error;

/// A boxed error type for constructors supplied by external crates.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error type for all opsfactory operations.
#[derive(Error, Debug)]
pub enum OpsError {
    /// The config bundle could not satisfy the constructor.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// No constructor is registered for the requested key.
    #[error("invalid ops type `{requested}`. Must be one of: {}", join_keys(.available))]
    InvalidType {
        /// The key that was requested.
        requested: TypeKey,
        /// Every key registered at the time of the request, in insertion order.
        available: Vec<TypeKey>,
    },

    /// A custom error raised by an external constructor.
    #[error(transparent)]
    Custom(BoxError),
}

/// Errors raised while reading a config bundle.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required field is absent.
    #[error("[{field}] has not been set in config map")]
    MissingField {
        /// Name of the field.
        field: &'static str,
    },

    /// A field is present but holds a value of the wrong kind.
    #[error("[{field}] must be a {expected}")]
    InvalidField {
        /// Name of the field.
        field: &'static str,
        /// Human-readable name of the expected kind.
        expected: &'static str,
    },
}

impl From<BoxError> for OpsError {
    fn from(err: BoxError) -> Self {
        OpsError::Custom(err)
    }
}

fn join_keys(keys: &[TypeKey]) -> String {
    keys.iter()
        .map(TypeKey::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_type_lists_keys_without_blanks() {
        let err = OpsError::InvalidType {
            requested: TypeKey::new("Nope"),
            available: vec![TypeKey::BASE, TypeKey::SPECIAL],
        };
        assert_eq!(
            err.to_string(),
            "invalid ops type `Nope`. Must be one of: BaseType, SpecialType"
        );
    }

    #[test]
    fn config_error_is_transparent() {
        let err: OpsError = ConfigError::MissingField { field: "PostUrl" }.into();
        assert_eq!(err.to_string(), "[PostUrl] has not been set in config map");
        assert!(matches!(
            err,
            OpsError::Config(ConfigError::MissingField { field: "PostUrl" })
        ));
    }

    #[test]
    fn boxed_errors_become_custom() {
        let boxed: BoxError = "backend unavailable".into();
        let err = OpsError::from(boxed);
        assert!(matches!(err, OpsError::Custom(_)));
        assert_eq!(err.to_string(), "backend unavailable");
    }
}
