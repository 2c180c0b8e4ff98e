//! # opsfactory-core
//!
//! Core types for the opsfactory constructor registry.
//!
//! This crate has minimal dependencies and is meant to be imported by
//! crates that supply their own variants without needing the registry
//! implementation in `opsfactory-std`.
//!
//! # Pieces
//!
//! - [`TypeKey`] - Names a constructible variant
//! - [`ConfigBundle`] - Loosely-typed parameters supplied at creation time
//! - [`Ops`] - The capability interface every instance implements
//! - [`Constructor`] - `fn(&ConfigBundle) -> Result<Box<dyn Ops>, OpsError>`
//! - [`Report`] - What a single operation did
//!
//! # Error Types
//!
//! - [`OpsError`] - Top-level error type
//! - [`ConfigError`] - Missing or mistyped config fields

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub mod config;
mod error;
mod key;
mod ops;

// Re-exports
pub use config::{ConfigBundle, ConfigValue};
pub use error::{BoxError, ConfigError, OpsError};
pub use key::TypeKey;
pub use ops::{Action, BASE_ORIGIN, Constructor, Ops, OpsResult, Report};
