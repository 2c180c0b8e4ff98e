//! # opsfactory - Constructor Registry and Factory Dispatch
//!
//! `opsfactory` maps symbolic [`TypeKey`]s to constructor functions and
//! creates instances through a single entry point, [`Factory::create`].
//! Every instance implements the shared [`Ops`] capability interface.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use opsfactory::prelude::*;
//!
//! let factory = Factory::with_builtins();
//! let ops = factory.create(
//!     &ConfigBundle::new()
//!         .with(OPS_TYPE, TypeKey::SPECIAL)
//!         .with(SEND_CONFIG, true),
//! )?;
//! ops.do_config_upload()?;
//! ```
//!
//! ## Extending
//!
//! External crates add variants without touching the dispatcher, either by
//! registering on a [`RegistryBuilder`] directly or, with the `macros`
//! feature, by annotating a constructor with `#[register_ops("Key")]` and
//! building with [`RegistryBuilder::collect_submitted`].

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use opsfactory_core::{
    // Capability interface
    Action,
    BASE_ORIGIN,
    // Error types
    BoxError,
    // Configuration
    ConfigBundle,
    ConfigError,
    ConfigValue,
    Constructor,
    Ops,
    OpsError,
    OpsResult,
    Report,
    // Keys
    TypeKey,
};

/// Well-known config bundle fields.
pub mod config {
    pub use opsfactory_core::config::{OPS_TYPE, POST_URL, SEND_CONFIG};
}

// Registry and dispatch
pub use opsfactory_std::{Factory, OpsEntry, Registry, RegistryBuilder};

#[cfg(feature = "linkme")]
pub use opsfactory_std::OPS_CONSTRUCTORS;

/// Built-in variants.
pub mod variants {
    pub use opsfactory_std::variants::{BaseConfig, BaseOps, SpecialConfig, SpecialOps};
}

/// Testing utilities.
pub mod testing {
    pub use opsfactory_std::testing::{
        ECHO, EchoOps, failing_constructor, registered_keys, run_all,
    };
}

/// Prelude module - common imports for opsfactory.
///
/// # Usage
///
/// ```rust,ignore
/// use opsfactory::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        Action, ConfigBundle, ConfigError, Factory, Ops, OpsError, OpsResult, Registry,
        RegistryBuilder, Report, TypeKey,
        config::{OPS_TYPE, POST_URL, SEND_CONFIG},
    };
}

#[cfg(feature = "macros")]
pub use opsfactory_macros::register_ops;

#[cfg(feature = "inventory")]
pub use inventory;

#[cfg(feature = "linkme")]
pub use linkme;
