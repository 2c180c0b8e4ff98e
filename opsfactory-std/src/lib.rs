//! # opsfactory-std
//!
//! Standard implementations for the opsfactory constructor registry.
//!
//! This crate provides:
//! - **Registry**: [`RegistryBuilder`] and the frozen [`Registry`]
//! - **Dispatch**: [`Factory`], the single creation entry point
//! - **Variants**: [`BaseOps`] and [`SpecialOps`]
//! - **Testing**: helper variants and assertions in [`testing`]

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core types
pub use opsfactory_core;

// Modules
pub mod factory;
pub mod registry;
pub mod testing;
pub mod variants;

pub use factory::Factory;
#[cfg(feature = "linkme")]
pub use registry::OPS_CONSTRUCTORS;
pub use registry::{OpsEntry, Registry, RegistryBuilder};
pub use variants::{BaseConfig, BaseOps, SpecialConfig, SpecialOps};

#[cfg(feature = "inventory")]
pub use inventory;
#[cfg(feature = "linkme")]
pub use linkme;
