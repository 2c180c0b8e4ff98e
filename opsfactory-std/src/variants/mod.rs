//! Built-in variants.
//!
//! - [`BaseOps`] - Sends heartbeats to a configured endpoint
//! - [`SpecialOps`] - Reports its own heartbeat and uploads config on demand

pub mod base;
pub mod special;

pub use base::{BaseConfig, BaseOps};
pub use special::{SpecialConfig, SpecialOps};
