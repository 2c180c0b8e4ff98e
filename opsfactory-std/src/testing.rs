//! Testing utilities for opsfactory.
//!
//! - [`EchoOps`]: A variant that accepts any bundle and records its size
//! - [`failing_constructor`]: A constructor that always errors
//! - [`run_all`]: Invoke every operation of an instance
//! - [`registered_keys`]: Pull the key list out of an unknown-type error

use crate::registry::OpsEntry;
use opsfactory_core::{Action, ConfigBundle, Ops, OpsError, OpsResult, Report, TypeKey};
use std::collections::BTreeSet;

/// Key [`EchoOps`] registers under.
pub const ECHO: TypeKey = TypeKey::from_static("EchoType");

const ORIGIN: &str = "EchoOps";

// ============================================================================
// Echo Variant
// ============================================================================

/// A variant that never fails and remembers how many fields it was built from.
///
/// # Example
///
/// ```rust,ignore
/// let registry = RegistryBuilder::new().register_entry(EchoOps::ENTRY).build();
/// let ops = Factory::new(registry).create(&ConfigBundle::new().with("OpsType", ECHO))?;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EchoOps {
    /// Number of fields in the bundle the instance was built from.
    pub fields: usize,
}

impl EchoOps {
    /// Registry entry for this variant.
    pub const ENTRY: OpsEntry = OpsEntry::new(ECHO, "Test variant", Self::construct);

    /// Constructor registered under [`ECHO`].
    pub fn construct(bundle: &ConfigBundle) -> Result<Box<dyn Ops>, OpsError> {
        Ok(Box::new(Self {
            fields: bundle.len(),
        }))
    }
}

impl Ops for EchoOps {
    fn kind(&self) -> TypeKey {
        ECHO
    }

    fn send_heartbeat(&self) -> OpsResult {
        Ok(Report::new(ORIGIN, Action::Heartbeat { endpoint: None }))
    }

    fn do_config_upload(&self) -> OpsResult {
        Ok(Report::new(ORIGIN, Action::ConfigUploadSkipped))
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// A constructor that always returns a custom error.
pub fn failing_constructor(_bundle: &ConfigBundle) -> Result<Box<dyn Ops>, OpsError> {
    Err(OpsError::Custom("constructor failed".into()))
}

/// Invoke heartbeat, update and config upload in that order.
pub fn run_all(ops: &dyn Ops) -> Result<[Report; 3], OpsError> {
    Ok([
        ops.send_heartbeat()?,
        ops.do_update()?,
        ops.do_config_upload()?,
    ])
}

/// The keys listed by an [`OpsError::InvalidType`], as an order-independent set.
pub fn registered_keys(err: &OpsError) -> Option<BTreeSet<String>> {
    match err {
        OpsError::InvalidType { available, .. } => {
            Some(available.iter().map(|k| k.as_str().to_string()).collect())
        }
        _ => None,
    }
}
