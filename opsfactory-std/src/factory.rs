//! Factory dispatcher.
//!
//! The single entry point for instance creation. A [`Factory`] owns a
//! frozen [`Registry`] and routes each config bundle to the constructor
//! registered under the bundle's type key.

use crate::registry::{Registry, RegistryBuilder};
use opsfactory_core::{ConfigBundle, Ops, OpsError, TypeKey, config::OPS_TYPE};

/// Creates instances by dispatching config bundles to registered constructors.
///
/// # Example
///
/// ```rust,ignore
/// let factory = Factory::with_builtins();
/// let ops = factory.create(
///     &ConfigBundle::new()
///         .with(OPS_TYPE, TypeKey::BASE)
///         .with(POST_URL, "http://ops.cloud.com/send_heartbeat"),
/// )?;
/// ops.send_heartbeat()?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct Factory {
    registry: Registry,
}

impl Factory {
    /// Create a factory over an explicitly built registry.
    pub fn new(registry: Registry) -> Self {
        Self { registry }
    }

    /// Create a factory with the built-in variants registered.
    pub fn with_builtins() -> Self {
        Self::new(RegistryBuilder::new().with_builtins().build())
    }

    /// The registry this factory dispatches through.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Create an instance from a config bundle.
    ///
    /// The bundle's `OpsType` field selects the constructor; when absent,
    /// [`TypeKey::BASE`] is used. The whole bundle is handed to the
    /// constructor and its result is returned unchanged.
    pub fn create(&self, config: &ConfigBundle) -> Result<Box<dyn Ops>, OpsError> {
        let key = match config.type_key()? {
            Some(key) => key,
            None => {
                tracing::info!(
                    fallback = %TypeKey::BASE,
                    "No ops type in config map. Use base ops type as default."
                );
                TypeKey::BASE
            }
        };

        let Some(constructor) = self.registry.lookup(&key) else {
            return Err(OpsError::InvalidType {
                requested: key,
                available: self.registry.keys(),
            });
        };

        tracing::info!(key = %key, "Create ops");
        constructor(config)
    }

    /// Create an instance of `key`, overriding any type named in `config`.
    pub fn create_from_key(
        &self,
        key: TypeKey,
        config: &ConfigBundle,
    ) -> Result<Box<dyn Ops>, OpsError> {
        self.create(&config.clone().with(OPS_TYPE, key))
    }
}
