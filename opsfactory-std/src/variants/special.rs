//! The special variant.
//!
//! Inherits [`Ops::do_update`] from the trait default and overrides the
//! heartbeat and config upload. It has no endpoint of its own.

use crate::registry::OpsEntry;
use opsfactory_core::{
    Action, ConfigBundle, ConfigError, Ops, OpsError, OpsResult, Report, TypeKey,
    config::SEND_CONFIG,
};

const ORIGIN: &str = "SpecialOps";

/// Typed configuration for [`SpecialOps`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecialConfig {
    /// Whether `do_config_upload` actually uploads.
    pub send_config: bool,
}

impl TryFrom<&ConfigBundle> for SpecialConfig {
    type Error = ConfigError;

    fn try_from(bundle: &ConfigBundle) -> Result<Self, Self::Error> {
        Ok(Self {
            send_config: bundle.require_bool(SEND_CONFIG)?,
        })
    }
}

/// Variant with its own heartbeat and an optional config upload.
#[derive(Debug, Clone, Copy)]
pub struct SpecialOps {
    send_config: bool,
}

impl SpecialOps {
    /// Registry entry for this variant.
    pub const ENTRY: OpsEntry = OpsEntry::new(
        TypeKey::SPECIAL,
        "Uploads config only when SendConfig is set",
        Self::construct,
    );

    /// Create an instance from its typed configuration.
    pub fn new(config: SpecialConfig) -> Self {
        Self {
            send_config: config.send_config,
        }
    }

    /// Constructor registered under [`TypeKey::SPECIAL`].
    pub fn construct(bundle: &ConfigBundle) -> Result<Box<dyn Ops>, OpsError> {
        tracing::info!("SpecialOps: Create");
        let config = SpecialConfig::try_from(bundle)?;
        Ok(Box::new(Self::new(config)))
    }

    /// Whether config uploads are enabled.
    pub fn send_config(&self) -> bool {
        self.send_config
    }
}

impl Ops for SpecialOps {
    fn kind(&self) -> TypeKey {
        TypeKey::SPECIAL
    }

    fn send_heartbeat(&self) -> OpsResult {
        Ok(Report::new(ORIGIN, Action::Heartbeat { endpoint: None }).logged())
    }

    fn do_config_upload(&self) -> OpsResult {
        let action = if self.send_config {
            Action::ConfigUpload
        } else {
            Action::ConfigUploadSkipped
        };
        Ok(Report::new(ORIGIN, action).logged())
    }
}
