//! The base variant.

use crate::registry::OpsEntry;
use opsfactory_core::{
    Action, BASE_ORIGIN, ConfigBundle, ConfigError, Ops, OpsError, OpsResult, Report, TypeKey,
    config::POST_URL,
};

/// Typed configuration for [`BaseOps`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseConfig {
    /// Heartbeat destination.
    pub post_url: String,
}

impl TryFrom<&ConfigBundle> for BaseConfig {
    type Error = ConfigError;

    fn try_from(bundle: &ConfigBundle) -> Result<Self, Self::Error> {
        Ok(Self {
            post_url: bundle.require_str(POST_URL)?.to_string(),
        })
    }
}

/// Variant sending heartbeats to a fixed endpoint.
#[derive(Debug, Clone)]
pub struct BaseOps {
    post_url: String,
}

impl BaseOps {
    /// Registry entry for this variant.
    pub const ENTRY: OpsEntry = OpsEntry::new(
        TypeKey::BASE,
        "Sends heartbeats to the configured PostUrl",
        Self::construct,
    );

    /// Create an instance from its typed configuration.
    pub fn new(config: BaseConfig) -> Self {
        Self {
            post_url: config.post_url,
        }
    }

    /// Constructor registered under [`TypeKey::BASE`].
    pub fn construct(bundle: &ConfigBundle) -> Result<Box<dyn Ops>, OpsError> {
        tracing::info!("BaseOps: Create");
        let config = BaseConfig::try_from(bundle)?;
        Ok(Box::new(Self::new(config)))
    }

    /// The configured heartbeat endpoint.
    pub fn post_url(&self) -> &str {
        &self.post_url
    }
}

impl Ops for BaseOps {
    fn kind(&self) -> TypeKey {
        TypeKey::BASE
    }

    fn send_heartbeat(&self) -> OpsResult {
        Ok(Report::new(
            BASE_ORIGIN,
            Action::Heartbeat {
                endpoint: Some(self.post_url.clone()),
            },
        )
        .logged())
    }

    fn do_config_upload(&self) -> OpsResult {
        Ok(Report::new(BASE_ORIGIN, Action::ConfigUpload).logged())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construct_requires_post_url() {
        let err = BaseOps::construct(&ConfigBundle::new()).unwrap_err();
        assert!(matches!(
            err,
            OpsError::Config(ConfigError::MissingField { field: POST_URL })
        ));
    }

    #[test]
    fn test_construct_rejects_non_string_url() {
        let bundle = ConfigBundle::new().with(POST_URL, true);
        let err = BaseOps::construct(&bundle).unwrap_err();
        assert!(matches!(
            err,
            OpsError::Config(ConfigError::InvalidField { field: POST_URL, .. })
        ));
    }

    #[test]
    fn test_heartbeat_reports_endpoint() {
        let ops = BaseOps::new(BaseConfig {
            post_url: "http://x".to_string(),
        });
        assert_eq!(ops.post_url(), "http://x");

        let report = ops.send_heartbeat().unwrap();
        assert_eq!(report.origin, BASE_ORIGIN);
        assert_eq!(
            report.action,
            Action::Heartbeat {
                endpoint: Some("http://x".to_string())
            }
        );
    }

    #[test]
    fn test_update_and_upload_always_succeed() {
        let bundle = ConfigBundle::new().with(POST_URL, "http://x");
        let ops = BaseOps::construct(&bundle).unwrap();

        assert_eq!(ops.kind(), TypeKey::BASE);
        assert_eq!(ops.do_update().unwrap().action, Action::Update);
        assert_eq!(ops.do_config_upload().unwrap().action, Action::ConfigUpload);
        // Repeated calls are idempotent.
        assert_eq!(ops.do_config_upload().unwrap(), ops.do_config_upload().unwrap());
    }
}
