//! # Capability Interface (Ops)
//!
//! Every instance a factory produces implements [`Ops`]. The three
//! operations are independent of each other: any of them may be called in
//! any order, any number of times.
//!
//! # Reuse
//!
//! [`Ops::do_update`] carries the base variant's behavior as a default
//! method. Variants that do not override it inherit it explicitly, and
//! the inherited behavior depends on no per-instance state.

use crate::{config::ConfigBundle, error::OpsError, key::TypeKey};
use std::fmt;

/// Origin reported by the base variant and by the default methods of [`Ops`].
pub const BASE_ORIGIN: &str = "BaseOps";

/// What an operation did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// A heartbeat was sent, to `endpoint` if the variant has one.
    Heartbeat {
        /// Destination of the heartbeat.
        endpoint: Option<String>,
    },
    /// An update was performed.
    Update,
    /// The configuration was uploaded.
    ConfigUpload,
    /// The configuration upload was skipped.
    ConfigUploadSkipped,
}

/// Outcome of a single [`Ops`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// The implementation that performed the action.
    pub origin: &'static str,
    /// The action performed.
    pub action: Action,
}

impl Report {
    /// Create a report.
    pub const fn new(origin: &'static str, action: Action) -> Self {
        Self { origin, action }
    }

    /// Emit the report as an `info` diagnostic, returning it.
    ///
    /// The message is the report's `Display` text.
    pub fn logged(self) -> Self {
        tracing::info!(origin = self.origin, "{}", self);
        self
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.action {
            Action::Heartbeat {
                endpoint: Some(url),
            } => write!(f, "{}: send heartbeat to {}", self.origin, url),
            Action::Heartbeat { endpoint: None } => write!(f, "{}: send heartbeat", self.origin),
            Action::Update => write!(f, "{}: update", self.origin),
            Action::ConfigUpload => write!(f, "{}: upload config", self.origin),
            Action::ConfigUploadSkipped => {
                write!(f, "{}: no need to upload config", self.origin)
            }
        }
    }
}

/// Result of an [`Ops`] call.
pub type OpsResult = Result<Report, OpsError>;

/// A function building an instance from a config bundle.
pub type Constructor = fn(&ConfigBundle) -> Result<Box<dyn Ops>, OpsError>;

/// The capability set shared by every constructed instance.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be produced by an ops factory",
    label = "missing `Ops` implementation",
    note = "Implement `send_heartbeat` and `do_config_upload`; `do_update` has a default."
)]
pub trait Ops: Send + Sync + fmt::Debug {
    /// The key this instance was registered under.
    fn kind(&self) -> TypeKey;

    /// Send a heartbeat.
    fn send_heartbeat(&self) -> OpsResult;

    /// Perform an update.
    ///
    /// Defaults to the base variant's behavior.
    fn do_update(&self) -> OpsResult {
        Ok(Report::new(BASE_ORIGIN, Action::Update).logged())
    }

    /// Upload the configuration.
    fn do_config_upload(&self) -> OpsResult;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Minimal;

    impl Ops for Minimal {
        fn kind(&self) -> TypeKey {
            TypeKey::from_static("Minimal")
        }

        fn send_heartbeat(&self) -> OpsResult {
            Ok(Report::new("Minimal", Action::Heartbeat { endpoint: None }))
        }

        fn do_config_upload(&self) -> OpsResult {
            Ok(Report::new("Minimal", Action::ConfigUploadSkipped))
        }
    }

    #[test]
    fn test_default_update_reports_base_origin() {
        let minimal: Box<dyn Ops> = Box::new(Minimal);
        let report = minimal.do_update().unwrap();
        assert_eq!(report, Report::new(BASE_ORIGIN, Action::Update));
    }

    #[test]
    fn test_report_display() {
        let sent = Report::new(
            BASE_ORIGIN,
            Action::Heartbeat {
                endpoint: Some("http://x".into()),
            },
        );
        assert_eq!(sent.to_string(), "BaseOps: send heartbeat to http://x");
        assert_eq!(
            Report::new("SpecialOps", Action::ConfigUploadSkipped).to_string(),
            "SpecialOps: no need to upload config"
        );
    }
}
