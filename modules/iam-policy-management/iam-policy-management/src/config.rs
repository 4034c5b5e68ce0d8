//! Configuration for the IAM Policy Management client.

use std::time::Duration;

use serde::Deserialize;

use crate::domain::service::DEFAULT_SERVICE_NAME;

/// Client configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IamPolicyManagementConfig {
    /// Key under which external configuration is looked up.
    pub service_name: String,
    /// Overrides any URL found in external configuration.
    pub url: Option<String>,
    /// Deadline for one request/response exchange. Must be non-zero.
    pub timeout_secs: u64,
}

impl Default for IamPolicyManagementConfig {
    fn default() -> Self {
        Self {
            service_name: DEFAULT_SERVICE_NAME.to_owned(),
            url: None,
            timeout_secs: 60,
        }
    }
}

impl IamPolicyManagementConfig {
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
