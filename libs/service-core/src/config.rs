//! Named external service configuration.
//!
//! Resolution order for a service called `iam_policy_management` (later wins):
//! 1. the YAML credentials file named by `IAM_CREDENTIALS_FILE`, under the
//!    top-level key `iam_policy_management`;
//! 2. environment variables `IAM_POLICY_MANAGEMENT_URL`,
//!    `IAM_POLICY_MANAGEMENT_AUTH_TYPE`, `IAM_POLICY_MANAGEMENT_BEARER_TOKEN`,
//!    `IAM_POLICY_MANAGEMENT_USERNAME`, `IAM_POLICY_MANAGEMENT_PASSWORD`.
//!
//! ```yaml
//! iam_policy_management:
//!   url: https://iam.cloud.ibm.com
//!   auth_type: bearer_token
//!   bearer_token: eyJraWQiOi...
//! ```

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

use figment::Figment;
use figment::providers::{Format, Serialized, Yaml};
use secrecy::SecretString;
use serde::Deserialize;

use crate::auth::{
    AuthType, Authenticator, BasicAuthenticator, BearerTokenAuthenticator, NoAuthAuthenticator,
};
use crate::error::ServiceError;

/// Environment variable naming the YAML credentials file.
pub const CREDENTIALS_FILE_ENV: &str = "IAM_CREDENTIALS_FILE";

/// Keys read from `<SERVICE_NAME>_<KEY>` environment variables.
const ENV_KEYS: [&str; 5] = ["url", "auth_type", "bearer_token", "username", "password"];

/// Service settings resolved from the credentials file and the environment.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ExternalServiceConfig {
    pub url: Option<String>,
    pub auth_type: Option<AuthType>,
    pub bearer_token: Option<SecretString>,
    pub username: Option<String>,
    pub password: Option<SecretString>,
}

impl ExternalServiceConfig {
    /// Load the configuration stored under `service_name`.
    ///
    /// A service with no entry anywhere yields an empty configuration.
    ///
    /// # Errors
    ///
    /// [`ServiceError::Configuration`] when the credentials file is named but
    /// missing, or an entry cannot be parsed.
    pub fn load(service_name: &str) -> Result<Self, ServiceError> {
        let mut figment = Figment::new();

        if let Some(path) = std::env::var_os(CREDENTIALS_FILE_ENV).map(PathBuf::from) {
            if !path.is_file() {
                return Err(ServiceError::configuration(format!(
                    "credentials file {} does not exist",
                    path.display()
                )));
            }
            tracing::debug!(path = %path.display(), service_name, "reading credentials file");
            figment = figment.merge(Yaml::file(path));
        }

        // Values stay strings: a password such as `0042` must not become a number.
        let from_env = env_entries(service_name);
        if !from_env.is_empty() {
            figment = figment.merge(Serialized::default(service_name, from_env));
        }

        if !figment.contains(service_name) {
            return Ok(Self::default());
        }

        figment.extract_inner(service_name).map_err(|e| {
            ServiceError::configuration(format!(
                "invalid configuration for service `{service_name}`: {e}"
            ))
        })
    }

    /// Build the authenticator this configuration describes.
    ///
    /// Without an explicit `auth_type` the scheme is inferred from whichever
    /// credentials are present.
    ///
    /// # Errors
    ///
    /// [`ServiceError::Configuration`] when the scheme cannot be determined or
    /// its credentials are incomplete.
    pub fn authenticator(&self) -> Result<Arc<dyn Authenticator>, ServiceError> {
        let auth_type = match self.auth_type {
            Some(auth_type) => auth_type,
            None if self.bearer_token.is_some() => AuthType::BearerToken,
            None if self.username.is_some() && self.password.is_some() => AuthType::Basic,
            None => {
                return Err(ServiceError::configuration(
                    "no authentication type or credentials configured",
                ));
            }
        };

        match auth_type {
            AuthType::NoAuth => Ok(Arc::new(NoAuthAuthenticator)),
            AuthType::BearerToken => {
                let token = self.bearer_token.clone().ok_or_else(|| {
                    ServiceError::configuration("auth type bearerToken requires `bearer_token`")
                })?;
                Ok(Arc::new(BearerTokenAuthenticator::new(token)?))
            }
            AuthType::Basic => match (&self.username, &self.password) {
                (Some(username), Some(password)) => Ok(Arc::new(BasicAuthenticator::new(
                    username.clone(),
                    password.clone(),
                )?)),
                _ => Err(ServiceError::configuration(
                    "auth type basic requires `username` and `password`",
                )),
            },
        }
    }
}

fn env_entries(service_name: &str) -> BTreeMap<&'static str, String> {
    let prefix = service_name.to_uppercase();
    ENV_KEYS
        .into_iter()
        .filter_map(|key| {
            let name = format!("{prefix}_{}", key.to_uppercase());
            std::env::var(name).ok().map(|value| (key, value))
        })
        .collect()
}
