//! IAM Policy Management Module
//!
//! HTTP implementation of [`iam_policy_management_sdk::IamPolicyManagementClient`].
//! [`IamPolicyManagementV1`] talks to the service; [`IamPolicyManagementLocalClient`]
//! exposes it through the SDK trait.
//!
//! ```ignore
//! let config = IamPolicyManagementConfig::default();
//! let svc = IamPolicyManagementV1::from_external_config(&config)?;
//! let client: Arc<dyn IamPolicyManagementClient> =
//!     Arc::new(IamPolicyManagementLocalClient::new(Arc::new(svc)));
//! ```
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod domain;

pub use config::IamPolicyManagementConfig;
pub use domain::service::{DEFAULT_SERVICE_NAME, DEFAULT_SERVICE_URL};
pub use domain::{IamPolicyManagementLocalClient, IamPolicyManagementV1};
