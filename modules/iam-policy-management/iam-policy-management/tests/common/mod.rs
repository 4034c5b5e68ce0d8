#![allow(clippy::unwrap_used, clippy::expect_used, dead_code)]

use std::sync::Arc;

use iam_policy_management::{
    IamPolicyManagementConfig, IamPolicyManagementLocalClient, IamPolicyManagementV1,
};
use iam_policy_management_sdk::IamPolicyManagementClient;
use secrecy::SecretString;
use service_core::BearerTokenAuthenticator;

pub const TOKEN: &str = "test-token";

/// Client pointed at `base_url` with a static bearer token.
pub fn client(base_url: &str) -> Arc<dyn IamPolicyManagementClient> {
    let config = IamPolicyManagementConfig {
        url: Some(base_url.to_owned()),
        timeout_secs: 5,
        ..IamPolicyManagementConfig::default()
    };
    let authenticator =
        Arc::new(BearerTokenAuthenticator::new(SecretString::from(TOKEN)).unwrap());
    let svc = IamPolicyManagementV1::new(&config, authenticator).unwrap();
    Arc::new(IamPolicyManagementLocalClient::new(Arc::new(svc)))
}

pub fn analytics(operation_id: &str) -> String {
    format!("service_name=iam_policy_management;service_version=V1;operation_id={operation_id}")
}

pub fn bearer() -> String {
    format!("Bearer {TOKEN}")
}
