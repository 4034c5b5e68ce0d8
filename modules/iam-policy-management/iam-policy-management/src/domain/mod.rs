//! Domain layer for the IAM Policy Management client.

mod assignments;
pub mod local_client;
mod policies;
mod roles;
pub mod service;
mod templates;
mod v2_policies;

pub use local_client::IamPolicyManagementLocalClient;
pub use service::IamPolicyManagementV1;

const ACCEPT_LANGUAGE: &str = "Accept-Language";
const IF_MATCH: &str = "If-Match";
