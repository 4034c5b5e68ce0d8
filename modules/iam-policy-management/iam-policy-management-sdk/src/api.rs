//! Public API trait for the IAM Policy Management service.

use async_trait::async_trait;
use service_core::{DetailedResponse, ServiceError};

use crate::models::{
    CustomRole, Policy, PolicyAssignment, PolicyAssignmentCollection, PolicyCollection,
    PolicyTemplate, PolicyTemplateCollection, PolicyTemplateVersionsCollection, RoleCollection,
    V2Policy, V2PolicyCollection,
};
use crate::options::{
    CommitPolicyTemplateVersionOptions, CreatePolicyAssignmentOptions, CreatePolicyOptions,
    CreatePolicyTemplateOptions, CreatePolicyTemplateVersionOptions, CreateRoleOptions,
    CreateV2PolicyOptions, DeletePolicyAssignmentOptions, DeletePolicyOptions,
    DeletePolicyTemplateOptions, DeletePolicyTemplateVersionOptions, DeleteRoleOptions,
    DeleteV2PolicyOptions, GetPolicyAssignmentOptions, GetPolicyOptions, GetPolicyTemplateOptions,
    GetPolicyTemplateVersionOptions, GetRoleOptions, GetV2PolicyOptions, ListPoliciesOptions,
    ListPolicyAssignmentsOptions, ListPolicyTemplateVersionsOptions, ListPolicyTemplatesOptions,
    ListRolesOptions, ListV2PoliciesOptions, UpdatePolicyAssignmentOptions, UpdatePolicyOptions,
    UpdatePolicyStateOptions, UpdatePolicyTemplateVersionOptions, UpdateRoleOptions,
    UpdateV2PolicyOptions,
};

type Response<T> = Result<DetailedResponse<T>, ServiceError>;

/// Typed access to policies, roles, policy templates and policy assignments.
///
/// Every call validates its options before building a request, so a
/// [`ServiceError::Validation`] means nothing was sent. Updates that take an
/// `if_match` need the `ETag` of the latest read ([`DetailedResponse::etag`]);
/// a stale tag comes back as a `412` [`ServiceError::Server`].
///
/// ```ignore
/// let client: Arc<dyn IamPolicyManagementClient> = ...;
///
/// let created = client.create_policy(&options).await?;
/// let policy = created.into_result();
/// ```
///
/// # Errors
///
/// Every method returns [`ServiceError`]: `Validation` for bad options,
/// `Transport` when no response arrived, `Server` for non-2xx statuses and
/// `Decode` when a success body does not match the model.
#[async_trait]
pub trait IamPolicyManagementClient: Send + Sync {
    // -- policies -----------------------------------------------------------

    async fn list_policies(&self, options: &ListPoliciesOptions) -> Response<PolicyCollection>;

    async fn create_policy(&self, options: &CreatePolicyOptions) -> Response<Policy>;

    /// Replace a policy; every body field must be resupplied.
    async fn update_policy(&self, options: &UpdatePolicyOptions) -> Response<Policy>;

    async fn get_policy(&self, options: &GetPolicyOptions) -> Response<Policy>;

    async fn delete_policy(&self, options: &DeletePolicyOptions) -> Response<()>;

    /// Soft-delete or restore a policy.
    async fn update_policy_state(&self, options: &UpdatePolicyStateOptions) -> Response<Policy>;

    // -- v2 policies --------------------------------------------------------

    async fn list_v2_policies(&self, options: &ListV2PoliciesOptions) -> Response<V2PolicyCollection>;

    async fn create_v2_policy(&self, options: &CreateV2PolicyOptions) -> Response<V2Policy>;

    async fn update_v2_policy(&self, options: &UpdateV2PolicyOptions) -> Response<V2Policy>;

    async fn get_v2_policy(&self, options: &GetV2PolicyOptions) -> Response<V2Policy>;

    async fn delete_v2_policy(&self, options: &DeleteV2PolicyOptions) -> Response<()>;

    // -- roles --------------------------------------------------------------

    async fn list_roles(&self, options: &ListRolesOptions) -> Response<RoleCollection>;

    async fn create_role(&self, options: &CreateRoleOptions) -> Response<CustomRole>;

    async fn update_role(&self, options: &UpdateRoleOptions) -> Response<CustomRole>;

    async fn get_role(&self, options: &GetRoleOptions) -> Response<CustomRole>;

    async fn delete_role(&self, options: &DeleteRoleOptions) -> Response<()>;

    // -- policy templates ---------------------------------------------------

    async fn list_policy_templates(
        &self,
        options: &ListPolicyTemplatesOptions,
    ) -> Response<PolicyTemplateCollection>;

    /// Create a template with its first version.
    async fn create_policy_template(
        &self,
        options: &CreatePolicyTemplateOptions,
    ) -> Response<PolicyTemplate>;

    /// Latest version of a template.
    async fn get_policy_template(&self, options: &GetPolicyTemplateOptions) -> Response<PolicyTemplate>;

    /// Delete a template and all of its versions.
    async fn delete_policy_template(&self, options: &DeletePolicyTemplateOptions) -> Response<()>;

    async fn create_policy_template_version(
        &self,
        options: &CreatePolicyTemplateVersionOptions,
    ) -> Response<PolicyTemplate>;

    async fn list_policy_template_versions(
        &self,
        options: &ListPolicyTemplateVersionsOptions,
    ) -> Response<PolicyTemplateVersionsCollection>;

    async fn update_policy_template_version(
        &self,
        options: &UpdatePolicyTemplateVersionOptions,
    ) -> Response<PolicyTemplate>;

    async fn get_policy_template_version(
        &self,
        options: &GetPolicyTemplateVersionOptions,
    ) -> Response<PolicyTemplate>;

    async fn delete_policy_template_version(
        &self,
        options: &DeletePolicyTemplateVersionOptions,
    ) -> Response<()>;

    /// Make a draft version immutable. The server answers `204`.
    async fn commit_policy_template_version(
        &self,
        options: &CommitPolicyTemplateVersionOptions,
    ) -> Response<()>;

    // -- policy assignments -------------------------------------------------

    async fn list_policy_assignments(
        &self,
        options: &ListPolicyAssignmentsOptions,
    ) -> Response<PolicyAssignmentCollection>;

    /// Returns one assignment per requested template.
    async fn create_policy_assignment(
        &self,
        options: &CreatePolicyAssignmentOptions,
    ) -> Response<PolicyAssignmentCollection>;

    async fn get_policy_assignment(
        &self,
        options: &GetPolicyAssignmentOptions,
    ) -> Response<PolicyAssignment>;

    async fn update_policy_assignment(
        &self,
        options: &UpdatePolicyAssignmentOptions,
    ) -> Response<PolicyAssignment>;

    async fn delete_policy_assignment(&self, options: &DeletePolicyAssignmentOptions) -> Response<()>;
}
