//! Local (in-process) client for the IAM Policy Management service.

use std::sync::Arc;

use async_trait::async_trait;
use iam_policy_management_sdk::{
    CommitPolicyTemplateVersionOptions, CreatePolicyAssignmentOptions, CreatePolicyOptions,
    CreatePolicyTemplateOptions, CreatePolicyTemplateVersionOptions, CreateRoleOptions,
    CreateV2PolicyOptions, CustomRole, DeletePolicyAssignmentOptions, DeletePolicyOptions,
    DeletePolicyTemplateOptions, DeletePolicyTemplateVersionOptions, DeleteRoleOptions,
    DeleteV2PolicyOptions, GetPolicyAssignmentOptions, GetPolicyOptions,
    GetPolicyTemplateOptions, GetPolicyTemplateVersionOptions, GetRoleOptions,
    GetV2PolicyOptions, IamPolicyManagementClient, ListPoliciesOptions,
    ListPolicyAssignmentsOptions, ListPolicyTemplateVersionsOptions, ListPolicyTemplatesOptions,
    ListRolesOptions, ListV2PoliciesOptions, Policy, PolicyAssignment,
    PolicyAssignmentCollection, PolicyCollection, PolicyTemplate, PolicyTemplateCollection,
    PolicyTemplateVersionsCollection, RoleCollection, UpdatePolicyAssignmentOptions,
    UpdatePolicyOptions, UpdatePolicyStateOptions, UpdatePolicyTemplateVersionOptions,
    UpdateRoleOptions, UpdateV2PolicyOptions, V2Policy, V2PolicyCollection,
};
use service_core::{DetailedResponse, ServiceError};

use super::IamPolicyManagementV1;

type Response<T> = Result<DetailedResponse<T>, ServiceError>;

/// Exposes [`IamPolicyManagementV1`] through the SDK trait.
#[derive(Debug, Clone)]
pub struct IamPolicyManagementLocalClient {
    svc: Arc<IamPolicyManagementV1>,
}

impl IamPolicyManagementLocalClient {
    #[must_use]
    pub fn new(svc: Arc<IamPolicyManagementV1>) -> Self {
        Self { svc }
    }
}

// Non-2xx responses are already logged by the base service.
fn log_failure(op: &str, e: ServiceError) -> ServiceError {
    tracing::debug!(operation = op, error = %e, "iam_policy_management call failed");
    e
}

#[async_trait]
impl IamPolicyManagementClient for IamPolicyManagementLocalClient {
    async fn list_policies(&self, options: &ListPoliciesOptions) -> Response<PolicyCollection> {
        self.svc
            .list_policies(options)
            .await
            .map_err(|e| log_failure("list_policies", e))
    }

    async fn create_policy(&self, options: &CreatePolicyOptions) -> Response<Policy> {
        self.svc
            .create_policy(options)
            .await
            .map_err(|e| log_failure("create_policy", e))
    }

    async fn update_policy(&self, options: &UpdatePolicyOptions) -> Response<Policy> {
        self.svc
            .update_policy(options)
            .await
            .map_err(|e| log_failure("update_policy", e))
    }

    async fn get_policy(&self, options: &GetPolicyOptions) -> Response<Policy> {
        self.svc
            .get_policy(options)
            .await
            .map_err(|e| log_failure("get_policy", e))
    }

    async fn delete_policy(&self, options: &DeletePolicyOptions) -> Response<()> {
        self.svc
            .delete_policy(options)
            .await
            .map_err(|e| log_failure("delete_policy", e))
    }

    async fn update_policy_state(&self, options: &UpdatePolicyStateOptions) -> Response<Policy> {
        self.svc
            .update_policy_state(options)
            .await
            .map_err(|e| log_failure("update_policy_state", e))
    }

    async fn list_v2_policies(
        &self,
        options: &ListV2PoliciesOptions,
    ) -> Response<V2PolicyCollection> {
        self.svc
            .list_v2_policies(options)
            .await
            .map_err(|e| log_failure("list_v2_policies", e))
    }

    async fn create_v2_policy(&self, options: &CreateV2PolicyOptions) -> Response<V2Policy> {
        self.svc
            .create_v2_policy(options)
            .await
            .map_err(|e| log_failure("create_v2_policy", e))
    }

    async fn update_v2_policy(&self, options: &UpdateV2PolicyOptions) -> Response<V2Policy> {
        self.svc
            .update_v2_policy(options)
            .await
            .map_err(|e| log_failure("update_v2_policy", e))
    }

    async fn get_v2_policy(&self, options: &GetV2PolicyOptions) -> Response<V2Policy> {
        self.svc
            .get_v2_policy(options)
            .await
            .map_err(|e| log_failure("get_v2_policy", e))
    }

    async fn delete_v2_policy(&self, options: &DeleteV2PolicyOptions) -> Response<()> {
        self.svc
            .delete_v2_policy(options)
            .await
            .map_err(|e| log_failure("delete_v2_policy", e))
    }

    async fn list_roles(&self, options: &ListRolesOptions) -> Response<RoleCollection> {
        self.svc
            .list_roles(options)
            .await
            .map_err(|e| log_failure("list_roles", e))
    }

    async fn create_role(&self, options: &CreateRoleOptions) -> Response<CustomRole> {
        self.svc
            .create_role(options)
            .await
            .map_err(|e| log_failure("create_role", e))
    }

    async fn update_role(&self, options: &UpdateRoleOptions) -> Response<CustomRole> {
        self.svc
            .update_role(options)
            .await
            .map_err(|e| log_failure("update_role", e))
    }

    async fn get_role(&self, options: &GetRoleOptions) -> Response<CustomRole> {
        self.svc
            .get_role(options)
            .await
            .map_err(|e| log_failure("get_role", e))
    }

    async fn delete_role(&self, options: &DeleteRoleOptions) -> Response<()> {
        self.svc
            .delete_role(options)
            .await
            .map_err(|e| log_failure("delete_role", e))
    }

    async fn list_policy_templates(
        &self,
        options: &ListPolicyTemplatesOptions,
    ) -> Response<PolicyTemplateCollection> {
        self.svc
            .list_policy_templates(options)
            .await
            .map_err(|e| log_failure("list_policy_templates", e))
    }

    async fn create_policy_template(
        &self,
        options: &CreatePolicyTemplateOptions,
    ) -> Response<PolicyTemplate> {
        self.svc
            .create_policy_template(options)
            .await
            .map_err(|e| log_failure("create_policy_template", e))
    }

    async fn get_policy_template(
        &self,
        options: &GetPolicyTemplateOptions,
    ) -> Response<PolicyTemplate> {
        self.svc
            .get_policy_template(options)
            .await
            .map_err(|e| log_failure("get_policy_template", e))
    }

    async fn delete_policy_template(&self, options: &DeletePolicyTemplateOptions) -> Response<()> {
        self.svc
            .delete_policy_template(options)
            .await
            .map_err(|e| log_failure("delete_policy_template", e))
    }

    async fn create_policy_template_version(
        &self,
        options: &CreatePolicyTemplateVersionOptions,
    ) -> Response<PolicyTemplate> {
        self.svc
            .create_policy_template_version(options)
            .await
            .map_err(|e| log_failure("create_policy_template_version", e))
    }

    async fn list_policy_template_versions(
        &self,
        options: &ListPolicyTemplateVersionsOptions,
    ) -> Response<PolicyTemplateVersionsCollection> {
        self.svc
            .list_policy_template_versions(options)
            .await
            .map_err(|e| log_failure("list_policy_template_versions", e))
    }

    async fn update_policy_template_version(
        &self,
        options: &UpdatePolicyTemplateVersionOptions,
    ) -> Response<PolicyTemplate> {
        self.svc
            .update_policy_template_version(options)
            .await
            .map_err(|e| log_failure("update_policy_template_version", e))
    }

    async fn get_policy_template_version(
        &self,
        options: &GetPolicyTemplateVersionOptions,
    ) -> Response<PolicyTemplate> {
        self.svc
            .get_policy_template_version(options)
            .await
            .map_err(|e| log_failure("get_policy_template_version", e))
    }

    async fn delete_policy_template_version(
        &self,
        options: &DeletePolicyTemplateVersionOptions,
    ) -> Response<()> {
        self.svc
            .delete_policy_template_version(options)
            .await
            .map_err(|e| log_failure("delete_policy_template_version", e))
    }

    async fn commit_policy_template_version(
        &self,
        options: &CommitPolicyTemplateVersionOptions,
    ) -> Response<()> {
        self.svc
            .commit_policy_template_version(options)
            .await
            .map_err(|e| log_failure("commit_policy_template_version", e))
    }

    async fn list_policy_assignments(
        &self,
        options: &ListPolicyAssignmentsOptions,
    ) -> Response<PolicyAssignmentCollection> {
        self.svc
            .list_policy_assignments(options)
            .await
            .map_err(|e| log_failure("list_policy_assignments", e))
    }

    async fn create_policy_assignment(
        &self,
        options: &CreatePolicyAssignmentOptions,
    ) -> Response<PolicyAssignmentCollection> {
        self.svc
            .create_policy_assignment(options)
            .await
            .map_err(|e| log_failure("create_policy_assignment", e))
    }

    async fn get_policy_assignment(
        &self,
        options: &GetPolicyAssignmentOptions,
    ) -> Response<PolicyAssignment> {
        self.svc
            .get_policy_assignment(options)
            .await
            .map_err(|e| log_failure("get_policy_assignment", e))
    }

    async fn update_policy_assignment(
        &self,
        options: &UpdatePolicyAssignmentOptions,
    ) -> Response<PolicyAssignment> {
        self.svc
            .update_policy_assignment(options)
            .await
            .map_err(|e| log_failure("update_policy_assignment", e))
    }

    async fn delete_policy_assignment(
        &self,
        options: &DeletePolicyAssignmentOptions,
    ) -> Response<()> {
        self.svc
            .delete_policy_assignment(options)
            .await
            .map_err(|e| log_failure("delete_policy_assignment", e))
    }
}
