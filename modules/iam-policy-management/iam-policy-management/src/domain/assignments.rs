//! `/v1/policy_assignments` operations.

use http::Method;
use iam_policy_management_sdk::{
    CreatePolicyAssignmentOptions, DeletePolicyAssignmentOptions, GetPolicyAssignmentOptions,
    ListPolicyAssignmentsOptions, PolicyAssignment, PolicyAssignmentCollection,
    UpdatePolicyAssignmentOptions,
};
use service_core::{DetailedResponse, ServiceError, Validate};

use super::service::IamPolicyManagementV1;
use super::{ACCEPT_LANGUAGE, IF_MATCH};

/// Assignment endpoints are versioned by header.
const VERSION_HEADER: &str = "Version";
const ASSIGNMENTS_API_VERSION: &str = "1.0";

const ASSIGNMENT_PATH: &str = "/v1/policy_assignments/{assignment_id}";

impl IamPolicyManagementV1 {
    #[tracing::instrument(skip_all, fields(account_id = %options.account_id))]
    pub(crate) async fn list_policy_assignments(
        &self,
        options: &ListPolicyAssignmentsOptions,
    ) -> Result<DetailedResponse<PolicyAssignmentCollection>, ServiceError> {
        options.validate()?;
        let request = self
            .request(
                Method::GET,
                "ListPolicyAssignments",
                "/v1/policy_assignments",
                &[],
                &options.headers,
            )
            .header(VERSION_HEADER, ASSIGNMENTS_API_VERSION)
            .header_opt(ACCEPT_LANGUAGE, options.accept_language.as_deref())
            .query("account_id", options.account_id.as_str())
            .query_opt("template_id", options.template_id.as_deref())
            .query_opt("template_version", options.template_version.as_deref())
            .query_opt("limit", options.limit)
            .query_opt("start", options.start.as_deref())
            .build()?;
        self.service.request(request).await
    }

    #[tracing::instrument(
        skip_all,
        fields(target_type = %options.target.target_type, target_id = %options.target.id)
    )]
    pub(crate) async fn create_policy_assignment(
        &self,
        options: &CreatePolicyAssignmentOptions,
    ) -> Result<DetailedResponse<PolicyAssignmentCollection>, ServiceError> {
        options.validate()?;
        let request = self
            .request(
                Method::POST,
                "CreatePolicyAssignment",
                "/v1/policy_assignments",
                &[],
                &options.headers,
            )
            .header(VERSION_HEADER, ASSIGNMENTS_API_VERSION)
            .header_opt(ACCEPT_LANGUAGE, options.accept_language.as_deref())
            .json_body(options)
            .build()?;
        self.service.request(request).await
    }

    #[tracing::instrument(skip_all, fields(assignment_id = %options.assignment_id))]
    pub(crate) async fn get_policy_assignment(
        &self,
        options: &GetPolicyAssignmentOptions,
    ) -> Result<DetailedResponse<PolicyAssignment>, ServiceError> {
        options.validate()?;
        let request = self
            .request(
                Method::GET,
                "GetPolicyAssignment",
                ASSIGNMENT_PATH,
                &[("assignment_id", options.assignment_id.as_str())],
                &options.headers,
            )
            .header(VERSION_HEADER, ASSIGNMENTS_API_VERSION)
            .build()?;
        self.service.request(request).await
    }

    #[tracing::instrument(skip_all, fields(assignment_id = %options.assignment_id))]
    pub(crate) async fn update_policy_assignment(
        &self,
        options: &UpdatePolicyAssignmentOptions,
    ) -> Result<DetailedResponse<PolicyAssignment>, ServiceError> {
        options.validate()?;
        let request = self
            .request(
                Method::PATCH,
                "UpdatePolicyAssignment",
                ASSIGNMENT_PATH,
                &[("assignment_id", options.assignment_id.as_str())],
                &options.headers,
            )
            .header(VERSION_HEADER, ASSIGNMENTS_API_VERSION)
            .header(IF_MATCH, &options.if_match)
            .json_body(options)
            .build()?;
        self.service.request(request).await
    }

    #[tracing::instrument(skip_all, fields(assignment_id = %options.assignment_id))]
    pub(crate) async fn delete_policy_assignment(
        &self,
        options: &DeletePolicyAssignmentOptions,
    ) -> Result<DetailedResponse<()>, ServiceError> {
        options.validate()?;
        let request = self
            .request(
                Method::DELETE,
                "DeletePolicyAssignment",
                ASSIGNMENT_PATH,
                &[("assignment_id", options.assignment_id.as_str())],
                &options.headers,
            )
            .build()?;
        self.service.request_empty(request).await
    }
}
