//! `/v1/policies` operations.

use http::Method;
use iam_policy_management_sdk::{
    CreatePolicyOptions, DeletePolicyOptions, GetPolicyOptions, ListPoliciesOptions, Policy,
    PolicyCollection, UpdatePolicyOptions, UpdatePolicyStateOptions,
};
use service_core::{DetailedResponse, ServiceError, Validate};

use super::service::IamPolicyManagementV1;
use super::{ACCEPT_LANGUAGE, IF_MATCH};

impl IamPolicyManagementV1 {
    #[tracing::instrument(skip_all, fields(account_id = %options.account_id))]
    pub(crate) async fn list_policies(
        &self,
        options: &ListPoliciesOptions,
    ) -> Result<DetailedResponse<PolicyCollection>, ServiceError> {
        options.validate()?;
        let request = self
            .request(Method::GET, "ListPolicies", "/v1/policies", &[], &options.headers)
            .header_opt(ACCEPT_LANGUAGE, options.accept_language.as_deref())
            .query("account_id", options.account_id.as_str())
            .query_opt("iam_id", options.iam_id.as_deref())
            .query_opt("access_group_id", options.access_group_id.as_deref())
            .query_opt("type", options.policy_type)
            .query_opt("service_type", options.service_type.as_deref())
            .query_opt("tag_name", options.tag_name.as_deref())
            .query_opt("tag_value", options.tag_value.as_deref())
            .query_opt("sort", options.sort.as_deref())
            .query_opt("format", options.format.as_deref())
            .query_opt("state", options.state)
            .query_opt("limit", options.limit)
            .query_opt("start", options.start.as_deref())
            .build()?;
        self.service.request(request).await
    }

    #[tracing::instrument(skip_all, fields(policy_type = %options.policy_type))]
    pub(crate) async fn create_policy(
        &self,
        options: &CreatePolicyOptions,
    ) -> Result<DetailedResponse<Policy>, ServiceError> {
        options.validate()?;
        let request = self
            .request(Method::POST, "CreatePolicy", "/v1/policies", &[], &options.headers)
            .header_opt(ACCEPT_LANGUAGE, options.accept_language.as_deref())
            .json_body(options)
            .build()?;
        self.service.request(request).await
    }

    #[tracing::instrument(skip_all, fields(policy_id = %options.policy_id))]
    pub(crate) async fn update_policy(
        &self,
        options: &UpdatePolicyOptions,
    ) -> Result<DetailedResponse<Policy>, ServiceError> {
        options.validate()?;
        let request = self
            .request(
                Method::PUT,
                "UpdatePolicy",
                "/v1/policies/{policy_id}",
                &[("policy_id", options.policy_id.as_str())],
                &options.headers,
            )
            .header(IF_MATCH, &options.if_match)
            .json_body(options)
            .build()?;
        self.service.request(request).await
    }

    #[tracing::instrument(skip_all, fields(policy_id = %options.policy_id))]
    pub(crate) async fn get_policy(
        &self,
        options: &GetPolicyOptions,
    ) -> Result<DetailedResponse<Policy>, ServiceError> {
        options.validate()?;
        let request = self
            .request(
                Method::GET,
                "GetPolicy",
                "/v1/policies/{policy_id}",
                &[("policy_id", options.policy_id.as_str())],
                &options.headers,
            )
            .build()?;
        self.service.request(request).await
    }

    #[tracing::instrument(skip_all, fields(policy_id = %options.policy_id))]
    pub(crate) async fn delete_policy(
        &self,
        options: &DeletePolicyOptions,
    ) -> Result<DetailedResponse<()>, ServiceError> {
        options.validate()?;
        let request = self
            .request(
                Method::DELETE,
                "DeletePolicy",
                "/v1/policies/{policy_id}",
                &[("policy_id", options.policy_id.as_str())],
                &options.headers,
            )
            .build()?;
        self.service.request_empty(request).await
    }

    #[tracing::instrument(skip_all, fields(policy_id = %options.policy_id))]
    pub(crate) async fn update_policy_state(
        &self,
        options: &UpdatePolicyStateOptions,
    ) -> Result<DetailedResponse<Policy>, ServiceError> {
        options.validate()?;
        let request = self
            .request(
                Method::PATCH,
                "UpdatePolicyState",
                "/v1/policies/{policy_id}",
                &[("policy_id", options.policy_id.as_str())],
                &options.headers,
            )
            .header(IF_MATCH, &options.if_match)
            .json_body(options)
            .build()?;
        self.service.request(request).await
    }
}
