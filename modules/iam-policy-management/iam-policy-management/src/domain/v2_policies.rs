//! `/v2/policies` operations.

use http::Method;
use iam_policy_management_sdk::{
    CreateV2PolicyOptions, DeleteV2PolicyOptions, GetV2PolicyOptions, ListV2PoliciesOptions,
    UpdateV2PolicyOptions, V2Policy, V2PolicyCollection,
};
use service_core::{DetailedResponse, ServiceError, Validate};

use super::service::IamPolicyManagementV1;
use super::{ACCEPT_LANGUAGE, IF_MATCH};

impl IamPolicyManagementV1 {
    #[tracing::instrument(skip_all, fields(account_id = %options.account_id))]
    pub(crate) async fn list_v2_policies(
        &self,
        options: &ListV2PoliciesOptions,
    ) -> Result<DetailedResponse<V2PolicyCollection>, ServiceError> {
        options.validate()?;
        let request = self
            .request(Method::GET, "ListV2Policies", "/v2/policies", &[], &options.headers)
            .header_opt(ACCEPT_LANGUAGE, options.accept_language.as_deref())
            .query("account_id", options.account_id.as_str())
            .query_opt("iam_id", options.iam_id.as_deref())
            .query_opt("access_group_id", options.access_group_id.as_deref())
            .query_opt("type", options.policy_type)
            .query_opt("service_type", options.service_type.as_deref())
            .query_opt("service_name", options.service_name.as_deref())
            .query_opt("service_group_id", options.service_group_id.as_deref())
            .query_opt("sort", options.sort.as_deref())
            .query_opt("format", options.format.as_deref())
            .query_opt("state", options.state)
            .query_opt("limit", options.limit)
            .query_opt("start", options.start.as_deref())
            .build()?;
        self.service.request(request).await
    }

    #[tracing::instrument(skip_all, fields(policy_type = %options.policy_type))]
    pub(crate) async fn create_v2_policy(
        &self,
        options: &CreateV2PolicyOptions,
    ) -> Result<DetailedResponse<V2Policy>, ServiceError> {
        options.validate()?;
        let request = self
            .request(Method::POST, "CreateV2Policy", "/v2/policies", &[], &options.headers)
            .header_opt(ACCEPT_LANGUAGE, options.accept_language.as_deref())
            .json_body(options)
            .build()?;
        self.service.request(request).await
    }

    #[tracing::instrument(skip_all, fields(id = %options.id))]
    pub(crate) async fn update_v2_policy(
        &self,
        options: &UpdateV2PolicyOptions,
    ) -> Result<DetailedResponse<V2Policy>, ServiceError> {
        options.validate()?;
        let request = self
            .request(
                Method::PUT,
                "UpdateV2Policy",
                "/v2/policies/{id}",
                &[("id", options.id.as_str())],
                &options.headers,
            )
            .header(IF_MATCH, &options.if_match)
            .json_body(options)
            .build()?;
        self.service.request(request).await
    }

    #[tracing::instrument(skip_all, fields(id = %options.id))]
    pub(crate) async fn get_v2_policy(
        &self,
        options: &GetV2PolicyOptions,
    ) -> Result<DetailedResponse<V2Policy>, ServiceError> {
        options.validate()?;
        let request = self
            .request(
                Method::GET,
                "GetV2Policy",
                "/v2/policies/{id}",
                &[("id", options.id.as_str())],
                &options.headers,
            )
            .query_opt("format", options.format.as_deref())
            .build()?;
        self.service.request(request).await
    }

    #[tracing::instrument(skip_all, fields(id = %options.id))]
    pub(crate) async fn delete_v2_policy(
        &self,
        options: &DeleteV2PolicyOptions,
    ) -> Result<DetailedResponse<()>, ServiceError> {
        options.validate()?;
        let request = self
            .request(
                Method::DELETE,
                "DeleteV2Policy",
                "/v2/policies/{id}",
                &[("id", options.id.as_str())],
                &options.headers,
            )
            .build()?;
        self.service.request_empty(request).await
    }
}
