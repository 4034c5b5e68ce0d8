//! `/v2/roles` operations.

use http::Method;
use iam_policy_management_sdk::{
    CreateRoleOptions, CustomRole, DeleteRoleOptions, GetRoleOptions, ListRolesOptions,
    RoleCollection, UpdateRoleOptions,
};
use service_core::{DetailedResponse, ServiceError, Validate};

use super::service::IamPolicyManagementV1;
use super::{ACCEPT_LANGUAGE, IF_MATCH};

impl IamPolicyManagementV1 {
    #[tracing::instrument(skip_all, fields(account_id = ?options.account_id, service_name = ?options.service_name))]
    pub(crate) async fn list_roles(
        &self,
        options: &ListRolesOptions,
    ) -> Result<DetailedResponse<RoleCollection>, ServiceError> {
        options.validate()?;
        let request = self
            .request(Method::GET, "ListRoles", "/v2/roles", &[], &options.headers)
            .header_opt(ACCEPT_LANGUAGE, options.accept_language.as_deref())
            .query_opt("account_id", options.account_id.as_deref())
            .query_opt("service_name", options.service_name.as_deref())
            .query_opt("source_service_name", options.source_service_name.as_deref())
            .query_opt("policy_type", options.policy_type.as_deref())
            .query_opt("service_group_id", options.service_group_id.as_deref())
            .build()?;
        self.service.request(request).await
    }

    #[tracing::instrument(skip_all, fields(account_id = %options.account_id, name = %options.name))]
    pub(crate) async fn create_role(
        &self,
        options: &CreateRoleOptions,
    ) -> Result<DetailedResponse<CustomRole>, ServiceError> {
        options.validate()?;
        let request = self
            .request(Method::POST, "CreateRole", "/v2/roles", &[], &options.headers)
            .header_opt(ACCEPT_LANGUAGE, options.accept_language.as_deref())
            .json_body(options)
            .build()?;
        self.service.request(request).await
    }

    #[tracing::instrument(skip_all, fields(role_id = %options.role_id))]
    pub(crate) async fn update_role(
        &self,
        options: &UpdateRoleOptions,
    ) -> Result<DetailedResponse<CustomRole>, ServiceError> {
        options.validate()?;
        let request = self
            .request(
                Method::PUT,
                "UpdateRole",
                "/v2/roles/{role_id}",
                &[("role_id", options.role_id.as_str())],
                &options.headers,
            )
            .header(IF_MATCH, &options.if_match)
            .json_body(options)
            .build()?;
        self.service.request(request).await
    }

    #[tracing::instrument(skip_all, fields(role_id = %options.role_id))]
    pub(crate) async fn get_role(
        &self,
        options: &GetRoleOptions,
    ) -> Result<DetailedResponse<CustomRole>, ServiceError> {
        options.validate()?;
        let request = self
            .request(
                Method::GET,
                "GetRole",
                "/v2/roles/{role_id}",
                &[("role_id", options.role_id.as_str())],
                &options.headers,
            )
            .build()?;
        self.service.request(request).await
    }

    #[tracing::instrument(skip_all, fields(role_id = %options.role_id))]
    pub(crate) async fn delete_role(
        &self,
        options: &DeleteRoleOptions,
    ) -> Result<DetailedResponse<()>, ServiceError> {
        options.validate()?;
        let request = self
            .request(
                Method::DELETE,
                "DeleteRole",
                "/v2/roles/{role_id}",
                &[("role_id", options.role_id.as_str())],
                &options.headers,
            )
            .build()?;
        self.service.request_empty(request).await
    }
}
