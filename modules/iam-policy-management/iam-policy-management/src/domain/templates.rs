//! `/v1/policy_templates` operations.
//!
//! Versions are addressed by their decimal version string. The server owns
//! the draft/committed lifecycle; these calls do not check it up front.

use http::Method;
use iam_policy_management_sdk::{
    CommitPolicyTemplateVersionOptions, CreatePolicyTemplateOptions,
    CreatePolicyTemplateVersionOptions, DeletePolicyTemplateOptions,
    DeletePolicyTemplateVersionOptions, GetPolicyTemplateOptions, GetPolicyTemplateVersionOptions,
    ListPolicyTemplateVersionsOptions, ListPolicyTemplatesOptions, PolicyTemplate,
    PolicyTemplateCollection, PolicyTemplateVersionsCollection,
    UpdatePolicyTemplateVersionOptions,
};
use service_core::{DetailedResponse, ServiceError, Validate};

use super::service::IamPolicyManagementV1;
use super::{ACCEPT_LANGUAGE, IF_MATCH};

const TEMPLATE_PATH: &str = "/v1/policy_templates/{policy_template_id}";
const VERSIONS_PATH: &str = "/v1/policy_templates/{policy_template_id}/versions";
const VERSION_PATH: &str = "/v1/policy_templates/{policy_template_id}/versions/{version}";

impl IamPolicyManagementV1 {
    #[tracing::instrument(skip_all, fields(account_id = %options.account_id))]
    pub(crate) async fn list_policy_templates(
        &self,
        options: &ListPolicyTemplatesOptions,
    ) -> Result<DetailedResponse<PolicyTemplateCollection>, ServiceError> {
        options.validate()?;
        let request = self
            .request(
                Method::GET,
                "ListPolicyTemplates",
                "/v1/policy_templates",
                &[],
                &options.headers,
            )
            .header_opt(ACCEPT_LANGUAGE, options.accept_language.as_deref())
            .query("account_id", options.account_id.as_str())
            .query_opt("state", options.state)
            .query_opt("name", options.name.as_deref())
            .query_opt("policy_service_type", options.policy_service_type.as_deref())
            .query_opt("policy_service_name", options.policy_service_name.as_deref())
            .query_opt("policy_service_group_id", options.policy_service_group_id.as_deref())
            .query_opt("policy_type", options.policy_type.as_deref())
            .query_opt("limit", options.limit)
            .query_opt("start", options.start.as_deref())
            .build()?;
        self.service.request(request).await
    }

    #[tracing::instrument(skip_all, fields(account_id = %options.account_id, name = %options.name))]
    pub(crate) async fn create_policy_template(
        &self,
        options: &CreatePolicyTemplateOptions,
    ) -> Result<DetailedResponse<PolicyTemplate>, ServiceError> {
        options.validate()?;
        let request = self
            .request(
                Method::POST,
                "CreatePolicyTemplate",
                "/v1/policy_templates",
                &[],
                &options.headers,
            )
            .header_opt(ACCEPT_LANGUAGE, options.accept_language.as_deref())
            .json_body(options)
            .build()?;
        self.service.request(request).await
    }

    #[tracing::instrument(skip_all, fields(policy_template_id = %options.policy_template_id))]
    pub(crate) async fn get_policy_template(
        &self,
        options: &GetPolicyTemplateOptions,
    ) -> Result<DetailedResponse<PolicyTemplate>, ServiceError> {
        options.validate()?;
        let request = self
            .request(
                Method::GET,
                "GetPolicyTemplate",
                TEMPLATE_PATH,
                &[("policy_template_id", options.policy_template_id.as_str())],
                &options.headers,
            )
            .query_opt("state", options.state)
            .build()?;
        self.service.request(request).await
    }

    #[tracing::instrument(skip_all, fields(policy_template_id = %options.policy_template_id))]
    pub(crate) async fn delete_policy_template(
        &self,
        options: &DeletePolicyTemplateOptions,
    ) -> Result<DetailedResponse<()>, ServiceError> {
        options.validate()?;
        let request = self
            .request(
                Method::DELETE,
                "DeletePolicyTemplate",
                TEMPLATE_PATH,
                &[("policy_template_id", options.policy_template_id.as_str())],
                &options.headers,
            )
            .build()?;
        self.service.request_empty(request).await
    }

    #[tracing::instrument(skip_all, fields(policy_template_id = %options.policy_template_id))]
    pub(crate) async fn create_policy_template_version(
        &self,
        options: &CreatePolicyTemplateVersionOptions,
    ) -> Result<DetailedResponse<PolicyTemplate>, ServiceError> {
        options.validate()?;
        let request = self
            .request(
                Method::POST,
                "CreatePolicyTemplateVersion",
                VERSIONS_PATH,
                &[("policy_template_id", options.policy_template_id.as_str())],
                &options.headers,
            )
            .json_body(options)
            .build()?;
        self.service.request(request).await
    }

    #[tracing::instrument(skip_all, fields(policy_template_id = %options.policy_template_id))]
    pub(crate) async fn list_policy_template_versions(
        &self,
        options: &ListPolicyTemplateVersionsOptions,
    ) -> Result<DetailedResponse<PolicyTemplateVersionsCollection>, ServiceError> {
        options.validate()?;
        let request = self
            .request(
                Method::GET,
                "ListPolicyTemplateVersions",
                VERSIONS_PATH,
                &[("policy_template_id", options.policy_template_id.as_str())],
                &options.headers,
            )
            .query_opt("state", options.state)
            .query_opt("limit", options.limit)
            .query_opt("start", options.start.as_deref())
            .build()?;
        self.service.request(request).await
    }

    #[tracing::instrument(
        skip_all,
        fields(policy_template_id = %options.policy_template_id, version = %options.version)
    )]
    pub(crate) async fn update_policy_template_version(
        &self,
        options: &UpdatePolicyTemplateVersionOptions,
    ) -> Result<DetailedResponse<PolicyTemplate>, ServiceError> {
        options.validate()?;
        let request = self
            .request(
                Method::PUT,
                "UpdatePolicyTemplateVersion",
                VERSION_PATH,
                &[
                    ("policy_template_id", options.policy_template_id.as_str()),
                    ("version", options.version.as_str()),
                ],
                &options.headers,
            )
            .header(IF_MATCH, &options.if_match)
            .json_body(options)
            .build()?;
        self.service.request(request).await
    }

    #[tracing::instrument(
        skip_all,
        fields(policy_template_id = %options.policy_template_id, version = %options.version)
    )]
    pub(crate) async fn get_policy_template_version(
        &self,
        options: &GetPolicyTemplateVersionOptions,
    ) -> Result<DetailedResponse<PolicyTemplate>, ServiceError> {
        options.validate()?;
        let request = self
            .request(
                Method::GET,
                "GetPolicyTemplateVersion",
                VERSION_PATH,
                &[
                    ("policy_template_id", options.policy_template_id.as_str()),
                    ("version", options.version.as_str()),
                ],
                &options.headers,
            )
            .build()?;
        self.service.request(request).await
    }

    #[tracing::instrument(
        skip_all,
        fields(policy_template_id = %options.policy_template_id, version = %options.version)
    )]
    pub(crate) async fn delete_policy_template_version(
        &self,
        options: &DeletePolicyTemplateVersionOptions,
    ) -> Result<DetailedResponse<()>, ServiceError> {
        options.validate()?;
        let request = self
            .request(
                Method::DELETE,
                "DeletePolicyTemplateVersion",
                VERSION_PATH,
                &[
                    ("policy_template_id", options.policy_template_id.as_str()),
                    ("version", options.version.as_str()),
                ],
                &options.headers,
            )
            .build()?;
        self.service.request_empty(request).await
    }

    #[tracing::instrument(
        skip_all,
        fields(policy_template_id = %options.policy_template_id, version = %options.version)
    )]
    pub(crate) async fn commit_policy_template_version(
        &self,
        options: &CommitPolicyTemplateVersionOptions,
    ) -> Result<DetailedResponse<()>, ServiceError> {
        options.validate()?;
        let request = self
            .request(
                Method::POST,
                "CommitPolicyTemplateVersion",
                "/v1/policy_templates/{policy_template_id}/versions/{version}/commit",
                &[
                    ("policy_template_id", options.policy_template_id.as_str()),
                    ("version", options.version.as_str()),
                ],
                &options.headers,
            )
            .header(IF_MATCH, &options.if_match)
            .build()?;
        self.service.request_empty(request).await
    }
}
