#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use http::StatusCode;
use httpmock::prelude::*;
use iam_policy_management_sdk::{
    CommitPolicyTemplateVersionOptions, ControlInput, CreatePolicyTemplateOptions,
    CreatePolicyTemplateVersionOptions, GetPolicyTemplateOptions,
    ListPolicyTemplateVersionsOptions, ListPolicyTemplatesOptions, PolicyRoleInput, PolicyState,
    PolicyType, ServiceError, TemplatePolicyInput, TemplateVersionState,
    UpdatePolicyTemplateVersionOptions, V2AttributeInput, V2PolicyResourceInput,
};
use serde_json::json;

fn template_policy(role: &str) -> TemplatePolicyInput {
    TemplatePolicyInput::new(
        PolicyType::Access,
        V2PolicyResourceInput::new(vec![
            V2AttributeInput::new("serviceName", "stringEquals", "kms").unwrap(),
        ])
        .unwrap(),
        ControlInput::new(vec![PolicyRoleInput::new(role).unwrap()]).unwrap(),
    )
    .unwrap()
}

fn template_policy_json(role: &str) -> serde_json::Value {
    json!({
        "type": "access",
        "resource": {"attributes": [{"key": "serviceName", "operator": "stringEquals", "value": "kms"}]},
        "control": {"grant": {"roles": [{"role_id": role}]}}
    })
}

fn template_json(version: &str, committed: bool) -> serde_json::Value {
    json!({
        "id": "tmpl-1",
        "name": "kms-readers",
        "account_id": "acct1",
        "version": version,
        "committed": committed,
        "policy": template_policy_json("crn:v1:bluemix:public:iam::::role:Viewer"),
        "state": "active",
        "created_at": "2024-05-01T12:00:00Z"
    })
}

#[tokio::test]
async fn create_policy_template_posts_first_version() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/v1/policy_templates")
                .header("x-ibmcloud-sdk-analytics", common::analytics("CreatePolicyTemplate"))
                .json_body(json!({
                    "name": "kms-readers",
                    "account_id": "acct1",
                    "policy": template_policy_json("crn:v1:bluemix:public:iam::::role:Viewer"),
                    "description": "read access to key protect"
                }));
            then.status(201)
                .header("ETag", "W/\"1-t1\"")
                .json_body(template_json("1", false));
        })
        .await;

    let client = common::client(&server.base_url());
    let options = CreatePolicyTemplateOptions::new(
        "kms-readers",
        "acct1",
        template_policy("crn:v1:bluemix:public:iam::::role:Viewer"),
    )
    .description("read access to key protect");
    let response = client.create_policy_template(&options).await.unwrap();

    mock.assert_async().await;
    assert_eq!(response.status, StatusCode::CREATED);
    let template = response.into_result();
    assert_eq!(template.version.as_deref(), Some("1"));
    assert_eq!(template.version_state(), TemplateVersionState::Draft);
    assert!(template.is_mutable());
}

#[tokio::test]
async fn template_version_lifecycle() {
    let server = MockServer::start_async().await;
    let create = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/v1/policy_templates/tmpl-1/versions")
                .json_body(json!({
                    "policy": template_policy_json("crn:v1:bluemix:public:iam::::role:Viewer")
                }));
            then.status(201)
                .header("ETag", "W/\"2-v2\"")
                .json_body(template_json("2", false));
        })
        .await;
    let update = server
        .mock_async(|when, then| {
            when.method(PUT)
                .path("/v1/policy_templates/tmpl-1/versions/2")
                .header("if-match", "W/\"2-v2\"")
                .header(
                    "x-ibmcloud-sdk-analytics",
                    common::analytics("UpdatePolicyTemplateVersion"),
                )
                .json_body(json!({
                    "policy": template_policy_json("crn:v1:bluemix:public:iam::::role:Editor"),
                    "description": "editors too"
                }));
            then.status(200)
                .header("ETag", "W/\"3-v2\"")
                .json_body(template_json("2", false));
        })
        .await;
    let commit = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/v1/policy_templates/tmpl-1/versions/2/commit")
                .header("if-match", "W/\"3-v2\"")
                .header(
                    "x-ibmcloud-sdk-analytics",
                    common::analytics("CommitPolicyTemplateVersion"),
                );
            then.status(204);
        })
        .await;

    let client = common::client(&server.base_url());
    let created = client
        .create_policy_template_version(&CreatePolicyTemplateVersionOptions::new(
            "tmpl-1",
            template_policy("crn:v1:bluemix:public:iam::::role:Viewer"),
        ))
        .await
        .unwrap();
    let version = created.result.version.clone().unwrap();
    let etag = created.etag().unwrap().to_owned();

    let updated = client
        .update_policy_template_version(
            &UpdatePolicyTemplateVersionOptions::new(
                "tmpl-1",
                &version,
                etag,
                template_policy("crn:v1:bluemix:public:iam::::role:Editor"),
            )
            .description("editors too"),
        )
        .await
        .unwrap();
    let etag = updated.etag().unwrap().to_owned();

    let committed = client
        .commit_policy_template_version(&CommitPolicyTemplateVersionOptions::new(
            "tmpl-1", &version, etag,
        ))
        .await
        .unwrap();

    create.assert_async().await;
    update.assert_async().await;
    commit.assert_async().await;
    assert_eq!(committed.status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn commit_without_if_match_fails_before_sending() {
    let server = MockServer::start_async().await;
    let client = common::client(&server.base_url());

    let err = client
        .commit_policy_template_version(&CommitPolicyTemplateVersionOptions::new("tmpl-1", "2", ""))
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::Validation(ref e) if e.field == "if_match"));
}

#[tokio::test]
async fn list_templates_and_versions() {
    let server = MockServer::start_async().await;
    let templates = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v1/policy_templates")
                .query_param("account_id", "acct1")
                .query_param("policy_service_name", "kms")
                .query_param("state", "active");
            then.status(200).json_body(json!({
                "limit": 50,
                "policy_templates": [template_json("3", true)]
            }));
        })
        .await;
    let versions = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v1/policy_templates/tmpl-1/versions")
                .query_param("state", "active")
                .query_param("limit", "10");
            then.status(200).json_body(json!({
                "versions": [template_json("1", true), template_json("2", true), template_json("3", false)]
            }));
        })
        .await;

    let client = common::client(&server.base_url());
    let page = client
        .list_policy_templates(
            &ListPolicyTemplatesOptions::new("acct1")
                .policy_service_name("kms")
                .state(PolicyState::Active),
        )
        .await
        .unwrap()
        .into_result();
    let listed = client
        .list_policy_template_versions(
            &ListPolicyTemplateVersionsOptions::new("tmpl-1")
                .state(PolicyState::Active)
                .limit(10),
        )
        .await
        .unwrap()
        .into_result();

    templates.assert_async().await;
    versions.assert_async().await;
    assert_eq!(
        page.policy_templates.unwrap()[0].version_state(),
        TemplateVersionState::Committed
    );
    let drafts: Vec<_> = listed
        .versions
        .unwrap()
        .into_iter()
        .filter(|v| v.is_mutable())
        .collect();
    assert_eq!(drafts.len(), 1);
    assert_eq!(drafts[0].version.as_deref(), Some("3"));
}

#[tokio::test]
async fn get_policy_template_filters_by_state() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v1/policy_templates/tmpl-1")
                .query_param("state", "deleted");
            then.status(200).json_body(json!({"id": "tmpl-1", "state": "deleted"}));
        })
        .await;

    let client = common::client(&server.base_url());
    let template = client
        .get_policy_template(&GetPolicyTemplateOptions::new("tmpl-1").state(PolicyState::Deleted))
        .await
        .unwrap()
        .into_result();

    mock.assert_async().await;
    assert_eq!(template.state, Some(PolicyState::Deleted));
}
