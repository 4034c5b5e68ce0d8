#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use httpmock::prelude::*;
use iam_policy_management_sdk::{
    CreateRoleOptions, GetRoleOptions, ListRolesOptions, ServiceError, UpdateRoleOptions,
};
use serde_json::json;

#[tokio::test]
async fn list_roles_keeps_empty_custom_roles() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v2/roles")
                .query_param("account_id", "acct1")
                .query_param("service_name", "iam-identity")
                .header("x-ibmcloud-sdk-analytics", common::analytics("ListRoles"));
            then.status(200).json_body(json!({
                "custom_roles": [],
                "service_roles": [{
                    "display_name": "Operator",
                    "crn": "crn:v1:bluemix:public:iam-identity::::serviceRole:Operator",
                    "actions": ["iam-identity.apikey.list"]
                }],
                "system_roles": [{
                    "display_name": "Viewer",
                    "crn": "crn:v1:bluemix:public:iam::::role:Viewer"
                }]
            }));
        })
        .await;

    let client = common::client(&server.base_url());
    let options = ListRolesOptions::new()
        .account_id("acct1")
        .service_name("iam-identity");
    let roles = client.list_roles(&options).await.unwrap().into_result();

    mock.assert_async().await;
    assert_eq!(roles.custom_roles, Some(Vec::new()));
    assert_eq!(roles.system_roles.as_ref().map(Vec::len), Some(1));
    assert_eq!(
        roles.crns(),
        vec![
            "crn:v1:bluemix:public:iam-identity::::serviceRole:Operator",
            "crn:v1:bluemix:public:iam::::role:Viewer",
        ]
    );
}

#[tokio::test]
async fn list_roles_without_filters() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/v2/roles");
            then.status(200).json_body(json!({"system_roles": []}));
        })
        .await;

    let client = common::client(&server.base_url());
    let roles = client
        .list_roles(&ListRolesOptions::default())
        .await
        .unwrap()
        .into_result();

    mock.assert_async().await;
    assert!(roles.custom_roles.is_none());
}

#[tokio::test]
async fn create_role_posts_body() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/v2/roles")
                .header("accept-language", "en")
                .json_body(json!({
                    "display_name": "Key lister",
                    "actions": ["iam-identity.apikey.list"],
                    "name": "KeyLister",
                    "account_id": "acct1",
                    "service_name": "iam-identity"
                }));
            then.status(201)
                .header("ETag", "W/\"1-r1\"")
                .json_body(json!({
                    "id": "role-1",
                    "name": "KeyLister",
                    "display_name": "Key lister",
                    "account_id": "acct1",
                    "service_name": "iam-identity",
                    "actions": ["iam-identity.apikey.list"],
                    "crn": "crn:v1:bluemix:public:iam-identity::a/acct1::customRole:KeyLister",
                    "created_at": "2024-04-01T00:00:00Z"
                }));
        })
        .await;

    let client = common::client(&server.base_url());
    let options = CreateRoleOptions::new(
        "Key lister",
        vec!["iam-identity.apikey.list".to_owned()],
        "KeyLister",
        "acct1",
        "iam-identity",
    )
    .accept_language("en");
    let response = client.create_role(&options).await.unwrap();

    mock.assert_async().await;
    assert_eq!(response.etag(), Some("W/\"1-r1\""));
    assert_eq!(response.result.id.as_deref(), Some("role-1"));
}

#[tokio::test]
async fn update_role_sends_only_set_fields() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(PUT)
                .path("/v2/roles/role-1")
                .header("if-match", "W/\"1-r1\"")
                .header("x-ibmcloud-sdk-analytics", common::analytics("UpdateRole"))
                .json_body(json!({"description": "lists and creates keys"}));
            then.status(200).json_body(json!({
                "id": "role-1",
                "display_name": "Key lister",
                "description": "lists and creates keys"
            }));
        })
        .await;

    let client = common::client(&server.base_url());
    let options =
        UpdateRoleOptions::new("role-1", "W/\"1-r1\"").description("lists and creates keys");
    let role = client.update_role(&options).await.unwrap().into_result();

    mock.assert_async().await;
    assert_eq!(role.display_name.as_deref(), Some("Key lister"));
    assert_eq!(role.description.as_deref(), Some("lists and creates keys"));
}

#[tokio::test]
async fn update_role_replaces_actions() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(PUT)
                .path("/v2/roles/role-1")
                .header("if-match", "W/\"2-r2\"")
                .json_body(json!({
                    "display_name": "Key manager",
                    "actions": ["iam-identity.apikey.list", "iam-identity.apikey.create"]
                }));
            then.status(200).json_body(json!({"id": "role-1", "display_name": "Key manager"}));
        })
        .await;

    let client = common::client(&server.base_url());
    let options = UpdateRoleOptions::new("role-1", "W/\"2-r2\"")
        .display_name("Key manager")
        .actions(vec![
            "iam-identity.apikey.list".to_owned(),
            "iam-identity.apikey.create".to_owned(),
        ]);
    let role = client.update_role(&options).await.unwrap().into_result();

    mock.assert_async().await;
    assert_eq!(role.display_name.as_deref(), Some("Key manager"));
}

#[tokio::test]
async fn get_role_not_found_is_a_server_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v2/roles/missing");
            then.status(404).json_body(json!({
                "trace": "t-404",
                "errors": [{"code": "role_not_found", "message": "Role with id missing not found"}],
                "status_code": 404
            }));
        })
        .await;

    let client = common::client(&server.base_url());
    let err = client
        .get_role(&GetRoleOptions::new("missing"))
        .await
        .unwrap_err();

    match err {
        ServiceError::Server { status, message, .. } => {
            assert_eq!(status.as_u16(), 404);
            assert_eq!(message, "Role with id missing not found");
        }
        other => panic!("expected server error, got {other:?}"),
    }
}
