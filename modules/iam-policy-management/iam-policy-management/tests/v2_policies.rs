#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use httpmock::prelude::*;
use iam_policy_management_sdk::{
    ControlInput, CreateV2PolicyOptions, DeleteV2PolicyOptions, GetV2PolicyOptions,
    ListV2PoliciesOptions, PolicyRoleInput, PolicyRule, PolicyType, RuleOperator,
    UpdateV2PolicyOptions, V2AttributeInput, V2PolicyResourceInput, V2PolicySubjectInput,
};
use serde_json::json;

fn control() -> ControlInput {
    ControlInput::new(vec![
        PolicyRoleInput::new("crn:v1:bluemix:public:iam::::role:Viewer").unwrap(),
    ])
    .unwrap()
}

fn v2_policy_json() -> serde_json::Value {
    json!({
        "id": "pol-v2",
        "type": "access",
        "subject": {"attributes": [{"key": "iam_id", "operator": "stringEquals", "value": "IBMid-1"}]},
        "resource": {"attributes": [{"key": "accountId", "operator": "stringEquals", "value": "acct1"}]},
        "pattern": "time-based-conditions:weekly:custom-hours",
        "rule": {
            "operator": "and",
            "conditions": [
                {"key": "{{environment.attributes.day_of_week}}", "operator": "dayOfWeekAnyOf", "value": ["1+00:00", "5+00:00"]},
                {"key": "{{environment.attributes.current_time}}", "operator": "timeLessThanOrEquals", "value": "17:00:00+00:00"}
            ]
        },
        "control": {"grant": {"roles": [{"role_id": "crn:v1:bluemix:public:iam::::role:Viewer"}]}},
        "state": "active"
    })
}

#[tokio::test]
async fn create_v2_policy_sends_rule() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/v2/policies")
                .header("x-ibmcloud-sdk-analytics", common::analytics("CreateV2Policy"))
                .json_body(json!({
                    "control": {"grant": {"roles": [{"role_id": "crn:v1:bluemix:public:iam::::role:Viewer"}]}},
                    "type": "access",
                    "subject": {"attributes": [{"key": "iam_id", "operator": "stringEquals", "value": "IBMid-1"}]},
                    "resource": {"attributes": [{"key": "accountId", "operator": "stringEquals", "value": "acct1"}]},
                    "pattern": "time-based-conditions:weekly:custom-hours",
                    "rule": {
                        "operator": "and",
                        "conditions": [
                            {"key": "{{environment.attributes.day_of_week}}", "operator": "dayOfWeekAnyOf", "value": ["1+00:00", "5+00:00"]},
                            {"key": "{{environment.attributes.current_time}}", "operator": "timeLessThanOrEquals", "value": "17:00:00+00:00"}
                        ]
                    }
                }));
            then.status(201).json_body(v2_policy_json());
        })
        .await;

    let rule = PolicyRule::all(vec![
        V2AttributeInput::new(
            "{{environment.attributes.day_of_week}}",
            "dayOfWeekAnyOf",
            json!(["1+00:00", "5+00:00"]),
        )
        .unwrap(),
        V2AttributeInput::new(
            "{{environment.attributes.current_time}}",
            "timeLessThanOrEquals",
            "17:00:00+00:00",
        )
        .unwrap(),
    ])
    .unwrap();
    let options = CreateV2PolicyOptions::new(PolicyType::Access, control())
        .subject(
            V2PolicySubjectInput::new(vec![
                V2AttributeInput::new("iam_id", "stringEquals", "IBMid-1").unwrap(),
            ])
            .unwrap(),
        )
        .resource(
            V2PolicyResourceInput::new(vec![
                V2AttributeInput::new("accountId", "stringEquals", "acct1").unwrap(),
            ])
            .unwrap(),
        )
        .pattern("time-based-conditions:weekly:custom-hours")
        .rule(rule);

    let client = common::client(&server.base_url());
    let policy = client.create_v2_policy(&options).await.unwrap().into_result();

    mock.assert_async().await;
    assert_eq!(policy.id.as_deref(), Some("pol-v2"));
    assert_eq!(policy.role_ids(), vec!["crn:v1:bluemix:public:iam::::role:Viewer"]);
    match policy.rule.unwrap() {
        PolicyRule::Compound {
            operator,
            conditions,
        } => {
            assert_eq!(operator, RuleOperator::And);
            assert_eq!(conditions.len(), 2);
        }
        PolicyRule::Condition(condition) => panic!("expected compound rule, got {condition:?}"),
    }
}

#[tokio::test]
async fn get_v2_policy_passes_format() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v2/policies/pol-v2")
                .query_param("format", "include_last_permit");
            then.status(200)
                .header("ETag", "W/\"3-c3\"")
                .json_body(v2_policy_json());
        })
        .await;

    let client = common::client(&server.base_url());
    let response = client
        .get_v2_policy(&GetV2PolicyOptions::new("pol-v2").format("include_last_permit"))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(response.etag(), Some("W/\"3-c3\""));
}

#[tokio::test]
async fn update_v2_policy_sends_if_match() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(PUT)
                .path("/v2/policies/pol-v2")
                .header("if-match", "W/\"3-c3\"")
                .json_body(json!({
                    "control": {"grant": {"roles": [{"role_id": "crn:v1:bluemix:public:iam::::role:Viewer"}]}},
                    "type": "access",
                    "description": "no conditions"
                }));
            then.status(200).json_body(json!({"id": "pol-v2", "type": "access"}));
        })
        .await;

    let client = common::client(&server.base_url());
    let options = UpdateV2PolicyOptions::new("pol-v2", "W/\"3-c3\"", PolicyType::Access, control())
        .description("no conditions");
    let policy = client.update_v2_policy(&options).await.unwrap().into_result();

    mock.assert_async().await;
    assert!(policy.rule.is_none());
}

#[tokio::test]
async fn list_and_delete_v2_policies() {
    let server = MockServer::start_async().await;
    let list = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v2/policies")
                .query_param("account_id", "acct1")
                .query_param("service_name", "kms")
                .query_param("sort", "-last_modified_at");
            then.status(200)
                .json_body(json!({"policies": [v2_policy_json()]}));
        })
        .await;
    let delete = server
        .mock_async(|when, then| {
            when.method(DELETE).path("/v2/policies/pol-v2");
            then.status(204);
        })
        .await;

    let client = common::client(&server.base_url());
    let page = client
        .list_v2_policies(
            &ListV2PoliciesOptions::new("acct1")
                .service_name("kms")
                .sort("-last_modified_at"),
        )
        .await
        .unwrap()
        .into_result();
    let id = page.policies.unwrap()[0].id.clone().unwrap();
    client
        .delete_v2_policy(&DeleteV2PolicyOptions::new(id))
        .await
        .unwrap();

    list.assert_async().await;
    delete.assert_async().await;
}
