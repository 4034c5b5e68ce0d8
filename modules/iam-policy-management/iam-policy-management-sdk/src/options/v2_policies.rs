//! Options for `/v2/policies` operations.

use serde::Serialize;
use service_core::validation::{require, validate_nested};
use service_core::{Validate, ValidationError};

use super::{Headers, options_builder};
use crate::models::{
    ControlInput, PolicyRule, PolicyState, PolicyType, V2PolicyResourceInput,
    V2PolicySubjectInput,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListV2PoliciesOptions {
    pub account_id: String,
    pub accept_language: Option<String>,
    pub iam_id: Option<String>,
    pub access_group_id: Option<String>,
    pub policy_type: Option<PolicyType>,
    pub service_type: Option<String>,
    pub service_name: Option<String>,
    pub service_group_id: Option<String>,
    pub sort: Option<String>,
    /// `include_last_permit` or `display`.
    pub format: Option<String>,
    pub state: Option<PolicyState>,
    pub limit: Option<u32>,
    pub start: Option<String>,
    pub headers: Headers,
}

impl ListV2PoliciesOptions {
    #[must_use]
    pub fn new(account_id: impl Into<String>) -> Self {
        Self {
            account_id: account_id.into(),
            ..Self::default()
        }
    }
}

options_builder!(ListV2PoliciesOptions {
    strings: [accept_language, iam_id, access_group_id, service_type, service_name, service_group_id, sort, format, start],
    values: [policy_type: PolicyType, state: PolicyState, limit: u32],
});

impl Validate for ListV2PoliciesOptions {
    fn validate(&self) -> Result<(), ValidationError> {
        require("account_id", &self.account_id)
    }
}

fn validate_v2_body(
    control: &ControlInput,
    subject: Option<&V2PolicySubjectInput>,
    resource: Option<&V2PolicyResourceInput>,
    rule: Option<&PolicyRule>,
) -> Result<(), ValidationError> {
    validate_nested("control", Some(control))?;
    validate_nested("subject", subject)?;
    validate_nested("resource", resource)?;
    validate_nested("rule", rule)
}

/// Create a v2 policy. Serializes to the request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateV2PolicyOptions {
    pub control: ControlInput,
    #[serde(rename = "type")]
    pub policy_type: PolicyType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<V2PolicySubjectInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<V2PolicyResourceInput>,
    /// Names the rule template, e.g. `time-based-conditions:weekly:custom-hours`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<PolicyRule>,
    #[serde(skip)]
    pub accept_language: Option<String>,
    #[serde(skip)]
    pub headers: Headers,
}

impl CreateV2PolicyOptions {
    #[must_use]
    pub fn new(policy_type: PolicyType, control: ControlInput) -> Self {
        Self {
            control,
            policy_type,
            description: None,
            subject: None,
            resource: None,
            pattern: None,
            rule: None,
            accept_language: None,
            headers: Headers::new(),
        }
    }
}

options_builder!(CreateV2PolicyOptions {
    strings: [description, pattern, accept_language],
    values: [subject: V2PolicySubjectInput, resource: V2PolicyResourceInput, rule: PolicyRule],
});

impl Validate for CreateV2PolicyOptions {
    fn validate(&self) -> Result<(), ValidationError> {
        validate_v2_body(
            &self.control,
            self.subject.as_ref(),
            self.resource.as_ref(),
            self.rule.as_ref(),
        )
    }
}

/// Replace a v2 policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateV2PolicyOptions {
    #[serde(skip)]
    pub id: String,
    #[serde(skip)]
    pub if_match: String,
    pub control: ControlInput,
    #[serde(rename = "type")]
    pub policy_type: PolicyType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<V2PolicySubjectInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<V2PolicyResourceInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<PolicyRule>,
    #[serde(skip)]
    pub headers: Headers,
}

impl UpdateV2PolicyOptions {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        if_match: impl Into<String>,
        policy_type: PolicyType,
        control: ControlInput,
    ) -> Self {
        Self {
            id: id.into(),
            if_match: if_match.into(),
            control,
            policy_type,
            description: None,
            subject: None,
            resource: None,
            pattern: None,
            rule: None,
            headers: Headers::new(),
        }
    }
}

options_builder!(UpdateV2PolicyOptions {
    strings: [description, pattern],
    values: [subject: V2PolicySubjectInput, resource: V2PolicyResourceInput, rule: PolicyRule],
});

impl Validate for UpdateV2PolicyOptions {
    fn validate(&self) -> Result<(), ValidationError> {
        require("id", &self.id)?;
        require("if_match", &self.if_match)?;
        validate_v2_body(
            &self.control,
            self.subject.as_ref(),
            self.resource.as_ref(),
            self.rule.as_ref(),
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetV2PolicyOptions {
    pub id: String,
    pub format: Option<String>,
    pub headers: Headers,
}

impl GetV2PolicyOptions {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}

options_builder!(GetV2PolicyOptions {
    strings: [format],
    values: [],
});

impl Validate for GetV2PolicyOptions {
    fn validate(&self) -> Result<(), ValidationError> {
        require("id", &self.id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteV2PolicyOptions {
    pub id: String,
    pub headers: Headers,
}

impl DeleteV2PolicyOptions {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            headers: Headers::new(),
        }
    }
}

options_builder!(DeleteV2PolicyOptions { strings: [], values: [] });

impl Validate for DeleteV2PolicyOptions {
    fn validate(&self) -> Result<(), ValidationError> {
        require("id", &self.id)
    }
}
