//! Options for `/v1/policies` operations.

use serde::Serialize;
use service_core::validation::{require, require_exactly, require_items, validate_each};
use service_core::{Validate, ValidationError};

use super::{Headers, options_builder};
use crate::models::{
    PolicyResourceInput, PolicyRoleInput, PolicyState, PolicySubjectInput, PolicyType,
};

/// List policies in an account, filtered by attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListPoliciesOptions {
    pub account_id: String,
    pub accept_language: Option<String>,
    pub iam_id: Option<String>,
    pub access_group_id: Option<String>,
    pub policy_type: Option<PolicyType>,
    pub service_type: Option<String>,
    pub tag_name: Option<String>,
    pub tag_value: Option<String>,
    /// Sort key, e.g. `-last_modified_at`.
    pub sort: Option<String>,
    /// `include_last_permit` adds last-permit data to each policy.
    pub format: Option<String>,
    pub state: Option<PolicyState>,
    pub limit: Option<u32>,
    pub start: Option<String>,
    pub headers: Headers,
}

impl ListPoliciesOptions {
    #[must_use]
    pub fn new(account_id: impl Into<String>) -> Self {
        Self {
            account_id: account_id.into(),
            ..Self::default()
        }
    }
}

options_builder!(ListPoliciesOptions {
    strings: [accept_language, iam_id, access_group_id, service_type, tag_name, tag_value, sort, format, start],
    values: [policy_type: PolicyType, state: PolicyState, limit: u32],
});

impl Validate for ListPoliciesOptions {
    fn validate(&self) -> Result<(), ValidationError> {
        require("account_id", &self.account_id)
    }
}

/// Fields shared by the create and update bodies.
fn validate_policy_body(
    subjects: &[PolicySubjectInput],
    roles: &[PolicyRoleInput],
    resources: &[PolicyResourceInput],
) -> Result<(), ValidationError> {
    require_items("subjects", subjects)?;
    validate_each("subjects", subjects)?;
    require_items("roles", roles)?;
    validate_each("roles", roles)?;
    require_exactly("resources", resources, 1)?;
    validate_each("resources", resources)
}

/// Create a policy. Serializes to the request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatePolicyOptions {
    #[serde(rename = "type")]
    pub policy_type: PolicyType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub subjects: Vec<PolicySubjectInput>,
    pub roles: Vec<PolicyRoleInput>,
    /// Exactly one resource.
    pub resources: Vec<PolicyResourceInput>,
    #[serde(skip)]
    pub accept_language: Option<String>,
    #[serde(skip)]
    pub headers: Headers,
}

impl CreatePolicyOptions {
    #[must_use]
    pub fn new(
        policy_type: PolicyType,
        subjects: Vec<PolicySubjectInput>,
        roles: Vec<PolicyRoleInput>,
        resources: Vec<PolicyResourceInput>,
    ) -> Self {
        Self {
            policy_type,
            description: None,
            subjects,
            roles,
            resources,
            accept_language: None,
            headers: Headers::new(),
        }
    }
}

options_builder!(CreatePolicyOptions {
    strings: [description, accept_language],
    values: [],
});

impl Validate for CreatePolicyOptions {
    fn validate(&self) -> Result<(), ValidationError> {
        validate_policy_body(&self.subjects, &self.roles, &self.resources)
    }
}

/// Replace a policy. Every body field must be resupplied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdatePolicyOptions {
    #[serde(skip)]
    pub policy_id: String,
    /// `ETag` from the latest read of the policy.
    #[serde(skip)]
    pub if_match: String,
    #[serde(rename = "type")]
    pub policy_type: PolicyType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub subjects: Vec<PolicySubjectInput>,
    pub roles: Vec<PolicyRoleInput>,
    pub resources: Vec<PolicyResourceInput>,
    #[serde(skip)]
    pub headers: Headers,
}

impl UpdatePolicyOptions {
    #[must_use]
    pub fn new(
        policy_id: impl Into<String>,
        if_match: impl Into<String>,
        policy_type: PolicyType,
        subjects: Vec<PolicySubjectInput>,
        roles: Vec<PolicyRoleInput>,
        resources: Vec<PolicyResourceInput>,
    ) -> Self {
        Self {
            policy_id: policy_id.into(),
            if_match: if_match.into(),
            policy_type,
            description: None,
            subjects,
            roles,
            resources,
            headers: Headers::new(),
        }
    }
}

options_builder!(UpdatePolicyOptions {
    strings: [description],
    values: [],
});

impl Validate for UpdatePolicyOptions {
    fn validate(&self) -> Result<(), ValidationError> {
        require("policy_id", &self.policy_id)?;
        require("if_match", &self.if_match)?;
        validate_policy_body(&self.subjects, &self.roles, &self.resources)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetPolicyOptions {
    pub policy_id: String,
    pub headers: Headers,
}

impl GetPolicyOptions {
    #[must_use]
    pub fn new(policy_id: impl Into<String>) -> Self {
        Self {
            policy_id: policy_id.into(),
            headers: Headers::new(),
        }
    }
}

options_builder!(GetPolicyOptions { strings: [], values: [] });

impl Validate for GetPolicyOptions {
    fn validate(&self) -> Result<(), ValidationError> {
        require("policy_id", &self.policy_id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeletePolicyOptions {
    pub policy_id: String,
    pub headers: Headers,
}

impl DeletePolicyOptions {
    #[must_use]
    pub fn new(policy_id: impl Into<String>) -> Self {
        Self {
            policy_id: policy_id.into(),
            headers: Headers::new(),
        }
    }
}

options_builder!(DeletePolicyOptions { strings: [], values: [] });

impl Validate for DeletePolicyOptions {
    fn validate(&self) -> Result<(), ValidationError> {
        require("policy_id", &self.policy_id)
    }
}

/// Restore or soft-delete a policy. Carries only `state`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdatePolicyStateOptions {
    #[serde(skip)]
    pub policy_id: String,
    #[serde(skip)]
    pub if_match: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<PolicyState>,
    #[serde(skip)]
    pub headers: Headers,
}

impl UpdatePolicyStateOptions {
    #[must_use]
    pub fn new(policy_id: impl Into<String>, if_match: impl Into<String>) -> Self {
        Self {
            policy_id: policy_id.into(),
            if_match: if_match.into(),
            ..Self::default()
        }
    }
}

options_builder!(UpdatePolicyStateOptions {
    strings: [],
    values: [state: PolicyState],
});

impl Validate for UpdatePolicyStateOptions {
    fn validate(&self) -> Result<(), ValidationError> {
        require("policy_id", &self.policy_id)?;
        require("if_match", &self.if_match)
    }
}
