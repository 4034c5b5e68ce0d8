//! Policy assignments (`/v1/policy_assignments`).

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use service_core::validation::require;
use service_core::{Validate, ValidationError};

use super::common::{ErrorResponse, FirstLink, NextLink, impl_paginated};

/// What an assignment targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssignmentTargetType {
    Account,
    Enterprise,
    AccountGroup,
}

impl fmt::Display for AssignmentTargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Account => "Account",
            Self::Enterprise => "Enterprise",
            Self::AccountGroup => "AccountGroup",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentTargetInput {
    #[serde(rename = "type")]
    pub target_type: AssignmentTargetType,
    pub id: String,
}

impl AssignmentTargetInput {
    /// # Errors
    ///
    /// When `id` is empty.
    pub fn new(target_type: AssignmentTargetType, id: impl Into<String>) -> Result<Self, ValidationError> {
        let input = Self {
            target_type,
            id: id.into(),
        };
        input.validate()?;
        Ok(input)
    }
}

impl Validate for AssignmentTargetInput {
    fn validate(&self) -> Result<(), ValidationError> {
        require("id", &self.id)
    }
}

/// A committed template version to assign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentTemplateInput {
    pub id: String,
    pub version: String,
}

impl AssignmentTemplateInput {
    /// # Errors
    ///
    /// When `id` or `version` is empty.
    pub fn new(id: impl Into<String>, version: impl Into<String>) -> Result<Self, ValidationError> {
        let input = Self {
            id: id.into(),
            version: version.into(),
        };
        input.validate()?;
        Ok(input)
    }
}

impl Validate for AssignmentTemplateInput {
    fn validate(&self) -> Result<(), ValidationError> {
        require("id", &self.id)?;
        require("version", &self.version)
    }
}

/// Progress of an assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentStatus {
    InProgress,
    Succeeded,
    SucceededWithErrors,
    Failed,
}

impl AssignmentStatus {
    /// `true` once the server has stopped working on the assignment.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentTemplateDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentTargetDetails {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub target_type: Option<AssignmentTargetType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceCreated {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// Outcome of creating the policy for one target.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentPolicyOutcome {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_created: Option<ResourceCreated>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<ErrorResponse>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyAssignmentResource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy: Option<AssignmentPolicyOutcome>,
}

/// The record of applying a committed template version to a target.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyAssignment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<AssignmentTemplateDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<AssignmentTargetDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<AssignmentStatus>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "service_core::de::object_list"
    )]
    pub resources: Option<Vec<PolicyAssignmentResource>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "service_core::de::datetime"
    )]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by_id: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "service_core::de::datetime"
    )]
    pub last_modified_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified_by_id: Option<String>,
}

impl PolicyAssignment {
    /// IDs of the policies this assignment created.
    #[must_use]
    pub fn created_policy_ids(&self) -> Vec<&str> {
        self.resources
            .iter()
            .flatten()
            .filter_map(|resource| resource.policy.as_ref())
            .filter_map(|policy| policy.resource_created.as_ref())
            .filter_map(|created| created.id.as_deref())
            .collect()
    }

    /// Error envelopes reported for individual targets.
    #[must_use]
    pub fn errors(&self) -> Vec<&ErrorResponse> {
        self.resources
            .iter()
            .flatten()
            .filter_map(|resource| resource.policy.as_ref())
            .filter_map(|policy| policy.error_message.as_ref())
            .collect()
    }
}

/// A page of assignments; also the result of a create call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyAssignmentCollection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first: Option<FirstLink>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<NextLink>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "service_core::de::object_list"
    )]
    pub policy_assignments: Option<Vec<PolicyAssignment>>,
}

impl_paginated!(PolicyAssignmentCollection);
