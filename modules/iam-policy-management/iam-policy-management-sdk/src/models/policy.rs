//! Access and authorization policies (`/v1/policies`).
//!
//! Request inputs carry plain required fields and validate themselves in their
//! factory functions. Response models mirror the wire: every field is optional
//! and absent keys stay `None`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use service_core::validation::{require, require_items, validate_each};
use service_core::{Validate, ValidationError};

use super::common::{FirstLink, NextLink, PolicyState, PolicyType, impl_paginated};

// ---------------------------------------------------------------------------
// Request inputs
// ---------------------------------------------------------------------------

/// A `name`/`value` pair identifying the policy subject, e.g. `iam_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectAttributeInput {
    pub name: String,
    pub value: String,
}

impl SubjectAttributeInput {
    /// # Errors
    ///
    /// When `name` or `value` is empty.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Result<Self, ValidationError> {
        let input = Self {
            name: name.into(),
            value: value.into(),
        };
        input.validate()?;
        Ok(input)
    }
}

impl Validate for SubjectAttributeInput {
    fn validate(&self) -> Result<(), ValidationError> {
        require("name", &self.name)?;
        require("value", &self.value)
    }
}

/// The principal a policy applies to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicySubjectInput {
    #[serde(with = "service_core::de::object_vec")]
    pub attributes: Vec<SubjectAttributeInput>,
}

impl PolicySubjectInput {
    /// # Errors
    ///
    /// When `attributes` is empty or an attribute is invalid.
    pub fn new(attributes: Vec<SubjectAttributeInput>) -> Result<Self, ValidationError> {
        let input = Self { attributes };
        input.validate()?;
        Ok(input)
    }
}

impl Validate for PolicySubjectInput {
    fn validate(&self) -> Result<(), ValidationError> {
        require_items("attributes", &self.attributes)?;
        validate_each("attributes", &self.attributes)
    }
}

/// A resource attribute such as `accountId` or `serviceName`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceAttributeInput {
    pub name: String,
    pub value: String,
    /// Comparison operator, e.g. `stringEquals`. The server defaults it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator: Option<String>,
}

impl ResourceAttributeInput {
    /// # Errors
    ///
    /// When `name` or `value` is empty.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Result<Self, ValidationError> {
        let input = Self {
            name: name.into(),
            value: value.into(),
            operator: None,
        };
        input.validate()?;
        Ok(input)
    }

    #[must_use]
    pub fn operator(mut self, operator: impl Into<String>) -> Self {
        self.operator = Some(operator.into());
        self
    }
}

impl Validate for ResourceAttributeInput {
    fn validate(&self) -> Result<(), ValidationError> {
        require("name", &self.name)?;
        require("value", &self.value)
    }
}

/// An access-management tag narrowing the resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceTagInput {
    pub name: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator: Option<String>,
}

impl ResourceTagInput {
    /// # Errors
    ///
    /// When `name` or `value` is empty.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Result<Self, ValidationError> {
        let input = Self {
            name: name.into(),
            value: value.into(),
            operator: None,
        };
        input.validate()?;
        Ok(input)
    }

    #[must_use]
    pub fn operator(mut self, operator: impl Into<String>) -> Self {
        self.operator = Some(operator.into());
        self
    }
}

impl Validate for ResourceTagInput {
    fn validate(&self) -> Result<(), ValidationError> {
        require("name", &self.name)?;
        require("value", &self.value)
    }
}

/// The resource a policy grants access to.
///
/// Which attributes identify a resource (`serviceName`, `serviceType` or
/// `resourceGroupId` plus `accountId`) is checked by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyResourceInput {
    #[serde(with = "service_core::de::object_vec")]
    pub attributes: Vec<ResourceAttributeInput>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "service_core::de::object_list"
    )]
    pub tags: Option<Vec<ResourceTagInput>>,
}

impl PolicyResourceInput {
    /// # Errors
    ///
    /// When `attributes` is empty or an attribute is invalid.
    pub fn new(attributes: Vec<ResourceAttributeInput>) -> Result<Self, ValidationError> {
        let input = Self {
            attributes,
            tags: None,
        };
        input.validate()?;
        Ok(input)
    }

    /// Attach tags. Each tag is validated.
    ///
    /// # Errors
    ///
    /// When a tag is invalid.
    pub fn with_tags(mut self, tags: Vec<ResourceTagInput>) -> Result<Self, ValidationError> {
        validate_each("tags", &tags)?;
        self.tags = Some(tags);
        Ok(self)
    }
}

impl Validate for PolicyResourceInput {
    fn validate(&self) -> Result<(), ValidationError> {
        require_items("attributes", &self.attributes)?;
        validate_each("attributes", &self.attributes)?;
        match &self.tags {
            Some(tags) => validate_each("tags", tags),
            None => Ok(()),
        }
    }
}

/// A role granted by a policy, referenced by CRN.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyRoleInput {
    pub role_id: String,
}

impl PolicyRoleInput {
    /// # Errors
    ///
    /// When `role_id` is empty.
    pub fn new(role_id: impl Into<String>) -> Result<Self, ValidationError> {
        let input = Self {
            role_id: role_id.into(),
        };
        input.validate()?;
        Ok(input)
    }
}

impl Validate for PolicyRoleInput {
    fn validate(&self) -> Result<(), ValidationError> {
        require("role_id", &self.role_id)
    }
}

// ---------------------------------------------------------------------------
// Response models
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectAttribute {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicySubject {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "service_core::de::object_list"
    )]
    pub attributes: Option<Vec<SubjectAttribute>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceAttribute {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceTag {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyResource {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "service_core::de::object_list"
    )]
    pub attributes: Option<Vec<ResourceAttribute>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "service_core::de::object_list"
    )]
    pub tags: Option<Vec<ResourceTag>>,
}

/// A role as echoed back on a policy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyRole {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A stored policy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Policy {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub policy_type: Option<PolicyType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "service_core::de::object_list"
    )]
    pub subjects: Option<Vec<PolicySubject>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "service_core::de::object_list"
    )]
    pub roles: Option<Vec<PolicyRole>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "service_core::de::object_list"
    )]
    pub resources: Option<Vec<PolicyResource>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
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
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<PolicyState>,
}

/// A page of policies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyCollection {
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
    pub policies: Option<Vec<Policy>>,
}

impl_paginated!(PolicyCollection);
