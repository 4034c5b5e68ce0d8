//! Policies with rule-based conditions (`/v2/policies`).
//!
//! A v2 policy has a single subject and resource described by
//! `{key, operator, value}` attributes, a `control.grant.roles` list, and an
//! optional `rule` restricting when the grant applies (for example, weekly
//! custom hours).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use service_core::validation::{require, require_items, validate_each, validate_nested};
use service_core::{Validate, ValidationError};

use super::common::{FirstLink, NextLink, PolicyState, PolicyType, impl_paginated};
use super::policy::{PolicyRole, PolicyRoleInput};

/// A `{key, operator, value}` triple used by v2 subjects, resources and rules.
///
/// `value` is free-form JSON: a string, a list of strings or a boolean.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct V2AttributeInput {
    pub key: String,
    pub operator: String,
    pub value: Value,
}

impl V2AttributeInput {
    /// # Errors
    ///
    /// When `key` or `operator` is empty, or `value` is `null`.
    pub fn new(
        key: impl Into<String>,
        operator: impl Into<String>,
        value: impl Into<Value>,
    ) -> Result<Self, ValidationError> {
        let input = Self {
            key: key.into(),
            operator: operator.into(),
            value: value.into(),
        };
        input.validate()?;
        Ok(input)
    }
}

impl Validate for V2AttributeInput {
    fn validate(&self) -> Result<(), ValidationError> {
        require("key", &self.key)?;
        require("operator", &self.operator)?;
        if self.value.is_null() {
            return Err(ValidationError::missing("value"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct V2PolicySubjectInput {
    #[serde(with = "service_core::de::object_vec")]
    pub attributes: Vec<V2AttributeInput>,
}

impl V2PolicySubjectInput {
    /// # Errors
    ///
    /// When `attributes` is empty or an attribute is invalid.
    pub fn new(attributes: Vec<V2AttributeInput>) -> Result<Self, ValidationError> {
        let input = Self { attributes };
        input.validate()?;
        Ok(input)
    }
}

impl Validate for V2PolicySubjectInput {
    fn validate(&self) -> Result<(), ValidationError> {
        require_items("attributes", &self.attributes)?;
        validate_each("attributes", &self.attributes)
    }
}

/// Tag on a v2 resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct V2ResourceTagInput {
    pub key: String,
    pub value: String,
    pub operator: String,
}

impl V2ResourceTagInput {
    /// # Errors
    ///
    /// When any field is empty.
    pub fn new(
        key: impl Into<String>,
        value: impl Into<String>,
        operator: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let input = Self {
            key: key.into(),
            value: value.into(),
            operator: operator.into(),
        };
        input.validate()?;
        Ok(input)
    }
}

impl Validate for V2ResourceTagInput {
    fn validate(&self) -> Result<(), ValidationError> {
        require("key", &self.key)?;
        require("value", &self.value)?;
        require("operator", &self.operator)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct V2PolicyResourceInput {
    #[serde(with = "service_core::de::object_vec")]
    pub attributes: Vec<V2AttributeInput>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "service_core::de::object_list"
    )]
    pub tags: Option<Vec<V2ResourceTagInput>>,
}

impl V2PolicyResourceInput {
    /// # Errors
    ///
    /// When `attributes` is empty or an attribute is invalid.
    pub fn new(attributes: Vec<V2AttributeInput>) -> Result<Self, ValidationError> {
        let input = Self {
            attributes,
            tags: None,
        };
        input.validate()?;
        Ok(input)
    }

    /// # Errors
    ///
    /// When a tag is invalid.
    pub fn with_tags(mut self, tags: Vec<V2ResourceTagInput>) -> Result<Self, ValidationError> {
        validate_each("tags", &tags)?;
        self.tags = Some(tags);
        Ok(self)
    }
}

impl Validate for V2PolicyResourceInput {
    fn validate(&self) -> Result<(), ValidationError> {
        require_items("attributes", &self.attributes)?;
        validate_each("attributes", &self.attributes)?;
        match &self.tags {
            Some(tags) => validate_each("tags", tags),
            None => Ok(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrantInput {
    #[serde(with = "service_core::de::object_vec")]
    pub roles: Vec<PolicyRoleInput>,
}

impl Validate for GrantInput {
    fn validate(&self) -> Result<(), ValidationError> {
        require_items("roles", &self.roles)?;
        validate_each("roles", &self.roles)
    }
}

/// What a v2 policy grants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlInput {
    pub grant: GrantInput,
}

impl ControlInput {
    /// # Errors
    ///
    /// When `roles` is empty or a role is invalid.
    pub fn new(roles: Vec<PolicyRoleInput>) -> Result<Self, ValidationError> {
        let input = Self {
            grant: GrantInput { roles },
        };
        input.validate()?;
        Ok(input)
    }
}

impl Validate for ControlInput {
    fn validate(&self) -> Result<(), ValidationError> {
        validate_nested("grant", Some(&self.grant))
    }
}

/// Logical operator joining the conditions of a compound rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleOperator {
    And,
    Or,
}

/// Condition under which a v2 grant applies.
///
/// Used both in requests and responses; the two wire shapes are told apart by
/// the presence of `conditions`. Compound rules may nest, e.g. an `or` of
/// several weekly time windows each expressed as an `and`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PolicyRule {
    Compound {
        operator: RuleOperator,
        #[serde(with = "service_core::de::object_vec")]
        conditions: Vec<PolicyRule>,
    },
    Condition(V2AttributeInput),
}

impl From<V2AttributeInput> for PolicyRule {
    fn from(condition: V2AttributeInput) -> Self {
        Self::Condition(condition)
    }
}

impl PolicyRule {
    /// # Errors
    ///
    /// When `conditions` is empty or a condition is invalid.
    pub fn all(conditions: Vec<V2AttributeInput>) -> Result<Self, ValidationError> {
        Self::compound(RuleOperator::And, conditions.into_iter().map(Self::from).collect())
    }

    /// # Errors
    ///
    /// When `conditions` is empty or a condition is invalid.
    pub fn any(conditions: Vec<V2AttributeInput>) -> Result<Self, ValidationError> {
        Self::compound(RuleOperator::Or, conditions.into_iter().map(Self::from).collect())
    }

    /// Join rules, which may themselves be compound, with `operator`.
    ///
    /// # Errors
    ///
    /// When `conditions` is empty or a nested rule is invalid.
    pub fn compound(operator: RuleOperator, conditions: Vec<Self>) -> Result<Self, ValidationError> {
        let rule = Self::Compound {
            operator,
            conditions,
        };
        rule.validate()?;
        Ok(rule)
    }
}

impl Validate for PolicyRule {
    fn validate(&self) -> Result<(), ValidationError> {
        match self {
            Self::Compound { conditions, .. } => {
                require_items("conditions", conditions)?;
                validate_each("conditions", conditions)
            }
            Self::Condition(condition) => condition.validate(),
        }
    }
}

// Response models

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct V2Attribute {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct V2PolicySubject {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "service_core::de::object_list"
    )]
    pub attributes: Option<Vec<V2Attribute>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct V2ResourceTag {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct V2PolicyResource {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "service_core::de::object_list"
    )]
    pub attributes: Option<Vec<V2Attribute>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "service_core::de::object_list"
    )]
    pub tags: Option<Vec<V2ResourceTag>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grant {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "service_core::de::object_list"
    )]
    pub roles: Option<Vec<PolicyRole>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Control {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grant: Option<Grant>,
}

/// A stored v2 policy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct V2Policy {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub policy_type: Option<PolicyType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<V2PolicySubject>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<V2PolicyResource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule: Option<PolicyRule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control: Option<Control>,
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

impl V2Policy {
    /// Role CRNs granted by this policy.
    #[must_use]
    pub fn role_ids(&self) -> Vec<&str> {
        self.control
            .as_ref()
            .and_then(|control| control.grant.as_ref())
            .and_then(|grant| grant.roles.as_ref())
            .map(|roles| roles.iter().filter_map(|r| r.role_id.as_deref()).collect())
            .unwrap_or_default()
    }
}

/// A page of v2 policies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct V2PolicyCollection {
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
    pub policies: Option<Vec<V2Policy>>,
}

impl_paginated!(V2PolicyCollection);
