//! Policy templates (`/v1/policy_templates`).
//!
//! A template is a named, versioned policy definition. Each version starts as
//! a draft and becomes immutable once committed; only committed versions can
//! be assigned. The server enforces these rules, the client only reports the
//! state it was given.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use service_core::validation::{require, validate_nested};
use service_core::{Validate, ValidationError};

use super::common::{FirstLink, NextLink, PolicyState, PolicyType, impl_paginated};
use super::v2_policy::{Control, ControlInput, PolicyRule, V2PolicyResource, V2PolicyResourceInput};

/// The policy carried by a template version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplatePolicyInput {
    #[serde(rename = "type")]
    pub policy_type: PolicyType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub resource: V2PolicyResourceInput,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule: Option<PolicyRule>,
    pub control: ControlInput,
}

impl TemplatePolicyInput {
    /// # Errors
    ///
    /// When `resource` or `control` is invalid.
    pub fn new(
        policy_type: PolicyType,
        resource: V2PolicyResourceInput,
        control: ControlInput,
    ) -> Result<Self, ValidationError> {
        let input = Self {
            policy_type,
            description: None,
            resource,
            pattern: None,
            rule: None,
            control,
        };
        input.validate()?;
        Ok(input)
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Restrict the grant with a rule and its pattern name.
    ///
    /// # Errors
    ///
    /// When `pattern` is empty or `rule` is invalid.
    pub fn with_rule(mut self, pattern: impl Into<String>, rule: PolicyRule) -> Result<Self, ValidationError> {
        let pattern = pattern.into();
        require("pattern", &pattern)?;
        rule.validate().map_err(|e| e.within("rule"))?;
        self.pattern = Some(pattern);
        self.rule = Some(rule);
        Ok(self)
    }
}

impl Validate for TemplatePolicyInput {
    fn validate(&self) -> Result<(), ValidationError> {
        validate_nested("resource", Some(&self.resource))?;
        validate_nested("rule", self.rule.as_ref())?;
        validate_nested("control", Some(&self.control))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplatePolicy {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub policy_type: Option<PolicyType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<V2PolicyResource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule: Option<PolicyRule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control: Option<Control>,
}

/// Commit state of one template version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateVersionState {
    /// Editable and deletable.
    Draft,
    /// Immutable; may be referenced by assignments.
    Committed,
}

/// One version of a policy template.
///
/// `GET /v1/policy_templates/{id}` returns the latest version in this shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyTemplate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    /// Version number, as a decimal string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub committed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy: Option<TemplatePolicy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<PolicyState>,
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
}

impl PolicyTemplate {
    /// A version without a `committed: true` flag is a draft.
    #[must_use]
    pub fn version_state(&self) -> TemplateVersionState {
        if self.committed == Some(true) {
            TemplateVersionState::Committed
        } else {
            TemplateVersionState::Draft
        }
    }

    #[must_use]
    pub fn is_mutable(&self) -> bool {
        self.version_state() == TemplateVersionState::Draft
    }
}

/// A page of templates, each shown at its latest version.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyTemplateCollection {
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
    pub policy_templates: Option<Vec<PolicyTemplate>>,
}

/// A page of versions of one template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyTemplateVersionsCollection {
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
    pub versions: Option<Vec<PolicyTemplate>>,
}

impl_paginated!(PolicyTemplateCollection, PolicyTemplateVersionsCollection);

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::models::policy::PolicyRoleInput;
    use crate::models::v2_policy::V2AttributeInput;

    fn template_policy() -> TemplatePolicyInput {
        TemplatePolicyInput::new(
            PolicyType::Access,
            V2PolicyResourceInput::new(vec![
                V2AttributeInput::new("serviceName", "stringEquals", "kms").unwrap(),
            ])
            .unwrap(),
            ControlInput::new(vec![
                PolicyRoleInput::new("crn:v1:bluemix:public:iam::::role:Viewer").unwrap(),
            ])
            .unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn template_policy_serializes_wire_shape() {
        let value = serde_json::to_value(template_policy().description("kms viewer")).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "access",
                "description": "kms viewer",
                "resource": {"attributes": [{"key": "serviceName", "operator": "stringEquals", "value": "kms"}]},
                "control": {"grant": {"roles": [{"role_id": "crn:v1:bluemix:public:iam::::role:Viewer"}]}}
            })
        );
    }

    #[test]
    fn with_rule_requires_pattern() {
        let rule = PolicyRule::Condition(
            V2AttributeInput::new(
                "{{environment.attributes.current_date_time}}",
                "dateTimeLessThan",
                "2030-01-01T00:00:00+00:00",
            )
            .unwrap(),
        );
        assert_eq!(
            template_policy().with_rule("", rule.clone()).unwrap_err().field,
            "pattern"
        );
        let policy = template_policy()
            .with_rule("time-based-conditions:once", rule)
            .unwrap();
        assert!(policy.rule.is_some());
    }

    #[test]
    fn version_state_follows_committed_flag() {
        let draft: PolicyTemplate = serde_json::from_value(json!({"id": "tmpl-1", "version": "1"})).unwrap();
        assert_eq!(draft.version_state(), TemplateVersionState::Draft);
        assert!(draft.is_mutable());

        let committed = PolicyTemplate {
            committed: Some(true),
            ..draft
        };
        assert_eq!(committed.version_state(), TemplateVersionState::Committed);
        assert!(!committed.is_mutable());
    }

    #[test]
    fn versions_collection_decodes() {
        let page: PolicyTemplateVersionsCollection = service_core::de::decode_object(
            br#"{"limit": 50, "versions": [{"id": "tmpl-1", "version": "1", "committed": true}, {"id": "tmpl-1", "version": "2"}]}"#,
        )
        .unwrap();
        let versions = page.versions.unwrap();
        assert_eq!(versions.len(), 2);
        assert!(!versions[0].is_mutable());
        assert!(versions[1].is_mutable());
    }
}
