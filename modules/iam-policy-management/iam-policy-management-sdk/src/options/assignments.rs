//! Options for `/v1/policy_assignments` operations.

use serde::Serialize;
use service_core::validation::{require, require_items, validate_each, validate_nested};
use service_core::{Validate, ValidationError};

use super::{Headers, options_builder};
use crate::models::{AssignmentTargetInput, AssignmentTemplateInput};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListPolicyAssignmentsOptions {
    pub account_id: String,
    pub accept_language: Option<String>,
    pub template_id: Option<String>,
    pub template_version: Option<String>,
    pub limit: Option<u32>,
    pub start: Option<String>,
    pub headers: Headers,
}

impl ListPolicyAssignmentsOptions {
    #[must_use]
    pub fn new(account_id: impl Into<String>) -> Self {
        Self {
            account_id: account_id.into(),
            ..Self::default()
        }
    }
}

options_builder!(ListPolicyAssignmentsOptions {
    strings: [accept_language, template_id, template_version, start],
    values: [limit: u32],
});

impl Validate for ListPolicyAssignmentsOptions {
    fn validate(&self) -> Result<(), ValidationError> {
        require("account_id", &self.account_id)
    }
}

/// Apply committed template versions to a target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatePolicyAssignmentOptions {
    pub target: AssignmentTargetInput,
    pub templates: Vec<AssignmentTemplateInput>,
    #[serde(skip)]
    pub accept_language: Option<String>,
    #[serde(skip)]
    pub headers: Headers,
}

impl CreatePolicyAssignmentOptions {
    #[must_use]
    pub fn new(target: AssignmentTargetInput, templates: Vec<AssignmentTemplateInput>) -> Self {
        Self {
            target,
            templates,
            accept_language: None,
            headers: Headers::new(),
        }
    }
}

options_builder!(CreatePolicyAssignmentOptions {
    strings: [accept_language],
    values: [],
});

impl Validate for CreatePolicyAssignmentOptions {
    fn validate(&self) -> Result<(), ValidationError> {
        validate_nested("target", Some(&self.target))?;
        require_items("templates", &self.templates)?;
        validate_each("templates", &self.templates)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetPolicyAssignmentOptions {
    pub assignment_id: String,
    pub headers: Headers,
}

impl GetPolicyAssignmentOptions {
    #[must_use]
    pub fn new(assignment_id: impl Into<String>) -> Self {
        Self {
            assignment_id: assignment_id.into(),
            headers: Headers::new(),
        }
    }
}

options_builder!(GetPolicyAssignmentOptions { strings: [], values: [] });

impl Validate for GetPolicyAssignmentOptions {
    fn validate(&self) -> Result<(), ValidationError> {
        require("assignment_id", &self.assignment_id)
    }
}

/// Move an assignment to another committed version of its template.
///
/// Serializes to `{"template_version": ...}` only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdatePolicyAssignmentOptions {
    #[serde(skip)]
    pub assignment_id: String,
    #[serde(skip)]
    pub if_match: String,
    pub template_version: String,
    #[serde(skip)]
    pub headers: Headers,
}

impl UpdatePolicyAssignmentOptions {
    #[must_use]
    pub fn new(
        assignment_id: impl Into<String>,
        if_match: impl Into<String>,
        template_version: impl Into<String>,
    ) -> Self {
        Self {
            assignment_id: assignment_id.into(),
            if_match: if_match.into(),
            template_version: template_version.into(),
            headers: Headers::new(),
        }
    }
}

options_builder!(UpdatePolicyAssignmentOptions { strings: [], values: [] });

impl Validate for UpdatePolicyAssignmentOptions {
    fn validate(&self) -> Result<(), ValidationError> {
        require("assignment_id", &self.assignment_id)?;
        require("if_match", &self.if_match)?;
        require("template_version", &self.template_version)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeletePolicyAssignmentOptions {
    pub assignment_id: String,
    pub headers: Headers,
}

impl DeletePolicyAssignmentOptions {
    #[must_use]
    pub fn new(assignment_id: impl Into<String>) -> Self {
        Self {
            assignment_id: assignment_id.into(),
            headers: Headers::new(),
        }
    }
}

options_builder!(DeletePolicyAssignmentOptions { strings: [], values: [] });

impl Validate for DeletePolicyAssignmentOptions {
    fn validate(&self) -> Result<(), ValidationError> {
        require("assignment_id", &self.assignment_id)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use serde_json::json;
    use service_core::ValidationErrorKind;

    use super::*;
    use crate::models::AssignmentTargetType;

    fn target() -> AssignmentTargetInput {
        AssignmentTargetInput::new(AssignmentTargetType::Account, "child-acct").unwrap()
    }

    #[test]
    fn create_body_lists_templates() {
        let options = CreatePolicyAssignmentOptions::new(
            target(),
            vec![AssignmentTemplateInput::new("tmpl-1", "1").unwrap()],
        )
        .accept_language("en");
        assert!(options.validate().is_ok());
        assert_eq!(
            serde_json::to_value(&options).unwrap(),
            json!({
                "target": {"type": "Account", "id": "child-acct"},
                "templates": [{"id": "tmpl-1", "version": "1"}]
            })
        );
    }

    #[test]
    fn create_requires_a_template() {
        let options = CreatePolicyAssignmentOptions::new(target(), Vec::new());
        let err = options.validate().unwrap_err();
        assert_eq!(err.field, "templates");
        assert_eq!(err.kind, ValidationErrorKind::EmptyList);
    }

    #[test]
    fn create_rejects_blank_target_id() {
        let mut options = CreatePolicyAssignmentOptions::new(
            target(),
            vec![AssignmentTemplateInput::new("tmpl-1", "1").unwrap()],
        );
        options.target.id.clear();
        assert_eq!(options.validate().unwrap_err().field, "target.id");
    }

    #[test]
    fn update_body_is_only_the_version() {
        let options = UpdatePolicyAssignmentOptions::new("asgn-1", "etag", "2");
        assert!(options.validate().is_ok());
        assert_eq!(
            serde_json::to_value(&options).unwrap(),
            json!({"template_version": "2"})
        );
        assert!(UpdatePolicyAssignmentOptions::new("asgn-1", "", "2").validate().is_err());
    }
}
