//! Options for `/v1/policy_templates` operations.

use serde::Serialize;
use service_core::validation::{require, validate_nested};
use service_core::{Validate, ValidationError};

use super::{Headers, options_builder};
use crate::models::{PolicyState, TemplatePolicyInput};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListPolicyTemplatesOptions {
    pub account_id: String,
    pub accept_language: Option<String>,
    pub state: Option<PolicyState>,
    pub name: Option<String>,
    pub policy_service_type: Option<String>,
    pub policy_service_name: Option<String>,
    pub policy_service_group_id: Option<String>,
    pub policy_type: Option<String>,
    pub limit: Option<u32>,
    pub start: Option<String>,
    pub headers: Headers,
}

impl ListPolicyTemplatesOptions {
    #[must_use]
    pub fn new(account_id: impl Into<String>) -> Self {
        Self {
            account_id: account_id.into(),
            ..Self::default()
        }
    }
}

options_builder!(ListPolicyTemplatesOptions {
    strings: [accept_language, name, policy_service_type, policy_service_name, policy_service_group_id, policy_type, start],
    values: [state: PolicyState, limit: u32],
});

impl Validate for ListPolicyTemplatesOptions {
    fn validate(&self) -> Result<(), ValidationError> {
        require("account_id", &self.account_id)
    }
}

/// Create a template together with its first version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatePolicyTemplateOptions {
    pub name: String,
    pub account_id: String,
    pub policy: TemplatePolicyInput,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Commit the first version right away.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub committed: Option<bool>,
    #[serde(skip)]
    pub accept_language: Option<String>,
    #[serde(skip)]
    pub headers: Headers,
}

impl CreatePolicyTemplateOptions {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        account_id: impl Into<String>,
        policy: TemplatePolicyInput,
    ) -> Self {
        Self {
            name: name.into(),
            account_id: account_id.into(),
            policy,
            description: None,
            committed: None,
            accept_language: None,
            headers: Headers::new(),
        }
    }
}

options_builder!(CreatePolicyTemplateOptions {
    strings: [description, accept_language],
    values: [committed: bool],
});

impl Validate for CreatePolicyTemplateOptions {
    fn validate(&self) -> Result<(), ValidationError> {
        require("name", &self.name)?;
        require("account_id", &self.account_id)?;
        validate_nested("policy", Some(&self.policy))
    }
}

/// Fetch a template at its latest version.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetPolicyTemplateOptions {
    pub policy_template_id: String,
    pub state: Option<PolicyState>,
    pub headers: Headers,
}

impl GetPolicyTemplateOptions {
    #[must_use]
    pub fn new(policy_template_id: impl Into<String>) -> Self {
        Self {
            policy_template_id: policy_template_id.into(),
            ..Self::default()
        }
    }
}

options_builder!(GetPolicyTemplateOptions {
    strings: [],
    values: [state: PolicyState],
});

impl Validate for GetPolicyTemplateOptions {
    fn validate(&self) -> Result<(), ValidationError> {
        require("policy_template_id", &self.policy_template_id)
    }
}

/// Delete a template and every one of its versions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeletePolicyTemplateOptions {
    pub policy_template_id: String,
    pub headers: Headers,
}

impl DeletePolicyTemplateOptions {
    #[must_use]
    pub fn new(policy_template_id: impl Into<String>) -> Self {
        Self {
            policy_template_id: policy_template_id.into(),
            headers: Headers::new(),
        }
    }
}

options_builder!(DeletePolicyTemplateOptions { strings: [], values: [] });

impl Validate for DeletePolicyTemplateOptions {
    fn validate(&self) -> Result<(), ValidationError> {
        require("policy_template_id", &self.policy_template_id)
    }
}

/// Add a new draft (or committed) version to a template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatePolicyTemplateVersionOptions {
    #[serde(skip)]
    pub policy_template_id: String,
    pub policy: TemplatePolicyInput,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub committed: Option<bool>,
    #[serde(skip)]
    pub headers: Headers,
}

impl CreatePolicyTemplateVersionOptions {
    #[must_use]
    pub fn new(policy_template_id: impl Into<String>, policy: TemplatePolicyInput) -> Self {
        Self {
            policy_template_id: policy_template_id.into(),
            policy,
            name: None,
            description: None,
            committed: None,
            headers: Headers::new(),
        }
    }
}

options_builder!(CreatePolicyTemplateVersionOptions {
    strings: [name, description],
    values: [committed: bool],
});

impl Validate for CreatePolicyTemplateVersionOptions {
    fn validate(&self) -> Result<(), ValidationError> {
        require("policy_template_id", &self.policy_template_id)?;
        validate_nested("policy", Some(&self.policy))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListPolicyTemplateVersionsOptions {
    pub policy_template_id: String,
    pub state: Option<PolicyState>,
    pub limit: Option<u32>,
    pub start: Option<String>,
    pub headers: Headers,
}

impl ListPolicyTemplateVersionsOptions {
    #[must_use]
    pub fn new(policy_template_id: impl Into<String>) -> Self {
        Self {
            policy_template_id: policy_template_id.into(),
            ..Self::default()
        }
    }
}

options_builder!(ListPolicyTemplateVersionsOptions {
    strings: [start],
    values: [state: PolicyState, limit: u32],
});

impl Validate for ListPolicyTemplateVersionsOptions {
    fn validate(&self) -> Result<(), ValidationError> {
        require("policy_template_id", &self.policy_template_id)
    }
}

/// Replace a draft version. The server rejects updates to committed versions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdatePolicyTemplateVersionOptions {
    #[serde(skip)]
    pub policy_template_id: String,
    #[serde(skip)]
    pub version: String,
    #[serde(skip)]
    pub if_match: String,
    pub policy: TemplatePolicyInput,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub committed: Option<bool>,
    #[serde(skip)]
    pub headers: Headers,
}

impl UpdatePolicyTemplateVersionOptions {
    #[must_use]
    pub fn new(
        policy_template_id: impl Into<String>,
        version: impl Into<String>,
        if_match: impl Into<String>,
        policy: TemplatePolicyInput,
    ) -> Self {
        Self {
            policy_template_id: policy_template_id.into(),
            version: version.into(),
            if_match: if_match.into(),
            policy,
            name: None,
            description: None,
            committed: None,
            headers: Headers::new(),
        }
    }
}

options_builder!(UpdatePolicyTemplateVersionOptions {
    strings: [name, description],
    values: [committed: bool],
});

impl Validate for UpdatePolicyTemplateVersionOptions {
    fn validate(&self) -> Result<(), ValidationError> {
        require("policy_template_id", &self.policy_template_id)?;
        require("version", &self.version)?;
        require("if_match", &self.if_match)?;
        validate_nested("policy", Some(&self.policy))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetPolicyTemplateVersionOptions {
    pub policy_template_id: String,
    pub version: String,
    pub headers: Headers,
}

impl GetPolicyTemplateVersionOptions {
    #[must_use]
    pub fn new(policy_template_id: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            policy_template_id: policy_template_id.into(),
            version: version.into(),
            headers: Headers::new(),
        }
    }
}

options_builder!(GetPolicyTemplateVersionOptions { strings: [], values: [] });

impl Validate for GetPolicyTemplateVersionOptions {
    fn validate(&self) -> Result<(), ValidationError> {
        require("policy_template_id", &self.policy_template_id)?;
        require("version", &self.version)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeletePolicyTemplateVersionOptions {
    pub policy_template_id: String,
    pub version: String,
    pub headers: Headers,
}

impl DeletePolicyTemplateVersionOptions {
    #[must_use]
    pub fn new(policy_template_id: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            policy_template_id: policy_template_id.into(),
            version: version.into(),
            headers: Headers::new(),
        }
    }
}

options_builder!(DeletePolicyTemplateVersionOptions { strings: [], values: [] });

impl Validate for DeletePolicyTemplateVersionOptions {
    fn validate(&self) -> Result<(), ValidationError> {
        require("policy_template_id", &self.policy_template_id)?;
        require("version", &self.version)
    }
}

/// Make a draft version immutable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitPolicyTemplateVersionOptions {
    pub policy_template_id: String,
    pub version: String,
    pub if_match: String,
    pub headers: Headers,
}

impl CommitPolicyTemplateVersionOptions {
    #[must_use]
    pub fn new(
        policy_template_id: impl Into<String>,
        version: impl Into<String>,
        if_match: impl Into<String>,
    ) -> Self {
        Self {
            policy_template_id: policy_template_id.into(),
            version: version.into(),
            if_match: if_match.into(),
            headers: Headers::new(),
        }
    }
}

options_builder!(CommitPolicyTemplateVersionOptions { strings: [], values: [] });

impl Validate for CommitPolicyTemplateVersionOptions {
    fn validate(&self) -> Result<(), ValidationError> {
        require("policy_template_id", &self.policy_template_id)?;
        require("version", &self.version)?;
        require("if_match", &self.if_match)
    }
}
