//! Options for `/v2/roles` operations.

use serde::Serialize;
use service_core::validation::{require, require_items};
use service_core::{Validate, ValidationError};

use super::{Headers, options_builder};

/// List roles. Without filters the server returns system roles only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListRolesOptions {
    pub accept_language: Option<String>,
    pub account_id: Option<String>,
    pub service_name: Option<String>,
    pub source_service_name: Option<String>,
    pub policy_type: Option<String>,
    pub service_group_id: Option<String>,
    pub headers: Headers,
}

impl ListRolesOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

options_builder!(ListRolesOptions {
    strings: [accept_language, account_id, service_name, source_service_name, policy_type, service_group_id],
    values: [],
});

impl Validate for ListRolesOptions {
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

fn validate_actions(actions: &[String]) -> Result<(), ValidationError> {
    require_items("actions", actions)?;
    for (index, action) in actions.iter().enumerate() {
        require(&format!("actions[{index}]"), action)?;
    }
    Ok(())
}

/// Create a custom role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateRoleOptions {
    pub display_name: String,
    /// Service actions, e.g. `iam-identity.serviceid.create`.
    pub actions: Vec<String>,
    /// Programmatic name; must start with an upper-case letter on the server side.
    pub name: String,
    pub account_id: String,
    pub service_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip)]
    pub accept_language: Option<String>,
    #[serde(skip)]
    pub headers: Headers,
}

impl CreateRoleOptions {
    #[must_use]
    pub fn new(
        display_name: impl Into<String>,
        actions: Vec<String>,
        name: impl Into<String>,
        account_id: impl Into<String>,
        service_name: impl Into<String>,
    ) -> Self {
        Self {
            display_name: display_name.into(),
            actions,
            name: name.into(),
            account_id: account_id.into(),
            service_name: service_name.into(),
            description: None,
            accept_language: None,
            headers: Headers::new(),
        }
    }
}

options_builder!(CreateRoleOptions {
    strings: [description, accept_language],
    values: [],
});

impl Validate for CreateRoleOptions {
    fn validate(&self) -> Result<(), ValidationError> {
        require("display_name", &self.display_name)?;
        validate_actions(&self.actions)?;
        require("name", &self.name)?;
        require("account_id", &self.account_id)?;
        require("service_name", &self.service_name)
    }
}

/// Update a custom role. Only the fields that are set are sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateRoleOptions {
    #[serde(skip)]
    pub role_id: String,
    #[serde(skip)]
    pub if_match: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<String>>,
    #[serde(skip)]
    pub headers: Headers,
}

impl UpdateRoleOptions {
    #[must_use]
    pub fn new(role_id: impl Into<String>, if_match: impl Into<String>) -> Self {
        Self {
            role_id: role_id.into(),
            if_match: if_match.into(),
            ..Self::default()
        }
    }
}

options_builder!(UpdateRoleOptions {
    strings: [display_name, description],
    values: [actions: Vec<String>],
});

impl Validate for UpdateRoleOptions {
    fn validate(&self) -> Result<(), ValidationError> {
        require("role_id", &self.role_id)?;
        require("if_match", &self.if_match)?;
        match &self.actions {
            Some(actions) => validate_actions(actions),
            None => Ok(()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetRoleOptions {
    pub role_id: String,
    pub headers: Headers,
}

impl GetRoleOptions {
    #[must_use]
    pub fn new(role_id: impl Into<String>) -> Self {
        Self {
            role_id: role_id.into(),
            headers: Headers::new(),
        }
    }
}

options_builder!(GetRoleOptions { strings: [], values: [] });

impl Validate for GetRoleOptions {
    fn validate(&self) -> Result<(), ValidationError> {
        require("role_id", &self.role_id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteRoleOptions {
    pub role_id: String,
    pub headers: Headers,
}

impl DeleteRoleOptions {
    #[must_use]
    pub fn new(role_id: impl Into<String>) -> Self {
        Self {
            role_id: role_id.into(),
            headers: Headers::new(),
        }
    }
}

options_builder!(DeleteRoleOptions { strings: [], values: [] });

impl Validate for DeleteRoleOptions {
    fn validate(&self) -> Result<(), ValidationError> {
        require("role_id", &self.role_id)
    }
}
