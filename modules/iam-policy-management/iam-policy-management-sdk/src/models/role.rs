//! Roles (`/v2/roles`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An account-defined role grouping a set of service actions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomRole {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Programmatic name, e.g. `Developer`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<String>>,
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
    pub href: Option<String>,
}

/// A service-defined or platform system role.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<String>>,
}

/// Roles visible to the caller, grouped by origin.
///
/// An account without custom roles yields `custom_roles: Some(vec![])`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleCollection {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "service_core::de::object_list"
    )]
    pub custom_roles: Option<Vec<CustomRole>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "service_core::de::object_list"
    )]
    pub service_roles: Option<Vec<Role>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "service_core::de::object_list"
    )]
    pub system_roles: Option<Vec<Role>>,
}

impl RoleCollection {
    /// CRNs of every role in the collection, custom roles first.
    #[must_use]
    pub fn crns(&self) -> Vec<&str> {
        let custom = self
            .custom_roles
            .iter()
            .flatten()
            .filter_map(|role| role.crn.as_deref());
        let others = self
            .service_roles
            .iter()
            .flatten()
            .chain(self.system_roles.iter().flatten())
            .filter_map(|role| role.crn.as_deref());
        custom.chain(others).collect()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn empty_custom_roles_stay_present() {
        let roles: RoleCollection = service_core::de::decode_object(
            br#"{
                "custom_roles": [],
                "system_roles": [{"display_name": "Viewer", "crn": "crn:v1:bluemix:public:iam::::role:Viewer", "actions": ["iam.policy.read"]}]
            }"#,
        )
        .unwrap();

        assert_eq!(roles.custom_roles, Some(Vec::new()));
        assert!(roles.service_roles.is_none());
        assert_eq!(roles.crns(), vec!["crn:v1:bluemix:public:iam::::role:Viewer"]);
    }

    #[test]
    fn custom_role_decodes_audit_fields() {
        let role: CustomRole = service_core::de::decode_object(
            br#"{
                "id": "6bd0c93a-0a6c-4b13-a3b5-c3b1e5f8d5e0",
                "name": "Developer",
                "account_id": "acct1",
                "service_name": "iam-groups",
                "display_name": "Developer",
                "actions": ["iam-groups.groups.read"],
                "created_at": "2019-01-01T12:00:00",
                "last_modified_at": "2019-01-02T12:00:00Z"
            }"#,
        )
        .unwrap();

        assert_eq!(role.actions.as_deref(), Some(&["iam-groups.groups.read".to_owned()][..]));
        assert!(role.created_at.unwrap() < role.last_modified_at.unwrap());
        assert!(role.crn.is_none());
    }

    #[test]
    fn non_object_role_aborts_decode() {
        assert!(
            service_core::de::decode_object::<RoleCollection>(br#"{"custom_roles": ["Developer"]}"#)
                .is_err()
        );
    }
}
