//! Types shared by several resources.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyType {
    /// Grants a user, service ID or access group a role on a resource.
    Access,
    /// Grants one service a role on another service's resources.
    Authorization,
}

impl PolicyType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Access => "access",
            Self::Authorization => "authorization",
        }
    }
}

impl fmt::Display for PolicyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle state of a policy or template, also used as a list filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyState {
    Active,
    Deleted,
}

impl PolicyState {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Deleted => "deleted",
        }
    }
}

impl fmt::Display for PolicyState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Link to the first page of a collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FirstLink {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

/// Link to the next page of a collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextLink {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Token to pass as `start` on the next list call.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
}

/// A page of a collection.
pub trait Paginated {
    fn next_link(&self) -> Option<&NextLink>;

    /// The `start` token for the following page, or `None` on the last page.
    fn next_start(&self) -> Option<&str> {
        self.next_link().and_then(|next| next.start.as_deref())
    }

    fn has_next(&self) -> bool {
        self.next_start().is_some()
    }
}

/// One entry of a service error envelope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorObject {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub more_info: Option<String>,
}

/// Service error envelope, as embedded in assignment outcomes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trace: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "service_core::de::object_list"
    )]
    pub errors: Option<Vec<ErrorObject>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
}

/// Implements [`Paginated`] for collections carrying a `next` link.
macro_rules! impl_paginated {
    ($($collection:ty),+ $(,)?) => {
        $(
            impl $crate::models::common::Paginated for $collection {
                fn next_link(&self) -> Option<&$crate::models::common::NextLink> {
                    self.next.as_ref()
                }
            }
        )+
    };
}

pub(crate) use impl_paginated;
