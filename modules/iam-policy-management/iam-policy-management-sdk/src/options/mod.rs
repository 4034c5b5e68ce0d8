//! Per-operation options.
//!
//! Required parameters are plain fields set by `new`; optional ones are
//! `Option`s set with consuming setters. Every options type implements
//! [`service_core::Validate`], which the client runs before building a request.
//! Options that carry a request body serialize to exactly that body: path
//! parameters, `If-Match`, `Accept-Language` and extra headers are skipped.

pub mod assignments;
pub mod policies;
pub mod roles;
pub mod templates;
pub mod v2_policies;

use std::collections::BTreeMap;

/// Caller-supplied request headers, sent in addition to the standard ones.
pub type Headers = BTreeMap<String, String>;

/// Generates consuming setters for optional fields plus `header()`.
///
/// `strings` fields accept anything convertible into `String`; `values`
/// fields take their type as is.
macro_rules! options_builder {
    (
        $ty:ident {
            strings: [$($s:ident),* $(,)?],
            values: [$($v:ident: $vt:ty),* $(,)?] $(,)?
        }
    ) => {
        impl $ty {
            $(
                #[must_use]
                pub fn $s(mut self, $s: impl Into<String>) -> Self {
                    self.$s = Some($s.into());
                    self
                }
            )*

            $(
                #[must_use]
                pub fn $v(mut self, $v: $vt) -> Self {
                    self.$v = Some($v);
                    self
                }
            )*

            /// Send an extra request header.
            #[must_use]
            pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
                self.headers.insert(name.into(), value.into());
                self
            }
        }
    };
}

pub(crate) use options_builder;

pub use assignments::{
    CreatePolicyAssignmentOptions, DeletePolicyAssignmentOptions, GetPolicyAssignmentOptions,
    ListPolicyAssignmentsOptions, UpdatePolicyAssignmentOptions,
};
pub use policies::{
    CreatePolicyOptions, DeletePolicyOptions, GetPolicyOptions, ListPoliciesOptions,
    UpdatePolicyOptions, UpdatePolicyStateOptions,
};
pub use roles::{CreateRoleOptions, DeleteRoleOptions, GetRoleOptions, ListRolesOptions, UpdateRoleOptions};
pub use templates::{
    CommitPolicyTemplateVersionOptions, CreatePolicyTemplateOptions,
    CreatePolicyTemplateVersionOptions, DeletePolicyTemplateOptions,
    DeletePolicyTemplateVersionOptions, GetPolicyTemplateOptions, GetPolicyTemplateVersionOptions,
    ListPolicyTemplateVersionsOptions, ListPolicyTemplatesOptions,
    UpdatePolicyTemplateVersionOptions,
};
pub use v2_policies::{
    CreateV2PolicyOptions, DeleteV2PolicyOptions, GetV2PolicyOptions, ListV2PoliciesOptions,
    UpdateV2PolicyOptions,
};
