#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! IAM Policy Management SDK
//!
//! This crate provides the public API for the `iam_policy_management` module:
//!
//! - [`IamPolicyManagementClient`] - Client trait for consumers
//! - [`models`] - Request inputs (`*Input`) and response models
//! - [`options`] - Per-operation options with pre-flight validation
//!
//! ## Usage
//!
//! ```ignore
//! use iam_policy_management_sdk::{
//!     CreatePolicyOptions, IamPolicyManagementClient, PolicyResourceInput, PolicyRoleInput,
//!     PolicySubjectInput, PolicyType, ResourceAttributeInput, SubjectAttributeInput,
//! };
//!
//! let subject = PolicySubjectInput::new(vec![SubjectAttributeInput::new("iam_id", "IBMid-1")?])?;
//! let role = PolicyRoleInput::new("crn:v1:bluemix:public:iam::::role:Viewer")?;
//! let resource = PolicyResourceInput::new(vec![
//!     ResourceAttributeInput::new("accountId", "acct1")?.operator("stringEquals"),
//! ])?;
//!
//! let options = CreatePolicyOptions::new(PolicyType::Access, vec![subject], vec![role], vec![resource]);
//! let response = client.create_policy(&options).await?;
//! let etag = response.etag().map(str::to_owned);
//! ```

pub mod api;
pub mod models;
pub mod options;

pub use api::IamPolicyManagementClient;
pub use models::{
    AssignmentPolicyOutcome, AssignmentStatus, AssignmentTargetDetails, AssignmentTargetInput,
    AssignmentTargetType, AssignmentTemplateDetails, AssignmentTemplateInput, Control,
    ControlInput, CustomRole, ErrorObject, ErrorResponse, FirstLink, Grant, GrantInput, NextLink,
    Paginated, Policy, PolicyAssignment, PolicyAssignmentCollection, PolicyAssignmentResource,
    PolicyCollection, PolicyResource, PolicyResourceInput, PolicyRole, PolicyRoleInput,
    PolicyRule, PolicyState, PolicySubject, PolicySubjectInput, PolicyTemplate,
    PolicyTemplateCollection, PolicyTemplateVersionsCollection, PolicyType, ResourceAttribute,
    ResourceAttributeInput, ResourceCreated, ResourceTag, ResourceTagInput, Role, RoleCollection,
    RuleOperator, SubjectAttribute, SubjectAttributeInput, TemplatePolicy, TemplatePolicyInput,
    TemplateVersionState, V2Attribute, V2AttributeInput, V2Policy, V2PolicyCollection,
    V2PolicyResource, V2PolicyResourceInput, V2PolicySubject, V2PolicySubjectInput,
    V2ResourceTag, V2ResourceTagInput,
};
pub use options::{
    CommitPolicyTemplateVersionOptions, CreatePolicyAssignmentOptions, CreatePolicyOptions,
    CreatePolicyTemplateOptions, CreatePolicyTemplateVersionOptions, CreateRoleOptions,
    CreateV2PolicyOptions, DeletePolicyAssignmentOptions, DeletePolicyOptions,
    DeletePolicyTemplateOptions, DeletePolicyTemplateVersionOptions, DeleteRoleOptions,
    DeleteV2PolicyOptions, GetPolicyAssignmentOptions, GetPolicyOptions, GetPolicyTemplateOptions,
    GetPolicyTemplateVersionOptions, GetRoleOptions, GetV2PolicyOptions, Headers,
    ListPoliciesOptions, ListPolicyAssignmentsOptions, ListPolicyTemplateVersionsOptions,
    ListPolicyTemplatesOptions, ListRolesOptions, ListV2PoliciesOptions,
    UpdatePolicyAssignmentOptions, UpdatePolicyOptions, UpdatePolicyStateOptions,
    UpdatePolicyTemplateVersionOptions, UpdateRoleOptions, UpdateV2PolicyOptions,
};
pub use service_core::{DetailedResponse, ServiceError, ValidationError, ValidationErrorKind};
