//! Wire models: request inputs (`*Input`) and response models.

pub mod common;

pub mod assignment;
pub mod policy;
pub mod role;
pub mod template;
pub mod v2_policy;

pub use assignment::{
    AssignmentPolicyOutcome, AssignmentStatus, AssignmentTargetDetails, AssignmentTargetInput,
    AssignmentTargetType, AssignmentTemplateDetails, AssignmentTemplateInput, PolicyAssignment,
    PolicyAssignmentCollection, PolicyAssignmentResource, ResourceCreated,
};
pub use common::{ErrorObject, ErrorResponse, FirstLink, NextLink, Paginated, PolicyState, PolicyType};
pub use policy::{
    Policy, PolicyCollection, PolicyResource, PolicyResourceInput, PolicyRole, PolicyRoleInput,
    PolicySubject, PolicySubjectInput, ResourceAttribute, ResourceAttributeInput, ResourceTag,
    ResourceTagInput, SubjectAttribute, SubjectAttributeInput,
};
pub use role::{CustomRole, Role, RoleCollection};
pub use template::{
    PolicyTemplate, PolicyTemplateCollection, PolicyTemplateVersionsCollection, TemplatePolicy,
    TemplatePolicyInput, TemplateVersionState,
};
pub use v2_policy::{
    Control, ControlInput, Grant, GrantInput, PolicyRule, RuleOperator, V2Attribute,
    V2AttributeInput, V2Policy, V2PolicyCollection, V2PolicyResource, V2PolicyResourceInput,
    V2PolicySubject, V2PolicySubjectInput, V2ResourceTag, V2ResourceTagInput,
};
