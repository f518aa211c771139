//! AWS Organizations input types.
//!
//! All input structs use `PascalCase` JSON member names to match the
//! `awsJson1_1` wire protocol. Optional members are omitted when `None` and
//! empty lists are omitted, so an input with nothing set serializes to `{}`.
//!
//! Inputs with members derive [`TypedBuilder`]; required members are
//! mandatory builder arguments and optional ones default to `None`/empty.
//!
//! ```
//! use ruststack_organizations_model::input::CreateAccountInput;
//! use ruststack_organizations_model::types::IamUserAccessToBilling;
//!
//! let input = CreateAccountInput::builder()
//!     .email("susan@example.com")
//!     .account_name("Production Account")
//!     .iam_user_access_to_billing(IamUserAccessToBilling::Deny)
//!     .build();
//! assert_eq!(input.role_name, None);
//! ```

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::types::{
    ChildType, EffectivePolicyType, HandshakeFilter, HandshakeParty, IamUserAccessToBilling,
    OrganizationFeatureSet, PolicyType, Tag,
};

// ---------------------------------------------------------------------------
// Handshakes
// ---------------------------------------------------------------------------

/// Input for the `AcceptHandshake` operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "PascalCase")]
pub struct AcceptHandshakeInput {
    /// The ID of the handshake to accept.
    #[builder(setter(into))]
    pub handshake_id: String,
}

/// Input for the `CancelHandshake` operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "PascalCase")]
pub struct CancelHandshakeInput {
    /// The ID of the handshake to cancel. Only the originator may cancel.
    #[builder(setter(into))]
    pub handshake_id: String,
}

/// Input for the `DeclineHandshake` operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "PascalCase")]
pub struct DeclineHandshakeInput {
    #[builder(setter(into))]
    pub handshake_id: String,
}

/// Input for the `DescribeHandshake` operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeHandshakeInput {
    #[builder(setter(into))]
    pub handshake_id: String,
}

/// Input for the `EnableAllFeatures` operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct EnableAllFeaturesInput {}

/// Input for the `InviteAccountToOrganization` operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "PascalCase")]
pub struct InviteAccountToOrganizationInput {
    /// The account to invite, identified by account ID or email address.
    pub target: HandshakeParty,

    /// Additional information included in the invitation email.
    #[builder(default, setter(strip_option, into))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Tags attached to the account when it joins.
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
}

/// Input for the `ListHandshakesForAccount` operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "PascalCase")]
pub struct ListHandshakesForAccountInput {
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<HandshakeFilter>,

    #[builder(default, setter(strip_option, into))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,

    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

/// Input for the `ListHandshakesForOrganization` operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "PascalCase")]
pub struct ListHandshakesForOrganizationInput {
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<HandshakeFilter>,

    #[builder(default, setter(strip_option, into))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,

    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

// ---------------------------------------------------------------------------
// Organization lifecycle
// ---------------------------------------------------------------------------

/// Input for the `CreateOrganization` operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "PascalCase")]
pub struct CreateOrganizationInput {
    /// The feature set of the new organization. The service defaults to `ALL`.
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature_set: Option<OrganizationFeatureSet>,
}

/// Input for the `DeleteOrganization` operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct DeleteOrganizationInput {}

/// Input for the `DescribeOrganization` operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct DescribeOrganizationInput {}

/// Input for the `LeaveOrganization` operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct LeaveOrganizationInput {}

// ---------------------------------------------------------------------------
// Accounts
// ---------------------------------------------------------------------------

/// Input for the `CreateAccount` operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "PascalCase")]
pub struct CreateAccountInput {
    /// The email address of the owner of the new account.
    #[builder(setter(into))]
    pub email: String,

    /// The friendly name of the new account.
    #[builder(setter(into))]
    pub account_name: String,

    /// The IAM role created in the new account and trusted by the master
    /// account. The service defaults to `OrganizationAccountAccessRole`.
    #[builder(default, setter(strip_option, into))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_name: Option<String>,

    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iam_user_access_to_billing: Option<IamUserAccessToBilling>,

    #[builder(default)]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
}

/// Input for the `CreateGovCloudAccount` operation.
///
/// Same members as [`CreateAccountInput`]; the service creates a paired
/// commercial and GovCloud (US) account.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "PascalCase")]
pub struct CreateGovCloudAccountInput {
    #[builder(setter(into))]
    pub email: String,

    #[builder(setter(into))]
    pub account_name: String,

    #[builder(default, setter(strip_option, into))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_name: Option<String>,

    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iam_user_access_to_billing: Option<IamUserAccessToBilling>,

    #[builder(default)]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
}

/// Input for the `DescribeAccount` operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeAccountInput {
    #[builder(setter(into))]
    pub account_id: String,
}

/// Input for the `DescribeCreateAccountStatus` operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeCreateAccountStatusInput {
    /// The `car-` ID returned by `CreateAccount`.
    #[builder(setter(into))]
    pub create_account_request_id: String,
}

/// Input for the `ListAccounts` operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "PascalCase")]
pub struct ListAccountsInput {
    /// Token from a previous response's `NextToken` to continue listing.
    #[builder(default, setter(strip_option, into))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,

    /// Page size upper bound (1--20).
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

/// Input for the `ListAccountsForParent` operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "PascalCase")]
pub struct ListAccountsForParentInput {
    /// The root or OU whose accounts to list.
    #[builder(setter(into))]
    pub parent_id: String,

    #[builder(default, setter(strip_option, into))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,

    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

/// Input for the `ListCreateAccountStatus` operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "PascalCase")]
pub struct ListCreateAccountStatusInput {
    /// Only requests in these states. All states when empty.
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub states: Vec<crate::types::CreateAccountState>,

    #[builder(default, setter(strip_option, into))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,

    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

/// Input for the `MoveAccount` operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "PascalCase")]
pub struct MoveAccountInput {
    #[builder(setter(into))]
    pub account_id: String,

    /// The root or OU the account is moved out of.
    #[builder(setter(into))]
    pub source_parent_id: String,

    /// The root or OU the account is moved into.
    #[builder(setter(into))]
    pub destination_parent_id: String,
}

/// Input for the `RemoveAccountFromOrganization` operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "PascalCase")]
pub struct RemoveAccountFromOrganizationInput {
    #[builder(setter(into))]
    pub account_id: String,
}

// ---------------------------------------------------------------------------
// Organizational units and hierarchy
// ---------------------------------------------------------------------------

/// Input for the `CreateOrganizationalUnit` operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "PascalCase")]
pub struct CreateOrganizationalUnitInput {
    /// The root or OU under which the new OU is created.
    #[builder(setter(into))]
    pub parent_id: String,

    #[builder(setter(into))]
    pub name: String,

    #[builder(default)]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
}

/// Input for the `DeleteOrganizationalUnit` operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteOrganizationalUnitInput {
    #[builder(setter(into))]
    pub organizational_unit_id: String,
}

/// Input for the `DescribeOrganizationalUnit` operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeOrganizationalUnitInput {
    #[builder(setter(into))]
    pub organizational_unit_id: String,
}

/// Input for the `UpdateOrganizationalUnit` operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateOrganizationalUnitInput {
    #[builder(setter(into))]
    pub organizational_unit_id: String,

    /// The new name. The name is left unchanged when `None`.
    #[builder(default, setter(strip_option, into))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Input for the `ListChildren` operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "PascalCase")]
pub struct ListChildrenInput {
    #[builder(setter(into))]
    pub parent_id: String,

    /// Whether to list accounts or OUs.
    pub child_type: ChildType,

    #[builder(default, setter(strip_option, into))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,

    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

/// Input for the `ListOrganizationalUnitsForParent` operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "PascalCase")]
pub struct ListOrganizationalUnitsForParentInput {
    #[builder(setter(into))]
    pub parent_id: String,

    #[builder(default, setter(strip_option, into))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,

    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

/// Input for the `ListParents` operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "PascalCase")]
pub struct ListParentsInput {
    /// The account or OU whose parents to list.
    #[builder(setter(into))]
    pub child_id: String,

    #[builder(default, setter(strip_option, into))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,

    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

/// Input for the `ListRoots` operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "PascalCase")]
pub struct ListRootsInput {
    #[builder(default, setter(strip_option, into))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,

    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

// ---------------------------------------------------------------------------
// Policies
// ---------------------------------------------------------------------------

/// Input for the `AttachPolicy` operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "PascalCase")]
pub struct AttachPolicyInput {
    #[builder(setter(into))]
    pub policy_id: String,

    /// The root, OU, or account to attach the policy to.
    #[builder(setter(into))]
    pub target_id: String,
}

/// Input for the `CreatePolicy` operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "PascalCase")]
pub struct CreatePolicyInput {
    /// The policy document, as a JSON string.
    #[builder(setter(into))]
    pub content: String,

    #[builder(setter(into))]
    pub description: String,

    #[builder(setter(into))]
    pub name: String,

    /// The kind of policy to create.
    #[serde(rename = "Type")]
    pub policy_type: PolicyType,

    #[builder(default)]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
}

/// Input for the `DeletePolicy` operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "PascalCase")]
pub struct DeletePolicyInput {
    #[builder(setter(into))]
    pub policy_id: String,
}

/// Input for the `DescribePolicy` operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "PascalCase")]
pub struct DescribePolicyInput {
    #[builder(setter(into))]
    pub policy_id: String,
}

/// Input for the `DescribeEffectivePolicy` operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeEffectivePolicyInput {
    pub policy_type: EffectivePolicyType,

    /// The account to query. The calling account when `None`.
    #[builder(default, setter(strip_option, into))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_id: Option<String>,
}

/// Input for the `DetachPolicy` operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "PascalCase")]
pub struct DetachPolicyInput {
    #[builder(setter(into))]
    pub policy_id: String,

    #[builder(setter(into))]
    pub target_id: String,
}

/// Input for the `DisablePolicyType` operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "PascalCase")]
pub struct DisablePolicyTypeInput {
    #[builder(setter(into))]
    pub root_id: String,

    pub policy_type: PolicyType,
}

/// Input for the `EnablePolicyType` operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "PascalCase")]
pub struct EnablePolicyTypeInput {
    #[builder(setter(into))]
    pub root_id: String,

    pub policy_type: PolicyType,
}

/// Input for the `ListPolicies` operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "PascalCase")]
pub struct ListPoliciesInput {
    /// Only policies of this type.
    pub filter: PolicyType,

    #[builder(default, setter(strip_option, into))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,

    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

/// Input for the `ListPoliciesForTarget` operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "PascalCase")]
pub struct ListPoliciesForTargetInput {
    #[builder(setter(into))]
    pub target_id: String,

    pub filter: PolicyType,

    #[builder(default, setter(strip_option, into))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,

    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

/// Input for the `ListTargetsForPolicy` operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "PascalCase")]
pub struct ListTargetsForPolicyInput {
    #[builder(setter(into))]
    pub policy_id: String,

    #[builder(default, setter(strip_option, into))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,

    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

/// Input for the `UpdatePolicy` operation.
///
/// Members left as `None` keep their current value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "PascalCase")]
pub struct UpdatePolicyInput {
    #[builder(setter(into))]
    pub policy_id: String,

    #[builder(default, setter(strip_option, into))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[builder(default, setter(strip_option, into))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[builder(default, setter(strip_option, into))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

// ---------------------------------------------------------------------------
// Service access and delegated administrators
// ---------------------------------------------------------------------------

/// Input for the `EnableAWSServiceAccess` operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "PascalCase")]
pub struct EnableAwsServiceAccessInput {
    /// The service principal, for example `tagpolicies.tag.amazonaws.com`.
    #[builder(setter(into))]
    pub service_principal: String,
}

/// Input for the `DisableAWSServiceAccess` operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "PascalCase")]
pub struct DisableAwsServiceAccessInput {
    #[builder(setter(into))]
    pub service_principal: String,
}

/// Input for the `ListAWSServiceAccessForOrganization` operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "PascalCase")]
pub struct ListAwsServiceAccessForOrganizationInput {
    #[builder(default, setter(strip_option, into))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,

    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

/// Input for the `RegisterDelegatedAdministrator` operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "PascalCase")]
pub struct RegisterDelegatedAdministratorInput {
    #[builder(setter(into))]
    pub account_id: String,

    #[builder(setter(into))]
    pub service_principal: String,
}

/// Input for the `DeregisterDelegatedAdministrator` operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "PascalCase")]
pub struct DeregisterDelegatedAdministratorInput {
    #[builder(setter(into))]
    pub account_id: String,

    #[builder(setter(into))]
    pub service_principal: String,
}

/// Input for the `ListDelegatedAdministrators` operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "PascalCase")]
pub struct ListDelegatedAdministratorsInput {
    /// Only administrators for this service.
    #[builder(default, setter(strip_option, into))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_principal: Option<String>,

    #[builder(default, setter(strip_option, into))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,

    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

/// Input for the `ListDelegatedServicesForAccount` operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "PascalCase")]
pub struct ListDelegatedServicesForAccountInput {
    #[builder(setter(into))]
    pub account_id: String,

    #[builder(default, setter(strip_option, into))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,

    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

// ---------------------------------------------------------------------------
// Tagging
// ---------------------------------------------------------------------------

/// Input for the `ListTagsForResource` operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "PascalCase")]
pub struct ListTagsForResourceInput {
    /// An account ID, OU ID, root ID or policy ID.
    #[builder(setter(into))]
    pub resource_id: String,

    #[builder(default, setter(strip_option, into))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// Input for the `TagResource` operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "PascalCase")]
pub struct TagResourceInput {
    #[builder(setter(into))]
    pub resource_id: String,

    pub tags: Vec<Tag>,
}

/// Input for the `UntagResource` operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "PascalCase")]
pub struct UntagResourceInput {
    #[builder(setter(into))]
    pub resource_id: String,

    pub tag_keys: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{HandshakePartyType, PolicyType};

    #[test]
    fn test_should_serialize_empty_input_as_empty_object() {
        let json = serde_json::to_string(&DescribeOrganizationInput::default())
            .expect("serialize DescribeOrganizationInput");
        assert_eq!(json, "{}");
        let parsed: LeaveOrganizationInput =
            serde_json::from_str("{}").expect("deserialize LeaveOrganizationInput");
        assert_eq!(parsed, LeaveOrganizationInput::default());
    }

    #[test]
    fn test_should_build_create_account_with_optional_members() {
        let input = CreateAccountInput::builder()
            .email("anika@example.com")
            .account_name("Production Account")
            .role_name("OrganizationAccountAccessRole")
            .tags(vec![Tag::new("env", "prod")])
            .build();
        let json = serde_json::to_value(&input).expect("serialize CreateAccountInput");
        assert_eq!(json["Email"], "anika@example.com");
        assert_eq!(json["AccountName"], "Production Account");
        assert_eq!(json["RoleName"], "OrganizationAccountAccessRole");
        assert_eq!(json["Tags"][0]["Key"], "env");
        assert!(json.get("IamUserAccessToBilling").is_none());
    }

    #[test]
    fn test_should_serialize_create_policy_type_member() {
        let input = CreatePolicyInput::builder()
            .content(r#"{"Version":"2012-10-17","Statement":[]}"#)
            .description("Deny all")
            .name("DenyAll")
            .policy_type(PolicyType::ServiceControlPolicy)
            .build();
        let json = serde_json::to_value(&input).expect("serialize CreatePolicyInput");
        assert_eq!(json["Type"], "SERVICE_CONTROL_POLICY");
        assert!(json.get("Tags").is_none());
    }

    #[test]
    fn test_should_serialize_invite_target() {
        let input = InviteAccountToOrganizationInput::builder()
            .target(HandshakeParty::new(
                "juan@example.com",
                HandshakePartyType::Email,
            ))
            .notes("Welcome")
            .build();
        let json = serde_json::to_string(&input).expect("serialize invite");
        assert_eq!(
            json,
            r#"{"Target":{"Id":"juan@example.com","Type":"EMAIL"},"Notes":"Welcome"}"#
        );
    }

    #[test]
    fn test_should_require_mandatory_members_on_deserialize() {
        let err = serde_json::from_str::<MoveAccountInput>(r#"{"AccountId":"111111111111"}"#)
            .expect_err("missing parent ids");
        assert!(err.to_string().contains("SourceParentId"));
    }

    #[test]
    fn test_should_keep_pagination_members() {
        let input = ListAccountsInput::builder()
            .next_token("AAAA")
            .max_results(5)
            .build();
        let json = serde_json::to_string(&input).expect("serialize ListAccountsInput");
        assert_eq!(json, r#"{"NextToken":"AAAA","MaxResults":5}"#);
    }

    #[test]
    fn test_should_serialize_untag_keys() {
        let input = UntagResourceInput::builder()
            .resource_id("ou-abcd-12345678")
            .tag_keys(vec!["env".to_owned(), "team".to_owned()])
            .build();
        let json = serde_json::to_string(&input).expect("serialize UntagResourceInput");
        assert_eq!(
            json,
            r#"{"ResourceId":"ou-abcd-12345678","TagKeys":["env","team"]}"#
        );
    }
}
