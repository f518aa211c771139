//! AWS Organizations operation enum.
//!
//! Organizations uses the `awsJson1_1` protocol: every request is `POST /`
//! and names its operation in the `X-Amz-Target` header:
//!
//! ```text
//! X-Amz-Target: AWSOrganizationsV20161128.CreateAccount
//! ```

use std::fmt;

/// Prefix of every `X-Amz-Target` header value for this service.
pub const TARGET_PREFIX: &str = "AWSOrganizationsV20161128.";

/// All AWS Organizations operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrganizationsOperation {
    // Handshakes
    /// Accept a handshake proposed to the calling account.
    AcceptHandshake,
    /// Cancel a handshake started by the calling account.
    CancelHandshake,
    /// Decline a handshake proposed to the calling account.
    DeclineHandshake,
    /// Describe a handshake.
    DescribeHandshake,
    /// Start enabling all features in the organization.
    EnableAllFeatures,
    /// Invite an account to join the organization.
    InviteAccountToOrganization,
    /// List handshakes of the calling account.
    ListHandshakesForAccount,
    /// List handshakes of the organization.
    ListHandshakesForOrganization,

    // Organization lifecycle
    /// Create an organization with the caller as master account.
    CreateOrganization,
    /// Delete the organization.
    DeleteOrganization,
    /// Describe the organization the caller belongs to.
    DescribeOrganization,
    /// Remove the calling member account from its organization.
    LeaveOrganization,

    // Accounts
    /// Create a member account (asynchronous).
    CreateAccount,
    /// Create a paired commercial and GovCloud (US) account.
    CreateGovCloudAccount,
    /// Describe a member account.
    DescribeAccount,
    /// Describe the status of an account creation request.
    DescribeCreateAccountStatus,
    /// List all accounts in the organization.
    ListAccounts,
    /// List accounts directly under a root or OU.
    ListAccountsForParent,
    /// List account creation requests.
    ListCreateAccountStatus,
    /// Move an account between parents.
    MoveAccount,
    /// Remove a member account from the organization.
    RemoveAccountFromOrganization,

    // Organizational units and hierarchy
    /// Create an OU under a root or OU.
    CreateOrganizationalUnit,
    /// Delete an empty OU.
    DeleteOrganizationalUnit,
    /// Describe an OU.
    DescribeOrganizationalUnit,
    /// Rename an OU.
    UpdateOrganizationalUnit,
    /// List child accounts or OUs of a parent.
    ListChildren,
    /// List OUs directly under a root or OU.
    ListOrganizationalUnitsForParent,
    /// List the parents of an account or OU.
    ListParents,
    /// List the roots of the organization.
    ListRoots,

    // Policies
    /// Attach a policy to a root, OU, or account.
    AttachPolicy,
    /// Create a policy.
    CreatePolicy,
    /// Delete a policy that is not attached anywhere.
    DeletePolicy,
    /// Describe a policy.
    DescribePolicy,
    /// Describe the effective policy of a type for an account.
    DescribeEffectivePolicy,
    /// Detach a policy from a root, OU, or account.
    DetachPolicy,
    /// Disable a policy type in a root.
    DisablePolicyType,
    /// Enable a policy type in a root.
    EnablePolicyType,
    /// List policies of a type.
    ListPolicies,
    /// List policies attached to a target.
    ListPoliciesForTarget,
    /// List targets a policy is attached to.
    ListTargetsForPolicy,
    /// Update a policy's name, description, or content.
    UpdatePolicy,

    // Service access and delegated administrators
    /// Enable integration of an AWS service.
    EnableAwsServiceAccess,
    /// Disable integration of an AWS service.
    DisableAwsServiceAccess,
    /// List services integrated with the organization.
    ListAwsServiceAccessForOrganization,
    /// Make an account delegated administrator for a service.
    RegisterDelegatedAdministrator,
    /// Remove an account as delegated administrator for a service.
    DeregisterDelegatedAdministrator,
    /// List delegated administrator accounts.
    ListDelegatedAdministrators,
    /// List services an account administers.
    ListDelegatedServicesForAccount,

    // Tagging
    /// List tags on a resource.
    ListTagsForResource,
    /// Add tags to a resource.
    TagResource,
    /// Remove tags from a resource.
    UntagResource,
}

impl OrganizationsOperation {
    /// Every operation, in the order the service documents them.
    pub const ALL: &[Self] = &[
        Self::AcceptHandshake,
        Self::AttachPolicy,
        Self::CancelHandshake,
        Self::CreateAccount,
        Self::CreateGovCloudAccount,
        Self::CreateOrganization,
        Self::CreateOrganizationalUnit,
        Self::CreatePolicy,
        Self::DeclineHandshake,
        Self::DeleteOrganization,
        Self::DeleteOrganizationalUnit,
        Self::DeletePolicy,
        Self::DeregisterDelegatedAdministrator,
        Self::DescribeAccount,
        Self::DescribeCreateAccountStatus,
        Self::DescribeEffectivePolicy,
        Self::DescribeHandshake,
        Self::DescribeOrganization,
        Self::DescribeOrganizationalUnit,
        Self::DescribePolicy,
        Self::DetachPolicy,
        Self::DisableAwsServiceAccess,
        Self::DisablePolicyType,
        Self::EnableAwsServiceAccess,
        Self::EnableAllFeatures,
        Self::EnablePolicyType,
        Self::InviteAccountToOrganization,
        Self::LeaveOrganization,
        Self::ListAwsServiceAccessForOrganization,
        Self::ListAccounts,
        Self::ListAccountsForParent,
        Self::ListChildren,
        Self::ListCreateAccountStatus,
        Self::ListDelegatedAdministrators,
        Self::ListDelegatedServicesForAccount,
        Self::ListHandshakesForAccount,
        Self::ListHandshakesForOrganization,
        Self::ListOrganizationalUnitsForParent,
        Self::ListParents,
        Self::ListPolicies,
        Self::ListPoliciesForTarget,
        Self::ListRoots,
        Self::ListTagsForResource,
        Self::ListTargetsForPolicy,
        Self::MoveAccount,
        Self::RegisterDelegatedAdministrator,
        Self::RemoveAccountFromOrganization,
        Self::TagResource,
        Self::UntagResource,
        Self::UpdateOrganizationalUnit,
        Self::UpdatePolicy,
    ];

    /// Returns the AWS operation name string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AcceptHandshake => "AcceptHandshake",
            Self::CancelHandshake => "CancelHandshake",
            Self::DeclineHandshake => "DeclineHandshake",
            Self::DescribeHandshake => "DescribeHandshake",
            Self::EnableAllFeatures => "EnableAllFeatures",
            Self::InviteAccountToOrganization => "InviteAccountToOrganization",
            Self::ListHandshakesForAccount => "ListHandshakesForAccount",
            Self::ListHandshakesForOrganization => "ListHandshakesForOrganization",
            Self::CreateOrganization => "CreateOrganization",
            Self::DeleteOrganization => "DeleteOrganization",
            Self::DescribeOrganization => "DescribeOrganization",
            Self::LeaveOrganization => "LeaveOrganization",
            Self::CreateAccount => "CreateAccount",
            Self::CreateGovCloudAccount => "CreateGovCloudAccount",
            Self::DescribeAccount => "DescribeAccount",
            Self::DescribeCreateAccountStatus => "DescribeCreateAccountStatus",
            Self::ListAccounts => "ListAccounts",
            Self::ListAccountsForParent => "ListAccountsForParent",
            Self::ListCreateAccountStatus => "ListCreateAccountStatus",
            Self::MoveAccount => "MoveAccount",
            Self::RemoveAccountFromOrganization => "RemoveAccountFromOrganization",
            Self::CreateOrganizationalUnit => "CreateOrganizationalUnit",
            Self::DeleteOrganizationalUnit => "DeleteOrganizationalUnit",
            Self::DescribeOrganizationalUnit => "DescribeOrganizationalUnit",
            Self::UpdateOrganizationalUnit => "UpdateOrganizationalUnit",
            Self::ListChildren => "ListChildren",
            Self::ListOrganizationalUnitsForParent => "ListOrganizationalUnitsForParent",
            Self::ListParents => "ListParents",
            Self::ListRoots => "ListRoots",
            Self::AttachPolicy => "AttachPolicy",
            Self::CreatePolicy => "CreatePolicy",
            Self::DeletePolicy => "DeletePolicy",
            Self::DescribePolicy => "DescribePolicy",
            Self::DescribeEffectivePolicy => "DescribeEffectivePolicy",
            Self::DetachPolicy => "DetachPolicy",
            Self::DisablePolicyType => "DisablePolicyType",
            Self::EnablePolicyType => "EnablePolicyType",
            Self::ListPolicies => "ListPolicies",
            Self::ListPoliciesForTarget => "ListPoliciesForTarget",
            Self::ListTargetsForPolicy => "ListTargetsForPolicy",
            Self::UpdatePolicy => "UpdatePolicy",
            Self::EnableAwsServiceAccess => "EnableAWSServiceAccess",
            Self::DisableAwsServiceAccess => "DisableAWSServiceAccess",
            Self::ListAwsServiceAccessForOrganization => "ListAWSServiceAccessForOrganization",
            Self::RegisterDelegatedAdministrator => "RegisterDelegatedAdministrator",
            Self::DeregisterDelegatedAdministrator => "DeregisterDelegatedAdministrator",
            Self::ListDelegatedAdministrators => "ListDelegatedAdministrators",
            Self::ListDelegatedServicesForAccount => "ListDelegatedServicesForAccount",
            Self::ListTagsForResource => "ListTagsForResource",
            Self::TagResource => "TagResource",
            Self::UntagResource => "UntagResource",
        }
    }

    /// Parse an operation name string into an `OrganizationsOperation`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "AcceptHandshake" => Some(Self::AcceptHandshake),
            "CancelHandshake" => Some(Self::CancelHandshake),
            "DeclineHandshake" => Some(Self::DeclineHandshake),
            "DescribeHandshake" => Some(Self::DescribeHandshake),
            "EnableAllFeatures" => Some(Self::EnableAllFeatures),
            "InviteAccountToOrganization" => Some(Self::InviteAccountToOrganization),
            "ListHandshakesForAccount" => Some(Self::ListHandshakesForAccount),
            "ListHandshakesForOrganization" => Some(Self::ListHandshakesForOrganization),
            "CreateOrganization" => Some(Self::CreateOrganization),
            "DeleteOrganization" => Some(Self::DeleteOrganization),
            "DescribeOrganization" => Some(Self::DescribeOrganization),
            "LeaveOrganization" => Some(Self::LeaveOrganization),
            "CreateAccount" => Some(Self::CreateAccount),
            "CreateGovCloudAccount" => Some(Self::CreateGovCloudAccount),
            "DescribeAccount" => Some(Self::DescribeAccount),
            "DescribeCreateAccountStatus" => Some(Self::DescribeCreateAccountStatus),
            "ListAccounts" => Some(Self::ListAccounts),
            "ListAccountsForParent" => Some(Self::ListAccountsForParent),
            "ListCreateAccountStatus" => Some(Self::ListCreateAccountStatus),
            "MoveAccount" => Some(Self::MoveAccount),
            "RemoveAccountFromOrganization" => Some(Self::RemoveAccountFromOrganization),
            "CreateOrganizationalUnit" => Some(Self::CreateOrganizationalUnit),
            "DeleteOrganizationalUnit" => Some(Self::DeleteOrganizationalUnit),
            "DescribeOrganizationalUnit" => Some(Self::DescribeOrganizationalUnit),
            "UpdateOrganizationalUnit" => Some(Self::UpdateOrganizationalUnit),
            "ListChildren" => Some(Self::ListChildren),
            "ListOrganizationalUnitsForParent" => Some(Self::ListOrganizationalUnitsForParent),
            "ListParents" => Some(Self::ListParents),
            "ListRoots" => Some(Self::ListRoots),
            "AttachPolicy" => Some(Self::AttachPolicy),
            "CreatePolicy" => Some(Self::CreatePolicy),
            "DeletePolicy" => Some(Self::DeletePolicy),
            "DescribePolicy" => Some(Self::DescribePolicy),
            "DescribeEffectivePolicy" => Some(Self::DescribeEffectivePolicy),
            "DetachPolicy" => Some(Self::DetachPolicy),
            "DisablePolicyType" => Some(Self::DisablePolicyType),
            "EnablePolicyType" => Some(Self::EnablePolicyType),
            "ListPolicies" => Some(Self::ListPolicies),
            "ListPoliciesForTarget" => Some(Self::ListPoliciesForTarget),
            "ListTargetsForPolicy" => Some(Self::ListTargetsForPolicy),
            "UpdatePolicy" => Some(Self::UpdatePolicy),
            "EnableAWSServiceAccess" => Some(Self::EnableAwsServiceAccess),
            "DisableAWSServiceAccess" => Some(Self::DisableAwsServiceAccess),
            "ListAWSServiceAccessForOrganization" => Some(Self::ListAwsServiceAccessForOrganization),
            "RegisterDelegatedAdministrator" => Some(Self::RegisterDelegatedAdministrator),
            "DeregisterDelegatedAdministrator" => Some(Self::DeregisterDelegatedAdministrator),
            "ListDelegatedAdministrators" => Some(Self::ListDelegatedAdministrators),
            "ListDelegatedServicesForAccount" => Some(Self::ListDelegatedServicesForAccount),
            "ListTagsForResource" => Some(Self::ListTagsForResource),
            "TagResource" => Some(Self::TagResource),
            "UntagResource" => Some(Self::UntagResource),
            _ => None,
        }
    }

    /// Returns the `X-Amz-Target` header value for this operation.
    #[must_use]
    pub fn target(&self) -> String {
        format!("{TARGET_PREFIX}{}", self.as_str())
    }

    /// Parse an `X-Amz-Target` header value.
    ///
    /// Returns `None` when the prefix is not this service's or the operation
    /// is unknown.
    #[must_use]
    pub fn from_target(target: &str) -> Option<Self> {
        target
            .strip_prefix(TARGET_PREFIX)
            .and_then(Self::from_name)
    }

    /// Whether the operation returns a result body.
    ///
    /// Operations without one decode to `()`.
    #[must_use]
    pub fn has_output(&self) -> bool {
        !matches!(
            self,
            Self::AttachPolicy
                | Self::DeleteOrganization
                | Self::DeleteOrganizationalUnit
                | Self::DeletePolicy
                | Self::DeregisterDelegatedAdministrator
                | Self::DetachPolicy
                | Self::DisableAwsServiceAccess
                | Self::EnableAwsServiceAccess
                | Self::LeaveOrganization
                | Self::MoveAccount
                | Self::RegisterDelegatedAdministrator
                | Self::RemoveAccountFromOrganization
                | Self::TagResource
                | Self::UntagResource
        )
    }

    /// Whether the operation is paginated with `NextToken`.
    #[must_use]
    pub fn is_paginated(&self) -> bool {
        self.as_str().starts_with("List")
    }
}

impl fmt::Display for OrganizationsOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
