//! AWS Organizations output types.
//!
//! Operations that return no data (`AttachPolicy`, `DeleteOrganization`,
//! `MoveAccount`, ...) have no output struct here; they decode to `()`.
//!
//! List outputs carry `NextToken` when more results are available. An absent
//! list member deserializes to an empty `Vec`.

use serde::{Deserialize, Serialize};

use crate::types::{
    Account, Child, CreateAccountStatus, DelegatedAdministrator, DelegatedService,
    EffectivePolicy, EnabledServicePrincipal, Handshake, Organization, OrganizationalUnit, Parent,
    Policy, PolicySummary, PolicyTargetSummary, Root, Tag,
};

// ---------------------------------------------------------------------------
// Handshakes
// ---------------------------------------------------------------------------

/// Output for the `AcceptHandshake` operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AcceptHandshakeOutput {
    /// The accepted handshake.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handshake: Option<Handshake>,
}

/// Output for the `CancelHandshake` operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CancelHandshakeOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handshake: Option<Handshake>,
}

/// Output for the `DeclineHandshake` operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeclineHandshakeOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handshake: Option<Handshake>,
}

/// Output for the `DescribeHandshake` operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeHandshakeOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handshake: Option<Handshake>,
}

/// Output for the `EnableAllFeatures` operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EnableAllFeaturesOutput {
    /// The `ENABLE_ALL_FEATURES` handshake sent to invited member accounts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handshake: Option<Handshake>,
}

/// Output for the `InviteAccountToOrganization` operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InviteAccountToOrganizationOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handshake: Option<Handshake>,
}

/// Output for the `ListHandshakesForAccount` operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListHandshakesForAccountOutput {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub handshakes: Vec<Handshake>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// Output for the `ListHandshakesForOrganization` operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListHandshakesForOrganizationOutput {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub handshakes: Vec<Handshake>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

// ---------------------------------------------------------------------------
// Organization lifecycle
// ---------------------------------------------------------------------------

/// Output for the `CreateOrganization` operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateOrganizationOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<Organization>,
}

/// Output for the `DescribeOrganization` operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeOrganizationOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<Organization>,
}

// ---------------------------------------------------------------------------
// Accounts
// ---------------------------------------------------------------------------

/// Output for the `CreateAccount` operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateAccountOutput {
    /// Initial status of the asynchronous request. Poll with
    /// `DescribeCreateAccountStatus` using `CreateAccountStatus.Id`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_account_status: Option<CreateAccountStatus>,
}

/// Output for the `CreateGovCloudAccount` operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateGovCloudAccountOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_account_status: Option<CreateAccountStatus>,
}

/// Output for the `DescribeAccount` operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeAccountOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<Account>,
}

/// Output for the `DescribeCreateAccountStatus` operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeCreateAccountStatusOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_account_status: Option<CreateAccountStatus>,
}

/// Output for the `ListAccounts` operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListAccountsOutput {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub accounts: Vec<Account>,

    /// Set when more accounts are available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// Output for the `ListAccountsForParent` operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListAccountsForParentOutput {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub accounts: Vec<Account>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// Output for the `ListCreateAccountStatus` operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListCreateAccountStatusOutput {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub create_account_statuses: Vec<CreateAccountStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

// ---------------------------------------------------------------------------
// Organizational units and hierarchy
// ---------------------------------------------------------------------------

/// Output for the `CreateOrganizationalUnit` operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateOrganizationalUnitOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organizational_unit: Option<OrganizationalUnit>,
}

/// Output for the `DescribeOrganizationalUnit` operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeOrganizationalUnitOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organizational_unit: Option<OrganizationalUnit>,
}

/// Output for the `UpdateOrganizationalUnit` operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateOrganizationalUnitOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organizational_unit: Option<OrganizationalUnit>,
}

/// Output for the `ListChildren` operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListChildrenOutput {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Child>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// Output for the `ListOrganizationalUnitsForParent` operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListOrganizationalUnitsForParentOutput {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub organizational_units: Vec<OrganizationalUnit>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// Output for the `ListParents` operation.
///
/// In the current service model an account or OU has exactly one parent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListParentsOutput {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parents: Vec<Parent>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// Output for the `ListRoots` operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListRootsOutput {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roots: Vec<Root>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

// ---------------------------------------------------------------------------
// Policies
// ---------------------------------------------------------------------------

/// Output for the `CreatePolicy` operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreatePolicyOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy: Option<Policy>,
}

/// Output for the `DescribePolicy` operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribePolicyOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy: Option<Policy>,
}

/// Output for the `UpdatePolicy` operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdatePolicyOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy: Option<Policy>,
}

/// Output for the `DescribeEffectivePolicy` operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeEffectivePolicyOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_policy: Option<EffectivePolicy>,
}

/// Output for the `DisablePolicyType` operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DisablePolicyTypeOutput {
    /// The root with its updated list of enabled policy types.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<Root>,
}

/// Output for the `EnablePolicyType` operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EnablePolicyTypeOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<Root>,
}

/// Output for the `ListPolicies` operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListPoliciesOutput {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub policies: Vec<PolicySummary>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// Output for the `ListPoliciesForTarget` operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListPoliciesForTargetOutput {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub policies: Vec<PolicySummary>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// Output for the `ListTargetsForPolicy` operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListTargetsForPolicyOutput {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub targets: Vec<PolicyTargetSummary>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

// ---------------------------------------------------------------------------
// Service access and delegated administrators
// ---------------------------------------------------------------------------

/// Output for the `ListAWSServiceAccessForOrganization` operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListAwsServiceAccessForOrganizationOutput {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub enabled_service_principals: Vec<EnabledServicePrincipal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// Output for the `ListDelegatedAdministrators` operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListDelegatedAdministratorsOutput {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub delegated_administrators: Vec<DelegatedAdministrator>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// Output for the `ListDelegatedServicesForAccount` operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListDelegatedServicesForAccountOutput {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub delegated_services: Vec<DelegatedService>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

// ---------------------------------------------------------------------------
// Tagging
// ---------------------------------------------------------------------------

/// Output for the `ListTagsForResource` operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListTagsForResourceOutput {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AccountJoinedMethod, AccountStatus, CreateAccountState};

    #[test]
    fn test_should_deserialize_describe_account() {
        let json = r#"{
            "Account": {
                "Id": "555555555555",
                "Arn": "arn:aws:organizations::111111111111:account/o-exampleorgid/555555555555",
                "Email": "anika@example.com",
                "Name": "Beta Account",
                "Status": "ACTIVE",
                "JoinedMethod": "INVITED",
                "JoinedTimestamp": 1481835741.044
            }
        }"#;
        let output: DescribeAccountOutput =
            serde_json::from_str(json).expect("deserialize DescribeAccountOutput");
        let account = output.account.expect("account present");
        assert_eq!(account.id.as_deref(), Some("555555555555"));
        assert_eq!(account.status, Some(AccountStatus::Active));
        assert_eq!(account.joined_method, Some(AccountJoinedMethod::Invited));
        let joined = account.joined_timestamp.expect("joined timestamp");
        assert_eq!(joined.timestamp(), 1_481_835_741);
        assert_eq!(joined.timestamp_subsec_millis(), 44);
    }

    #[test]
    fn test_should_default_missing_list_to_empty() {
        let output: ListRootsOutput = serde_json::from_str("{}").expect("deserialize empty");
        assert!(output.roots.is_empty());
        assert!(output.next_token.is_none());
    }

    #[test]
    fn test_should_omit_empty_list_member() {
        let output = ListAccountsOutput::default();
        let json = serde_json::to_string(&output).expect("serialize ListAccountsOutput");
        assert_eq!(json, "{}");

        let paged = ListAccountsOutput {
            next_token: Some("AAAA".to_owned()),
            ..ListAccountsOutput::default()
        };
        let json = serde_json::to_string(&paged).expect("serialize ListAccountsOutput");
        assert_eq!(json, r#"{"NextToken":"AAAA"}"#);
    }

    #[test]
    fn test_should_deserialize_create_account_status() {
        let json = r#"{
            "CreateAccountStatus": {
                "Id": "car-examplecreateaccountrequestid111",
                "State": "IN_PROGRESS"
            }
        }"#;
        let output: CreateAccountOutput =
            serde_json::from_str(json).expect("deserialize CreateAccountOutput");
        let status = output.create_account_status.expect("status present");
        assert_eq!(status.state, Some(CreateAccountState::InProgress));
        assert!(status.account_id.is_none());
        assert!(status.failure_reason.is_none());
    }

    #[test]
    fn test_should_ignore_unknown_members() {
        let json = r#"{"Policies":[],"NextToken":"t","SomethingNew":{"A":1}}"#;
        let output: ListPoliciesOutput =
            serde_json::from_str(json).expect("deserialize ListPoliciesOutput");
        assert_eq!(output.next_token.as_deref(), Some("t"));
    }
}
