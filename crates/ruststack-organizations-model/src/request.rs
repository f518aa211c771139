//! Binding of each input shape to its operation and output shape.
//!
//! [`OrganizationsRequest`] lets the codec encode an input and decode the
//! matching output without the caller naming the operation twice.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::input::*;
use crate::operations::OrganizationsOperation;
use crate::output::*;

/// An input shape of a specific operation.
pub trait OrganizationsRequest: Serialize {
    /// The operation this input is sent to.
    const OPERATION: OrganizationsOperation;

    /// The decoded result. `()` for operations without a result body.
    type Output: DeserializeOwned + Default + 'static;
}

macro_rules! bind_request {
    ($($input:ident => $op:ident, $output:ty;)+) => {
        $(
            impl OrganizationsRequest for $input {
                const OPERATION: OrganizationsOperation = OrganizationsOperation::$op;
                type Output = $output;
            }
        )+
    };
}

bind_request! {
    AcceptHandshakeInput => AcceptHandshake, AcceptHandshakeOutput;
    CancelHandshakeInput => CancelHandshake, CancelHandshakeOutput;
    DeclineHandshakeInput => DeclineHandshake, DeclineHandshakeOutput;
    DescribeHandshakeInput => DescribeHandshake, DescribeHandshakeOutput;
    EnableAllFeaturesInput => EnableAllFeatures, EnableAllFeaturesOutput;
    InviteAccountToOrganizationInput => InviteAccountToOrganization, InviteAccountToOrganizationOutput;
    ListHandshakesForAccountInput => ListHandshakesForAccount, ListHandshakesForAccountOutput;
    ListHandshakesForOrganizationInput => ListHandshakesForOrganization, ListHandshakesForOrganizationOutput;
    CreateOrganizationInput => CreateOrganization, CreateOrganizationOutput;
    DeleteOrganizationInput => DeleteOrganization, ();
    DescribeOrganizationInput => DescribeOrganization, DescribeOrganizationOutput;
    LeaveOrganizationInput => LeaveOrganization, ();
    CreateAccountInput => CreateAccount, CreateAccountOutput;
    CreateGovCloudAccountInput => CreateGovCloudAccount, CreateGovCloudAccountOutput;
    DescribeAccountInput => DescribeAccount, DescribeAccountOutput;
    DescribeCreateAccountStatusInput => DescribeCreateAccountStatus, DescribeCreateAccountStatusOutput;
    ListAccountsInput => ListAccounts, ListAccountsOutput;
    ListAccountsForParentInput => ListAccountsForParent, ListAccountsForParentOutput;
    ListCreateAccountStatusInput => ListCreateAccountStatus, ListCreateAccountStatusOutput;
    MoveAccountInput => MoveAccount, ();
    RemoveAccountFromOrganizationInput => RemoveAccountFromOrganization, ();
    CreateOrganizationalUnitInput => CreateOrganizationalUnit, CreateOrganizationalUnitOutput;
    DeleteOrganizationalUnitInput => DeleteOrganizationalUnit, ();
    DescribeOrganizationalUnitInput => DescribeOrganizationalUnit, DescribeOrganizationalUnitOutput;
    UpdateOrganizationalUnitInput => UpdateOrganizationalUnit, UpdateOrganizationalUnitOutput;
    ListChildrenInput => ListChildren, ListChildrenOutput;
    ListOrganizationalUnitsForParentInput => ListOrganizationalUnitsForParent, ListOrganizationalUnitsForParentOutput;
    ListParentsInput => ListParents, ListParentsOutput;
    ListRootsInput => ListRoots, ListRootsOutput;
    AttachPolicyInput => AttachPolicy, ();
    CreatePolicyInput => CreatePolicy, CreatePolicyOutput;
    DeletePolicyInput => DeletePolicy, ();
    DescribePolicyInput => DescribePolicy, DescribePolicyOutput;
    DescribeEffectivePolicyInput => DescribeEffectivePolicy, DescribeEffectivePolicyOutput;
    DetachPolicyInput => DetachPolicy, ();
    DisablePolicyTypeInput => DisablePolicyType, DisablePolicyTypeOutput;
    EnablePolicyTypeInput => EnablePolicyType, EnablePolicyTypeOutput;
    ListPoliciesInput => ListPolicies, ListPoliciesOutput;
    ListPoliciesForTargetInput => ListPoliciesForTarget, ListPoliciesForTargetOutput;
    ListTargetsForPolicyInput => ListTargetsForPolicy, ListTargetsForPolicyOutput;
    UpdatePolicyInput => UpdatePolicy, UpdatePolicyOutput;
    EnableAwsServiceAccessInput => EnableAwsServiceAccess, ();
    DisableAwsServiceAccessInput => DisableAwsServiceAccess, ();
    ListAwsServiceAccessForOrganizationInput => ListAwsServiceAccessForOrganization, ListAwsServiceAccessForOrganizationOutput;
    RegisterDelegatedAdministratorInput => RegisterDelegatedAdministrator, ();
    DeregisterDelegatedAdministratorInput => DeregisterDelegatedAdministrator, ();
    ListDelegatedAdministratorsInput => ListDelegatedAdministrators, ListDelegatedAdministratorsOutput;
    ListDelegatedServicesForAccountInput => ListDelegatedServicesForAccount, ListDelegatedServicesForAccountOutput;
    ListTagsForResourceInput => ListTagsForResource, ListTagsForResourceOutput;
    TagResourceInput => TagResource, ();
    UntagResourceInput => UntagResource, ();
}
