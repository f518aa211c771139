//! Shared AWS Organizations types.
//!
//! All structs follow the `awsJson1_1` wire format with `PascalCase` member
//! names. Optional members are omitted when `None` and empty lists are
//! omitted, so a default value serializes to `{}`.
//!
//! Enumerations are open: the service may return values this model does not
//! know yet, which are preserved verbatim in an `Unknown` variant rather than
//! failing deserialization.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Declare an open string enumeration with its wire values.
///
/// Generates `as_str`, `is_known`, `VALUES`, `Display`, `FromStr`,
/// `From<&str>`, `From<String>` and a serde representation as the bare
/// wire string.
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $wire:literal,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
            /// A value not known to this version of the model.
            Unknown(String),
        }

        impl $name {
            /// All wire values known to this version of the model.
            pub const VALUES: &'static [&'static str] = &[$($wire),+];

            /// Returns the wire-format string.
            #[must_use]
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $wire,)+
                    Self::Unknown(s) => s.as_str(),
                }
            }

            /// Returns `false` for values outside the known set.
            #[must_use]
            pub fn is_known(&self) -> bool {
                !matches!(self, Self::Unknown(_))
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                match s {
                    $($wire => Self::$variant,)+
                    other => Self::Unknown(other.to_owned()),
                }
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                match s.as_str() {
                    $($wire => Self::$variant,)+
                    _ => Self::Unknown(s),
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self::from(s))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                String::deserialize(deserializer).map(Self::from)
            }
        }
    };
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

string_enum! {
    /// Reason attached to an `AccessDeniedForDependencyException`.
    pub enum AccessDeniedForDependencyExceptionReason {
        /// Organizations could not create the required service-linked role.
        AccessDeniedDuringCreateServiceLinkedRole => "ACCESS_DENIED_DURING_CREATE_SERVICE_LINKED_ROLE",
    }
}

string_enum! {
    /// How an account became a member of the organization.
    pub enum AccountJoinedMethod {
        /// The account accepted an invitation.
        Invited => "INVITED",
        /// The account was created by the organization.
        Created => "CREATED",
    }
}

string_enum! {
    /// Status of an account in the organization.
    pub enum AccountStatus {
        /// Active.
        Active => "ACTIVE",
        /// Suspended.
        Suspended => "SUSPENDED",
    }
}

string_enum! {
    /// Type of handshake: what happens when the recipient accepts it.
    pub enum ActionType {
        /// Request to join an organization. Sent from the master account to
        /// non-member accounts only.
        Invite => "INVITE",
        /// Request to enable all features. Sent from the master account to
        /// invited member accounts only.
        EnableAllFeatures => "ENABLE_ALL_FEATURES",
        /// Sent to the master account once every member account approved
        /// `ENABLE_ALL_FEATURES`.
        ApproveAllFeatures => "APPROVE_ALL_FEATURES",
        /// Request to create the Organizations service-linked role.
        AddOrganizationsServiceLinkedRole => "ADD_ORGANIZATIONS_SERVICE_LINKED_ROLE",
    }
}

string_enum! {
    /// Kind of child entity under a parent.
    pub enum ChildType {
        /// Member account.
        Account => "ACCOUNT",
        /// Organizational unit.
        OrganizationalUnit => "ORGANIZATIONAL_UNIT",
    }
}

string_enum! {
    /// Reason attached to a `ConstraintViolationException`.
    pub enum ConstraintViolationExceptionReason {
        AccountNumberLimitExceeded => "ACCOUNT_NUMBER_LIMIT_EXCEEDED",
        HandshakeRateLimitExceeded => "HANDSHAKE_RATE_LIMIT_EXCEEDED",
        OuNumberLimitExceeded => "OU_NUMBER_LIMIT_EXCEEDED",
        OuDepthLimitExceeded => "OU_DEPTH_LIMIT_EXCEEDED",
        PolicyNumberLimitExceeded => "POLICY_NUMBER_LIMIT_EXCEEDED",
        PolicyContentLimitExceeded => "POLICY_CONTENT_LIMIT_EXCEEDED",
        MaxPolicyTypeAttachmentLimitExceeded => "MAX_POLICY_TYPE_ATTACHMENT_LIMIT_EXCEEDED",
        MinPolicyTypeAttachmentLimitExceeded => "MIN_POLICY_TYPE_ATTACHMENT_LIMIT_EXCEEDED",
        AccountCannotLeaveOrganization => "ACCOUNT_CANNOT_LEAVE_ORGANIZATION",
        AccountCannotLeaveWithoutEula => "ACCOUNT_CANNOT_LEAVE_WITHOUT_EULA",
        AccountCannotLeaveWithoutPhoneVerification => "ACCOUNT_CANNOT_LEAVE_WITHOUT_PHONE_VERIFICATION",
        MasterAccountPaymentInstrumentRequired => "MASTER_ACCOUNT_PAYMENT_INSTRUMENT_REQUIRED",
        MemberAccountPaymentInstrumentRequired => "MEMBER_ACCOUNT_PAYMENT_INSTRUMENT_REQUIRED",
        AccountCreationRateLimitExceeded => "ACCOUNT_CREATION_RATE_LIMIT_EXCEEDED",
        MasterAccountAddressDoesNotMatchMarketplace => "MASTER_ACCOUNT_ADDRESS_DOES_NOT_MATCH_MARKETPLACE",
        MasterAccountMissingContactInfo => "MASTER_ACCOUNT_MISSING_CONTACT_INFO",
        MasterAccountNotGovcloudEnabled => "MASTER_ACCOUNT_NOT_GOVCLOUD_ENABLED",
        OrganizationNotInAllFeaturesMode => "ORGANIZATION_NOT_IN_ALL_FEATURES_MODE",
        CreateOrganizationInBillingModeUnsupportedRegion => "CREATE_ORGANIZATION_IN_BILLING_MODE_UNSUPPORTED_REGION",
        EmailVerificationCodeExpired => "EMAIL_VERIFICATION_CODE_EXPIRED",
        WaitPeriodActive => "WAIT_PERIOD_ACTIVE",
        MaxTagLimitExceeded => "MAX_TAG_LIMIT_EXCEEDED",
        TagPolicyViolation => "TAG_POLICY_VIOLATION",
        MaxDelegatedAdministratorsForServiceLimitExceeded => "MAX_DELEGATED_ADMINISTRATORS_FOR_SERVICE_LIMIT_EXCEEDED",
        CannotRegisterMasterAsDelegatedAdministrator => "CANNOT_REGISTER_MASTER_AS_DELEGATED_ADMINISTRATOR",
        CannotRemoveDelegatedAdministratorFromOrg => "CANNOT_REMOVE_DELEGATED_ADMINISTRATOR_FROM_ORG",
        DelegatedAdministratorExistsForThisService => "DELEGATED_ADMINISTRATOR_EXISTS_FOR_THIS_SERVICE",
        MasterAccountMissingBusinessLicense => "MASTER_ACCOUNT_MISSING_BUSINESS_LICENSE",
    }
}

string_enum! {
    /// Why an account creation request failed.
    pub enum CreateAccountFailureReason {
        AccountLimitExceeded => "ACCOUNT_LIMIT_EXCEEDED",
        EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
        InvalidAddress => "INVALID_ADDRESS",
        InvalidEmail => "INVALID_EMAIL",
        ConcurrentAccountModification => "CONCURRENT_ACCOUNT_MODIFICATION",
        InternalFailure => "INTERNAL_FAILURE",
        GovcloudAccountAlreadyExists => "GOVCLOUD_ACCOUNT_ALREADY_EXISTS",
    }
}

string_enum! {
    /// Progress of an asynchronous account creation request.
    pub enum CreateAccountState {
        /// Still running.
        InProgress => "IN_PROGRESS",
        /// The account exists.
        Succeeded => "SUCCEEDED",
        /// See `FailureReason`.
        Failed => "FAILED",
    }
}

string_enum! {
    /// Policy types that produce an effective policy for a target.
    pub enum EffectivePolicyType {
        TagPolicy => "TAG_POLICY",
        BackupPolicy => "BACKUP_POLICY",
        AiservicesOptOutPolicy => "AISERVICES_OPT_OUT_POLICY",
    }
}

string_enum! {
    /// Reason attached to a `HandshakeConstraintViolationException`.
    pub enum HandshakeConstraintViolationExceptionReason {
        AccountNumberLimitExceeded => "ACCOUNT_NUMBER_LIMIT_EXCEEDED",
        HandshakeRateLimitExceeded => "HANDSHAKE_RATE_LIMIT_EXCEEDED",
        AlreadyInAnOrganization => "ALREADY_IN_AN_ORGANIZATION",
        OrganizationAlreadyHasAllFeatures => "ORGANIZATION_ALREADY_HAS_ALL_FEATURES",
        InviteDisabledDuringEnableAllFeatures => "INVITE_DISABLED_DURING_ENABLE_ALL_FEATURES",
        PaymentInstrumentRequired => "PAYMENT_INSTRUMENT_REQUIRED",
        OrganizationFromDifferentSellerOfRecord => "ORGANIZATION_FROM_DIFFERENT_SELLER_OF_RECORD",
        OrganizationMembershipChangeRateLimitExceeded => "ORGANIZATION_MEMBERSHIP_CHANGE_RATE_LIMIT_EXCEEDED",
    }
}

string_enum! {
    /// Kind of identifier carried by a handshake party.
    pub enum HandshakePartyType {
        /// A 12-digit account ID.
        Account => "ACCOUNT",
        /// An organization ID.
        Organization => "ORGANIZATION",
        /// An email address.
        Email => "EMAIL",
    }
}

string_enum! {
    /// Kind of information carried by a handshake resource.
    pub enum HandshakeResourceType {
        Account => "ACCOUNT",
        Organization => "ORGANIZATION",
        OrganizationFeatureSet => "ORGANIZATION_FEATURE_SET",
        Email => "EMAIL",
        MasterEmail => "MASTER_EMAIL",
        MasterName => "MASTER_NAME",
        Notes => "NOTES",
        ParentHandshake => "PARENT_HANDSHAKE",
    }
}

string_enum! {
    /// Lifecycle state of a handshake.
    ///
    /// Handshakes that are `CANCELED`, `ACCEPTED` or `DECLINED` are listed
    /// for 30 days after entering that state.
    pub enum HandshakeState {
        /// Sent to multiple recipients, not all of whom have responded.
        Requested => "REQUESTED",
        /// All recipients responded; the originator can complete the action.
        Open => "OPEN",
        /// Canceled by the originating account.
        Canceled => "CANCELED",
        /// Accepted by the recipient.
        Accepted => "ACCEPTED",
        /// Declined by the recipient.
        Declined => "DECLINED",
        /// No response before the expiration time (15 days).
        Expired => "EXPIRED",
    }
}

string_enum! {
    /// Whether IAM users of a new account may access billing information.
    pub enum IamUserAccessToBilling {
        Allow => "ALLOW",
        Deny => "DENY",
    }
}

string_enum! {
    /// Reason attached to an `InvalidInputException`.
    pub enum InvalidInputExceptionReason {
        InvalidPartyTypeTarget => "INVALID_PARTY_TYPE_TARGET",
        InvalidSyntaxOrganizationArn => "INVALID_SYNTAX_ORGANIZATION_ARN",
        InvalidSyntaxPolicyId => "INVALID_SYNTAX_POLICY_ID",
        InvalidEnum => "INVALID_ENUM",
        InvalidEnumPolicyType => "INVALID_ENUM_POLICY_TYPE",
        InvalidListMember => "INVALID_LIST_MEMBER",
        MaxLengthExceeded => "MAX_LENGTH_EXCEEDED",
        MaxValueExceeded => "MAX_VALUE_EXCEEDED",
        MinLengthExceeded => "MIN_LENGTH_EXCEEDED",
        MinValueExceeded => "MIN_VALUE_EXCEEDED",
        ImmutablePolicy => "IMMUTABLE_POLICY",
        InvalidPattern => "INVALID_PATTERN",
        InvalidPatternTargetId => "INVALID_PATTERN_TARGET_ID",
        InputRequired => "INPUT_REQUIRED",
        InvalidNextToken => "INVALID_NEXT_TOKEN",
        MaxLimitExceededFilter => "MAX_LIMIT_EXCEEDED_FILTER",
        MovingAccountBetweenDifferentRoots => "MOVING_ACCOUNT_BETWEEN_DIFFERENT_ROOTS",
        InvalidFullNameTarget => "INVALID_FULL_NAME_TARGET",
        UnrecognizedServicePrincipal => "UNRECOGNIZED_SERVICE_PRINCIPAL",
        InvalidRoleName => "INVALID_ROLE_NAME",
        InvalidSystemTagsParameter => "INVALID_SYSTEM_TAGS_PARAMETER",
        TargetNotSupported => "TARGET_NOT_SUPPORTED",
        DuplicateTagKey => "DUPLICATE_TAG_KEY",
    }
}

string_enum! {
    /// Feature set enabled for an organization.
    pub enum OrganizationFeatureSet {
        /// All features, including policy management.
        All => "ALL",
        /// Consolidated billing only.
        ConsolidatedBilling => "CONSOLIDATED_BILLING",
    }
}

string_enum! {
    /// Kind of parent entity.
    pub enum ParentType {
        Root => "ROOT",
        OrganizationalUnit => "ORGANIZATIONAL_UNIT",
    }
}

string_enum! {
    /// Kind of policy.
    pub enum PolicyType {
        ServiceControlPolicy => "SERVICE_CONTROL_POLICY",
        TagPolicy => "TAG_POLICY",
        BackupPolicy => "BACKUP_POLICY",
        AiservicesOptOutPolicy => "AISERVICES_OPT_OUT_POLICY",
    }
}

string_enum! {
    /// Whether a policy type is enabled in a root.
    pub enum PolicyTypeStatus {
        Enabled => "ENABLED",
        PendingEnable => "PENDING_ENABLE",
        PendingDisable => "PENDING_DISABLE",
    }
}

string_enum! {
    /// Kind of entity a policy can be attached to.
    pub enum TargetType {
        Account => "ACCOUNT",
        OrganizationalUnit => "ORGANIZATIONAL_UNIT",
        Root => "ROOT",
    }
}

// ---------------------------------------------------------------------------
// Accounts
// ---------------------------------------------------------------------------

/// A member account of an organization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Account {
    /// The 12-digit account ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// The account ARN.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,

    /// The email address associated with the account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// The friendly name of the account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The status of the account in the organization.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<AccountStatus>,

    /// How the account joined the organization.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub joined_method: Option<AccountJoinedMethod>,

    /// When the account became part of the organization.
    #[serde(
        default,
        with = "crate::timestamp::epoch_seconds_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub joined_timestamp: Option<DateTime<Utc>>,
}

/// Status of an asynchronous `CreateAccount` or `CreateGovCloudAccount`
/// request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateAccountStatus {
    /// The request ID (`car-` followed by 8 to 32 lowercase letters or digits).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<CreateAccountState>,

    #[serde(
        default,
        with = "crate::timestamp::epoch_seconds_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub requested_timestamp: Option<DateTime<Utc>>,

    #[serde(
        default,
        with = "crate::timestamp::epoch_seconds_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub completed_timestamp: Option<DateTime<Utc>>,

    /// The ID of the new account, once the request succeeded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,

    /// The ID of the paired GovCloud account, for `CreateGovCloudAccount`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gov_cloud_account_id: Option<String>,

    /// Set when `state` is `FAILED`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<CreateAccountFailureReason>,
}

/// A member account registered as delegated administrator for a service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DelegatedAdministrator {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<AccountStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub joined_method: Option<AccountJoinedMethod>,

    #[serde(
        default,
        with = "crate::timestamp::epoch_seconds_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub joined_timestamp: Option<DateTime<Utc>>,

    /// When the account was made a delegated administrator.
    #[serde(
        default,
        with = "crate::timestamp::epoch_seconds_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub delegation_enabled_date: Option<DateTime<Utc>>,
}

/// A service for which an account is a delegated administrator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DelegatedService {
    /// The service principal, for example `guardduty.amazonaws.com`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_principal: Option<String>,

    #[serde(
        default,
        with = "crate::timestamp::epoch_seconds_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub delegation_enabled_date: Option<DateTime<Utc>>,
}

/// An AWS service integrated with the organization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EnabledServicePrincipal {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_principal: Option<String>,

    /// When the service was enabled for integration.
    #[serde(
        default,
        with = "crate::timestamp::epoch_seconds_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub date_enabled: Option<DateTime<Utc>>,
}

// ---------------------------------------------------------------------------
// Handshakes
// ---------------------------------------------------------------------------

/// Information exchanged between an originator and a recipient account to
/// establish a relationship, such as an invitation to join an organization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Handshake {
    /// The handshake ID (`h-` followed by 8 to 32 lowercase letters or digits).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// The handshake ARN.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,

    /// The two accounts participating in the handshake.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parties: Vec<HandshakeParty>,

    /// The current state of the handshake.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<HandshakeState>,

    /// When the handshake request was made.
    #[serde(
        default,
        with = "crate::timestamp::epoch_seconds_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub requested_timestamp: Option<DateTime<Utc>>,

    /// When the handshake expires if the recipient has not responded.
    #[serde(
        default,
        with = "crate::timestamp::epoch_seconds_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub expiration_timestamp: Option<DateTime<Utc>>,

    /// What happens when the recipient accepts the handshake.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<ActionType>,

    /// Additional information needed to process the handshake.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<HandshakeResource>,
}

/// Filter for `ListHandshakesForAccount` and `ListHandshakesForOrganization`.
///
/// Only one of the two members may be set per request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HandshakeFilter {
    /// Only handshakes of this type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_type: Option<ActionType>,

    /// Only handshakes that are children of this handshake.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_handshake_id: Option<String>,
}

/// A participant in a handshake.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HandshakeParty {
    /// The account ID, organization ID, or email address of the party.
    pub id: String,

    /// What kind of identifier `id` holds.
    #[serde(rename = "Type")]
    pub r#type: HandshakePartyType,
}

impl HandshakeParty {
    /// Create a party from an identifier and its kind.
    #[must_use]
    pub fn new(id: impl Into<String>, r#type: HandshakePartyType) -> Self {
        Self {
            id: id.into(),
            r#type,
        }
    }
}

/// A piece of information attached to a handshake. Resources nest: an
/// `ORGANIZATION` resource carries `MASTER_EMAIL` and `MASTER_NAME` children.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HandshakeResource {
    /// The information that is passed to the other party in the handshake.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// How to interpret `value`.
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<HandshakeResourceType>,

    /// Nested resources.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<HandshakeResource>,
}

// ---------------------------------------------------------------------------
// Organization structure
// ---------------------------------------------------------------------------

/// An organization: a collection of accounts managed together.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Organization {
    /// The organization ID (`o-` followed by 10 to 32 lowercase letters or
    /// digits).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature_set: Option<OrganizationFeatureSet>,

    /// The ARN of the master account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_account_arn: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_account_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_account_email: Option<String>,

    /// Policy types available in the organization. The per-root list on
    /// [`Root::policy_types`] is authoritative for what is enabled.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub available_policy_types: Vec<PolicyTypeSummary>,
}

/// An organizational unit (OU): a container of accounts within a root.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OrganizationalUnit {
    /// The OU ID (`ou-` followed by the root suffix and a unique suffix).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// The top-level parent node of the organization hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Root {
    /// The root ID (`r-` followed by 4 to 32 lowercase letters or digits).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Policy types enabled for this root.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub policy_types: Vec<PolicyTypeSummary>,
}

/// A child of a parent container.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Child {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<ChildType>,
}

/// A parent container of an account or OU.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Parent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<ParentType>,
}

// ---------------------------------------------------------------------------
// Policies
// ---------------------------------------------------------------------------

/// A policy with its document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Policy {
    /// Metadata about the policy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_summary: Option<PolicySummary>,

    /// The policy document, as a JSON string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// Metadata about a policy, without its document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PolicySummary {
    /// The policy ID (`p-` followed by 8 to 128 lowercase letters, digits or
    /// underscores).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<PolicyType>,

    /// `true` for policies created and managed by AWS; these cannot be
    /// edited.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aws_managed: Option<bool>,
}

/// A root, OU, or account that a policy is attached to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PolicyTargetSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<TargetType>,
}

/// A policy type and its status in a root.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PolicyTypeSummary {
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<PolicyType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PolicyTypeStatus>,
}

/// The aggregation of all policies of one type that apply to a target.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EffectivePolicy {
    /// The effective policy document, as a JSON string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_content: Option<String>,

    #[serde(
        default,
        with = "crate::timestamp::epoch_seconds_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_updated_timestamp: Option<DateTime<Utc>>,

    /// The account ID of the policy target.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_type: Option<EffectivePolicyType>,
}

// ---------------------------------------------------------------------------
// Tags
// ---------------------------------------------------------------------------

/// A key-value pair attached to an account, OU, root or policy.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Tag {
    /// Tag key, 1 to 128 characters.
    pub key: String,
    /// Tag value, 0 to 256 characters.
    pub value: String,
}

impl Tag {
    /// Create a tag.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_serialize_known_enum_as_wire_string() {
        let json = serde_json::to_string(&PolicyType::ServiceControlPolicy)
            .expect("serialize PolicyType");
        assert_eq!(json, r#""SERVICE_CONTROL_POLICY""#);
    }

    #[test]
    fn test_should_preserve_unknown_enum_value() {
        let state: HandshakeState =
            serde_json::from_str(r#""PENDING_REVIEW""#).expect("deserialize HandshakeState");
        assert_eq!(state, HandshakeState::Unknown("PENDING_REVIEW".to_owned()));
        assert!(!state.is_known());
        assert_eq!(
            serde_json::to_string(&state).expect("serialize HandshakeState"),
            r#""PENDING_REVIEW""#
        );
    }

    #[test]
    fn test_should_parse_enum_from_str() {
        let feature_set: OrganizationFeatureSet = "CONSOLIDATED_BILLING".parse().unwrap();
        assert_eq!(feature_set, OrganizationFeatureSet::ConsolidatedBilling);
        assert_eq!(feature_set.to_string(), "CONSOLIDATED_BILLING");
        assert_eq!(
            ActionType::from("ADD_ORGANIZATIONS_SERVICE_LINKED_ROLE"),
            ActionType::AddOrganizationsServiceLinkedRole
        );
    }

    #[test]
    fn test_should_list_every_known_value() {
        assert_eq!(
            HandshakeState::VALUES,
            &["REQUESTED", "OPEN", "CANCELED", "ACCEPTED", "DECLINED", "EXPIRED"]
        );
        for value in HandshakeResourceType::VALUES {
            assert!(HandshakeResourceType::from(*value).is_known(), "{value}");
        }
    }

    #[test]
    fn test_should_skip_none_fields_in_account() {
        let account = Account {
            id: Some("111111111111".to_owned()),
            status: Some(AccountStatus::Active),
            ..Default::default()
        };
        let json = serde_json::to_string(&account).expect("serialize Account");
        assert_eq!(json, r#"{"Id":"111111111111","Status":"ACTIVE"}"#);
    }

    #[test]
    fn test_should_use_type_member_name() {
        let party = HandshakeParty::new("222222222222", HandshakePartyType::Account);
        let json = serde_json::to_string(&party).expect("serialize HandshakeParty");
        assert_eq!(json, r#"{"Id":"222222222222","Type":"ACCOUNT"}"#);
    }

    #[test]
    fn test_should_deserialize_nested_handshake_resources() {
        let json = r#"{
            "Type": "ORGANIZATION",
            "Value": "o-exampleorgid",
            "Resources": [
                {"Type": "MASTER_EMAIL", "Value": "bill@example.com"},
                {"Type": "MASTER_NAME", "Value": "Org Master Account"}
            ]
        }"#;
        let resource: HandshakeResource =
            serde_json::from_str(json).expect("deserialize HandshakeResource");
        assert_eq!(resource.r#type, Some(HandshakeResourceType::Organization));
        assert_eq!(resource.resources.len(), 2);
        assert_eq!(
            resource.resources[1].value.as_deref(),
            Some("Org Master Account")
        );
        assert!(resource.resources[0].resources.is_empty());
    }

    #[test]
    fn test_should_compare_structurally() {
        let a = PolicySummary {
            id: Some("p-FullAWSAccess".to_owned()),
            aws_managed: Some(true),
            ..Default::default()
        };
        let mut b = a.clone();
        assert_eq!(a, b);
        b.aws_managed = Some(false);
        assert_ne!(a, b);
    }

    #[test]
    fn test_should_hash_equal_values_equally() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(Tag::new("env", "prod"));
        set.insert(Tag::new("env", "prod"));
        set.insert(Tag::new("env", "dev"));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_should_keep_empty_tag_value() {
        let json = serde_json::to_string(&Tag::new("team", "")).expect("serialize Tag");
        assert_eq!(json, r#"{"Key":"team","Value":""}"#);
    }
}
