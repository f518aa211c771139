//! Opt-in checks of the documented input constraints.
//!
//! Shapes never enforce their constraints on construction or
//! deserialization. Callers that want to reject a bad request before it is
//! sent (or an emulator that wants to answer like the service) call
//! [`Validate::validate`], which reports the first violation as an
//! `InvalidInputException` carrying the matching reason code.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::OrganizationsError;
use crate::input::*;
use crate::types::{
    HandshakeFilter, HandshakeParty, HandshakePartyType, InvalidInputExceptionReason, Tag,
};

/// Smallest accepted `MaxResults`.
pub const MIN_MAX_RESULTS: i32 = 1;

/// Largest accepted `MaxResults`.
pub const MAX_MAX_RESULTS: i32 = 20;

const MAX_NEXT_TOKEN_LEN: usize = 100_000;
const MIN_EMAIL_LEN: usize = 6;
const MAX_EMAIL_LEN: usize = 64;
const MAX_ACCOUNT_NAME_LEN: usize = 50;
const MAX_ROLE_NAME_LEN: usize = 64;
const MAX_NAME_LEN: usize = 128;
const MAX_POLICY_DESCRIPTION_LEN: usize = 512;
const MAX_POLICY_CONTENT_LEN: usize = 1_000_000;
const MAX_SERVICE_PRINCIPAL_LEN: usize = 128;
const MAX_NOTES_LEN: usize = 1024;
const MAX_PARTY_ID_LEN: usize = 64;
const MAX_TAG_KEY_LEN: usize = 128;
const MAX_TAG_VALUE_LEN: usize = 256;

/// Prefix reserved for tags managed by AWS.
const SYSTEM_TAG_PREFIX: &str = "aws:";

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("valid built-in pattern")
}

static ACCOUNT_ID: LazyLock<Regex> = LazyLock::new(|| compile(r"^[0-9]{12}$"));
static HANDSHAKE_ID: LazyLock<Regex> = LazyLock::new(|| compile(r"^h-[0-9a-z]{8,32}$"));
static ROOT_ID: LazyLock<Regex> = LazyLock::new(|| compile(r"^r-[0-9a-z]{4,32}$"));
static OU_ID: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^ou-[0-9a-z]{4,32}-[a-z0-9]{8,32}$"));
static POLICY_ID: LazyLock<Regex> = LazyLock::new(|| compile(r"^p-[0-9a-zA-Z_]{8,128}$"));
static CREATE_ACCOUNT_REQUEST_ID: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^car-[a-z0-9]{8,32}$"));
static PARENT_ID: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^(r-[0-9a-z]{4,32}|ou-[0-9a-z]{4,32}-[a-z0-9]{8,32})$"));
static CHILD_ID: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^([0-9]{12}|ou-[0-9a-z]{4,32}-[a-z0-9]{8,32})$"));
static TARGET_ID: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"^(r-[0-9a-z]{4,32}|[0-9]{12}|ou-[0-9a-z]{4,32}-[a-z0-9]{8,32})$")
});
static TAGGABLE_RESOURCE_ID: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"^(r-[0-9a-z]{4,32}|[0-9]{12}|ou-[0-9a-z]{4,32}-[a-z0-9]{8,32}|p-[0-9a-zA-Z_]{8,128})$")
});
static EMAIL: LazyLock<Regex> = LazyLock::new(|| compile(r"^[^\s@]+@[^\s@]+\.[^\s@]+$"));
static ACCOUNT_NAME: LazyLock<Regex> = LazyLock::new(|| compile(r"^[\x20-\x7E]+$"));
static ROLE_NAME: LazyLock<Regex> = LazyLock::new(|| compile(r"^[A-Za-z0-9_+=,.@-]+$"));
static SERVICE_PRINCIPAL: LazyLock<Regex> = LazyLock::new(|| compile(r"^[A-Za-z0-9_+=,.@-]+$"));
static NAME: LazyLock<Regex> = LazyLock::new(|| compile(r"^[\s\S]+$"));

/// Check an input shape against its documented constraints.
pub trait Validate {
    /// Returns the first violated constraint as an `InvalidInputException`.
    fn validate(&self) -> Result<(), OrganizationsError>;
}

fn invalid(reason: &InvalidInputExceptionReason, message: String) -> OrganizationsError {
    OrganizationsError::invalid_input(reason, message)
}

fn required(field: &str, value: &str) -> Result<(), OrganizationsError> {
    if value.is_empty() {
        return Err(invalid(
            &InvalidInputExceptionReason::InputRequired,
            format!("{field} is required"),
        ));
    }
    Ok(())
}

fn length(field: &str, value: &str, min: usize, max: usize) -> Result<(), OrganizationsError> {
    let len = value.chars().count();
    if len < min {
        return Err(invalid(
            &InvalidInputExceptionReason::MinLengthExceeded,
            format!("{field} must be at least {min} characters long"),
        ));
    }
    if len > max {
        return Err(invalid(
            &InvalidInputExceptionReason::MaxLengthExceeded,
            format!("{field} must be at most {max} characters long"),
        ));
    }
    Ok(())
}

fn pattern(field: &str, value: &str, re: &Regex) -> Result<(), OrganizationsError> {
    if !re.is_match(value) {
        return Err(invalid(
            &InvalidInputExceptionReason::InvalidPattern,
            format!("{field} '{value}' does not match the expected pattern"),
        ));
    }
    Ok(())
}

/// A required identifier: present and matching `re`.
fn id(field: &str, value: &str, re: &Regex) -> Result<(), OrganizationsError> {
    required(field, value)?;
    pattern(field, value, re)
}

fn target_id(field: &str, value: &str) -> Result<(), OrganizationsError> {
    required(field, value)?;
    if !TARGET_ID.is_match(value) {
        return Err(invalid(
            &InvalidInputExceptionReason::InvalidPatternTargetId,
            format!("{field} '{value}' is not a root, OU or account ID"),
        ));
    }
    Ok(())
}

fn known_enum(field: &str, known: bool, value: &str) -> Result<(), OrganizationsError> {
    if !known {
        return Err(invalid(
            &InvalidInputExceptionReason::InvalidEnum,
            format!("{field} '{value}' is not a recognized value"),
        ));
    }
    Ok(())
}

fn pagination(
    next_token: Option<&str>,
    max_results: Option<i32>,
) -> Result<(), OrganizationsError> {
    if let Some(token) = next_token {
        if token.len() > MAX_NEXT_TOKEN_LEN {
            return Err(invalid(
                &InvalidInputExceptionReason::InvalidNextToken,
                "NextToken is too long".to_owned(),
            ));
        }
    }
    match max_results {
        Some(n) if n < MIN_MAX_RESULTS => Err(invalid(
            &InvalidInputExceptionReason::MinValueExceeded,
            format!("MaxResults must be at least {MIN_MAX_RESULTS}"),
        )),
        Some(n) if n > MAX_MAX_RESULTS => Err(invalid(
            &InvalidInputExceptionReason::MaxValueExceeded,
            format!("MaxResults must be at most {MAX_MAX_RESULTS}"),
        )),
        _ => Ok(()),
    }
}

fn email(value: &str) -> Result<(), OrganizationsError> {
    required("Email", value)?;
    length("Email", value, MIN_EMAIL_LEN, MAX_EMAIL_LEN)?;
    pattern("Email", value, &EMAIL)
}

fn service_principal(value: &str) -> Result<(), OrganizationsError> {
    required("ServicePrincipal", value)?;
    length("ServicePrincipal", value, 1, MAX_SERVICE_PRINCIPAL_LEN)?;
    pattern("ServicePrincipal", value, &SERVICE_PRINCIPAL)
}

fn name(field: &str, value: &str, max: usize) -> Result<(), OrganizationsError> {
    required(field, value)?;
    length(field, value, 1, max)?;
    pattern(field, value, &NAME)
}

fn tag_key(key: &str) -> Result<(), OrganizationsError> {
    required("Tag.Key", key)?;
    length("Tag.Key", key, 1, MAX_TAG_KEY_LEN)?;
    if key.starts_with(SYSTEM_TAG_PREFIX) {
        return Err(invalid(
            &InvalidInputExceptionReason::InvalidSystemTagsParameter,
            format!("Tag key '{key}' uses the reserved prefix '{SYSTEM_TAG_PREFIX}'"),
        ));
    }
    Ok(())
}

fn tags(tags: &[Tag]) -> Result<(), OrganizationsError> {
    let mut seen = HashSet::with_capacity(tags.len());
    for tag in tags {
        tag_key(&tag.key)?;
        length("Tag.Value", &tag.value, 0, MAX_TAG_VALUE_LEN)?;
        if !seen.insert(tag.key.as_str()) {
            return Err(invalid(
                &InvalidInputExceptionReason::DuplicateTagKey,
                format!("Duplicate tag key '{}'", tag.key),
            ));
        }
    }
    Ok(())
}

fn handshake_filter(filter: Option<&HandshakeFilter>) -> Result<(), OrganizationsError> {
    let Some(filter) = filter else {
        return Ok(());
    };
    if filter.action_type.is_some() && filter.parent_handshake_id.is_some() {
        return Err(invalid(
            &InvalidInputExceptionReason::MaxLimitExceededFilter,
            "Specify either ActionType or ParentHandshakeId, not both".to_owned(),
        ));
    }
    if let Some(action) = &filter.action_type {
        known_enum("Filter.ActionType", action.is_known(), action.as_str())?;
    }
    if let Some(parent) = &filter.parent_handshake_id {
        pattern("Filter.ParentHandshakeId", parent, &HANDSHAKE_ID)?;
    }
    Ok(())
}

fn invite_target(party: &HandshakeParty) -> Result<(), OrganizationsError> {
    required("Target.Id", &party.id)?;
    length("Target.Id", &party.id, 1, MAX_PARTY_ID_LEN)?;
    match &party.r#type {
        HandshakePartyType::Account => pattern("Target.Id", &party.id, &ACCOUNT_ID),
        HandshakePartyType::Email => pattern("Target.Id", &party.id, &EMAIL),
        HandshakePartyType::Organization => Err(invalid(
            &InvalidInputExceptionReason::InvalidPartyTypeTarget,
            "An invitation must target an ACCOUNT or EMAIL party".to_owned(),
        )),
        HandshakePartyType::Unknown(other) => known_enum("Target.Type", false, other),
    }
}

fn new_account(
    email_address: &str,
    account_name: &str,
    role_name: Option<&str>,
    new_tags: &[Tag],
) -> Result<(), OrganizationsError> {
    email(email_address)?;
    required("AccountName", account_name)?;
    length("AccountName", account_name, 1, MAX_ACCOUNT_NAME_LEN)?;
    pattern("AccountName", account_name, &ACCOUNT_NAME)?;
    if let Some(role) = role_name {
        length("RoleName", role, 1, MAX_ROLE_NAME_LEN)?;
        if !ROLE_NAME.is_match(role) {
            return Err(invalid(
                &InvalidInputExceptionReason::InvalidRoleName,
                format!("RoleName '{role}' is not a valid IAM role name"),
            ));
        }
    }
    tags(new_tags)
}

fn policy_type(field: &str, value: &crate::types::PolicyType) -> Result<(), OrganizationsError> {
    if !value.is_known() {
        return Err(invalid(
            &InvalidInputExceptionReason::InvalidEnumPolicyType,
            format!("{field} '{value}' is not a recognized policy type"),
        ));
    }
    Ok(())
}

/// Inputs without members are always valid.
macro_rules! always_valid {
    ($($input:ty),+ $(,)?) => {
        $(
            impl Validate for $input {
                fn validate(&self) -> Result<(), OrganizationsError> {
                    Ok(())
                }
            }
        )+
    };
}

always_valid!(
    EnableAllFeaturesInput,
    DeleteOrganizationInput,
    DescribeOrganizationInput,
    LeaveOrganizationInput,
);

/// Inputs whose only member is a handshake ID.
macro_rules! handshake_id_input {
    ($($input:ty),+ $(,)?) => {
        $(
            impl Validate for $input {
                fn validate(&self) -> Result<(), OrganizationsError> {
                    id("HandshakeId", &self.handshake_id, &HANDSHAKE_ID)
                }
            }
        )+
    };
}

handshake_id_input!(
    AcceptHandshakeInput,
    CancelHandshakeInput,
    DeclineHandshakeInput,
    DescribeHandshakeInput,
);

// -- Handshakes --

impl Validate for InviteAccountToOrganizationInput {
    fn validate(&self) -> Result<(), OrganizationsError> {
        invite_target(&self.target)?;
        if let Some(notes) = &self.notes {
            length("Notes", notes, 0, MAX_NOTES_LEN)?;
        }
        tags(&self.tags)
    }
}

impl Validate for ListHandshakesForAccountInput {
    fn validate(&self) -> Result<(), OrganizationsError> {
        handshake_filter(self.filter.as_ref())?;
        pagination(self.next_token.as_deref(), self.max_results)
    }
}

impl Validate for ListHandshakesForOrganizationInput {
    fn validate(&self) -> Result<(), OrganizationsError> {
        handshake_filter(self.filter.as_ref())?;
        pagination(self.next_token.as_deref(), self.max_results)
    }
}

// -- Organization --

impl Validate for CreateOrganizationInput {
    fn validate(&self) -> Result<(), OrganizationsError> {
        match &self.feature_set {
            Some(set) => known_enum("FeatureSet", set.is_known(), set.as_str()),
            None => Ok(()),
        }
    }
}

// -- Accounts --

impl Validate for CreateAccountInput {
    fn validate(&self) -> Result<(), OrganizationsError> {
        new_account(
            &self.email,
            &self.account_name,
            self.role_name.as_deref(),
            &self.tags,
        )?;
        match &self.iam_user_access_to_billing {
            Some(v) => known_enum("IamUserAccessToBilling", v.is_known(), v.as_str()),
            None => Ok(()),
        }
    }
}

impl Validate for CreateGovCloudAccountInput {
    fn validate(&self) -> Result<(), OrganizationsError> {
        new_account(
            &self.email,
            &self.account_name,
            self.role_name.as_deref(),
            &self.tags,
        )?;
        match &self.iam_user_access_to_billing {
            Some(v) => known_enum("IamUserAccessToBilling", v.is_known(), v.as_str()),
            None => Ok(()),
        }
    }
}

impl Validate for DescribeAccountInput {
    fn validate(&self) -> Result<(), OrganizationsError> {
        id("AccountId", &self.account_id, &ACCOUNT_ID)
    }
}

impl Validate for DescribeCreateAccountStatusInput {
    fn validate(&self) -> Result<(), OrganizationsError> {
        id(
            "CreateAccountRequestId",
            &self.create_account_request_id,
            &CREATE_ACCOUNT_REQUEST_ID,
        )
    }
}

impl Validate for ListAccountsInput {
    fn validate(&self) -> Result<(), OrganizationsError> {
        pagination(self.next_token.as_deref(), self.max_results)
    }
}

impl Validate for ListAccountsForParentInput {
    fn validate(&self) -> Result<(), OrganizationsError> {
        id("ParentId", &self.parent_id, &PARENT_ID)?;
        pagination(self.next_token.as_deref(), self.max_results)
    }
}

impl Validate for ListCreateAccountStatusInput {
    fn validate(&self) -> Result<(), OrganizationsError> {
        for state in &self.states {
            known_enum("States", state.is_known(), state.as_str())?;
        }
        pagination(self.next_token.as_deref(), self.max_results)
    }
}

impl Validate for MoveAccountInput {
    fn validate(&self) -> Result<(), OrganizationsError> {
        id("AccountId", &self.account_id, &ACCOUNT_ID)?;
        id("SourceParentId", &self.source_parent_id, &PARENT_ID)?;
        id("DestinationParentId", &self.destination_parent_id, &PARENT_ID)
    }
}

impl Validate for RemoveAccountFromOrganizationInput {
    fn validate(&self) -> Result<(), OrganizationsError> {
        id("AccountId", &self.account_id, &ACCOUNT_ID)
    }
}

// -- Organizational units --

impl Validate for CreateOrganizationalUnitInput {
    fn validate(&self) -> Result<(), OrganizationsError> {
        id("ParentId", &self.parent_id, &PARENT_ID)?;
        name("Name", &self.name, MAX_NAME_LEN)?;
        tags(&self.tags)
    }
}

impl Validate for DeleteOrganizationalUnitInput {
    fn validate(&self) -> Result<(), OrganizationsError> {
        id("OrganizationalUnitId", &self.organizational_unit_id, &OU_ID)
    }
}

impl Validate for DescribeOrganizationalUnitInput {
    fn validate(&self) -> Result<(), OrganizationsError> {
        id("OrganizationalUnitId", &self.organizational_unit_id, &OU_ID)
    }
}

impl Validate for UpdateOrganizationalUnitInput {
    fn validate(&self) -> Result<(), OrganizationsError> {
        id("OrganizationalUnitId", &self.organizational_unit_id, &OU_ID)?;
        match &self.name {
            Some(n) => name("Name", n, MAX_NAME_LEN),
            None => Ok(()),
        }
    }
}

impl Validate for ListChildrenInput {
    fn validate(&self) -> Result<(), OrganizationsError> {
        id("ParentId", &self.parent_id, &PARENT_ID)?;
        known_enum(
            "ChildType",
            self.child_type.is_known(),
            self.child_type.as_str(),
        )?;
        pagination(self.next_token.as_deref(), self.max_results)
    }
}

impl Validate for ListOrganizationalUnitsForParentInput {
    fn validate(&self) -> Result<(), OrganizationsError> {
        id("ParentId", &self.parent_id, &PARENT_ID)?;
        pagination(self.next_token.as_deref(), self.max_results)
    }
}

impl Validate for ListParentsInput {
    fn validate(&self) -> Result<(), OrganizationsError> {
        id("ChildId", &self.child_id, &CHILD_ID)?;
        pagination(self.next_token.as_deref(), self.max_results)
    }
}

impl Validate for ListRootsInput {
    fn validate(&self) -> Result<(), OrganizationsError> {
        pagination(self.next_token.as_deref(), self.max_results)
    }
}

// -- Policies --

impl Validate for AttachPolicyInput {
    fn validate(&self) -> Result<(), OrganizationsError> {
        id("PolicyId", &self.policy_id, &POLICY_ID)?;
        target_id("TargetId", &self.target_id)
    }
}

impl Validate for DetachPolicyInput {
    fn validate(&self) -> Result<(), OrganizationsError> {
        id("PolicyId", &self.policy_id, &POLICY_ID)?;
        target_id("TargetId", &self.target_id)
    }
}

impl Validate for CreatePolicyInput {
    fn validate(&self) -> Result<(), OrganizationsError> {
        required("Content", &self.content)?;
        length("Content", &self.content, 1, MAX_POLICY_CONTENT_LEN)?;
        length("Description", &self.description, 0, MAX_POLICY_DESCRIPTION_LEN)?;
        name("Name", &self.name, MAX_NAME_LEN)?;
        policy_type("Type", &self.policy_type)?;
        tags(&self.tags)
    }
}

impl Validate for DeletePolicyInput {
    fn validate(&self) -> Result<(), OrganizationsError> {
        id("PolicyId", &self.policy_id, &POLICY_ID)
    }
}

impl Validate for DescribePolicyInput {
    fn validate(&self) -> Result<(), OrganizationsError> {
        id("PolicyId", &self.policy_id, &POLICY_ID)
    }
}

impl Validate for DescribeEffectivePolicyInput {
    fn validate(&self) -> Result<(), OrganizationsError> {
        if !self.policy_type.is_known() {
            return Err(invalid(
                &InvalidInputExceptionReason::InvalidEnumPolicyType,
                format!("PolicyType '{}' has no effective policy", self.policy_type),
            ));
        }
        match &self.target_id {
            Some(target) => target_id("TargetId", target),
            None => Ok(()),
        }
    }
}

impl Validate for DisablePolicyTypeInput {
    fn validate(&self) -> Result<(), OrganizationsError> {
        id("RootId", &self.root_id, &ROOT_ID)?;
        policy_type("PolicyType", &self.policy_type)
    }
}

impl Validate for EnablePolicyTypeInput {
    fn validate(&self) -> Result<(), OrganizationsError> {
        id("RootId", &self.root_id, &ROOT_ID)?;
        policy_type("PolicyType", &self.policy_type)
    }
}

impl Validate for ListPoliciesInput {
    fn validate(&self) -> Result<(), OrganizationsError> {
        policy_type("Filter", &self.filter)?;
        pagination(self.next_token.as_deref(), self.max_results)
    }
}

impl Validate for ListPoliciesForTargetInput {
    fn validate(&self) -> Result<(), OrganizationsError> {
        target_id("TargetId", &self.target_id)?;
        policy_type("Filter", &self.filter)?;
        pagination(self.next_token.as_deref(), self.max_results)
    }
}

impl Validate for ListTargetsForPolicyInput {
    fn validate(&self) -> Result<(), OrganizationsError> {
        id("PolicyId", &self.policy_id, &POLICY_ID)?;
        pagination(self.next_token.as_deref(), self.max_results)
    }
}

impl Validate for UpdatePolicyInput {
    fn validate(&self) -> Result<(), OrganizationsError> {
        id("PolicyId", &self.policy_id, &POLICY_ID)?;
        if let Some(n) = &self.name {
            name("Name", n, MAX_NAME_LEN)?;
        }
        if let Some(description) = &self.description {
            length("Description", description, 0, MAX_POLICY_DESCRIPTION_LEN)?;
        }
        if let Some(content) = &self.content {
            length("Content", content, 1, MAX_POLICY_CONTENT_LEN)?;
        }
        Ok(())
    }
}

// -- Service access and delegated administrators --

impl Validate for EnableAwsServiceAccessInput {
    fn validate(&self) -> Result<(), OrganizationsError> {
        service_principal(&self.service_principal)
    }
}

impl Validate for DisableAwsServiceAccessInput {
    fn validate(&self) -> Result<(), OrganizationsError> {
        service_principal(&self.service_principal)
    }
}

impl Validate for ListAwsServiceAccessForOrganizationInput {
    fn validate(&self) -> Result<(), OrganizationsError> {
        pagination(self.next_token.as_deref(), self.max_results)
    }
}

impl Validate for RegisterDelegatedAdministratorInput {
    fn validate(&self) -> Result<(), OrganizationsError> {
        id("AccountId", &self.account_id, &ACCOUNT_ID)?;
        service_principal(&self.service_principal)
    }
}

impl Validate for DeregisterDelegatedAdministratorInput {
    fn validate(&self) -> Result<(), OrganizationsError> {
        id("AccountId", &self.account_id, &ACCOUNT_ID)?;
        service_principal(&self.service_principal)
    }
}

impl Validate for ListDelegatedAdministratorsInput {
    fn validate(&self) -> Result<(), OrganizationsError> {
        if let Some(principal) = &self.service_principal {
            service_principal(principal)?;
        }
        pagination(self.next_token.as_deref(), self.max_results)
    }
}

impl Validate for ListDelegatedServicesForAccountInput {
    fn validate(&self) -> Result<(), OrganizationsError> {
        id("AccountId", &self.account_id, &ACCOUNT_ID)?;
        pagination(self.next_token.as_deref(), self.max_results)
    }
}

// -- Tags --

impl Validate for ListTagsForResourceInput {
    fn validate(&self) -> Result<(), OrganizationsError> {
        id("ResourceId", &self.resource_id, &TAGGABLE_RESOURCE_ID)?;
        pagination(self.next_token.as_deref(), None)
    }
}

impl Validate for TagResourceInput {
    fn validate(&self) -> Result<(), OrganizationsError> {
        id("ResourceId", &self.resource_id, &TAGGABLE_RESOURCE_ID)?;
        if self.tags.is_empty() {
            return Err(invalid(
                &InvalidInputExceptionReason::InputRequired,
                "Tags is required".to_owned(),
            ));
        }
        tags(&self.tags)
    }
}

impl Validate for UntagResourceInput {
    fn validate(&self) -> Result<(), OrganizationsError> {
        id("ResourceId", &self.resource_id, &TAGGABLE_RESOURCE_ID)?;
        if self.tag_keys.is_empty() {
            return Err(invalid(
                &InvalidInputExceptionReason::InputRequired,
                "TagKeys is required".to_owned(),
            ));
        }
        self.tag_keys.iter().try_for_each(|key| tag_key(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OrganizationsErrorCode;
    use crate::types::{ActionType, ChildType, EffectivePolicyType, PolicyType};

    fn reason_of(result: Result<(), OrganizationsError>) -> String {
        let err = result.expect_err("validation should fail");
        assert_eq!(err.code, OrganizationsErrorCode::InvalidInputException);
        err.reason.expect("reason present")
    }

    #[test]
    fn test_should_compile_every_pattern() {
        for re in [
            &ACCOUNT_ID,
            &HANDSHAKE_ID,
            &ROOT_ID,
            &OU_ID,
            &POLICY_ID,
            &CREATE_ACCOUNT_REQUEST_ID,
            &PARENT_ID,
            &CHILD_ID,
            &TARGET_ID,
            &TAGGABLE_RESOURCE_ID,
            &EMAIL,
            &ACCOUNT_NAME,
            &ROLE_NAME,
            &SERVICE_PRINCIPAL,
            &NAME,
        ] {
            assert!(!re.as_str().is_empty());
        }
    }

    #[test]
    fn test_should_accept_valid_account_id() {
        let input = DescribeAccountInput::builder()
            .account_id("123456789012")
            .build();
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_should_require_account_id() {
        let input = DescribeAccountInput::default();
        assert_eq!(reason_of(input.validate()), "INPUT_REQUIRED");
    }

    #[test]
    fn test_should_reject_short_account_id() {
        let input = DescribeAccountInput::builder().account_id("12345").build();
        assert_eq!(reason_of(input.validate()), "INVALID_PATTERN");
    }

    #[test]
    fn test_should_reject_non_ascii_digits_in_ids() {
        let account = DescribeAccountInput::builder()
            .account_id("\u{661}\u{662}\u{663}\u{664}\u{665}\u{666}\u{667}\u{668}\u{669}\u{660}\u{661}\u{662}")
            .build();
        assert_eq!(reason_of(account.validate()), "INVALID_PATTERN");

        let target = AttachPolicyInput::builder()
            .policy_id("p-examplepolicyid111")
            .target_id("\u{ff11}23456789012")
            .build();
        assert_eq!(reason_of(target.validate()), "INVALID_PATTERN_TARGET_ID");

        let role = CreateAccountInput::builder()
            .email("susan@example.com")
            .account_name("Production")
            .role_name("r\u{f4}le")
            .build();
        assert_eq!(reason_of(role.validate()), "INVALID_ROLE_NAME");
    }

    #[test]
    fn test_should_validate_handshake_ids() {
        let ok = AcceptHandshakeInput::builder()
            .handshake_id("h-examplehandshakeid111")
            .build();
        assert!(ok.validate().is_ok());
        let bad = AcceptHandshakeInput::builder()
            .handshake_id("H-UPPERCASE1")
            .build();
        assert_eq!(reason_of(bad.validate()), "INVALID_PATTERN");
    }

    #[test]
    fn test_should_check_max_results_range() {
        let low = ListAccountsInput::builder().max_results(0).build();
        assert_eq!(reason_of(low.validate()), "MIN_VALUE_EXCEEDED");
        let high = ListAccountsInput::builder().max_results(21).build();
        assert_eq!(reason_of(high.validate()), "MAX_VALUE_EXCEEDED");
        let edge = ListAccountsInput::builder().max_results(20).build();
        assert!(edge.validate().is_ok());
    }

    #[test]
    fn test_should_reject_bad_target_id() {
        let input = AttachPolicyInput::builder()
            .policy_id("p-examplepolicyid111")
            .target_id("o-exampleorgid")
            .build();
        assert_eq!(reason_of(input.validate()), "INVALID_PATTERN_TARGET_ID");
    }

    #[test]
    fn test_should_accept_aws_managed_policy_id() {
        let input = AttachPolicyInput::builder()
            .policy_id("p-FullAWSAccess")
            .target_id("ou-examplerootid111-exampleouid111")
            .build();
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_should_check_email_length() {
        let input = CreateAccountInput::builder()
            .email("a@b.c")
            .account_name("Production")
            .build();
        assert_eq!(reason_of(input.validate()), "MIN_LENGTH_EXCEEDED");
    }

    #[test]
    fn test_should_reject_invalid_role_name() {
        let input = CreateAccountInput::builder()
            .email("susan@example.com")
            .account_name("Production")
            .role_name("bad role")
            .build();
        assert_eq!(reason_of(input.validate()), "INVALID_ROLE_NAME");
    }

    #[test]
    fn test_should_reject_duplicate_and_system_tag_keys() {
        let dup = TagResourceInput::builder()
            .resource_id("123456789012")
            .tags(vec![Tag::new("env", "a"), Tag::new("env", "b")])
            .build();
        assert_eq!(reason_of(dup.validate()), "DUPLICATE_TAG_KEY");

        let system = UntagResourceInput::builder()
            .resource_id("r-examplerootid111")
            .tag_keys(vec!["aws:createdBy".to_owned()])
            .build();
        assert_eq!(reason_of(system.validate()), "INVALID_SYSTEM_TAGS_PARAMETER");
    }

    #[test]
    fn test_should_reject_unknown_enum_values() {
        let input = ListChildrenInput::builder()
            .parent_id("r-examplerootid111")
            .child_type(ChildType::from("POLICY"))
            .build();
        assert_eq!(reason_of(input.validate()), "INVALID_ENUM");

        let policy = ListPoliciesInput::builder()
            .filter(PolicyType::from("QUOTA_POLICY"))
            .build();
        assert_eq!(reason_of(policy.validate()), "INVALID_ENUM_POLICY_TYPE");

        let effective = DescribeEffectivePolicyInput::builder()
            .policy_type(EffectivePolicyType::TagPolicy)
            .build();
        assert!(effective.validate().is_ok());
    }

    #[test]
    fn test_should_reject_organization_invite_target() {
        let input = InviteAccountToOrganizationInput::builder()
            .target(HandshakeParty::new("o-exampleorgid", HandshakePartyType::Organization))
            .build();
        assert_eq!(reason_of(input.validate()), "INVALID_PARTY_TYPE_TARGET");

        let email = InviteAccountToOrganizationInput::builder()
            .target(HandshakeParty::new("juan@example.com", HandshakePartyType::Email))
            .build();
        assert!(email.validate().is_ok());
    }

    #[test]
    fn test_should_reject_filter_with_both_members() {
        let input = ListHandshakesForAccountInput::builder()
            .filter(HandshakeFilter {
                action_type: Some(ActionType::Invite),
                parent_handshake_id: Some("h-examplehandshakeid111".to_owned()),
            })
            .build();
        assert_eq!(reason_of(input.validate()), "MAX_LIMIT_EXCEEDED_FILTER");
    }

    #[test]
    fn test_should_accept_empty_inputs() {
        assert!(DescribeOrganizationInput {}.validate().is_ok());
        assert!(ListRootsInput::default().validate().is_ok());
    }
}
