//! AWS Organizations error types.
//!
//! Organizations errors use the `awsJson1_1` error document: a JSON object
//! whose `__type` member names the exception, with a `Message` and, for a
//! few exceptions, a `Reason` (or `Type`) member that refines it.

use std::fmt;

/// Modeled AWS Organizations exceptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum OrganizationsErrorCode {
    /// The account is not a member of an organization.
    AwsOrganizationsNotInUseException,
    /// The caller lacks the required permissions.
    AccessDeniedException,
    /// A dependent service denied access; see `Reason`.
    AccessDeniedForDependencyException,
    /// The account is already a delegated administrator for the service.
    AccountAlreadyRegisteredException,
    /// The account was not found in the organization.
    AccountNotFoundException,
    /// The account is not a delegated administrator for the service.
    AccountNotRegisteredException,
    /// The account owner has not verified their email address.
    AccountOwnerNotVerifiedException,
    /// The account is already a member of an organization.
    AlreadyInOrganizationException,
    /// The child account or OU was not found.
    ChildNotFoundException,
    /// The target is being modified by another request.
    ConcurrentModificationException,
    /// The request would violate a service limit or constraint; see `Reason`.
    ConstraintViolationException,
    /// The account creation request ID was not found.
    CreateAccountStatusNotFoundException,
    /// The destination root or OU was not found.
    DestinationParentNotFoundException,
    /// The account is already in the organization.
    DuplicateAccountException,
    /// An identical handshake already exists.
    DuplicateHandshakeException,
    /// An OU with the same name already exists under the parent.
    DuplicateOrganizationalUnitException,
    /// The policy is already attached to the target.
    DuplicatePolicyAttachmentException,
    /// A policy with the same name already exists.
    DuplicatePolicyException,
    /// No effective policy of that type applies to the target.
    EffectivePolicyNotFoundException,
    /// The organization is still finalizing; retry later.
    FinalizingOrganizationException,
    /// The handshake is already in the requested state.
    HandshakeAlreadyInStateException,
    /// The handshake would violate a limit or constraint; see `Reason`.
    HandshakeConstraintViolationException,
    /// The handshake was not found.
    HandshakeNotFoundException,
    /// The handshake cannot move to the requested state.
    InvalidHandshakeTransitionException,
    /// A request parameter is invalid; see `Reason`.
    #[default]
    InvalidInputException,
    /// The policy document is malformed.
    MalformedPolicyDocumentException,
    /// The master account cannot leave its organization.
    MasterCannotLeaveOrganizationException,
    /// The organization still has member accounts.
    OrganizationNotEmptyException,
    /// The OU still contains accounts or OUs.
    OrganizationalUnitNotEmptyException,
    /// The OU was not found.
    OrganizationalUnitNotFoundException,
    /// The parent root or OU was not found.
    ParentNotFoundException,
    /// Policy changes are still being applied.
    PolicyChangesInProgressException,
    /// The policy is attached to one or more targets.
    PolicyInUseException,
    /// The policy is not attached to the target.
    PolicyNotAttachedException,
    /// The policy was not found.
    PolicyNotFoundException,
    /// The policy type is already enabled in the root.
    PolicyTypeAlreadyEnabledException,
    /// The policy type is not available in this organization.
    PolicyTypeNotAvailableForOrganizationException,
    /// The policy type is not enabled in the root.
    PolicyTypeNotEnabledException,
    /// The root was not found.
    RootNotFoundException,
    /// Internal service error.
    ServiceException,
    /// The source root or OU was not found.
    SourceParentNotFoundException,
    /// The policy target was not found.
    TargetNotFoundException,
    /// Request rate exceeded; see `Type`.
    TooManyRequestsException,
    /// The operation is not supported in this endpoint's region.
    UnsupportedApiEndpointException,
    /// An exception this model does not know; see [`OrganizationsError::error_type`].
    Unknown,
}

impl OrganizationsErrorCode {
    /// Every modeled exception.
    pub const ALL: &[Self] = &[
        Self::AwsOrganizationsNotInUseException,
        Self::AccessDeniedException,
        Self::AccessDeniedForDependencyException,
        Self::AccountAlreadyRegisteredException,
        Self::AccountNotFoundException,
        Self::AccountNotRegisteredException,
        Self::AccountOwnerNotVerifiedException,
        Self::AlreadyInOrganizationException,
        Self::ChildNotFoundException,
        Self::ConcurrentModificationException,
        Self::ConstraintViolationException,
        Self::CreateAccountStatusNotFoundException,
        Self::DestinationParentNotFoundException,
        Self::DuplicateAccountException,
        Self::DuplicateHandshakeException,
        Self::DuplicateOrganizationalUnitException,
        Self::DuplicatePolicyAttachmentException,
        Self::DuplicatePolicyException,
        Self::EffectivePolicyNotFoundException,
        Self::FinalizingOrganizationException,
        Self::HandshakeAlreadyInStateException,
        Self::HandshakeConstraintViolationException,
        Self::HandshakeNotFoundException,
        Self::InvalidHandshakeTransitionException,
        Self::InvalidInputException,
        Self::MalformedPolicyDocumentException,
        Self::MasterCannotLeaveOrganizationException,
        Self::OrganizationNotEmptyException,
        Self::OrganizationalUnitNotEmptyException,
        Self::OrganizationalUnitNotFoundException,
        Self::ParentNotFoundException,
        Self::PolicyChangesInProgressException,
        Self::PolicyInUseException,
        Self::PolicyNotAttachedException,
        Self::PolicyNotFoundException,
        Self::PolicyTypeAlreadyEnabledException,
        Self::PolicyTypeNotAvailableForOrganizationException,
        Self::PolicyTypeNotEnabledException,
        Self::RootNotFoundException,
        Self::ServiceException,
        Self::SourceParentNotFoundException,
        Self::TargetNotFoundException,
        Self::TooManyRequestsException,
        Self::UnsupportedApiEndpointException,
    ];

    /// Returns the short error code string used in the `__type` member.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AwsOrganizationsNotInUseException => "AWSOrganizationsNotInUseException",
            Self::AccessDeniedException => "AccessDeniedException",
            Self::AccessDeniedForDependencyException => "AccessDeniedForDependencyException",
            Self::AccountAlreadyRegisteredException => "AccountAlreadyRegisteredException",
            Self::AccountNotFoundException => "AccountNotFoundException",
            Self::AccountNotRegisteredException => "AccountNotRegisteredException",
            Self::AccountOwnerNotVerifiedException => "AccountOwnerNotVerifiedException",
            Self::AlreadyInOrganizationException => "AlreadyInOrganizationException",
            Self::ChildNotFoundException => "ChildNotFoundException",
            Self::ConcurrentModificationException => "ConcurrentModificationException",
            Self::ConstraintViolationException => "ConstraintViolationException",
            Self::CreateAccountStatusNotFoundException => "CreateAccountStatusNotFoundException",
            Self::DestinationParentNotFoundException => "DestinationParentNotFoundException",
            Self::DuplicateAccountException => "DuplicateAccountException",
            Self::DuplicateHandshakeException => "DuplicateHandshakeException",
            Self::DuplicateOrganizationalUnitException => "DuplicateOrganizationalUnitException",
            Self::DuplicatePolicyAttachmentException => "DuplicatePolicyAttachmentException",
            Self::DuplicatePolicyException => "DuplicatePolicyException",
            Self::EffectivePolicyNotFoundException => "EffectivePolicyNotFoundException",
            Self::FinalizingOrganizationException => "FinalizingOrganizationException",
            Self::HandshakeAlreadyInStateException => "HandshakeAlreadyInStateException",
            Self::HandshakeConstraintViolationException => "HandshakeConstraintViolationException",
            Self::HandshakeNotFoundException => "HandshakeNotFoundException",
            Self::InvalidHandshakeTransitionException => "InvalidHandshakeTransitionException",
            Self::InvalidInputException => "InvalidInputException",
            Self::MalformedPolicyDocumentException => "MalformedPolicyDocumentException",
            Self::MasterCannotLeaveOrganizationException => "MasterCannotLeaveOrganizationException",
            Self::OrganizationNotEmptyException => "OrganizationNotEmptyException",
            Self::OrganizationalUnitNotEmptyException => "OrganizationalUnitNotEmptyException",
            Self::OrganizationalUnitNotFoundException => "OrganizationalUnitNotFoundException",
            Self::ParentNotFoundException => "ParentNotFoundException",
            Self::PolicyChangesInProgressException => "PolicyChangesInProgressException",
            Self::PolicyInUseException => "PolicyInUseException",
            Self::PolicyNotAttachedException => "PolicyNotAttachedException",
            Self::PolicyNotFoundException => "PolicyNotFoundException",
            Self::PolicyTypeAlreadyEnabledException => "PolicyTypeAlreadyEnabledException",
            Self::PolicyTypeNotAvailableForOrganizationException => "PolicyTypeNotAvailableForOrganizationException",
            Self::PolicyTypeNotEnabledException => "PolicyTypeNotEnabledException",
            Self::RootNotFoundException => "RootNotFoundException",
            Self::ServiceException => "ServiceException",
            Self::SourceParentNotFoundException => "SourceParentNotFoundException",
            Self::TargetNotFoundException => "TargetNotFoundException",
            Self::TooManyRequestsException => "TooManyRequestsException",
            Self::UnsupportedApiEndpointException => "UnsupportedAPIEndpointException",
            Self::Unknown => "UnknownError",
        }
    }

    /// Returns the `__type` value written for this code.
    ///
    /// Organizations answers with bare exception names, without the
    /// `namespace#` prefix other JSON services use.
    #[must_use]
    pub fn error_type(&self) -> &'static str {
        self.as_str()
    }

    /// Map an exception name to its code. Unmodeled names map to `Unknown`.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "AWSOrganizationsNotInUseException" => Self::AwsOrganizationsNotInUseException,
            "AccessDeniedException" => Self::AccessDeniedException,
            "AccessDeniedForDependencyException" => Self::AccessDeniedForDependencyException,
            "AccountAlreadyRegisteredException" => Self::AccountAlreadyRegisteredException,
            "AccountNotFoundException" => Self::AccountNotFoundException,
            "AccountNotRegisteredException" => Self::AccountNotRegisteredException,
            "AccountOwnerNotVerifiedException" => Self::AccountOwnerNotVerifiedException,
            "AlreadyInOrganizationException" => Self::AlreadyInOrganizationException,
            "ChildNotFoundException" => Self::ChildNotFoundException,
            "ConcurrentModificationException" => Self::ConcurrentModificationException,
            "ConstraintViolationException" => Self::ConstraintViolationException,
            "CreateAccountStatusNotFoundException" => Self::CreateAccountStatusNotFoundException,
            "DestinationParentNotFoundException" => Self::DestinationParentNotFoundException,
            "DuplicateAccountException" => Self::DuplicateAccountException,
            "DuplicateHandshakeException" => Self::DuplicateHandshakeException,
            "DuplicateOrganizationalUnitException" => Self::DuplicateOrganizationalUnitException,
            "DuplicatePolicyAttachmentException" => Self::DuplicatePolicyAttachmentException,
            "DuplicatePolicyException" => Self::DuplicatePolicyException,
            "EffectivePolicyNotFoundException" => Self::EffectivePolicyNotFoundException,
            "FinalizingOrganizationException" => Self::FinalizingOrganizationException,
            "HandshakeAlreadyInStateException" => Self::HandshakeAlreadyInStateException,
            "HandshakeConstraintViolationException" => Self::HandshakeConstraintViolationException,
            "HandshakeNotFoundException" => Self::HandshakeNotFoundException,
            "InvalidHandshakeTransitionException" => Self::InvalidHandshakeTransitionException,
            "InvalidInputException" => Self::InvalidInputException,
            "MalformedPolicyDocumentException" => Self::MalformedPolicyDocumentException,
            "MasterCannotLeaveOrganizationException" => Self::MasterCannotLeaveOrganizationException,
            "OrganizationNotEmptyException" => Self::OrganizationNotEmptyException,
            "OrganizationalUnitNotEmptyException" => Self::OrganizationalUnitNotEmptyException,
            "OrganizationalUnitNotFoundException" => Self::OrganizationalUnitNotFoundException,
            "ParentNotFoundException" => Self::ParentNotFoundException,
            "PolicyChangesInProgressException" => Self::PolicyChangesInProgressException,
            "PolicyInUseException" => Self::PolicyInUseException,
            "PolicyNotAttachedException" => Self::PolicyNotAttachedException,
            "PolicyNotFoundException" => Self::PolicyNotFoundException,
            "PolicyTypeAlreadyEnabledException" => Self::PolicyTypeAlreadyEnabledException,
            "PolicyTypeNotAvailableForOrganizationException" => Self::PolicyTypeNotAvailableForOrganizationException,
            "PolicyTypeNotEnabledException" => Self::PolicyTypeNotEnabledException,
            "RootNotFoundException" => Self::RootNotFoundException,
            "ServiceException" => Self::ServiceException,
            "SourceParentNotFoundException" => Self::SourceParentNotFoundException,
            "TargetNotFoundException" => Self::TargetNotFoundException,
            "TooManyRequestsException" => Self::TooManyRequestsException,
            "UnsupportedAPIEndpointException" => Self::UnsupportedApiEndpointException,
            _ => Self::Unknown,
        }
    }

    /// Whether the service attaches a `Reason` member to this exception.
    #[must_use]
    pub fn has_reason(&self) -> bool {
        matches!(
            self,
            Self::AccessDeniedForDependencyException
                | Self::ConstraintViolationException
                | Self::HandshakeConstraintViolationException
                | Self::InvalidInputException
        )
    }

    /// Returns the default HTTP status code for this error.
    #[must_use]
    pub fn default_status_code(&self) -> http::StatusCode {
        match self {
            Self::ServiceException => http::StatusCode::INTERNAL_SERVER_ERROR,
            _ => http::StatusCode::BAD_REQUEST,
        }
    }

    /// Whether a client may retry the request unchanged.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::ConcurrentModificationException
                | Self::FinalizingOrganizationException
                | Self::ServiceException
                | Self::TooManyRequestsException
        )
    }
}

impl fmt::Display for OrganizationsErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An AWS Organizations error response.
#[derive(Debug)]
pub struct OrganizationsError {
    /// The error code.
    pub code: OrganizationsErrorCode,
    /// A human-readable error message.
    pub message: String,
    /// The `Reason` member, for exceptions that carry one.
    pub reason: Option<String>,
    /// The `Type` member of a `TooManyRequestsException`.
    pub kind: Option<String>,
    /// The exception name as received, when `code` is `Unknown`.
    pub unmodeled_type: Option<String>,
    /// The HTTP status code.
    pub status_code: http::StatusCode,
    /// The underlying source error, if any.
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for OrganizationsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OrganizationsError({}): {}", self.error_type(), self.message)?;
        if let Some(reason) = &self.reason {
            write!(f, " (reason: {reason})")?;
        }
        Ok(())
    }
}

impl std::error::Error for OrganizationsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

impl OrganizationsError {
    /// Create a new `OrganizationsError` from an error code.
    #[must_use]
    pub fn new(code: OrganizationsErrorCode) -> Self {
        Self::with_message(code, code.as_str())
    }

    /// Create a new `OrganizationsError` with a custom message.
    #[must_use]
    pub fn with_message(code: OrganizationsErrorCode, message: impl Into<String>) -> Self {
        Self {
            status_code: code.default_status_code(),
            message: message.into(),
            code,
            reason: None,
            kind: None,
            unmodeled_type: None,
            source: None,
        }
    }

    /// Create an error for an exception name this model does not know.
    #[must_use]
    pub fn unmodeled(error_type: impl Into<String>, message: impl Into<String>) -> Self {
        let mut err = Self::with_message(OrganizationsErrorCode::Unknown, message);
        err.unmodeled_type = Some(error_type.into());
        err
    }

    /// Set the `Reason` member.
    #[must_use]
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// Set the `Type` member.
    #[must_use]
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// Override the HTTP status code.
    #[must_use]
    pub fn with_status(mut self, status_code: http::StatusCode) -> Self {
        self.status_code = status_code;
        self
    }

    /// Set the source error.
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Returns the `__type` string for the JSON error document.
    #[must_use]
    pub fn error_type(&self) -> &str {
        match (&self.code, &self.unmodeled_type) {
            (OrganizationsErrorCode::Unknown, Some(raw)) => raw.as_str(),
            (code, _) => code.error_type(),
        }
    }

    // -- Convenience constructors --

    /// Invalid request parameter with its `InvalidInputExceptionReason`.
    #[must_use]
    pub fn invalid_input(
        reason: &crate::types::InvalidInputExceptionReason,
        message: impl Into<String>,
    ) -> Self {
        Self::with_message(OrganizationsErrorCode::InvalidInputException, message)
            .with_reason(reason.as_str())
    }

    /// Limit or constraint violation with its `ConstraintViolationExceptionReason`.
    #[must_use]
    pub fn constraint_violation(
        reason: &crate::types::ConstraintViolationExceptionReason,
        message: impl Into<String>,
    ) -> Self {
        Self::with_message(OrganizationsErrorCode::ConstraintViolationException, message)
            .with_reason(reason.as_str())
    }

    /// Access denied.
    #[must_use]
    pub fn access_denied(message: impl Into<String>) -> Self {
        Self::with_message(OrganizationsErrorCode::AccessDeniedException, message)
    }

    /// Internal service error.
    #[must_use]
    pub fn service(message: impl Into<String>) -> Self {
        Self::with_message(OrganizationsErrorCode::ServiceException, message)
    }

    /// Request rate exceeded.
    #[must_use]
    pub fn too_many_requests(message: impl Into<String>) -> Self {
        Self::with_message(OrganizationsErrorCode::TooManyRequestsException, message)
    }
}

/// Create an `OrganizationsError` from an error code.
///
/// # Examples
///
/// ```
/// use ruststack_organizations_model::organizations_error;
/// use ruststack_organizations_model::error::OrganizationsErrorCode;
///
/// let err = organizations_error!(AccountNotFoundException);
/// assert_eq!(err.code, OrganizationsErrorCode::AccountNotFoundException);
///
/// let err = organizations_error!(PolicyNotFoundException, "Policy p-12345678 not found");
/// assert_eq!(err.message, "Policy p-12345678 not found");
/// ```
#[macro_export]
macro_rules! organizations_error {
    ($code:ident) => {
        $crate::error::OrganizationsError::new($crate::error::OrganizationsErrorCode::$code)
    };
    ($code:ident, $msg:expr) => {
        $crate::error::OrganizationsError::with_message(
            $crate::error::OrganizationsErrorCode::$code,
            $msg,
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ConstraintViolationExceptionReason, InvalidInputExceptionReason};

    #[test]
    fn test_should_map_every_code_name_back() {
        assert_eq!(OrganizationsErrorCode::ALL.len(), 44);
        for code in OrganizationsErrorCode::ALL {
            assert_eq!(OrganizationsErrorCode::from_name(code.as_str()), *code);
        }
    }

    #[test]
    fn test_should_map_unmodeled_name_to_unknown() {
        assert_eq!(
            OrganizationsErrorCode::from_name("CloudHsmClusterInUseException"),
            OrganizationsErrorCode::Unknown
        );
    }

    #[test]
    fn test_should_use_500_for_service_exception_only() {
        assert_eq!(
            OrganizationsErrorCode::ServiceException.default_status_code(),
            http::StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            OrganizationsErrorCode::TooManyRequestsException.default_status_code(),
            http::StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_should_attach_reason() {
        let err = OrganizationsError::invalid_input(
            &InvalidInputExceptionReason::InvalidPattern,
            "AccountId must be 12 digits",
        );
        assert_eq!(err.code, OrganizationsErrorCode::InvalidInputException);
        assert_eq!(err.reason.as_deref(), Some("INVALID_PATTERN"));
        assert_eq!(
            err.to_string(),
            "OrganizationsError(InvalidInputException): AccountId must be 12 digits (reason: INVALID_PATTERN)"
        );
    }

    #[test]
    fn test_should_build_constraint_violation() {
        let err = OrganizationsError::constraint_violation(
            &ConstraintViolationExceptionReason::OuDepthLimitExceeded,
            "too deep",
        );
        assert!(err.code.has_reason());
        assert_eq!(err.reason.as_deref(), Some("OU_DEPTH_LIMIT_EXCEEDED"));
    }

    #[test]
    fn test_should_report_unmodeled_type() {
        let err = OrganizationsError::unmodeled("ThrottlingException", "slow down");
        assert_eq!(err.code, OrganizationsErrorCode::Unknown);
        assert_eq!(err.error_type(), "ThrottlingException");
    }

    #[test]
    fn test_should_expose_source() {
        use std::error::Error as _;

        let io = std::io::Error::other("boom");
        let err = OrganizationsError::service("wrapped").with_source(io);
        assert!(err.source().is_some());
    }

    #[test]
    fn test_should_classify_retryable_codes() {
        assert!(OrganizationsErrorCode::TooManyRequestsException.is_retryable());
        assert!(!OrganizationsErrorCode::AccessDeniedException.is_retryable());
    }
}
