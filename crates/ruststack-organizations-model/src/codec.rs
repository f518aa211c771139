//! `awsJson1_1` request and response codec.
//!
//! Requests are `POST /` with a JSON body and the operation named in the
//! `X-Amz-Target` header. Errors come back as a JSON document:
//!
//! ```json
//! {
//!   "__type": "AccountNotFoundException",
//!   "Message": "You specified an account that doesn't exist."
//! }
//! ```

use bytes::Bytes;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::OrganizationsConfig;
use crate::error::{OrganizationsError, OrganizationsErrorCode};
use crate::operations::OrganizationsOperation;
use crate::request::OrganizationsRequest;

/// Content type of every request and response body.
pub const CONTENT_TYPE: &str = "application/x-amz-json-1.1";

/// Header some endpoints use to name the error instead of `__type`.
pub const ERROR_TYPE_HEADER: &str = "x-amzn-errortype";

/// Local marshalling failures.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The input could not be serialized.
    #[error("failed to serialize {operation} request: {source}")]
    Serialize {
        operation: OrganizationsOperation,
        #[source]
        source: serde_json::Error,
    },

    /// The response body did not match the output shape.
    #[error("failed to deserialize {operation} response: {source}")]
    Deserialize {
        operation: OrganizationsOperation,
        #[source]
        source: serde_json::Error,
    },

    /// The HTTP request could not be assembled (for example a bad endpoint).
    #[error("failed to build HTTP request: {0}")]
    Http(#[from] http::Error),

    /// The service answered with an error document.
    #[error(transparent)]
    Service(Box<OrganizationsError>),
}

impl From<OrganizationsError> for CodecError {
    fn from(err: OrganizationsError) -> Self {
        Self::Service(Box::new(err))
    }
}

/// Encode an input shape into a complete HTTP request.
pub fn encode<R: OrganizationsRequest>(
    config: &OrganizationsConfig,
    input: &R,
) -> Result<http::Request<Bytes>, CodecError> {
    encode_request(config, R::OPERATION, input)
}

/// Encode any serializable body as a request to `operation`.
pub fn encode_request<T: Serialize + ?Sized>(
    config: &OrganizationsConfig,
    operation: OrganizationsOperation,
    input: &T,
) -> Result<http::Request<Bytes>, CodecError> {
    let body = serde_json::to_vec(input)
        .map_err(|source| CodecError::Serialize { operation, source })?;
    let target = operation.target();

    tracing::debug!(
        operation = %operation,
        target = %target,
        body_len = body.len(),
        "encoded Organizations request"
    );

    let request = http::Request::builder()
        .method(http::Method::POST)
        .uri(config.request_uri())
        .header(http::header::CONTENT_TYPE, CONTENT_TYPE)
        .header("x-amz-target", target)
        .body(Bytes::from(body))?;
    Ok(request)
}

/// Decode a successful response body into the output shape.
///
/// Operations without a result body ignore `body`. An empty body decodes
/// to the default output.
pub fn decode_output<T: DeserializeOwned + Default>(
    operation: OrganizationsOperation,
    body: &[u8],
) -> Result<T, CodecError> {
    if !operation.has_output() || body.iter().all(u8::is_ascii_whitespace) {
        tracing::debug!(operation = %operation, "decoded empty Organizations response");
        return Ok(T::default());
    }

    let output = serde_json::from_slice(body)
        .map_err(|source| CodecError::Deserialize { operation, source })?;
    tracing::debug!(
        operation = %operation,
        body_len = body.len(),
        "decoded Organizations response"
    );
    Ok(output)
}

/// Decode a full HTTP response for input shape `R`.
///
/// Non-2xx responses are returned as [`CodecError::Service`].
pub fn decode<R: OrganizationsRequest>(
    response: &http::Response<Bytes>,
) -> Result<R::Output, CodecError> {
    if response.status().is_success() {
        decode_output(R::OPERATION, response.body())
    } else {
        Err(decode_error(response.status(), response.headers(), response.body()).into())
    }
}

/// Decode an error response into an [`OrganizationsError`].
///
/// The exception name comes from the body's `__type` (or `code`) member,
/// falling back to the `x-amzn-errortype` header. Namespace prefixes
/// (`aws.organizations#`) and trailing `:`-separated details are dropped.
#[must_use]
pub fn decode_error(
    status: http::StatusCode,
    headers: &http::HeaderMap,
    body: &[u8],
) -> OrganizationsError {
    let document: serde_json::Value = serde_json::from_slice(body).unwrap_or_default();
    let member = |name: &str| {
        document
            .get(name)
            .and_then(serde_json::Value::as_str)
            .filter(|s| !s.is_empty())
    };

    let raw_type = member("__type")
        .or_else(|| member("code"))
        .or_else(|| headers.get(ERROR_TYPE_HEADER).and_then(|v| v.to_str().ok()))
        .unwrap_or_default();
    let error_type = sanitize_error_type(raw_type);
    let message = member("Message")
        .or_else(|| member("message"))
        .unwrap_or_default();

    let code = OrganizationsErrorCode::from_name(error_type);
    let mut error = if code == OrganizationsErrorCode::Unknown {
        let name = if error_type.is_empty() {
            status.canonical_reason().unwrap_or("UnknownError")
        } else {
            error_type
        };
        OrganizationsError::unmodeled(name, message)
    } else {
        OrganizationsError::with_message(code, message)
    };
    error.status_code = status;

    let unmodeled = code == OrganizationsErrorCode::Unknown;
    if code.has_reason() || unmodeled {
        if let Some(reason) = member("Reason") {
            error = error.with_reason(reason);
        }
    }
    if code == OrganizationsErrorCode::TooManyRequestsException || unmodeled {
        if let Some(kind) = member("Type") {
            error = error.with_kind(kind);
        }
    }

    tracing::debug!(
        status = status.as_u16(),
        error_type = %error.error_type(),
        reason = ?error.reason,
        "decoded Organizations error"
    );
    error
}

/// Strip the namespace and detail parts of an error type string.
fn sanitize_error_type(raw: &str) -> &str {
    let name = raw.split_once(':').map_or(raw, |(name, _)| name);
    let name = name.split_once('#').map_or(name, |(_, name)| name);
    name.trim()
}

/// Serialize an [`OrganizationsError`] into its JSON error document.
#[must_use]
pub fn error_to_json(error: &OrganizationsError) -> Vec<u8> {
    let mut document = serde_json::json!({
        "__type": error.error_type(),
        "Message": error.message,
    });
    if let Some(reason) = &error.reason {
        document["Reason"] = serde_json::Value::from(reason.as_str());
    }
    if let Some(kind) = &error.kind {
        document["Type"] = serde_json::Value::from(kind.as_str());
    }
    document.to_string().into_bytes()
}

/// Convert an [`OrganizationsError`] into a complete HTTP error response.
#[must_use]
pub fn error_to_response(error: &OrganizationsError, request_id: &str) -> http::Response<Bytes> {
    let mut response = http::Response::new(Bytes::from(error_to_json(error)));
    *response.status_mut() = error.status_code;
    let headers = response.headers_mut();
    headers.insert(
        http::header::CONTENT_TYPE,
        http::HeaderValue::from_static(CONTENT_TYPE),
    );
    if let Ok(hv) = http::HeaderValue::from_str(request_id) {
        headers.insert("x-amzn-requestid", hv);
    }
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{
        AttachPolicyInput, DescribeAccountInput, DescribeOrganizationInput, ListRootsInput,
    };
    use crate::output::ListRootsOutput;
    use crate::types::InvalidInputExceptionReason;

    fn response_with(status: u16, body: &str) -> http::Response<Bytes> {
        let mut response = http::Response::new(Bytes::from(body.to_owned()));
        *response.status_mut() = http::StatusCode::from_u16(status).expect("valid status");
        response
    }

    #[test]
    fn test_should_encode_request_headers_and_body() {
        let input = DescribeAccountInput::builder()
            .account_id("111111111111")
            .build();
        let request = encode(&OrganizationsConfig::default(), &input).expect("encode request");

        assert_eq!(request.method(), http::Method::POST);
        assert_eq!(
            request.uri(),
            "https://organizations.us-east-1.amazonaws.com/"
        );
        assert_eq!(
            request.headers().get("content-type").expect("content-type"),
            CONTENT_TYPE
        );
        assert_eq!(
            request.headers().get("x-amz-target").expect("target"),
            "AWSOrganizationsV20161128.DescribeAccount"
        );
        assert_eq!(request.body().as_ref(), br#"{"AccountId":"111111111111"}"#);
    }

    #[test]
    fn test_should_encode_empty_input_as_empty_object() {
        let request = encode(&OrganizationsConfig::default(), &DescribeOrganizationInput {})
            .expect("encode request");
        assert_eq!(request.body().as_ref(), b"{}");
    }

    #[test]
    fn test_should_reject_invalid_endpoint() {
        let config = OrganizationsConfig::builder().endpoint("not a uri").build();
        let err = encode(&config, &ListRootsInput::default()).expect_err("bad endpoint");
        assert!(matches!(err, CodecError::Http(_)));
    }

    #[test]
    fn test_should_decode_empty_body_to_default() {
        let output: ListRootsOutput =
            decode_output(OrganizationsOperation::ListRoots, b"").expect("decode empty");
        assert!(output.roots.is_empty());
        assert!(output.next_token.is_none());
    }

    #[test]
    fn test_should_ignore_body_of_operation_without_output() {
        let response = response_with(200, "{}");
        decode::<AttachPolicyInput>(&response).expect("decode unit output");
    }

    #[test]
    fn test_should_report_malformed_output() {
        let err = decode_output::<ListRootsOutput>(OrganizationsOperation::ListRoots, b"[1,2]")
            .expect_err("malformed body");
        assert!(matches!(
            err,
            CodecError::Deserialize {
                operation: OrganizationsOperation::ListRoots,
                ..
            }
        ));
    }

    #[test]
    fn test_should_decode_error_with_reason() {
        let body = br#"{"__type":"InvalidInputException","Message":"bad id","Reason":"INVALID_PATTERN"}"#;
        let err = decode_error(http::StatusCode::BAD_REQUEST, &http::HeaderMap::new(), body);
        assert_eq!(err.code, OrganizationsErrorCode::InvalidInputException);
        assert_eq!(err.message, "bad id");
        assert_eq!(err.reason.as_deref(), Some("INVALID_PATTERN"));
    }

    #[test]
    fn test_should_strip_namespace_and_detail() {
        let body = br#"{"__type":"aws.organizations#PolicyNotFoundException:http://internal","message":"gone"}"#;
        let err = decode_error(http::StatusCode::BAD_REQUEST, &http::HeaderMap::new(), body);
        assert_eq!(err.code, OrganizationsErrorCode::PolicyNotFoundException);
        assert_eq!(err.message, "gone");
    }

    #[test]
    fn test_should_fall_back_to_error_type_header() {
        let mut headers = http::HeaderMap::new();
        headers.insert(
            ERROR_TYPE_HEADER,
            http::HeaderValue::from_static("TooManyRequestsException"),
        );
        let err = decode_error(http::StatusCode::BAD_REQUEST, &headers, b"");
        assert_eq!(err.code, OrganizationsErrorCode::TooManyRequestsException);
        assert!(err.message.is_empty());
    }

    #[test]
    fn test_should_decode_too_many_requests_type() {
        let body = br#"{"__type":"TooManyRequestsException","Message":"slow down","Type":"CreateAccount"}"#;
        let err = decode_error(http::StatusCode::BAD_REQUEST, &http::HeaderMap::new(), body);
        assert_eq!(err.code, OrganizationsErrorCode::TooManyRequestsException);
        assert_eq!(err.kind.as_deref(), Some("CreateAccount"));
        assert!(err.reason.is_none());
    }

    #[test]
    fn test_should_drop_members_the_exception_does_not_carry() {
        let body = br#"{"__type":"AccountNotFoundException","Message":"missing","Reason":"BOGUS","Type":"BOGUS"}"#;
        let err = decode_error(http::StatusCode::BAD_REQUEST, &http::HeaderMap::new(), body);
        assert_eq!(err.code, OrganizationsErrorCode::AccountNotFoundException);
        assert!(err.reason.is_none());
        assert!(err.kind.is_none());
    }

    #[test]
    fn test_should_use_header_when_body_type_is_empty() {
        let mut headers = http::HeaderMap::new();
        headers.insert(
            ERROR_TYPE_HEADER,
            http::HeaderValue::from_static("PolicyInUseException"),
        );
        let body = br#"{"__type":"","Message":"attached"}"#;
        let err = decode_error(http::StatusCode::BAD_REQUEST, &headers, body);
        assert_eq!(err.code, OrganizationsErrorCode::PolicyInUseException);
        assert_eq!(err.message, "attached");
    }

    #[test]
    fn test_should_keep_unmodeled_error_name_and_status() {
        let body = br#"{"__type":"ThrottlingException","Message":"Rate exceeded","Type":"ThrottlingException"}"#;
        let err = decode_error(
            http::StatusCode::SERVICE_UNAVAILABLE,
            &http::HeaderMap::new(),
            body,
        );
        assert_eq!(err.code, OrganizationsErrorCode::Unknown);
        assert_eq!(err.error_type(), "ThrottlingException");
        assert_eq!(err.kind.as_deref(), Some("ThrottlingException"));
        assert_eq!(err.status_code, http::StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_should_surface_service_error_from_decode() {
        let response = response_with(
            400,
            r#"{"__type":"AWSOrganizationsNotInUseException","Message":"not in use"}"#,
        );
        let err = decode::<ListRootsInput>(&response).expect_err("service error");
        let service = match err {
            CodecError::Service(service) => service,
            other => panic!("expected service error, got {other:?}"),
        };
        assert_eq!(
            service.code,
            OrganizationsErrorCode::AwsOrganizationsNotInUseException
        );
    }

    #[test]
    fn test_should_format_error_json() {
        let err = OrganizationsError::invalid_input(
            &InvalidInputExceptionReason::InputRequired,
            "AccountId is required",
        );
        let json = error_to_json(&err);
        let parsed: serde_json::Value = serde_json::from_slice(&json).expect("parse error json");
        assert_eq!(parsed["__type"], "InvalidInputException");
        assert_eq!(parsed["Message"], "AccountId is required");
        assert_eq!(parsed["Reason"], "INPUT_REQUIRED");
        assert!(parsed.get("Type").is_none());
    }

    #[test]
    fn test_should_round_trip_error_through_response() {
        let err = OrganizationsError::service("internal failure");
        let response = error_to_response(&err, "req-123");
        assert_eq!(response.status(), http::StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.headers().get("x-amzn-requestid").expect("request id"),
            "req-123"
        );

        let decoded = decode_error(response.status(), response.headers(), response.body());
        assert_eq!(decoded.code, OrganizationsErrorCode::ServiceException);
        assert_eq!(decoded.message, "internal failure");
    }
}
