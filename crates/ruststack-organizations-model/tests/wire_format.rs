//! Service-shaped JSON documents decoded through the public API.

use std::sync::Once;

use bytes::Bytes;
use chrono::{TimeZone, Utc};
use ruststack_organizations_model::codec::{self, CodecError};
use ruststack_organizations_model::input::{
    CreateOrganizationalUnitInput, DescribeHandshakeInput, DescribeOrganizationInput,
    ListPoliciesInput, MoveAccountInput,
};
use ruststack_organizations_model::output::{DescribeHandshakeOutput, ListPoliciesOutput};
use ruststack_organizations_model::types::{
    ActionType, HandshakePartyType, HandshakeResourceType, HandshakeState,
    OrganizationFeatureSet, PolicyType, PolicyTypeStatus, Tag,
};
use ruststack_organizations_model::{
    OrganizationsConfig, OrganizationsErrorCode, OrganizationsRequest, Validate,
};

static INIT: Once = Once::new();

fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

fn response(status: u16, body: &str) -> http::Response<Bytes> {
    http::Response::builder()
        .status(status)
        .header("content-type", codec::CONTENT_TYPE)
        .body(Bytes::from(body.to_owned()))
        .expect("valid response")
}

#[test]
fn test_should_decode_describe_organization() {
    init_tracing();
    let body = r#"{
        "Organization": {
            "Id": "o-exampleorgid",
            "Arn": "arn:aws:organizations::111111111111:organization/o-exampleorgid",
            "FeatureSet": "ALL",
            "MasterAccountArn": "arn:aws:organizations::111111111111:account/o-exampleorgid/111111111111",
            "MasterAccountId": "111111111111",
            "MasterAccountEmail": "bill@example.com",
            "AvailablePolicyTypes": [
                {"Type": "SERVICE_CONTROL_POLICY", "Status": "ENABLED"},
                {"Type": "RESOURCE_CONTROL_POLICY", "Status": "PENDING_ENABLE"}
            ]
        }
    }"#;

    let output = codec::decode::<DescribeOrganizationInput>(&response(200, body))
        .expect("decode DescribeOrganization");
    let org = output.organization.expect("organization present");

    assert_eq!(org.id.as_deref(), Some("o-exampleorgid"));
    assert_eq!(org.feature_set, Some(OrganizationFeatureSet::All));
    assert_eq!(org.master_account_id.as_deref(), Some("111111111111"));
    assert_eq!(org.available_policy_types.len(), 2);
    assert_eq!(
        org.available_policy_types[0].r#type,
        Some(PolicyType::ServiceControlPolicy)
    );
    let unknown = org.available_policy_types[1]
        .r#type
        .as_ref()
        .expect("policy type present");
    assert!(!unknown.is_known());
    assert_eq!(unknown.as_str(), "RESOURCE_CONTROL_POLICY");
    assert_eq!(
        org.available_policy_types[1].status,
        Some(PolicyTypeStatus::PendingEnable)
    );
}

#[test]
fn test_should_decode_handshake_with_nested_resources() {
    init_tracing();
    let body = r#"{
        "Handshake": {
            "Id": "h-examplehandshakeid111",
            "Arn": "arn:aws:organizations::111111111111:handshake/o-exampleorgid/invite/h-examplehandshakeid111",
            "Parties": [
                {"Id": "o-exampleorgid", "Type": "ORGANIZATION"},
                {"Id": "juan@example.com", "Type": "EMAIL"}
            ],
            "State": "OPEN",
            "RequestedTimestamp": 1481835741.044,
            "ExpirationTimestamp": 1483131741,
            "Action": "INVITE",
            "Resources": [
                {
                    "Type": "ORGANIZATION",
                    "Value": "o-exampleorgid",
                    "Resources": [
                        {"Type": "MASTER_EMAIL", "Value": "bill@amazon.com"},
                        {"Type": "MASTER_NAME", "Value": "Org Master Account"},
                        {"Type": "ORGANIZATION_FEATURE_SET", "Value": "FULL"}
                    ]
                },
                {"Type": "EMAIL", "Value": "juan@example.com"}
            ]
        }
    }"#;

    let output: DescribeHandshakeOutput = codec::decode::<DescribeHandshakeInput>(&response(200, body))
        .expect("decode DescribeHandshake");
    let handshake = output.handshake.expect("handshake present");

    assert_eq!(handshake.state, Some(HandshakeState::Open));
    assert_eq!(handshake.action, Some(ActionType::Invite));
    assert_eq!(handshake.parties[1].r#type, HandshakePartyType::Email);
    let requested = handshake.requested_timestamp.expect("requested timestamp");
    assert_eq!(requested.timestamp(), 1_481_835_741);
    assert_eq!(requested.timestamp_subsec_millis(), 44);
    assert_eq!(
        handshake.expiration_timestamp,
        Some(Utc.with_ymd_and_hms(2016, 12, 30, 21, 2, 21).unwrap())
    );

    let org = &handshake.resources[0];
    assert_eq!(org.r#type, Some(HandshakeResourceType::Organization));
    assert_eq!(org.resources.len(), 3);
    assert_eq!(
        org.resources[0].r#type,
        Some(HandshakeResourceType::MasterEmail)
    );
    assert!(handshake.resources[1].resources.is_empty());
}

#[test]
fn test_should_encode_and_decode_list_policies() {
    init_tracing();
    let input = ListPoliciesInput::builder()
        .filter(PolicyType::ServiceControlPolicy)
        .max_results(10)
        .build();
    input.validate().expect("valid input");

    let request = codec::encode(&OrganizationsConfig::default(), &input).expect("encode");
    assert_eq!(
        request.headers().get("x-amz-target").expect("target"),
        "AWSOrganizationsV20161128.ListPolicies"
    );
    let sent: serde_json::Value = serde_json::from_slice(request.body()).expect("json body");
    assert_eq!(
        sent,
        serde_json::json!({"Filter": "SERVICE_CONTROL_POLICY", "MaxResults": 10})
    );

    let body = r#"{
        "Policies": [
            {
                "Id": "p-FullAWSAccess",
                "Arn": "arn:aws:organizations::aws:policy/service_control_policy/p-FullAWSAccess",
                "Name": "FullAWSAccess",
                "Description": "Allows access to every operation",
                "Type": "SERVICE_CONTROL_POLICY",
                "AwsManaged": true
            }
        ],
        "NextToken": "AAAABBBB"
    }"#;
    let output: ListPoliciesOutput =
        codec::decode::<ListPoliciesInput>(&response(200, body)).expect("decode ListPolicies");
    assert_eq!(output.policies.len(), 1);
    assert_eq!(output.policies[0].aws_managed, Some(true));
    assert_eq!(output.next_token.as_deref(), Some("AAAABBBB"));
}

#[test]
fn test_should_round_trip_create_organizational_unit_request() {
    init_tracing();
    let input = CreateOrganizationalUnitInput::builder()
        .parent_id("r-examplerootid111")
        .name("AccountingOU")
        .tags(vec![Tag::new("team", "finance")])
        .build();
    let request = codec::encode(&OrganizationsConfig::default(), &input).expect("encode");

    let decoded: CreateOrganizationalUnitInput =
        serde_json::from_slice(request.body()).expect("decode request body");
    assert_eq!(decoded, input);
    assert_eq!(
        <CreateOrganizationalUnitInput as OrganizationsRequest>::OPERATION.as_str(),
        "CreateOrganizationalUnit"
    );
}

#[test]
fn test_should_surface_service_errors() {
    init_tracing();
    let body = r#"{
        "__type": "ConstraintViolationException",
        "Message": "You have reached the maximum depth of OUs",
        "Reason": "OU_DEPTH_LIMIT_EXCEEDED"
    }"#;

    let err = codec::decode::<MoveAccountInput>(&response(400, body)).expect_err("service error");
    match err {
        CodecError::Service(service) => {
            assert_eq!(
                service.code,
                OrganizationsErrorCode::ConstraintViolationException
            );
            assert_eq!(service.reason.as_deref(), Some("OU_DEPTH_LIMIT_EXCEEDED"));
            assert_eq!(service.status_code, http::StatusCode::BAD_REQUEST);
        }
        other => panic!("expected service error, got {other:?}"),
    }
}

#[test]
fn test_should_accept_empty_success_body_for_unit_operations() {
    init_tracing();
    codec::decode::<MoveAccountInput>(&response(200, "")).expect("decode MoveAccount");
}
