// This file is part of the terraform-provider-keyhub project
//
// Copyright (C) ANEO, 2024-2024. All rights reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License")
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Tests for the KeyHub REST client.
//!
//! Uses wiremock to stand in for the token endpoint and the REST API.

use std::borrow::Cow;

use terraform_provider_keyhub::client::{KeyHubClient, KeyHubConfig, SharedClient, Transport};
use terraform_provider_keyhub::entity::{Client, ClientState, KeyHubDataSource};
use terraform_provider_keyhub::error::ApiError;
use tf_provider::value::{Value, ValueEmpty};
use tf_provider::{AttributePath, DataSource, Diagnostics};
use wiremock::matchers::{body_string_contains, header, header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> KeyHubClient {
    KeyHubClient::new(&KeyHubConfig {
        issuer: server.uri(),
        client_id: "terraform".to_string(),
        client_secret: "s3cr3t".to_string(),
    })
    .unwrap()
}

async fn mount_token(server: &MockServer, expected_calls: u64) {
    Mock::given(method("POST"))
        .and(path("/login/oauth2/token"))
        .and(header_exists("authorization"))
        .and(body_string_contains("grant_type=client_credentials"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "token-1",
            "token_type": "bearer",
            "expires_in": 3600
        })))
        .expect(expected_calls)
        .mount(server)
        .await;
}

fn client_record(uuid: &str, name: &str) -> serde_json::Value {
    serde_json::json!({
        "$type": "client.OAuth2Client",
        "uuid": uuid,
        "name": name,
        "clientId": "grafana",
        "type": "OAUTH2",
        "owner": { "uuid": "group-uuid", "name": "Ops" },
        "additionalObjects": {
            "$type": "client.ClientApplication.AdditionalObjects",
            "audit": { "createdBy": "admin" }
        }
    })
}

#[tokio::test]
async fn test_list_by_uuid_sends_query_and_token() {
    let server = MockServer::start().await;
    mount_token(&server, 1).await;

    Mock::given(method("GET"))
        .and(path("/keyhub/rest/v1/client"))
        .and(query_param("uuid", "abc-123"))
        .and(query_param("additional", "audit"))
        .and(header("authorization", "Bearer token-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "$type": "LinkableWrapper",
            "items": [client_record("abc-123", "Grafana")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client(&server)
        .list_by_uuid::<serde_json::Value>("client", "abc-123", &["audit".to_string()])
        .await
        .expect("request should succeed")
        .expect("body should be present");

    assert_eq!(response.type_name.as_deref(), Some("LinkableWrapper"));
    assert_eq!(response.items.len(), 1);
    assert_eq!(response.items[0]["name"], "Grafana");
}

#[tokio::test]
async fn test_token_is_cached_between_requests() {
    let server = MockServer::start().await;
    mount_token(&server, 1).await;

    Mock::given(method("GET"))
        .and(path("/keyhub/rest/v1/system"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "items": [] })))
        .expect(2)
        .mount(&server)
        .await;

    let client = client(&server);
    for uuid in ["first", "second"] {
        let response = client
            .list_by_uuid::<serde_json::Value>("system", uuid, &[])
            .await
            .unwrap()
            .unwrap();
        assert!(response.items.is_empty());
    }
}

#[tokio::test]
async fn test_additional_is_repeated_per_name() {
    let server = MockServer::start().await;
    mount_token(&server, 1).await;

    Mock::given(method("GET"))
        .and(path("/keyhub/rest/v1/vaultrecord"))
        .and(query_param("uuid", "record-uuid"))
        .and(query_param("additional", "audit"))
        .and(query_param("additional", "secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "items": [] })))
        .expect(1)
        .mount(&server)
        .await;

    client(&server)
        .list_by_uuid::<serde_json::Value>(
            "vaultrecord",
            "record-uuid",
            &["audit".to_string(), "secret".to_string()],
        )
        .await
        .expect("request should succeed");

    let requests = server.received_requests().await.unwrap();
    let get = requests
        .iter()
        .find(|request| request.method.as_str() == "GET")
        .expect("GET request should be recorded");
    let additional: Vec<String> = get
        .url
        .query_pairs()
        .filter(|(name, _)| name == "additional")
        .map(|(_, value)| value.into_owned())
        .collect();
    assert_eq!(additional, ["audit", "secret"]);
}

#[tokio::test]
async fn test_token_is_refreshed_near_expiry() {
    let server = MockServer::start().await;

    // Lifetime below the refresh margin, so every request needs a new token
    Mock::given(method("POST"))
        .and(path("/login/oauth2/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "short-lived",
            "expires_in": 10
        })))
        .expect(2)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/keyhub/rest/v1/system"))
        .and(header("authorization", "Bearer short-lived"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "items": [] })))
        .expect(2)
        .mount(&server)
        .await;

    let client = client(&server);
    for uuid in ["first", "second"] {
        client
            .list_by_uuid::<serde_json::Value>("system", uuid, &[])
            .await
            .unwrap();
    }
}

#[tokio::test]
async fn test_no_content_is_absent() {
    let server = MockServer::start().await;
    mount_token(&server, 1).await;

    Mock::given(method("GET"))
        .and(path("/keyhub/rest/v1/directory"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let response = client(&server)
        .list_by_uuid::<serde_json::Value>("directory", "gone", &[])
        .await
        .unwrap();

    assert!(response.is_none());
}

#[tokio::test]
async fn test_api_error_carries_status_and_message() {
    let server = MockServer::start().await;
    mount_token(&server, 1).await;

    Mock::given(method("GET"))
        .and(path("/keyhub/rest/v1/vaultrecord"))
        .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({
            "code": 500,
            "message": "database offline"
        })))
        .mount(&server)
        .await;

    let err = client(&server)
        .list_by_uuid::<serde_json::Value>("vaultrecord", "abc", &[])
        .await
        .unwrap_err();

    match err {
        ApiError::Api { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "database offline");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_rejected_credentials() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/login/oauth2/token"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "error": "invalid_client",
            "error_description": "Client authentication failed"
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/keyhub/rest/v1/client"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = client(&server)
        .list_by_uuid::<serde_json::Value>("client", "abc", &[])
        .await
        .unwrap_err();

    match err {
        ApiError::Token(message) => assert_eq!(message, "Client authentication failed"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_data_source_reads_through_shared_client() {
    let server = MockServer::start().await;
    mount_token(&server, 1).await;

    Mock::given(method("GET"))
        .and(path("/keyhub/rest/v1/client"))
        .and(query_param("uuid", "abc-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "items": [client_record("abc-123", "Grafana")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let shared = SharedClient::default();
    let data_source = KeyHubDataSource::<Client, _>::new(shared.clone());
    shared.bind(client(&server));

    let mut diags = Diagnostics::default();
    let state = DataSource::read(
        &data_source,
        &mut diags,
        ClientState {
            uuid: Value::Value(Cow::Borrowed("abc-123")),
            ..Default::default()
        },
        ValueEmpty::default(),
    )
    .await
    .expect("read should succeed");

    assert!(diags.errors.is_empty(), "{diags:?}");
    assert_eq!(state.name, Value::Value(Cow::Borrowed("Grafana")));
    assert_eq!(state.owner_uuid, Value::Value(Cow::Borrowed("group-uuid")));
}

#[tokio::test]
async fn test_data_source_reports_duplicate_records() {
    let server = MockServer::start().await;
    mount_token(&server, 1).await;

    Mock::given(method("GET"))
        .and(path("/keyhub/rest/v1/client"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "items": [client_record("dup", "one"), client_record("dup", "two")]
        })))
        .mount(&server)
        .await;

    let data_source = KeyHubDataSource::<Client, _>::new(client(&server));

    let mut diags = Diagnostics::default();
    let state = DataSource::read(
        &data_source,
        &mut diags,
        ClientState {
            uuid: Value::Value(Cow::Borrowed("dup")),
            ..Default::default()
        },
        ValueEmpty::default(),
    )
    .await;

    assert!(state.is_none());
    assert_eq!(diags.errors.len(), 1);
    assert_eq!(diags.errors[0].attribute, AttributePath::new("uuid"));
    assert!(diags.errors[0].summary.contains("matched 2 records"));
}

#[tokio::test]
async fn test_unconfigured_provider_fails_reads() {
    let data_source = KeyHubDataSource::<Client, _>::new(SharedClient::default());

    let mut diags = Diagnostics::default();
    let state = DataSource::read(
        &data_source,
        &mut diags,
        ClientState {
            uuid: Value::Value(Cow::Borrowed("abc")),
            ..Default::default()
        },
        ValueEmpty::default(),
    )
    .await;

    assert!(state.is_none());
    assert_eq!(diags.errors.len(), 1);
    assert!(diags.errors[0].detail.contains("not configured"));
}
