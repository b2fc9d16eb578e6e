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

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use time::OffsetDateTime;
use tokio::sync::Mutex;
use url::Url;

use crate::error::{ApiError, Result};

use super::{ListResponse, Transport};

const USER_AGENT: &str = concat!("terraform-provider-keyhub/", env!("CARGO_PKG_VERSION"));
const KEYHUB_MEDIA_TYPE: &str = "application/vnd.topicus.keyhub+json;version=latest";
const TOKEN_PATH: &str = "login/oauth2/token";
const REST_PATH: &str = "keyhub/rest/v1/";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);
/// Tokens are refreshed this long before KeyHub expires them
const TOKEN_MARGIN: time::Duration = time::Duration::seconds(30);
/// Lifetime assumed when the token endpoint does not send `expires_in`
const DEFAULT_TOKEN_LIFETIME: i64 = 300;
/// Upper bound on the lifetime accepted from the token endpoint
const MAX_TOKEN_LIFETIME: i64 = 24 * 60 * 60;

/// Connection settings of a KeyHub client
#[derive(Clone, Default, PartialEq, Eq)]
pub struct KeyHubConfig {
    pub issuer: String,
    pub client_id: String,
    pub client_secret: String,
}

impl std::fmt::Debug for KeyHubConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyHubConfig")
            .field("issuer", &self.issuer)
            .field("client_id", &self.client_id)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone)]
struct AccessToken {
    value: String,
    expires_at: OffsetDateTime,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<i64>,
}

/// HTTP client for the KeyHub REST API
///
/// Authenticates with the OAuth2 client credentials grant and caches the
/// access token until shortly before it expires. Clones share the
/// connection pool and the token.
#[derive(Clone)]
pub struct KeyHubClient {
    http: Client,
    issuer: Arc<Url>,
    rest: Arc<Url>,
    client_id: String,
    client_secret: String,
    token: Arc<Mutex<Option<AccessToken>>>,
}

impl std::fmt::Debug for KeyHubClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyHubClient")
            .field("issuer", &self.issuer.as_str())
            .field("client_id", &self.client_id)
            .finish_non_exhaustive()
    }
}

impl KeyHubClient {
    pub fn new(config: &KeyHubConfig) -> Result<Self> {
        let issuer = if config.issuer.ends_with('/') {
            Url::parse(&config.issuer)?
        } else {
            Url::parse(&format!("{}/", config.issuer))?
        };
        if !matches!(issuer.scheme(), "http" | "https") {
            return Err(ApiError::Config(format!(
                "issuer `{issuer}` must be an http or https URL"
            )));
        }
        let rest = issuer.join(REST_PATH)?;

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            issuer: Arc::new(issuer),
            rest: Arc::new(rest),
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
            token: Default::default(),
        })
    }

    pub fn issuer(&self) -> &Url {
        &self.issuer
    }

    /// Return a valid access token, requesting a new one if needed
    async fn access_token(&self) -> Result<String> {
        let mut cached = self.token.lock().await;
        if let Some(token) = cached.as_ref() {
            if token.expires_at - TOKEN_MARGIN > OffsetDateTime::now_utc() {
                return Ok(token.value.clone());
            }
        }

        tracing::debug!(issuer = %self.issuer, "Requesting KeyHub access token");
        let response = self
            .http
            .post(self.issuer.join(TOKEN_PATH)?)
            .basic_auth(&self.client_id, Some(&self.client_secret))
            .header(ACCEPT, "application/json")
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Token(extract_error_message(response, status).await));
        }

        let body = response.bytes().await?;
        let token: TokenResponse = serde_json::from_slice(&body)?;
        let token = AccessToken {
            value: token.access_token,
            expires_at: token_expiry(OffsetDateTime::now_utc(), token.expires_in),
        };
        let value = token.value.clone();
        *cached = Some(token);
        Ok(value)
    }

    /// GET a path relative to the REST root
    #[tracing::instrument(skip(self))]
    async fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<Response> {
        let url = self.rest.join(path)?;
        let token = self.access_token().await?;

        let response = self
            .http
            .get(url)
            .bearer_auth(token)
            .header(ACCEPT, KEYHUB_MEDIA_TYPE)
            .query(query)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(ApiError::Api {
                status: status.as_u16(),
                message: extract_error_message(response, status).await,
            })
        }
    }
}

#[async_trait]
impl Transport for KeyHubClient {
    async fn list_by_uuid<M>(
        &self,
        endpoint: &str,
        uuid: &str,
        additional: &[String],
    ) -> Result<Option<ListResponse<M>>>
    where
        M: DeserializeOwned + Send + 'static,
    {
        let mut query = vec![("uuid", uuid)];
        query.extend(additional.iter().map(|name| ("additional", name.as_str())));

        let response = self.get(endpoint, &query).await?;
        if response.status() == StatusCode::NO_CONTENT {
            return Ok(None);
        }

        let body = response.bytes().await?;
        if body.iter().all(|b| b.is_ascii_whitespace()) {
            return Ok(None);
        }
        Ok(Some(serde_json::from_slice(&body)?))
    }
}

/// Instant a token issued at `now` stops being usable
///
/// Negative lifetimes expire immediately, oversized ones are capped.
fn token_expiry(now: OffsetDateTime, expires_in: Option<i64>) -> OffsetDateTime {
    let lifetime = expires_in
        .unwrap_or(DEFAULT_TOKEN_LIFETIME)
        .clamp(0, MAX_TOKEN_LIFETIME);
    now + time::Duration::seconds(lifetime)
}

/// Extract a readable message from a failed response
async fn extract_error_message(response: Response, status: StatusCode) -> String {
    let body = match response.text().await {
        Ok(body) if !body.is_empty() => body,
        _ => return format!("HTTP {status}"),
    };

    if let Ok(json) = serde_json::from_str::<serde_json::Value>(&body) {
        for field in ["applicationError", "message", "error_description", "error"] {
            if let Some(message) = json.get(field).and_then(|m| m.as_str()) {
                return message.to_string();
            }
        }
    }

    body
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(issuer: &str) -> KeyHubConfig {
        KeyHubConfig {
            issuer: issuer.to_string(),
            client_id: "client-id".to_string(),
            client_secret: "s3cr3t".to_string(),
        }
    }

    #[test]
    fn debug_hides_secret() {
        let client = KeyHubClient::new(&config("https://keyhub.example.com")).unwrap();
        let debug = format!("{client:?}");
        assert!(debug.contains("KeyHubClient"));
        assert!(debug.contains("client-id"));
        assert!(!debug.contains("s3cr3t"));

        let debug = format!("{:?}", config("https://keyhub.example.com"));
        assert!(!debug.contains("s3cr3t"));
    }

    #[test]
    fn issuer_trailing_slash() {
        let a = KeyHubClient::new(&config("https://keyhub.example.com/base")).unwrap();
        let b = KeyHubClient::new(&config("https://keyhub.example.com/base/")).unwrap();
        assert_eq!(a.issuer().as_str(), b.issuer().as_str());
        assert_eq!(
            a.rest.as_str(),
            "https://keyhub.example.com/base/keyhub/rest/v1/"
        );
    }

    #[test]
    fn token_expiry_is_bounded() {
        let now = OffsetDateTime::from_unix_timestamp(1_700_000_000).unwrap();

        assert_eq!(
            token_expiry(now, None),
            now + time::Duration::seconds(DEFAULT_TOKEN_LIFETIME)
        );
        assert_eq!(token_expiry(now, Some(-5)), now);
        assert_eq!(
            token_expiry(now, Some(i64::MAX)),
            now + time::Duration::seconds(MAX_TOKEN_LIFETIME)
        );
    }

    #[test]
    fn invalid_issuer() {
        let err = KeyHubClient::new(&config("not a url")).unwrap_err();
        assert!(matches!(err, ApiError::Url(_)));

        let err = KeyHubClient::new(&config("ftp://keyhub.example.com")).unwrap_err();
        assert!(matches!(err, ApiError::Config(_)));
    }
}
