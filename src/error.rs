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

use thiserror::Error;

/// Errors raised while talking to the KeyHub REST API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The provider block has not been configured yet.
    #[error("KeyHub client is not configured")]
    NotConfigured,

    /// A configuration value is missing or invalid.
    #[error("invalid KeyHub configuration: {0}")]
    Config(String),

    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("failed to parse KeyHub response: {0}")]
    Parse(#[from] serde_json::Error),

    /// KeyHub answered with a non-success status.
    #[error("KeyHub API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    /// The OAuth2 token endpoint refused the client credentials.
    #[error("failed to obtain KeyHub access token: {0}")]
    Token(String),
}

pub type Result<T> = core::result::Result<T, ApiError>;
