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

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::error::{ApiError, Result};

use super::{KeyHubClient, ListResponse, Transport};

/// Provider-wide handle on the KeyHub client
///
/// Data sources are built before the provider block is configured, so they
/// hold this handle and the provider binds the client once configured.
#[derive(Debug, Clone, Default)]
pub struct SharedClient {
    inner: Arc<RwLock<Option<KeyHubClient>>>,
}

impl SharedClient {
    pub fn bind(&self, client: KeyHubClient) {
        let mut slot = match self.inner.write() {
            Ok(slot) => slot,
            Err(poisoned) => poisoned.into_inner(),
        };
        *slot = Some(client);
    }

    pub fn get(&self) -> Result<KeyHubClient> {
        let slot = match self.inner.read() {
            Ok(slot) => slot,
            Err(poisoned) => poisoned.into_inner(),
        };
        slot.clone().ok_or(ApiError::NotConfigured)
    }

    pub fn is_configured(&self) -> bool {
        self.get().is_ok()
    }
}

#[async_trait]
impl Transport for SharedClient {
    async fn list_by_uuid<M>(
        &self,
        endpoint: &str,
        uuid: &str,
        additional: &[String],
    ) -> Result<Option<ListResponse<M>>>
    where
        M: DeserializeOwned + Send + 'static,
    {
        let client = self.get()?;
        client.list_by_uuid(endpoint, uuid, additional).await
    }
}
