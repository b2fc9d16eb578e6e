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

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::resolve::ListWrapper;

mod keyhub;
mod shared;

pub use keyhub::{KeyHubClient, KeyHubConfig};
pub use shared::SharedClient;

/// Envelope returned by KeyHub collection endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ListResponse<T> {
    /// Name of the wrapper type, eg: `client.ClientApplication.LinkableWrapper`
    #[serde(rename = "$type", default, skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

impl<T> ListResponse<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            type_name: None,
            items,
        }
    }
}

impl<T> ListWrapper for ListResponse<T> {
    type Item = T;

    fn into_items(self) -> Vec<T> {
        self.items
    }
}

#[async_trait]
pub trait Transport: Send + Sync + 'static {
    /// Query the `endpoint` collection for the records matching `uuid`
    ///
    /// `additional` is forwarded verbatim to request extra data.
    /// A response without body is returned as `None`.
    async fn list_by_uuid<M>(
        &self,
        endpoint: &str,
        uuid: &str,
        additional: &[String],
    ) -> Result<Option<ListResponse<M>>>
    where
        M: DeserializeOwned + Send + 'static;
}
