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

//! Collapse an "exact match by uuid" list query into a single record.

use std::borrow::Cow;

use thiserror::Error;
use tf_provider::{AttributePath, Diagnostics};

use crate::error::ApiError;

/// Response envelope holding a sequence of items.
pub trait ListWrapper {
    type Item;

    fn into_items(self) -> Vec<Self::Item>;
}

impl<T> ListWrapper for Vec<T> {
    type Item = T;

    fn into_items(self) -> Vec<T> {
        self
    }
}

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("failed to read {kind} with uuid {uuid}: {source}")]
    Transport {
        kind: Cow<'static, str>,
        uuid: String,
        #[source]
        source: ApiError,
    },

    #[error("{kind} with uuid {uuid} not found")]
    NotFound {
        kind: Cow<'static, str>,
        uuid: String,
    },

    #[error("{kind} with uuid {uuid} matched {count} records; expected exactly 1")]
    Ambiguous {
        kind: Cow<'static, str>,
        uuid: String,
        count: usize,
    },
}

impl ResolveError {
    /// Append the error to the diagnostics of the running operation
    pub fn report(&self, diags: &mut Diagnostics) {
        match self {
            ResolveError::Transport { source, .. } => {
                diags.root_error(self.to_string(), source.to_string());
            }
            ResolveError::NotFound { .. } | ResolveError::Ambiguous { .. } => {
                diags.error_short(self.to_string(), AttributePath::new("uuid"));
            }
        }
    }
}

/// Return the single item of `outcome`.
///
/// Transport errors take precedence over the response content. An absent
/// wrapper and an empty wrapper are both reported as not found, and more
/// than one match is an error rather than picking the first item.
pub fn resolve_single<W, K>(
    outcome: Result<Option<W>, ApiError>,
    kind: K,
    uuid: &str,
) -> Result<W::Item, ResolveError>
where
    W: ListWrapper,
    K: Into<Cow<'static, str>>,
{
    let kind = kind.into();
    let wrapper = match outcome {
        Ok(wrapper) => wrapper,
        Err(source) => {
            return Err(ResolveError::Transport {
                kind,
                uuid: uuid.to_owned(),
                source,
            })
        }
    };

    let mut items = wrapper.map(ListWrapper::into_items).unwrap_or_default();
    match items.len() {
        0 => Err(ResolveError::NotFound {
            kind,
            uuid: uuid.to_owned(),
        }),
        1 => Ok(items.remove(0)),
        count => Err(ResolveError::Ambiguous {
            kind,
            uuid: uuid.to_owned(),
            count,
        }),
    }
}
