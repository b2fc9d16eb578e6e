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

use std::fmt::Debug;
use std::marker::PhantomData;

use async_trait::async_trait;

use tf_provider::schema::{Block, Description, Schema};
use tf_provider::value::ValueEmpty;
use tf_provider::{AttributePath, DataSource, Diagnostics};

use crate::client::Transport;
use crate::utils::{lookup_attributes, WithSchema};

use super::read::read_entity;
use super::Entity;

/// Data source reading one `E` record by UUID through `T`
pub struct KeyHubDataSource<E, T> {
    pub(super) transport: T,
    entity: PhantomData<fn() -> E>,
}

impl<E: Entity, T: Transport> KeyHubDataSource<E, T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            entity: PhantomData,
        }
    }
}

impl<E: Entity, T: Debug> Debug for KeyHubDataSource<E, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyHubDataSource")
            .field("kind", &E::KIND)
            .field("transport", &self.transport)
            .finish()
    }
}

impl<E: Entity, T> WithSchema for KeyHubDataSource<E, T> {
    fn schema() -> Schema {
        let mut attributes = lookup_attributes();
        attributes.extend(E::attributes());

        Schema {
            version: 1,
            block: Block {
                version: 1,
                attributes,
                description: Description::plain(E::DESCRIPTION),
                ..Default::default()
            },
        }
    }
}

#[async_trait]
impl<E, T> DataSource for KeyHubDataSource<E, T>
where
    E: Entity,
    T: Transport,
{
    type State<'a> = E::State<'a>;
    type ProviderMetaState<'a> = ValueEmpty;

    fn schema(&self, _diags: &mut Diagnostics) -> Option<Schema> {
        Some(<Self as WithSchema>::schema())
    }

    async fn validate<'a>(&self, diags: &mut Diagnostics, config: Self::State<'a>) -> Option<()> {
        self.validate(diags, &config, AttributePath::default());

        if diags.errors.is_empty() {
            Some(())
        } else {
            None
        }
    }

    async fn read<'a>(
        &self,
        diags: &mut Diagnostics,
        config: Self::State<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<Self::State<'a>> {
        read_entity::<E, T>(diags, &self.transport, config).await
    }
}
