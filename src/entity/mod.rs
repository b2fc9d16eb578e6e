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

//! KeyHub records exposed as data sources
//!
//! Each record kind is described by an [`Entity`] implementation, and served
//! by the generic [`KeyHubDataSource`].

use std::collections::HashMap;
use std::fmt::Debug;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tf_provider::schema::Attribute;

use crate::utils::WithLookup;

/// Implement [`WithLookup`] for a state struct with the shared attributes
macro_rules! with_lookup {
    ($state:ident) => {
        impl<'a> $crate::utils::WithLookup<'a> for $state<'a> {
            fn uuid(&self) -> &::tf_provider::value::ValueString<'a> {
                &self.uuid
            }
            fn additional(
                &self,
            ) -> &::tf_provider::value::ValueList<::tf_provider::value::ValueString<'a>> {
                &self.additional
            }
        }
    };
}

mod client;
mod data_source;
mod directory;
mod organizational_unit;
mod read;
mod service_account;
mod system;
mod validate;
mod vault_record;

pub use client::{Client, ClientModel, ClientState};
pub use data_source::KeyHubDataSource;
pub use directory::{Directory, DirectoryModel, DirectoryState};
pub use organizational_unit::{
    OrganizationalUnit, OrganizationalUnitModel, OrganizationalUnitState,
};
pub use service_account::{ServiceAccount, ServiceAccountModel, ServiceAccountState};
pub use system::{System, SystemModel, SystemState};
pub use vault_record::{VaultRecord, VaultRecordModel, VaultRecordState};

/// Descriptor of a KeyHub record kind
pub trait Entity: Send + Sync + 'static {
    /// Label used in the data source name and in diagnostics
    const KIND: &'static str;
    /// Collection endpoint, relative to the REST root
    const ENDPOINT: &'static str;
    const DESCRIPTION: &'static str;

    /// Record as returned by KeyHub
    type Model: DeserializeOwned + Debug + Send + 'static;

    /// Terraform state of the data source
    type State<'a>: Serialize
        + Deserialize<'a>
        + Debug
        + Clone
        + Default
        + Send
        + Sync
        + WithLookup<'a>;

    /// Schema attributes specific to this record kind
    fn attributes() -> HashMap<String, Attribute>;

    /// Copy the record into the state
    fn fill<'a>(state: &mut Self::State<'a>, model: Self::Model);
}
