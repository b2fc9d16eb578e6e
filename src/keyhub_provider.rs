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

use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use tf_provider::schema::{Attribute, AttributeConstraint, AttributeType, Block, Description, Schema};
use tf_provider::value::{ValueEmpty, ValueString};
use tf_provider::{map, AttributePath, Diagnostics, DynamicDataSource, Provider};

use crate::client::{KeyHubClient, KeyHubConfig, SharedClient};
use crate::entity::{
    Client, Directory, Entity, KeyHubDataSource, OrganizationalUnit, ServiceAccount, System,
    VaultRecord,
};

const ISSUER_ENV: &str = "KEYHUB_ISSUER";
const CLIENT_ID_ENV: &str = "KEYHUB_CLIENTID";
const CLIENT_SECRET_ENV: &str = "KEYHUB_CLIENTSECRET";

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig<'a> {
    #[serde(borrow = "'a")]
    pub issuer: ValueString<'a>,
    pub clientid: ValueString<'a>,
    pub clientsecret: ValueString<'a>,
}

impl<'a> ProviderConfig<'a> {
    /// Resolve the connection settings, falling back to `env` for unset attributes
    pub fn resolve<F>(&self, diags: &mut Diagnostics, env: F) -> Option<KeyHubConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut lookup = |attribute: &'static str, value: &ValueString<'a>, var: &'static str| {
            let resolved = value
                .as_deref_option()
                .filter(|v| !v.is_empty())
                .map(str::to_owned)
                .or_else(|| env(var).filter(|v| !v.is_empty()));
            if resolved.is_none() {
                diags.error(
                    format!("Missing KeyHub {attribute}"),
                    format!(
                        "Set `{attribute}` in the provider block or the {var} environment variable."
                    ),
                    AttributePath::new(attribute),
                );
            }
            resolved
        };

        let issuer = lookup("issuer", &self.issuer, ISSUER_ENV);
        let client_id = lookup("clientid", &self.clientid, CLIENT_ID_ENV);
        let client_secret = lookup("clientsecret", &self.clientsecret, CLIENT_SECRET_ENV);

        Some(KeyHubConfig {
            issuer: issuer?,
            client_id: client_id?,
            client_secret: client_secret?,
        })
    }
}

/// Terraform provider for Topicus KeyHub
///
/// Every data source shares the provider's client handle, bound in `configure`.
#[derive(Debug, Default, Clone)]
pub struct KeyHubProvider {
    client: SharedClient,
}

impl KeyHubProvider {
    fn data_source<E: Entity>(&self) -> Box<dyn DynamicDataSource> {
        Box::new(KeyHubDataSource::<E, _>::new(self.client.clone()))
    }
}

#[async_trait]
impl Provider for KeyHubProvider {
    type Config<'a> = ProviderConfig<'a>;
    type MetaState<'a> = ValueEmpty;

    fn schema(&self, _diags: &mut Diagnostics) -> Option<Schema> {
        Some(Schema {
            version: 1,
            block: Block {
                description: Description::plain("Topicus KeyHub"),
                attributes: map! {
                    "issuer" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain(format!("URL of the KeyHub instance, defaults to ${ISSUER_ENV}")),
                        constraint: AttributeConstraint::Optional,
                        ..Default::default()
                    },
                    "clientid" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain(format!("OAuth2 client id, defaults to ${CLIENT_ID_ENV}")),
                        constraint: AttributeConstraint::Optional,
                        ..Default::default()
                    },
                    "clientsecret" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain(format!("OAuth2 client secret, defaults to ${CLIENT_SECRET_ENV}")),
                        constraint: AttributeConstraint::Optional,
                        sensitive: true,
                        ..Default::default()
                    }
                },
                ..Default::default()
            },
        })
    }

    async fn validate<'a>(&self, diags: &mut Diagnostics, config: Self::Config<'a>) -> Option<()> {
        // Empty values fall back to the environment in `configure`
        if let Some(issuer) = config.issuer.as_deref_option().filter(|v| !v.is_empty()) {
            if let Err(err) = url::Url::parse(issuer) {
                diags.error(
                    "Invalid KeyHub issuer",
                    format!("`{issuer}` is not a valid URL: {err}"),
                    AttributePath::new("issuer"),
                );
            }
        }

        if diags.errors.is_empty() {
            Some(())
        } else {
            None
        }
    }

    async fn configure<'a>(
        &self,
        diags: &mut Diagnostics,
        terraform_version: String,
        config: Self::Config<'a>,
    ) -> Option<()> {
        let config = config.resolve(diags, |var| std::env::var(var).ok())?;

        match KeyHubClient::new(&config) {
            Ok(client) => {
                tracing::debug!(
                    issuer = %client.issuer(),
                    %terraform_version,
                    "Configured KeyHub client"
                );
                self.client.bind(client);
                Some(())
            }
            Err(err) => {
                diags.root_error("Failed to create the KeyHub client", err.to_string());
                None
            }
        }
    }

    fn get_data_sources(
        &self,
        _diags: &mut Diagnostics,
    ) -> Option<HashMap<String, Box<dyn DynamicDataSource>>> {
        Some(map! {
            Client::KIND => self.data_source::<Client>(),
            Directory::KIND => self.data_source::<Directory>(),
            OrganizationalUnit::KIND => self.data_source::<OrganizationalUnit>(),
            ServiceAccount::KIND => self.data_source::<ServiceAccount>(),
            System::KIND => self.data_source::<System>(),
            VaultRecord::KIND => self.data_source::<VaultRecord>()
        })
    }
}
