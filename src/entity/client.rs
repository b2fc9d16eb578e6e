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

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use tf_provider::map;
use tf_provider::schema::{Attribute, AttributeType};
use tf_provider::value::{ValueBool, ValueList, ValueMap, ValueString};
use time::OffsetDateTime;

use crate::utils::{boolean, computed, objects, primer_uuid, string, strings, timestamp, Primer};

use super::Entity;

/// Client application (OAuth2, SAML or LDAP client)
#[derive(Debug, Default, Clone, Copy)]
pub struct Client;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientModel {
    pub uuid: Option<String>,
    pub name: Option<String>,
    pub client_id: Option<String>,
    #[serde(rename = "type")]
    pub client_type: Option<String>,
    pub scopes: Option<Vec<String>>,
    pub sso_application: Option<bool>,
    pub owner: Option<Primer>,
    pub technical_administrator: Option<Primer>,
    pub url: Option<String>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub last_modified_at: Option<OffsetDateTime>,
    pub additional_objects: Option<BTreeMap<String, serde_json::Value>>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientState<'a> {
    #[serde(borrow = "'a")]
    pub uuid: ValueString<'a>,
    pub additional: ValueList<ValueString<'a>>,
    pub additional_objects: ValueMap<'a, ValueString<'a>>,
    pub name: ValueString<'a>,
    pub client_id: ValueString<'a>,
    #[serde(rename = "type")]
    pub client_type: ValueString<'a>,
    pub scopes: ValueList<ValueString<'a>>,
    pub sso_application: ValueBool,
    pub owner_uuid: ValueString<'a>,
    pub technical_administrator_uuid: ValueString<'a>,
    pub url: ValueString<'a>,
    pub last_modified_at: ValueString<'a>,
}

with_lookup!(ClientState);

impl Entity for Client {
    const KIND: &'static str = "client";
    const ENDPOINT: &'static str = "client";
    const DESCRIPTION: &'static str = "Read a client application from Topicus KeyHub by UUID";

    type Model = ClientModel;
    type State<'a> = ClientState<'a>;

    fn attributes() -> HashMap<String, Attribute> {
        map! {
            "name" => computed(AttributeType::String, "Name of the client"),
            "client_id" => computed(AttributeType::String, "Identifier the client authenticates with"),
            "type" => computed(AttributeType::String, "Protocol of the client: `OAUTH2`, `SAML2` or `LDAP`"),
            "scopes" => computed(AttributeType::List(AttributeType::String.into()), "Scopes granted to the client"),
            "sso_application" => computed(AttributeType::Bool, "Is the client an SSO application"),
            "owner_uuid" => computed(AttributeType::String, "UUID of the owning group"),
            "technical_administrator_uuid" => computed(AttributeType::String, "UUID of the technical administrator group"),
            "url" => computed(AttributeType::String, "URL of the application"),
            "last_modified_at" => computed(AttributeType::String, "Last modification time (RFC 3339)")
        }
    }

    fn fill<'a>(state: &mut ClientState<'a>, model: ClientModel) {
        state.additional_objects = objects(model.additional_objects.unwrap_or_default());
        state.name = string(model.name);
        state.client_id = string(model.client_id);
        state.client_type = string(model.client_type);
        state.scopes = strings(model.scopes);
        state.sso_application = boolean(model.sso_application);
        state.owner_uuid = primer_uuid(model.owner);
        state.technical_administrator_uuid = primer_uuid(model.technical_administrator);
        state.url = string(model.url);
        state.last_modified_at = timestamp(model.last_modified_at);
    }
}
