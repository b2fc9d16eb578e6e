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
use tf_provider::value::{ValueBool, ValueList, ValueMap, ValueNumber, ValueString};

use crate::utils::{boolean, computed, number, objects, primer_uuid, string, Primer};

use super::Entity;

/// Provisioned system (LDAP, Active Directory, SCIM...)
#[derive(Debug, Default, Clone, Copy)]
pub struct System;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SystemModel {
    pub uuid: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub system_type: Option<String>,
    pub active: Option<bool>,
    pub account_count: Option<i64>,
    pub username_prefix: Option<String>,
    pub owner: Option<Primer>,
    pub content_administrator: Option<Primer>,
    pub technical_administrator: Option<Primer>,
    pub should_destroy_unknown_accounts: Option<bool>,
    pub additional_objects: Option<BTreeMap<String, serde_json::Value>>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemState<'a> {
    #[serde(borrow = "'a")]
    pub uuid: ValueString<'a>,
    pub additional: ValueList<ValueString<'a>>,
    pub additional_objects: ValueMap<'a, ValueString<'a>>,
    pub name: ValueString<'a>,
    #[serde(rename = "type")]
    pub system_type: ValueString<'a>,
    pub active: ValueBool,
    pub account_count: ValueNumber,
    pub username_prefix: ValueString<'a>,
    pub owner_uuid: ValueString<'a>,
    pub content_administrator_uuid: ValueString<'a>,
    pub technical_administrator_uuid: ValueString<'a>,
    pub should_destroy_unknown_accounts: ValueBool,
}

with_lookup!(SystemState);

impl Entity for System {
    const KIND: &'static str = "system";
    const ENDPOINT: &'static str = "system";
    const DESCRIPTION: &'static str = "Read a provisioned system from Topicus KeyHub by UUID";

    type Model = SystemModel;
    type State<'a> = SystemState<'a>;

    fn attributes() -> HashMap<String, Attribute> {
        map! {
            "name" => computed(AttributeType::String, "Name of the system"),
            "type" => computed(AttributeType::String, "Kind of system, eg: `LDAP`, `AZURE_TENANT`"),
            "active" => computed(AttributeType::Bool, "Is provisioning to the system active"),
            "account_count" => computed(AttributeType::Number, "Number of accounts on the system"),
            "username_prefix" => computed(AttributeType::String, "Prefix applied to provisioned usernames"),
            "owner_uuid" => computed(AttributeType::String, "UUID of the owning group"),
            "content_administrator_uuid" => computed(AttributeType::String, "UUID of the content administrator group"),
            "technical_administrator_uuid" => computed(AttributeType::String, "UUID of the technical administrator group"),
            "should_destroy_unknown_accounts" => computed(AttributeType::Bool, "Are accounts unknown to KeyHub removed")
        }
    }

    fn fill<'a>(state: &mut SystemState<'a>, model: SystemModel) {
        state.additional_objects = objects(model.additional_objects.unwrap_or_default());
        state.name = string(model.name);
        state.system_type = string(model.system_type);
        state.active = boolean(model.active);
        state.account_count = number(model.account_count);
        state.username_prefix = string(model.username_prefix);
        state.owner_uuid = primer_uuid(model.owner);
        state.content_administrator_uuid = primer_uuid(model.content_administrator);
        state.technical_administrator_uuid = primer_uuid(model.technical_administrator);
        state.should_destroy_unknown_accounts = boolean(model.should_destroy_unknown_accounts);
    }
}
