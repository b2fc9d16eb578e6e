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

use crate::utils::{boolean, computed, objects, primer_uuid, string, Primer};

use super::Entity;

/// Non-personal account provisioned on a system
#[derive(Debug, Default, Clone, Copy)]
pub struct ServiceAccount;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServiceAccountModel {
    pub uuid: Option<String>,
    pub name: Option<String>,
    pub username: Option<String>,
    pub active: Option<bool>,
    pub description: Option<String>,
    pub system: Option<Primer>,
    pub technical_administrator: Option<Primer>,
    pub password_rotation: Option<String>,
    pub validity: Option<String>,
    pub additional_objects: Option<BTreeMap<String, serde_json::Value>>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceAccountState<'a> {
    #[serde(borrow = "'a")]
    pub uuid: ValueString<'a>,
    pub additional: ValueList<ValueString<'a>>,
    pub additional_objects: ValueMap<'a, ValueString<'a>>,
    pub name: ValueString<'a>,
    pub username: ValueString<'a>,
    pub active: ValueBool,
    pub description: ValueString<'a>,
    pub system_uuid: ValueString<'a>,
    pub technical_administrator_uuid: ValueString<'a>,
    pub password_rotation: ValueString<'a>,
    pub validity: ValueString<'a>,
}

with_lookup!(ServiceAccountState);

impl Entity for ServiceAccount {
    const KIND: &'static str = "serviceaccount";
    const ENDPOINT: &'static str = "serviceaccount";
    const DESCRIPTION: &'static str = "Read a service account from Topicus KeyHub by UUID";

    type Model = ServiceAccountModel;
    type State<'a> = ServiceAccountState<'a>;

    fn attributes() -> HashMap<String, Attribute> {
        map! {
            "name" => computed(AttributeType::String, "Name of the service account"),
            "username" => computed(AttributeType::String, "Username on the target system"),
            "active" => computed(AttributeType::Bool, "Is the service account active"),
            "description" => computed(AttributeType::String, "Description of the service account"),
            "system_uuid" => computed(AttributeType::String, "UUID of the system the account lives on"),
            "technical_administrator_uuid" => computed(AttributeType::String, "UUID of the technical administrator group"),
            "password_rotation" => computed(AttributeType::String, "Password rotation scheme"),
            "validity" => computed(AttributeType::String, "Validity of the account on its system")
        }
    }

    fn fill<'a>(state: &mut ServiceAccountState<'a>, model: ServiceAccountModel) {
        state.additional_objects = objects(model.additional_objects.unwrap_or_default());
        state.name = string(model.name);
        state.username = string(model.username);
        state.active = boolean(model.active);
        state.description = string(model.description);
        state.system_uuid = primer_uuid(model.system);
        state.technical_administrator_uuid = primer_uuid(model.technical_administrator);
        state.password_rotation = string(model.password_rotation);
        state.validity = string(model.validity);
    }
}
