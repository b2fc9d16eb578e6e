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

/// Account directory (internal, LDAP, OIDC...)
#[derive(Debug, Default, Clone, Copy)]
pub struct Directory;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DirectoryModel {
    pub uuid: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub directory_type: Option<String>,
    pub active: Option<bool>,
    pub default_directory: Option<bool>,
    pub helpdesk_group: Option<Primer>,
    pub base_organizational_unit: Option<Primer>,
    #[serde(rename = "restrict2fa")]
    pub restrict_2fa: Option<bool>,
    pub rotating_password: Option<String>,
    pub username_customizable: Option<bool>,
    pub additional_objects: Option<BTreeMap<String, serde_json::Value>>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectoryState<'a> {
    #[serde(borrow = "'a")]
    pub uuid: ValueString<'a>,
    pub additional: ValueList<ValueString<'a>>,
    pub additional_objects: ValueMap<'a, ValueString<'a>>,
    pub name: ValueString<'a>,
    #[serde(rename = "type")]
    pub directory_type: ValueString<'a>,
    pub active: ValueBool,
    pub default_directory: ValueBool,
    pub helpdesk_group_uuid: ValueString<'a>,
    pub base_organizational_unit_uuid: ValueString<'a>,
    pub restrict_2fa: ValueBool,
    pub rotating_password: ValueString<'a>,
    pub username_customizable: ValueBool,
}

with_lookup!(DirectoryState);

impl Entity for Directory {
    const KIND: &'static str = "directory";
    const ENDPOINT: &'static str = "directory";
    const DESCRIPTION: &'static str = "Read an account directory from Topicus KeyHub by UUID";

    type Model = DirectoryModel;
    type State<'a> = DirectoryState<'a>;

    fn attributes() -> HashMap<String, Attribute> {
        map! {
            "name" => computed(AttributeType::String, "Name of the directory"),
            "type" => computed(AttributeType::String, "Kind of directory, eg: `INTERNAL`, `LDAP`"),
            "active" => computed(AttributeType::Bool, "Is the directory active"),
            "default_directory" => computed(AttributeType::Bool, "Is this the default directory"),
            "helpdesk_group_uuid" => computed(AttributeType::String, "UUID of the helpdesk group"),
            "base_organizational_unit_uuid" => computed(AttributeType::String, "UUID of the organizational unit accounts are placed in"),
            "restrict_2fa" => computed(AttributeType::Bool, "Is two-factor authentication enforced"),
            "rotating_password" => computed(AttributeType::String, "Password rotation policy"),
            "username_customizable" => computed(AttributeType::Bool, "Can users choose their username")
        }
    }

    fn fill<'a>(state: &mut DirectoryState<'a>, model: DirectoryModel) {
        state.additional_objects = objects(model.additional_objects.unwrap_or_default());
        state.name = string(model.name);
        state.directory_type = string(model.directory_type);
        state.active = boolean(model.active);
        state.default_directory = boolean(model.default_directory);
        state.helpdesk_group_uuid = primer_uuid(model.helpdesk_group);
        state.base_organizational_unit_uuid = primer_uuid(model.base_organizational_unit);
        state.restrict_2fa = boolean(model.restrict_2fa);
        state.rotating_password = string(model.rotating_password);
        state.username_customizable = boolean(model.username_customizable);
    }
}
