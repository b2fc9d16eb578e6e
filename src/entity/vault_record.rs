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

use crate::utils::{boolean, computed, objects, string, strings, timestamp};

use super::Entity;

/// Record stored in a group or personal vault
///
/// Secrets are only returned when requested with `additional = ["secret"]`,
/// and end up in `additional_objects`.
#[derive(Debug, Default, Clone, Copy)]
pub struct VaultRecord;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VaultRecordModel {
    pub uuid: Option<String>,
    pub name: Option<String>,
    pub color: Option<String>,
    pub url: Option<String>,
    pub username: Option<String>,
    pub filename: Option<String>,
    pub end_date: Option<String>,
    pub warning_period: Option<String>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub share_end_time: Option<OffsetDateTime>,
    pub derived: Option<bool>,
    pub types: Option<Vec<String>>,
    pub additional_objects: Option<BTreeMap<String, serde_json::Value>>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VaultRecordState<'a> {
    #[serde(borrow = "'a")]
    pub uuid: ValueString<'a>,
    pub additional: ValueList<ValueString<'a>>,
    pub additional_objects: ValueMap<'a, ValueString<'a>>,
    pub name: ValueString<'a>,
    pub color: ValueString<'a>,
    pub url: ValueString<'a>,
    pub username: ValueString<'a>,
    pub filename: ValueString<'a>,
    pub end_date: ValueString<'a>,
    pub warning_period: ValueString<'a>,
    pub share_end_time: ValueString<'a>,
    pub derived: ValueBool,
    pub types: ValueList<ValueString<'a>>,
}

with_lookup!(VaultRecordState);

impl Entity for VaultRecord {
    const KIND: &'static str = "vaultrecord";
    const ENDPOINT: &'static str = "vaultrecord";
    const DESCRIPTION: &'static str = "Read a vault record from Topicus KeyHub by UUID";

    type Model = VaultRecordModel;
    type State<'a> = VaultRecordState<'a>;

    fn attributes() -> HashMap<String, Attribute> {
        map! {
            "name" => computed(AttributeType::String, "Name of the record"),
            "color" => computed(AttributeType::String, "Color label of the record"),
            "url" => computed(AttributeType::String, "URL the record applies to"),
            "username" => computed(AttributeType::String, "Username stored in the record"),
            "filename" => computed(AttributeType::String, "Name of the attached file"),
            "end_date" => computed(AttributeType::String, "Date the record expires"),
            "warning_period" => computed(AttributeType::String, "How long before expiry a warning is sent"),
            "share_end_time" => computed(AttributeType::String, "End of the share, if the record is shared (RFC 3339)"),
            "derived" => computed(AttributeType::Bool, "Is the record derived from another record"),
            "types" => computed(AttributeType::List(AttributeType::String.into()), "Kinds of secret stored, eg: `PASSWORD`, `FILE`")
        }
    }

    fn fill<'a>(state: &mut VaultRecordState<'a>, model: VaultRecordModel) {
        state.additional_objects = objects(model.additional_objects.unwrap_or_default());
        state.name = string(model.name);
        state.color = string(model.color);
        state.url = string(model.url);
        state.username = string(model.username);
        state.filename = string(model.filename);
        state.end_date = string(model.end_date);
        state.warning_period = string(model.warning_period);
        state.share_end_time = timestamp(model.share_end_time);
        state.derived = boolean(model.derived);
        state.types = strings(model.types);
    }
}
