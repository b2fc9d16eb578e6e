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
use tf_provider::value::{ValueList, ValueMap, ValueNumber, ValueString};

use crate::utils::{computed, number, objects, primer_uuid, string, Primer};

use super::Entity;

#[derive(Debug, Default, Clone, Copy)]
pub struct OrganizationalUnit;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrganizationalUnitModel {
    pub uuid: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub depth: Option<i64>,
    pub parent: Option<Primer>,
    pub owner: Option<Primer>,
    pub additional_objects: Option<BTreeMap<String, serde_json::Value>>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrganizationalUnitState<'a> {
    #[serde(borrow = "'a")]
    pub uuid: ValueString<'a>,
    pub additional: ValueList<ValueString<'a>>,
    pub additional_objects: ValueMap<'a, ValueString<'a>>,
    pub name: ValueString<'a>,
    pub description: ValueString<'a>,
    pub depth: ValueNumber,
    pub parent_uuid: ValueString<'a>,
    pub owner_uuid: ValueString<'a>,
}

with_lookup!(OrganizationalUnitState);

impl Entity for OrganizationalUnit {
    const KIND: &'static str = "organizationalunit";
    const ENDPOINT: &'static str = "organizationalunit";
    const DESCRIPTION: &'static str = "Read an organizational unit from Topicus KeyHub by UUID";

    type Model = OrganizationalUnitModel;
    type State<'a> = OrganizationalUnitState<'a>;

    fn attributes() -> HashMap<String, Attribute> {
        map! {
            "name" => computed(AttributeType::String, "Name of the organizational unit"),
            "description" => computed(AttributeType::String, "Description of the organizational unit"),
            "depth" => computed(AttributeType::Number, "Depth in the organizational tree, 0 for the root"),
            "parent_uuid" => computed(AttributeType::String, "UUID of the parent organizational unit"),
            "owner_uuid" => computed(AttributeType::String, "UUID of the owning group")
        }
    }

    fn fill<'a>(state: &mut OrganizationalUnitState<'a>, model: OrganizationalUnitModel) {
        state.additional_objects = objects(model.additional_objects.unwrap_or_default());
        state.name = string(model.name);
        state.description = string(model.description);
        state.depth = number(model.depth);
        state.parent_uuid = primer_uuid(model.parent);
        state.owner_uuid = primer_uuid(model.owner);
    }
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use tf_provider::value::Value;

    use super::*;

    #[test]
    fn root_unit_has_no_parent() {
        let model: OrganizationalUnitModel = serde_json::from_value(serde_json::json!({
            "$type": "organization.OrganizationalUnit",
            "uuid": "root-uuid",
            "name": "Topicus",
            "depth": 0,
            "owner": { "uuid": "owner-uuid" }
        }))
        .unwrap();

        let mut state = OrganizationalUnitState::default();
        OrganizationalUnit::fill(&mut state, model);

        assert_eq!(state.name, Value::Value(Cow::Borrowed("Topicus")));
        assert_eq!(state.description, Value::Null);
        assert_eq!(state.depth, Value::Value(0));
        assert_eq!(state.parent_uuid, Value::Null);
        assert_eq!(state.owner_uuid, Value::Value(Cow::Borrowed("owner-uuid")));
    }
}
