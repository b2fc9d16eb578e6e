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

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use tf_provider::map;
use tf_provider::schema::{Attribute, AttributeConstraint, AttributeType, Description, Schema};
use tf_provider::value::{Value, ValueBool, ValueList, ValueMap, ValueNumber, ValueString};

pub(crate) trait WithSchema {
    fn schema() -> Schema;
}

/// Access to the attributes every data source state carries
pub trait WithLookup<'a> {
    fn uuid(&self) -> &ValueString<'a>;
    fn additional(&self) -> &ValueList<ValueString<'a>>;

    /// Known, non null additional field names
    fn additional_names(&self) -> Vec<String> {
        self.additional()
            .iter()
            .flatten()
            .filter_map(|name| name.as_deref_option())
            .map(str::to_owned)
            .collect()
    }
}

/// Compact reference KeyHub embeds for related objects
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Primer {
    #[serde(default)]
    pub uuid: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// Attributes shared by all data sources
pub(crate) fn lookup_attributes() -> HashMap<String, Attribute> {
    map! {
        "uuid" => Attribute {
            attr_type: AttributeType::String,
            description: Description::plain("UUID of the record to read"),
            constraint: AttributeConstraint::Required,
            ..Default::default()
        },
        "additional" => Attribute {
            attr_type: AttributeType::List(AttributeType::String.into()),
            description: Description::plain("Additional objects to request from KeyHub, eg: `audit`"),
            constraint: AttributeConstraint::Optional,
            ..Default::default()
        },
        "additional_objects" => Attribute {
            attr_type: AttributeType::Map(AttributeType::String.into()),
            description: Description::plain("Requested additional objects, encoded as JSON"),
            constraint: AttributeConstraint::Computed,
            sensitive: true,
            ..Default::default()
        }
    }
}

pub(crate) fn computed(attr_type: AttributeType, description: &str) -> Attribute {
    Attribute {
        attr_type,
        description: Description::plain(description),
        constraint: AttributeConstraint::Computed,
        ..Default::default()
    }
}

pub(crate) fn string<'a>(value: Option<String>) -> ValueString<'a> {
    value.map(Cow::Owned).into()
}

pub(crate) fn number(value: Option<i64>) -> ValueNumber {
    value.into()
}

pub(crate) fn boolean(value: Option<bool>) -> ValueBool {
    value.into()
}

pub(crate) fn strings<'a>(values: Option<Vec<String>>) -> ValueList<ValueString<'a>> {
    values
        .map(|values| values.into_iter().map(|v| Value::Value(Cow::Owned(v))).collect())
        .into()
}

pub(crate) fn primer_uuid<'a>(primer: Option<Primer>) -> ValueString<'a> {
    string(primer.and_then(|p| p.uuid))
}

pub(crate) fn timestamp<'a>(value: Option<OffsetDateTime>) -> ValueString<'a> {
    string(value.and_then(|ts| ts.format(&Rfc3339).ok()))
}

/// Encode the additional objects of a record, skipping type markers
pub(crate) fn objects<'a>(
    objects: BTreeMap<String, serde_json::Value>,
) -> ValueMap<'a, ValueString<'a>> {
    Value::Value(
        objects
            .into_iter()
            .filter(|(name, _)| !name.starts_with('$'))
            .map(|(name, object)| {
                (
                    Cow::Owned(name),
                    Value::Value(Cow::Owned(object.to_string())),
                )
            })
            .collect(),
    )
}
