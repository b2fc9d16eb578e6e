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

use tf_provider::value::Value;
use tf_provider::{AttributePath, Diagnostics};

use crate::client::Transport;
use crate::utils::WithLookup;

use super::{Entity, KeyHubDataSource};

impl<E: Entity, T: Transport> KeyHubDataSource<E, T> {
    pub(super) fn validate<'a>(
        &self,
        diags: &mut Diagnostics,
        config: &E::State<'a>,
        attr_path: AttributePath,
    ) {
        // Unknown values are checked once they are known
        if let Value::Value(uuid) = config.uuid() {
            if uuid.trim().is_empty() {
                diags.error(
                    "Invalid uuid",
                    format!("The uuid of a {} cannot be empty.", E::KIND),
                    attr_path.clone().attribute("uuid"),
                );
            }
        }

        for (index, name) in config.additional().iter().flatten().enumerate() {
            if let Value::Value(name) = name {
                if name.trim().is_empty() {
                    diags.error(
                        "Invalid additional object",
                        "Additional object names cannot be empty.",
                        attr_path
                            .clone()
                            .attribute("additional")
                            .index(index as i64),
                    );
                }
            }
        }
    }
}
