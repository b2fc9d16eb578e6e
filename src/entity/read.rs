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

use tf_provider::{AttributePath, Diagnostics};

use crate::client::Transport;
use crate::resolve::resolve_single;
use crate::utils::WithLookup;

use super::Entity;

/// Fetch the record addressed by `config` and copy it into the returned state
///
/// `uuid` and `additional` are echoed back as configured.
pub(super) async fn read_entity<'a, E, T>(
    diags: &mut Diagnostics,
    transport: &T,
    config: E::State<'a>,
) -> Option<E::State<'a>>
where
    E: Entity,
    T: Transport,
{
    let Some(uuid) = config.uuid().as_deref_option().map(str::to_owned) else {
        diags.error(
            format!("Cannot read {} without uuid", E::KIND),
            "The `uuid` must be known when the data source is read.",
            AttributePath::new("uuid"),
        );
        return None;
    };
    let additional = config.additional_names();

    tracing::debug!(
        kind = E::KIND,
        %uuid,
        ?additional,
        "Reading {} from Topicus KeyHub by UUID",
        E::KIND
    );

    let outcome = transport
        .list_by_uuid::<E::Model>(E::ENDPOINT, &uuid, &additional)
        .await;

    match resolve_single(outcome, E::KIND, &uuid) {
        Ok(model) => {
            let mut state = config;
            E::fill(&mut state, model);
            Some(state)
        }
        Err(err) => {
            tracing::debug!(kind = E::KIND, %uuid, error = %err, "KeyHub read failed");
            err.report(diags);
            None
        }
    }
}
