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

//! Terraform provider exposing Topicus KeyHub records as data sources
//!
//! Each data source reads a single record by UUID through the KeyHub REST API
//! and fails when the lookup does not resolve to exactly one record.

pub mod client;
pub mod entity;
pub mod error;
pub mod keyhub_provider;
pub mod resolve;
pub mod utils;

pub use keyhub_provider::{KeyHubProvider, ProviderConfig};
