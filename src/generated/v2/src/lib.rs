// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.


//! Datadog API Client Libraries for Rust - API v2
//!
//! **WARNING:** this crate is under active development. We expect multiple
//! breaking changes in the upcoming releases. Testing is also incomplete, we do
//! **not** recommend that you use this crate in production. We welcome feedback
//! about the APIs, documentation, missing features, bugs, etc.
//!
//! This crate contains traits, types, and functions to interact with the
//! version 2 endpoints of the Datadog API. Most applications will use the
//! structs defined in the [client] module:
//! * [RolesApi](client::RolesApi)
//! * [KeyManagementApi](client::KeyManagementApi)
//! * [SensitiveDataScannerApi](client::SensitiveDataScannerApi)
//! * [UsageMeteringApi](client::UsageMeteringApi)
//! * [SecurityMonitoringApi](client::SecurityMonitoringApi)
//!
//! # Example
//! ```no_run
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! use datadog_api_v2::client::{ListRolesOptionalParams, RolesApi};
//! use datadog_api_v2::model::RolesSort;
//! let client = RolesApi::builder().build().await?;
//! let response = client
//!     .list_roles(ListRolesOptionalParams::default().set_sort(RolesSort::UserCountDescending))
//!     .send()
//!     .await?;
//! let roles = response.into_body().into_typed().and_then(|r| r.data);
//! for role in roles.unwrap_or_default() {
//!     println!("{:?}", role.id);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(()) });
//! ```

/// The messages and enums that are part of this client library.
pub mod model;

pub use gax::Result;
pub use gax::error::Error;

/// Request and client builders.
pub mod builder;

/// The clients for each API in this crate.
pub mod client;

/// The descriptors for all the operations in this crate.
pub mod operations;

pub(crate) mod info {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub(crate) static USER_AGENT: gaxi::api_header::UserAgent = gaxi::api_header::UserAgent {
        name: gaxi::api_header::CLIENT_NAME,
        version: VERSION,
    };
}
