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

//! Datadog API Client Libraries for Rust - Authentication
//!
//! This crate contains types and functions used to authenticate applications
//! with the Datadog API.
//!
//! Most Datadog endpoints require two credentials: an API key, identifying
//! the organization, and an application key, granting access on behalf of a
//! user or service account. Each operation declares which of these
//! [auth schemes][credentials::AuthScheme] it uses, and the client adds the
//! corresponding headers to each request.
//!
//! The default credentials are loaded from the `DD_API_KEY` and `DD_APP_KEY`
//! environment variables. Applications can also create credentials directly,
//! see [credentials::api_key::Builder].
//!
//! # Example
//! ```
//! # use datadog_api_auth::credentials::api_key::Builder;
//! let credentials = Builder::new()
//!     .with_api_key("my-api-key")
//!     .with_app_key("my-app-key")
//!     .build();
//! # let _ = credentials;
//! ```

pub mod build_errors;
pub mod credentials;
pub mod errors;

pub(crate) mod headers_util;

/// A `Result` alias where the `Err` case is
/// [CredentialsError][crate::errors::CredentialsError].
pub type Result<T> = std::result::Result<T, crate::errors::CredentialsError>;
