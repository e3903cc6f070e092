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

mod core_error;
pub use core_error::*;
mod credentials;
pub use credentials::CredentialsError;
mod service_error;
pub use service_error::*;

/// Errors detected while building a request.
///
/// These errors occur when required parameters are missing, or when the
/// parameters cannot be formatted. The client fails these requests locally,
/// before any network I/O.
pub mod binding;

/// Error payloads returned by the Datadog APIs.
///
/// Most Datadog API endpoints return an [ApiErrorResponse][api::ApiErrorResponse]
/// for client errors. Some endpoints return their own payloads for specific
/// status codes.
///
/// # Examples
///
/// ```
/// # use datadog_api_gax::error;
/// use error::Error;
/// fn handle_error(e: Error) {
///     if let Some(payload) = e.api_error() {
///         for message in &payload.errors {
///             println!("the service reported {message}");
///         }
///     }
/// }
/// ```
pub mod api;
pub use api::ApiErrorResponse;
