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

//! Datadog API helpers.
//!
//! This crate contains a number of types and functions used in the
//! implementation of the Datadog API client libraries for Rust.
//!
//! <div class="warning">
//! The hidden modules in this crate are used by the generated clients. They are
//! <b>not</b> intended for general use and may change without notice.
//! </div>

/// An alias of [std::result::Result] where the error is always [crate::error::Error].
///
/// This is the result type used by all functions wrapping API calls.
pub type Result<T> = std::result::Result<T, crate::error::Error>;

#[doc(hidden)]
pub mod query_parameter;

/// Helpers to report missing path parameters.
#[doc(hidden)]
pub mod path_parameter;

/// Formats scalar values used in the request path and query.
#[doc(hidden)]
pub mod request_parameter;

/// The core error types used by generated clients.
pub mod error;

pub mod client_builder;
pub mod options;
pub mod response;
