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

//! Implementation details for the Datadog API clients.
//!
//! All the types, traits, and functions defined in this crate are **not**
//! intended for general use. This crate will remain unstable for the
//! foreseeable future, even if used in the implementation for stable client
//! libraries. We control both and will change both if needed.
//!
//! The types, traits, and functions defined in this crate are lightly
//! documented. This is intentional, as they are not intended for general use
//! and will be changed without notice.

pub mod api_header;

/// Static descriptions of each operation and the arguments for one call.
pub mod operation;

/// Validates the arguments and assembles the HTTP request, without any I/O.
pub mod request;

/// Routes the HTTP response to a decoded value or an error.
pub mod dispatch;

pub mod transport;

pub mod http;

pub mod call;

pub mod options;

pub(crate) mod host;

pub(crate) mod observability;
