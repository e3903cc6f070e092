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

//! Common model types for the Datadog API client libraries.
//!
//! **WARNING:** this crate is under active development. We expect multiple
//! breaking changes in the upcoming releases.
//!
//! The Datadog APIs distinguish between a field that is absent from a JSON
//! payload and a field that is present with a `null` value. The APIs also
//! evolve faster than any client library, so responses may contain fields,
//! enumeration values, or whole shapes that this version of the library does
//! not know about. The types in this crate capture both concerns:
//!
//! * [Nullable] models a field that can be unset, explicitly `null`, or set.
//! * [Decoded] holds either a typed model or, if the payload does not match the
//!   model, the raw JSON value.
//! * [UnknownEnumValue] preserves enumeration values added after this library
//!   was released.

mod decoded;
pub use decoded::*;
mod enumerations;
pub use enumerations::*;
mod nullable;
pub use nullable::*;

#[doc(hidden)]
pub mod internal;
