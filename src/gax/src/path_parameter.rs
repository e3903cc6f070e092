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

//! Handling of missing required parameters.
//!
//! Parameters used to build the request path are always required, some query
//! parameters and request bodies are required too. The request builder needs
//! to return an error when the parameter is missing, and a small helper
//! function makes that code easier to read.

use crate::error::Error;
use crate::error::binding::BindingError;

pub fn missing(name: &str) -> Error {
    Error::binding(BindingError::MissingParameter(name.to_string()))
}

pub fn unknown(operation: &'static str, name: &str) -> Error {
    Error::binding(BindingError::UnknownParameter {
        operation,
        parameter: name.to_string(),
    })
}
