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

//! This crate contains a number of samples showing how to use the Datadog
//! API Client Libraries for Rust.
//!
//! Each sample receives an already configured client, the binaries under
//! `src/cmd` create one from the environment (`DD_API_KEY`, `DD_APP_KEY`,
//! and optionally `DD_SITE`) and run the sample.

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

pub mod binding_errors;
pub mod dashboard_lists;
pub mod error_handling;
pub mod key_management;
pub mod logging;
pub mod logs_pipelines;
pub mod roles;
pub mod sensitive_data_scanner;
pub mod usage_metering;

/// Prints the body of a successful response as indented JSON.
pub fn print_response<T: serde::Serialize>(operation: &str, body: &T) -> Result<()> {
    let content = serde_json::to_string_pretty(body)?;
    println!("Response from `{operation}`:\n{content}");
    Ok(())
}

/// Prints a failed call, including the HTTP response when there is one.
pub fn print_error(operation: &str, error: &gax::error::Error) {
    eprintln!("Error when calling `{operation}`: {error}");
    if let (Some(status), Some(payload)) = (error.status_line(), error.http_payload()) {
        eprintln!(
            "Full HTTP response: {status} {}",
            String::from_utf8_lossy(payload)
        );
    }
}
