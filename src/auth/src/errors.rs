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

//! Errors created when using credentials.

pub use gax::error::CredentialsError;

/// A key contains characters that are not valid in an HTTP header.
///
/// Invalid keys will fail on every request, these errors are never transient.
pub(crate) fn invalid_key<T>(scheme: &str, source: T) -> CredentialsError
where
    T: std::error::Error + Send + Sync + 'static,
{
    CredentialsError::new(
        false,
        format!("the key for {scheme} is not a valid header value"),
        source,
    )
}
