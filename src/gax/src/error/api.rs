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

/// The error payload returned by most Datadog API endpoints.
///
/// # Example
/// ```
/// # use datadog_api_gax::error::ApiErrorResponse;
/// let payload = serde_json::from_str::<ApiErrorResponse>(r#"{"errors": ["Bad Request"]}"#)?;
/// assert_eq!(payload.errors, vec!["Bad Request".to_string()]);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct ApiErrorResponse {
    /// A list of errors.
    pub errors: Vec<String>,

    #[serde(flatten)]
    pub _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl ApiErrorResponse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [errors][ApiErrorResponse::errors].
    pub fn set_errors<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.errors = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

impl std::fmt::Debug for ApiErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("ApiErrorResponse");
        debug_struct.field("errors", &self.errors);
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}
