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

//! Anonymous credentials.
//!
//! These credentials do not provide any authentication information. They are
//! useful for tests, or to send requests through a proxy that adds the keys.

use crate::Result;
use crate::credentials::dynamic::CredentialsProvider;
use crate::credentials::{AuthScheme, Credentials};
use http::HeaderMap;

#[derive(Debug)]
struct AnonymousCredentials;

/// A builder for creating anonymous credentials.
#[derive(Debug, Default)]
pub struct Builder {}

impl Builder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a [Credentials] instance.
    pub fn build(self) -> Credentials {
        Credentials::from(AnonymousCredentials)
    }
}

impl CredentialsProvider for AnonymousCredentials {
    fn headers(&self, _schemes: &[AuthScheme]) -> Result<HeaderMap> {
        Ok(HeaderMap::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::{API_KEY_AUTH, APP_KEY_AUTH};

    type TestResult = std::result::Result<(), Box<dyn std::error::Error>>;

    #[test]
    fn create_anonymous_credentials() -> TestResult {
        let creds = Builder::new().build();
        let headers = creds.headers(&[API_KEY_AUTH, APP_KEY_AUTH])?;
        assert!(headers.is_empty(), "{headers:?}");
        Ok(())
    }
}
