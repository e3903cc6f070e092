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

//! [API and application key] credentials.
//!
//! The API key identifies the Datadog organization. The application key, used
//! together with the API key, grants access on behalf of a user or service
//! account. Ensure the keys are kept secure during both storage and
//! transmission.
//!
//! [API and application key]: https://docs.datadoghq.com/account_management/api-app-keys/

use super::{API_KEY_AUTH, API_KEY_VAR, APP_KEY_AUTH, APP_KEY_VAR, AuthScheme, Credentials};
use crate::Result;
use crate::credentials::dynamic::CredentialsProvider;
use crate::headers_util::insert_key;
use http::HeaderMap;

struct ApiKeyCredentials {
    api_key: Option<String>,
    app_key: Option<String>,
}

impl std::fmt::Debug for ApiKeyCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKeyCredentials")
            .field("api_key", &self.api_key.as_ref().map(|_| "[censored]"))
            .field("app_key", &self.app_key.as_ref().map(|_| "[censored]"))
            .finish()
    }
}

impl ApiKeyCredentials {
    fn key(&self, scheme: &AuthScheme) -> Option<&str> {
        match *scheme {
            s if s == API_KEY_AUTH => self.api_key.as_deref(),
            s if s == APP_KEY_AUTH => self.app_key.as_deref(),
            _ => None,
        }
    }
}

impl CredentialsProvider for ApiKeyCredentials {
    fn headers(&self, schemes: &[AuthScheme]) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        for scheme in schemes {
            if let Some(key) = self.key(scheme) {
                insert_key(&mut headers, scheme, key)?;
            }
        }
        Ok(headers)
    }
}

/// A builder for credentials using Datadog API and application keys.
///
/// Most Datadog endpoints require both keys. Some endpoints, such as the
/// endpoints to send metrics or logs, only require the API key.
///
/// # Example
/// ```
/// # use datadog_api_auth::credentials::api_key::Builder;
/// let credentials = Builder::new()
///     .with_api_key("my-api-key")
///     .with_app_key("my-app-key")
///     .build();
/// ```
#[derive(Clone, Default)]
pub struct Builder {
    api_key: Option<String>,
    app_key: Option<String>,
}

impl std::fmt::Debug for Builder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Builder")
            .field("api_key", &self.api_key.as_ref().map(|_| "[censored]"))
            .field("app_key", &self.app_key.as_ref().map(|_| "[censored]"))
            .finish()
    }
}

impl Builder {
    /// Creates a new builder without any keys.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new builder with the keys in the `DD_API_KEY` and `DD_APP_KEY`
    /// environment variables.
    ///
    /// Variables that are not set, or set to an empty value, are ignored.
    ///
    /// # Example
    /// ```
    /// # use datadog_api_auth::credentials::api_key::Builder;
    /// let credentials = Builder::from_env()
    ///     .with_app_key("override-the-app-key")
    ///     .build();
    /// ```
    pub fn from_env() -> Self {
        let from_var = |name| std::env::var(name).ok().filter(|v| !v.is_empty());
        Self {
            api_key: from_var(API_KEY_VAR),
            app_key: from_var(APP_KEY_VAR),
        }
    }

    /// Sets the API key, sent in the `DD-API-KEY` header.
    pub fn with_api_key<T: Into<String>>(mut self, v: T) -> Self {
        self.api_key = Some(v.into());
        self
    }

    /// Sets the application key, sent in the `DD-APPLICATION-KEY` header.
    pub fn with_app_key<T: Into<String>>(mut self, v: T) -> Self {
        self.app_key = Some(v.into());
        self
    }

    /// Returns a [Credentials] instance with the configured keys.
    pub fn build(self) -> Credentials {
        Credentials::from(ApiKeyCredentials {
            api_key: self.api_key,
            app_key: self.app_key,
        })
    }
}
