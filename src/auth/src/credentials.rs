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

//! Types and functions to work with Datadog API credentials.

use crate::Result;
use crate::build_errors::Error as BuilderError;
use http::HeaderMap;
use std::sync::Arc;

pub mod anonymous;
pub mod api_key;

pub(crate) const API_KEY_VAR: &str = "DD_API_KEY";
pub(crate) const APP_KEY_VAR: &str = "DD_APP_KEY";

/// A named authentication scheme and the header it uses.
///
/// Each operation declares the schemes it accepts. The credentials decide
/// which of those schemes they can satisfy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AuthScheme {
    name: &'static str,
    header: &'static str,
}

impl AuthScheme {
    /// Creates a new scheme.
    ///
    /// The header name must be lowercase, as required by [http::HeaderName::from_static].
    pub const fn new(name: &'static str, header: &'static str) -> Self {
        Self { name, header }
    }

    /// The scheme name, for example `apiKeyAuth`.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The header carrying the key, for example `dd-api-key`.
    pub const fn header(&self) -> &'static str {
        self.header
    }
}

/// The organization API key, sent in the `DD-API-KEY` header.
pub const API_KEY_AUTH: AuthScheme = AuthScheme::new("apiKeyAuth", "dd-api-key");

/// The application key, sent in the `DD-APPLICATION-KEY` header.
pub const APP_KEY_AUTH: AuthScheme = AuthScheme::new("appKeyAuth", "dd-application-key");

/// Represents the [Credentials] used to obtain the auth request headers.
///
/// In general, credentials are "digital objects that provide proof of
/// identity", the archetype may be a username and password combination. For
/// the Datadog API, credentials are an [API key and an application key].
///
/// Datadog operations declare which [AuthScheme]s they accept. The
/// credentials produce one header for each declared scheme they hold a key
/// for. Schemes without a key are skipped, the service rejects the request if
/// it requires the missing key.
///
/// [API key and an application key]: https://docs.datadoghq.com/account_management/api-app-keys/
#[derive(Clone, Debug)]
pub struct Credentials {
    // We use an `Arc` to hold the inner implementation.
    //
    // Credentials may be shared across threads (`Send + Sync`), so an `Rc`
    // will not do.
    //
    // They also need to derive `Clone`, as the client libraries create copies
    // for each API client.
    inner: Arc<dyn dynamic::CredentialsProvider>,
}

impl<T> std::convert::From<T> for Credentials
where
    T: dynamic::CredentialsProvider + Send + Sync + 'static,
{
    fn from(value: T) -> Self {
        Self {
            inner: Arc::new(value),
        }
    }
}

impl Credentials {
    /// Returns the headers for the given auth schemes.
    ///
    /// # Example
    /// ```
    /// # use datadog_api_auth::credentials::{api_key, API_KEY_AUTH, APP_KEY_AUTH};
    /// let credentials = api_key::Builder::new()
    ///     .with_api_key("my-api-key")
    ///     .build();
    /// let headers = credentials.headers(&[API_KEY_AUTH, APP_KEY_AUTH])?;
    /// assert_eq!(headers.len(), 1);
    /// assert!(headers.get("dd-api-key").is_some());
    /// # Ok::<(), datadog_api_auth::errors::CredentialsError>(())
    /// ```
    pub fn headers(&self, schemes: &[AuthScheme]) -> Result<HeaderMap> {
        self.inner.headers(schemes)
    }
}

/// A builder for the default credentials.
///
/// The default credentials use the `DD_API_KEY` and `DD_APP_KEY` environment
/// variables. At least one of them must be set. Use [anonymous::Builder] to
/// send requests without any keys, for example to a local test server.
///
/// # Example
/// ```
/// # use datadog_api_auth::credentials::Builder;
/// match Builder::default().build() {
///     Ok(credentials) => println!("using the environment keys"),
///     Err(e) if e.is_missing_keys() => println!("set DD_API_KEY and DD_APP_KEY: {e}"),
///     Err(e) => println!("cannot create credentials: {e}"),
/// }
/// ```
#[derive(Debug, Default)]
pub struct Builder {}

impl Builder {
    /// Returns a [Credentials] instance with the keys from the environment.
    ///
    /// # Errors
    /// Returns a [BuilderError] if neither `DD_API_KEY` nor `DD_APP_KEY` is
    /// set, or if any of them is set to an empty value.
    pub fn build(self) -> std::result::Result<Credentials, BuilderError> {
        let api_key = std::env::var(API_KEY_VAR).ok();
        let app_key = std::env::var(APP_KEY_VAR).ok();
        if api_key.is_none() && app_key.is_none() {
            return Err(BuilderError::missing_keys("DD_API_KEY, DD_APP_KEY"));
        }
        if api_key.as_ref().is_some_and(String::is_empty) {
            return Err(BuilderError::empty_key(API_KEY_VAR));
        }
        if app_key.as_ref().is_some_and(String::is_empty) {
            return Err(BuilderError::empty_key(APP_KEY_VAR));
        }
        Ok(api_key::Builder::from_env().build())
    }
}

pub mod dynamic {
    use super::{AuthScheme, Result};
    use http::HeaderMap;

    /// A trait for credential types that can provide authentication headers.
    ///
    /// This trait abstracts over the key sources, allowing the client to
    /// obtain the headers for each request without knowing where the keys
    /// come from.
    ///
    /// Applications rarely need to implement this trait directly. The main
    /// use case is mocking credentials in tests.
    pub trait CredentialsProvider: std::fmt::Debug + Send + Sync {
        /// Returns the headers for the given auth schemes.
        ///
        /// Implementations should skip the schemes they have no key for, and
        /// mark the header values as sensitive.
        fn headers(&self, schemes: &[AuthScheme]) -> Result<HeaderMap>;
    }
}
