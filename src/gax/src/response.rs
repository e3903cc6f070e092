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

//! Response types.
//!
//! This module contains types related to Datadog API responses. Notably it
//! contains the `Response` type itself. Typically you'll import this type.
//!
//! # Examples
//!
//! Creating a response for mocks
//!
//! ```
//! # use datadog_api_gax::Result;
//! # use datadog_api_gax::response::Response;
//! // A type representing a Datadog resource, for example, a dashboard list.
//! struct Resource {
//!   // ...
//! }
//!
//! fn make_mock_response(body: Resource) -> Result<Response<Resource>> {
//!     Ok(Response::from(body))
//! }
//! ```

/// Represents a Datadog API response.
///
/// A response consists of a body (potentially the unit type), and some
/// metadata: the status code, the headers, and the raw body as received from
/// the service.
///
/// Typically you get a response as the result of making a request via some
/// client in the Datadog API client libraries for Rust. You may also create
/// responses directly when mocking clients for your own tests.
#[derive(Clone, Debug)]
pub struct Response<T> {
    parts: Parts,
    body: T,
}

impl<T> Response<T> {
    /// Creates a response from the body.
    ///
    /// # Example
    /// ```
    /// # use datadog_api_gax::response::Response;
    /// let response = Response::from("test".to_string());
    /// assert_eq!(response.status(), http::StatusCode::OK);
    /// ```
    pub fn from(body: T) -> Self {
        Self {
            body,
            parts: Parts::default(),
        }
    }

    /// Creates a response from the given parts.
    ///
    /// # Example
    /// ```
    /// # use datadog_api_gax::response::Response;
    /// # use datadog_api_gax::response::Parts;
    /// let mut headers = http::HeaderMap::new();
    /// headers.insert(http::header::CONTENT_TYPE, http::HeaderValue::from_static("application/json"));
    /// let response = Response::from_parts(Parts::new().set_headers(headers), ());
    /// assert!(response.headers().get(http::header::CONTENT_TYPE).is_some());
    /// ```
    pub fn from_parts(parts: Parts, body: T) -> Self {
        Self { parts, body }
    }

    /// Returns the HTTP status code.
    pub fn status(&self) -> http::StatusCode {
        self.parts.status
    }

    /// Returns the headers associated with this response.
    pub fn headers(&self) -> &http::HeaderMap<http::HeaderValue> {
        &self.parts.headers
    }

    /// Returns the response body as received from the service.
    ///
    /// This is useful to examine responses that do not match the models in
    /// the client library.
    pub fn raw_body(&self) -> &bytes::Bytes {
        &self.parts.raw_body
    }

    /// Returns the body associated with this response.
    ///
    /// # Example
    /// ```
    /// # use datadog_api_gax::response::Response;
    /// let response = Response::from("test".to_string());
    /// assert_eq!(response.body().as_str(), "test");
    /// ```
    pub fn body(&self) -> &T {
        &self.body
    }

    /// Consumes the response returning the metadata, and body.
    pub fn into_parts(self) -> (Parts, T) {
        (self.parts, self.body)
    }

    /// Consumes the response returning only its body.
    pub fn into_body(self) -> T {
        self.body
    }

    /// Transforms the body, keeping the metadata.
    ///
    /// # Example
    /// ```
    /// # use datadog_api_gax::response::Response;
    /// let response = Response::from("test".to_string()).map(|s| s.len());
    /// assert_eq!(response.body(), &4);
    /// ```
    pub fn map<U, F>(self, f: F) -> Response<U>
    where
        F: FnOnce(T) -> U,
    {
        Response {
            parts: self.parts,
            body: f(self.body),
        }
    }
}

/// Component parts of a response.
///
/// # Example
/// ```
/// # use datadog_api_gax::response::Parts;
/// let mut headers = http::HeaderMap::new();
/// headers.insert(http::header::CONTENT_TYPE, http::HeaderValue::from_static("application/json"));
/// let parts = Parts::new().set_headers(headers);
///
/// assert_eq!(
///     parts.headers.get(http::header::CONTENT_TYPE),
///     Some(&http::HeaderValue::from_static("application/json"))
/// );
/// ```
#[derive(Clone, Debug, Default)]
#[non_exhaustive]
pub struct Parts {
    /// The HTTP status code.
    pub status: http::StatusCode,
    /// The HTTP headers.
    pub headers: http::HeaderMap<http::HeaderValue>,
    /// The response body as received from the service.
    pub raw_body: bytes::Bytes,
}

impl Parts {
    /// Create a new instance.
    pub fn new() -> Self {
        Parts::default()
    }

    /// Set the status code.
    pub fn set_status<V: Into<http::StatusCode>>(mut self, v: V) -> Self {
        self.status = v.into();
        self
    }

    /// Set the headers.
    pub fn set_headers<V>(mut self, v: V) -> Self
    where
        V: Into<http::HeaderMap>,
    {
        self.headers = v.into();
        self
    }

    /// Set the raw body.
    pub fn set_raw_body<V: Into<bytes::Bytes>>(mut self, v: V) -> Self {
        self.raw_body = v.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_from() {
        let response = Response::from("abc123".to_string());
        assert!(response.headers().is_empty());
        assert_eq!(response.status(), http::StatusCode::OK);
        assert!(response.raw_body().is_empty());
        assert_eq!(response.body().as_str(), "abc123");

        let body = response.into_body();
        assert_eq!(body.as_str(), "abc123");
    }

    #[test]
    fn response_from_parts() {
        let mut headers = http::HeaderMap::new();
        headers.insert(
            http::header::CONTENT_TYPE,
            http::HeaderValue::from_static("application/json"),
        );
        let parts = Parts::new()
            .set_status(http::StatusCode::CREATED)
            .set_headers(headers.clone())
            .set_raw_body(bytes::Bytes::from_static(b"\"abc123\""));

        let response = Response::from_parts(parts, "abc123".to_string());
        assert_eq!(response.body().as_str(), "abc123");
        assert_eq!(response.status(), http::StatusCode::CREATED);
        assert_eq!(response.headers(), &headers);
        assert_eq!(response.raw_body().as_ref(), b"\"abc123\"");

        let (parts, body) = response.into_parts();
        assert_eq!(body.as_str(), "abc123");
        assert_eq!(parts.headers, headers);
    }

    #[test]
    fn map() {
        let parts = Parts::new().set_status(http::StatusCode::ACCEPTED);
        let response = Response::from_parts(parts, 21).map(|v| v * 2);
        assert_eq!(response.status(), http::StatusCode::ACCEPTED);
        assert_eq!(response.into_body(), 42);
    }
}
