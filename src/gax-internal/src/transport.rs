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

//! The HTTP transport used by the clients.
//!
//! The clients send fully assembled requests through the [HttpTransport]
//! trait. The default implementation uses `reqwest`, tests may replace it
//! with a mock.

use gax::Result;
use gax::error::Error;

/// Sends one HTTP request and reads the full response.
///
/// Implementations must not retry, and must read the complete response
/// body before returning.
#[async_trait::async_trait]
pub trait HttpTransport: std::fmt::Debug + Send + Sync {
    async fn send(&self, request: http::Request<bytes::Bytes>)
    -> Result<http::Response<bytes::Bytes>>;
}

/// The default [HttpTransport], based on [reqwest].
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    inner: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> gax::client_builder::Result<Self> {
        let inner = reqwest::Client::builder()
            .build()
            .map_err(gax::client_builder::Error::transport)?;
        Ok(Self { inner })
    }

    fn map_send_error(err: reqwest::Error) -> Error {
        match err {
            e if e.is_timeout() => Error::timeout(e),
            e => Error::io(e),
        }
    }
}

#[async_trait::async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(
        &self,
        request: http::Request<bytes::Bytes>,
    ) -> Result<http::Response<bytes::Bytes>> {
        let (parts, body) = request.into_parts();
        let mut builder = self
            .inner
            .request(parts.method, parts.uri.to_string())
            .headers(parts.headers);
        if !body.is_empty() {
            builder = builder.body(body);
        }
        let response = builder.send().await.map_err(Self::map_send_error)?;
        let response = http::Response::from(response);
        let (parts, body) = response.into_parts();
        let body = http_body_util::BodyExt::collect(body)
            .await
            .map_err(Self::map_send_error)?
            .to_bytes();
        Ok(http::Response::from_parts(parts, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httptest::{Expectation, Server, matchers::*, responders::*};

    static_assertions::assert_impl_all!(ReqwestTransport: Clone, Send, Sync, std::fmt::Debug);

    #[tokio::test]
    async fn send() -> anyhow::Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/api/v1/things"),
                request::headers(contains(("x-test", "value"))),
                request::body(r#"{"a":1}"#),
            ])
            .respond_with(
                status_code(201)
                    .insert_header("content-type", "application/json")
                    .body(r#"{"id":"abc"}"#),
            ),
        );

        let transport = ReqwestTransport::new()?;
        let request = http::Request::builder()
            .method(http::Method::POST)
            .uri(server.url_str("/api/v1/things"))
            .header("x-test", "value")
            .body(bytes::Bytes::from_static(br#"{"a":1}"#))?;
        let response = transport.send(request).await?;
        assert_eq!(response.status(), http::StatusCode::CREATED);
        assert_eq!(
            response.headers().get("content-type"),
            Some(&http::HeaderValue::from_static("application/json"))
        );
        assert_eq!(response.body().as_ref(), br#"{"id":"abc"}"#);
        Ok(())
    }

    #[tokio::test]
    async fn connection_error() -> anyhow::Result<()> {
        let transport = ReqwestTransport::new()?;
        // Nothing listens on port 1.
        let request = http::Request::builder()
            .uri("http://127.0.0.1:1/api/v1/things")
            .body(bytes::Bytes::new())?;
        let err = transport.send(request).await.unwrap_err();
        assert!(err.is_transport(), "{err:?}");
        Ok(())
    }
}
