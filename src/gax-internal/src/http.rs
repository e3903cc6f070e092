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

use crate::api_header::UserAgent;
use crate::observability::{create_http_span, record_http_result};
use crate::operation::{Arguments, OperationDescriptor};
use crate::request::Request;
use crate::transport::{HttpTransport, ReqwestTransport};
use auth::credentials::Credentials;
use gax::Result;
use gax::client_builder::Error as BuilderError;
use gax::error::Error;
use gax::options::RequestOptions;
use gax::response::Response;
use http::header::{HeaderValue, USER_AGENT};
use std::sync::Arc;
use tracing::{Instrument, Span};
use wkt::Decoded;

/// The execution engine shared by all the clients.
///
/// Every operation goes through [ReqwestClient::execute], driven by the
/// [OperationDescriptor] for the operation.
#[derive(Clone, Debug)]
pub struct ReqwestClient {
    transport: Arc<dyn HttpTransport>,
    cred: Credentials,
    endpoint: String,
    user_agent: String,
    tracing: bool,
}

impl ReqwestClient {
    pub async fn new(
        config: crate::options::ClientConfig,
        user_agent: &UserAgent,
    ) -> gax::client_builder::Result<Self> {
        let transport = ReqwestTransport::new()?;
        Self::with_transport(config, user_agent, Arc::new(transport))
    }

    /// Creates a client sending all requests via `transport`.
    pub fn with_transport(
        config: crate::options::ClientConfig,
        user_agent: &UserAgent,
        transport: Arc<dyn HttpTransport>,
    ) -> gax::client_builder::Result<Self> {
        let tracing = crate::options::tracing_enabled(&config);
        let endpoint = crate::host::endpoint(config.endpoint.as_deref(), config.site.as_deref())?;
        let cred = Self::make_credentials(&config)?;
        let user_agent = user_agent.with_prefix(config.user_agent.as_deref());
        HeaderValue::from_str(&user_agent).map_err(BuilderError::transport)?;
        Ok(Self {
            transport,
            cred,
            endpoint,
            user_agent,
            tracing,
        })
    }

    fn make_credentials(
        config: &crate::options::ClientConfig,
    ) -> gax::client_builder::Result<Credentials> {
        if let Some(c) = config.cred.clone() {
            return Ok(c);
        }
        auth::credentials::Builder::default()
            .build()
            .map_err(BuilderError::cred)
    }

    /// The base URL for all requests.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Builds, sends, and decodes one request for `operation`.
    ///
    /// The request is never retried. The attempt timeout and the cancellation
    /// token in `options` cover the complete call, including reading the
    /// response body.
    pub async fn execute<I, O>(
        &self,
        operation: &'static OperationDescriptor,
        arguments: Arguments,
        body: Option<I>,
        options: RequestOptions,
    ) -> Result<Response<Decoded<O>>>
    where
        I: serde::ser::Serialize,
        O: serde::de::DeserializeOwned + Default,
    {
        let request = crate::request::build(operation, arguments, body.as_ref())?;
        let attempt = async {
            match options.attempt_timeout() {
                None => self.request_attempt::<O>(operation, request, &options).await,
                Some(t) => tokio::time::timeout(*t, self.request_attempt::<O>(operation, request, &options))
                    .await
                    .map_err(Error::timeout)?,
            }
        };
        match options.cancellation_token() {
            None => attempt.await,
            Some(token) => {
                tokio::select! {
                    biased;
                    _ = token.cancelled() => Err(Error::cancelled("the cancellation token was triggered")),
                    r = attempt => r,
                }
            }
        }
    }

    async fn request_attempt<O>(
        &self,
        operation: &'static OperationDescriptor,
        request: Request,
        options: &RequestOptions,
    ) -> Result<Response<Decoded<O>>>
    where
        O: serde::de::DeserializeOwned + Default,
    {
        let Request {
            method,
            path_and_query,
            mut headers,
            body,
        } = request;
        let uri = format!("{}{path_and_query}", self.endpoint)
            .parse::<http::Uri>()
            .map_err(Error::binding)?;

        let auth_headers = self
            .cred
            .headers(operation.auth)
            .map_err(Error::authentication)?;
        headers.extend(auth_headers);
        let user_agent = match options.user_agent() {
            Some(prefix) => format!("{prefix} {}", self.user_agent),
            None => self.user_agent.clone(),
        };
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&user_agent).map_err(Error::ser)?,
        );

        let span = if self.tracing {
            create_http_span(operation.id, &method, &uri)
        } else {
            Span::none()
        };
        tracing::debug!(
            operation = operation.id,
            method = %method,
            path = uri.path(),
            "sending request"
        );
        let mut http_request = http::Request::new(body.unwrap_or_default());
        *http_request.method_mut() = method;
        *http_request.uri_mut() = uri;
        *http_request.headers_mut() = headers;

        let response = self
            .transport
            .send(http_request)
            .instrument(span.clone())
            .await;
        record_http_result(&span, response.as_ref());
        let response = crate::dispatch::decode::<O>(operation, response?);
        if let Err(e) = &response {
            record_http_result::<bytes::Bytes>(&span, Err(e));
        }
        response
    }
}

/// The request body for operations without a body.
#[derive(Clone, Debug, serde::Serialize)]
pub struct NoBody;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api_header::CLIENT_NAME;
    use crate::operation::{
        APPLICATION_JSON, BodySpec, ErrorRoute, ParameterSpec, decode_as,
    };
    use auth::credentials::{API_KEY_AUTH, APP_KEY_AUTH, anonymous, api_key};
    use gax::error::ApiErrorResponse;
    use gax::options::CancellationToken;
    use http::Method;
    use std::time::Duration;

    static_assertions::assert_impl_all!(ReqwestClient: Clone, Send, Sync, std::fmt::Debug);

    static TEST_AGENT: UserAgent = UserAgent {
        name: CLIENT_NAME,
        version: "1.0.0",
    };

    static GET_ROLE: OperationDescriptor = OperationDescriptor {
        id: "test.RolesApi.GetRole",
        method: Method::GET,
        path: "/api/v2/roles/{role_id}",
        parameters: &[ParameterSpec::path("role_id")],
        body: BodySpec::None,
        accept: APPLICATION_JSON,
        auth: &[API_KEY_AUTH, APP_KEY_AUTH],
        errors: &[ErrorRoute::new(
            &[403, 404, 429],
            decode_as::<ApiErrorResponse>,
        )],
        success_payload: true,
    };

    mockall::mock! {
        #[derive(Debug)]
        Transport {}

        #[async_trait::async_trait]
        impl HttpTransport for Transport {
            async fn send(&self, request: http::Request<bytes::Bytes>) -> Result<http::Response<bytes::Bytes>>;
        }
    }

    #[derive(Debug)]
    struct Hanging;

    #[async_trait::async_trait]
    impl HttpTransport for Hanging {
        async fn send(
            &self,
            _request: http::Request<bytes::Bytes>,
        ) -> Result<http::Response<bytes::Bytes>> {
            std::future::pending().await
        }
    }

    fn test_config() -> crate::options::ClientConfig {
        crate::options::ClientConfig {
            endpoint: Some("https://api.example.com".to_string()),
            cred: Some(
                api_key::Builder::new()
                    .with_api_key("test-api-key")
                    .with_app_key("test-app-key")
                    .build(),
            ),
            ..Default::default()
        }
    }

    fn ok_response(body: &'static str) -> http::Response<bytes::Bytes> {
        http::Response::new(bytes::Bytes::from_static(body.as_bytes()))
    }

    fn role_id() -> Arguments {
        Arguments::new().with("role_id", &"abc/123".to_string())
    }

    #[tokio::test]
    async fn execute() -> anyhow::Result<()> {
        let mut mock = MockTransport::new();
        mock.expect_send()
            .withf(|r| {
                *r.method() == Method::GET
                    && r.uri().to_string() == "https://api.example.com/api/v2/roles/abc%2F123"
                    && r.headers().get("dd-api-key").is_some_and(|v| v == "test-api-key")
                    && r.headers().get("dd-application-key").is_some_and(|v| v == "test-app-key")
                    && r.headers().get("accept").is_some_and(|v| v == "application/json")
                    && r.headers().get("content-type").is_none()
                    && r.body().is_empty()
            })
            .times(1)
            .returning(|_| Ok(ok_response(r#"{"id":"abc"}"#)));
        let client = ReqwestClient::with_transport(test_config(), &TEST_AGENT, Arc::new(mock))?;
        let response = client
            .execute::<NoBody, serde_json::Value>(
                &GET_ROLE,
                role_id(),
                None,
                RequestOptions::default(),
            )
            .await?;
        assert_eq!(
            response.into_body(),
            Decoded::Typed(serde_json::json!({"id": "abc"}))
        );
        Ok(())
    }

    #[tokio::test]
    async fn missing_parameter_sends_nothing() -> anyhow::Result<()> {
        let mut mock = MockTransport::new();
        mock.expect_send().never();
        let client = ReqwestClient::with_transport(test_config(), &TEST_AGENT, Arc::new(mock))?;
        let err = client
            .execute::<NoBody, serde_json::Value>(
                &GET_ROLE,
                Arguments::new(),
                None,
                RequestOptions::default(),
            )
            .await
            .unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        assert_eq!(err.missing_parameter(), Some("role_id"));
        Ok(())
    }

    #[tokio::test]
    async fn user_agent() -> anyhow::Result<()> {
        let mut mock = MockTransport::new();
        mock.expect_send()
            .withf(|r| {
                r.headers()
                    .get("user-agent")
                    .and_then(|v| v.to_str().ok())
                    .is_some_and(|v| {
                        v.starts_with("call-prefix client-prefix datadog-api-client-rust/1.0.0 (rust ")
                    })
            })
            .times(1)
            .returning(|_| Ok(ok_response("{}")));
        let mut config = test_config();
        config.user_agent = Some("client-prefix".to_string());
        let client = ReqwestClient::with_transport(config, &TEST_AGENT, Arc::new(mock))?;
        let mut options = RequestOptions::default();
        options.set_user_agent("call-prefix");
        client
            .execute::<NoBody, serde_json::Value>(&GET_ROLE, role_id(), None, options)
            .await?;
        Ok(())
    }

    #[tokio::test]
    async fn anonymous_credentials() -> anyhow::Result<()> {
        let mut mock = MockTransport::new();
        mock.expect_send()
            .withf(|r| {
                r.headers().get("dd-api-key").is_none()
                    && r.headers().get("dd-application-key").is_none()
            })
            .times(1)
            .returning(|_| Ok(ok_response("{}")));
        let mut config = test_config();
        config.cred = Some(anonymous::Builder::new().build());
        let client = ReqwestClient::with_transport(config, &TEST_AGENT, Arc::new(mock))?;
        client
            .execute::<NoBody, serde_json::Value>(
                &GET_ROLE,
                role_id(),
                None,
                RequestOptions::default(),
            )
            .await?;
        Ok(())
    }

    #[tokio::test]
    async fn service_error() -> anyhow::Result<()> {
        let mut mock = MockTransport::new();
        mock.expect_send().times(1).returning(|_| {
            let mut response = ok_response(r#"{"errors":["Role not found"]}"#);
            *response.status_mut() = http::StatusCode::NOT_FOUND;
            Ok(response)
        });
        let client = ReqwestClient::with_transport(test_config(), &TEST_AGENT, Arc::new(mock))?;
        let err = client
            .execute::<NoBody, serde_json::Value>(
                &GET_ROLE,
                role_id(),
                None,
                RequestOptions::default(),
            )
            .await
            .unwrap_err();
        assert!(err.is_service(), "{err:?}");
        assert_eq!(err.http_status_code(), Some(404));
        assert_eq!(
            err.api_error().map(|e| e.errors.clone()),
            Some(vec!["Role not found".to_string()])
        );
        Ok(())
    }

    #[tokio::test]
    async fn transport_error() -> anyhow::Result<()> {
        let mut mock = MockTransport::new();
        mock.expect_send()
            .times(1)
            .returning(|_| Err(Error::io("connection reset")));
        let client = ReqwestClient::with_transport(test_config(), &TEST_AGENT, Arc::new(mock))?;
        let err = client
            .execute::<NoBody, serde_json::Value>(
                &GET_ROLE,
                role_id(),
                None,
                RequestOptions::default(),
            )
            .await
            .unwrap_err();
        assert!(err.is_transport(), "{err:?}");
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn timeout() -> anyhow::Result<()> {
        let client = ReqwestClient::with_transport(test_config(), &TEST_AGENT, Arc::new(Hanging))?;
        let mut options = RequestOptions::default();
        options.set_attempt_timeout(Duration::from_secs(5));
        let err = client
            .execute::<NoBody, serde_json::Value>(&GET_ROLE, role_id(), None, options)
            .await
            .unwrap_err();
        assert!(err.is_timeout(), "{err:?}");
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled() -> anyhow::Result<()> {
        let client = ReqwestClient::with_transport(test_config(), &TEST_AGENT, Arc::new(Hanging))?;
        let token = CancellationToken::new();
        let mut options = RequestOptions::default();
        options.set_cancellation_token(token.clone());
        let canceller = tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(100)).await;
            token.cancel();
        });
        let err = client
            .execute::<NoBody, serde_json::Value>(&GET_ROLE, role_id(), None, options)
            .await
            .unwrap_err();
        assert!(err.is_cancelled(), "{err:?}");
        canceller.await?;
        Ok(())
    }

    #[tokio::test]
    async fn already_cancelled() -> anyhow::Result<()> {
        let mut mock = MockTransport::new();
        mock.expect_send().never();
        let client = ReqwestClient::with_transport(test_config(), &TEST_AGENT, Arc::new(mock))?;
        let token = CancellationToken::new();
        token.cancel();
        let mut options = RequestOptions::default();
        options.set_cancellation_token(token);
        let err = client
            .execute::<NoBody, serde_json::Value>(&GET_ROLE, role_id(), None, options)
            .await
            .unwrap_err();
        assert!(err.is_cancelled(), "{err:?}");
        Ok(())
    }

    #[test]
    fn invalid_endpoint() {
        let mut config = test_config();
        config.endpoint = Some("not a url".to_string());
        let got = ReqwestClient::with_transport(config, &TEST_AGENT, Arc::new(Hanging));
        assert!(matches!(&got, Err(e) if e.is_transport()), "{got:?}");
    }
}
