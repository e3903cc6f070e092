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

//! The request builder returned by each client method.

use crate::http::ReqwestClient;
use crate::operation::{Arguments, OperationDescriptor};
use gax::Result;
use gax::options::RequestOptions;
use gax::response::Response;
use std::marker::PhantomData;
use wkt::Decoded;

/// A pending call to one operation.
///
/// `I` is the request body type and `O` is the type of the successful
/// response. Nothing is sent until [Call::send] is awaited. The per-request
/// options are set via [gax::options::RequestOptionsBuilder].
pub struct Call<I, O> {
    client: ReqwestClient,
    operation: &'static OperationDescriptor,
    arguments: Arguments,
    body: Option<I>,
    options: RequestOptions,
    _output: PhantomData<fn() -> O>,
}

impl<I, O> Call<I, O>
where
    I: serde::ser::Serialize,
    O: serde::de::DeserializeOwned + Default,
{
    pub fn new(
        client: ReqwestClient,
        operation: &'static OperationDescriptor,
        arguments: Arguments,
    ) -> Self {
        Self {
            client,
            operation,
            arguments,
            body: None,
            options: RequestOptions::default(),
            _output: PhantomData,
        }
    }

    /// Sets the request body.
    pub fn with_body(mut self, body: I) -> Self {
        self.body = Some(body);
        self
    }

    /// The operation called by this request.
    pub fn operation(&self) -> &'static OperationDescriptor {
        self.operation
    }

    /// Sends the request.
    pub async fn send(self) -> Result<Response<Decoded<O>>> {
        self.client
            .execute::<I, O>(self.operation, self.arguments, self.body, self.options)
            .await
    }
}

impl<I, O> std::fmt::Debug for Call<I, O>
where
    I: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Call")
            .field("operation", &self.operation.id)
            .field("arguments", &self.arguments)
            .field("body", &self.body)
            .field("options", &self.options)
            .finish()
    }
}

impl<I, O> gax::options::internal::RequestBuilder for Call<I, O> {
    fn request_options(&mut self) -> &mut RequestOptions {
        &mut self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api_header::{CLIENT_NAME, UserAgent};
    use crate::operation::{APPLICATION_JSON, BodySpec, ParameterSpec};
    use crate::transport::HttpTransport;
    use auth::credentials::{API_KEY_AUTH, anonymous};
    use gax::options::RequestOptionsBuilder;
    use http::Method;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    static TEST_AGENT: UserAgent = UserAgent {
        name: CLIENT_NAME,
        version: "1.0.0",
    };

    static CREATE: OperationDescriptor = OperationDescriptor {
        id: "test.DashboardListsApi.CreateDashboardList",
        method: Method::POST,
        path: "/api/v1/dashboard/lists/manual",
        parameters: &[],
        body: BodySpec::Required,
        accept: APPLICATION_JSON,
        auth: &[API_KEY_AUTH],
        errors: &[],
        success_payload: true,
    };

    static GET: OperationDescriptor = OperationDescriptor {
        id: "test.DashboardListsApi.GetDashboardList",
        method: Method::GET,
        path: "/api/v1/dashboard/lists/manual/{list_id}",
        parameters: &[ParameterSpec::path("list_id")],
        body: BodySpec::None,
        accept: APPLICATION_JSON,
        auth: &[API_KEY_AUTH],
        errors: &[],
        success_payload: true,
    };

    #[derive(Debug, Default)]
    struct Recorder {
        requests: Mutex<Vec<http::Request<bytes::Bytes>>>,
    }

    #[async_trait::async_trait]
    impl HttpTransport for Recorder {
        async fn send(
            &self,
            request: http::Request<bytes::Bytes>,
        ) -> Result<http::Response<bytes::Bytes>> {
            let body = request.body().clone();
            self.requests.lock().unwrap().push(request);
            Ok(http::Response::new(body))
        }
    }

    fn client(transport: Arc<Recorder>) -> anyhow::Result<ReqwestClient> {
        let config = crate::options::ClientConfig {
            endpoint: Some("http://localhost:1234".to_string()),
            cred: Some(anonymous::Builder::new().build()),
            ..Default::default()
        };
        Ok(ReqwestClient::with_transport(config, &TEST_AGENT, transport)?)
    }

    #[tokio::test]
    async fn send_with_body() -> anyhow::Result<()> {
        let recorder = Arc::new(Recorder::default());
        let call = Call::<serde_json::Value, serde_json::Value>::new(
            client(recorder.clone())?,
            &CREATE,
            Arguments::new(),
        )
        .with_body(serde_json::json!({"name": "My Dashboard"}));
        assert_eq!(call.operation().id, CREATE.id);
        let response = call.send().await?;
        assert_eq!(
            response.into_body().into_typed(),
            Some(serde_json::json!({"name": "My Dashboard"}))
        );

        let requests = recorder.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method(), Method::POST);
        assert_eq!(
            requests[0].uri().to_string(),
            "http://localhost:1234/api/v1/dashboard/lists/manual"
        );
        Ok(())
    }

    #[tokio::test]
    async fn options() -> anyhow::Result<()> {
        let recorder = Arc::new(Recorder::default());
        let mut call = Call::<crate::http::NoBody, serde_json::Value>::new(
            client(recorder.clone())?,
            &GET,
            Arguments::new().with("list_id", &42_i64),
        )
        .with_user_agent("test-prefix")
        .with_attempt_timeout(Duration::from_secs(10));
        use gax::options::internal::RequestBuilder;
        assert_eq!(
            call.request_options().user_agent().as_deref(),
            Some("test-prefix")
        );
        assert_eq!(
            call.request_options().attempt_timeout(),
            &Some(Duration::from_secs(10))
        );
        let fmt = format!("{call:?}");
        assert!(fmt.contains("GetDashboardList"), "{fmt}");

        call.send().await?;
        let requests = recorder.requests.lock().unwrap();
        let agent = requests[0]
            .headers()
            .get("user-agent")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();
        assert!(agent.starts_with("test-prefix datadog-api-client-rust/"), "{agent}");
        Ok(())
    }
}
