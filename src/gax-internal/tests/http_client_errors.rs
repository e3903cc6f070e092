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
#[cfg(test)]
mod tests {
    use auth::credentials::anonymous;
    use datadog_api_gax_internal::http::{NoBody, ReqwestClient};
    use datadog_api_gax_internal::operation::*;
    use gax::error::ApiErrorResponse;
    use gax::options::*;
    use http::Method;
    use test_case::test_case;

    type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

    #[derive(Clone, Debug, PartialEq, serde::Deserialize)]
    struct ConflictResponse {
        errors: Vec<String>,
    }

    static ERROR: OperationDescriptor = OperationDescriptor {
        id: "test.EchoApi.Error",
        method: Method::GET,
        path: "/error",
        parameters: &[ParameterSpec::query("status"), ParameterSpec::query("format")],
        body: BodySpec::None,
        accept: APPLICATION_JSON,
        auth: &[],
        errors: &[
            ErrorRoute::new(&[400, 403, 429], decode_as::<ApiErrorResponse>),
            ErrorRoute::new(&[409], decode_as::<ConflictResponse>),
        ],
        success_payload: true,
    };

    async fn test_client() -> Result<(ReqwestClient, tokio::task::JoinHandle<()>)> {
        let (endpoint, server) = echo_server::start().await?;
        let client = echo_server::builder(endpoint)
            .with_credentials(anonymous::Builder::new().build())
            .build()
            .await?;
        Ok((client, server))
    }

    async fn call(client: &ReqwestClient, status: u16, format: Option<&str>) -> gax::error::Error {
        let args = Arguments::new()
            .with("status", &u32::from(status))
            .with("format", &format.map(str::to_string));
        let result = client
            .execute::<NoBody, serde_json::Value>(&ERROR, args, None, RequestOptions::default())
            .await;
        match result {
            Ok(r) => panic!("expected an error, got {r:?}"),
            Err(e) => e,
        }
    }

    #[test_case(400, "400 Bad Request")]
    #[test_case(403, "403 Forbidden")]
    #[test_case(429, "429 Too Many Requests")]
    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn api_error(status: u16, status_line: &str) -> Result<()> {
        let (client, _server) = test_client().await?;
        let err = call(&client, status, None).await;
        assert!(err.is_service(), "{err:?}");
        assert_eq!(err.http_status_code(), Some(status));
        assert_eq!(err.status_line(), Some(status_line));
        assert_eq!(
            err.api_error(),
            Some(&ApiErrorResponse::new().set_errors(["this path always returns an error"]))
        );
        assert!(err.http_headers().is_some(), "{err:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn operation_error_model() -> Result<()> {
        let (client, _server) = test_client().await?;
        let err = call(&client, 409, None).await;
        assert!(err.is_service(), "{err:?}");
        assert_eq!(
            err.error_model::<ConflictResponse>(),
            Some(&ConflictResponse {
                errors: vec!["this path always returns an error".to_string()]
            })
        );
        assert!(err.api_error().is_none(), "{err:?}");
        Ok(())
    }

    #[test_case(400)]
    #[test_case(409)]
    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn undecodable_error(status: u16) -> Result<()> {
        let (client, _server) = test_client().await?;
        let err = call(&client, status, Some("html")).await;
        assert!(err.is_service(), "{err:?}");
        assert_eq!(err.http_status_code(), Some(status));
        assert!(err.service_error().and_then(|s| s.model()).is_none(), "{err:?}");
        let payload = err.http_payload().map(|b| String::from_utf8_lossy(b).to_string());
        assert!(
            payload.as_ref().is_some_and(|p| p.contains("upstream error")),
            "{payload:?}"
        );
        Ok(())
    }

    #[test_case(404)]
    #[test_case(500)]
    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn undeclared_status(status: u16) -> Result<()> {
        let (client, _server) = test_client().await?;
        let err = call(&client, status, None).await;
        assert!(err.is_service(), "{err:?}");
        assert_eq!(err.http_status_code(), Some(status));
        assert!(err.service_error().and_then(|s| s.model()).is_none(), "{err:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn connection_error() -> Result<()> {
        // Nothing listens on this port.
        let client = echo_server::builder("http://127.0.0.1:1")
            .with_credentials(anonymous::Builder::new().build())
            .build()
            .await?;
        let args = Arguments::new().with("status", &400_u32);
        let err = client
            .execute::<NoBody, serde_json::Value>(&ERROR, args, None, RequestOptions::default())
            .await
            .unwrap_err();
        assert!(err.is_transport(), "{err:?}");
        Ok(())
    }
}
