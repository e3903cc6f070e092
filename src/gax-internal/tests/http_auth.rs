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
    use auth::credentials::dynamic::CredentialsProvider;
    use auth::credentials::{API_KEY_AUTH, APP_KEY_AUTH, AuthScheme, Credentials, api_key};
    use auth::errors::CredentialsError;
    use datadog_api_gax_internal::http::NoBody;
    use datadog_api_gax_internal::operation::*;
    use gax::options::*;
    use http::header::{HeaderName, HeaderValue};
    use http::{HeaderMap, Method};
    use wkt::Decoded;

    type AuthResult<T> = std::result::Result<T, CredentialsError>;
    type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

    mockall::mock! {
        #[derive(Debug)]
        Credentials {}

        impl CredentialsProvider for Credentials {
            fn headers(&self, schemes: &[AuthScheme]) -> AuthResult<HeaderMap>;
        }
    }

    static BOTH_KEYS: OperationDescriptor = OperationDescriptor {
        id: "test.EchoApi.BothKeys",
        method: Method::GET,
        path: "/echo",
        parameters: &[],
        body: BodySpec::None,
        accept: APPLICATION_JSON,
        auth: &[API_KEY_AUTH, APP_KEY_AUTH],
        errors: &[],
        success_payload: true,
    };

    static API_KEY_ONLY: OperationDescriptor = OperationDescriptor {
        id: "test.EchoApi.ApiKeyOnly",
        method: Method::GET,
        path: "/echo",
        parameters: &[],
        body: BodySpec::None,
        accept: APPLICATION_JSON,
        auth: &[API_KEY_AUTH],
        errors: &[],
        success_payload: true,
    };

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_auth_headers() -> Result<()> {
        let (endpoint, _server) = echo_server::start().await?;

        let mut mock = MockCredentials::new();
        let header = HeaderMap::from_iter([
            (
                HeaderName::from_static("auth-key-1"),
                HeaderValue::from_static("auth-value-1"),
            ),
            (
                HeaderName::from_static("auth-key-2"),
                HeaderValue::from_static("auth-value-2"),
            ),
        ]);
        mock.expect_headers()
            .withf(|schemes| schemes.to_vec() == vec![API_KEY_AUTH, APP_KEY_AUTH])
            .return_once(|_| Ok(header));

        let client = echo_server::builder(endpoint)
            .with_credentials(Credentials::from(mock))
            .build()
            .await?;

        let response = client
            .execute::<NoBody, serde_json::Value>(
                &BOTH_KEYS,
                Arguments::new(),
                None,
                RequestOptions::default(),
            )
            .await?
            .into_body();
        assert_eq!(
            get_header_value(&response, "auth-key-1"),
            Some("auth-value-1".to_string())
        );
        assert_eq!(
            get_header_value(&response, "auth-key-2"),
            Some("auth-value-2".to_string())
        );
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_api_key_headers() -> Result<()> {
        let (endpoint, _server) = echo_server::start().await?;
        let credentials = api_key::Builder::new()
            .with_api_key("test-api-key")
            .with_app_key("test-app-key")
            .build();
        let client = echo_server::builder(endpoint)
            .with_credentials(credentials)
            .build()
            .await?;

        let response = client
            .execute::<NoBody, serde_json::Value>(
                &BOTH_KEYS,
                Arguments::new(),
                None,
                RequestOptions::default(),
            )
            .await?
            .into_body();
        assert_eq!(
            get_header_value(&response, "dd-api-key"),
            Some("test-api-key".to_string())
        );
        assert_eq!(
            get_header_value(&response, "dd-application-key"),
            Some("test-app-key".to_string())
        );

        let response = client
            .execute::<NoBody, serde_json::Value>(
                &API_KEY_ONLY,
                Arguments::new(),
                None,
                RequestOptions::default(),
            )
            .await?
            .into_body();
        assert_eq!(
            get_header_value(&response, "dd-api-key"),
            Some("test-api-key".to_string())
        );
        assert_eq!(get_header_value(&response, "dd-application-key"), None);
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_auth_headers_error() -> Result<()> {
        let (endpoint, _server) = echo_server::start().await?;

        let mut mock = MockCredentials::new();
        mock.expect_headers()
            .return_once(|_| Err(CredentialsError::from_msg(false, "mock-error")));

        let client = echo_server::builder(endpoint)
            .with_credentials(Credentials::from(mock))
            .build()
            .await?;

        let result = client
            .execute::<NoBody, serde_json::Value>(
                &BOTH_KEYS,
                Arguments::new(),
                None,
                RequestOptions::default(),
            )
            .await;
        let err = result.unwrap_err();
        assert!(err.is_authentication(), "{err:?}");
        let source = std::error::Error::source(&err)
            .and_then(|e| e.downcast_ref::<CredentialsError>());
        assert!(matches!(source, Some(e) if !e.is_transient()), "{err:?}");
        Ok(())
    }

    fn get_header_value(response: &Decoded<serde_json::Value>, name: &str) -> Option<String> {
        response
            .typed()
            .and_then(|v| v.get("headers"))
            .and_then(|h| h.get(name))
            .and_then(|v| v.as_str())
            .map(str::to_string)
    }
}
