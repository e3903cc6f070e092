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
    use datadog_api_gax_internal::http::NoBody;
    use datadog_api_gax_internal::operation::*;
    use gax::options::*;
    use http::Method;
    use wkt::Decoded;

    type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

    static ECHO: OperationDescriptor = OperationDescriptor {
        id: "test.EchoApi.Echo",
        method: Method::GET,
        path: "/echo",
        parameters: &[],
        body: BodySpec::None,
        accept: APPLICATION_JSON,
        auth: &[],
        errors: &[],
        success_payload: true,
    };

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_default_user_agent() -> Result<()> {
        let (endpoint, _server) = echo_server::start().await?;
        let client = echo_server::builder(endpoint)
            .with_credentials(anonymous::Builder::new().build())
            .build()
            .await?;

        let response = client
            .execute::<NoBody, serde_json::Value>(
                &ECHO,
                Arguments::new(),
                None,
                RequestOptions::default(),
            )
            .await?
            .into_body();
        let got = get_header_value(&response, "user-agent");
        let want = echo_server::USER_AGENT.header_value();
        assert_eq!(got.as_deref(), Some(want.as_str()));
        assert!(want.starts_with("datadog-api-client-rust/0.0.0 (rust "), "{want}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_user_agent_prefixes() -> Result<()> {
        let (endpoint, _server) = echo_server::start().await?;
        let client = echo_server::builder(endpoint)
            .with_credentials(anonymous::Builder::new().build())
            .with_user_agent("my-app/1.2.3")
            .build()
            .await?;

        let response = client
            .execute::<NoBody, serde_json::Value>(
                &ECHO,
                Arguments::new(),
                None,
                RequestOptions::default(),
            )
            .await?
            .into_body();
        let want = format!("my-app/1.2.3 {}", echo_server::USER_AGENT.header_value());
        assert_eq!(get_header_value(&response, "user-agent"), Some(want.clone()));

        let mut options = RequestOptions::default();
        options.set_user_agent("per-call");
        let response = client
            .execute::<NoBody, serde_json::Value>(&ECHO, Arguments::new(), None, options)
            .await?
            .into_body();
        assert_eq!(
            get_header_value(&response, "user-agent"),
            Some(format!("per-call {want}"))
        );
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
