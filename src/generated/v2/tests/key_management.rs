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
    use auth::credentials::api_key;
    use datadog_api_v2::client::{KeyManagementApi, ListApplicationKeysOptionalParams};
    use datadog_api_v2::model::*;
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use test_case::test_case;

    type Result<T> = anyhow::Result<T>;

    async fn test_client(server: &Server) -> Result<KeyManagementApi> {
        let client = KeyManagementApi::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .with_credentials(
                api_key::Builder::new()
                    .with_api_key("test-api-key")
                    .with_app_key("test-app-key")
                    .build(),
            )
            .build()
            .await?;
        Ok(client)
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn get_current_user_application_key() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/api/v2/current_user/application_keys/key-1"),
                request::headers(contains(("dd-application-key", "test-app-key"))),
            ])
            .respond_with(json_encoded(json!({
                "data": {
                    "id": "key-1",
                    "type": "application_keys",
                    "attributes": {
                        "name": "ci",
                        "key": "0123456789abcdef",
                        "last4": "cdef",
                        "scopes": ["dashboards_read"]
                    }
                },
                "included": [{"type": "users", "id": "user-1"}]
            }))),
        );

        let client = test_client(&server).await?;
        let response = client.get_current_user_application_key("key-1").send().await?;
        let body = response
            .into_body()
            .into_typed()
            .ok_or_else(|| anyhow::anyhow!("cannot decode application key"))?;
        let attributes = body.data.as_ref().and_then(|k| k.attributes.as_ref());
        assert_eq!(attributes.and_then(|a| a.last4.as_deref()), Some("cdef"));
        assert_eq!(
            attributes.and_then(|a| a.scopes.get()),
            Some(&vec!["dashboards_read".to_string()])
        );
        assert_eq!(
            body.included,
            Some(vec![json!({"type": "users", "id": "user-1"})])
        );
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn list_application_keys() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/api/v2/application_keys"),
                request::query(url_decoded(contains(("sort", "-created_at")))),
                request::query(url_decoded(contains((
                    "filter[created_at][start]",
                    "2020-11-24T18:46:21+00:00"
                )))),
                request::query(url_decoded(contains(("include", "owned_by")))),
                request::query(url_decoded(not(contains(key("filter[created_at][end]"))))),
            ])
            .respond_with(json_encoded(json!({
                "data": [{"id": "key-1", "type": "application_keys", "attributes": {"last4": "cdef"}}],
                "meta": {"max_allowed_per_user": 100, "page": {"total_filtered_count": 1}}
            }))),
        );

        let client = test_client(&server).await?;
        let response = client
            .list_application_keys(
                ListApplicationKeysOptionalParams::default()
                    .set_sort(ApplicationKeysSort::CreatedAtDescending)
                    .set_filter_created_at_start("2020-11-24T18:46:21+00:00")
                    .set_include("owned_by"),
            )
            .send()
            .await?;
        let body = response.into_body().into_typed();
        let meta = body.as_ref().and_then(|b| b.meta.as_ref());
        assert_eq!(meta.and_then(|m| m.max_allowed_per_user), Some(100));
        let keys = body.and_then(|b| b.data).unwrap_or_default();
        assert_eq!(keys.len(), 1);
        assert_eq!(
            keys[0].r#type,
            Some(ApplicationKeysType::ApplicationKeys)
        );
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn delete_application_key() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path(
                "DELETE",
                "/api/v2/application_keys/key-1",
            ))
            .respond_with(status_code(204)),
        );

        let client = test_client(&server).await?;
        let response = client.delete_application_key("key-1").send().await?;
        assert_eq!(response.status(), http::StatusCode::NO_CONTENT);
        Ok(())
    }

    #[test_case(403, "Forbidden")]
    #[test_case(404, "Not Found")]
    #[test_case(429, "Too Many Requests")]
    #[tokio::test(flavor = "multi_thread")]
    async fn delete_application_key_errors(status: u16, reason: &str) -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path(
                "DELETE",
                "/api/v2/application_keys/key-1",
            ))
            .respond_with(
                status_code(status)
                    .insert_header("content-type", "application/json")
                    .body(format!(r#"{{"errors":["{reason}"]}}"#)),
            ),
        );

        let client = test_client(&server).await?;
        let err = client.delete_application_key("key-1").send().await.unwrap_err();
        assert!(err.is_service(), "{err:?}");
        assert_eq!(err.http_status_code(), Some(status));
        assert_eq!(
            err.api_error().map(|e| e.errors.clone()),
            Some(vec![reason.to_string()])
        );
        Ok(())
    }
}
