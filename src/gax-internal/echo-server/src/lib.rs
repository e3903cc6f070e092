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

//! Defines helpers functions to run ReqwestClient integration tests.
//!
//! Setting up integration tests is a bit complicated. So we refactor that code
//! to some helper functions.

use auth::credentials::Credentials;
use axum::{
    extract::{Query, RawQuery},
    http::{HeaderMap, Method, StatusCode, Uri},
};
use serde_json::json;
use std::collections::HashMap;
use tokio::task::JoinHandle;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// The `User-Agent` used by the clients created with [builder].
pub static USER_AGENT: gaxi::api_header::UserAgent = gaxi::api_header::UserAgent {
    name: gaxi::api_header::CLIENT_NAME,
    version: "0.0.0",
};

/// Starts a server on a random local port.
///
/// * `/echo` and `/echo/{*rest}` return the method, path, query, headers,
///   and body of the request as a JSON object. Use the `delay_ms` query
///   parameter to delay the response.
/// * `/error` returns the status code in the `status` query parameter, with a
///   `{"errors": [...]}` payload. Use `format=html` to return a payload that
///   is not JSON.
pub async fn start() -> Result<(String, JoinHandle<()>)> {
    let app = axum::Router::new()
        .route("/echo", axum::routing::any(echo))
        .route("/echo/{*rest}", axum::routing::any(echo))
        .route("/error", axum::routing::any(error));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let server = tokio::spawn(async {
        axum::serve(listener, app).await.unwrap();
    });

    Ok((format!("http://{}:{}", addr.ip(), addr.port()), server))
}

pub fn builder(
    endpoint: impl Into<String>,
) -> gax::client_builder::ClientBuilder<Factory, Credentials> {
    gax::client_builder::internal::new_builder(Factory).with_endpoint(endpoint)
}

#[derive(Clone, Debug)]
pub struct Factory;
impl gax::client_builder::internal::ClientFactory for Factory {
    type Client = gaxi::http::ReqwestClient;
    type Credentials = Credentials;
    async fn build(
        self,
        config: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Self::Client> {
        Self::Client::new(config, &USER_AGENT).await
    }
}

async fn echo(
    method: Method,
    uri: Uri,
    RawQuery(raw_query): RawQuery,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
    body: bytes::Bytes,
) -> (StatusCode, String) {
    let response = echo_impl(method, uri, raw_query, query, headers, body).await;
    match response {
        Err(e) => internal_error(e),
        Ok(s) => (StatusCode::OK, s),
    }
}

async fn echo_impl(
    method: Method,
    uri: Uri,
    raw_query: Option<String>,
    query: HashMap<String, String>,
    headers: HeaderMap,
    body: bytes::Bytes,
) -> Result<String> {
    if let Some(delay) = query
        .get("delay_ms")
        .map(|s| s.parse::<u64>())
        .transpose()?
        .map(tokio::time::Duration::from_millis)
    {
        tokio::time::sleep(delay).await;
    }
    let query = serde_json::Value::Object(
        query
            .into_iter()
            .map(|(k, v)| (k, serde_json::Value::String(v)))
            .collect(),
    );
    let headers = headers_to_json(headers)?;
    let body = if body.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice::<serde_json::Value>(&body)?
    };
    let object = json!({
        "method": method.as_str(),
        "path": uri.path(),
        "rawQuery": raw_query,
        "query": query,
        "headers": headers,
        "body": body,
    });
    let body = serde_json::to_string(&object)?;
    Ok(body)
}

async fn error(Query(query): Query<HashMap<String, String>>) -> (StatusCode, String) {
    let response = error_impl(query);
    match response {
        Err(e) => internal_error(e),
        Ok(r) => r,
    }
}

fn error_impl(query: HashMap<String, String>) -> Result<(StatusCode, String)> {
    let status = query
        .get("status")
        .map(|s| s.parse::<u16>())
        .transpose()?
        .map(StatusCode::from_u16)
        .transpose()?
        .unwrap_or(StatusCode::BAD_REQUEST);
    if query.get("format").is_some_and(|f| f == "html") {
        return Ok((status, "<html><body>upstream error</body></html>".to_string()));
    }
    let payload = json!({"errors": ["this path always returns an error"]});
    Ok((status, payload.to_string()))
}

fn headers_to_json(headers: HeaderMap) -> Result<serde_json::Value> {
    let to_dyn = |e| -> Box<dyn std::error::Error + 'static> { Box::new(e) };
    let headers = headers
        .into_iter()
        .map(|(k, v)| {
            (
                k.map(|h| h.to_string()).unwrap_or("__status__".to_string()),
                v.to_str().map(|s| serde_json::Value::String(s.to_string())),
            )
        })
        .map(|(k, v)| v.map(|s| (k, s)))
        .map(|r| r.map_err(to_dyn))
        .collect::<Result<Vec<_>>>()?;

    Ok(serde_json::Value::Object(headers.into_iter().collect()))
}

fn internal_error(e: Box<dyn std::error::Error>) -> (StatusCode, String) {
    (StatusCode::INTERNAL_SERVER_ERROR, format!("{e}"))
}
