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

// Span field names. These follow the OpenTelemetry semantic conventions for
// HTTP client spans where one exists.
// See https://opentelemetry.io/docs/specs/semconv/http/http-spans/

pub(crate) mod keys {
    /// The operation id.
    ///
    /// Example: v1.MonitorsApi.ListMonitors
    pub const OPERATION_ID: &str = "operation.id";
    pub const HTTP_REQUEST_METHOD: &str = "http.request.method";
    /// The request path, without the query string.
    pub const URL_PATH: &str = "url.path";
    pub const SERVER_ADDRESS: &str = "server.address";
    pub const HTTP_RESPONSE_STATUS_CODE: &str = "http.response.status_code";
    pub const HTTP_RESPONSE_BODY_SIZE: &str = "http.response.body.size";
    pub const ERROR_TYPE: &str = "error.type";
    /// The client library version.
    pub const CLIENT_VERSION: &str = "datadog.client.version";
}

/// Values for the `error.type` field.
pub(crate) mod error_type_values {
    /// A client-configured timeout was reached.
    pub const CLIENT_TIMEOUT: &str = "CLIENT_TIMEOUT";
    /// The application cancelled the request.
    pub const CLIENT_CANCELLED: &str = "CLIENT_CANCELLED";
    /// Failure to send the request or to receive the response.
    pub const CLIENT_CONNECTION_ERROR: &str = "CLIENT_CONNECTION_ERROR";
    /// The credentials could not produce the auth headers.
    pub const CLIENT_AUTHENTICATION_ERROR: &str = "CLIENT_AUTHENTICATION_ERROR";
    /// Invalid request arguments or body.
    pub const CLIENT_REQUEST_ERROR: &str = "CLIENT_REQUEST_ERROR";
    /// The response payload is not valid JSON.
    pub const CLIENT_RESPONSE_DECODE_ERROR: &str = "CLIENT_RESPONSE_DECODE_ERROR";
    pub const INTERNAL: &str = "INTERNAL";
}
