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

use super::attributes::keys::*;
use super::errors::ErrorType;
use tracing::{Span, field};

/// Creates a new tracing span for an HTTP request.
///
/// Populates the span with the fields available before the request is sent.
pub(crate) fn create_http_span(operation_id: &str, method: &http::Method, uri: &http::Uri) -> Span {
    tracing::info_span!(
        "http_request",
        { OPERATION_ID } = operation_id,
        { HTTP_REQUEST_METHOD } = method.as_str(),
        { URL_PATH } = uri.path(),
        { SERVER_ADDRESS } = uri.host().unwrap_or(""),
        { CLIENT_VERSION } = env!("CARGO_PKG_VERSION"),
        // Fields to be recorded later
        { HTTP_RESPONSE_STATUS_CODE } = field::Empty,
        { HTTP_RESPONSE_BODY_SIZE } = field::Empty,
        { ERROR_TYPE } = field::Empty,
    )
}

/// Records the outcome of the request in the span.
pub(crate) fn record_http_result<T>(span: &Span, result: Result<&http::Response<T>, &gax::error::Error>)
where
    T: AsRef<[u8]>,
{
    match result {
        Ok(response) => {
            span.record(HTTP_RESPONSE_STATUS_CODE, response.status().as_u16() as i64);
            span.record(HTTP_RESPONSE_BODY_SIZE, response.body().as_ref().len() as i64);
            if !response.status().is_success() {
                span.record(
                    ERROR_TYPE,
                    ErrorType::HttpError(response.status()).as_str(),
                );
            }
        }
        Err(err) => {
            if let Some(status) = err.http_status_code() {
                span.record(HTTP_RESPONSE_STATUS_CODE, status as i64);
            }
            span.record(ERROR_TYPE, ErrorType::from_gax_error(err).as_str());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};
    use tracing::field::{Field, Visit};
    use tracing::span::{Attributes, Id, Record};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    type Captured = Arc<Mutex<HashMap<String, String>>>;

    #[derive(Clone, Default)]
    struct CaptureLayer {
        fields: Captured,
    }

    struct Visitor<'a>(&'a mut HashMap<String, String>);

    impl Visit for Visitor<'_> {
        fn record_str(&mut self, field: &Field, value: &str) {
            self.0.insert(field.name().to_string(), value.to_string());
        }
        fn record_i64(&mut self, field: &Field, value: i64) {
            self.0.insert(field.name().to_string(), value.to_string());
        }
        fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
            self.0.insert(field.name().to_string(), format!("{value:?}"));
        }
    }

    impl<S: tracing::Subscriber> Layer<S> for CaptureLayer {
        fn on_new_span(&self, attrs: &Attributes<'_>, _id: &Id, _ctx: Context<'_, S>) {
            let mut fields = self.fields.lock().unwrap();
            attrs.record(&mut Visitor(&mut fields));
        }
        fn on_record(&self, _id: &Id, values: &Record<'_>, _ctx: Context<'_, S>) {
            let mut fields = self.fields.lock().unwrap();
            values.record(&mut Visitor(&mut fields));
        }
    }

    fn capture<F: FnOnce()>(f: F) -> HashMap<String, String> {
        let layer = CaptureLayer::default();
        let fields = layer.fields.clone();
        let subscriber = tracing_subscriber::registry().with(layer);
        tracing::subscriber::with_default(subscriber, f);
        let got = fields.lock().unwrap().clone();
        got
    }

    fn uri() -> http::Uri {
        http::Uri::from_static("https://api.datadoghq.com/api/v1/monitor/123?group_states=all")
    }

    #[test]
    fn span_attributes() {
        let got = capture(|| {
            let _span = create_http_span("v1.MonitorsApi.GetMonitor", &http::Method::GET, &uri());
        });
        assert_eq!(
            got.get(OPERATION_ID).map(String::as_str),
            Some("v1.MonitorsApi.GetMonitor")
        );
        assert_eq!(got.get(HTTP_REQUEST_METHOD).map(String::as_str), Some("GET"));
        assert_eq!(
            got.get(URL_PATH).map(String::as_str),
            Some("/api/v1/monitor/123")
        );
        assert_eq!(
            got.get(SERVER_ADDRESS).map(String::as_str),
            Some("api.datadoghq.com")
        );
        assert!(got.get(HTTP_RESPONSE_STATUS_CODE).is_none(), "{got:?}");
    }

    #[test]
    fn record_success() {
        let got = capture(|| {
            let span = create_http_span("v1.MonitorsApi.GetMonitor", &http::Method::GET, &uri());
            let response = http::Response::new(bytes::Bytes::from_static(b"{}"));
            record_http_result(&span, Ok(&response));
        });
        assert_eq!(
            got.get(HTTP_RESPONSE_STATUS_CODE).map(String::as_str),
            Some("200")
        );
        assert_eq!(
            got.get(HTTP_RESPONSE_BODY_SIZE).map(String::as_str),
            Some("2")
        );
        assert!(got.get(ERROR_TYPE).is_none(), "{got:?}");
    }

    #[test]
    fn record_http_error() {
        let got = capture(|| {
            let span = create_http_span("v1.MonitorsApi.GetMonitor", &http::Method::GET, &uri());
            let mut response = http::Response::new(bytes::Bytes::new());
            *response.status_mut() = http::StatusCode::NOT_FOUND;
            record_http_result(&span, Ok(&response));
        });
        assert_eq!(
            got.get(HTTP_RESPONSE_STATUS_CODE).map(String::as_str),
            Some("404")
        );
        assert_eq!(got.get(ERROR_TYPE).map(String::as_str), Some("404"));
    }

    #[test]
    fn record_client_error() {
        let got = capture(|| {
            let span = create_http_span("v1.MonitorsApi.GetMonitor", &http::Method::GET, &uri());
            let err = gax::error::Error::timeout("deadline");
            record_http_result::<bytes::Bytes>(&span, Err(&err));
        });
        assert!(got.get(HTTP_RESPONSE_STATUS_CODE).is_none(), "{got:?}");
        assert_eq!(
            got.get(ERROR_TYPE).map(String::as_str),
            Some("CLIENT_TIMEOUT")
        );
    }
}
