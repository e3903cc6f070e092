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

use crate::operation::OperationDescriptor;
use gax::Result;
use gax::error::{Error, ServiceError};
use gax::response::{Parts, Response};
use wkt::Decoded;

/// Converts a complete HTTP response into the result of `operation`.
///
/// Responses with a status code of 300 or higher become service errors. The
/// error includes the payload decoded with the [ErrorRoute] of the operation
/// for that status code, if there is one and the payload matches. The error
/// is a service error whether the payload is decoded or not.
///
/// Successful responses are decoded as `Decoded<O>`. Only syntactically
/// invalid payloads result in an error, which keeps the status, headers, and
/// payload of the response.
///
/// [ErrorRoute]: crate::operation::ErrorRoute
pub fn decode<O>(
    operation: &OperationDescriptor,
    response: http::Response<bytes::Bytes>,
) -> Result<Response<Decoded<O>>>
where
    O: serde::de::DeserializeOwned + Default,
{
    let (parts, body) = response.into_parts();
    let status = parts.status;
    if status.as_u16() >= 300 {
        let model = operation
            .error_route(status.as_u16())
            .and_then(|route| (route.decode)(&body));
        if model.is_none() && !body.is_empty() {
            tracing::debug!(
                operation = operation.id,
                status = status.as_u16(),
                "no structured error payload"
            );
        }
        let details = ServiceError::new(status.as_u16())
            .set_headers(parts.headers)
            .set_payload(body)
            .set_or_clear_model(model);
        return Err(Error::service(details));
    }

    let decoded = if body.is_empty() || !operation.success_payload {
        Decoded::Typed(O::default())
    } else {
        match serde_json::from_slice::<Decoded<O>>(&body) {
            Ok(decoded) => decoded,
            Err(e) => {
                return Err(Error::deser_with_http(
                    e,
                    status.as_u16(),
                    parts.headers,
                    body,
                ));
            }
        }
    };
    Ok(Response::from_parts(
        Parts::new()
            .set_status(status)
            .set_headers(parts.headers)
            .set_raw_body(body),
        decoded,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operation::{
        APPLICATION_JSON, BodySpec, ErrorRoute, OperationDescriptor, ParameterSpec, decode_as,
    };
    use auth::credentials::{API_KEY_AUTH, APP_KEY_AUTH};
    use gax::error::ApiErrorResponse;
    use http::{HeaderValue, Method, StatusCode};
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use test_case::test_case;

    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    struct Thing {
        id: i64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        #[serde(flatten)]
        _unknown_fields: serde_json::Map<String, serde_json::Value>,
    }

    #[derive(Clone, Debug, PartialEq, serde::Deserialize)]
    struct Conflict {
        errors: Vec<String>,
        data: serde_json::Map<String, serde_json::Value>,
    }

    static GET: OperationDescriptor = OperationDescriptor {
        id: "test.ThingsApi.GetThing",
        method: Method::GET,
        path: "/api/v1/things/{id}",
        parameters: &[ParameterSpec::path("id")],
        body: BodySpec::None,
        accept: APPLICATION_JSON,
        auth: &[API_KEY_AUTH, APP_KEY_AUTH],
        errors: &[
            ErrorRoute::new(&[400, 403, 429], decode_as::<ApiErrorResponse>),
            ErrorRoute::new(&[409], decode_as::<Conflict>),
        ],
        success_payload: true,
    };

    static DELETE: OperationDescriptor = OperationDescriptor {
        id: "test.ThingsApi.DeleteThing",
        method: Method::DELETE,
        path: "/api/v1/things/{id}",
        parameters: &[ParameterSpec::path("id")],
        body: BodySpec::None,
        accept: APPLICATION_JSON,
        auth: &[API_KEY_AUTH, APP_KEY_AUTH],
        errors: &[],
        success_payload: false,
    };

    fn response(status: u16, body: &'static str) -> http::Response<bytes::Bytes> {
        let mut response = http::Response::new(bytes::Bytes::from_static(body.as_bytes()));
        *response.status_mut() = StatusCode::from_u16(status).unwrap();
        response
            .headers_mut()
            .insert("content-type", HeaderValue::from_static("application/json"));
        response
    }

    #[test]
    fn success() -> anyhow::Result<()> {
        let got = decode::<Thing>(&GET, response(200, r#"{"id":42,"name":"x"}"#))?;
        assert_eq!(got.status(), StatusCode::OK);
        assert_eq!(
            got.headers().get("content-type"),
            Some(&HeaderValue::from_static("application/json"))
        );
        assert_eq!(got.raw_body().as_ref(), br#"{"id":42,"name":"x"}"#);
        let thing = got.into_body().into_typed();
        assert_eq!(thing.as_ref().map(|t| t.id), Some(42));
        assert_eq!(thing.as_ref().and_then(|t| t.name.as_deref()), Some("x"));
        Ok(())
    }

    #[test]
    fn success_without_optional_field() -> anyhow::Result<()> {
        let got = decode::<Thing>(&GET, response(200, r#"{"id":42,"extra":"kept"}"#))?;
        let body = got.into_body();
        assert!(!body.is_unparsed(), "{body:?}");
        let thing = body.into_typed();
        assert_eq!(thing.as_ref().map(|t| t.id), Some(42));
        assert_eq!(thing.as_ref().and_then(|t| t.name.clone()), None);
        assert_eq!(
            thing.as_ref().and_then(|t| t._unknown_fields.get("extra")),
            Some(&json!("kept"))
        );
        Ok(())
    }

    #[test]
    fn success_with_extra_fields() -> anyhow::Result<()> {
        let got = decode::<Thing>(&GET, response(200, r#"{"id":42,"name":"x","extra":true}"#))?;
        let thing = got.into_body().into_typed();
        assert_eq!(thing.as_ref().map(|t| t.id), Some(42));
        assert_eq!(
            thing.as_ref().and_then(|t| t._unknown_fields.get("extra")),
            Some(&json!(true))
        );
        Ok(())
    }

    #[test]
    fn success_unparsed() -> anyhow::Result<()> {
        let got = decode::<Thing>(&GET, response(200, r#"{"id":"not-a-number"}"#))?;
        let body = got.into_body();
        assert!(body.is_unparsed(), "{body:?}");
        assert_eq!(body.raw(), Some(&json!({"id": "not-a-number"})));
        Ok(())
    }

    #[test]
    fn success_invalid_json() {
        let got = decode::<Thing>(&GET, response(200, "{not json"));
        let err = got.unwrap_err();
        assert!(err.is_deserialization(), "{err:?}");
        assert_eq!(err.http_status_code(), Some(200));
        assert_eq!(
            err.http_payload().map(|b| b.as_ref()),
            Some(b"{not json".as_slice())
        );
    }

    #[test]
    fn success_html_keeps_response() {
        let got = decode::<serde_json::Value>(&GET, response(200, "<html>proxy</html>"));
        let err = got.unwrap_err();
        assert!(err.is_deserialization(), "{err:?}");
        assert!(!err.is_service(), "{err:?}");
        assert_eq!(err.status_line(), Some("200 OK"));
        assert_eq!(
            err.http_headers().and_then(|h| h.get("content-type")),
            Some(&HeaderValue::from_static("application/json"))
        );
        assert_eq!(
            err.http_payload().map(|b| b.as_ref()),
            Some(b"<html>proxy</html>".as_slice())
        );
    }

    #[test_case(204, "")]
    #[test_case(200, "")]
    fn success_empty(status: u16, body: &'static str) -> anyhow::Result<()> {
        let got = decode::<Thing>(&GET, response(status, body))?;
        assert_eq!(got.into_body(), Decoded::Typed(Thing::default()));
        Ok(())
    }

    #[test]
    fn success_without_payload() -> anyhow::Result<()> {
        let got = decode::<()>(&DELETE, response(200, r#"{"ignored":true}"#))?;
        assert_eq!(got.into_body(), Decoded::Typed(()));
        Ok(())
    }

    #[test_case(400)]
    #[test_case(403)]
    #[test_case(429)]
    fn error_with_api_error(status: u16) {
        let got = decode::<Thing>(&GET, response(status, r#"{"errors":["bad request"]}"#));
        let err = got.unwrap_err();
        assert!(err.is_service(), "{err:?}");
        assert_eq!(err.http_status_code(), Some(status));
        assert_eq!(
            err.api_error().map(|e| e.errors.clone()),
            Some(vec!["bad request".to_string()])
        );
        assert_eq!(
            err.http_payload().map(|b| b.as_ref()),
            Some(br#"{"errors":["bad request"]}"#.as_slice())
        );
        assert_eq!(
            err.http_headers().and_then(|h| h.get("content-type")),
            Some(&HeaderValue::from_static("application/json"))
        );
    }

    #[test]
    fn error_with_operation_model() {
        let body = r#"{"errors":["monitor is referenced"],"data":{"ok":[]}}"#;
        let err = decode::<Thing>(&GET, response(409, body)).unwrap_err();
        assert!(err.is_service(), "{err:?}");
        assert_eq!(err.status_line(), Some("409 Conflict"));
        let model = err.error_model::<Conflict>();
        assert_eq!(
            model.map(|m| m.errors.clone()),
            Some(vec!["monitor is referenced".to_string()])
        );
        assert!(err.api_error().is_none(), "{err:?}");
    }

    #[test]
    fn error_undecodable_payload() {
        let err = decode::<Thing>(&GET, response(400, "<html>bad gateway</html>")).unwrap_err();
        assert!(err.is_service(), "{err:?}");
        assert_eq!(err.http_status_code(), Some(400));
        assert!(err.api_error().is_none(), "{err:?}");
        assert_eq!(
            err.http_payload().map(|b| b.as_ref()),
            Some(b"<html>bad gateway</html>".as_slice())
        );
    }

    #[test_case(404)]
    #[test_case(500)]
    #[test_case(503)]
    #[test_case(301)]
    fn error_without_route(status: u16) {
        let err = decode::<Thing>(&GET, response(status, r#"{"errors":["nope"]}"#)).unwrap_err();
        assert!(err.is_service(), "{err:?}");
        assert_eq!(err.http_status_code(), Some(status));
        assert!(err.service_error().and_then(|s| s.model()).is_none(), "{err:?}");
        assert!(err.http_payload().is_some(), "{err:?}");
    }
}
