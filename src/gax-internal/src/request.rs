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

use crate::operation::{Arguments, BodySpec, Location, OperationDescriptor, ParameterSpec};
use gax::Result;
use gax::error::Error;
use gax::path_parameter;
use gax::query_parameter::ParameterValue;
use http::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// The RFC 3986 unreserved characters are left as-is in path segments.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// A fully assembled request, ready to send.
///
/// The path includes the query string. The endpoint and the auth headers are
/// added by the client when the request is sent.
#[derive(Clone, Debug, PartialEq)]
pub struct Request {
    pub method: http::Method,
    pub path_and_query: String,
    pub headers: HeaderMap,
    pub body: Option<bytes::Bytes>,
}

/// Validates the arguments and assembles the request for `operation`.
///
/// # Errors
/// * a binding error if a required parameter (or the body) is missing or
///   empty, if an argument is not declared by the operation, or if an
///   argument could not be formatted.
/// * a serialization error if the body cannot be serialized.
pub fn build<I>(
    operation: &OperationDescriptor,
    mut arguments: Arguments,
    body: Option<&I>,
) -> Result<Request>
where
    I: serde::ser::Serialize,
{
    if let Some(e) = arguments.take_error() {
        return Err(e);
    }
    if let Some(name) = arguments
        .names()
        .find(|n| operation.parameter(n).is_none())
    {
        return Err(path_parameter::unknown(operation.id, name));
    }

    let mut path = operation.path.to_string();
    let mut query = url::form_urlencoded::Serializer::new(String::new());
    for spec in operation.parameters {
        let value = match arguments.get(spec.name) {
            Some(v) if !v.is_empty() => v,
            _ if spec.required => return Err(path_parameter::missing(spec.name)),
            _ => continue,
        };
        match spec.location {
            Location::Path => {
                let placeholder = format!("{{{}}}", spec.name);
                let encoded = utf8_percent_encode(&join(spec, value), PATH_SEGMENT).to_string();
                path = path.replace(&placeholder, &encoded);
            }
            Location::Query => match (value, spec.format.separator()) {
                (ParameterValue::Multiple(values), None) => {
                    for v in values {
                        query.append_pair(spec.name, v);
                    }
                }
                _ => {
                    query.append_pair(spec.name, &join(spec, value));
                }
            },
        }
    }
    let query = query.finish();
    let path_and_query = if query.is_empty() {
        path
    } else {
        format!("{path}?{query}")
    };

    let body = match (operation.body, body) {
        (BodySpec::Required, None) => return Err(path_parameter::missing("body")),
        (BodySpec::None, _) | (_, None) => None,
        (_, Some(b)) => Some(bytes::Bytes::from(
            serde_json::to_vec(b).map_err(Error::ser)?,
        )),
    };

    let mut headers = HeaderMap::new();
    headers.insert(
        ACCEPT,
        HeaderValue::from_str(operation.accept).map_err(Error::ser)?,
    );
    if body.is_some() {
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static(crate::operation::APPLICATION_JSON),
        );
    }

    Ok(Request {
        method: operation.method.clone(),
        path_and_query,
        headers,
        body,
    })
}

fn join(spec: &ParameterSpec, value: &ParameterValue) -> String {
    match value {
        ParameterValue::Single(s) => s.clone(),
        ParameterValue::Multiple(v) => v.join(spec.format.separator().unwrap_or(",")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operation::{APPLICATION_JSON, CollectionFormat};
    use auth::credentials::{API_KEY_AUTH, APP_KEY_AUTH};
    use http::Method;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use test_case::test_case;

    static LIST: OperationDescriptor = OperationDescriptor {
        id: "test.MonitorsApi.ListMonitors",
        method: Method::GET,
        path: "/api/v1/monitor",
        parameters: &[
            ParameterSpec::query("group_states"),
            ParameterSpec::query("name"),
            ParameterSpec::query("page"),
            ParameterSpec::query("page_size"),
        ],
        body: BodySpec::None,
        accept: APPLICATION_JSON,
        auth: &[API_KEY_AUTH, APP_KEY_AUTH],
        errors: &[],
        success_payload: true,
    };

    static CAN_DELETE: OperationDescriptor = OperationDescriptor {
        id: "test.MonitorsApi.CheckCanDeleteMonitor",
        method: Method::GET,
        path: "/api/v1/monitor/can_delete",
        parameters: &[ParameterSpec::required_query("monitor_ids")],
        body: BodySpec::None,
        accept: APPLICATION_JSON,
        auth: &[API_KEY_AUTH, APP_KEY_AUTH],
        errors: &[],
        success_payload: true,
    };

    static UPDATE: OperationDescriptor = OperationDescriptor {
        id: "test.MonitorsApi.UpdateMonitor",
        method: Method::PUT,
        path: "/api/v1/monitor/{monitor_id}",
        parameters: &[ParameterSpec::path("monitor_id")],
        body: BodySpec::Required,
        accept: APPLICATION_JSON,
        auth: &[API_KEY_AUTH, APP_KEY_AUTH],
        errors: &[],
        success_payload: true,
    };

    static FILTERS: OperationDescriptor = OperationDescriptor {
        id: "test.Api.Filters",
        method: Method::GET,
        path: "/api/v2/things",
        parameters: &[
            ParameterSpec::query("csv"),
            ParameterSpec::query("ssv").with_format(CollectionFormat::Ssv),
            ParameterSpec::query("tsv").with_format(CollectionFormat::Tsv),
            ParameterSpec::query("pipes").with_format(CollectionFormat::Pipes),
            ParameterSpec::query("multi").with_format(CollectionFormat::Multi),
        ],
        body: BodySpec::Optional,
        accept: "application/json;datetime-format=rfc3339",
        auth: &[API_KEY_AUTH],
        errors: &[],
        success_payload: true,
    };

    fn values() -> Vec<String> {
        vec!["a".to_string(), "b c".to_string()]
    }

    #[test]
    fn no_arguments() -> anyhow::Result<()> {
        let got = build::<()>(&LIST, Arguments::new(), None)?;
        assert_eq!(got.method, Method::GET);
        assert_eq!(got.path_and_query, "/api/v1/monitor");
        assert_eq!(got.body, None);
        assert_eq!(
            got.headers.get(ACCEPT),
            Some(&HeaderValue::from_static("application/json"))
        );
        assert!(got.headers.get(CONTENT_TYPE).is_none(), "{got:?}");
        Ok(())
    }

    #[test]
    fn query_follows_declaration_order() -> anyhow::Result<()> {
        let args = Arguments::new()
            .with("page_size", &20_i32)
            .with("name", &"my monitor".to_string())
            .with("page", &2_i64);
        let got = build::<()>(&LIST, args, None)?;
        assert_eq!(
            got.path_and_query,
            "/api/v1/monitor?name=my+monitor&page=2&page_size=20"
        );
        Ok(())
    }

    #[test_case("csv", "csv=a%2Cb+c")]
    #[test_case("ssv", "ssv=a+b+c")]
    #[test_case("tsv", "tsv=a%09b+c")]
    #[test_case("pipes", "pipes=a%7Cb+c")]
    #[test_case("multi", "multi=a&multi=b+c")]
    fn collection_format(name: &str, want: &str) -> anyhow::Result<()> {
        let args = Arguments::new().with(name, &values());
        let got = build::<()>(&FILTERS, args, None)?;
        assert_eq!(got.path_and_query, format!("/api/v2/things?{want}"));
        Ok(())
    }

    #[test]
    fn missing_required_query() {
        let got = build::<()>(&CAN_DELETE, Arguments::new(), None);
        let err = got.unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        assert_eq!(err.missing_parameter(), Some("monitor_ids"));
        assert!(err.to_string().contains("monitor_ids"), "{err}");
    }

    #[test]
    fn empty_required_query() {
        let args = Arguments::new().with("monitor_ids", &Vec::<i64>::new());
        let err = build::<()>(&CAN_DELETE, args, None).unwrap_err();
        assert_eq!(err.missing_parameter(), Some("monitor_ids"));
    }

    #[test]
    fn required_collection() -> anyhow::Result<()> {
        let args = Arguments::new().with("monitor_ids", &vec![1_i64, 2, 3]);
        let got = build::<()>(&CAN_DELETE, args, None)?;
        assert_eq!(
            got.path_and_query,
            "/api/v1/monitor/can_delete?monitor_ids=1%2C2%2C3"
        );
        Ok(())
    }

    #[test]
    fn unknown_argument() {
        let args = Arguments::new().with("color", &"red".to_string());
        let err = build::<()>(&LIST, args, None).unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        assert_eq!(err.missing_parameter(), None);
        assert!(format!("{err:?}").contains("color"), "{err:?}");
    }

    #[test]
    fn format_error() {
        let args = Arguments::new().with("name", &json!(["a", "b"]));
        let err = build::<()>(&LIST, args, None).unwrap_err();
        assert!(err.is_binding(), "{err:?}");
    }

    #[test_case("12345", "/api/v1/monitor/12345")]
    #[test_case("a/b", "/api/v1/monitor/a%2Fb")]
    #[test_case("a b?c", "/api/v1/monitor/a%20b%3Fc")]
    #[test_case("x-y.z_~", "/api/v1/monitor/x-y.z_~")]
    fn path_encoding(id: &str, want: &str) -> anyhow::Result<()> {
        let args = Arguments::new().with("monitor_id", &id.to_string());
        let got = build(&UPDATE, args, Some(&json!({})))?;
        assert_eq!(got.path_and_query, want);
        Ok(())
    }

    #[test]
    fn missing_path() {
        let err = build(&UPDATE, Arguments::new(), Some(&json!({}))).unwrap_err();
        assert_eq!(err.missing_parameter(), Some("monitor_id"));

        let args = Arguments::new().with("monitor_id", &String::new());
        let err = build(&UPDATE, args, Some(&json!({}))).unwrap_err();
        assert_eq!(err.missing_parameter(), Some("monitor_id"));
    }

    #[test]
    fn with_body() -> anyhow::Result<()> {
        let args = Arguments::new().with("monitor_id", &42_i64);
        let body = json!({"name": "updated"});
        let got = build(&UPDATE, args, Some(&body))?;
        assert_eq!(got.method, Method::PUT);
        assert_eq!(got.path_and_query, "/api/v1/monitor/42");
        assert_eq!(
            got.headers.get(CONTENT_TYPE),
            Some(&HeaderValue::from_static("application/json"))
        );
        let sent = got.body.map(|b| serde_json::from_slice::<serde_json::Value>(&b));
        assert!(matches!(sent, Some(Ok(ref v)) if v == &body), "{sent:?}");
        Ok(())
    }

    #[test]
    fn missing_body() {
        let args = Arguments::new().with("monitor_id", &42_i64);
        let err = build::<()>(&UPDATE, args, None).unwrap_err();
        assert_eq!(err.missing_parameter(), Some("body"));
    }

    #[test]
    fn optional_body_and_accept() -> anyhow::Result<()> {
        let got = build::<()>(&FILTERS, Arguments::new(), None)?;
        assert!(got.headers.get(CONTENT_TYPE).is_none(), "{got:?}");
        assert_eq!(
            got.headers.get(ACCEPT),
            Some(&HeaderValue::from_static(
                "application/json;datetime-format=rfc3339"
            ))
        );

        let got = build(&FILTERS, Arguments::new(), Some(&json!({"a": 1})))?;
        assert!(got.headers.get(CONTENT_TYPE).is_some(), "{got:?}");
        assert_eq!(got.body, Some(bytes::Bytes::from_static(br#"{"a":1}"#)));
        Ok(())
    }

    #[test]
    fn body_serialization_error() {
        struct Unserializable;
        impl serde::Serialize for Unserializable {
            fn serialize<S: serde::Serializer>(&self, _: S) -> std::result::Result<S::Ok, S::Error> {
                Err(serde::ser::Error::custom("cannot serialize"))
            }
        }
        let args = Arguments::new().with("monitor_id", &42_i64);
        let err = build(&UPDATE, args, Some(&Unserializable)).unwrap_err();
        assert!(err.is_serialization(), "{err:?}");
    }
}
