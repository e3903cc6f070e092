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

use auth::credentials::AuthScheme;
use gax::error::binding::BindingError;
use gax::error::{Error, ErrorModel};
use gax::query_parameter::{ParameterValue, QueryParameter};
use http::Method;

/// Where a parameter goes in the request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Location {
    /// Replaces the `{name}` placeholder in the path template.
    Path,
    /// Appended to the query string.
    Query,
}

/// How collection values are serialized.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CollectionFormat {
    /// Comma separated values: `a,b,c`.
    #[default]
    Csv,
    /// Space separated values: `a b c`.
    Ssv,
    /// Tab separated values.
    Tsv,
    /// Pipe separated values: `a|b|c`.
    Pipes,
    /// The key is repeated for each value: `k=a&k=b&k=c`.
    Multi,
}

impl CollectionFormat {
    /// The separator for joined formats, `None` for [CollectionFormat::Multi].
    pub fn separator(&self) -> Option<&'static str> {
        match self {
            Self::Csv => Some(","),
            Self::Ssv => Some(" "),
            Self::Tsv => Some("\t"),
            Self::Pipes => Some("|"),
            Self::Multi => None,
        }
    }
}

/// Describes one parameter of an operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParameterSpec {
    pub name: &'static str,
    pub location: Location,
    pub required: bool,
    pub format: CollectionFormat,
}

impl ParameterSpec {
    /// A path parameter. These are always required.
    pub const fn path(name: &'static str) -> Self {
        Self {
            name,
            location: Location::Path,
            required: true,
            format: CollectionFormat::Csv,
        }
    }

    /// An optional query parameter.
    pub const fn query(name: &'static str) -> Self {
        Self {
            name,
            location: Location::Query,
            required: false,
            format: CollectionFormat::Csv,
        }
    }

    /// A required query parameter.
    pub const fn required_query(name: &'static str) -> Self {
        Self {
            name,
            location: Location::Query,
            required: true,
            format: CollectionFormat::Csv,
        }
    }

    /// Changes the collection format.
    pub const fn with_format(mut self, format: CollectionFormat) -> Self {
        self.format = format;
        self
    }
}

/// Whether the operation sends a request body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BodySpec {
    None,
    Required,
    Optional,
}

type ErrorDecoder = fn(&[u8]) -> Option<Box<dyn ErrorModel>>;

/// Maps error status codes to the payload the service returns for them.
#[derive(Clone, Copy)]
pub struct ErrorRoute {
    pub status_codes: &'static [u16],
    pub decode: ErrorDecoder,
}

impl ErrorRoute {
    pub const fn new(status_codes: &'static [u16], decode: ErrorDecoder) -> Self {
        Self {
            status_codes,
            decode,
        }
    }

    pub fn matches(&self, status_code: u16) -> bool {
        self.status_codes.contains(&status_code)
    }
}

impl std::fmt::Debug for ErrorRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ErrorRoute")
            .field("status_codes", &self.status_codes)
            .finish()
    }
}

/// Decodes an error payload as `T`, the common [ErrorRoute] decoder.
///
/// Returns `None` if the payload does not match `T`.
pub fn decode_as<T>(body: &[u8]) -> Option<Box<dyn ErrorModel>>
where
    T: serde::de::DeserializeOwned + ErrorModel,
{
    serde_json::from_slice::<T>(body)
        .ok()
        .map(|m| Box::new(m) as Box<dyn ErrorModel>)
}

/// The default value for the `Accept` header.
pub const APPLICATION_JSON: &str = "application/json";

/// A static description of one endpoint.
///
/// Each generated crate defines one `static` instance per operation. The
/// request builder and the response dispatcher are driven by this
/// description, the per-operation code only converts typed arguments.
#[derive(Debug)]
pub struct OperationDescriptor {
    /// The operation id, for example `v1.MonitorsApi.ListMonitors`.
    pub id: &'static str,
    pub method: Method,
    /// The path template, with `{name}` placeholders.
    pub path: &'static str,
    /// The parameters, in the order they appear in the query string.
    pub parameters: &'static [ParameterSpec],
    pub body: BodySpec,
    pub accept: &'static str,
    pub auth: &'static [AuthScheme],
    pub errors: &'static [ErrorRoute],
    /// If false, successful responses have no payload.
    pub success_payload: bool,
}

impl OperationDescriptor {
    pub fn parameter(&self, name: &str) -> Option<&ParameterSpec> {
        self.parameters.iter().find(|p| p.name == name)
    }

    pub fn error_route(&self, status_code: u16) -> Option<&ErrorRoute> {
        self.errors.iter().find(|r| r.matches(status_code))
    }
}

/// The formatted arguments for one call.
///
/// Formatting errors are deferred until the request is built, so the
/// generated code can chain calls to [Arguments::with].
#[derive(Debug, Default)]
pub struct Arguments {
    values: Vec<(String, ParameterValue)>,
    error: Option<Error>,
}

impl Arguments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an argument. Values that format to nothing (such as `None`) are
    /// skipped.
    pub fn with<T: QueryParameter>(mut self, name: &str, value: &T) -> Self {
        if self.error.is_some() {
            return self;
        }
        match value.query_value() {
            Ok(Some(v)) => self.values.push((name.to_string(), v)),
            Ok(None) => {}
            Err(e) => {
                self.error = Some(Error::binding(BindingError::Format {
                    parameter: name.to_string(),
                    message: e.to_string(),
                }));
            }
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&ParameterValue> {
        self.values
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    pub(crate) fn names(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(|(n, _)| n.as_str())
    }

    pub(crate) fn take_error(&mut self) -> Option<Error> {
        self.error.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use auth::credentials::API_KEY_AUTH;
    use gax::error::ApiErrorResponse;
    use test_case::test_case;

    static TEST_OPERATION: OperationDescriptor = OperationDescriptor {
        id: "test.TestApi.GetThing",
        method: Method::GET,
        path: "/api/v1/things/{thing_id}",
        parameters: &[
            ParameterSpec::path("thing_id"),
            ParameterSpec::query("tags").with_format(CollectionFormat::Pipes),
        ],
        body: BodySpec::None,
        accept: APPLICATION_JSON,
        auth: &[API_KEY_AUTH],
        errors: &[ErrorRoute::new(
            &[400, 403],
            decode_as::<ApiErrorResponse>,
        )],
        success_payload: true,
    };

    #[test_case(CollectionFormat::Csv, Some(","))]
    #[test_case(CollectionFormat::Ssv, Some(" "))]
    #[test_case(CollectionFormat::Tsv, Some("\t"))]
    #[test_case(CollectionFormat::Pipes, Some("|"))]
    #[test_case(CollectionFormat::Multi, None)]
    fn separator(format: CollectionFormat, want: Option<&str>) {
        assert_eq!(format.separator(), want);
    }

    #[test]
    fn specs() {
        let p = ParameterSpec::path("id");
        assert_eq!(p.location, Location::Path);
        assert!(p.required);
        let q = ParameterSpec::query("page");
        assert_eq!(q.location, Location::Query);
        assert!(!q.required);
        assert_eq!(q.format, CollectionFormat::Csv);
        let r = ParameterSpec::required_query("monitor_ids").with_format(CollectionFormat::Multi);
        assert!(r.required);
        assert_eq!(r.format, CollectionFormat::Multi);
    }

    #[test]
    fn descriptor_lookup() {
        assert!(TEST_OPERATION.parameter("thing_id").is_some());
        assert!(TEST_OPERATION.parameter("color").is_none());
        assert!(TEST_OPERATION.error_route(400).is_some());
        assert!(TEST_OPERATION.error_route(403).is_some());
        assert!(TEST_OPERATION.error_route(404).is_none());
        let fmt = format!("{:?}", TEST_OPERATION.errors[0]);
        assert!(fmt.contains("400"), "{fmt}");
    }

    #[test]
    fn decode_error_model() {
        let got = decode_as::<ApiErrorResponse>(br#"{"errors": ["bad"]}"#);
        let model = got
            .as_deref()
            .and_then(|m| m.as_any().downcast_ref::<ApiErrorResponse>());
        assert_eq!(model, Some(&ApiErrorResponse::new().set_errors(["bad"])));

        let got = decode_as::<ApiErrorResponse>(b"<html>oops</html>");
        assert!(got.is_none(), "{got:?}");
    }

    #[test]
    fn arguments() {
        let args = Arguments::new()
            .with("thing_id", &"abc".to_string())
            .with("page", &Some(2_i64))
            .with("missing", &None::<String>)
            .with("tags", &vec!["a".to_string(), "b".to_string()]);
        assert_eq!(
            args.get("thing_id"),
            Some(&ParameterValue::Single("abc".into()))
        );
        assert_eq!(args.get("page"), Some(&ParameterValue::Single("2".into())));
        assert_eq!(args.get("missing"), None);
        assert_eq!(
            args.get("tags"),
            Some(&ParameterValue::Multiple(vec!["a".into(), "b".into()]))
        );
        assert_eq!(
            args.names().collect::<Vec<_>>(),
            vec!["thing_id", "page", "tags"]
        );
    }

    #[test]
    fn arguments_deferred_error() {
        let mut args = Arguments::new()
            .with("filter", &serde_json::json!({"a": 1}))
            .with("page", &1_i64);
        assert!(args.get("page").is_none());
        let err = args.take_error();
        assert!(matches!(&err, Some(e) if e.is_binding()), "{err:?}");
        let fmt = format!("{:?}", err);
        assert!(fmt.contains("filter"), "{fmt}");
    }
}
