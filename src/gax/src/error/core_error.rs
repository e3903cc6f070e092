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

use super::CredentialsError;
use super::ServiceError;
use super::api::ApiErrorResponse;
use super::binding::BindingError;
use http::HeaderMap;
use std::error::Error as StdError;

type BoxError = Box<dyn StdError + Send + Sync>;

/// The core error returned by all client libraries.
///
/// The client libraries report errors from multiple sources. For example, the
/// service may return an error, the transport may be unable to create the
/// necessary connection to make a request, the request may timeout or be
/// cancelled before a response is received, or the library may be unable to
/// format the request due to missing application inputs.
///
/// Most applications will just return the error or log it, without any further
/// action. However, some applications may need to interrogate the error
/// details. This type offers a series of predicates to determine the error
/// kind. The type also offers accessors to query the most common error details.
/// Applications can query the error [source][std::error::Error::source] for
/// deeper information.
///
/// # Example
/// ```
/// use datadog_api_gax::error::Error;
/// match example_function() {
///     Err(e) if e.http_status_code() == Some(404) => {
///         println!("not found {e}");
///     },
///     Err(e) if e.is_timeout() => { println!("not enough time {e}"); },
///     Err(e) => { println!("some other error {e}"); },
///     Ok(_) => { println!("success, how boring"); },
/// }
///
/// fn example_function() -> Result<String, Error> {
///     // ... details omitted ...
///     # use datadog_api_gax::error::ServiceError;
///     # Err(Error::service(ServiceError::new(404)))
/// }
/// ```
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: Option<BoxError>,
}

impl Error {
    /// Creates an error with the information returned by the Datadog API.
    ///
    /// # Example
    /// ```
    /// use datadog_api_gax::error::{Error, ServiceError};
    /// let error = Error::service(ServiceError::new(409));
    /// assert!(error.is_service());
    /// assert_eq!(error.http_status_code(), Some(409));
    /// assert_eq!(error.status_line(), Some("409 Conflict"));
    /// ```
    pub fn service(details: ServiceError) -> Self {
        Self {
            kind: ErrorKind::Service(Box::new(details)),
            source: None,
        }
    }

    /// The service returned a response with a status code of 300 or higher.
    ///
    /// Use [http_status_code][Error::http_status_code] and
    /// [http_payload][Error::http_payload] to examine the response. If the
    /// operation declares a payload for the status code, and the payload could
    /// be decoded, [api_error][Error::api_error] or
    /// [error_model][Error::error_model] return the decoded payload.
    pub fn is_service(&self) -> bool {
        matches!(self.kind, ErrorKind::Service(_))
    }

    /// Creates an error representing a timeout.
    ///
    /// # Example
    /// ```
    /// use std::error::Error as _;
    /// use datadog_api_gax::error::Error;
    /// let error = Error::timeout("simulated timeout");
    /// assert!(error.is_timeout());
    /// assert!(error.source().is_some());
    /// ```
    pub fn timeout<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Timeout,
            source: Some(source.into()),
        }
    }

    /// The request could not be completed before its deadline.
    ///
    /// This is always a client-side generated error. Note that the request may
    /// or may not have started, and it may or may not complete in the service.
    /// If the request mutates any state in the service, it may or may not be
    /// safe to attempt the request again.
    ///
    /// # Troubleshooting
    ///
    /// The most common cause of this problem is setting a timeout value that is
    /// based on the observed latency when the service is not under load.
    /// Consider increasing the timeout value to handle temporary latency
    /// increases too.
    pub fn is_timeout(&self) -> bool {
        matches!(self.kind, ErrorKind::Timeout)
    }

    /// Creates an error representing a cancelled request.
    ///
    /// # Example
    /// ```
    /// use datadog_api_gax::error::Error;
    /// let error = Error::cancelled("simulated cancellation");
    /// assert!(error.is_cancelled());
    /// ```
    pub fn cancelled<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Cancelled,
            source: Some(source.into()),
        }
    }

    /// The application cancelled the request.
    ///
    /// As with timeouts, the request may or may not have reached the service.
    pub fn is_cancelled(&self) -> bool {
        matches!(self.kind, ErrorKind::Cancelled)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Creates an error representing a deserialization problem.
    ///
    /// # Example
    /// ```
    /// use std::error::Error as _;
    /// use datadog_api_gax::error::Error;
    /// let error = Error::deser("simulated problem");
    /// assert!(error.is_deserialization());
    /// assert!(error.source().is_some());
    /// ```
    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn deser<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Deserialization(None),
            source: Some(source.into()),
        }
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Creates an error representing a successful response with a payload
    /// that cannot be deserialized. The status, headers, and payload remain
    /// available via [http_status_code][Error::http_status_code],
    /// [http_headers][Error::http_headers], and
    /// [http_payload][Error::http_payload].
    ///
    /// # Example
    /// ```
    /// use datadog_api_gax::error::Error;
    /// let payload = bytes::Bytes::from_static(b"<html>proxy</html>");
    /// let headers = http::HeaderMap::new();
    /// let error = Error::deser_with_http("simulated problem", 200, headers, payload.clone());
    /// assert!(error.is_deserialization());
    /// assert!(!error.is_service());
    /// assert_eq!(error.http_status_code(), Some(200));
    /// assert_eq!(error.http_payload(), Some(&payload));
    /// ```
    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn deser_with_http<T: Into<BoxError>>(
        source: T,
        status_code: u16,
        headers: HeaderMap,
        payload: bytes::Bytes,
    ) -> Self {
        let details = ServiceError::new(status_code)
            .set_headers(headers)
            .set_payload(payload);
        Self {
            kind: ErrorKind::Deserialization(Some(Box::new(details))),
            source: Some(source.into()),
        }
    }

    /// The response could not be deserialized.
    ///
    /// The client libraries tolerate responses that do not match the expected
    /// models, such responses are returned as raw JSON values. This error
    /// indicates the response is not valid JSON at all.
    ///
    /// # Troubleshooting
    ///
    /// The most common cause is a proxy or load balancer returning an HTML
    /// or plain text page with a successful status code. Use the `Debug`
    /// format of the error to examine the original problem.
    pub fn is_deserialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Deserialization(_))
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Creates an error representing a serialization problem.
    ///
    /// # Example
    /// ```
    /// use std::error::Error as _;
    /// use datadog_api_gax::error::Error;
    /// let error = Error::ser("simulated problem");
    /// assert!(error.is_serialization());
    /// assert!(error.source().is_some());
    /// ```
    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn ser<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Serialization,
            source: Some(source.into()),
        }
    }

    /// The request body could not be serialized.
    ///
    /// This is always a client-side generated error, generated before the
    /// request is made. This error is never transient: the serialization is
    /// deterministic, and will fail on future attempts with the same input
    /// data.
    pub fn is_serialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Serialization)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// The request could not be built from its parameters.
    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn binding<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Binding,
            source: Some(source.into()),
        }
    }

    /// If true, the request was missing required parameters or the parameters
    /// could not be formatted.
    ///
    /// # Troubleshooting
    ///
    /// Typically this indicates a problem in the application. A required
    /// parameter was not initialized, or was initialized to an empty value.
    /// The error message names the parameter.
    pub fn is_binding(&self) -> bool {
        matches!(&self.kind, ErrorKind::Binding)
    }

    /// The name of the missing required parameter, if that is the cause of
    /// this error.
    ///
    /// # Example
    /// ```
    /// use datadog_api_gax::error::{Error, binding::BindingError};
    /// let error = Error::binding(BindingError::MissingParameter("monitor_ids".into()));
    /// assert_eq!(error.missing_parameter(), Some("monitor_ids"));
    /// ```
    pub fn missing_parameter(&self) -> Option<&str> {
        if !self.is_binding() {
            return None;
        }
        match self
            .source
            .as_ref()
            .and_then(|e| e.downcast_ref::<BindingError>())
        {
            Some(BindingError::MissingParameter(name)) => Some(name.as_str()),
            _ => None,
        }
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Cannot create the authentication headers.
    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn authentication(source: CredentialsError) -> Self {
        Self {
            kind: ErrorKind::Authentication,
            source: Some(source.into()),
        }
    }

    /// Could not create the authentication headers before sending the request.
    ///
    /// # Troubleshooting
    ///
    /// Typically this indicates a misconfigured authentication environment for
    /// your application. Verify the `DD_API_KEY` and `DD_APP_KEY` environment
    /// variables, or the credentials configured in the client builder.
    pub fn is_authentication(&self) -> bool {
        matches!(self.kind, ErrorKind::Authentication)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// A problem in the transport layer without a full HTTP response.
    ///
    /// Examples include: a broken connection after the request is sent, or a
    /// failure to resolve the endpoint.
    #[cfg_attr(not(feature = "_internal-semver"), doc(hidden))]
    pub fn io<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Transport,
            source: Some(source.into()),
        }
    }

    /// A problem in the transport layer.
    ///
    /// The request may not have reached the service, or the service response
    /// could not be received in full. The error source contains the problem
    /// reported by the transport.
    pub fn is_transport(&self) -> bool {
        matches!(&self.kind, ErrorKind::Transport)
    }

    /// The service error details, if any.
    pub fn service_error(&self) -> Option<&ServiceError> {
        match &self.kind {
            ErrorKind::Service(d) => Some(d.as_ref()),
            _ => None,
        }
    }

    /// The HTTP status code, if any, associated with this error.
    ///
    /// # Example
    /// ```
    /// use datadog_api_gax::error::Error;
    /// let e = search_for_thing("the thing");
    /// if let Some(code) = e.http_status_code() {
    ///     if code == 404 {
    ///         println!("cannot find the thing, more details in {e}");
    ///     }
    /// }
    ///
    /// fn search_for_thing(name: &str) -> Error {
    ///     # use datadog_api_gax::error::ServiceError;
    ///     # Error::service(ServiceError::new(404))
    /// }
    /// ```
    pub fn http_status_code(&self) -> Option<u16> {
        self.http_details().map(|d| d.status_code())
    }

    /// The HTTP status line, for example `"404 Not Found"`.
    pub fn status_line(&self) -> Option<&str> {
        self.http_details().map(|d| d.status_line())
    }

    /// The headers, if any, associated with this error.
    pub fn http_headers(&self) -> Option<&HeaderMap> {
        self.http_details().map(|d| d.headers())
    }

    /// The raw response body, if any, associated with this error.
    ///
    /// The payload is available even if it could not be decoded, including
    /// successful responses that are not valid JSON.
    pub fn http_payload(&self) -> Option<&bytes::Bytes> {
        self.http_details().map(|d| d.payload())
    }

    fn http_details(&self) -> Option<&ServiceError> {
        match &self.kind {
            ErrorKind::Service(d) => Some(d.as_ref()),
            ErrorKind::Deserialization(d) => d.as_deref(),
            _ => None,
        }
    }

    /// The standard Datadog error payload, if the service returned one.
    ///
    /// # Example
    /// ```
    /// use datadog_api_gax::error::{ApiErrorResponse, Error, ServiceError};
    /// let payload = ApiErrorResponse::new().set_errors(["Bad Request"]);
    /// let error = Error::service(ServiceError::new(400).set_model(payload));
    /// let got = error.api_error().map(|p| p.errors.clone());
    /// assert_eq!(got, Some(vec!["Bad Request".to_string()]));
    /// ```
    pub fn api_error(&self) -> Option<&ApiErrorResponse> {
        self.error_model::<ApiErrorResponse>()
    }

    /// The decoded error payload, if it has type `T`.
    ///
    /// Some operations return a specific payload for some status codes. For
    /// example, checking if monitors can be deleted returns a payload listing
    /// the monitors that cannot be deleted along with a `409` status code.
    pub fn error_model<T: 'static>(&self) -> Option<&T> {
        self.service_error().and_then(|d| d.model_as::<T>())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.kind, &self.source) {
            (ErrorKind::Binding, Some(e)) => {
                write!(f, "cannot build the request {e}")
            }
            (ErrorKind::Serialization, Some(e)) => write!(f, "cannot serialize the request {e}"),
            (ErrorKind::Deserialization(_), Some(e)) => {
                write!(f, "cannot deserialize the response {e}")
            }
            (ErrorKind::Authentication, Some(e)) => {
                write!(f, "cannot create the authentication headers {e}")
            }
            (ErrorKind::Timeout, Some(e)) => {
                write!(f, "the request exceeded the request deadline {e}")
            }
            (ErrorKind::Cancelled, Some(e)) => {
                write!(f, "the request was cancelled {e}")
            }
            (ErrorKind::Transport, Some(e)) => {
                write!(f, "the transport reports an error: {e}")
            }
            (ErrorKind::Service(d), _) => d.display(f),
            (_, None) => unreachable!("no constructor allows this"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error))
    }
}

/// The type of error held by an [Error] instance.
#[derive(Debug)]
enum ErrorKind {
    Binding,
    Serialization,
    /// The HTTP details are present if the response had a payload.
    Deserialization(Option<Box<ServiceError>>),
    Authentication,
    Timeout,
    Cancelled,
    Transport,
    Service(Box<ServiceError>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CredentialsError;
    use std::error::Error as StdError;

    static_assertions::assert_impl_all!(Error: Send, Sync, StdError);

    fn source() -> std::io::Error {
        std::io::Error::other("simulated problem")
    }

    fn assert_no_service_details(error: &Error) {
        assert!(!error.is_service(), "{error:?}");
        assert!(error.service_error().is_none(), "{error:?}");
        assert!(error.http_status_code().is_none(), "{error:?}");
        assert!(error.status_line().is_none(), "{error:?}");
        assert!(error.http_headers().is_none(), "{error:?}");
        assert!(error.http_payload().is_none(), "{error:?}");
        assert!(error.api_error().is_none(), "{error:?}");
    }

    fn assert_io_source(error: &Error) {
        let got = error
            .source()
            .and_then(|e| e.downcast_ref::<std::io::Error>());
        assert!(
            matches!(got, Some(e) if e.to_string() == "simulated problem"),
            "{error:?}"
        );
        assert!(error.to_string().contains("simulated problem"), "{error}");
    }

    #[test]
    fn service() {
        let payload = bytes::Bytes::from_static(br#"{"errors":["Bad Request"]}"#);
        let headers = {
            let mut headers = http::HeaderMap::new();
            headers.insert(
                "content-type",
                http::HeaderValue::from_static("application/json"),
            );
            headers
        };
        let model = ApiErrorResponse::new().set_errors(["Bad Request"]);
        let error = Error::service(
            ServiceError::new(400)
                .set_headers(headers.clone())
                .set_payload(payload.clone())
                .set_model(model.clone()),
        );
        assert!(error.is_service(), "{error:?}");
        assert!(error.source().is_none(), "{error:?}");
        assert_eq!(error.http_status_code(), Some(400));
        assert_eq!(error.status_line(), Some("400 Bad Request"));
        assert_eq!(error.http_headers(), Some(&headers));
        assert_eq!(error.http_payload(), Some(&payload));
        assert_eq!(error.api_error(), Some(&model));
        assert!(error.error_model::<String>().is_none(), "{error:?}");
        assert!(error.to_string().contains("400 Bad Request"), "{error}");
        assert!(error.to_string().contains("Bad Request"), "{error}");
        assert!(error.missing_parameter().is_none(), "{error:?}");
    }

    #[test]
    fn timeout() {
        let error = Error::timeout(source());
        assert!(error.is_timeout(), "{error:?}");
        assert!(!error.is_cancelled(), "{error:?}");
        assert_io_source(&error);
        assert_no_service_details(&error);
    }

    #[test]
    fn cancelled() {
        let error = Error::cancelled(source());
        assert!(error.is_cancelled(), "{error:?}");
        assert!(!error.is_timeout(), "{error:?}");
        assert!(error.to_string().contains("cancelled"), "{error}");
        assert_io_source(&error);
        assert_no_service_details(&error);
    }

    #[test]
    fn deserialization() {
        let error = Error::deser(source());
        assert!(error.is_deserialization(), "{error:?}");
        assert_io_source(&error);
        assert_no_service_details(&error);
    }

    #[test]
    fn deserialization_with_http() {
        let payload = bytes::Bytes::from_static(b"<html>proxy</html>");
        let mut headers = http::HeaderMap::new();
        headers.insert("content-type", http::HeaderValue::from_static("text/html"));
        let error = Error::deser_with_http(source(), 200, headers.clone(), payload.clone());
        assert!(error.is_deserialization(), "{error:?}");
        assert!(!error.is_service(), "{error:?}");
        assert!(error.service_error().is_none(), "{error:?}");
        assert!(error.api_error().is_none(), "{error:?}");
        assert_eq!(error.http_status_code(), Some(200));
        assert_eq!(error.status_line(), Some("200 OK"));
        assert_eq!(error.http_headers(), Some(&headers));
        assert_eq!(error.http_payload(), Some(&payload));
        assert_io_source(&error);
    }

    #[test]
    fn serialization() {
        let error = Error::ser(source());
        assert!(error.is_serialization(), "{error:?}");
        assert_io_source(&error);
        assert_no_service_details(&error);
    }

    #[test]
    fn binding() {
        let error = Error::binding(source());
        assert!(error.is_binding(), "{error:?}");
        assert!(error.missing_parameter().is_none(), "{error:?}");
        assert_io_source(&error);
        assert_no_service_details(&error);
    }

    #[test]
    fn missing_parameter() {
        let error = Error::binding(BindingError::MissingParameter("monitor_ids".into()));
        assert!(error.is_binding(), "{error:?}");
        assert_eq!(error.missing_parameter(), Some("monitor_ids"));
        assert!(error.to_string().contains("monitor_ids"), "{error}");
    }

    #[test]
    fn authentication() {
        let error = Error::authentication(CredentialsError::from_msg(false, "test-message"));
        assert!(error.is_authentication(), "{error:?}");
        let got = error
            .source()
            .and_then(|e| e.downcast_ref::<CredentialsError>());
        assert!(matches!(got, Some(c) if !c.is_transient()), "{error:?}");
        assert!(error.to_string().contains("test-message"), "{error}");
        assert_no_service_details(&error);
    }

    #[test]
    fn io() {
        let error = Error::io(source());
        assert!(error.is_transport(), "{error:?}");
        assert_io_source(&error);
        assert_no_service_details(&error);
    }
}
