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

use http::HeaderMap;
use std::any::Any;

/// A decoded error payload.
///
/// Operations declare which payload, if any, the service returns for each
/// error status code. The payload type is only known at runtime, this trait
/// allows [Error::error_model][crate::error::Error::error_model] to recover
/// the concrete type.
///
/// Only types decoded from JSON implement this trait. In particular,
/// `Box<dyn ErrorModel>` does not, use [ServiceError::set_or_clear_model] to
/// attach a boxed payload.
pub trait ErrorModel: std::fmt::Debug + Send + Sync + 'static {
    fn as_any(&self) -> &dyn Any;
}

impl<T> ErrorModel for T
where
    T: serde::de::DeserializeOwned + std::fmt::Debug + Send + Sync + 'static,
{
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// The details of an error response from the Datadog API.
///
/// This includes the status code, the status line, the response headers, and
/// the raw response body. If the operation declares a payload for the status
/// code, and the body matches that payload, the decoded payload is included
/// too. A payload that cannot be decoded never changes the error type, the
/// raw body is always available.
///
/// # Example
/// ```
/// # use datadog_api_gax::error::ServiceError;
/// let details = ServiceError::new(429)
///     .set_payload(bytes::Bytes::from_static(b"slow down"));
/// assert_eq!(details.status_code(), 429);
/// assert_eq!(details.status_line(), "429 Too Many Requests");
/// assert_eq!(details.payload().as_ref(), b"slow down");
/// assert!(details.model().is_none());
/// ```
#[derive(Debug)]
pub struct ServiceError {
    status_code: u16,
    status_line: String,
    headers: HeaderMap,
    payload: bytes::Bytes,
    model: Option<Box<dyn ErrorModel>>,
}

impl ServiceError {
    /// Creates a new instance with the default status line for `status_code`.
    pub fn new(status_code: u16) -> Self {
        let status_line = http::StatusCode::from_u16(status_code)
            .ok()
            .and_then(|s| s.canonical_reason())
            .map(|reason| format!("{status_code} {reason}"))
            .unwrap_or_else(|| status_code.to_string());
        Self {
            status_code,
            status_line,
            headers: HeaderMap::new(),
            payload: bytes::Bytes::new(),
            model: None,
        }
    }

    /// Sets the status line.
    pub fn set_status_line<T: Into<String>>(mut self, v: T) -> Self {
        self.status_line = v.into();
        self
    }

    /// Sets the response headers.
    pub fn set_headers<T: Into<HeaderMap>>(mut self, v: T) -> Self {
        self.headers = v.into();
        self
    }

    /// Sets the raw response body.
    pub fn set_payload<T: Into<bytes::Bytes>>(mut self, v: T) -> Self {
        self.payload = v.into();
        self
    }

    /// Sets the decoded payload.
    pub fn set_model<T: ErrorModel>(mut self, v: T) -> Self {
        self.model = Some(Box::new(v));
        self
    }

    /// Sets or clears the decoded payload.
    pub fn set_or_clear_model(mut self, v: Option<Box<dyn ErrorModel>>) -> Self {
        self.model = v;
        self
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    pub fn status_line(&self) -> &str {
        &self.status_line
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn payload(&self) -> &bytes::Bytes {
        &self.payload
    }

    /// The decoded payload, if any.
    pub fn model(&self) -> Option<&dyn ErrorModel> {
        self.model.as_deref()
    }

    /// The decoded payload, if any and if it has type `T`.
    pub fn model_as<T: 'static>(&self) -> Option<&T> {
        self.model().and_then(|m| m.as_any().downcast_ref::<T>())
    }

    pub(crate) fn display(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let status = &self.status_line;
        match std::str::from_utf8(self.payload.as_ref()) {
            Ok(message) => write!(f, "the service reports a [{status}] error: {message}"),
            Err(_) => write!(
                f,
                "the service reports a [{status}] error: {:?}",
                self.payload
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiErrorResponse;

    #[derive(Debug, PartialEq, serde::Deserialize)]
    struct Conflict {
        ids: Vec<i64>,
    }

    #[test]
    fn defaults() {
        let got = ServiceError::new(404);
        assert_eq!(got.status_code(), 404);
        assert_eq!(got.status_line(), "404 Not Found");
        assert!(got.headers().is_empty(), "{got:?}");
        assert!(got.payload().is_empty(), "{got:?}");
        assert!(got.model().is_none(), "{got:?}");
    }

    #[test]
    fn non_standard_status() {
        let got = ServiceError::new(599);
        assert_eq!(got.status_line(), "599");
        let got = got.set_status_line("599 Network Timeout");
        assert_eq!(got.status_line(), "599 Network Timeout");
    }

    #[test]
    fn model_downcast() {
        let got = ServiceError::new(409).set_model(Conflict { ids: vec![1, 2] });
        assert_eq!(got.model_as::<Conflict>(), Some(&Conflict { ids: vec![1, 2] }));
        assert!(got.model_as::<ApiErrorResponse>().is_none(), "{got:?}");

        let got = got.set_or_clear_model(None);
        assert!(got.model_as::<Conflict>().is_none(), "{got:?}");
    }

    #[test]
    fn boxed_model_downcast() {
        let boxed: Box<dyn ErrorModel> = Box::new(ApiErrorResponse::new().set_errors(["a"]));
        let got = ServiceError::new(400).set_or_clear_model(Some(boxed));
        let model = got.model_as::<ApiErrorResponse>();
        assert_eq!(model.map(|m| m.errors.as_slice()), Some(["a".to_string()].as_slice()));
    }

    #[test]
    fn boxed_model_is_not_boxed_again() {
        static_assertions::assert_not_impl_any!(Box<dyn ErrorModel>: ErrorModel);

        let boxed: Box<dyn ErrorModel> = Box::new(Conflict { ids: vec![3] });
        let any = boxed.as_any();
        assert_eq!(any.downcast_ref::<Conflict>(), Some(&Conflict { ids: vec![3] }));

        let got = ServiceError::new(409).set_or_clear_model(Some(boxed));
        let err = crate::error::Error::service(got);
        assert_eq!(
            err.error_model::<Conflict>(),
            Some(&Conflict { ids: vec![3] })
        );
    }

    #[test]
    fn display() {
        let got = ServiceError::new(400).set_payload(bytes::Bytes::from_static(b"bad input"));
        let fmt = crate::error::Error::service(got).to_string();
        assert!(fmt.contains("400 Bad Request"), "{fmt}");
        assert!(fmt.contains("bad input"), "{fmt}");

        let got = ServiceError::new(500).set_payload(bytes::Bytes::from_static(&[0xFF, 0xFE]));
        let fmt = crate::error::Error::service(got).to_string();
        assert!(fmt.contains("500 Internal Server Error"), "{fmt}");
        assert!(fmt.contains(r"\xff"), "{fmt}");
    }
}
