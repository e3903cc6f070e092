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

use super::attributes::error_type_values as values;
use gax::error::Error;
use http::StatusCode;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ErrorType {
    HttpError(StatusCode),
    ClientTimeout,
    ClientCancelled,
    ClientConnectionError,
    ClientAuthenticationError,
    ClientRequestError,
    ClientResponseDecodeError,
    Internal,
}

impl ErrorType {
    pub(crate) fn from_gax_error(err: &Error) -> Self {
        if let Some(code) = err
            .service_error()
            .and_then(|d| StatusCode::from_u16(d.status_code()).ok())
        {
            return ErrorType::HttpError(code);
        }
        match err {
            e if e.is_timeout() => ErrorType::ClientTimeout,
            e if e.is_cancelled() => ErrorType::ClientCancelled,
            e if e.is_transport() => ErrorType::ClientConnectionError,
            e if e.is_authentication() => ErrorType::ClientAuthenticationError,
            e if e.is_binding() || e.is_serialization() => ErrorType::ClientRequestError,
            e if e.is_deserialization() => ErrorType::ClientResponseDecodeError,
            _ => ErrorType::Internal,
        }
    }

    pub(crate) fn as_str(&self) -> String {
        match self {
            ErrorType::HttpError(code) => code.as_str().to_string(),
            ErrorType::ClientTimeout => values::CLIENT_TIMEOUT.to_string(),
            ErrorType::ClientCancelled => values::CLIENT_CANCELLED.to_string(),
            ErrorType::ClientConnectionError => values::CLIENT_CONNECTION_ERROR.to_string(),
            ErrorType::ClientAuthenticationError => {
                values::CLIENT_AUTHENTICATION_ERROR.to_string()
            }
            ErrorType::ClientRequestError => values::CLIENT_REQUEST_ERROR.to_string(),
            ErrorType::ClientResponseDecodeError => {
                values::CLIENT_RESPONSE_DECODE_ERROR.to_string()
            }
            ErrorType::Internal => values::INTERNAL.to_string(),
        }
    }
}
