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

/// A failure to build the HTTP request for an operation.
///
/// The client cannot build a request when a required parameter is missing,
/// when a parameter cannot be formatted, or when a parameter is not part of
/// the operation.
#[derive(thiserror::Error, Debug, PartialEq)]
#[non_exhaustive]
pub enum BindingError {
    /// A required parameter was not set, or was set to an empty value.
    #[error("missing required parameter {0}")]
    MissingParameter(String),
    /// The parameter is not declared by the operation.
    #[error("unknown parameter {parameter} for operation {operation}")]
    UnknownParameter {
        operation: &'static str,
        parameter: String,
    },
    /// The parameter value cannot be formatted for the request URL.
    #[error("cannot format parameter {parameter}: {message}")]
    Format { parameter: String, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fmt_missing() {
        let e = BindingError::MissingParameter("monitor_ids".into());
        let fmt = format!("{e}");
        assert_eq!(fmt, "missing required parameter monitor_ids");
    }

    #[test]
    fn fmt_unknown() {
        let e = BindingError::UnknownParameter {
            operation: "v1.MonitorsApi.ListMonitors",
            parameter: "color".into(),
        };
        let fmt = format!("{e}");
        assert!(fmt.contains("color"), "{fmt}");
        assert!(fmt.contains("v1.MonitorsApi.ListMonitors"), "{fmt}");
    }

    #[test]
    fn fmt_format() {
        let e = BindingError::Format {
            parameter: "filter".into(),
            message: "objects are not supported".into(),
        };
        let fmt = format!("{e}");
        assert!(fmt.contains("filter"), "{fmt}");
        assert!(fmt.contains("objects are not supported"), "{fmt}");
    }
}
