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

use crate::request_parameter::RequestParameter;

type Result<T> = std::result::Result<T, crate::request_parameter::Error>;

/// The formatted value of an operation parameter.
///
/// Scalars format to a single string. Collections keep each element apart,
/// the operation decides how to join them (for example, as comma separated
/// values) when it builds the request.
#[derive(Clone, Debug, PartialEq)]
pub enum ParameterValue {
    Single(String),
    Multiple(Vec<String>),
}

impl ParameterValue {
    /// Returns true if the value carries no data.
    ///
    /// Required parameters with empty values are reported as missing.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Single(s) => s.is_empty(),
            Self::Multiple(v) => v.is_empty(),
        }
    }
}

/// Formats a parameter for an operation.
///
/// This function is called from the generated code. It is not intended for
/// general use.
/// - Simple scalars are formatted as usual.
/// - Timestamps are formatted using RFC 3339.
/// - [Option] fields that do not contain a value are not included in the
///   request.
/// - Collections format each element, preserving their order.
pub fn format<T>(parameter: &T) -> Result<Option<ParameterValue>>
where
    T: QueryParameter,
{
    parameter.query_value()
}

/// [QueryParameter] is a trait representing types that can be used as an
/// operation parameter.
pub trait QueryParameter {
    fn query_value(&self) -> Result<Option<ParameterValue>>;
}

impl<T: QueryParameter> QueryParameter for Option<T> {
    fn query_value(&self) -> Result<Option<ParameterValue>> {
        match &self {
            None => Ok(None),
            Some(t) => t.query_value(),
        }
    }
}

impl<T: RequestParameter> QueryParameter for Vec<T> {
    fn query_value(&self) -> Result<Option<ParameterValue>> {
        let values = self
            .iter()
            .map(|e| e.format())
            .collect::<Result<Vec<_>>>()?;
        Ok(Some(ParameterValue::Multiple(values)))
    }
}

impl<T: RequestParameter> QueryParameter for T {
    fn query_value(&self) -> Result<Option<ParameterValue>> {
        Ok(Some(ParameterValue::Single(self.format()?)))
    }
}
