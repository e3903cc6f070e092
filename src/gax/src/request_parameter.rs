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

type Result = std::result::Result<String, Error>;

/// Scalar values that can appear in the request path, query, or headers.
///
/// Timestamps use RFC 3339 with second precision, which is what the Datadog
/// API expects for parameters such as `start_hr`.
pub trait RequestParameter {
    fn format(&self) -> Result;
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("cannot format as request parameter {0:?}")]
    Format(Box<dyn std::error::Error + Send + Sync>),
}

impl RequestParameter for i32 {
    fn format(&self) -> Result {
        Ok(format!("{self}"))
    }
}
impl RequestParameter for i64 {
    fn format(&self) -> Result {
        Ok(format!("{self}"))
    }
}
impl RequestParameter for u32 {
    fn format(&self) -> Result {
        Ok(format!("{self}"))
    }
}
impl RequestParameter for u64 {
    fn format(&self) -> Result {
        Ok(format!("{self}"))
    }
}
impl RequestParameter for f32 {
    fn format(&self) -> Result {
        Ok(format!("{self}"))
    }
}
impl RequestParameter for f64 {
    fn format(&self) -> Result {
        Ok(format!("{self}"))
    }
}
impl RequestParameter for String {
    fn format(&self) -> Result {
        Ok(self.clone())
    }
}
impl RequestParameter for bool {
    fn format(&self) -> Result {
        Ok(format!("{self}"))
    }
}

impl RequestParameter for chrono::DateTime<chrono::Utc> {
    fn format(&self) -> Result {
        Ok(self.to_rfc3339_opts(chrono::SecondsFormat::Secs, true))
    }
}

impl RequestParameter for serde_json::Value {
    fn format(&self) -> Result {
        match self {
            Self::String(s) => Ok(s.clone()),
            Self::Number(n) => Ok(format!("{n}")),
            Self::Bool(b) => Ok(format!("{b}")),
            Self::Null => Ok(String::new()),
            Self::Array(_) | Self::Object(_) => Err(Error::Format(
                format!("composite JSON values are not valid parameters: {self}").into(),
            )),
        }
    }
}
