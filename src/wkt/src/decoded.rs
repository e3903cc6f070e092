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

use serde_json::Value;

/// A payload decoded into a typed model, or preserved as raw JSON.
///
/// Decoding a `Decoded<T>` only fails if the input is not valid JSON. If the
/// input is valid JSON but does not match the shape of `T` (a required field
/// is missing, a field has the wrong type, etc.) the parsed JSON is kept as
/// [Decoded::Unparsed] and a warning is logged via `tracing`.
///
/// Unknown fields do not cause a fallback: models keep them in their
/// `_unknown_fields` map.
///
/// # Example
/// ```
/// # use datadog_api_wkt::Decoded;
/// #[derive(Debug, serde::Deserialize)]
/// struct Role { id: String }
///
/// let typed = serde_json::from_str::<Decoded<Role>>(r#"{"id": "abc"}"#)?;
/// assert_eq!(typed.typed().map(|r| r.id.as_str()), Some("abc"));
///
/// let raw = serde_json::from_str::<Decoded<Role>>(r#"{"id": 42}"#)?;
/// assert!(raw.is_unparsed());
/// assert_eq!(raw.raw(), Some(&serde_json::json!({"id": 42})));
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Decoded<T> {
    /// The payload matched the model.
    Typed(T),
    /// The payload did not match the model, this is the payload as received.
    Unparsed(Value),
}

impl<T> Decoded<T> {
    /// Returns `true` if the payload could not be decoded into `T`.
    pub fn is_unparsed(&self) -> bool {
        matches!(self, Self::Unparsed(_))
    }

    pub fn typed(&self) -> Option<&T> {
        match self {
            Self::Typed(t) => Some(t),
            Self::Unparsed(_) => None,
        }
    }

    pub fn typed_mut(&mut self) -> Option<&mut T> {
        match self {
            Self::Typed(t) => Some(t),
            Self::Unparsed(_) => None,
        }
    }

    pub fn into_typed(self) -> Option<T> {
        match self {
            Self::Typed(t) => Some(t),
            Self::Unparsed(_) => None,
        }
    }

    /// Returns the raw JSON value for unparsed payloads.
    pub fn raw(&self) -> Option<&Value> {
        match self {
            Self::Typed(_) => None,
            Self::Unparsed(v) => Some(v),
        }
    }

    /// Converts into a `Result`, returning the raw value as the error.
    pub fn into_result(self) -> Result<T, Value> {
        match self {
            Self::Typed(t) => Ok(t),
            Self::Unparsed(v) => Err(v),
        }
    }

    pub fn map<U, F>(self, f: F) -> Decoded<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Typed(t) => Decoded::Typed(f(t)),
            Self::Unparsed(v) => Decoded::Unparsed(v),
        }
    }
}

impl<T> Decoded<T>
where
    T: serde::de::DeserializeOwned,
{
    /// Decodes an already parsed JSON value.
    pub fn from_value(value: Value) -> Self {
        match T::deserialize(&value) {
            Ok(t) => Self::Typed(t),
            Err(e) => {
                tracing::warn!(
                    target: "datadog_api_wkt::decoded",
                    model = std::any::type_name::<T>(),
                    error = %e,
                    "payload does not match the model, keeping the raw JSON value"
                );
                Self::Unparsed(value)
            }
        }
    }
}

impl<T: Default> Default for Decoded<T> {
    fn default() -> Self {
        Self::Typed(T::default())
    }
}

impl<T> From<T> for Decoded<T> {
    fn from(value: T) -> Self {
        Self::Typed(value)
    }
}

impl<T> serde::ser::Serialize for Decoded<T>
where
    T: serde::ser::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        match self {
            Self::Typed(t) => t.serialize(serializer),
            Self::Unparsed(v) => v.serialize(serializer),
        }
    }
}

impl<'de, T> serde::de::Deserialize<'de> for Decoded<T>
where
    T: serde::de::DeserializeOwned,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        // Syntax errors surface here, shape errors are absorbed below.
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(value))
    }
}
