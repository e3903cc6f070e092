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

/// A field that may be unset, explicitly `null`, or set to a value.
///
/// Model fields of this type must be annotated with:
///
/// ```ignore
/// #[serde(default, skip_serializing_if = "wkt::Nullable::is_unset")]
/// ```
///
/// With that annotation:
/// * a missing JSON key deserializes as [Nullable::Unset], and an unset field
///   is omitted when serializing,
/// * a JSON `null` deserializes as [Nullable::Null], and serializes as `null`,
/// * any other value deserializes as [Nullable::Value].
///
/// # Example
/// ```
/// # use datadog_api_wkt::Nullable;
/// let mut priority = Nullable::<i64>::default();
/// assert!(priority.is_unset());
/// priority.set(3);
/// assert_eq!(priority.get(), Some(&3));
/// priority.set_null();
/// assert_eq!(priority.get_ok(), (None, true));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Nullable<T> {
    /// The field is absent.
    #[default]
    Unset,
    /// The field is present with a `null` value.
    Null,
    /// The field is present with a value.
    Value(T),
}

impl<T> Nullable<T> {
    /// Returns the value, if the field is set to a non-null value.
    pub fn get(&self) -> Option<&T> {
        match self {
            Self::Value(v) => Some(v),
            Self::Unset | Self::Null => None,
        }
    }

    /// Returns the value and whether the field is present.
    ///
    /// The flag is `true` for explicit `null` values too.
    pub fn get_ok(&self) -> (Option<&T>, bool) {
        (self.get(), !self.is_unset())
    }

    /// Returns a mutable reference to the value, if any.
    pub fn get_mut(&mut self) -> Option<&mut T> {
        match self {
            Self::Value(v) => Some(v),
            Self::Unset | Self::Null => None,
        }
    }

    /// Sets the field to `v`.
    pub fn set<V: Into<T>>(&mut self, v: V) {
        *self = Self::Value(v.into());
    }

    /// Sets the field to an explicit `null`.
    pub fn set_null(&mut self) {
        *self = Self::Null;
    }

    /// Clears the field, it will not be serialized.
    pub fn unset(&mut self) {
        *self = Self::Unset;
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if the field is present, including explicit `null`.
    pub fn is_set(&self) -> bool {
        !self.is_unset()
    }

    /// Converts into an `Option`, losing the difference between unset and
    /// `null`.
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Value(v) => Some(v),
            Self::Unset | Self::Null => None,
        }
    }

    pub fn as_ref(&self) -> Nullable<&T> {
        match self {
            Self::Unset => Nullable::Unset,
            Self::Null => Nullable::Null,
            Self::Value(v) => Nullable::Value(v),
        }
    }
}

impl<T> From<T> for Nullable<T> {
    fn from(value: T) -> Self {
        Self::Value(value)
    }
}

/// `None` becomes an explicit `null`.
impl<T> From<Option<T>> for Nullable<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Self::Value(v),
            None => Self::Null,
        }
    }
}

impl<T> serde::ser::Serialize for Nullable<T>
where
    T: serde::ser::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        match self {
            // Only reachable if the field is missing `skip_serializing_if`.
            Self::Unset | Self::Null => serializer.serialize_none(),
            Self::Value(v) => serializer.serialize_some(v),
        }
    }
}

impl<'de, T> serde::de::Deserialize<'de> for Nullable<T>
where
    T: serde::de::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Self::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    #[derive(Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    struct Holder {
        #[serde(default, skip_serializing_if = "Nullable::is_unset")]
        priority: Nullable<i64>,
    }

    #[test]
    fn accessors() {
        let mut field = Nullable::<String>::default();
        assert!(field.is_unset(), "{field:?}");
        assert!(!field.is_set(), "{field:?}");
        assert_eq!(field.get_ok(), (None, false));

        field.set("abc");
        assert_eq!(field.get(), Some(&"abc".to_string()));
        assert_eq!(field.get_ok(), (Some(&"abc".to_string()), true));

        field.set_null();
        assert!(field.is_null(), "{field:?}");
        assert!(field.is_set(), "{field:?}");
        assert_eq!(field.get(), None);
        assert_eq!(field.get_ok(), (None, true));

        field.unset();
        assert!(field.is_unset(), "{field:?}");
    }

    #[test]
    fn get_mut() {
        let mut field = Nullable::from(1_i64);
        if let Some(v) = field.get_mut() {
            *v += 1;
        }
        assert_eq!(field, Nullable::Value(2));
        assert_eq!(field.into_option(), Some(2));
    }

    #[test]
    fn from_option() {
        let got: Nullable<i32> = Nullable::from(Some(1));
        assert_eq!(got, Nullable::Value(1));
        let got: Nullable<i32> = Nullable::from(None::<i32>);
        assert_eq!(got, Nullable::Null);
    }

    #[test_case(Nullable::Unset, json!({}))]
    #[test_case(Nullable::Null, json!({"priority": null}))]
    #[test_case(Nullable::Value(5), json!({"priority": 5}))]
    fn serialize(priority: Nullable<i64>, want: serde_json::Value) -> anyhow::Result<()> {
        let got = serde_json::to_value(Holder { priority })?;
        assert_eq!(got, want);
        Ok(())
    }

    #[test_case(json!({}), Nullable::Unset)]
    #[test_case(json!({"priority": null}), Nullable::Null)]
    #[test_case(json!({"priority": 5}), Nullable::Value(5))]
    fn deserialize(input: serde_json::Value, want: Nullable<i64>) -> anyhow::Result<()> {
        let got = serde_json::from_value::<Holder>(input.clone())?;
        assert_eq!(got.priority, want);
        // The three states survive a round trip.
        let roundtrip = serde_json::to_value(&got)?;
        assert_eq!(roundtrip, input);
        Ok(())
    }

    #[test]
    fn deserialize_type_mismatch() {
        let got = serde_json::from_value::<Holder>(json!({"priority": "high"}));
        assert!(got.is_err(), "{got:?}");
    }
}
