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

/// An enumeration value not known to this version of the library.
///
/// The Datadog APIs add new enumeration values over time. The generated
/// enumerations hold such values in an `UnknownValue(UnknownEnumValue)`
/// variant. The value is preserved and re-serialized verbatim.
///
/// Applications should not create these values directly, use the `From<&str>`
/// conversion of the enumeration type instead.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct UnknownEnumValue(String);

impl UnknownEnumValue {
    #[doc(hidden)]
    pub fn new<T: Into<String>>(name: T) -> Self {
        Self(name.into())
    }

    /// The value as received from the service.
    pub fn name(&self) -> &str {
        self.0.as_str()
    }
}

impl std::fmt::Display for UnknownEnumValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl serde::ser::Serialize for UnknownEnumValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.0.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accessors() {
        let u = UnknownEnumValue::new("metric alert v2");
        assert_eq!(u.name(), "metric alert v2");
        assert_eq!(u.to_string(), "metric alert v2");
    }

    #[test]
    fn serialize() -> anyhow::Result<()> {
        let u = UnknownEnumValue::new("GREEN");
        let got = serde_json::to_value(&u)?;
        assert_eq!(got, json!("GREEN"));
        Ok(())
    }
}
