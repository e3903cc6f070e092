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

use crate::Result;
use crate::credentials::AuthScheme;
use crate::errors;
use http::{HeaderMap, HeaderName, HeaderValue};

/// Inserts the header for `scheme`, marking the value as sensitive.
pub(crate) fn insert_key(headers: &mut HeaderMap, scheme: &AuthScheme, key: &str) -> Result<()> {
    let mut value =
        HeaderValue::from_str(key).map_err(|e| errors::invalid_key(scheme.name(), e))?;
    value.set_sensitive(true);
    headers.insert(HeaderName::from_static(scheme.header()), value);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::{API_KEY_AUTH, APP_KEY_AUTH};

    #[test]
    fn insert() -> anyhow::Result<()> {
        let mut headers = HeaderMap::new();
        insert_key(&mut headers, &API_KEY_AUTH, "test-api-key")?;
        insert_key(&mut headers, &APP_KEY_AUTH, "test-app-key")?;
        assert_eq!(headers.len(), 2, "{headers:?}");
        let value = headers.get("dd-api-key");
        assert_eq!(value, Some(&HeaderValue::from_static("test-api-key")));
        assert!(value.is_some_and(HeaderValue::is_sensitive), "{value:?}");
        let value = headers.get("dd-application-key");
        assert_eq!(value, Some(&HeaderValue::from_static("test-app-key")));
        assert!(value.is_some_and(HeaderValue::is_sensitive), "{value:?}");
        Ok(())
    }

    #[test]
    fn insert_invalid() {
        let mut headers = HeaderMap::new();
        let got = insert_key(&mut headers, &API_KEY_AUTH, "bad\r\nkey");
        assert!(matches!(&got, Err(e) if !e.is_transient()), "{got:?}");
        assert!(headers.is_empty(), "{headers:?}");
    }
}
