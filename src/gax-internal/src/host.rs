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

use gax::client_builder::Error as BuilderError;
use http::Uri;
use std::str::FromStr;

pub(crate) const SITE_VAR: &str = "DD_SITE";
pub(crate) const DEFAULT_SITE: &str = "datadoghq.com";

/// Calculate the base URL for requests.
///
/// An explicit endpoint wins. Otherwise the URL is `https://api.{site}`,
/// where the site is the configured one, the value of `DD_SITE`, or
/// `datadoghq.com`, in that order.
///
/// The result has no trailing slash.
pub(crate) fn endpoint(
    endpoint: Option<&str>,
    site: Option<&str>,
) -> gax::client_builder::Result<String> {
    let endpoint = match (endpoint, site) {
        (Some(e), _) => e.to_string(),
        (None, Some(s)) => format!("https://api.{s}"),
        (None, None) => {
            let site = std::env::var(SITE_VAR)
                .ok()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| DEFAULT_SITE.to_string());
            format!("https://api.{site}")
        }
    };
    let uri = Uri::from_str(&endpoint).map_err(BuilderError::transport)?;
    if uri.authority().is_none() {
        return Err(BuilderError::transport(format!(
            "missing authority in endpoint {endpoint}"
        )));
    }
    Ok(endpoint.trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use scoped_env::ScopedEnv;
    use test_case::test_case;

    #[test_case(Some("http://localhost:8080"), None, "http://localhost:8080"; "endpoint")]
    #[test_case(Some("http://localhost:8080/"), None, "http://localhost:8080"; "trailing slash")]
    #[test_case(Some("https://api.example.com"), Some("datadoghq.eu"), "https://api.example.com"; "endpoint wins")]
    #[test_case(None, Some("datadoghq.eu"), "https://api.datadoghq.eu"; "site")]
    #[test_case(None, Some("us3.datadoghq.com"), "https://api.us3.datadoghq.com"; "regional site")]
    #[serial_test::serial]
    fn configured(endpoint: Option<&str>, site: Option<&str>, want: &str) -> anyhow::Result<()> {
        let _e = ScopedEnv::set(SITE_VAR, "ddog-gov.com");
        let got = super::endpoint(endpoint, site)?;
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    #[serial_test::serial]
    fn from_env() -> anyhow::Result<()> {
        let _e = ScopedEnv::set(SITE_VAR, "datadoghq.eu");
        let got = endpoint(None, None)?;
        assert_eq!(got, "https://api.datadoghq.eu");
        Ok(())
    }

    #[test]
    #[serial_test::serial]
    fn default() -> anyhow::Result<()> {
        let _e = ScopedEnv::remove(SITE_VAR);
        let got = endpoint(None, None)?;
        assert_eq!(got, "https://api.datadoghq.com");

        let _e = ScopedEnv::set(SITE_VAR, "");
        let got = endpoint(None, None)?;
        assert_eq!(got, "https://api.datadoghq.com");
        Ok(())
    }

    #[test_case("not a url")]
    #[test_case("/api/v1")]
    fn invalid(input: &str) {
        let got = endpoint(Some(input), None);
        assert!(matches!(&got, Err(e) if e.is_transport()), "{got:?}");
    }
}
