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

//! Telemetry header helpers.

/// Generated libraries create one static instance of this struct and use it
/// to initialize the `User-Agent` header value.
#[derive(Debug, PartialEq)]
pub struct UserAgent {
    pub name: &'static str,
    pub version: &'static str,
}

/// The product name used by all the generated libraries.
pub const CLIENT_NAME: &str = "datadog-api-client-rust";

mod build_info {
    // The file has been placed there by the build script.
    include!(concat!(env!("OUT_DIR"), "/build_env.rs"));
}

impl UserAgent {
    /// Format the struct as needed for the `User-Agent` header.
    ///
    /// The format is `{name}/{version} (rust {rustc}; os {os}; arch {arch})`.
    pub fn header_value(&self) -> String {
        format!(
            "{}/{} (rust {}; os {}; arch {})",
            self.name,
            self.version,
            build_info::RUSTC_VERSION,
            build_info::TARGET_OS,
            build_info::TARGET_ARCH
        )
    }

    /// The header value with an optional application prefix.
    pub fn with_prefix(&self, prefix: Option<&str>) -> String {
        match prefix {
            Some(p) if !p.is_empty() => format!("{p} {}", self.header_value()),
            _ => self.header_value(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_AGENT: UserAgent = UserAgent {
        name: CLIENT_NAME,
        version: "1.2.3",
    };

    #[test]
    fn format() {
        let got = TEST_AGENT.header_value();
        assert!(
            got.starts_with("datadog-api-client-rust/1.2.3 (rust "),
            "{got}"
        );
        assert!(
            got.contains(&format!("; os {};", std::env::consts::OS)),
            "{got}"
        );
        assert!(
            got.ends_with(&format!("; arch {})", std::env::consts::ARCH)),
            "{got}"
        );

        let rustc = got
            .split_once("(rust ")
            .and_then(|(_, rest)| rest.split_once(';'))
            .map(|(v, _)| v.to_string());
        let want = build_info::RUSTC_VERSION;
        assert!(
            rustc
                .as_ref()
                .is_some_and(|s| want.contains(s.as_str()) && !s.is_empty()),
            "mismatched rustc version {want} and {rustc:?}"
        );
    }

    #[test]
    fn platform_constants() {
        assert!(
            !build_info::RUSTC_VERSION.starts_with("rustc "),
            "{}",
            build_info::RUSTC_VERSION
        );
        assert_eq!(build_info::TARGET_OS, std::env::consts::OS);
        assert_eq!(build_info::TARGET_ARCH, std::env::consts::ARCH);
    }

    #[test]
    fn prefix() {
        let got = TEST_AGENT.with_prefix(Some("my-app/1.0"));
        assert!(
            got.starts_with("my-app/1.0 datadog-api-client-rust/1.2.3"),
            "{got}"
        );
        assert_eq!(TEST_AGENT.with_prefix(None), TEST_AGENT.header_value());
        assert_eq!(TEST_AGENT.with_prefix(Some("")), TEST_AGENT.header_value());
    }
}
