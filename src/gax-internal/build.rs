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

use std::path::PathBuf;

// Writes `build_env.rs` with the values reported in the `User-Agent` header:
// the compiler version and the target platform, as Cargo sees them.
fn main() {
    let out_dir = PathBuf::from(std::env::var_os("OUT_DIR").expect("OUT_DIR not specified"));
    let rustc = rustc_version::version().expect("Could not retrieve rustc version");
    let target_os = std::env::var("CARGO_CFG_TARGET_OS").unwrap_or_else(|_| "unknown".into());
    let target_arch = std::env::var("CARGO_CFG_TARGET_ARCH").unwrap_or_else(|_| "unknown".into());

    let contents = [
        ("RUSTC_VERSION", rustc.to_string()),
        ("TARGET_OS", target_os),
        ("TARGET_ARCH", target_arch),
    ]
    .iter()
    .map(|(name, value)| format!("pub(crate) const {name}: &str = {value:?};\n"))
    .collect::<String>();
    std::fs::write(out_dir.join("build_env.rs"), contents)
        .expect("Could not write the build environment");
    println!("cargo::rerun-if-changed=build.rs");
}
