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

//! Errors created during credentials construction.

/// The error type for [Credentials] builders.
///
/// Applications rarely need to create instances of this error type. The
/// exception might be when testing application code, where the application is
/// mocking a client library behavior.
///
/// [Credentials]: super::credentials::Credentials
#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub struct Error(ErrorKind);

impl Error {
    /// None of the keys were found in the environment.
    pub fn is_missing_keys(&self) -> bool {
        matches!(self.0, ErrorKind::MissingKeys(_))
    }

    /// A key was found, but it is empty.
    pub fn is_empty_key(&self) -> bool {
        matches!(self.0, ErrorKind::EmptyKey(_))
    }

    pub(crate) fn missing_keys(variables: &'static str) -> Error {
        Error(ErrorKind::MissingKeys(variables))
    }

    pub(crate) fn empty_key(variable: &'static str) -> Error {
        Error(ErrorKind::EmptyKey(variable))
    }
}

#[derive(thiserror::Error, Debug)]
enum ErrorKind {
    #[error("cannot find the Datadog keys, set at least one of {0}")]
    MissingKeys(&'static str),
    #[error("the environment variable {0} is set, but it is empty")]
    EmptyKey(&'static str),
}
