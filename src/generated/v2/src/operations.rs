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


//! The operations implemented by the clients in this crate.
//!
//! Each operation is described by one [OperationDescriptor]. The clients in
//! [crate::client] look up the descriptor and pass it, with the arguments for
//! the call, to the request engine shared by all the clients.

use auth::credentials::{API_KEY_AUTH, APP_KEY_AUTH, AuthScheme};
use gax::error::ApiErrorResponse;
use gaxi::operation::{
    APPLICATION_JSON, BodySpec, ErrorRoute, OperationDescriptor, ParameterSpec, decode_as,
};
use http::Method;
use std::collections::HashMap;

const AUTH: &[AuthScheme] = &[API_KEY_AUTH, APP_KEY_AUTH];

/// The usage endpoints return timestamps in RFC 3339 format only when asked.
pub const APPLICATION_JSON_RFC3339: &str = "application/json;datetime-format=rfc3339";

/// Operations in the Roles API.
pub mod roles_api {
    use super::*;

    pub static CREATE_ROLE: OperationDescriptor = OperationDescriptor {
        id: "v2.RolesApi.CreateRole",
        method: Method::POST,
        path: "/api/v2/roles",
        parameters: &[],
        body: BodySpec::Required,
        accept: APPLICATION_JSON,
        auth: AUTH,
        errors: &[ErrorRoute::new(
            &[400, 403, 429],
            decode_as::<ApiErrorResponse>,
        )],
        success_payload: true,
    };

    pub static DELETE_ROLE: OperationDescriptor = OperationDescriptor {
        id: "v2.RolesApi.DeleteRole",
        method: Method::DELETE,
        path: "/api/v2/roles/{role_id}",
        parameters: &[ParameterSpec::path("role_id")],
        body: BodySpec::None,
        accept: APPLICATION_JSON,
        auth: AUTH,
        errors: &[ErrorRoute::new(
            &[403, 404, 429],
            decode_as::<ApiErrorResponse>,
        )],
        success_payload: false,
    };

    pub static GET_ROLE: OperationDescriptor = OperationDescriptor {
        id: "v2.RolesApi.GetRole",
        method: Method::GET,
        path: "/api/v2/roles/{role_id}",
        parameters: &[ParameterSpec::path("role_id")],
        body: BodySpec::None,
        accept: APPLICATION_JSON,
        auth: AUTH,
        errors: &[ErrorRoute::new(
            &[403, 404, 429],
            decode_as::<ApiErrorResponse>,
        )],
        success_payload: true,
    };

    pub static LIST_ROLES: OperationDescriptor = OperationDescriptor {
        id: "v2.RolesApi.ListRoles",
        method: Method::GET,
        path: "/api/v2/roles",
        parameters: &[
            ParameterSpec::query("page[size]"),
            ParameterSpec::query("page[number]"),
            ParameterSpec::query("sort"),
            ParameterSpec::query("filter"),
            ParameterSpec::query("filter[id]"),
        ],
        body: BodySpec::None,
        accept: APPLICATION_JSON,
        auth: AUTH,
        errors: &[ErrorRoute::new(&[403, 429], decode_as::<ApiErrorResponse>)],
        success_payload: true,
    };
}

/// Operations in the Key Management API.
pub mod key_management_api {
    use super::*;

    pub static DELETE_APPLICATION_KEY: OperationDescriptor = OperationDescriptor {
        id: "v2.KeyManagementApi.DeleteApplicationKey",
        method: Method::DELETE,
        path: "/api/v2/application_keys/{app_key_id}",
        parameters: &[ParameterSpec::path("app_key_id")],
        body: BodySpec::None,
        accept: APPLICATION_JSON,
        auth: AUTH,
        errors: &[ErrorRoute::new(
            &[403, 404, 429],
            decode_as::<ApiErrorResponse>,
        )],
        success_payload: false,
    };

    pub static GET_CURRENT_USER_APPLICATION_KEY: OperationDescriptor = OperationDescriptor {
        id: "v2.KeyManagementApi.GetCurrentUserApplicationKey",
        method: Method::GET,
        path: "/api/v2/current_user/application_keys/{app_key_id}",
        parameters: &[ParameterSpec::path("app_key_id")],
        body: BodySpec::None,
        accept: APPLICATION_JSON,
        auth: AUTH,
        errors: &[ErrorRoute::new(
            &[403, 404, 429],
            decode_as::<ApiErrorResponse>,
        )],
        success_payload: true,
    };

    pub static LIST_APPLICATION_KEYS: OperationDescriptor = OperationDescriptor {
        id: "v2.KeyManagementApi.ListApplicationKeys",
        method: Method::GET,
        path: "/api/v2/application_keys",
        parameters: &[
            ParameterSpec::query("page[size]"),
            ParameterSpec::query("page[number]"),
            ParameterSpec::query("sort"),
            ParameterSpec::query("filter"),
            ParameterSpec::query("filter[created_at][start]"),
            ParameterSpec::query("filter[created_at][end]"),
            ParameterSpec::query("include"),
        ],
        body: BodySpec::None,
        accept: APPLICATION_JSON,
        auth: AUTH,
        errors: &[ErrorRoute::new(
            &[400, 403, 404, 429],
            decode_as::<ApiErrorResponse>,
        )],
        success_payload: true,
    };
}

/// Operations in the Sensitive Data Scanner API.
pub mod sensitive_data_scanner_api {
    use super::*;

    pub static DELETE_SCANNING_RULE: OperationDescriptor = OperationDescriptor {
        id: "v2.SensitiveDataScannerApi.DeleteScanningRule",
        method: Method::DELETE,
        path: "/api/v2/sensitive-data-scanner/config/rules/{rule_id}",
        parameters: &[ParameterSpec::path("rule_id")],
        body: BodySpec::Required,
        accept: APPLICATION_JSON,
        auth: AUTH,
        errors: &[ErrorRoute::new(
            &[400, 403, 404, 429],
            decode_as::<ApiErrorResponse>,
        )],
        success_payload: true,
    };

    pub static UPDATE_SCANNING_RULE: OperationDescriptor = OperationDescriptor {
        id: "v2.SensitiveDataScannerApi.UpdateScanningRule",
        method: Method::PATCH,
        path: "/api/v2/sensitive-data-scanner/config/rules/{rule_id}",
        parameters: &[ParameterSpec::path("rule_id")],
        body: BodySpec::Required,
        accept: APPLICATION_JSON,
        auth: AUTH,
        errors: &[ErrorRoute::new(
            &[400, 403, 404, 429],
            decode_as::<ApiErrorResponse>,
        )],
        success_payload: true,
    };
}

/// Operations in the Usage Metering API.
pub mod usage_metering_api {
    use super::*;

    pub static GET_USAGE_APPLICATION_SECURITY_MONITORING: OperationDescriptor =
        OperationDescriptor {
            id: "v2.UsageMeteringApi.GetUsageApplicationSecurityMonitoring",
            method: Method::GET,
            path: "/api/v2/usage/application_security",
            parameters: &[
                ParameterSpec::required_query("start_hr"),
                ParameterSpec::query("end_hr"),
            ],
            body: BodySpec::None,
            accept: APPLICATION_JSON_RFC3339,
            auth: AUTH,
            errors: &[ErrorRoute::new(
                &[400, 403, 429],
                decode_as::<ApiErrorResponse>,
            )],
            success_payload: true,
        };
}

/// Operations in the Security Monitoring API.
pub mod security_monitoring_api {
    use super::*;

    pub static LIST_SECURITY_FILTERS: OperationDescriptor = OperationDescriptor {
        id: "v2.SecurityMonitoringApi.ListSecurityFilters",
        method: Method::GET,
        path: "/api/v2/security_monitoring/configuration/security_filters",
        parameters: &[],
        body: BodySpec::None,
        accept: APPLICATION_JSON,
        auth: AUTH,
        errors: &[ErrorRoute::new(&[403, 429], decode_as::<ApiErrorResponse>)],
        success_payload: true,
    };
}

/// All the operations in this crate.
pub static ALL: &[&OperationDescriptor] = &[
    &roles_api::CREATE_ROLE,
    &roles_api::DELETE_ROLE,
    &roles_api::GET_ROLE,
    &roles_api::LIST_ROLES,
    &key_management_api::DELETE_APPLICATION_KEY,
    &key_management_api::GET_CURRENT_USER_APPLICATION_KEY,
    &key_management_api::LIST_APPLICATION_KEYS,
    &sensitive_data_scanner_api::DELETE_SCANNING_RULE,
    &sensitive_data_scanner_api::UPDATE_SCANNING_RULE,
    &usage_metering_api::GET_USAGE_APPLICATION_SECURITY_MONITORING,
    &security_monitoring_api::LIST_SECURITY_FILTERS,
];

lazy_static::lazy_static! {
    static ref BY_ID: HashMap<&'static str, &'static OperationDescriptor> =
        ALL.iter().map(|op| (op.id, *op)).collect();
}

/// Finds an operation by its id, for example `v2.RolesApi.GetRole`.
pub fn find(id: &str) -> Option<&'static OperationDescriptor> {
    BY_ID.get(id).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use test_case::test_case;

    #[test]
    fn ids_are_unique() {
        let ids = ALL.iter().map(|op| op.id).collect::<HashSet<_>>();
        assert_eq!(ids.len(), ALL.len());
        assert!(ALL.iter().all(|op| op.id.starts_with("v2.")));
    }

    #[test_case("v2.RolesApi.CreateRole", "/api/v2/roles")]
    #[test_case(
        "v2.KeyManagementApi.GetCurrentUserApplicationKey",
        "/api/v2/current_user/application_keys/{app_key_id}"
    )]
    #[test_case(
        "v2.SecurityMonitoringApi.ListSecurityFilters",
        "/api/v2/security_monitoring/configuration/security_filters"
    )]
    fn find_operation(id: &str, path: &str) {
        assert_eq!(find(id).map(|op| op.path), Some(path));
    }

    #[test]
    fn find_unknown() {
        assert!(find("v1.MonitorsApi.GetMonitor").is_none());
    }

    #[test]
    fn no_content_operations() {
        assert!(!roles_api::DELETE_ROLE.success_payload);
        assert!(!key_management_api::DELETE_APPLICATION_KEY.success_payload);
        assert!(sensitive_data_scanner_api::DELETE_SCANNING_RULE.success_payload);
    }

    #[test]
    fn usage_accept_header() {
        let op = &usage_metering_api::GET_USAGE_APPLICATION_SECURITY_MONITORING;
        assert_eq!(op.accept, "application/json;datetime-format=rfc3339");
        assert!(op.parameter("start_hr").is_some_and(|p| p.required));
        assert!(op.parameter("end_hr").is_some_and(|p| !p.required));
    }

    #[test]
    fn path_parameters_are_declared() {
        for op in ALL {
            for segment in op.path.split('/') {
                let Some(name) = segment.strip_prefix('{').and_then(|s| s.strip_suffix('}'))
                else {
                    continue;
                };
                assert!(
                    op.parameter(name).is_some_and(|s| s.required),
                    "{} is missing required parameter {name}",
                    op.id
                );
            }
        }
    }
}
