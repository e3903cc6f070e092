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

/// Operations in the Monitors API.
pub mod monitors_api {
    use super::*;

    pub static CHECK_CAN_DELETE_MONITOR: OperationDescriptor = OperationDescriptor {
        id: "v1.MonitorsApi.CheckCanDeleteMonitor",
        method: Method::GET,
        path: "/api/v1/monitor/can_delete",
        parameters: &[ParameterSpec::required_query("monitor_ids")],
        body: BodySpec::None,
        accept: APPLICATION_JSON,
        auth: AUTH,
        errors: &[
            ErrorRoute::new(&[400, 403, 429], decode_as::<ApiErrorResponse>),
            ErrorRoute::new(
                &[409],
                decode_as::<crate::model::CheckCanDeleteMonitorResponse>,
            ),
        ],
        success_payload: true,
    };

    pub static CREATE_MONITOR: OperationDescriptor = OperationDescriptor {
        id: "v1.MonitorsApi.CreateMonitor",
        method: Method::POST,
        path: "/api/v1/monitor",
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

    pub static DELETE_MONITOR: OperationDescriptor = OperationDescriptor {
        id: "v1.MonitorsApi.DeleteMonitor",
        method: Method::DELETE,
        path: "/api/v1/monitor/{monitor_id}",
        parameters: &[
            ParameterSpec::path("monitor_id"),
            ParameterSpec::query("force"),
        ],
        body: BodySpec::None,
        accept: APPLICATION_JSON,
        auth: AUTH,
        errors: &[ErrorRoute::new(
            &[400, 401, 403, 404, 429],
            decode_as::<ApiErrorResponse>,
        )],
        success_payload: true,
    };

    pub static GET_MONITOR: OperationDescriptor = OperationDescriptor {
        id: "v1.MonitorsApi.GetMonitor",
        method: Method::GET,
        path: "/api/v1/monitor/{monitor_id}",
        parameters: &[
            ParameterSpec::path("monitor_id"),
            ParameterSpec::query("group_states"),
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

    pub static LIST_MONITORS: OperationDescriptor = OperationDescriptor {
        id: "v1.MonitorsApi.ListMonitors",
        method: Method::GET,
        path: "/api/v1/monitor",
        parameters: &[
            ParameterSpec::query("group_states"),
            ParameterSpec::query("name"),
            ParameterSpec::query("tags"),
            ParameterSpec::query("monitor_tags"),
            ParameterSpec::query("with_downtimes"),
            ParameterSpec::query("id_offset"),
            ParameterSpec::query("page"),
            ParameterSpec::query("page_size"),
        ],
        body: BodySpec::None,
        accept: APPLICATION_JSON,
        auth: AUTH,
        errors: &[ErrorRoute::new(
            &[400, 403, 429],
            decode_as::<ApiErrorResponse>,
        )],
        success_payload: true,
    };

    pub static SEARCH_MONITOR_GROUPS: OperationDescriptor = OperationDescriptor {
        id: "v1.MonitorsApi.SearchMonitorGroups",
        method: Method::GET,
        path: "/api/v1/monitor/groups/search",
        parameters: SEARCH_PARAMETERS,
        body: BodySpec::None,
        accept: APPLICATION_JSON,
        auth: AUTH,
        errors: &[ErrorRoute::new(
            &[400, 403, 429],
            decode_as::<ApiErrorResponse>,
        )],
        success_payload: true,
    };

    pub static SEARCH_MONITORS: OperationDescriptor = OperationDescriptor {
        id: "v1.MonitorsApi.SearchMonitors",
        method: Method::GET,
        path: "/api/v1/monitor/search",
        parameters: SEARCH_PARAMETERS,
        body: BodySpec::None,
        accept: APPLICATION_JSON,
        auth: AUTH,
        errors: &[ErrorRoute::new(
            &[400, 403, 429],
            decode_as::<ApiErrorResponse>,
        )],
        success_payload: true,
    };

    pub static UPDATE_MONITOR: OperationDescriptor = OperationDescriptor {
        id: "v1.MonitorsApi.UpdateMonitor",
        method: Method::PUT,
        path: "/api/v1/monitor/{monitor_id}",
        parameters: &[ParameterSpec::path("monitor_id")],
        body: BodySpec::Required,
        accept: APPLICATION_JSON,
        auth: AUTH,
        errors: &[ErrorRoute::new(
            &[400, 401, 403, 404, 429],
            decode_as::<ApiErrorResponse>,
        )],
        success_payload: true,
    };

    pub static VALIDATE_EXISTING_MONITOR: OperationDescriptor = OperationDescriptor {
        id: "v1.MonitorsApi.ValidateExistingMonitor",
        method: Method::POST,
        path: "/api/v1/monitor/{monitor_id}/validate",
        parameters: &[ParameterSpec::path("monitor_id")],
        body: BodySpec::Required,
        accept: APPLICATION_JSON,
        auth: AUTH,
        errors: &[ErrorRoute::new(
            &[400, 403, 429],
            decode_as::<ApiErrorResponse>,
        )],
        success_payload: true,
    };

    pub static VALIDATE_MONITOR: OperationDescriptor = OperationDescriptor {
        id: "v1.MonitorsApi.ValidateMonitor",
        method: Method::POST,
        path: "/api/v1/monitor/validate",
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

    const SEARCH_PARAMETERS: &[ParameterSpec] = &[
        ParameterSpec::query("query"),
        ParameterSpec::query("page"),
        ParameterSpec::query("per_page"),
        ParameterSpec::query("sort"),
    ];
}

/// Operations in the Dashboard Lists API.
pub mod dashboard_lists_api {
    use super::*;

    pub static CREATE_DASHBOARD_LIST: OperationDescriptor = OperationDescriptor {
        id: "v1.DashboardListsApi.CreateDashboardList",
        method: Method::POST,
        path: "/api/v1/dashboard/lists/manual",
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

    pub static DELETE_DASHBOARD_LIST: OperationDescriptor = OperationDescriptor {
        id: "v1.DashboardListsApi.DeleteDashboardList",
        method: Method::DELETE,
        path: "/api/v1/dashboard/lists/manual/{list_id}",
        parameters: &[ParameterSpec::path("list_id")],
        body: BodySpec::None,
        accept: APPLICATION_JSON,
        auth: AUTH,
        errors: &[ErrorRoute::new(
            &[403, 404, 429],
            decode_as::<ApiErrorResponse>,
        )],
        success_payload: true,
    };

    pub static GET_DASHBOARD_LIST: OperationDescriptor = OperationDescriptor {
        id: "v1.DashboardListsApi.GetDashboardList",
        method: Method::GET,
        path: "/api/v1/dashboard/lists/manual/{list_id}",
        parameters: &[ParameterSpec::path("list_id")],
        body: BodySpec::None,
        accept: APPLICATION_JSON,
        auth: AUTH,
        errors: &[ErrorRoute::new(
            &[403, 404, 429],
            decode_as::<ApiErrorResponse>,
        )],
        success_payload: true,
    };

    pub static LIST_DASHBOARD_LISTS: OperationDescriptor = OperationDescriptor {
        id: "v1.DashboardListsApi.ListDashboardLists",
        method: Method::GET,
        path: "/api/v1/dashboard/lists/manual",
        parameters: &[],
        body: BodySpec::None,
        accept: APPLICATION_JSON,
        auth: AUTH,
        errors: &[ErrorRoute::new(&[403, 429], decode_as::<ApiErrorResponse>)],
        success_payload: true,
    };

    pub static UPDATE_DASHBOARD_LIST: OperationDescriptor = OperationDescriptor {
        id: "v1.DashboardListsApi.UpdateDashboardList",
        method: Method::PUT,
        path: "/api/v1/dashboard/lists/manual/{list_id}",
        parameters: &[ParameterSpec::path("list_id")],
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

/// Operations in the Logs Pipelines API.
pub mod logs_pipelines_api {
    use super::*;

    pub static GET_LOGS_PIPELINE_ORDER: OperationDescriptor = OperationDescriptor {
        id: "v1.LogsPipelinesApi.GetLogsPipelineOrder",
        method: Method::GET,
        path: "/api/v1/logs/config/pipeline-order",
        parameters: &[],
        body: BodySpec::None,
        accept: APPLICATION_JSON,
        auth: AUTH,
        errors: &[ErrorRoute::new(&[403, 429], decode_as::<ApiErrorResponse>)],
        success_payload: true,
    };

    pub static UPDATE_LOGS_PIPELINE_ORDER: OperationDescriptor = OperationDescriptor {
        id: "v1.LogsPipelinesApi.UpdateLogsPipelineOrder",
        method: Method::PUT,
        path: "/api/v1/logs/config/pipeline-order",
        parameters: &[],
        body: BodySpec::Required,
        accept: APPLICATION_JSON,
        auth: AUTH,
        errors: &[
            ErrorRoute::new(&[400, 403, 429], decode_as::<ApiErrorResponse>),
            ErrorRoute::new(&[422], decode_as::<crate::model::LogsApiErrorResponse>),
        ],
        success_payload: true,
    };
}

/// All the operations in this crate.
pub static ALL: &[&OperationDescriptor] = &[
    &monitors_api::CHECK_CAN_DELETE_MONITOR,
    &monitors_api::CREATE_MONITOR,
    &monitors_api::DELETE_MONITOR,
    &monitors_api::GET_MONITOR,
    &monitors_api::LIST_MONITORS,
    &monitors_api::SEARCH_MONITOR_GROUPS,
    &monitors_api::SEARCH_MONITORS,
    &monitors_api::UPDATE_MONITOR,
    &monitors_api::VALIDATE_EXISTING_MONITOR,
    &monitors_api::VALIDATE_MONITOR,
    &dashboard_lists_api::CREATE_DASHBOARD_LIST,
    &dashboard_lists_api::DELETE_DASHBOARD_LIST,
    &dashboard_lists_api::GET_DASHBOARD_LIST,
    &dashboard_lists_api::LIST_DASHBOARD_LISTS,
    &dashboard_lists_api::UPDATE_DASHBOARD_LIST,
    &logs_pipelines_api::GET_LOGS_PIPELINE_ORDER,
    &logs_pipelines_api::UPDATE_LOGS_PIPELINE_ORDER,
];

lazy_static::lazy_static! {
    static ref BY_ID: HashMap<&'static str, &'static OperationDescriptor> =
        ALL.iter().map(|op| (op.id, *op)).collect();
}

/// Finds an operation by its id, for example `v1.MonitorsApi.GetMonitor`.
pub fn find(id: &str) -> Option<&'static OperationDescriptor> {
    BY_ID.get(id).copied()
}
