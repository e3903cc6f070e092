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
#![allow(rustdoc::redundant_explicit_links)]
#![allow(rustdoc::broken_intra_doc_links)]

use crate::operations;
use gaxi::call::Call;
use gaxi::operation::Arguments;

/// Implements a client for the Datadog Monitors API.
///
/// # Example
/// ```no_run
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// # use datadog_api_v1::client::{GetMonitorOptionalParams, MonitorsApi};
/// let client = MonitorsApi::builder().build().await?;
/// let response = client
///     .get_monitor(12345, GetMonitorOptionalParams::default().set_group_states("all"))
///     .send()
///     .await?;
/// println!("{:?}", response.body());
/// # Ok::<(), Box<dyn std::error::Error>>(()) });
/// ```
///
/// # Service Description
///
/// Monitors allow you to watch a metric or check that you care about and
/// notifies your team when a defined threshold has exceeded.
///
/// # Configuration
///
/// To configure `MonitorsApi` use the `with_*` methods in the type returned
/// by [builder()][MonitorsApi::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_site()]: by default this client uses the `datadoghq.com` site,
///   or the site in the `DD_SITE` environment variable.
/// * [with_credentials()]: by default this client uses the keys in the
///   `DD_API_KEY` and `DD_APP_KEY` environment variables.
///
/// [with_site()]: gax::client_builder::ClientBuilder::with_site
/// [with_credentials()]: gax::client_builder::ClientBuilder::with_credentials
///
/// # Pooling and Cloning
///
/// `MonitorsApi` holds a connection pool internally, it is advised to create
/// one and the reuse it. You do not need to wrap `MonitorsApi` in an
/// [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
#[derive(Clone, Debug)]
pub struct MonitorsApi {
    inner: gaxi::http::ReqwestClient,
}

impl MonitorsApi {
    /// Returns a builder for [MonitorsApi].
    ///
    /// ```no_run
    /// # tokio::runtime::Runtime::new().unwrap().block_on(async {
    /// # use datadog_api_v1::client::MonitorsApi;
    /// let client = MonitorsApi::builder().build().await?;
    /// # Ok::<(), Box<dyn std::error::Error>>(()) });
    /// ```
    pub fn builder() -> super::builder::monitors_api::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::monitors_api::client::Factory)
    }

    pub(crate) async fn new(
        config: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        let inner = gaxi::http::ReqwestClient::new(config, &crate::info::USER_AGENT).await?;
        Ok(Self { inner })
    }

    /// Check if the given monitors can be deleted.
    ///
    /// If some of the monitors are used elsewhere the service returns a
    /// `409 Conflict` error, the details are available via
    /// [Error::error_model][gax::error::Error::error_model] as a
    /// [CheckCanDeleteMonitorResponse][crate::model::CheckCanDeleteMonitorResponse].
    pub fn check_can_delete_monitor(
        &self,
        monitor_ids: Vec<i64>,
    ) -> super::builder::monitors_api::CheckCanDeleteMonitor {
        let arguments = Arguments::new().with("monitor_ids", &monitor_ids);
        Call::new(
            self.inner.clone(),
            &operations::monitors_api::CHECK_CAN_DELETE_MONITOR,
            arguments,
        )
    }

    /// Create a monitor using the specified options.
    pub fn create_monitor(
        &self,
        body: crate::model::Monitor,
    ) -> super::builder::monitors_api::CreateMonitor {
        Call::new(
            self.inner.clone(),
            &operations::monitors_api::CREATE_MONITOR,
            Arguments::new(),
        )
        .with_body(body)
    }

    /// Delete the specified monitor.
    pub fn delete_monitor(
        &self,
        monitor_id: i64,
        params: DeleteMonitorOptionalParams,
    ) -> super::builder::monitors_api::DeleteMonitor {
        let arguments = Arguments::new()
            .with("monitor_id", &monitor_id)
            .with("force", &params.force);
        Call::new(
            self.inner.clone(),
            &operations::monitors_api::DELETE_MONITOR,
            arguments,
        )
    }

    /// Get details about the specified monitor from your organization.
    pub fn get_monitor(
        &self,
        monitor_id: i64,
        params: GetMonitorOptionalParams,
    ) -> super::builder::monitors_api::GetMonitor {
        let arguments = Arguments::new()
            .with("monitor_id", &monitor_id)
            .with("group_states", &params.group_states);
        Call::new(
            self.inner.clone(),
            &operations::monitors_api::GET_MONITOR,
            arguments,
        )
    }

    /// Get details about the specified monitors from your organization.
    pub fn list_monitors(
        &self,
        params: ListMonitorsOptionalParams,
    ) -> super::builder::monitors_api::ListMonitors {
        let arguments = Arguments::new()
            .with("group_states", &params.group_states)
            .with("name", &params.name)
            .with("tags", &params.tags)
            .with("monitor_tags", &params.monitor_tags)
            .with("with_downtimes", &params.with_downtimes)
            .with("id_offset", &params.id_offset)
            .with("page", &params.page)
            .with("page_size", &params.page_size);
        Call::new(
            self.inner.clone(),
            &operations::monitors_api::LIST_MONITORS,
            arguments,
        )
    }

    /// Search and filter your monitor groups details.
    pub fn search_monitor_groups(
        &self,
        params: SearchMonitorGroupsOptionalParams,
    ) -> super::builder::monitors_api::SearchMonitorGroups {
        let arguments = Arguments::new()
            .with("query", &params.query)
            .with("page", &params.page)
            .with("per_page", &params.per_page)
            .with("sort", &params.sort);
        Call::new(
            self.inner.clone(),
            &operations::monitors_api::SEARCH_MONITOR_GROUPS,
            arguments,
        )
    }

    /// Search and filter your monitors details.
    pub fn search_monitors(
        &self,
        params: SearchMonitorsOptionalParams,
    ) -> super::builder::monitors_api::SearchMonitors {
        let arguments = Arguments::new()
            .with("query", &params.query)
            .with("page", &params.page)
            .with("per_page", &params.per_page)
            .with("sort", &params.sort);
        Call::new(
            self.inner.clone(),
            &operations::monitors_api::SEARCH_MONITORS,
            arguments,
        )
    }

    /// Edit the specified monitor.
    pub fn update_monitor(
        &self,
        monitor_id: i64,
        body: crate::model::MonitorUpdateRequest,
    ) -> super::builder::monitors_api::UpdateMonitor {
        Call::new(
            self.inner.clone(),
            &operations::monitors_api::UPDATE_MONITOR,
            Arguments::new().with("monitor_id", &monitor_id),
        )
        .with_body(body)
    }

    /// Validate the monitor provided in the request.
    ///
    /// The response payload has no fixed schema, it is returned as a JSON
    /// value.
    pub fn validate_existing_monitor(
        &self,
        monitor_id: i64,
        body: crate::model::Monitor,
    ) -> super::builder::monitors_api::ValidateExistingMonitor {
        Call::new(
            self.inner.clone(),
            &operations::monitors_api::VALIDATE_EXISTING_MONITOR,
            Arguments::new().with("monitor_id", &monitor_id),
        )
        .with_body(body)
    }

    /// Validate the monitor provided in the request.
    pub fn validate_monitor(
        &self,
        body: crate::model::Monitor,
    ) -> super::builder::monitors_api::ValidateMonitor {
        Call::new(
            self.inner.clone(),
            &operations::monitors_api::VALIDATE_MONITOR,
            Arguments::new(),
        )
        .with_body(body)
    }
}

/// The optional parameters for [MonitorsApi::delete_monitor].
#[derive(Clone, Debug, Default)]
#[non_exhaustive]
pub struct DeleteMonitorOptionalParams {
    /// Delete the monitor even if it's referenced by other resources, for
    /// example an SLO or a composite monitor.
    pub force: Option<String>,
}

impl DeleteMonitorOptionalParams {
    /// Sets the value of [force][DeleteMonitorOptionalParams::force].
    pub fn set_force<T: Into<String>>(mut self, v: T) -> Self {
        self.force = Some(v.into());
        self
    }
}

/// The optional parameters for [MonitorsApi::get_monitor].
#[derive(Clone, Debug, Default)]
#[non_exhaustive]
pub struct GetMonitorOptionalParams {
    /// When specified, shows additional information about the group states.
    /// Choose one or more from `all`, `alert`, `warn`, and `no data`.
    pub group_states: Option<String>,
}

impl GetMonitorOptionalParams {
    /// Sets the value of [group_states][GetMonitorOptionalParams::group_states].
    pub fn set_group_states<T: Into<String>>(mut self, v: T) -> Self {
        self.group_states = Some(v.into());
        self
    }
}

/// The optional parameters for [MonitorsApi::list_monitors].
#[derive(Clone, Debug, Default)]
#[non_exhaustive]
pub struct ListMonitorsOptionalParams {
    /// When specified, shows additional information about the group states.
    pub group_states: Option<String>,
    /// A string to filter monitors by name.
    pub name: Option<String>,
    /// A comma separated list indicating what tags, if any, should be used to
    /// filter the list of monitors by scope.
    pub tags: Option<String>,
    /// A comma separated list indicating what service and/or custom tags, if
    /// any, should be used to filter the list of monitors.
    pub monitor_tags: Option<String>,
    /// If this argument is set to true, then the returned data includes all
    /// current active downtimes for each monitor.
    pub with_downtimes: Option<bool>,
    /// Use this parameter for paginating through large sets of monitors.
    pub id_offset: Option<i64>,
    /// The page to start paginating from.
    pub page: Option<i64>,
    /// The number of monitors to return per page.
    pub page_size: Option<i32>,
}

impl ListMonitorsOptionalParams {
    /// Sets the value of [group_states][ListMonitorsOptionalParams::group_states].
    pub fn set_group_states<T: Into<String>>(mut self, v: T) -> Self {
        self.group_states = Some(v.into());
        self
    }

    /// Sets the value of [name][ListMonitorsOptionalParams::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [tags][ListMonitorsOptionalParams::tags].
    pub fn set_tags<T: Into<String>>(mut self, v: T) -> Self {
        self.tags = Some(v.into());
        self
    }

    /// Sets the value of [monitor_tags][ListMonitorsOptionalParams::monitor_tags].
    pub fn set_monitor_tags<T: Into<String>>(mut self, v: T) -> Self {
        self.monitor_tags = Some(v.into());
        self
    }

    /// Sets the value of [with_downtimes][ListMonitorsOptionalParams::with_downtimes].
    pub fn set_with_downtimes<T: Into<bool>>(mut self, v: T) -> Self {
        self.with_downtimes = Some(v.into());
        self
    }

    /// Sets the value of [id_offset][ListMonitorsOptionalParams::id_offset].
    pub fn set_id_offset<T: Into<i64>>(mut self, v: T) -> Self {
        self.id_offset = Some(v.into());
        self
    }

    /// Sets the value of [page][ListMonitorsOptionalParams::page].
    pub fn set_page<T: Into<i64>>(mut self, v: T) -> Self {
        self.page = Some(v.into());
        self
    }

    /// Sets the value of [page_size][ListMonitorsOptionalParams::page_size].
    pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
        self.page_size = Some(v.into());
        self
    }
}

/// The optional parameters for [MonitorsApi::search_monitor_groups].
#[derive(Clone, Debug, Default)]
#[non_exhaustive]
pub struct SearchMonitorGroupsOptionalParams {
    /// After entering a search query in your Manage Monitor page use the
    /// query parameter value in the URL of the page as value for this
    /// parameter.
    pub query: Option<String>,
    /// Page to start paginating from.
    pub page: Option<i64>,
    /// Number of monitors to return per page.
    pub per_page: Option<i64>,
    /// String for sort order, composed of field and sort order separate by a
    /// comma, for example `name,asc`.
    pub sort: Option<String>,
}

impl SearchMonitorGroupsOptionalParams {
    /// Sets the value of [query][SearchMonitorGroupsOptionalParams::query].
    pub fn set_query<T: Into<String>>(mut self, v: T) -> Self {
        self.query = Some(v.into());
        self
    }

    /// Sets the value of [page][SearchMonitorGroupsOptionalParams::page].
    pub fn set_page<T: Into<i64>>(mut self, v: T) -> Self {
        self.page = Some(v.into());
        self
    }

    /// Sets the value of [per_page][SearchMonitorGroupsOptionalParams::per_page].
    pub fn set_per_page<T: Into<i64>>(mut self, v: T) -> Self {
        self.per_page = Some(v.into());
        self
    }

    /// Sets the value of [sort][SearchMonitorGroupsOptionalParams::sort].
    pub fn set_sort<T: Into<String>>(mut self, v: T) -> Self {
        self.sort = Some(v.into());
        self
    }
}

/// The optional parameters for [MonitorsApi::search_monitors].
#[derive(Clone, Debug, Default)]
#[non_exhaustive]
pub struct SearchMonitorsOptionalParams {
    /// After entering a search query in your Manage Monitor page use the
    /// query parameter value in the URL of the page as value for this
    /// parameter.
    pub query: Option<String>,
    /// Page to start paginating from.
    pub page: Option<i64>,
    /// Number of monitors to return per page.
    pub per_page: Option<i64>,
    /// String for sort order, composed of field and sort order separate by a
    /// comma, for example `name,asc`.
    pub sort: Option<String>,
}

impl SearchMonitorsOptionalParams {
    /// Sets the value of [query][SearchMonitorsOptionalParams::query].
    pub fn set_query<T: Into<String>>(mut self, v: T) -> Self {
        self.query = Some(v.into());
        self
    }

    /// Sets the value of [page][SearchMonitorsOptionalParams::page].
    pub fn set_page<T: Into<i64>>(mut self, v: T) -> Self {
        self.page = Some(v.into());
        self
    }

    /// Sets the value of [per_page][SearchMonitorsOptionalParams::per_page].
    pub fn set_per_page<T: Into<i64>>(mut self, v: T) -> Self {
        self.per_page = Some(v.into());
        self
    }

    /// Sets the value of [sort][SearchMonitorsOptionalParams::sort].
    pub fn set_sort<T: Into<String>>(mut self, v: T) -> Self {
        self.sort = Some(v.into());
        self
    }
}

/// Implements a client for the Datadog Dashboard Lists API.
///
/// # Example
/// ```no_run
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// # use datadog_api_v1::client::DashboardListsApi;
/// # use datadog_api_v1::model::DashboardList;
/// let client = DashboardListsApi::builder().build().await?;
/// let response = client
///     .create_dashboard_list(DashboardList::new().set_name("My Dashboard List"))
///     .send()
///     .await?;
/// println!("{:?}", response.body());
/// # Ok::<(), Box<dyn std::error::Error>>(()) });
/// ```
///
/// # Service Description
///
/// Interact with your dashboard lists through the API to organize, find, and
/// share all of your dashboards with your team and organization.
///
/// # Pooling and Cloning
///
/// `DashboardListsApi` holds a connection pool internally, it is advised to
/// create one and the reuse it.
#[derive(Clone, Debug)]
pub struct DashboardListsApi {
    inner: gaxi::http::ReqwestClient,
}

impl DashboardListsApi {
    /// Returns a builder for [DashboardListsApi].
    pub fn builder() -> super::builder::dashboard_lists_api::ClientBuilder {
        gax::client_builder::internal::new_builder(
            super::builder::dashboard_lists_api::client::Factory,
        )
    }

    pub(crate) async fn new(
        config: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        let inner = gaxi::http::ReqwestClient::new(config, &crate::info::USER_AGENT).await?;
        Ok(Self { inner })
    }

    /// Create an empty dashboard list.
    pub fn create_dashboard_list(
        &self,
        body: crate::model::DashboardList,
    ) -> super::builder::dashboard_lists_api::CreateDashboardList {
        Call::new(
            self.inner.clone(),
            &operations::dashboard_lists_api::CREATE_DASHBOARD_LIST,
            Arguments::new(),
        )
        .with_body(body)
    }

    /// Delete a dashboard list.
    pub fn delete_dashboard_list(
        &self,
        list_id: i64,
    ) -> super::builder::dashboard_lists_api::DeleteDashboardList {
        Call::new(
            self.inner.clone(),
            &operations::dashboard_lists_api::DELETE_DASHBOARD_LIST,
            Arguments::new().with("list_id", &list_id),
        )
    }

    /// Fetch an existing dashboard list's definition.
    pub fn get_dashboard_list(
        &self,
        list_id: i64,
    ) -> super::builder::dashboard_lists_api::GetDashboardList {
        Call::new(
            self.inner.clone(),
            &operations::dashboard_lists_api::GET_DASHBOARD_LIST,
            Arguments::new().with("list_id", &list_id),
        )
    }

    /// Fetch all of your existing dashboard list definitions.
    pub fn list_dashboard_lists(&self) -> super::builder::dashboard_lists_api::ListDashboardLists {
        Call::new(
            self.inner.clone(),
            &operations::dashboard_lists_api::LIST_DASHBOARD_LISTS,
            Arguments::new(),
        )
    }

    /// Update the name of a dashboard list.
    pub fn update_dashboard_list(
        &self,
        list_id: i64,
        body: crate::model::DashboardList,
    ) -> super::builder::dashboard_lists_api::UpdateDashboardList {
        Call::new(
            self.inner.clone(),
            &operations::dashboard_lists_api::UPDATE_DASHBOARD_LIST,
            Arguments::new().with("list_id", &list_id),
        )
        .with_body(body)
    }
}

/// Implements a client for the Datadog Logs Pipelines API.
///
/// # Service Description
///
/// Pipelines and processors operate on incoming logs, parsing and
/// transforming them into structured attributes for easier querying.
#[derive(Clone, Debug)]
pub struct LogsPipelinesApi {
    inner: gaxi::http::ReqwestClient,
}

impl LogsPipelinesApi {
    /// Returns a builder for [LogsPipelinesApi].
    pub fn builder() -> super::builder::logs_pipelines_api::ClientBuilder {
        gax::client_builder::internal::new_builder(
            super::builder::logs_pipelines_api::client::Factory,
        )
    }

    pub(crate) async fn new(
        config: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        let inner = gaxi::http::ReqwestClient::new(config, &crate::info::USER_AGENT).await?;
        Ok(Self { inner })
    }

    /// Get the current order of your pipelines.
    pub fn get_logs_pipeline_order(
        &self,
    ) -> super::builder::logs_pipelines_api::GetLogsPipelineOrder {
        Call::new(
            self.inner.clone(),
            &operations::logs_pipelines_api::GET_LOGS_PIPELINE_ORDER,
            Arguments::new(),
        )
    }

    /// Update the order of your pipelines.
    ///
    /// Logs are processed sequentially, reordering a pipeline may change the
    /// structure and content of the data processed by other pipelines. Invalid
    /// orders are rejected with a `422 Unprocessable Entity` error, the
    /// details are available as a
    /// [LogsApiErrorResponse][crate::model::LogsApiErrorResponse].
    pub fn update_logs_pipeline_order(
        &self,
        body: crate::model::LogsPipelinesOrder,
    ) -> super::builder::logs_pipelines_api::UpdateLogsPipelineOrder {
        Call::new(
            self.inner.clone(),
            &operations::logs_pipelines_api::UPDATE_LOGS_PIPELINE_ORDER,
            Arguments::new(),
        )
        .with_body(body)
    }
}
