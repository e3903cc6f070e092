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

pub mod monitors_api {
    use gaxi::call::Call;
    use gaxi::http::NoBody;

    /// A builder for [MonitorsApi][crate::client::MonitorsApi].
    ///
    /// ```
    /// # tokio::runtime::Runtime::new().unwrap().block_on(async {
    /// # use datadog_api_v1::*;
    /// # use builder::monitors_api::ClientBuilder;
    /// # use client::MonitorsApi;
    /// let builder : ClientBuilder = MonitorsApi::builder();
    /// let client = builder
    ///     .with_site("datadoghq.eu")
    ///     .with_credentials(auth::credentials::anonymous::Builder::new().build())
    ///     .build().await?;
    /// # Ok::<(), Box<dyn std::error::Error>>(()) });
    /// ```
    pub type ClientBuilder =
        gax::client_builder::ClientBuilder<client::Factory, gaxi::options::Credentials>;

    pub(crate) mod client {
        use super::super::super::client::MonitorsApi;
        #[derive(Clone, Debug)]
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = MonitorsApi;
            type Credentials = gaxi::options::Credentials;
            async fn build(
                self,
                config: gaxi::options::ClientConfig,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    /// The request builder for [MonitorsApi::check_can_delete_monitor][crate::client::MonitorsApi::check_can_delete_monitor] calls.
    pub type CheckCanDeleteMonitor = Call<NoBody, crate::model::CheckCanDeleteMonitorResponse>;

    /// The request builder for [MonitorsApi::create_monitor][crate::client::MonitorsApi::create_monitor] calls.
    pub type CreateMonitor = Call<crate::model::Monitor, crate::model::Monitor>;

    /// The request builder for [MonitorsApi::delete_monitor][crate::client::MonitorsApi::delete_monitor] calls.
    pub type DeleteMonitor = Call<NoBody, crate::model::DeletedMonitor>;

    /// The request builder for [MonitorsApi::get_monitor][crate::client::MonitorsApi::get_monitor] calls.
    pub type GetMonitor = Call<NoBody, crate::model::Monitor>;

    /// The request builder for [MonitorsApi::list_monitors][crate::client::MonitorsApi::list_monitors] calls.
    pub type ListMonitors = Call<NoBody, Vec<crate::model::Monitor>>;

    /// The request builder for [MonitorsApi::search_monitor_groups][crate::client::MonitorsApi::search_monitor_groups] calls.
    pub type SearchMonitorGroups = Call<NoBody, crate::model::MonitorGroupSearchResponse>;

    /// The request builder for [MonitorsApi::search_monitors][crate::client::MonitorsApi::search_monitors] calls.
    pub type SearchMonitors = Call<NoBody, crate::model::MonitorSearchResponse>;

    /// The request builder for [MonitorsApi::update_monitor][crate::client::MonitorsApi::update_monitor] calls.
    pub type UpdateMonitor = Call<crate::model::MonitorUpdateRequest, crate::model::Monitor>;

    /// The request builder for [MonitorsApi::validate_existing_monitor][crate::client::MonitorsApi::validate_existing_monitor] calls.
    pub type ValidateExistingMonitor = Call<crate::model::Monitor, serde_json::Value>;

    /// The request builder for [MonitorsApi::validate_monitor][crate::client::MonitorsApi::validate_monitor] calls.
    pub type ValidateMonitor = Call<crate::model::Monitor, serde_json::Value>;
}

pub mod dashboard_lists_api {
    use gaxi::call::Call;
    use gaxi::http::NoBody;

    /// A builder for [DashboardListsApi][crate::client::DashboardListsApi].
    ///
    /// ```
    /// # tokio::runtime::Runtime::new().unwrap().block_on(async {
    /// # use datadog_api_v1::*;
    /// # use builder::dashboard_lists_api::ClientBuilder;
    /// # use client::DashboardListsApi;
    /// let builder : ClientBuilder = DashboardListsApi::builder();
    /// let client = builder
    ///     .with_endpoint("https://api.us5.datadoghq.com")
    ///     .with_credentials(auth::credentials::anonymous::Builder::new().build())
    ///     .build().await?;
    /// # Ok::<(), Box<dyn std::error::Error>>(()) });
    /// ```
    pub type ClientBuilder =
        gax::client_builder::ClientBuilder<client::Factory, gaxi::options::Credentials>;

    pub(crate) mod client {
        use super::super::super::client::DashboardListsApi;
        #[derive(Clone, Debug)]
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = DashboardListsApi;
            type Credentials = gaxi::options::Credentials;
            async fn build(
                self,
                config: gaxi::options::ClientConfig,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    /// The request builder for [DashboardListsApi::create_dashboard_list][crate::client::DashboardListsApi::create_dashboard_list] calls.
    pub type CreateDashboardList = Call<crate::model::DashboardList, crate::model::DashboardList>;

    /// The request builder for [DashboardListsApi::delete_dashboard_list][crate::client::DashboardListsApi::delete_dashboard_list] calls.
    pub type DeleteDashboardList = Call<NoBody, crate::model::DashboardListDeleteResponse>;

    /// The request builder for [DashboardListsApi::get_dashboard_list][crate::client::DashboardListsApi::get_dashboard_list] calls.
    pub type GetDashboardList = Call<NoBody, crate::model::DashboardList>;

    /// The request builder for [DashboardListsApi::list_dashboard_lists][crate::client::DashboardListsApi::list_dashboard_lists] calls.
    pub type ListDashboardLists = Call<NoBody, crate::model::DashboardListListResponse>;

    /// The request builder for [DashboardListsApi::update_dashboard_list][crate::client::DashboardListsApi::update_dashboard_list] calls.
    pub type UpdateDashboardList = Call<crate::model::DashboardList, crate::model::DashboardList>;
}

pub mod logs_pipelines_api {
    use gaxi::call::Call;
    use gaxi::http::NoBody;

    /// A builder for [LogsPipelinesApi][crate::client::LogsPipelinesApi].
    pub type ClientBuilder =
        gax::client_builder::ClientBuilder<client::Factory, gaxi::options::Credentials>;

    pub(crate) mod client {
        use super::super::super::client::LogsPipelinesApi;
        #[derive(Clone, Debug)]
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = LogsPipelinesApi;
            type Credentials = gaxi::options::Credentials;
            async fn build(
                self,
                config: gaxi::options::ClientConfig,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    /// The request builder for [LogsPipelinesApi::get_logs_pipeline_order][crate::client::LogsPipelinesApi::get_logs_pipeline_order] calls.
    pub type GetLogsPipelineOrder = Call<NoBody, crate::model::LogsPipelinesOrder>;

    /// The request builder for [LogsPipelinesApi::update_logs_pipeline_order][crate::client::LogsPipelinesApi::update_logs_pipeline_order] calls.
    pub type UpdateLogsPipelineOrder =
        Call<crate::model::LogsPipelinesOrder, crate::model::LogsPipelinesOrder>;
}
