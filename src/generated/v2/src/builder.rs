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


pub mod roles_api {
    use gaxi::call::Call;
    use gaxi::http::NoBody;

    /// A builder for [RolesApi][crate::client::RolesApi].
    ///
    /// ```
    /// # tokio::runtime::Runtime::new().unwrap().block_on(async {
    /// # use datadog_api_v2::*;
    /// # use builder::roles_api::ClientBuilder;
    /// # use client::RolesApi;
    /// let builder : ClientBuilder = RolesApi::builder();
    /// let client = builder
    ///     .with_site("datadoghq.eu")
    ///     .with_credentials(auth::credentials::anonymous::Builder::new().build())
    ///     .build().await?;
    /// # Ok::<(), Box<dyn std::error::Error>>(()) });
    /// ```
    pub type ClientBuilder =
        gax::client_builder::ClientBuilder<client::Factory, gaxi::options::Credentials>;

    pub(crate) mod client {
        use super::super::super::client::RolesApi;
        #[derive(Clone, Debug)]
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = RolesApi;
            type Credentials = gaxi::options::Credentials;
            async fn build(
                self,
                config: gaxi::options::ClientConfig,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    /// The request builder for [RolesApi::create_role][crate::client::RolesApi::create_role] calls.
    pub type CreateRole = Call<crate::model::RoleCreateRequest, crate::model::RoleResponse>;

    /// The request builder for [RolesApi::delete_role][crate::client::RolesApi::delete_role] calls.
    pub type DeleteRole = Call<NoBody, ()>;

    /// The request builder for [RolesApi::get_role][crate::client::RolesApi::get_role] calls.
    pub type GetRole = Call<NoBody, crate::model::RoleResponse>;

    /// The request builder for [RolesApi::list_roles][crate::client::RolesApi::list_roles] calls.
    pub type ListRoles = Call<NoBody, crate::model::RolesResponse>;
}

pub mod key_management_api {
    use gaxi::call::Call;
    use gaxi::http::NoBody;

    /// A builder for [KeyManagementApi][crate::client::KeyManagementApi].
    pub type ClientBuilder =
        gax::client_builder::ClientBuilder<client::Factory, gaxi::options::Credentials>;

    pub(crate) mod client {
        use super::super::super::client::KeyManagementApi;
        #[derive(Clone, Debug)]
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = KeyManagementApi;
            type Credentials = gaxi::options::Credentials;
            async fn build(
                self,
                config: gaxi::options::ClientConfig,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    /// The request builder for [KeyManagementApi::delete_application_key][crate::client::KeyManagementApi::delete_application_key] calls.
    pub type DeleteApplicationKey = Call<NoBody, ()>;

    /// The request builder for [KeyManagementApi::get_current_user_application_key][crate::client::KeyManagementApi::get_current_user_application_key] calls.
    pub type GetCurrentUserApplicationKey = Call<NoBody, crate::model::ApplicationKeyResponse>;

    /// The request builder for [KeyManagementApi::list_application_keys][crate::client::KeyManagementApi::list_application_keys] calls.
    pub type ListApplicationKeys = Call<NoBody, crate::model::ListApplicationKeysResponse>;
}

pub mod sensitive_data_scanner_api {
    use gaxi::call::Call;

    /// A builder for [SensitiveDataScannerApi][crate::client::SensitiveDataScannerApi].
    pub type ClientBuilder =
        gax::client_builder::ClientBuilder<client::Factory, gaxi::options::Credentials>;

    pub(crate) mod client {
        use super::super::super::client::SensitiveDataScannerApi;
        #[derive(Clone, Debug)]
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = SensitiveDataScannerApi;
            type Credentials = gaxi::options::Credentials;
            async fn build(
                self,
                config: gaxi::options::ClientConfig,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    /// The request builder for [SensitiveDataScannerApi::delete_scanning_rule][crate::client::SensitiveDataScannerApi::delete_scanning_rule] calls.
    pub type DeleteScanningRule = Call<
        crate::model::SensitiveDataScannerRuleDeleteRequest,
        crate::model::SensitiveDataScannerRuleDeleteResponse,
    >;

    /// The request builder for [SensitiveDataScannerApi::update_scanning_rule][crate::client::SensitiveDataScannerApi::update_scanning_rule] calls.
    pub type UpdateScanningRule = Call<
        crate::model::SensitiveDataScannerRuleUpdateRequest,
        crate::model::SensitiveDataScannerRuleUpdateResponse,
    >;
}

pub mod usage_metering_api {
    use gaxi::call::Call;
    use gaxi::http::NoBody;

    /// A builder for [UsageMeteringApi][crate::client::UsageMeteringApi].
    pub type ClientBuilder =
        gax::client_builder::ClientBuilder<client::Factory, gaxi::options::Credentials>;

    pub(crate) mod client {
        use super::super::super::client::UsageMeteringApi;
        #[derive(Clone, Debug)]
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = UsageMeteringApi;
            type Credentials = gaxi::options::Credentials;
            async fn build(
                self,
                config: gaxi::options::ClientConfig,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    /// The request builder for [UsageMeteringApi::get_usage_application_security_monitoring][crate::client::UsageMeteringApi::get_usage_application_security_monitoring] calls.
    pub type GetUsageApplicationSecurityMonitoring =
        Call<NoBody, crate::model::UsageApplicationSecurityMonitoringResponse>;
}

pub mod security_monitoring_api {
    use gaxi::call::Call;
    use gaxi::http::NoBody;

    /// A builder for [SecurityMonitoringApi][crate::client::SecurityMonitoringApi].
    pub type ClientBuilder =
        gax::client_builder::ClientBuilder<client::Factory, gaxi::options::Credentials>;

    pub(crate) mod client {
        use super::super::super::client::SecurityMonitoringApi;
        #[derive(Clone, Debug)]
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = SecurityMonitoringApi;
            type Credentials = gaxi::options::Credentials;
            async fn build(
                self,
                config: gaxi::options::ClientConfig,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    /// The request builder for [SecurityMonitoringApi::list_security_filters][crate::client::SecurityMonitoringApi::list_security_filters] calls.
    pub type ListSecurityFilters = Call<NoBody, crate::model::SecurityFiltersResponse>;
}
