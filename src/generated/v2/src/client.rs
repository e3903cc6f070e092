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

/// Implements a client for the Datadog Roles API.
///
/// # Example
/// ```no_run
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// # use datadog_api_v2::client::RolesApi;
/// # use datadog_api_v2::model::*;
/// let client = RolesApi::builder().build().await?;
/// let body = RoleCreateRequest::new().set_data(
///     RoleCreateData::new()
///         .set_type(RolesType::Roles)
///         .set_attributes(RoleCreateAttributes::new().set_name("developers")),
/// );
/// let response = client.create_role(body).send().await?;
/// println!("{:?}", response.body());
/// # Ok::<(), Box<dyn std::error::Error>>(()) });
/// ```
///
/// # Service Description
///
/// The Roles API is used to create and manage Datadog roles, what global
/// permissions they grant, and which users belong to them.
///
/// # Configuration
///
/// To configure `RolesApi` use the `with_*` methods in the type returned
/// by [builder()][RolesApi::builder]. The default configuration should
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
/// `RolesApi` holds a connection pool internally, it is advised to create
/// one and the reuse it. You do not need to wrap `RolesApi` in an
/// [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
#[derive(Clone, Debug)]
pub struct RolesApi {
    inner: gaxi::http::ReqwestClient,
}

impl RolesApi {
    /// Returns a builder for [RolesApi].
    pub fn builder() -> super::builder::roles_api::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::roles_api::client::Factory)
    }

    pub(crate) async fn new(
        config: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        let inner = gaxi::http::ReqwestClient::new(config, &crate::info::USER_AGENT).await?;
        Ok(Self { inner })
    }

    /// Create a new role for your organization.
    pub fn create_role(
        &self,
        body: crate::model::RoleCreateRequest,
    ) -> super::builder::roles_api::CreateRole {
        Call::new(
            self.inner.clone(),
            &operations::roles_api::CREATE_ROLE,
            Arguments::new(),
        )
        .with_body(body)
    }

    /// Disables a role.
    ///
    /// The service replies with `204 No Content`.
    pub fn delete_role<T: Into<String>>(
        &self,
        role_id: T,
    ) -> super::builder::roles_api::DeleteRole {
        let role_id: String = role_id.into();
        Call::new(
            self.inner.clone(),
            &operations::roles_api::DELETE_ROLE,
            Arguments::new().with("role_id", &role_id),
        )
    }

    /// Get a role in the organization specified by the role's `role_id`.
    pub fn get_role<T: Into<String>>(&self, role_id: T) -> super::builder::roles_api::GetRole {
        let role_id: String = role_id.into();
        Call::new(
            self.inner.clone(),
            &operations::roles_api::GET_ROLE,
            Arguments::new().with("role_id", &role_id),
        )
    }

    /// Returns all roles, including their names and their unique identifiers.
    pub fn list_roles(
        &self,
        params: ListRolesOptionalParams,
    ) -> super::builder::roles_api::ListRoles {
        let arguments = Arguments::new()
            .with("page[size]", &params.page_size)
            .with("page[number]", &params.page_number)
            .with("sort", &params.sort)
            .with("filter", &params.filter)
            .with("filter[id]", &params.filter_id);
        Call::new(
            self.inner.clone(),
            &operations::roles_api::LIST_ROLES,
            arguments,
        )
    }
}

/// The optional parameters for [RolesApi::list_roles].
#[derive(Clone, Debug, Default)]
#[non_exhaustive]
pub struct ListRolesOptionalParams {
    /// Size for a given page. The maximum allowed value is 100.
    pub page_size: Option<i64>,
    /// Specific page number to return.
    pub page_number: Option<i64>,
    /// Sort roles depending on the given field. Sort order is ascending by
    /// default, the descending variants start with a `-`.
    pub sort: Option<crate::model::RolesSort>,
    /// Filter all roles by the given string.
    pub filter: Option<String>,
    /// Filter all roles by the given list of role IDs.
    pub filter_id: Option<String>,
}

impl ListRolesOptionalParams {
    /// Sets the value of [page_size][ListRolesOptionalParams::page_size].
    pub fn set_page_size<T: Into<i64>>(mut self, v: T) -> Self {
        self.page_size = Some(v.into());
        self
    }

    /// Sets the value of [page_number][ListRolesOptionalParams::page_number].
    pub fn set_page_number<T: Into<i64>>(mut self, v: T) -> Self {
        self.page_number = Some(v.into());
        self
    }

    /// Sets the value of [sort][ListRolesOptionalParams::sort].
    pub fn set_sort<T: Into<crate::model::RolesSort>>(mut self, v: T) -> Self {
        self.sort = Some(v.into());
        self
    }

    /// Sets the value of [filter][ListRolesOptionalParams::filter].
    pub fn set_filter<T: Into<String>>(mut self, v: T) -> Self {
        self.filter = Some(v.into());
        self
    }

    /// Sets the value of [filter_id][ListRolesOptionalParams::filter_id].
    pub fn set_filter_id<T: Into<String>>(mut self, v: T) -> Self {
        self.filter_id = Some(v.into());
        self
    }
}

/// Implements a client for the Datadog Key Management API.
///
/// # Service Description
///
/// Manage your Datadog API and application keys.
#[derive(Clone, Debug)]
pub struct KeyManagementApi {
    inner: gaxi::http::ReqwestClient,
}

impl KeyManagementApi {
    /// Returns a builder for [KeyManagementApi].
    pub fn builder() -> super::builder::key_management_api::ClientBuilder {
        gax::client_builder::internal::new_builder(
            super::builder::key_management_api::client::Factory,
        )
    }

    pub(crate) async fn new(
        config: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        let inner = gaxi::http::ReqwestClient::new(config, &crate::info::USER_AGENT).await?;
        Ok(Self { inner })
    }

    /// Delete an application key.
    ///
    /// The service replies with `204 No Content`.
    pub fn delete_application_key<T: Into<String>>(
        &self,
        app_key_id: T,
    ) -> super::builder::key_management_api::DeleteApplicationKey {
        let app_key_id: String = app_key_id.into();
        Call::new(
            self.inner.clone(),
            &operations::key_management_api::DELETE_APPLICATION_KEY,
            Arguments::new().with("app_key_id", &app_key_id),
        )
    }

    /// Get an application key owned by the current user.
    ///
    /// The response includes the full key, unlike the keys returned by
    /// [list_application_keys][KeyManagementApi::list_application_keys].
    pub fn get_current_user_application_key<T: Into<String>>(
        &self,
        app_key_id: T,
    ) -> super::builder::key_management_api::GetCurrentUserApplicationKey {
        let app_key_id: String = app_key_id.into();
        Call::new(
            self.inner.clone(),
            &operations::key_management_api::GET_CURRENT_USER_APPLICATION_KEY,
            Arguments::new().with("app_key_id", &app_key_id),
        )
    }

    /// List all application keys available for your org.
    pub fn list_application_keys(
        &self,
        params: ListApplicationKeysOptionalParams,
    ) -> super::builder::key_management_api::ListApplicationKeys {
        let arguments = Arguments::new()
            .with("page[size]", &params.page_size)
            .with("page[number]", &params.page_number)
            .with("sort", &params.sort)
            .with("filter", &params.filter)
            .with("filter[created_at][start]", &params.filter_created_at_start)
            .with("filter[created_at][end]", &params.filter_created_at_end)
            .with("include", &params.include);
        Call::new(
            self.inner.clone(),
            &operations::key_management_api::LIST_APPLICATION_KEYS,
            arguments,
        )
    }
}

/// The optional parameters for [KeyManagementApi::list_application_keys].
#[derive(Clone, Debug, Default)]
#[non_exhaustive]
pub struct ListApplicationKeysOptionalParams {
    /// Size for a given page. The maximum allowed value is 100.
    pub page_size: Option<i64>,
    /// Specific page number to return.
    pub page_number: Option<i64>,
    /// Application key attribute used to sort results.
    pub sort: Option<crate::model::ApplicationKeysSort>,
    /// Filter application keys by the specified string.
    pub filter: Option<String>,
    /// Only include application keys created on or after the specified date.
    pub filter_created_at_start: Option<String>,
    /// Only include application keys created on or before the specified date.
    pub filter_created_at_end: Option<String>,
    /// Resource path for related resources to include in the response. Only
    /// `owned_by` is supported.
    pub include: Option<String>,
}

impl ListApplicationKeysOptionalParams {
    /// Sets the value of [page_size][ListApplicationKeysOptionalParams::page_size].
    pub fn set_page_size<T: Into<i64>>(mut self, v: T) -> Self {
        self.page_size = Some(v.into());
        self
    }

    /// Sets the value of [page_number][ListApplicationKeysOptionalParams::page_number].
    pub fn set_page_number<T: Into<i64>>(mut self, v: T) -> Self {
        self.page_number = Some(v.into());
        self
    }

    /// Sets the value of [sort][ListApplicationKeysOptionalParams::sort].
    pub fn set_sort<T: Into<crate::model::ApplicationKeysSort>>(mut self, v: T) -> Self {
        self.sort = Some(v.into());
        self
    }

    /// Sets the value of [filter][ListApplicationKeysOptionalParams::filter].
    pub fn set_filter<T: Into<String>>(mut self, v: T) -> Self {
        self.filter = Some(v.into());
        self
    }

    /// Sets the value of [filter_created_at_start][ListApplicationKeysOptionalParams::filter_created_at_start].
    pub fn set_filter_created_at_start<T: Into<String>>(mut self, v: T) -> Self {
        self.filter_created_at_start = Some(v.into());
        self
    }

    /// Sets the value of [filter_created_at_end][ListApplicationKeysOptionalParams::filter_created_at_end].
    pub fn set_filter_created_at_end<T: Into<String>>(mut self, v: T) -> Self {
        self.filter_created_at_end = Some(v.into());
        self
    }

    /// Sets the value of [include][ListApplicationKeysOptionalParams::include].
    pub fn set_include<T: Into<String>>(mut self, v: T) -> Self {
        self.include = Some(v.into());
        self
    }
}

/// Implements a client for the Datadog Sensitive Data Scanner API.
///
/// # Service Description
///
/// Create, update, delete, and retrieve sensitive data scanner groups and
/// rules.
#[derive(Clone, Debug)]
pub struct SensitiveDataScannerApi {
    inner: gaxi::http::ReqwestClient,
}

impl SensitiveDataScannerApi {
    /// Returns a builder for [SensitiveDataScannerApi].
    pub fn builder() -> super::builder::sensitive_data_scanner_api::ClientBuilder {
        gax::client_builder::internal::new_builder(
            super::builder::sensitive_data_scanner_api::client::Factory,
        )
    }

    pub(crate) async fn new(
        config: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        let inner = gaxi::http::ReqwestClient::new(config, &crate::info::USER_AGENT).await?;
        Ok(Self { inner })
    }

    /// Delete a given rule.
    ///
    /// The request body is required, it carries the configuration version.
    pub fn delete_scanning_rule<T: Into<String>>(
        &self,
        rule_id: T,
        body: crate::model::SensitiveDataScannerRuleDeleteRequest,
    ) -> super::builder::sensitive_data_scanner_api::DeleteScanningRule {
        let rule_id: String = rule_id.into();
        Call::new(
            self.inner.clone(),
            &operations::sensitive_data_scanner_api::DELETE_SCANNING_RULE,
            Arguments::new().with("rule_id", &rule_id),
        )
        .with_body(body)
    }

    /// Update a scanning rule.
    ///
    /// The request body must not include a standard pattern relationship, as
    /// that relationship is non-editable. Trying to edit the regex attribute
    /// of a rule with a standard pattern relationship also returns an error.
    pub fn update_scanning_rule<T: Into<String>>(
        &self,
        rule_id: T,
        body: crate::model::SensitiveDataScannerRuleUpdateRequest,
    ) -> super::builder::sensitive_data_scanner_api::UpdateScanningRule {
        let rule_id: String = rule_id.into();
        Call::new(
            self.inner.clone(),
            &operations::sensitive_data_scanner_api::UPDATE_SCANNING_RULE,
            Arguments::new().with("rule_id", &rule_id),
        )
        .with_body(body)
    }
}

/// Implements a client for the Datadog Usage Metering API.
///
/// # Service Description
///
/// The usage metering API allows you to get hourly, daily, and monthly usage
/// across multiple facets of Datadog.
#[derive(Clone, Debug)]
pub struct UsageMeteringApi {
    inner: gaxi::http::ReqwestClient,
}

impl UsageMeteringApi {
    /// Returns a builder for [UsageMeteringApi].
    pub fn builder() -> super::builder::usage_metering_api::ClientBuilder {
        gax::client_builder::internal::new_builder(
            super::builder::usage_metering_api::client::Factory,
        )
    }

    pub(crate) async fn new(
        config: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        let inner = gaxi::http::ReqwestClient::new(config, &crate::info::USER_AGENT).await?;
        Ok(Self { inner })
    }

    /// Get hourly usage for application security.
    ///
    /// `start_hr` is the first hour of the range, the range includes the data
    /// for that hour. Timestamps are sent in RFC 3339 format with second
    /// precision.
    pub fn get_usage_application_security_monitoring(
        &self,
        start_hr: chrono::DateTime<chrono::Utc>,
        params: GetUsageApplicationSecurityMonitoringOptionalParams,
    ) -> super::builder::usage_metering_api::GetUsageApplicationSecurityMonitoring {
        let arguments = Arguments::new()
            .with("start_hr", &start_hr)
            .with("end_hr", &params.end_hr);
        Call::new(
            self.inner.clone(),
            &operations::usage_metering_api::GET_USAGE_APPLICATION_SECURITY_MONITORING,
            arguments,
        )
    }
}

/// The optional parameters for [UsageMeteringApi::get_usage_application_security_monitoring].
#[derive(Clone, Debug, Default)]
#[non_exhaustive]
pub struct GetUsageApplicationSecurityMonitoringOptionalParams {
    /// The end of the range, this hour is not included.
    pub end_hr: Option<chrono::DateTime<chrono::Utc>>,
}

impl GetUsageApplicationSecurityMonitoringOptionalParams {
    /// Sets the value of [end_hr][GetUsageApplicationSecurityMonitoringOptionalParams::end_hr].
    pub fn set_end_hr<T: Into<chrono::DateTime<chrono::Utc>>>(mut self, v: T) -> Self {
        self.end_hr = Some(v.into());
        self
    }
}

/// Implements a client for the Datadog Security Monitoring API.
///
/// # Service Description
///
/// Detection rules for generating signals and listing of generated signals.
/// Security filters control which logs are analyzed.
#[derive(Clone, Debug)]
pub struct SecurityMonitoringApi {
    inner: gaxi::http::ReqwestClient,
}

impl SecurityMonitoringApi {
    /// Returns a builder for [SecurityMonitoringApi].
    pub fn builder() -> super::builder::security_monitoring_api::ClientBuilder {
        gax::client_builder::internal::new_builder(
            super::builder::security_monitoring_api::client::Factory,
        )
    }

    pub(crate) async fn new(
        config: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        let inner = gaxi::http::ReqwestClient::new(config, &crate::info::USER_AGENT).await?;
        Ok(Self { inner })
    }

    /// Get the list of configured security filters with their definitions.
    pub fn list_security_filters(
        &self,
    ) -> super::builder::security_monitoring_api::ListSecurityFilters {
        Call::new(
            self.inner.clone(),
            &operations::security_monitoring_api::LIST_SECURITY_FILTERS,
            Arguments::new(),
        )
    }
}
