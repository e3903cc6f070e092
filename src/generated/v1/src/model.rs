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

mod debug;

use std::collections::HashMap;

/// Object describing a monitor.
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct Monitor {
    /// ID of this monitor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// The monitor name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// A message to include with notifications for this monitor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// The monitor query.
    pub query: String,

    /// The type of the monitor.
    #[serde(rename = "type")]
    pub r#type: MonitorType,

    /// Tags associated to your monitor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    /// Integer from 1 (high) to 5 (low) indicating alert severity.
    #[serde(default, skip_serializing_if = "wkt::Nullable::is_unset")]
    pub priority: wkt::Nullable<i64>,

    /// The monitor options.
    ///
    /// The set of options grows with each new monitor type, if the options
    /// cannot be decoded they are kept as raw JSON.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<wkt::Decoded<MonitorOptions>>,

    /// The current state of the monitor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overall_state: Option<MonitorOverallStates>,

    /// Whether or not the monitor is broken down on different groups.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multi: Option<bool>,

    /// Timestamp of the monitor creation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<chrono::DateTime<chrono::Utc>>,

    /// Last timestamp when the monitor was edited.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified: Option<chrono::DateTime<chrono::Utc>>,

    /// Whether or not the monitor is deleted, `null` if it is not.
    #[serde(default, skip_serializing_if = "wkt::Nullable::is_unset")]
    pub deleted: wkt::Nullable<chrono::DateTime<chrono::Utc>>,

    /// The roles allowed to edit the monitor, `null` if all roles can.
    #[serde(default, skip_serializing_if = "wkt::Nullable::is_unset")]
    pub restricted_roles: wkt::Nullable<Vec<String>>,

    #[serde(flatten)]
    pub _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl Monitor {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [id][crate::model::Monitor::id].
    pub fn set_id<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.id = Some(v.into());
        self
    }

    /// Sets the value of [name][crate::model::Monitor::name].
    pub fn set_name<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets or clears the value of [name][crate::model::Monitor::name].
    pub fn set_or_clear_name<T: std::convert::Into<String>>(mut self, v: Option<T>) -> Self {
        self.name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [message][crate::model::Monitor::message].
    pub fn set_message<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.message = Some(v.into());
        self
    }

    /// Sets the value of [query][crate::model::Monitor::query].
    pub fn set_query<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.query = v.into();
        self
    }

    /// Sets the value of [r#type][crate::model::Monitor::type].
    pub fn set_type<T: std::convert::Into<MonitorType>>(mut self, v: T) -> Self {
        self.r#type = v.into();
        self
    }

    /// Sets the value of [tags][crate::model::Monitor::tags].
    pub fn set_tags<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<String>,
    {
        self.tags = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [priority][crate::model::Monitor::priority].
    pub fn set_priority<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.priority.set(v.into());
        self
    }

    /// Sets [priority][crate::model::Monitor::priority] to `null`.
    pub fn set_priority_null(mut self) -> Self {
        self.priority.set_null();
        self
    }

    /// Sets the value of [options][crate::model::Monitor::options].
    pub fn set_options<T: std::convert::Into<MonitorOptions>>(mut self, v: T) -> Self {
        self.options = Some(wkt::Decoded::Typed(v.into()));
        self
    }

    /// Sets the value of [restricted_roles][crate::model::Monitor::restricted_roles].
    pub fn set_restricted_roles<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<String>,
    {
        self.restricted_roles
            .set(v.into_iter().map(|i| i.into()).collect::<Vec<String>>());
        self
    }

    /// Sets [restricted_roles][crate::model::Monitor::restricted_roles] to `null`.
    pub fn set_restricted_roles_null(mut self) -> Self {
        self.restricted_roles.set_null();
        self
    }
}

/// List of options associated with your monitor.
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct MonitorOptions {
    /// A Boolean indicating whether tagged users are notified on changes to
    /// this monitor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notify_audit: Option<bool>,

    /// A Boolean indicating whether notifications include a triggering tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_tags: Option<bool>,

    /// The number of minutes after the last notification before a monitor
    /// re-notifies on the current status.
    #[serde(default, skip_serializing_if = "wkt::Nullable::is_unset")]
    pub renotify_interval: wkt::Nullable<i64>,

    /// The number of hours of the monitor not reporting data before it
    /// automatically resolves from a triggered state.
    #[serde(default, skip_serializing_if = "wkt::Nullable::is_unset")]
    pub timeout_h: wkt::Nullable<i64>,

    /// List of the different monitor threshold available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thresholds: Option<MonitorThresholds>,

    #[serde(flatten)]
    pub _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl MonitorOptions {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [notify_audit][crate::model::MonitorOptions::notify_audit].
    pub fn set_notify_audit<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.notify_audit = Some(v.into());
        self
    }

    /// Sets the value of [include_tags][crate::model::MonitorOptions::include_tags].
    pub fn set_include_tags<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.include_tags = Some(v.into());
        self
    }

    /// Sets the value of [renotify_interval][crate::model::MonitorOptions::renotify_interval].
    pub fn set_renotify_interval<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.renotify_interval.set(v.into());
        self
    }

    /// Sets [renotify_interval][crate::model::MonitorOptions::renotify_interval] to `null`.
    pub fn set_renotify_interval_null(mut self) -> Self {
        self.renotify_interval.set_null();
        self
    }

    /// Sets the value of [timeout_h][crate::model::MonitorOptions::timeout_h].
    pub fn set_timeout_h<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.timeout_h.set(v.into());
        self
    }

    /// Sets the value of [thresholds][crate::model::MonitorOptions::thresholds].
    pub fn set_thresholds<T: std::convert::Into<MonitorThresholds>>(mut self, v: T) -> Self {
        self.thresholds = Some(v.into());
        self
    }
}

/// List of the different monitor threshold available.
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct MonitorThresholds {
    /// The monitor `CRITICAL` threshold.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub critical: Option<f64>,

    /// The monitor `CRITICAL` recovery threshold.
    #[serde(default, skip_serializing_if = "wkt::Nullable::is_unset")]
    pub critical_recovery: wkt::Nullable<f64>,

    /// The monitor `OK` threshold.
    #[serde(default, skip_serializing_if = "wkt::Nullable::is_unset")]
    pub ok: wkt::Nullable<f64>,

    /// The monitor `WARNING` threshold.
    #[serde(default, skip_serializing_if = "wkt::Nullable::is_unset")]
    pub warning: wkt::Nullable<f64>,

    /// The monitor `WARNING` recovery threshold.
    #[serde(default, skip_serializing_if = "wkt::Nullable::is_unset")]
    pub warning_recovery: wkt::Nullable<f64>,

    #[serde(flatten)]
    pub _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl MonitorThresholds {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [critical][crate::model::MonitorThresholds::critical].
    pub fn set_critical<T: std::convert::Into<f64>>(mut self, v: T) -> Self {
        self.critical = Some(v.into());
        self
    }

    /// Sets the value of [ok][crate::model::MonitorThresholds::ok].
    pub fn set_ok<T: std::convert::Into<f64>>(mut self, v: T) -> Self {
        self.ok.set(v.into());
        self
    }

    /// Sets the value of [warning][crate::model::MonitorThresholds::warning].
    pub fn set_warning<T: std::convert::Into<f64>>(mut self, v: T) -> Self {
        self.warning.set(v.into());
        self
    }

    /// Sets [warning][crate::model::MonitorThresholds::warning] to `null`.
    pub fn set_warning_null(mut self) -> Self {
        self.warning.set_null();
        self
    }
}

/// Object describing a monitor update request.
///
/// All the fields are optional, only the fields that are set are changed.
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct MonitorUpdateRequest {
    /// The monitor name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// A message to include with notifications for this monitor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// The monitor query.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,

    /// The type of the monitor.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub r#type: Option<MonitorType>,

    /// Tags associated to your monitor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    /// Integer from 1 (high) to 5 (low) indicating alert severity.
    #[serde(default, skip_serializing_if = "wkt::Nullable::is_unset")]
    pub priority: wkt::Nullable<i64>,

    /// The monitor options.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<MonitorOptions>,

    /// The roles allowed to edit the monitor, `null` if all roles can.
    #[serde(default, skip_serializing_if = "wkt::Nullable::is_unset")]
    pub restricted_roles: wkt::Nullable<Vec<String>>,

    #[serde(flatten)]
    pub _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl MonitorUpdateRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::MonitorUpdateRequest::name].
    pub fn set_name<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [message][crate::model::MonitorUpdateRequest::message].
    pub fn set_message<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.message = Some(v.into());
        self
    }

    /// Sets the value of [query][crate::model::MonitorUpdateRequest::query].
    pub fn set_query<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.query = Some(v.into());
        self
    }

    /// Sets the value of [r#type][crate::model::MonitorUpdateRequest::type].
    pub fn set_type<T: std::convert::Into<MonitorType>>(mut self, v: T) -> Self {
        self.r#type = Some(v.into());
        self
    }

    /// Sets the value of [tags][crate::model::MonitorUpdateRequest::tags].
    pub fn set_tags<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<String>,
    {
        self.tags = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [priority][crate::model::MonitorUpdateRequest::priority].
    pub fn set_priority<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.priority.set(v.into());
        self
    }

    /// Sets [priority][crate::model::MonitorUpdateRequest::priority] to `null`.
    ///
    /// This removes the priority of the monitor.
    pub fn set_priority_null(mut self) -> Self {
        self.priority.set_null();
        self
    }

    /// Sets the value of [options][crate::model::MonitorUpdateRequest::options].
    pub fn set_options<T: std::convert::Into<MonitorOptions>>(mut self, v: T) -> Self {
        self.options = Some(v.into());
        self
    }

    /// Sets [restricted_roles][crate::model::MonitorUpdateRequest::restricted_roles] to `null`.
    pub fn set_restricted_roles_null(mut self) -> Self {
        self.restricted_roles.set_null();
        self
    }
}

/// Response from the delete monitor call.
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct DeletedMonitor {
    /// ID of the deleted monitor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_monitor_id: Option<i64>,

    #[serde(flatten)]
    pub _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

/// Response of monitor IDs that can or can't be safely deleted.
///
/// This is also the payload of `409 Conflict` errors returned by
/// [check_can_delete_monitor][crate::client::MonitorsApi::check_can_delete_monitor].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct CheckCanDeleteMonitorResponse {
    /// Wrapper object with the list of monitor IDs.
    pub data: CheckCanDeleteMonitorResponseData,

    /// A mapping of Monitor ID to strings denoting where it's used.
    #[serde(default, skip_serializing_if = "wkt::Nullable::is_unset")]
    pub errors: wkt::Nullable<HashMap<String, Vec<String>>>,

    #[serde(flatten)]
    pub _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

/// Wrapper object with the list of monitor IDs.
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct CheckCanDeleteMonitorResponseData {
    /// An array of monitor IDs that can be deleted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ok: Option<Vec<i64>>,

    #[serde(flatten)]
    pub _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

/// The response of a monitor group search.
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct MonitorGroupSearchResponse {
    /// The counts of monitor groups per different criteria.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub counts: Option<MonitorSearchCounts>,

    /// The list of found monitor groups.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<MonitorGroupSearchResult>>,

    /// Metadata about the response.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<MonitorSearchResponseMetadata>,

    #[serde(flatten)]
    pub _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

/// A single monitor group search result.
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct MonitorGroupSearchResult {
    /// The name of the group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,

    /// The list of tags of the monitor group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_tags: Option<Vec<String>>,

    /// Latest timestamp the monitor group was in NO_DATA state.
    #[serde(default, skip_serializing_if = "wkt::Nullable::is_unset")]
    pub last_nodata_ts: wkt::Nullable<i64>,

    /// Latest timestamp the monitor group triggered.
    #[serde(default, skip_serializing_if = "wkt::Nullable::is_unset")]
    pub last_triggered_ts: wkt::Nullable<i64>,

    /// The ID of the monitor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monitor_id: Option<i64>,

    /// The name of the monitor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monitor_name: Option<String>,

    /// The current state of the monitor group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<MonitorOverallStates>,

    #[serde(flatten)]
    pub _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

/// The response form a monitor search.
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct MonitorSearchResponse {
    /// The counts of monitors per different criteria.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub counts: Option<MonitorSearchCounts>,

    /// Metadata about the response.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<MonitorSearchResponseMetadata>,

    /// The list of found monitors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monitors: Option<Vec<MonitorSearchResult>>,

    #[serde(flatten)]
    pub _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

/// Holds search results.
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct MonitorSearchResult {
    /// ID of the monitor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Latest timestamp the monitor triggered.
    #[serde(default, skip_serializing_if = "wkt::Nullable::is_unset")]
    pub last_triggered_ts: wkt::Nullable<i64>,

    /// The monitor name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// The monitor query.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,

    /// The current state of the monitor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<MonitorOverallStates>,

    /// Tags associated with the monitor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    /// The type of the monitor.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub r#type: Option<MonitorType>,

    #[serde(flatten)]
    pub _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

/// The counts of monitors, or monitor groups, per different criteria.
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct MonitorSearchCounts {
    /// Search facets by muted state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub muted: Option<Vec<MonitorSearchCountItem>>,

    /// Search facets by status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Vec<MonitorSearchCountItem>>,

    /// Search facets by tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<Vec<MonitorSearchCountItem>>,

    /// Search facets by type.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub r#type: Option<Vec<MonitorSearchCountItem>>,

    #[serde(flatten)]
    pub _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

/// A facet item.
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct MonitorSearchCountItem {
    /// The number of found monitors with the listed value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,

    /// The facet value, a string for most facets and a boolean for `muted`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<serde_json::Value>,

    #[serde(flatten)]
    pub _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

/// Metadata about the response.
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct MonitorSearchResponseMetadata {
    /// The page to start paginating from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,

    /// The number of pages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_count: Option<i64>,

    /// The number of monitors to return per page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per_page: Option<i64>,

    /// The total number of monitors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_count: Option<i64>,

    #[serde(flatten)]
    pub _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

/// Your Datadog Dashboards.
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct DashboardList {
    /// ID of the dashboard list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// The name of the dashboard list.
    pub name: String,

    /// Object describing the creator of the shared element.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<Creator>,

    /// Date of creation of the dashboard list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<chrono::DateTime<chrono::Utc>>,

    /// Date of last edition of the dashboard list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified: Option<chrono::DateTime<chrono::Utc>>,

    /// The number of dashboards in the list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dashboard_count: Option<i64>,

    /// Whether or not the list is in the favorites.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_favorite: Option<bool>,

    /// The type of dashboard list.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,

    #[serde(flatten)]
    pub _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl DashboardList {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::DashboardList::name].
    pub fn set_name<T: std::convert::Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [is_favorite][crate::model::DashboardList::is_favorite].
    pub fn set_is_favorite<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_favorite = Some(v.into());
        self
    }
}

/// Object describing the creator of the shared element.
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct Creator {
    /// Email of the creator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Handle of the creator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,

    /// Name of the creator.
    #[serde(default, skip_serializing_if = "wkt::Nullable::is_unset")]
    pub name: wkt::Nullable<String>,

    #[serde(flatten)]
    pub _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

/// Information on your dashboard lists.
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct DashboardListListResponse {
    /// List of all your dashboard lists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dashboard_lists: Option<Vec<DashboardList>>,

    #[serde(flatten)]
    pub _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

/// Deleted dashboard details.
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct DashboardListDeleteResponse {
    /// ID of the deleted dashboard list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_dashboard_list_id: Option<i64>,

    #[serde(flatten)]
    pub _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

/// Object containing the ordered list of pipeline IDs.
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct LogsPipelinesOrder {
    /// Ordered Array of `<PIPELINE_ID>` strings, the order of pipeline IDs in
    /// the array define the overall Pipelines order for Datadog.
    pub pipeline_ids: Vec<String>,

    #[serde(flatten)]
    pub _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl LogsPipelinesOrder {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [pipeline_ids][crate::model::LogsPipelinesOrder::pipeline_ids].
    pub fn set_pipeline_ids<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<String>,
    {
        self.pipeline_ids = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// Response returned by the Logs API when errors occur.
///
/// This is the payload of `422 Unprocessable Entity` errors returned by
/// [update_logs_pipeline_order][crate::client::LogsPipelinesApi::update_logs_pipeline_order].
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct LogsApiErrorResponse {
    /// Error returned by the Logs API.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<LogsApiError>,

    #[serde(flatten)]
    pub _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

/// Error returned by the Logs API.
#[derive(Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct LogsApiError {
    /// Code identifying the error.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// Additional error details.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<LogsApiError>>,

    /// Error message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(flatten)]
    pub _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

/// The type of the monitor.
///
/// # Working with unknown values
///
/// This enum is defined as `#[non_exhaustive]` because Datadog may add
/// additional enum variants at any time. Adding new variants is not considered
/// a breaking change. Applications should write their code in anticipation of:
///
/// - New values appearing in future releases of the client library, **and**
/// - New values received dynamically, without application changes.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum MonitorType {
    Composite,
    EventAlert,
    LogAlert,
    MetricAlert,
    ProcessAlert,
    QueryAlert,
    RumAlert,
    ServiceCheck,
    SyntheticsAlert,
    TraceAnalyticsAlert,
    SloAlert,
    EventV2Alert,
    AuditAlert,
    CiPipelinesAlert,
    CiTestsAlert,
    ErrorTrackingAlert,
    DatabaseMonitoringAlert,
    /// If set, the enum was initialized with an unknown value.
    ///
    /// Applications can examine the value using [MonitorType::name].
    UnknownValue(wkt::UnknownEnumValue),
}

impl MonitorType {
    /// Gets the enum value as a string.
    pub fn name(&self) -> &str {
        match self {
            Self::Composite => "composite",
            Self::EventAlert => "event alert",
            Self::LogAlert => "log alert",
            Self::MetricAlert => "metric alert",
            Self::ProcessAlert => "process alert",
            Self::QueryAlert => "query alert",
            Self::RumAlert => "rum alert",
            Self::ServiceCheck => "service check",
            Self::SyntheticsAlert => "synthetics alert",
            Self::TraceAnalyticsAlert => "trace-analytics alert",
            Self::SloAlert => "slo alert",
            Self::EventV2Alert => "event-v2 alert",
            Self::AuditAlert => "audit alert",
            Self::CiPipelinesAlert => "ci-pipelines alert",
            Self::CiTestsAlert => "ci-tests alert",
            Self::ErrorTrackingAlert => "error-tracking alert",
            Self::DatabaseMonitoringAlert => "database-monitoring alert",
            Self::UnknownValue(u) => u.name(),
        }
    }
}

impl std::default::Default for MonitorType {
    fn default() -> Self {
        Self::MetricAlert
    }
}

impl std::fmt::Display for MonitorType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::result::Result<(), std::fmt::Error> {
        f.write_str(self.name())
    }
}

impl std::convert::From<&str> for MonitorType {
    fn from(value: &str) -> Self {
        match value {
            "composite" => Self::Composite,
            "event alert" => Self::EventAlert,
            "log alert" => Self::LogAlert,
            "metric alert" => Self::MetricAlert,
            "process alert" => Self::ProcessAlert,
            "query alert" => Self::QueryAlert,
            "rum alert" => Self::RumAlert,
            "service check" => Self::ServiceCheck,
            "synthetics alert" => Self::SyntheticsAlert,
            "trace-analytics alert" => Self::TraceAnalyticsAlert,
            "slo alert" => Self::SloAlert,
            "event-v2 alert" => Self::EventV2Alert,
            "audit alert" => Self::AuditAlert,
            "ci-pipelines alert" => Self::CiPipelinesAlert,
            "ci-tests alert" => Self::CiTestsAlert,
            "error-tracking alert" => Self::ErrorTrackingAlert,
            "database-monitoring alert" => Self::DatabaseMonitoringAlert,
            _ => Self::UnknownValue(wkt::UnknownEnumValue::new(value.to_string())),
        }
    }
}

impl serde::ser::Serialize for MonitorType {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> serde::de::Deserialize<'de> for MonitorType {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_str(wkt::internal::EnumVisitor::<MonitorType>::new("MonitorType"))
    }
}

/// The different states your monitor can be in.
///
/// # Working with unknown values
///
/// This enum is defined as `#[non_exhaustive]` because Datadog may add
/// additional enum variants at any time. Adding new variants is not considered
/// a breaking change.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum MonitorOverallStates {
    Alert,
    Ignored,
    NoData,
    Ok,
    Skipped,
    Unknown,
    Warn,
    /// If set, the enum was initialized with an unknown value.
    UnknownValue(wkt::UnknownEnumValue),
}

impl MonitorOverallStates {
    /// Gets the enum value as a string.
    pub fn name(&self) -> &str {
        match self {
            Self::Alert => "Alert",
            Self::Ignored => "Ignored",
            Self::NoData => "No Data",
            Self::Ok => "OK",
            Self::Skipped => "Skipped",
            Self::Unknown => "Unknown",
            Self::Warn => "Warn",
            Self::UnknownValue(u) => u.name(),
        }
    }
}

impl std::fmt::Display for MonitorOverallStates {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::result::Result<(), std::fmt::Error> {
        f.write_str(self.name())
    }
}

impl std::convert::From<&str> for MonitorOverallStates {
    fn from(value: &str) -> Self {
        match value {
            "Alert" => Self::Alert,
            "Ignored" => Self::Ignored,
            "No Data" => Self::NoData,
            "OK" => Self::Ok,
            "Skipped" => Self::Skipped,
            "Unknown" => Self::Unknown,
            "Warn" => Self::Warn,
            _ => Self::UnknownValue(wkt::UnknownEnumValue::new(value.to_string())),
        }
    }
}

impl serde::ser::Serialize for MonitorOverallStates {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> serde::de::Deserialize<'de> for MonitorOverallStates {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_str(wkt::internal::EnumVisitor::<MonitorOverallStates>::new(
            "MonitorOverallStates",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use test_case::test_case;

    #[test]
    fn monitor_round_trip() -> anyhow::Result<()> {
        let input = json!({
            "id": 123,
            "name": "cpu",
            "query": "avg(last_5m):avg:system.cpu.user{*} > 90",
            "type": "metric alert",
            "priority": null,
            "restricted_roles": ["abc"],
            "options": {"notify_audit": false, "renotify_interval": null},
            "overall_state": "No Data",
            "created": "2025-01-02T03:04:05Z",
            "future_field": {"nested": [1, 2, 3]}
        });
        let monitor = serde_json::from_value::<Monitor>(input.clone())?;
        assert_eq!(monitor.id, Some(123));
        assert_eq!(monitor.r#type, MonitorType::MetricAlert);
        assert!(monitor.priority.is_null(), "{monitor:?}");
        assert_eq!(monitor.restricted_roles.get(), Some(&vec!["abc".to_string()]));
        assert_eq!(monitor.overall_state, Some(MonitorOverallStates::NoData));
        let options = monitor.options.as_ref().and_then(|o| o.typed());
        assert_eq!(options.and_then(|o| o.notify_audit), Some(false));
        assert_eq!(options.map(|o| o.renotify_interval.is_null()), Some(true));
        assert!(monitor.deleted.is_unset(), "{monitor:?}");
        assert_eq!(
            monitor._unknown_fields.get("future_field"),
            Some(&json!({"nested": [1, 2, 3]}))
        );

        let got = serde_json::to_value(&monitor)?;
        assert_eq!(got, input);
        Ok(())
    }

    #[test]
    fn monitor_setters() -> anyhow::Result<()> {
        let monitor = Monitor::new()
            .set_name("cpu")
            .set_query("avg(last_5m):avg:system.cpu.user{*} > 90")
            .set_type(MonitorType::QueryAlert)
            .set_priority(3)
            .set_restricted_roles_null()
            .set_options(MonitorOptions::new().set_thresholds(MonitorThresholds::new().set_critical(90)));
        let got = serde_json::to_value(&monitor)?;
        assert_eq!(
            got,
            json!({
                "name": "cpu",
                "query": "avg(last_5m):avg:system.cpu.user{*} > 90",
                "type": "query alert",
                "priority": 3,
                "restricted_roles": null,
                "options": {"thresholds": {"critical": 90.0}}
            })
        );
        Ok(())
    }

    #[test]
    fn monitor_options_unparsed() -> anyhow::Result<()> {
        let input = json!({
            "query": "q",
            "type": "log alert",
            "options": {"thresholds": "not-an-object"}
        });
        let monitor = serde_json::from_value::<Monitor>(input.clone())?;
        let options = monitor.options.as_ref().map(|o| o.is_unparsed());
        assert_eq!(options, Some(true));
        assert_eq!(serde_json::to_value(&monitor)?, input);
        Ok(())
    }

    #[test]
    fn monitor_missing_required() {
        let got = serde_json::from_value::<Monitor>(json!({"name": "no query"}));
        assert!(got.is_err(), "{got:?}");
    }

    #[test]
    fn update_request_null_priority() -> anyhow::Result<()> {
        let request = MonitorUpdateRequest::new()
            .set_message("updated")
            .set_priority_null();
        assert_eq!(
            serde_json::to_value(&request)?,
            json!({"message": "updated", "priority": null})
        );
        let empty = MonitorUpdateRequest::new();
        assert_eq!(serde_json::to_value(&empty)?, json!({}));
        Ok(())
    }

    #[test]
    fn check_can_delete_conflict() -> anyhow::Result<()> {
        let input = json!({
            "data": {"ok": [1, 2]},
            "errors": {"3": ["Monitor 3 is referenced by composite monitor 4"]}
        });
        let got = serde_json::from_value::<CheckCanDeleteMonitorResponse>(input.clone())?;
        assert_eq!(got.data.ok, Some(vec![1, 2]));
        let errors = got.errors.get().and_then(|e| e.get("3")).cloned();
        assert_eq!(
            errors,
            Some(vec!["Monitor 3 is referenced by composite monitor 4".to_string()])
        );
        assert_eq!(serde_json::to_value(&got)?, input);
        Ok(())
    }

    #[test_case("composite", MonitorType::Composite)]
    #[test_case("trace-analytics alert", MonitorType::TraceAnalyticsAlert)]
    #[test_case("database-monitoring alert", MonitorType::DatabaseMonitoringAlert)]
    fn monitor_type_known(input: &str, want: MonitorType) -> anyhow::Result<()> {
        let got = serde_json::from_value::<MonitorType>(json!(input))?;
        assert_eq!(got, want);
        assert_eq!(got.to_string(), input);
        assert_eq!(serde_json::to_value(&got)?, json!(input));
        Ok(())
    }

    #[test]
    fn monitor_type_unknown() -> anyhow::Result<()> {
        let got = serde_json::from_value::<MonitorType>(json!("cost alert"))?;
        assert!(matches!(got, MonitorType::UnknownValue(_)), "{got:?}");
        assert_eq!(got.name(), "cost alert");
        assert_eq!(serde_json::to_value(&got)?, json!("cost alert"));
        Ok(())
    }

    #[test]
    fn dashboard_list_author() -> anyhow::Result<()> {
        let input = json!({
            "id": 42,
            "name": "x",
            "author": {"handle": "test@datadoghq.com", "name": null},
            "dashboard_count": 0,
            "is_favorite": false,
            "type": "manual_dashboard_list"
        });
        let got = serde_json::from_value::<DashboardList>(input.clone())?;
        assert_eq!(got.id, Some(42));
        assert_eq!(got.r#type.as_deref(), Some("manual_dashboard_list"));
        let author = got.author.as_ref();
        assert_eq!(author.map(|a| a.name.get_ok()), Some((None, true)));
        assert_eq!(serde_json::to_value(&got)?, input);
        Ok(())
    }

    #[test]
    fn debug_skips_empty_unknown_fields() {
        let list = DashboardList::new().set_name("x");
        let fmt = format!("{list:?}");
        assert!(fmt.contains("DashboardList"), "{fmt}");
        assert!(!fmt.contains("_unknown_fields"), "{fmt}");
    }
}
