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

use super::*;

impl std::fmt::Debug for Monitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("Monitor");
        debug_struct.field("id", &self.id);
        debug_struct.field("name", &self.name);
        debug_struct.field("message", &self.message);
        debug_struct.field("query", &self.query);
        debug_struct.field("type", &self.r#type);
        debug_struct.field("tags", &self.tags);
        debug_struct.field("priority", &self.priority);
        debug_struct.field("options", &self.options);
        debug_struct.field("overall_state", &self.overall_state);
        debug_struct.field("multi", &self.multi);
        debug_struct.field("created", &self.created);
        debug_struct.field("modified", &self.modified);
        debug_struct.field("deleted", &self.deleted);
        debug_struct.field("restricted_roles", &self.restricted_roles);
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for MonitorOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("MonitorOptions");
        debug_struct.field("notify_audit", &self.notify_audit);
        debug_struct.field("include_tags", &self.include_tags);
        debug_struct.field("renotify_interval", &self.renotify_interval);
        debug_struct.field("timeout_h", &self.timeout_h);
        debug_struct.field("thresholds", &self.thresholds);
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for MonitorThresholds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("MonitorThresholds");
        debug_struct.field("critical", &self.critical);
        debug_struct.field("critical_recovery", &self.critical_recovery);
        debug_struct.field("ok", &self.ok);
        debug_struct.field("warning", &self.warning);
        debug_struct.field("warning_recovery", &self.warning_recovery);
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for MonitorUpdateRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("MonitorUpdateRequest");
        debug_struct.field("name", &self.name);
        debug_struct.field("message", &self.message);
        debug_struct.field("query", &self.query);
        debug_struct.field("type", &self.r#type);
        debug_struct.field("tags", &self.tags);
        debug_struct.field("priority", &self.priority);
        debug_struct.field("options", &self.options);
        debug_struct.field("restricted_roles", &self.restricted_roles);
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for DeletedMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("DeletedMonitor");
        debug_struct.field("deleted_monitor_id", &self.deleted_monitor_id);
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for CheckCanDeleteMonitorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("CheckCanDeleteMonitorResponse");
        debug_struct.field("data", &self.data);
        debug_struct.field("errors", &self.errors);
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for CheckCanDeleteMonitorResponseData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("CheckCanDeleteMonitorResponseData");
        debug_struct.field("ok", &self.ok);
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for MonitorGroupSearchResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("MonitorGroupSearchResponse");
        debug_struct.field("counts", &self.counts);
        debug_struct.field("groups", &self.groups);
        debug_struct.field("metadata", &self.metadata);
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for MonitorGroupSearchResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("MonitorGroupSearchResult");
        debug_struct.field("group", &self.group);
        debug_struct.field("group_tags", &self.group_tags);
        debug_struct.field("last_nodata_ts", &self.last_nodata_ts);
        debug_struct.field("last_triggered_ts", &self.last_triggered_ts);
        debug_struct.field("monitor_id", &self.monitor_id);
        debug_struct.field("monitor_name", &self.monitor_name);
        debug_struct.field("status", &self.status);
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for MonitorSearchResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("MonitorSearchResponse");
        debug_struct.field("counts", &self.counts);
        debug_struct.field("metadata", &self.metadata);
        debug_struct.field("monitors", &self.monitors);
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for MonitorSearchResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("MonitorSearchResult");
        debug_struct.field("id", &self.id);
        debug_struct.field("last_triggered_ts", &self.last_triggered_ts);
        debug_struct.field("name", &self.name);
        debug_struct.field("query", &self.query);
        debug_struct.field("status", &self.status);
        debug_struct.field("tags", &self.tags);
        debug_struct.field("type", &self.r#type);
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for MonitorSearchCounts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("MonitorSearchCounts");
        debug_struct.field("muted", &self.muted);
        debug_struct.field("status", &self.status);
        debug_struct.field("tag", &self.tag);
        debug_struct.field("type", &self.r#type);
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for MonitorSearchCountItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("MonitorSearchCountItem");
        debug_struct.field("count", &self.count);
        debug_struct.field("name", &self.name);
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for MonitorSearchResponseMetadata {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("MonitorSearchResponseMetadata");
        debug_struct.field("page", &self.page);
        debug_struct.field("page_count", &self.page_count);
        debug_struct.field("per_page", &self.per_page);
        debug_struct.field("total_count", &self.total_count);
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for DashboardList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("DashboardList");
        debug_struct.field("id", &self.id);
        debug_struct.field("name", &self.name);
        debug_struct.field("author", &self.author);
        debug_struct.field("created", &self.created);
        debug_struct.field("modified", &self.modified);
        debug_struct.field("dashboard_count", &self.dashboard_count);
        debug_struct.field("is_favorite", &self.is_favorite);
        debug_struct.field("type", &self.r#type);
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for Creator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("Creator");
        debug_struct.field("email", &self.email);
        debug_struct.field("handle", &self.handle);
        debug_struct.field("name", &self.name);
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for DashboardListListResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("DashboardListListResponse");
        debug_struct.field("dashboard_lists", &self.dashboard_lists);
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for DashboardListDeleteResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("DashboardListDeleteResponse");
        debug_struct.field("deleted_dashboard_list_id", &self.deleted_dashboard_list_id);
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for LogsPipelinesOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("LogsPipelinesOrder");
        debug_struct.field("pipeline_ids", &self.pipeline_ids);
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for LogsApiErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("LogsApiErrorResponse");
        debug_struct.field("error", &self.error);
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}

impl std::fmt::Debug for LogsApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug_struct = f.debug_struct("LogsApiError");
        debug_struct.field("code", &self.code);
        debug_struct.field("details", &self.details);
        debug_struct.field("message", &self.message);
        if !self._unknown_fields.is_empty() {
            debug_struct.field("_unknown_fields", &self._unknown_fields);
        }
        debug_struct.finish()
    }
}
