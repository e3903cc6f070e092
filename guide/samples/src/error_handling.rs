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

//! Examples showing how to handle errors.

use datadog_api_v1::client::{DeleteMonitorOptionalParams, LogsPipelinesApi, MonitorsApi};
use datadog_api_v1::model::{CheckCanDeleteMonitorResponse, LogsApiErrorResponse, LogsPipelinesOrder};

// ANCHOR: delete-unused-monitors
/// Deletes the monitors in `ids` that are not referenced elsewhere.
///
/// Returns the ids of the deleted monitors.
pub async fn delete_unused_monitors(client: &MonitorsApi, ids: Vec<i64>) -> crate::Result<Vec<i64>> {
    // ANCHOR: delete-unused-monitors-check
    let deletable = match client.check_can_delete_monitor(ids).send().await {
        // ANCHOR_END: delete-unused-monitors-check
        // ANCHOR: delete-unused-monitors-success
        Ok(response) => response
            .into_body()
            .into_typed()
            .and_then(|r| r.data.ok)
            .unwrap_or_default(),
        // ANCHOR_END: delete-unused-monitors-success
        // ANCHOR: delete-unused-monitors-conflict
        Err(e) if e.http_status_code() == Some(409) => {
            let Some(details) = e.error_model::<CheckCanDeleteMonitorResponse>() else {
                return Err(e.into());
            };
            if let Some(errors) = details.errors.get() {
                for (id, usages) in errors {
                    println!("monitor {id} is still in use: {}", usages.join(", "));
                }
            }
            details.data.ok.clone().unwrap_or_default()
        }
        // ANCHOR_END: delete-unused-monitors-conflict
        Err(e) => return Err(e.into()),
    };

    // ANCHOR: delete-unused-monitors-delete
    let mut deleted = Vec::new();
    for id in deletable {
        client
            .delete_monitor(id, DeleteMonitorOptionalParams::default())
            .send()
            .await?;
        deleted.push(id);
    }
    // ANCHOR_END: delete-unused-monitors-delete
    Ok(deleted)
}
// ANCHOR_END: delete-unused-monitors

// ANCHOR: reorder-pipelines
/// Reorders the logs pipelines, reporting why the service rejected the order.
pub async fn reorder_pipelines(
    client: &LogsPipelinesApi,
    pipeline_ids: Vec<String>,
) -> crate::Result<Option<LogsPipelinesOrder>> {
    let body = LogsPipelinesOrder::new().set_pipeline_ids(pipeline_ids);
    match client.update_logs_pipeline_order(body).send().await {
        Ok(response) => Ok(response.into_body().into_typed()),
        // ANCHOR: reorder-pipelines-errors
        Err(e) => {
            if let Some(details) = e.error_model::<LogsApiErrorResponse>() {
                let message = details
                    .error
                    .as_ref()
                    .and_then(|e| e.message.as_deref())
                    .unwrap_or("unknown error");
                println!("the pipeline order was rejected: {message}");
                return Ok(None);
            }
            if let Some(details) = e.api_error() {
                println!("the request failed: {}", details.errors.join(", "));
            }
            Err(e.into())
        }
        // ANCHOR_END: reorder-pipelines-errors
    }
}
// ANCHOR_END: reorder-pipelines
