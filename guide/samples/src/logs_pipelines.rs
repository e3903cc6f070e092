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

use crate::{print_error, print_response};
use datadog_api_v1::client::LogsPipelinesApi;
use datadog_api_v1::model::LogsPipelinesOrder;
use wkt::Decoded;

pub async fn get_logs_pipeline_order(
    client: &LogsPipelinesApi,
) -> crate::Result<Decoded<LogsPipelinesOrder>> {
    // ANCHOR: get-logs-pipeline-order
    let response = client
        .get_logs_pipeline_order()
        .send()
        .await
        .inspect_err(|e| print_error("LogsPipelinesApi.GetLogsPipelineOrder", e))?;
    print_response("LogsPipelinesApi.GetLogsPipelineOrder", response.body())?;
    // ANCHOR_END: get-logs-pipeline-order
    Ok(response.into_body())
}
