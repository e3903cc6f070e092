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
use datadog_api_v1::client::DashboardListsApi;
use datadog_api_v1::model::DashboardList;
use wkt::Decoded;

pub async fn create_dashboard_list(client: &DashboardListsApi) -> crate::Result<Decoded<DashboardList>> {
    // ANCHOR: create-dashboard-list
    let body = DashboardList::new().set_name("Example-Create_a_dashboard_list_returns_OK_response");
    let response = client
        .create_dashboard_list(body)
        .send()
        .await
        .inspect_err(|e| print_error("DashboardListsApi.CreateDashboardList", e))?;
    print_response("DashboardListsApi.CreateDashboardList", response.body())?;
    // ANCHOR_END: create-dashboard-list
    Ok(response.into_body())
}

/// Fetches several dashboard lists concurrently.
pub async fn get_dashboard_lists(
    client: &DashboardListsApi,
    ids: &[i64],
) -> crate::Result<Vec<DashboardList>> {
    // ANCHOR: get-dashboard-lists
    let requests = ids.iter().map(|id| client.get_dashboard_list(*id).send());
    let responses = futures::future::try_join_all(requests).await?;
    // ANCHOR_END: get-dashboard-lists

    // ANCHOR: typed
    let mut lists = Vec::new();
    for response in responses {
        match response.into_body() {
            Decoded::Typed(list) => lists.push(list),
            Decoded::Unparsed(value) => {
                eprintln!("skipping dashboard list that did not match the model: {value}")
            }
        }
    }
    // ANCHOR_END: typed
    Ok(lists)
}
