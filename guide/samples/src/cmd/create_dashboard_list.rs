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

#[tokio::main]
async fn main() -> datadog_api_samples::Result<()> {
    use datadog_api_v1::client::DashboardListsApi;

    let client = DashboardListsApi::builder().build().await?;
    datadog_api_samples::dashboard_lists::create_dashboard_list(&client).await?;

    Ok(())
}
