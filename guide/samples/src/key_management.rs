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
use datadog_api_v2::client::KeyManagementApi;
use datadog_api_v2::model::ApplicationKeyResponse;
use wkt::Decoded;

pub async fn delete_application_key(client: &KeyManagementApi, app_key_id: &str) -> crate::Result<()> {
    // ANCHOR: delete-application-key
    client
        .delete_application_key(app_key_id)
        .send()
        .await
        .inspect_err(|e| print_error("KeyManagementApi.DeleteApplicationKey", e))?;
    // ANCHOR_END: delete-application-key
    Ok(())
}

pub async fn get_current_user_application_key(
    client: &KeyManagementApi,
    app_key_id: &str,
) -> crate::Result<Decoded<ApplicationKeyResponse>> {
    // ANCHOR: get-current-user-application-key
    let response = client
        .get_current_user_application_key(app_key_id)
        .send()
        .await
        .inspect_err(|e| print_error("KeyManagementApi.GetCurrentUserApplicationKey", e))?;
    print_response("KeyManagementApi.GetCurrentUserApplicationKey", response.body())?;
    // ANCHOR_END: get-current-user-application-key
    Ok(response.into_body())
}
