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
use datadog_api_v2::client::RolesApi;
use datadog_api_v2::model::{RoleCreateAttributes, RoleCreateData, RoleCreateRequest, RoleResponse, RolesType};
use wkt::Decoded;

pub async fn create_role(client: &RolesApi) -> crate::Result<Decoded<RoleResponse>> {
    // ANCHOR: create-role
    let body = RoleCreateRequest::new().set_data(
        RoleCreateData::new()
            .set_type(RolesType::Roles)
            .set_attributes(
                RoleCreateAttributes::new().set_name("Example-Create_role_returns_OK_response"),
            ),
    );
    let response = client
        .create_role(body)
        .send()
        .await
        .inspect_err(|e| print_error("RolesApi.CreateRole", e))?;
    print_response("RolesApi.CreateRole", response.body())?;
    // ANCHOR_END: create-role
    Ok(response.into_body())
}
