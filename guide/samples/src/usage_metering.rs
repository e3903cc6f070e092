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
use chrono::{TimeZone, Utc};
use datadog_api_v2::client::{GetUsageApplicationSecurityMonitoringOptionalParams, UsageMeteringApi};
use datadog_api_v2::model::UsageApplicationSecurityMonitoringResponse;
use wkt::Decoded;

pub async fn get_usage_application_security_monitoring(
    client: &UsageMeteringApi,
) -> crate::Result<Decoded<UsageApplicationSecurityMonitoringResponse>> {
    // ANCHOR: get-usage-application-security-monitoring
    let start_hr = Utc
        .with_ymd_and_hms(2021, 11, 11, 11, 11, 11)
        .single()
        .ok_or("invalid start hour")?;
    let response = client
        .get_usage_application_security_monitoring(
            start_hr,
            GetUsageApplicationSecurityMonitoringOptionalParams::default(),
        )
        .send()
        .await
        .inspect_err(|e| {
            print_error("UsageMeteringApi.GetUsageApplicationSecurityMonitoring", e)
        })?;
    print_response(
        "UsageMeteringApi.GetUsageApplicationSecurityMonitoring",
        response.body(),
    )?;
    // ANCHOR_END: get-usage-application-security-monitoring
    Ok(response.into_body())
}
