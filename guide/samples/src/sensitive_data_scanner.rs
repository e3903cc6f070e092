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
use datadog_api_v2::client::SensitiveDataScannerApi;
use datadog_api_v2::model::*;
use wkt::Decoded;

/// Renames and enables the scanning rule `rule_id` from group `group_id`.
pub async fn update_scanning_rule(
    client: &SensitiveDataScannerApi,
    rule_id: &str,
    group_id: &str,
) -> crate::Result<Decoded<SensitiveDataScannerRuleUpdateResponse>> {
    // ANCHOR: update-scanning-rule
    let attributes = SensitiveDataScannerRuleAttributes::new()
        .set_name("Example-Update_Scanning_Rule_returns_OK_response")
        .set_pattern("pattern")
        .set_text_replacement(
            SensitiveDataScannerTextReplacement::new()
                .set_type(SensitiveDataScannerTextReplacementType::None),
        )
        .set_tags(["sensitive_data:true"])
        .set_is_enabled(true);
    let group = SensitiveDataScannerGroup::new()
        .set_type(SensitiveDataScannerGroupType::SensitiveDataScannerGroup)
        .set_id(group_id);
    let body = SensitiveDataScannerRuleUpdateRequest::new()
        .set_meta(SensitiveDataScannerMetaVersionOnly::new())
        .set_data(
            SensitiveDataScannerRuleUpdate::new()
                .set_id(rule_id)
                .set_type(SensitiveDataScannerRuleType::SensitiveDataScannerRule)
                .set_attributes(attributes)
                .set_relationships(
                    SensitiveDataScannerRuleRelationships::new()
                        .set_group(SensitiveDataScannerGroupData::new().set_data(group)),
                ),
        );
    let response = client
        .update_scanning_rule(rule_id, body)
        .send()
        .await
        .inspect_err(|e| print_error("SensitiveDataScannerApi.UpdateScanningRule", e))?;
    print_response("SensitiveDataScannerApi.UpdateScanningRule", response.body())?;
    // ANCHOR_END: update-scanning-rule
    Ok(response.into_body())
}
