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

use datadog_api_v1::client::MonitorsApi;
use std::error::Error as _;

/// Shows the error returned when a required parameter has no value.
pub async fn missing_monitor_ids(client: &MonitorsApi) -> crate::Result<()> {
    // ANCHOR: inspect
    // ANCHOR: request
    let response = client.check_can_delete_monitor(Vec::new()).send().await;
    // ANCHOR_END: request

    use gax::error::binding::BindingError;
    let Err(e) = response else {
        return Err("expected a binding error".into());
    };
    assert!(e.is_binding(), "{e:?}");
    assert_eq!(e.missing_parameter(), Some("monitor_ids"), "{e:?}");
    let source = e.source().and_then(|e| e.downcast_ref::<BindingError>());
    assert!(
        matches!(source, Some(BindingError::MissingParameter(name)) if name == "monitor_ids"),
        "{e:?}"
    );
    // ANCHOR_END: inspect

    // ANCHOR: request-success
    let response = client.check_can_delete_monitor(vec![1, 2, 3]).send().await;
    // ANCHOR_END: request-success
    if let Err(e) = response {
        assert!(!e.is_binding(), "{e:?}");
    }

    Ok(())
}
