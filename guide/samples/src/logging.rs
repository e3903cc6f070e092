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

// ANCHOR: rust_logging
/// # Parameters
/// - `builder`: a client builder, already configured with the endpoint and
///   credentials.
pub async fn sample(
    builder: datadog_api_v1::builder::logs_pipelines_api::ClientBuilder,
) -> anyhow::Result<()> {
    // ANCHOR: rust_logging_init
    // Samples may run more than once in the same process.
    let _ = tracing_subscriber::fmt().try_init();
    // ANCHOR_END: rust_logging_init

    // ANCHOR: rust_logging_client
    let client = builder.with_tracing().build().await?;
    // ANCHOR_END: rust_logging_client

    // ANCHOR: rust_logging_call
    let response = client.get_logs_pipeline_order().send().await?;
    match response.body() {
        wkt::Decoded::Typed(order) => {
            println!("there are {} pipelines", order.pipeline_ids.len());
        }
        wkt::Decoded::Unparsed(value) => println!("unexpected pipeline order: {value}"),
    }
    println!("DONE");
    // ANCHOR_END: rust_logging_call
    Ok(())
}
// ANCHOR_END: rust_logging
