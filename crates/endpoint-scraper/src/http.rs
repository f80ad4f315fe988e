// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! HTTP client construction shared by the scraper and both forwarders.

use core::time::Duration;
use std::error::Error;
use tracing::error;

/// Creates a client whose requests all carry `timeout`.
///
/// If the configured builder cannot be created the error is logged and the
/// reqwest defaults are used instead, so a run is never aborted here.
#[must_use]
pub fn get_client(timeout: Duration) -> reqwest::Client {
    match build_client(timeout) {
        Ok(client) => client,
        Err(e) => {
            error!("Unable to build HTTP client: {}, using reqwest defaults", e);
            reqwest::Client::new()
        }
    }
}

fn build_client(timeout: Duration) -> Result<reqwest::Client, Box<dyn Error>> {
    let client = reqwest::Client::builder()
        .timeout(timeout)
        .pool_idle_timeout(Some(Duration::from_secs(90)))
        .tcp_keepalive(Some(Duration::from_secs(120)))
        .build()?;
    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_client_builds_request() {
        let client = get_client(Duration::from_secs(1));
        let request = client
            .get("http://localhost:8080/metrics")
            .build()
            .expect("failed to build request");
        assert_eq!(request.url().path(), "/metrics");
    }
}
