// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use std::time::Duration;

/// Timeout applied to every outbound request (scrapes and uploads).
pub const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Header carrying the ingestion credential.
pub const API_KEY_HEADER: &str = "Api-Key";

/// Tag attached to every forwarded log batch and record.
pub const INSTRUMENTATION_PROVIDER_KEY: &str = "instrumentation.provider";
pub const INSTRUMENTATION_PROVIDER: &str = "newrelic-kubernetes-endpoint-scraper";

// Identity fields stamped on every scraped event and scrape log line
pub const EVENT_TYPE_KEY: &str = "eventType";
pub const ENDPOINT_TYPE_KEY: &str = "endpointType";
pub const ENDPOINT_NAME_KEY: &str = "endpointName";
pub const ENDPOINT_URL_KEY: &str = "endpointUrl";
pub const ERROR_KEY: &str = "error";

// Environment identity keys in the log batch common block
pub const NODE_NAME_KEY: &str = "k8s.node.name";
pub const NAMESPACE_NAME_KEY: &str = "k8s.namespace.name";
pub const POD_NAME_KEY: &str = "k8s.pod.name";

/// Endpoint type handled by the built-in key/value parser.
pub const KVP_ENDPOINT_TYPE: &str = "kvp";
