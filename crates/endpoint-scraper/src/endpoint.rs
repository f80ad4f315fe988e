// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use crate::constants::{ENDPOINT_NAME_KEY, ENDPOINT_TYPE_KEY, ENDPOINT_URL_KEY};
use serde::{Deserialize, Serialize};

/// A configured HTTP source identified by `{type, name, url}`.
///
/// Equality and hashing are structural over all three fields, so the endpoint
/// itself is the key of the [`ValueStore`](crate::store::ValueStore).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Endpoint {
    #[serde(rename = "type", default)]
    pub endpoint_type: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
}

impl Endpoint {
    pub fn new(
        endpoint_type: impl Into<String>,
        name: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            endpoint_type: endpoint_type.into(),
            name: name.into(),
            url: url.into(),
        }
    }

    /// True when none of the identity fields is empty.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.endpoint_type.is_empty() && !self.name.is_empty() && !self.url.is_empty()
    }

    /// Identity attributes attached to log lines about this endpoint.
    #[must_use]
    pub fn attributes(&self) -> Vec<(&'static str, String)> {
        vec![
            (ENDPOINT_TYPE_KEY, self.endpoint_type.clone()),
            (ENDPOINT_NAME_KEY, self.name.clone()),
            (ENDPOINT_URL_KEY, self.url.clone()),
        ]
    }
}
