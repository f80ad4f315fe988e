// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use crate::constants::{
    INSTRUMENTATION_PROVIDER, INSTRUMENTATION_PROVIDER_KEY, NAMESPACE_NAME_KEY, NODE_NAME_KEY,
    POD_NAME_KEY,
};
use crate::endpoint::Endpoint;
use crate::logs::{LogForwarder, LogLevel, OperationalLog};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Where the agent is running. Each name is optional and only reported when
/// known.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvironmentIdentity {
    pub node_name: Option<String>,
    pub namespace_name: Option<String>,
    pub pod_name: Option<String>,
}

impl EnvironmentIdentity {
    /// Attributes shared by every record of a log batch: the known
    /// identity names plus the instrumentation-provider tag.
    #[must_use]
    pub fn common_attributes(&self) -> BTreeMap<String, String> {
        let mut attributes = BTreeMap::from([(
            INSTRUMENTATION_PROVIDER_KEY.to_string(),
            INSTRUMENTATION_PROVIDER.to_string(),
        )]);

        let names = [
            (NODE_NAME_KEY, &self.node_name),
            (NAMESPACE_NAME_KEY, &self.namespace_name),
            (POD_NAME_KEY, &self.pod_name),
        ];
        for (key, value) in names {
            if let Some(value) = value.as_ref().filter(|v| !v.is_empty()) {
                attributes.insert(key.to_string(), value.clone());
            }
        }

        attributes
    }
}

/// Immutable inputs of one run, built once at startup.
///
/// The logs intake URL, credential and identity given here are the only
/// source for the run's [`LogForwarder`]: the context builds the forwarder
/// from them and wires its [`OperationalLog`] handle to it.
#[derive(Debug, Clone)]
pub struct RunContext {
    endpoints: Vec<Endpoint>,
    events_url: String,
    logs_url: String,
    api_key: String,
    identity: EnvironmentIdentity,
    log_forwarder: Arc<LogForwarder>,
    log: OperationalLog,
}

impl RunContext {
    pub fn new(
        endpoints: Vec<Endpoint>,
        events_url: impl Into<String>,
        logs_url: impl Into<String>,
        api_key: impl Into<String>,
        identity: EnvironmentIdentity,
        log_level: LogLevel,
    ) -> Self {
        let logs_url = logs_url.into();
        let api_key = api_key.into();
        let log_forwarder = Arc::new(LogForwarder::new(
            logs_url.clone(),
            api_key.clone(),
            identity.clone(),
        ));
        let log = OperationalLog::new(log_level, log_forwarder.clone());

        Self {
            endpoints,
            events_url: events_url.into(),
            logs_url,
            api_key,
            identity,
            log_forwarder,
            log,
        }
    }

    #[must_use]
    pub fn endpoints(&self) -> &[Endpoint] {
        &self.endpoints
    }

    #[must_use]
    pub fn events_url(&self) -> &str {
        &self.events_url
    }

    #[must_use]
    pub fn logs_url(&self) -> &str {
        &self.logs_url
    }

    #[must_use]
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    #[must_use]
    pub fn identity(&self) -> &EnvironmentIdentity {
        &self.identity
    }

    /// Buffer every captured record of this run ends up in.
    #[must_use]
    pub fn log_forwarder(&self) -> &LogForwarder {
        &self.log_forwarder
    }

    #[must_use]
    pub fn log(&self) -> &OperationalLog {
        &self.log
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_attributes_default() {
        let attributes = EnvironmentIdentity::default().common_attributes();
        assert_eq!(attributes.len(), 1);
        assert_eq!(
            attributes.get(INSTRUMENTATION_PROVIDER_KEY),
            Some(&INSTRUMENTATION_PROVIDER.to_string())
        );
    }

    #[test]
    fn test_common_attributes_skips_empty_names() {
        let identity = EnvironmentIdentity {
            node_name: Some("node-1".to_string()),
            namespace_name: Some(String::new()),
            pod_name: Some("pod-1".to_string()),
        };

        let attributes = identity.common_attributes();
        assert_eq!(attributes.len(), 3);
        assert_eq!(attributes.get(NODE_NAME_KEY), Some(&"node-1".to_string()));
        assert!(!attributes.contains_key(NAMESPACE_NAME_KEY));
    }

    #[test]
    fn test_log_forwarder_built_from_context() {
        let identity = EnvironmentIdentity {
            node_name: Some("node-1".to_string()),
            namespace_name: None,
            pod_name: None,
        };
        let ctx = RunContext::new(
            vec![Endpoint::new("kvp", "ep", "http://localhost/ep")],
            "http://localhost/events",
            "http://localhost/log/v1",
            "license",
            identity,
            LogLevel::Error,
        );

        ctx.log().error("captured", &[]);
        ctx.log().debug("below threshold", &[]);

        assert_eq!(ctx.log_forwarder().len(), 1);
        let batch = ctx.log_forwarder().build_batch();
        assert_eq!(
            batch.common.attributes.get(NODE_NAME_KEY),
            Some(&"node-1".to_string())
        );
        assert_eq!(ctx.logs_url(), "http://localhost/log/v1");
        assert_eq!(ctx.identity().node_name.as_deref(), Some("node-1"));
    }
}
