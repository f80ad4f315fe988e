// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Agent configuration.
//!
//! This is the only place the process environment is read. The result is an
//! immutable [`AgentConfig`] which is turned into the [`RunContext`] consumed
//! by the rest of the pipeline.
//!
//! Environment:
//! - `CONFIG_PATH` (required): YAML file with the log level and endpoints.
//! - `NEW_RELIC_LICENSE_KEY` (required): credential sent in the `Api-Key` header.
//! - `NEW_RELIC_ACCOUNT_ID` (required): account the events are written to.
//! - `NODE_NAME`, `NAMESPACE_NAME`, `POD_NAME` (optional): reported with every log batch.
//!
//! ```yaml
//! newrelic:
//!   logLevel: DEBUG
//! endpoints:
//!   - type: kvp
//!     name: MyEndpoint
//!     url: http://host:8080/status
//! ```

use crate::context::{EnvironmentIdentity, RunContext};
use crate::endpoint::Endpoint;
use crate::errors::ConfigError;
use crate::logs::LogLevel;
use crate::parser::ParserRegistry;
use figment::providers::{Format, Yaml};
use figment::Figment;
use serde::Deserialize;
use std::env;
use tracing::debug;

pub const CONFIG_PATH_VAR: &str = "CONFIG_PATH";
pub const LICENSE_KEY_VAR: &str = "NEW_RELIC_LICENSE_KEY";
pub const ACCOUNT_ID_VAR: &str = "NEW_RELIC_ACCOUNT_ID";
pub const NODE_NAME_VAR: &str = "NODE_NAME";
pub const NAMESPACE_NAME_VAR: &str = "NAMESPACE_NAME";
pub const POD_NAME_VAR: &str = "POD_NAME";

const EU_LICENSE_PREFIX: &str = "eu";

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    newrelic: NewRelicSection,
    #[serde(default)]
    endpoints: Vec<Endpoint>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NewRelicSection {
    #[serde(default)]
    log_level: LogLevel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentConfig {
    pub log_level: LogLevel,
    pub endpoints: Vec<Endpoint>,
    pub license_key: String,
    pub account_id: String,
    pub events_url: String,
    pub logs_url: String,
    pub identity: EnvironmentIdentity,
}

impl AgentConfig {
    /// Loads the configuration from the process environment, validating
    /// endpoint types against the built-in parsers.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok(), &ParserRegistry::default())
    }

    /// Loads the configuration reading variables through `lookup`.
    ///
    /// Checks run in a fixed order and the first failure is returned: config
    /// path, file read, YAML shape, endpoint list, endpoint fields, endpoint
    /// types, license key, account id.
    pub fn from_lookup<F>(lookup: F, registry: &ParserRegistry) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.is_empty());

        let path = var(CONFIG_PATH_VAR).ok_or(ConfigError::ConfigPathNotDefined)?;
        let file = load_file(&path)?;
        check_endpoints(&file.endpoints, registry)?;

        let license_key = var(LICENSE_KEY_VAR).ok_or(ConfigError::LicenseKeyMissing)?;
        let account_id = var(ACCOUNT_ID_VAR).ok_or(ConfigError::AccountIdMissing)?;

        let config = Self {
            log_level: file.newrelic.log_level,
            endpoints: file.endpoints,
            events_url: events_url(&license_key, &account_id),
            logs_url: logs_url(&license_key),
            license_key,
            account_id,
            identity: EnvironmentIdentity {
                node_name: var(NODE_NAME_VAR),
                namespace_name: var(NAMESPACE_NAME_VAR),
                pod_name: var(POD_NAME_VAR),
            },
        };

        debug!(
            endpoints = config.endpoints.len(),
            log_level = config.log_level.as_ref(),
            "Config file is successfully created."
        );
        Ok(config)
    }

    /// Context of one run, with its log forwarder pointed at this
    /// configuration's logs intake.
    #[must_use]
    pub fn into_run_context(self) -> RunContext {
        RunContext::new(
            self.endpoints,
            self.events_url,
            self.logs_url,
            self.license_key,
            self.identity,
            self.log_level,
        )
    }
}

fn load_file(path: &str) -> Result<ConfigFile, ConfigError> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ConfigFileUnreadable(format!("{path}: {e}")))?;

    Figment::new()
        .merge(Yaml::string(&contents))
        .extract::<ConfigFile>()
        .map_err(|e| ConfigError::ConfigFileInvalid(e.to_string()))
}

fn check_endpoints(endpoints: &[Endpoint], registry: &ParserRegistry) -> Result<(), ConfigError> {
    if endpoints.is_empty() {
        return Err(ConfigError::NoEndpoints);
    }

    for endpoint in endpoints {
        if !endpoint.is_complete() {
            return Err(ConfigError::EndpointInfoMissing);
        }
        if !registry.supports(&endpoint.endpoint_type) {
            return Err(ConfigError::UnsupportedEndpointType {
                endpoint_type: endpoint.endpoint_type.clone(),
                supported: registry.types().join(", "),
            });
        }
    }

    Ok(())
}

#[must_use]
pub fn events_url(license_key: &str, account_id: &str) -> String {
    if license_key.starts_with(EU_LICENSE_PREFIX) {
        format!("https://insights-collector.eu01.nr-data.net/v1/accounts/{account_id}/events")
    } else {
        format!("https://insights-collector.nr-data.net/v1/accounts/{account_id}/events")
    }
}

#[must_use]
pub fn logs_url(license_key: &str) -> String {
    if license_key.starts_with(EU_LICENSE_PREFIX) {
        "https://log-api.eu.newrelic.com/log/v1".to_string()
    } else {
        "https://log-api.newrelic.com/log/v1".to_string()
    }
}
