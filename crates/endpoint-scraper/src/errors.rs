// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use reqwest::StatusCode;

/// Failure while scraping a single endpoint.
///
/// Never fatal: the scrape loop logs it and moves on to the next endpoint.
#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    #[error("http request could not be created")]
    RequestBuild(#[source] reqwest::Error),

    #[error("http request has failed")]
    Transport(#[source] reqwest::Error),

    #[error("http request has returned not OK status: {0}")]
    UnexpectedStatus(StatusCode),

    #[error("response body could not be parsed")]
    BodyRead(#[source] reqwest::Error),
}

impl ScrapeError {
    /// Underlying error detail, if any, for the `error` log attribute.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::RequestBuild(e) | Self::Transport(e) | Self::BodyRead(e) => Some(e.to_string()),
            Self::UnexpectedStatus(_) => None,
        }
    }
}

/// Failure of an events upload or a logs flush. The batch is not resent.
#[derive(Debug, thiserror::Error)]
pub enum ForwardError {
    #[error("payload could not be created: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("payload could not be zipped: {0}")]
    Compression(#[from] std::io::Error),

    #[error("http request could not be created: {0}")]
    RequestBuild(#[source] reqwest::Error),

    #[error("http request has failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("http request has returned not OK status: expected {expected}, got {actual}")]
    UnexpectedStatus {
        expected: StatusCode,
        actual: StatusCode,
    },
}

/// Failure while building the run configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config path is not defined")]
    ConfigPathNotDefined,

    #[error("config file could not be read: {0}")]
    ConfigFileUnreadable(String),

    #[error("config file could not be parsed into yaml format: {0}")]
    ConfigFileInvalid(String),

    #[error("no endpoint is defined")]
    NoEndpoints,

    #[error("check your endpoint definitions! type, name and url must be defined")]
    EndpointInfoMissing,

    #[error("only the following types are supported: {supported}")]
    UnsupportedEndpointType {
        endpoint_type: String,
        supported: String,
    },

    #[error("license key is not provided! define NEW_RELIC_LICENSE_KEY")]
    LicenseKeyMissing,

    #[error("account id is not provided! define NEW_RELIC_ACCOUNT_ID")]
    AccountIdMissing,
}
