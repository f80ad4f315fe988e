// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Buffers operational log records for the whole run and uploads them in a
//! single batch on an explicit flush.
//!
//! ```text
//!   record() ──> in-memory buffer ──(flush)──> JSON [{common, logs}] ──> POST, expect 202
//! ```
//!
//! `record` appends under a short-lived mutex and never performs I/O. `flush`
//! uploads a snapshot of the records captured so far: records arriving while
//! a flush is in flight stay in the buffer but are not part of that upload.

use crate::constants::{API_KEY_HEADER, HTTP_TIMEOUT};
use crate::context::EnvironmentIdentity;
use crate::errors::ForwardError;
use crate::http::get_client;
use crate::logs::record::{LogRecord, LogSink};
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{debug, error};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommonBlock {
    pub attributes: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogBlock {
    pub timestamp: i64,
    pub message: String,
    pub attributes: BTreeMap<String, String>,
}

/// Common attributes plus every record captured so far, in capture order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogBatch {
    pub common: CommonBlock,
    pub logs: Vec<LogBlock>,
}

#[derive(Debug)]
pub struct LogForwarder {
    client: reqwest::Client,
    logs_url: String,
    api_key: String,
    identity: EnvironmentIdentity,
    buffer: Mutex<Vec<LogRecord>>,
}

impl LogForwarder {
    pub fn new(
        logs_url: impl Into<String>,
        api_key: impl Into<String>,
        identity: EnvironmentIdentity,
    ) -> Self {
        Self {
            client: get_client(HTTP_TIMEOUT),
            logs_url: logs_url.into(),
            api_key: api_key.into(),
            identity,
            buffer: Mutex::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer().is_empty()
    }

    #[must_use]
    pub fn build_batch(&self) -> LogBatch {
        let logs = self
            .buffer()
            .iter()
            .map(|record| LogBlock {
                timestamp: record.timestamp,
                message: record.message.clone(),
                attributes: record.attributes.clone(),
            })
            .collect();

        LogBatch {
            common: CommonBlock {
                attributes: self.identity.common_attributes(),
            },
            logs,
        }
    }

    /// Uploads everything recorded so far as one batch.
    ///
    /// Success is exactly `202 Accepted`; anything else is a [`ForwardError`]
    /// and nothing is resent.
    pub async fn flush(&self) -> Result<(), ForwardError> {
        if self.is_empty() {
            debug!("LOGS | No log records captured, sending common attributes only");
        }

        let batch = self.build_batch();
        let n_logs = batch.logs.len();
        debug!("LOGS | Flushing {n_logs} log records");

        let payload = serde_json::to_vec(&[batch])?;

        let request = self
            .client
            .post(&self.logs_url)
            .header(CONTENT_TYPE, "application/json")
            .header(API_KEY_HEADER, &self.api_key)
            .body(payload)
            .build()
            .map_err(ForwardError::RequestBuild)?;

        let response = self.client.execute(request).await.map_err(|e| {
            error!("LOGS | Failed to send log batch: {}", e);
            ForwardError::Transport(e)
        })?;

        let status = response.status();
        if status != StatusCode::ACCEPTED {
            error!("LOGS | Log batch was rejected with status {}", status);
            return Err(ForwardError::UnexpectedStatus {
                expected: StatusCode::ACCEPTED,
                actual: status,
            });
        }

        debug!("LOGS | Flushed {n_logs} log records");
        Ok(())
    }

    fn buffer(&self) -> MutexGuard<'_, Vec<LogRecord>> {
        self.buffer.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl LogSink for LogForwarder {
    fn record(&self, record: LogRecord) {
        self.buffer().push(record);
    }
}
