// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use crate::constants::{INSTRUMENTATION_PROVIDER, INSTRUMENTATION_PROVIDER_KEY};
use crate::logs::level::LogLevel;
use crate::logs::record::{LogRecord, LogSink, NoopSink};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, error, info, trace, warn};

/// Handle components use to emit operational log lines.
///
/// Every line goes to `tracing` for local output. Lines at or above the
/// configured threshold are also captured as [`LogRecord`]s and handed to the
/// sink, with the instrumentation-provider tag merged under the call-site
/// attributes.
#[derive(Clone)]
pub struct OperationalLog {
    threshold: LogLevel,
    sink: Arc<dyn LogSink>,
}

impl OperationalLog {
    pub fn new(threshold: LogLevel, sink: Arc<dyn LogSink>) -> Self {
        Self { threshold, sink }
    }

    /// A handle that only writes to `tracing`.
    #[must_use]
    pub fn disabled() -> Self {
        Self::new(LogLevel::Error, Arc::new(NoopSink))
    }

    pub fn error(&self, message: &str, attributes: &[(&str, String)]) {
        self.log(LogLevel::Error, message, attributes);
    }

    pub fn warn(&self, message: &str, attributes: &[(&str, String)]) {
        self.log(LogLevel::Warn, message, attributes);
    }

    pub fn info(&self, message: &str, attributes: &[(&str, String)]) {
        self.log(LogLevel::Info, message, attributes);
    }

    pub fn debug(&self, message: &str, attributes: &[(&str, String)]) {
        self.log(LogLevel::Debug, message, attributes);
    }

    pub fn log(&self, level: LogLevel, message: &str, attributes: &[(&str, String)]) {
        let mut merged = BTreeMap::from([(
            INSTRUMENTATION_PROVIDER_KEY.to_string(),
            INSTRUMENTATION_PROVIDER.to_string(),
        )]);
        for (key, value) in attributes {
            merged.insert((*key).to_string(), value.clone());
        }

        match level {
            LogLevel::Error => error!(attributes = ?merged, "{}", message),
            LogLevel::Warn => warn!(attributes = ?merged, "{}", message),
            LogLevel::Info => info!(attributes = ?merged, "{}", message),
            LogLevel::Debug => debug!(attributes = ?merged, "{}", message),
            LogLevel::Trace => trace!(attributes = ?merged, "{}", message),
        }

        if self.threshold.enables(level) {
            self.sink.record(LogRecord::now(level, message, merged));
        }
    }
}

impl fmt::Debug for OperationalLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OperationalLog")
            .field("threshold", &self.threshold)
            .finish_non_exhaustive()
    }
}
