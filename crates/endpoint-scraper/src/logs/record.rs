// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use crate::logs::level::LogLevel;
use std::collections::BTreeMap;
use std::time::{SystemTime, UNIX_EPOCH};

/// Immutable snapshot of one emitted operational log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    /// Unix time in microseconds at capture.
    pub timestamp: i64,
    pub level: LogLevel,
    pub message: String,
    pub attributes: BTreeMap<String, String>,
}

impl LogRecord {
    /// Captures a record stamped with the current time.
    pub fn now(
        level: LogLevel,
        message: impl Into<String>,
        attributes: BTreeMap<String, String>,
    ) -> Self {
        Self {
            timestamp: unix_micros(SystemTime::now()),
            level,
            message: message.into(),
            attributes,
        }
    }
}

/// Destination for captured records.
///
/// `record` is called from whichever task logs and must not block on I/O.
pub trait LogSink: Send + Sync {
    fn record(&self, record: LogRecord);
}

/// Sink that drops everything, for runs that do not forward their logs.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl LogSink for NoopSink {
    fn record(&self, _record: LogRecord) {}
}

#[allow(clippy::cast_possible_truncation)]
fn unix_micros(time: SystemTime) -> i64 {
    match time.duration_since(UNIX_EPOCH) {
        Ok(elapsed) => elapsed.as_micros() as i64,
        Err(before_epoch) => -(before_epoch.duration().as_micros() as i64),
    }
}
