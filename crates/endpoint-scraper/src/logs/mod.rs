// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

pub mod forwarder;
pub mod level;
pub mod operational;
pub mod record;

pub use forwarder::{LogBatch, LogForwarder};
pub use level::LogLevel;
pub use operational::OperationalLog;
pub use record::{LogRecord, LogSink, NoopSink};
