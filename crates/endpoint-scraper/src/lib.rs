// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Endpoint scraper: polls a fixed set of HTTP endpoints, parses each response
//! into key/value attributes and forwards the results, plus the agent's own
//! operational logs, to a remote ingestion service.
//!
//! ```text
//!   RunContext ──> Scraper ──> ValueStore ──> EventForwarder ──> events intake
//!        │
//!        └──> OperationalLog ──> LogForwarder ──(flush)──> logs intake
//! ```

#![cfg_attr(not(test), deny(clippy::panic))]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::todo))]
#![cfg_attr(not(test), deny(clippy::unimplemented))]

pub mod agent;
pub mod config;
pub mod constants;
pub mod context;
pub mod endpoint;
pub mod errors;
pub mod forwarder;
pub mod http;
pub mod logs;
pub mod parser;
pub mod scraper;
pub mod store;
