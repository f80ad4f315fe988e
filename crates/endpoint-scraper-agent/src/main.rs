// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

#![cfg_attr(not(test), deny(clippy::panic))]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::todo))]
#![cfg_attr(not(test), deny(clippy::unimplemented))]

use std::process::ExitCode;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use endpoint_scraper::{
    agent::run_once,
    config::AgentConfig,
    logs::LogLevel,
    parser::ParserRegistry,
};

#[tokio::main]
pub async fn main() -> ExitCode {
    let config = AgentConfig::from_env();

    let log_level = config
        .as_ref()
        .map(|c| c.log_level)
        .unwrap_or_default();
    init_logging(log_level);

    let config = match config {
        Ok(c) => c,
        Err(e) => {
            error!("Error creating config on endpoint scraper startup: {e}");
            return ExitCode::FAILURE;
        }
    };

    let ctx = config.into_run_context();

    debug!("Starting endpoint scraper for {} endpoints", ctx.endpoints().len());
    let report = run_once(&ctx, ParserRegistry::default()).await;

    if let Err(e) = &report.events {
        error!("Failed to forward events: {e}");
    }
    if let Err(e) = &report.logs {
        error!("Failed to forward logs: {e}");
    }

    if report.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn init_logging(log_level: LogLevel) {
    let env_filter = format!(
        "h2=off,hyper=off,rustls=off,{}",
        log_level.as_filter_directive()
    );

    let subscriber = tracing_subscriber::fmt::Subscriber::builder()
        .with_env_filter(EnvFilter::try_new(env_filter).unwrap_or_else(|_| EnvFilter::new("error")))
        .with_level(true)
        .with_thread_names(false)
        .with_thread_ids(false)
        .with_line_number(false)
        .with_file(false)
        .with_target(true)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Unable to install log subscriber: {e}");
        return;
    }

    debug!("Logging subsystem enabled");
}
