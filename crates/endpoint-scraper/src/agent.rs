// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use crate::context::RunContext;
use crate::errors::ForwardError;
use crate::forwarder::EventForwarder;
use crate::parser::ParserRegistry;
use crate::scraper::Scraper;
use crate::store::ValueStore;

/// Outcome of both uploads of one run.
#[derive(Debug)]
pub struct RunReport {
    pub events: Result<(), ForwardError>,
    pub logs: Result<(), ForwardError>,
}

impl RunReport {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.events.is_ok() && self.logs.is_ok()
    }
}

/// Scrapes every endpoint, uploads the events and then flushes the buffered
/// operational logs to the context's logs intake. The flush is attempted even
/// when the events upload fails.
pub async fn run_once(ctx: &RunContext, registry: ParserRegistry) -> RunReport {
    let store = ValueStore::new();

    let scraper = Scraper::new(registry, ctx.log().clone());
    scraper.run(ctx.endpoints(), &store).await;
    ctx.log().debug(
        "Scraping is completed.",
        &[("endpoints", store.len().to_string())],
    );

    let forwarder = EventForwarder::new(ctx.events_url(), ctx.api_key(), ctx.log().clone());
    let events = forwarder.run(&store).await;

    let logs = ctx.log_forwarder().flush().await;

    RunReport { events, logs }
}
