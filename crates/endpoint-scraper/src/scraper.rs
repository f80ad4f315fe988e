// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! One sequential pass over the configured endpoints.
//!
//! Every stage of a single endpoint (request build, transport, status check,
//! body read) fails on its own: the failure is logged with the endpoint's
//! identity and the loop moves on. A failed endpoint is simply absent from the
//! [`ValueStore`] afterwards. There are no retries.

use crate::constants::{ERROR_KEY, HTTP_TIMEOUT};
use crate::endpoint::Endpoint;
use crate::errors::ScrapeError;
use crate::http::get_client;
use crate::logs::OperationalLog;
use crate::parser::ParserRegistry;
use crate::store::{Attributes, ValueStore};
use reqwest::StatusCode;

#[derive(Debug, Clone)]
pub struct Scraper {
    client: reqwest::Client,
    registry: ParserRegistry,
    log: OperationalLog,
}

impl Scraper {
    pub fn new(registry: ParserRegistry, log: OperationalLog) -> Self {
        Self {
            client: get_client(HTTP_TIMEOUT),
            registry,
            log,
        }
    }

    /// Visits every endpoint once, in order, and stores the parsed attributes
    /// of each one that succeeds.
    pub async fn run(&self, endpoints: &[Endpoint], store: &ValueStore) {
        self.log.debug("Looping over the endpoints to scrape...", &[]);

        for endpoint in endpoints {
            self.log.debug("Scraping endpoint...", &endpoint.attributes());

            match self.scrape_endpoint(endpoint).await {
                Ok(Some(values)) => {
                    store.put(endpoint.clone(), values);
                    self.log
                        .debug("Endpoint values are parsed.", &endpoint.attributes());
                }
                Ok(None) => {}
                Err(e) => {
                    let mut attributes = endpoint.attributes();
                    if let Some(detail) = e.detail() {
                        attributes.push((ERROR_KEY, detail));
                    }
                    self.log.error(&e.to_string(), &attributes);
                }
            }
        }
    }

    /// Fetches and parses a single endpoint.
    ///
    /// Returns `Ok(None)` when no parser is registered for the endpoint type.
    pub async fn scrape_endpoint(
        &self,
        endpoint: &Endpoint,
    ) -> Result<Option<Attributes>, ScrapeError> {
        let request = self
            .client
            .get(&endpoint.url)
            .build()
            .map_err(ScrapeError::RequestBuild)?;

        let response = self
            .client
            .execute(request)
            .await
            .map_err(ScrapeError::Transport)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ScrapeError::UnexpectedStatus(status));
        }

        let body = response.bytes().await.map_err(ScrapeError::BodyRead)?;

        Ok(self
            .registry
            .get(&endpoint.endpoint_type)
            .map(|parser| parser.parse(&body)))
    }
}
