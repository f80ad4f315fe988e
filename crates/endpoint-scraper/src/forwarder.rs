// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Turns the scraped values into events and uploads them as one batch.
//!
//! ```text
//!   ValueStore ──> [ScrapedEvent] ──> JSON ──> gzip ──> POST, expect 200
//! ```
//!
//! Any failing stage aborts the upload. Nothing is chunked or resent.

use crate::constants::{
    API_KEY_HEADER, ENDPOINT_NAME_KEY, ENDPOINT_TYPE_KEY, ENDPOINT_URL_KEY, EVENT_TYPE_KEY,
    HTTP_TIMEOUT,
};
use crate::errors::ForwardError;
use crate::http::get_client;
use crate::logs::OperationalLog;
use crate::store::ValueStore;
use flate2::write::GzEncoder;
use flate2::Compression;
use reqwest::header::{CONTENT_ENCODING, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::Write;

/// One flat event per scraped endpoint.
///
/// Identity fields (`eventType` = endpoint name, `endpointType`,
/// `endpointName`, `endpointUrl`) are written first and scraped attributes
/// after, so a scraped key with the same name replaces the identity value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ScrapedEvent(pub BTreeMap<String, String>);

impl ScrapedEvent {
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }
}

#[derive(Debug, Clone)]
pub struct EventForwarder {
    client: reqwest::Client,
    events_url: String,
    api_key: String,
    log: OperationalLog,
}

impl EventForwarder {
    pub fn new(
        events_url: impl Into<String>,
        api_key: impl Into<String>,
        log: OperationalLog,
    ) -> Self {
        Self {
            client: get_client(HTTP_TIMEOUT),
            events_url: events_url.into(),
            api_key: api_key.into(),
            log,
        }
    }

    /// Builds one event per endpoint present in `store`.
    #[must_use]
    pub fn build_events(&self, store: &ValueStore) -> Vec<ScrapedEvent> {
        self.log.debug("Creating New Relic events...", &[]);

        let events: Vec<ScrapedEvent> = store
            .list_endpoints()
            .into_iter()
            .filter_map(|endpoint| {
                let values = store.get(&endpoint)?;
                let mut event = BTreeMap::from([
                    (EVENT_TYPE_KEY.to_string(), endpoint.name.clone()),
                    (ENDPOINT_TYPE_KEY.to_string(), endpoint.endpoint_type),
                    (ENDPOINT_NAME_KEY.to_string(), endpoint.name),
                    (ENDPOINT_URL_KEY.to_string(), endpoint.url),
                ]);
                event.extend(values);
                Some(ScrapedEvent(event))
            })
            .collect();

        self.log
            .debug("New Relic events are created successfully.", &[]);
        events
    }

    /// Uploads every event in `store` as a single gzip-compressed JSON array.
    pub async fn run(&self, store: &ValueStore) -> Result<(), ForwardError> {
        let events = self.build_events(store);
        let payload = self.create_payload(&events)?;

        let request = self
            .client
            .post(&self.events_url)
            .header(CONTENT_TYPE, "application/json")
            .header(CONTENT_ENCODING, "gzip")
            .header(API_KEY_HEADER, &self.api_key)
            .body(payload)
            .build()
            .map_err(|e| self.fail(ForwardError::RequestBuild(e)))?;

        self.log.debug("Performing HTTP request...", &[]);
        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| self.fail(ForwardError::Transport(e)))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(self.fail(ForwardError::UnexpectedStatus {
                expected: StatusCode::OK,
                actual: status,
            }));
        }

        self.log
            .debug("New Relic events are forwarded successfully.", &[]);
        Ok(())
    }

    fn create_payload(&self, events: &[ScrapedEvent]) -> Result<Vec<u8>, ForwardError> {
        self.log.debug("Creating payload...", &[]);
        let json = serde_json::to_vec(events).map_err(|e| self.fail(e.into()))?;

        self.log.debug("Zipping payload...", &[]);
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder
            .write_all(&json)
            .map_err(|e| self.fail(e.into()))?;
        encoder.finish().map_err(|e| self.fail(e.into()))
    }

    fn fail(&self, e: ForwardError) -> ForwardError {
        self.log.error(&e.to_string(), &[]);
        e
    }
}
