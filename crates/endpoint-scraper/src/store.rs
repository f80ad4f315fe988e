// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Per-run store of scraped attributes, keyed by endpoint.
//!
//! The whole map sits behind a single `RwLock`: any number of readers, one
//! writer at a time, and a writer excludes all readers. An endpoint's
//! attribute map is swapped in as a unit by [`ValueStore::put`], so a reader
//! never observes a partially written entry.

use crate::endpoint::Endpoint;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Attribute name to attribute value, as produced by a parser.
pub type Attributes = HashMap<String, String>;

#[derive(Debug, Default)]
pub struct ValueStore {
    values: RwLock<HashMap<Endpoint, Attributes>>,
}

impl ValueStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the full attribute map for `endpoint`.
    pub fn put(&self, endpoint: Endpoint, attributes: Attributes) {
        self.write().insert(endpoint, attributes);
    }

    /// Returns a copy of the attributes stored for `endpoint`, if it was ever written.
    #[must_use]
    pub fn get(&self, endpoint: &Endpoint) -> Option<Attributes> {
        self.read().get(endpoint).cloned()
    }

    /// Endpoints currently present. Order is unspecified.
    #[must_use]
    pub fn list_endpoints(&self) -> Vec<Endpoint> {
        self.read().keys().cloned().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // A panicking writer cannot leave a half-built map behind (insert is the
    // only mutation), so a poisoned lock is still safe to use.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<Endpoint, Attributes>> {
        self.values.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<Endpoint, Attributes>> {
        self.values.write().unwrap_or_else(PoisonError::into_inner)
    }
}
