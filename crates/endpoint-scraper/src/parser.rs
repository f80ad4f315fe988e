// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Response parsers and the registry mapping endpoint types to them.
//!
//! Parsers never fail: endpoint payloads are outside the agent's control, so
//! anything that cannot be interpreted is dropped instead of rejected.

use crate::constants::KVP_ENDPOINT_TYPE;
use crate::store::Attributes;
use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::Arc;
use tracing::debug;

/// Turns a raw response body into attributes.
pub trait Parser: Debug + Send + Sync {
    fn parse(&self, raw: &[u8]) -> Attributes;
}

/// Line-oriented `key:value` parser.
///
/// Each line is split on its first colon only, key and value are trimmed,
/// lines without a colon are ignored and the last occurrence of a key wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct KvpParser;

impl Parser for KvpParser {
    fn parse(&self, raw: &[u8]) -> Attributes {
        let text = String::from_utf8_lossy(raw);
        let mut values = Attributes::new();

        for line in text.split('\n') {
            let Some((key, value)) = line.split_once(':') else {
                continue;
            };
            values.insert(key.trim().to_string(), value.trim().to_string());
        }

        values
    }
}

/// Registry of parsers keyed by endpoint type.
///
/// Populated at startup; the scrape loop only looks parsers up, so new
/// endpoint types are added by registering them here.
#[derive(Debug, Clone)]
pub struct ParserRegistry {
    parsers: HashMap<String, Arc<dyn Parser>>,
}

impl Default for ParserRegistry {
    /// Registry with the built-in `kvp` parser.
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register(KVP_ENDPOINT_TYPE, KvpParser);
        registry
    }
}

impl ParserRegistry {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            parsers: HashMap::new(),
        }
    }

    /// Registers `parser` for `endpoint_type`, replacing any previous one.
    pub fn register<P: Parser + 'static>(&mut self, endpoint_type: &str, parser: P) {
        self.parsers
            .insert(endpoint_type.to_string(), Arc::new(parser));
        debug!(endpoint_type, "Registered parser");
    }

    #[must_use]
    pub fn get(&self, endpoint_type: &str) -> Option<Arc<dyn Parser>> {
        self.parsers.get(endpoint_type).cloned()
    }

    #[must_use]
    pub fn supports(&self, endpoint_type: &str) -> bool {
        self.parsers.contains_key(endpoint_type)
    }

    /// Registered endpoint types, sorted.
    #[must_use]
    pub fn types(&self) -> Vec<String> {
        let mut types: Vec<String> = self.parsers.keys().cloned().collect();
        types.sort();
        types
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Attributes {
        KvpParser.parse(text.as_bytes())
    }

    #[test]
    fn test_parse_key_value_lines() {
        let values = parse("k1:v1\nk2:v2\nk3:v3");
        assert_eq!(values.len(), 3);
        assert_eq!(values.get("k1"), Some(&"v1".to_string()));
        assert_eq!(values.get("k3"), Some(&"v3".to_string()));
    }

    #[test]
    fn test_parse_trims_key_and_value() {
        let values = parse("  spaced key  :   spaced value \r\n");
        assert_eq!(
            values.get("spaced key"),
            Some(&"spaced value".to_string())
        );
    }

    #[test]
    fn test_parse_splits_on_first_colon_only() {
        let values = parse("url: http://localhost:8080/path");
        assert_eq!(
            values.get("url"),
            Some(&"http://localhost:8080/path".to_string())
        );
    }

    #[test]
    fn test_parse_last_duplicate_wins() {
        let values = parse("a:1\na:2\n");
        assert_eq!(values.len(), 1);
        assert_eq!(values.get("a"), Some(&"2".to_string()));
    }

    #[test]
    fn test_parse_ignores_blank_and_colonless_lines() {
        let values = parse("\nkeyonly\nb:2\n");
        assert_eq!(values.len(), 1);
        assert_eq!(values.get("b"), Some(&"2".to_string()));
    }

    #[test]
    fn test_parse_empty_and_invalid_utf8() {
        assert!(parse("").is_empty());

        let values = KvpParser.parse(b"k:\xffv\n\xfe\xfd");
        assert_eq!(values.len(), 1);
        assert!(values.contains_key("k"));
    }

    #[test]
    fn test_registry_default_has_kvp() {
        let registry = ParserRegistry::default();
        assert!(registry.supports("kvp"));
        assert!(!registry.supports("yaml"));
        assert_eq!(registry.types(), vec!["kvp".to_string()]);
    }

    #[derive(Debug)]
    struct ConstantParser;

    impl Parser for ConstantParser {
        fn parse(&self, _raw: &[u8]) -> Attributes {
            Attributes::from([("constant".to_string(), "1".to_string())])
        }
    }

    #[test]
    fn test_registry_register_custom_parser() {
        let mut registry = ParserRegistry::empty();
        assert!(registry.get("const").is_none());

        registry.register("const", ConstantParser);

        let parser = registry.get("const").expect("parser not registered");
        assert_eq!(parser.parse(b"ignored").get("constant"), Some(&"1".to_string()));
    }
}
