//! Descriptor memo
//!
//! Parsing is deterministic, so results can be shared between callers.

use crate::estimate::parser::parse_model_identifier;
use crate::types::ModelDescriptor;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// Concurrent identifier -> descriptor map
#[derive(Debug, Default)]
pub struct DescriptorCache {
    entries: DashMap<String, ModelDescriptor>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl DescriptorCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached descriptor for the identifier, parsing it on first use
    pub fn get_or_parse(&self, identifier: &str) -> ModelDescriptor {
        if let Some(entry) = self.entries.get(identifier) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return *entry.value();
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let descriptor = parse_model_identifier(identifier);
        self.entries.insert(identifier.to_string(), descriptor);
        descriptor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }

    pub fn clear(&self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_cache_hits_after_first_parse() {
        let cache = DescriptorCache::new();
        let first = cache.get_or_parse("gemma-2b-it-q4");
        let second = cache.get_or_parse("gemma-2b-it-q4");
        assert_eq!(first, second);
        assert_eq!(first, parse_model_identifier("gemma-2b-it-q4"));
        assert_eq!(cache.misses(), 1);
        assert_eq!(cache.hits(), 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_identifiers_are_case_sensitive_keys() {
        let cache = DescriptorCache::new();
        let lower = cache.get_or_parse("phi-2");
        let upper = cache.get_or_parse("PHI-2");
        assert_eq!(lower, upper);
        assert_eq!(cache.len(), 2);

        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_shared_across_threads() {
        let cache = Arc::new(DescriptorCache::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let cache = Arc::clone(&cache);
                thread::spawn(move || cache.get_or_parse("mistral-7b-instruct-q4"))
            })
            .collect();

        for handle in handles {
            let descriptor = handle.join().unwrap();
            assert_eq!(descriptor.parameter_count_b, 7.0);
        }
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.hits() + cache.misses(), 4);
    }
}
