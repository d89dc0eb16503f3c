//! Process-local cache backend.

use super::ResponseCache;
use super::hash::compute_cache_key;
use crate::{Error, ExtractedResult};
use std::collections::HashMap;
use std::sync::RwLock;

/// In-memory response cache keyed by URL digest.
///
/// Used by tests and when the on-disk cache is disabled; entries live as
/// long as the handle.
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: RwLock<HashMap<String, ExtractedResult>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or_else(|p| p.into_inner().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ResponseCache for MemoryCache {
    fn lookup(&self, url: &str) -> Result<Option<ExtractedResult>, Error> {
        let entries = self.entries.read().unwrap_or_else(|p| p.into_inner());
        Ok(entries.get(&compute_cache_key(url)).cloned())
    }

    fn store(&self, url: &str, result: &ExtractedResult) -> Result<(), Error> {
        let mut entries = self.entries.write().unwrap_or_else(|p| p.into_inner());
        entries.insert(compute_cache_key(url), result.clone());
        Ok(())
    }
}
