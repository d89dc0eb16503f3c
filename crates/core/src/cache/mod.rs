//! Response cache keyed by a hash of the request URL.
//!
//! Two stores implement [`ResponseCache`]:
//!
//! - [`CacheDb`]: SQLite file in WAL mode, shared across processes
//! - [`MemoryCache`]: process-local map, for tests and cache-less runs
//!
//! Entries are written once and never expire.

pub mod connection;
pub mod hash;
pub mod memory;
pub mod migrations;
pub mod responses;

pub use crate::Error;

pub use connection::CacheDb;
pub use memory::MemoryCache;

use crate::ExtractedResult;

/// Lookup/store contract shared by every cache backend.
///
/// Implementations hash the URL with [`hash::compute_cache_key`]; callers
/// always pass the raw URL string.
pub trait ResponseCache: Send + Sync {
    /// Return the stored result for `url`, if any.
    fn lookup(&self, url: &str) -> Result<Option<ExtractedResult>, Error>;

    /// Persist `result` under `url`.
    fn store(&self, url: &str, result: &ExtractedResult) -> Result<(), Error>;
}
