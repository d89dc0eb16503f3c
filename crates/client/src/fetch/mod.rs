//! Fetch pipeline over raw sockets.
//!
//! ### Pipeline
//! cache check → connect → build request → send → read → parse → dispatch → store
//!
//! ### Framing
//! - Requests always send `Connection: close`.
//! - Responses are read until the peer closes the stream.
//!
//! ### Caching
//! - Keyed by the exact URL string passed to [`Fetcher::fetch`].
//! - Only successful HTML and JSON results are stored; errors never are.
//! - A failing cache is logged and bypassed, never fatal to the fetch.

pub mod request;
pub mod response;
pub mod transport;
pub mod url;

use std::sync::Arc;
use std::time::Instant;

pub use request::Request;
pub use response::{ParsedResponse, parse_response, read_response};
pub use transport::{Connector, Transport};
pub use self::url::{Scheme, Target, UrlError};

use crate::dispatch::dispatch;
use crate::extract::{Extractor, OutlineExtractor};
use rawfetch_core::{Error, ExtractedResult, ResponseCache};

/// Result of a fetch and where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Fetched {
    pub result: ExtractedResult,
    /// True when served from the cache without touching the network.
    pub from_cache: bool,
}

/// Composes transport, parsing, dispatch and the injected cache.
pub struct Fetcher {
    connector: Connector,
    extractor: Box<dyn Extractor>,
    cache: Arc<dyn ResponseCache>,
}

impl Fetcher {
    /// Create a fetcher backed by `cache`, using the outline extractor.
    pub fn new(cache: Arc<dyn ResponseCache>) -> Self {
        Self { connector: Connector::new(), extractor: Box::new(OutlineExtractor::new()), cache }
    }

    /// Replace the HTML extractor.
    pub fn with_extractor(mut self, extractor: Box<dyn Extractor>) -> Self {
        self.extractor = extractor;
        self
    }

    /// Fetch `url`, serving from the cache when possible.
    pub fn fetch(&self, url: &str) -> Result<Fetched, Error> {
        match self.cache.lookup(url) {
            Ok(Some(result)) => {
                tracing::debug!(url, "cache hit");
                return Ok(Fetched { result, from_cache: true });
            }
            Ok(None) => tracing::debug!(url, "cache miss"),
            Err(e) => tracing::warn!(url, error = %e, "cache lookup failed; fetching"),
        }

        let result = self.fetch_uncached(url)?;

        if let Err(e) = self.cache.store(url, &result) {
            tracing::warn!(url, error = %e, "failed to cache result");
        }

        Ok(Fetched { result, from_cache: false })
    }

    /// Run the network pipeline without consulting or updating the cache.
    pub fn fetch_uncached(&self, url: &str) -> Result<ExtractedResult, Error> {
        let start = Instant::now();
        let target = Target::parse(url)?;

        let mut transport = self.connector.connect(&target)?;
        let host = target.host_header();
        let request = Request::get(&target.path, &host);
        let raw = read_response(&mut transport, &request.to_bytes())?;
        let received = raw.len();

        let parsed = parse_response(raw)?;
        let result = dispatch(&parsed, self.extractor.as_ref())?;

        tracing::debug!(
            "fetched {} -> {} in {}ms ({} bytes)",
            target,
            parsed.status,
            start.elapsed().as_millis(),
            received
        );

        Ok(result)
    }
}
