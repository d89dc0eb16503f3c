//! Cache key generation.

use sha2::{Digest, Sha256};

/// Compute the cache key for a request URL.
///
/// The URL is hashed exactly as given: scheme case, trailing slashes and
/// query order all produce distinct keys.
pub fn compute_cache_key(url: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(url.as_bytes());
    hex::encode(hasher.finalize())
}
