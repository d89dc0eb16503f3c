//! Stored response entries.
//!
//! One row per URL digest. The `response` column holds the payload as JSON:
//! an array of lines for HTML, the decoded value for JSON.

use super::connection::CacheDb;
use super::hash::compute_cache_key;
use super::ResponseCache;
use crate::{Error, ExtractedResult};
use rusqlite::{OptionalExtension, params};

impl CacheDb {
    /// Number of stored entries.
    pub fn len(&self) -> Result<u64, Error> {
        let count: i64 = self.conn().query_row("SELECT COUNT(*) FROM responses", [], |row| row.get(0))?;
        Ok(count as u64)
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> Result<bool, Error> {
        Ok(self.len()? == 0)
    }
}

impl ResponseCache for CacheDb {
    fn lookup(&self, url: &str) -> Result<Option<ExtractedResult>, Error> {
        let hash = compute_cache_key(url);
        let row: Option<(String, String)> = self
            .conn()
            .query_row("SELECT kind, response FROM responses WHERE url = ?1", params![hash], |row| {
                Ok((row.get(0)?, row.get(1)?))
            })
            .optional()?;

        let Some((kind, payload)) = row else {
            return Ok(None);
        };

        match ExtractedResult::from_payload(&kind, &payload) {
            Some(Ok(result)) => Ok(Some(result)),
            Some(Err(e)) => Err(Error::CorruptEntry(format!("{hash}: {e}"))),
            None => Err(Error::CorruptEntry(format!("{hash}: unknown kind {kind:?}"))),
        }
    }

    /// Concurrent writers to the same key resolve last-write-wins.
    fn store(&self, url: &str, result: &ExtractedResult) -> Result<(), Error> {
        let hash = compute_cache_key(url);
        let payload = result
            .payload_json()
            .map_err(|e| Error::CorruptEntry(format!("{hash}: {e}")))?;

        self.conn().execute(
            "INSERT INTO responses (url, kind, response, stored_at) VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT(url) DO UPDATE SET
                kind = excluded.kind,
                response = excluded.response,
                stored_at = excluded.stored_at",
            params![hash, result.kind(), payload, chrono::Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }
}
