//! Core types and shared functionality for rawfetch.
//!
//! This crate provides:
//! - Response cache with SQLite backend (plus an in-memory substitute)
//! - Unified error types
//! - Configuration structures
//! - The `ExtractedResult` unit that is cached and returned to callers

pub mod cache;
pub mod config;
pub mod error;
pub mod extracted;

pub use cache::{CacheDb, MemoryCache, ResponseCache};
pub use config::{AppConfig, ConfigError};
pub use error::Error;
pub use extracted::ExtractedResult;
