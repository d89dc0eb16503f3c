//! Client code for rawfetch.
//!
//! This crate provides the raw-socket fetch pipeline, content dispatch,
//! HTML outline extraction and search filtering used by the CLI.

pub mod dispatch;
pub mod extract;
pub mod fetch;
pub mod search;

pub use dispatch::{ContentKind, dispatch};
pub use extract::{Extractor, OutlineExtractor, extract_links, extract_outline};
pub use fetch::{Fetched, Fetcher, ParsedResponse, Request, Target};
pub use search::filter_lines;
