//! rawfetch command-line entry point.
//!
//! Results go to stdout; logs go to stderr as JSON lines, filtered by
//! `RUST_LOG`.

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use rawfetch_client::{Fetcher, filter_lines};
use rawfetch_core::{AppConfig, CacheDb, ExtractedResult, MemoryCache, ResponseCache};
use tracing_subscriber::EnvFilter;

mod args;

use args::Args;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .json()
        .init();

    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let config = AppConfig::load().context("loading configuration")?;
    let fetcher = Fetcher::new(open_cache(&config)?);

    if let Some(url) = &args.url {
        let fetched = fetcher.fetch(url).with_context(|| format!("fetching {url}"))?;
        tracing::info!(url, from_cache = fetched.from_cache, "fetch complete");
        print_result(&fetched.result)?;
    } else if let Some(term) = &args.search {
        let fetched = fetcher
            .fetch(&config.search_url)
            .with_context(|| format!("fetching {}", config.search_url))?;
        for line in filter_lines(&fetched.result, term, config.search_limit) {
            println!("{line}");
        }
    }

    Ok(())
}

fn open_cache(config: &AppConfig) -> Result<Arc<dyn ResponseCache>> {
    if !config.cache_enabled {
        return Ok(Arc::new(MemoryCache::new()));
    }
    let db = CacheDb::open(&config.db_path)
        .with_context(|| format!("opening cache at {}", config.db_path.display()))?;
    Ok(Arc::new(db))
}

fn print_result(result: &ExtractedResult) -> Result<()> {
    match result {
        ExtractedResult::Html(lines) => {
            for line in lines {
                println!("{line}");
            }
        }
        ExtractedResult::Json(value) => {
            println!("{}", serde_json::to_string_pretty(value)?);
        }
    }
    Ok(())
}
