//! Client-side filtering of extracted results.

use rawfetch_core::ExtractedResult;
use rawfetch_core::extracted::LINKS_SEPARATOR;

/// Lines of `result` containing `term`, case-insensitively, at most `limit`.
///
/// The links separator line is never a match.
pub fn filter_lines(result: &ExtractedResult, term: &str, limit: usize) -> Vec<String> {
    let needle = term.to_lowercase();

    result
        .lines()
        .into_iter()
        .filter(|line| line != LINKS_SEPARATOR)
        .filter(|line| line.to_lowercase().contains(&needle))
        .take(limit)
        .collect()
}
