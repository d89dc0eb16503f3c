//! The unit of output for one fetch.

/// Separator placed between extracted text lines and harvested links.
pub const LINKS_SEPARATOR: &str = "-- Links --";

/// Structured result of a successful fetch.
///
/// HTML bodies become an ordered list of lines; JSON bodies are kept as the
/// decoded value. This is what the cache stores and what callers receive.
#[derive(Debug, Clone, PartialEq)]
pub enum ExtractedResult {
    Html(Vec<String>),
    Json(serde_json::Value),
}

impl ExtractedResult {
    /// Short tag used as the `kind` column in the cache.
    pub fn kind(&self) -> &'static str {
        match self {
            ExtractedResult::Html(_) => "html",
            ExtractedResult::Json(_) => "json",
        }
    }

    /// Serialize only the payload, without the kind tag.
    pub fn payload_json(&self) -> Result<String, serde_json::Error> {
        match self {
            ExtractedResult::Html(lines) => serde_json::to_string(lines),
            ExtractedResult::Json(value) => serde_json::to_string(value),
        }
    }

    /// Rebuild a result from a kind tag and its payload.
    ///
    /// Returns `None` for an unknown kind.
    pub fn from_payload(kind: &str, payload: &str) -> Option<Result<Self, serde_json::Error>> {
        match kind {
            "html" => Some(serde_json::from_str(payload).map(ExtractedResult::Html)),
            "json" => Some(serde_json::from_str(payload).map(ExtractedResult::Json)),
            _ => None,
        }
    }

    /// Render the result as printable lines.
    ///
    /// JSON values are pretty-printed and split on newlines.
    pub fn lines(&self) -> Vec<String> {
        match self {
            ExtractedResult::Html(lines) => lines.clone(),
            ExtractedResult::Json(value) => serde_json::to_string_pretty(value)
                .unwrap_or_else(|_| value.to_string())
                .lines()
                .map(str::to_string)
                .collect(),
        }
    }
}
