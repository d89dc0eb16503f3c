//! Routing a parsed response to the right decoder.

use crate::extract::Extractor;
use crate::fetch::response::ParsedResponse;
use rawfetch_core::{Error, ExtractedResult};

/// The closed set of body kinds this client understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentKind {
    Html,
    Json,
    Unsupported(String),
}

impl ContentKind {
    /// Classify a declared Content-Type value.
    ///
    /// Matching is a case-insensitive substring test, so parameters such as
    /// `; charset=utf-8` do not matter.
    pub fn classify(content_type: &str) -> Self {
        let lowered = content_type.to_ascii_lowercase();
        if lowered.contains("text/html") {
            ContentKind::Html
        } else if lowered.contains("application/json") {
            ContentKind::Json
        } else {
            ContentKind::Unsupported(content_type.to_string())
        }
    }
}

/// Turn a parsed response into an [`ExtractedResult`].
///
/// Checks run in order: status must be 200, a Content-Type must be present,
/// then the body goes to the HTML extractor or the JSON decoder.
pub fn dispatch(response: &ParsedResponse, extractor: &dyn Extractor) -> Result<ExtractedResult, Error> {
    if response.status != 200 {
        return Err(Error::UnexpectedStatus(response.status));
    }

    let content_type = response.content_type().ok_or(Error::MissingContentType)?;

    match ContentKind::classify(content_type) {
        ContentKind::Html => {
            let html = String::from_utf8_lossy(&response.body);
            Ok(ExtractedResult::Html(extractor.extract(&html)))
        }
        ContentKind::Json => {
            let value = serde_json::from_slice(&response.body).map_err(Error::Decode)?;
            Ok(ExtractedResult::Json(value))
        }
        ContentKind::Unsupported(declared) => Err(Error::UnsupportedContentType(declared)),
    }
}
