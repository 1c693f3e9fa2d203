//! JSON output formatting

use chrono::Utc;
use serde::Serialize;

/// Wrapper for JSON output with metadata
#[derive(Debug, Serialize)]
pub struct JsonOutput<'a, T: ?Sized> {
    /// The actual data
    pub data: &'a T,

    /// Metadata about the run
    pub meta: Metadata,
}

/// Metadata included in JSON output
#[derive(Debug, Serialize)]
pub struct Metadata {
    /// Time the output was produced
    pub timestamp: String,

    /// Tool version
    pub version: &'static str,
}

impl<'a, T: ?Sized> JsonOutput<'a, T> {
    /// Wrap data with metadata
    pub fn new(data: &'a T) -> Self {
        Self {
            data,
            meta: Metadata {
                timestamp: Utc::now().to_rfc3339(),
                version: env!("CARGO_PKG_VERSION"),
            },
        }
    }
}

/// Format data as pretty-printed JSON
pub fn format_json<T: Serialize + ?Sized>(data: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonOutput::new(data))
}
