use serde::Serialize;

/// Result of a fetch including telemetry metadata.
#[derive(Debug, Clone, Serialize)]
pub struct FetchResult {
    /// The fetched HTML content
    pub html: String,
    /// Final URL after redirects
    pub final_url: String,
    /// HTTP status code of the final response
    pub status: u16,
    /// Total duration in milliseconds
    pub duration_ms: u64,
}

impl FetchResult {
    /// Consume the result and return just the HTML.
    pub fn into_html(self) -> String {
        self.html
    }
}
