use crate::error::{DepthChartError, Result};
use reqwest::StatusCode;

/// Reject any non-2xx status.
///
/// Message layout: `404 Client Error: Not Found for url: <url>`.
pub(super) fn validate_status(status: StatusCode, url: &str) -> Result<()> {
    if status.is_success() {
        return Ok(());
    }

    let class = if status.is_client_error() {
        "Client Error"
    } else if status.is_server_error() {
        "Server Error"
    } else {
        "Unexpected Status"
    };
    let reason = status.canonical_reason().unwrap_or("Unknown");

    Err(DepthChartError::Network(format!(
        "{} {}: {} for url: {}",
        status.as_u16(),
        class,
        reason,
        url
    )))
}
