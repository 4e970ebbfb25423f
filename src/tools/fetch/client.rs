use super::headers::headers_for_user_agent;
use crate::error::{DepthChartError, Result};
use reqwest::blocking::Client;
use reqwest::redirect;

const REDIRECT_LIMIT: usize = 10;

/// Build the blocking client used for the single page fetch.
///
/// No timeout is set; the library default applies.
pub(crate) fn build_client(user_agent: &str) -> Result<Client> {
    Client::builder()
        .default_headers(headers_for_user_agent(user_agent)?)
        .redirect(redirect::Policy::limited(REDIRECT_LIMIT))
        .gzip(true)
        .brotli(true)
        .deflate(true)
        .build()
        .map_err(|e| DepthChartError::Network(format!("Failed to build client: {}", e)))
}
