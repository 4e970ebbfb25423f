mod client;
mod headers;
mod tests;
mod utils;

pub mod types;

// Re-export types for public use
pub use types::*;

use crate::engine::Fetcher;
use crate::error::Result;
use reqwest::blocking::Client;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;
use tracing::debug;
use utils::validate_status;

/// Fetch a page with a single blocking GET.
///
/// Fails on transport errors and on any non-2xx status. There is no retry.
///
/// # Examples
/// ```no_run
/// use depthchart::tools::fetch::fetch;
/// use depthchart::config::{DEFAULT_URL, DEFAULT_USER_AGENT};
///
/// # fn example() -> depthchart::Result<()> {
/// let result = fetch(DEFAULT_URL, DEFAULT_USER_AGENT)?;
/// println!("{} bytes in {}ms", result.html.len(), result.duration_ms);
/// # Ok(())
/// # }
/// ```
pub fn fetch(url: &str, user_agent: &str) -> Result<FetchResult> {
    let client = client::build_client(user_agent)?;
    fetch_with_client(&client, url)
}

fn fetch_with_client(client: &Client, url: &str) -> Result<FetchResult> {
    let start = Instant::now();
    let response = client.get(url).send()?;

    let status = response.status();
    let final_url = response.url().to_string();
    validate_status(status, url)?;

    let html = response.text()?;
    let duration_ms = start.elapsed().as_millis() as u64;
    debug!(
        url,
        final_url = %final_url,
        status = status.as_u16(),
        bytes = html.len(),
        duration_ms,
        "fetched page"
    );

    Ok(FetchResult {
        html,
        final_url,
        status: status.as_u16(),
        duration_ms,
    })
}

/// Network-backed fetcher used by the CLI.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(user_agent: &str) -> Result<Self> {
        Ok(Self {
            client: client::build_client(user_agent)?,
        })
    }
}

impl Fetcher for HttpFetcher {
    fn name(&self) -> &'static str {
        "reqwest-blocking"
    }

    fn fetch(&self, url: &str) -> Result<String> {
        fetch_with_client(&self.client, url).map(FetchResult::into_html)
    }
}

/// Reads a saved HTML page from disk instead of the network.
pub struct FileFetcher {
    path: PathBuf,
}

impl FileFetcher {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Fetcher for FileFetcher {
    fn name(&self) -> &'static str {
        "local-file"
    }

    fn fetch(&self, _url: &str) -> Result<String> {
        debug!(path = %self.path.display(), "reading saved page");
        Ok(fs::read_to_string(&self.path)?)
    }
}
