use crate::error::{DepthChartError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use url::Url;

pub const DEFAULT_URL: &str = "https://www.ourlads.com/nfldepthcharts/depthcharts.aspx";
pub const DEFAULT_SOURCE: &str = "ourlads.com/nfldepthcharts";
pub const DEFAULT_OUTPUT: &str = "nfl_depth_charts.json";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Team-name substrings matched against lowercased link text.
/// Teams outside this list are skipped.
pub const DEFAULT_TEAM_KEYWORDS: [&str; 6] = [
    "chiefs", "cowboys", "patriots", "packers", "ravens", "steelers",
];

/// Everything a run needs. `Default` reproduces the fixed behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScraperConfig {
    pub url: String,
    pub user_agent: String,
    pub output: PathBuf,
    pub team_keywords: Vec<String>,
    pub source: String,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            team_keywords: DEFAULT_TEAM_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            source: DEFAULT_SOURCE.to_string(),
        }
    }
}

impl ScraperConfig {
    /// Load a JSON config; missing fields fall back to defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let file = fs::File::open(path)?;
        let config: Self = serde_json::from_reader(file)?;
        Ok(config)
    }

    pub fn with_team_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.team_keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    pub fn validate(&self) -> Result<()> {
        Url::parse(&self.url)
            .map_err(|e| DepthChartError::config_error("url", &e.to_string()))?;
        if self.user_agent.trim().is_empty() {
            return Err(DepthChartError::config_error("user_agent", "must not be empty"));
        }
        if self.team_keywords.is_empty() {
            return Err(DepthChartError::config_error("team_keywords", "must not be empty"));
        }
        if self.team_keywords.iter().any(|k| k.trim().is_empty()) {
            return Err(DepthChartError::config_error(
                "team_keywords",
                "keywords must not be blank",
            ));
        }
        Ok(())
    }

    /// Keywords lowercased, ready for substring matching.
    pub fn normalized_keywords(&self) -> Vec<String> {
        self.team_keywords
            .iter()
            .map(|k| k.trim().to_lowercase())
            .collect()
    }

    /// Bare host of the source page (`www.` dropped), used as the
    /// `source` of an error-shaped result.
    pub fn source_host(&self) -> String {
        Url::parse(&self.url)
            .ok()
            .and_then(|u| u.host_str().map(|h| h.trim_start_matches("www.").to_string()))
            .unwrap_or_else(|| self.source.clone())
    }
}
