use thiserror::Error;

pub type Result<T> = std::result::Result<T, DepthChartError>;

/// Every way a run can fail, tagged by the stage that failed.
///
/// The JSON output only ever carries the `Display` form of these, so
/// consumers see a single `metadata.error` string regardless of variant.
#[derive(Debug, Error)]
pub enum DepthChartError {
    #[error("{0}")]
    Network(String),
    #[error("parse error: {0}")]
    Parse(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Config(String),
}

impl DepthChartError {
    pub fn network_error(url: &str, reason: &str) -> Self {
        Self::Network(format!("{} (url: {})", reason, url))
    }

    pub fn parse_error(what: &str, reason: &str) -> Self {
        Self::Parse(format!("{}: {}", what, reason))
    }

    pub fn config_error(field: &str, reason: &str) -> Self {
        Self::Config(format!("{}: {}", field, reason))
    }

    /// Short tag used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Network(_) => "network",
            Self::Parse(_) => "parse",
            Self::Io(_) => "io",
            Self::Json(_) => "json",
            Self::Config(_) => "config",
        }
    }
}

/* Conversions so `?` works smoothly */
impl From<reqwest::Error> for DepthChartError {
    fn from(e: reqwest::Error) -> Self {
        DepthChartError::Network(e.to_string())
    }
}
