use crate::error::{DepthChartError, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};

/// Request headers: the configured browser User-Agent plus a catch-all Accept.
pub(crate) fn headers_for_user_agent(user_agent: &str) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    let ua = HeaderValue::from_str(user_agent)
        .map_err(|e| DepthChartError::config_error("user_agent", &e.to_string()))?;
    headers.insert(USER_AGENT, ua);
    headers.insert(ACCEPT, HeaderValue::from_static("*/*"));
    Ok(headers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_USER_AGENT;

    #[test]
    fn default_user_agent_is_sent() {
        let headers = headers_for_user_agent(DEFAULT_USER_AGENT).unwrap();
        assert_eq!(
            headers.get("user-agent").and_then(|v| v.to_str().ok()),
            Some(DEFAULT_USER_AGENT)
        );
        assert_eq!(headers.len(), 2);
    }

    #[test]
    fn control_characters_are_rejected() {
        let err = headers_for_user_agent("Mozilla/5.0\n").unwrap_err();
        assert_eq!(err.kind(), "config");
    }
}
