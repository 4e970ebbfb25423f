#[cfg(test)]
mod tests {
    use crate::config::DEFAULT_USER_AGENT;
    use crate::engine::Fetcher;
    use crate::tools::fetch::utils::validate_status;
    use crate::tools::fetch::{fetch, FileFetcher, HttpFetcher};
    use reqwest::StatusCode;
    use std::io::Write;

    const PAGE: &str = r#"<!DOCTYPE html><html><body><table><tr><td>QB</td></tr></table></body></html>"#;

    #[test]
    fn fetch_sends_user_agent_and_returns_body() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/nfldepthcharts/depthcharts.aspx")
            .match_header("user-agent", DEFAULT_USER_AGENT)
            .with_status(200)
            .with_header("content-type", "text/html; charset=utf-8")
            .with_body(PAGE)
            .create();

        let url = format!("{}/nfldepthcharts/depthcharts.aspx", server.url());
        let result = fetch(&url, DEFAULT_USER_AGENT).unwrap();

        mock.assert();
        assert_eq!(result.status, 200);
        assert_eq!(result.final_url, url);
        assert_eq!(result.html, PAGE);
    }

    #[test]
    fn fetch_follows_redirect() {
        let mut server = mockito::Server::new();
        let _moved = server
            .mock("GET", "/old")
            .with_status(301)
            .with_header("location", "/new")
            .create();
        let _page = server.mock("GET", "/new").with_status(200).with_body(PAGE).create();

        let result = fetch(&format!("{}/old", server.url()), DEFAULT_USER_AGENT).unwrap();
        assert_eq!(result.final_url, format!("{}/new", server.url()));
        assert_eq!(result.into_html(), PAGE);
    }

    #[test]
    fn fetch_fails_on_not_found() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("GET", "/missing")
            .with_status(404)
            .with_body("nope")
            .create();

        let url = format!("{}/missing", server.url());
        let err = HttpFetcher::new(DEFAULT_USER_AGENT)
            .unwrap()
            .fetch(&url)
            .unwrap_err();

        assert_eq!(err.kind(), "network");
        assert_eq!(
            err.to_string(),
            format!("404 Client Error: Not Found for url: {}", url)
        );
    }

    #[test]
    fn fetch_fails_when_nothing_listens() {
        // Port 9 (discard) is almost never bound on test hosts.
        let err = fetch("http://127.0.0.1:9/", DEFAULT_USER_AGENT).unwrap_err();
        assert_eq!(err.kind(), "network");
    }

    #[test]
    fn validate_status_classes() {
        assert!(validate_status(StatusCode::OK, "u").is_ok());
        assert!(validate_status(StatusCode::NO_CONTENT, "u").is_ok());

        let err = validate_status(StatusCode::INTERNAL_SERVER_ERROR, "u").unwrap_err();
        assert_eq!(
            err.to_string(),
            "500 Server Error: Internal Server Error for url: u"
        );

        let err = validate_status(StatusCode::FORBIDDEN, "u").unwrap_err();
        assert!(err.to_string().starts_with("403 Client Error"));
    }

    #[test]
    fn file_fetcher_reads_saved_page() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(PAGE.as_bytes()).unwrap();

        let fetcher = FileFetcher::new(file.path());
        assert_eq!(fetcher.fetch("ignored").unwrap(), PAGE);
    }

    #[test]
    fn file_fetcher_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = FileFetcher::new(dir.path().join("absent.html"));
        assert_eq!(fetcher.fetch("ignored").unwrap_err().kind(), "io");
    }
}
