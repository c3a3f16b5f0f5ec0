use std::time::Duration;

use url::Url;

use crate::data::Dataset;

/// Error while fetching or decoding one dataset document
#[derive(Debug, Clone)]
pub struct FetchError {
    pub message: String,
    pub phase: &'static str,
}

impl FetchError {
    fn new(phase: &'static str, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            phase,
        }
    }
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.phase, self.message)
    }
}

impl std::error::Error for FetchError {}

/// Build the blocking client shared by all dataset fetches.
pub fn build_client() -> Result<reqwest::blocking::Client, FetchError> {
    reqwest::blocking::Client::builder()
        .user_agent(concat!("treemap-explorer/", env!("CARGO_PKG_VERSION")))
        .timeout(Duration::from_secs(15))
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()
        .map_err(|e| FetchError::new("client", format!("Client error: {}", e)))
}

/// Fetch a URL and decode its body as a dataset tree (blocking).
pub fn fetch_json(client: &reqwest::blocking::Client, url_str: &str) -> Result<Dataset, FetchError> {
    let parsed = Url::parse(url_str)
        .map_err(|e| FetchError::new("url", format!("Invalid URL {}: {}", url_str, e)))?;

    log::debug!("GET {}", parsed);
    let response = client
        .get(parsed.as_str())
        .header("Accept", "application/json")
        .send()
        .map_err(|e| FetchError::new("request", format!("Request failed: {}", e)))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::new(
            "status",
            format!("{} returned HTTP {}", parsed, status.as_u16()),
        ));
    }

    let body = response
        .text()
        .map_err(|e| FetchError::new("body", format!("Failed to read body: {}", e)))?;

    parse_dataset(&body)
}

/// Decode a dataset document.
pub fn parse_dataset(body: &str) -> Result<Dataset, FetchError> {
    serde_json::from_str(body).map_err(|e| FetchError::new("parse", format!("Invalid JSON: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_json_is_a_parse_error() {
        let err = parse_dataset("<html>not json</html>").unwrap_err();
        assert_eq!(err.phase, "parse");
        assert!(err.to_string().starts_with("[parse]"));
    }

    #[test]
    fn invalid_url_fails_before_any_request() {
        let client = build_client().unwrap();
        let err = fetch_json(&client, "not a url").unwrap_err();
        assert_eq!(err.phase, "url");
    }
}
