//! HTTP utilities shared by the SportsDB and prediction clients

use crate::Result;
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT},
    Client,
};

pub const USER_AGENT: &str = concat!("football-predictor/", env!("CARGO_PKG_VERSION"));

/// Headers sent with every request.
pub fn default_headers() -> HeaderMap {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    h
}

/// Build the single client used for a run.
pub fn build_client() -> Result<Client> {
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .default_headers(default_headers())
        .build()?;
    Ok(client)
}

/// Join a base URL and an endpoint without doubling the slash.
pub fn endpoint_url(base: &str, endpoint: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        endpoint.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_headers_accept_json() {
        let headers = default_headers();
        assert_eq!(headers.get(ACCEPT).unwrap(), "application/json");
    }

    #[test]
    fn test_build_client() {
        assert!(build_client().is_ok());
    }

    #[test]
    fn test_endpoint_url_joins_cleanly() {
        assert_eq!(
            endpoint_url("https://example.com/api/", "/lookuptable.php"),
            "https://example.com/api/lookuptable.php"
        );
        assert_eq!(
            endpoint_url("http://127.0.0.1:1234", "eventsround.php"),
            "http://127.0.0.1:1234/eventsround.php"
        );
    }

    #[test]
    fn test_user_agent_names_crate() {
        assert!(USER_AGENT.starts_with("football-predictor/"));
    }
}
