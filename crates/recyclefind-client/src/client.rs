//! `reqwest` client for `GET <api_url>?city=..&country=..`.
//!
//! The HTTP status is not checked. The service answers bad input with a
//! 400 carrying a normal `{"status": "error"}` envelope, and that message
//! has to reach the user.

use std::time::Duration;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use recyclefind_core::{AppConfig, FinderError, SearchQuery, SearchResponse};
use reqwest::{Client, Url};

use crate::service::SearchService;

/// Characters left unescaped by JavaScript's `encodeURIComponent`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Client for the search endpoint.
pub struct SearchClient {
    client: Client,
    endpoint: Url,
}

impl SearchClient {
    /// Creates a client from resolved configuration.
    ///
    /// # Errors
    ///
    /// Returns [`FinderError::Transport`] if the `reqwest::Client` cannot be
    /// built or `api_url` is not a valid URL.
    pub fn new(config: &AppConfig) -> Result<Self, FinderError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| FinderError::transport("client construction", e))?;
        Self::from_parts(client, &config.api_url)
    }

    /// Creates a client pointed at `endpoint` with default timeouts (for
    /// testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`FinderError::Transport`] if `endpoint` is not a valid URL.
    pub fn with_endpoint(endpoint: &str, timeout_secs: u64) -> Result<Self, FinderError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("recyclefind/0.1 (recycling-search)")
            .build()
            .map_err(|e| FinderError::transport("client construction", e))?;
        Self::from_parts(client, endpoint)
    }

    fn from_parts(client: Client, endpoint: &str) -> Result<Self, FinderError> {
        let endpoint =
            Url::parse(endpoint).map_err(|e| FinderError::transport(endpoint.to_owned(), e))?;
        Ok(Self { client, endpoint })
    }

    /// Builds the request URL, replacing any query already on the endpoint.
    fn build_url(&self, query: &SearchQuery) -> Url {
        let mut url = self.endpoint.clone();
        let encoded = format!(
            "city={}&country={}",
            utf8_percent_encode(query.city(), COMPONENT),
            utf8_percent_encode(query.country(), COMPONENT),
        );
        url.set_query(Some(&encoded));
        url
    }
}

impl SearchService for SearchClient {
    async fn search(&self, query: &SearchQuery) -> Result<SearchResponse, FinderError> {
        let url = self.build_url(query);
        tracing::debug!(%url, "querying search service");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| FinderError::transport(url.as_str(), e))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| FinderError::transport(url.as_str(), e))?;

        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), "non-2xx response from search service");
        }

        SearchResponse::from_json(&body, url.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client(endpoint: &str) -> SearchClient {
        SearchClient::with_endpoint(endpoint, 30).expect("client construction should not fail")
    }

    fn query(city: &str, country: &str) -> SearchQuery {
        SearchQuery::new(city, country).expect("valid query")
    }

    #[test]
    fn build_url_appends_city_and_country() {
        let client = test_client("https://search.example.com/api/search");
        let url = client.build_url(&query("Newcastle", "UK"));
        assert_eq!(
            url.as_str(),
            "https://search.example.com/api/search?city=Newcastle&country=UK"
        );
    }

    #[test]
    fn build_url_encodes_like_encode_uri_component() {
        let client = test_client("https://search.example.com/api/search");
        let url = client.build_url(&query("São Paulo & Co", "Brazil (BR)"));
        assert_eq!(
            url.query(),
            Some("city=S%C3%A3o%20Paulo%20%26%20Co&country=Brazil%20(BR)")
        );
    }

    #[test]
    fn build_url_replaces_existing_query() {
        let client = test_client("https://search.example.com/api/search?stale=1");
        let url = client.build_url(&query("Leeds", "UK"));
        assert_eq!(url.query(), Some("city=Leeds&country=UK"));
    }

    #[test]
    fn invalid_endpoint_is_rejected() {
        let result = SearchClient::with_endpoint("not a url", 30);
        assert!(matches!(result, Err(FinderError::Transport { .. })));
    }

    #[test]
    fn new_uses_configured_endpoint() {
        let config = AppConfig {
            api_url: "http://localhost:9999/api/search".to_string(),
            log_level: "info".to_string(),
            request_timeout_secs: 5,
            connect_timeout_secs: 1,
            user_agent: "test/0.1".to_string(),
        };
        let client = SearchClient::new(&config).unwrap();
        assert_eq!(client.endpoint.as_str(), "http://localhost:9999/api/search");
    }
}
