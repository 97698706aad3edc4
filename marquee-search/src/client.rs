//! Client for the remote full-text search endpoint.

use marquee_core::config::NetworkConfig;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::errors::DiscoveryError;
use crate::types::{SearchPage, parse_movie_records};

/// Client for the movie API's `/search` and `/genres` endpoints.
///
/// Submitting a search is independent of autocomplete; the server owns
/// ranking and this client only fetches and shapes the response.
#[derive(Debug, Clone)]
pub struct SearchClient {
    client: reqwest::Client,
    base_url: String,
}

impl SearchClient {
    /// Create a client against `base_url` using the given network settings.
    ///
    /// # Errors
    /// - `DiscoveryError::ParseError` - `base_url` is not a valid absolute URL
    /// - `DiscoveryError::NetworkError` - the HTTP client could not be constructed
    pub fn new(config: &NetworkConfig, base_url: &str) -> Result<Self, DiscoveryError> {
        Url::parse(base_url).map_err(|e| DiscoveryError::ParseError {
            reason: format!("Invalid API base URL '{base_url}': {e}"),
        })?;

        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .user_agent(config.user_agent)
            .build()
            .map_err(|e| DiscoveryError::NetworkError {
                reason: format!("HTTP client construction failed: {e}"),
            })?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Run a full-text search for `query`.
    ///
    /// # Errors
    /// - `DiscoveryError::NetworkError` - request never reached the API
    /// - `DiscoveryError::SearchFailed` - the API answered with an error status
    /// - `DiscoveryError::ParseError` - the response payload was malformed
    pub async fn search(&self, query: &str) -> Result<SearchPage, DiscoveryError> {
        let url = format!("{}/search", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[("query", query)])
            .send()
            .await
            .map_err(|e| DiscoveryError::NetworkError {
                reason: format!("Search request failed: {e}"),
            })?;

        if !response.status().is_success() {
            return Err(DiscoveryError::SearchFailed {
                query: query.to_string(),
                reason: format!("HTTP {}", response.status()),
            });
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|e| DiscoveryError::ParseError {
                reason: format!("Search JSON parsing failed: {e}"),
            })?;

        let page = parse_search_payload(payload)?;
        debug!(
            "Search '{}': {} of {} results on page {}/{}",
            query,
            page.results.len(),
            page.total,
            page.page,
            page.total_pages
        );
        Ok(page)
    }

    /// Fetch the list of genres the catalog can filter by.
    ///
    /// # Errors
    /// - `DiscoveryError::NetworkError` - request never reached the API
    /// - `DiscoveryError::SearchFailed` - the API answered with an error status
    /// - `DiscoveryError::ParseError` - the response payload was malformed
    pub async fn genres(&self) -> Result<Vec<String>, DiscoveryError> {
        let url = format!("{}/genres", self.base_url);

        let response =
            self.client
                .get(&url)
                .send()
                .await
                .map_err(|e| DiscoveryError::NetworkError {
                    reason: format!("Genre request failed: {e}"),
                })?;

        if !response.status().is_success() {
            return Err(DiscoveryError::SearchFailed {
                query: "genres".to_string(),
                reason: format!("HTTP {}", response.status()),
            });
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|e| DiscoveryError::ParseError {
                reason: format!("Genre JSON parsing failed: {e}"),
            })?;

        parse_genre_payload(payload)
    }
}

/// Shape a search response from either observed envelope.
///
/// The envelope's own paging fields win when present; a bare array is one
/// page holding everything.
fn parse_search_payload(payload: Value) -> Result<SearchPage, DiscoveryError> {
    let (total, page, page_size, total_pages) = match &payload {
        Value::Object(fields) => (
            read_count(fields.get("total")),
            read_count(fields.get("page")),
            read_count(fields.get("page_size")),
            read_count(fields.get("total_pages")),
        ),
        _ => (None, None, None, None),
    };

    let results = parse_movie_records(payload)?;
    let total = total.unwrap_or(results.len());

    Ok(SearchPage {
        page: page.unwrap_or(1),
        page_size: page_size.unwrap_or_else(|| results.len().max(1)),
        total_pages: total_pages.unwrap_or(1),
        total,
        results,
    })
}

fn read_count(value: Option<&Value>) -> Option<usize> {
    value.and_then(Value::as_u64).map(|count| count as usize)
}

/// Extract the genre list from `{"genres": [...]}` or a bare array.
fn parse_genre_payload(payload: Value) -> Result<Vec<String>, DiscoveryError> {
    let entries = match payload {
        Value::Array(entries) => entries,
        Value::Object(mut fields) => match fields.remove("genres") {
            Some(Value::Array(entries)) => entries,
            _ => {
                return Err(DiscoveryError::ParseError {
                    reason: "Genre payload has no `genres` array".to_string(),
                });
            }
        },
        _ => {
            return Err(DiscoveryError::ParseError {
                reason: "Genre payload is neither an array nor an object".to_string(),
            });
        }
    };

    entries
        .into_iter()
        .map(|entry| match entry {
            Value::String(genre) => Ok(genre),
            other => Err(DiscoveryError::ParseError {
                reason: format!("Genre entry is not a string: {other}"),
            }),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_parse_enveloped_search_response() {
        let page = parse_search_payload(json!({
            "results": [
                {"title": "Inception", "url": "https://www.imdb.com/title/tt1375666"},
                {"title": "Interstellar"}
            ],
            "total": 42,
            "page": 1,
            "page_size": 20,
            "total_pages": 3
        }))
        .unwrap();

        assert_eq!(page.results.len(), 2);
        assert_eq!(page.total, 42);
        assert_eq!(page.page_size, 20);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn test_parse_bare_array_search_response() {
        let page = parse_search_payload(json!([
            {"title": "Inception"},
            {"title": "The Matrix"}
        ]))
        .unwrap();

        assert_eq!(page.results.len(), 2);
        assert_eq!(page.total, 2);
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn test_parse_genres() {
        let genres = parse_genre_payload(json!({"genres": ["Action", "Drama"]})).unwrap();
        assert_eq!(genres, ["Action", "Drama"]);

        let genres = parse_genre_payload(json!(["Comedy"])).unwrap();
        assert_eq!(genres, ["Comedy"]);

        assert!(parse_genre_payload(json!({"kinds": []})).is_err());
        assert!(parse_genre_payload(json!(["Comedy", 7])).is_err());
    }

    #[test]
    fn test_rejects_invalid_base_url() {
        let config = NetworkConfig::default();
        assert!(SearchClient::new(&config, "not a url").is_err());
        assert!(SearchClient::new(&config, "http://127.0.0.1:5000/").is_ok());
    }
}
