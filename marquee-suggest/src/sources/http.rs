//! HTTP title source reading a remote JSON title list.

use async_trait::async_trait;
use marquee_core::config::NetworkConfig;
use serde_json::Value;
use url::Url;

use super::TitleSource;
use crate::errors::SuggestError;

/// Title source fetching the corpus from a remote JSON endpoint.
///
/// The endpoint is expected to serve either a bare JSON array of title
/// strings or an object carrying such an array in a `titles` field. Any
/// other shape is a load failure, not an empty corpus.
#[derive(Debug)]
pub struct HttpTitleSource {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpTitleSource {
    /// Create a source for `endpoint` using the given network settings.
    ///
    /// # Errors
    /// - `SuggestError::DataUnavailable` - the endpoint is not a valid URL
    ///   or the HTTP client could not be constructed
    pub fn new(config: &NetworkConfig, endpoint: &str) -> Result<Self, SuggestError> {
        let endpoint = Url::parse(endpoint).map_err(|e| SuggestError::DataUnavailable {
            reason: format!("Invalid titles endpoint '{endpoint}': {e}"),
        })?;

        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .user_agent(config.user_agent)
            .build()
            .map_err(|e| SuggestError::DataUnavailable {
                reason: format!("HTTP client construction failed: {e}"),
            })?;

        Ok(Self { client, endpoint })
    }
}

#[async_trait]
impl TitleSource for HttpTitleSource {
    async fn fetch_titles(&self) -> Result<Vec<String>, SuggestError> {
        let response = self
            .client
            .get(self.endpoint.clone())
            .send()
            .await
            .map_err(|e| SuggestError::DataUnavailable {
                reason: format!("Title list request failed: {e}"),
            })?;

        if !response.status().is_success() {
            return Err(SuggestError::DataUnavailable {
                reason: format!("Title list endpoint returned HTTP {}", response.status()),
            });
        }

        let payload: Value =
            response
                .json()
                .await
                .map_err(|e| SuggestError::DataUnavailable {
                    reason: format!("Title list JSON parsing failed: {e}"),
                })?;

        parse_title_payload(payload)
    }
}

/// Extract the title array from either of the observed payload shapes.
fn parse_title_payload(payload: Value) -> Result<Vec<String>, SuggestError> {
    let entries = match payload {
        Value::Array(entries) => entries,
        Value::Object(mut fields) => match fields.remove("titles") {
            Some(Value::Array(entries)) => entries,
            _ => {
                return Err(SuggestError::DataUnavailable {
                    reason: "Title payload object has no `titles` array".to_string(),
                });
            }
        },
        _ => {
            return Err(SuggestError::DataUnavailable {
                reason: "Title payload is neither an array nor an object".to_string(),
            });
        }
    };

    entries
        .into_iter()
        .map(|entry| match entry {
            Value::String(title) => Ok(title),
            other => Err(SuggestError::DataUnavailable {
                reason: format!("Title entry is not a string: {other}"),
            }),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_parse_bare_array() {
        let titles = parse_title_payload(json!(["Inception", "The Matrix"])).unwrap();
        assert_eq!(titles, vec!["Inception", "The Matrix"]);
    }

    #[test]
    fn test_parse_titles_field() {
        let titles = parse_title_payload(json!({"titles": ["Dune"], "total": 1})).unwrap();
        assert_eq!(titles, vec!["Dune"]);
    }

    #[test]
    fn test_parse_rejects_other_shapes() {
        assert!(parse_title_payload(json!("Inception")).is_err());
        assert!(parse_title_payload(json!({"movies": ["Dune"]})).is_err());
        assert!(parse_title_payload(json!([1, 2, 3])).is_err());
    }

    #[test]
    fn test_rejects_invalid_endpoint() {
        let config = NetworkConfig::default();
        assert!(HttpTitleSource::new(&config, "not a url").is_err());
    }
}
