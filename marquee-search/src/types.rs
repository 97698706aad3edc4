//! Data types for movie discovery.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::errors::DiscoveryError;

/// A single movie as served by the discovery API.
///
/// Everything except the title is optional; the API fills in whatever it
/// knows and the renderer copes with gaps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieRecord {
    pub title: String,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub poster: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub plot: Option<String>,
    #[serde(default)]
    pub score: Option<f32>,
}

impl MovieRecord {
    /// Release year parsed from the date string, if one is present.
    pub fn release_year(&self) -> Option<u16> {
        let date = self.release_date.as_deref()?;
        let year: u16 = date.split('-').next()?.trim().parse().ok()?;
        (1870..=2100).contains(&year).then_some(year)
    }
}

/// One page of search results as reported by the search endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchPage {
    pub results: Vec<MovieRecord>,
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
}

/// Parse a movie array, dropping entries the record shape rejects.
///
/// The API variants disagree on envelope shape, so both a bare array and
/// an object with a `results` array are accepted. Entries without a title
/// are logged and skipped rather than failing the whole response.
pub(crate) fn parse_movie_records(payload: Value) -> Result<Vec<MovieRecord>, DiscoveryError> {
    let entries = match payload {
        Value::Array(entries) => entries,
        Value::Object(mut fields) => match fields.remove("results") {
            Some(Value::Array(entries)) => entries,
            _ => {
                return Err(DiscoveryError::ParseError {
                    reason: "Response object has no `results` array".to_string(),
                });
            }
        },
        _ => {
            return Err(DiscoveryError::ParseError {
                reason: "Response is neither an array nor an object".to_string(),
            });
        }
    };

    let mut records = Vec::with_capacity(entries.len());
    for entry in entries {
        match serde_json::from_value::<MovieRecord>(entry) {
            Ok(record) => records.push(record),
            Err(e) => debug!("Dropping malformed movie record: {e}"),
        }
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_release_year() {
        let mut movie = MovieRecord {
            title: "Inception".to_string(),
            id: None,
            url: None,
            poster: None,
            release_date: Some("2010-07-16".to_string()),
            plot: None,
            score: None,
        };
        assert_eq!(movie.release_year(), Some(2010));

        movie.release_date = Some("sometime".to_string());
        assert_eq!(movie.release_year(), None);

        movie.release_date = None;
        assert_eq!(movie.release_year(), None);
    }

    #[test]
    fn test_parse_bare_array() {
        let records = parse_movie_records(json!([
            {"title": "Inception", "score": 8.8},
            {"title": "The Matrix", "release_date": "1999-03-31"}
        ]))
        .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].title, "Inception");
        assert_eq!(records[1].release_year(), Some(1999));
    }

    #[test]
    fn test_parse_results_envelope() {
        let records = parse_movie_records(json!({
            "results": [{"title": "Dune", "plot": "Spice."}],
            "total": 1
        }))
        .unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].plot.as_deref(), Some("Spice."));
    }

    #[test]
    fn test_titleless_records_are_dropped() {
        let records = parse_movie_records(json!([
            {"title": "Inception"},
            {"poster": "/p.jpg"},
            {"title": "Dune"}
        ]))
        .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[1].title, "Dune");
    }

    #[test]
    fn test_unexpected_shapes_fail() {
        assert!(parse_movie_records(json!("Inception")).is_err());
        assert!(parse_movie_records(json!({"movies": []})).is_err());
    }
}
