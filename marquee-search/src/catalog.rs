//! Catalog browsing: per-genre listings with sorting and pagination.
//!
//! The API publishes one pre-sorted listing per (genre, sort key) pair;
//! pagination happens client-side over the fetched listing, mirroring how
//! the gallery consumes it.

use std::str::FromStr;

use marquee_core::config::{CatalogConfig, NetworkConfig};
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::errors::DiscoveryError;
use crate::types::{MovieRecord, parse_movie_records};

/// Sort orders the catalog listings are published in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Rating, best first
    #[default]
    Score,
    /// Release date, newest first
    Date,
}

impl SortKey {
    /// The key as it appears in listing paths.
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Score => "score",
            SortKey::Date => "date",
        }
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "score" => Ok(SortKey::Score),
            "date" => Ok(SortKey::Date),
            _ => Err(format!("Invalid sort key: {s}")),
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A full catalog listing for one (genre, sort) selection.
#[derive(Debug, Clone)]
pub struct CatalogListing {
    /// Genre the listing was filtered by (`all` when unfiltered)
    pub genre: String,
    /// Sort order the listing is published in
    pub sort: SortKey,
    /// Every movie of the listing, in published order
    pub results: Vec<MovieRecord>,
}

impl CatalogListing {
    /// Slice out one 1-based page of the listing.
    ///
    /// A page past the end (or page 0) yields an empty slice rather than
    /// an error, so paging controls can clamp on their own terms.
    pub fn page(&self, page: usize, page_size: usize) -> CatalogPage {
        let page_size = page_size.max(1);
        let total = self.results.len();
        let total_pages = total.div_ceil(page_size).max(1);

        let results = match page {
            0 => Vec::new(),
            _ => self
                .results
                .iter()
                .skip((page - 1) * page_size)
                .take(page_size)
                .cloned()
                .collect(),
        };

        CatalogPage {
            results,
            page,
            page_size,
            total,
            total_pages,
        }
    }
}

/// One rendered page of a catalog listing.
#[derive(Debug, Clone)]
pub struct CatalogPage {
    /// Movies on this page, in listing order
    pub results: Vec<MovieRecord>,
    /// 1-based page number as requested
    pub page: usize,
    /// Page size the slice was taken with
    pub page_size: usize,
    /// Movies in the whole listing
    pub total: usize,
    /// Pages the listing spans (at least 1, even when empty)
    pub total_pages: usize,
}

/// Client fetching pre-sorted per-genre listings from the movie API.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: reqwest::Client,
    base_url: String,
    page_size: usize,
}

impl CatalogClient {
    /// Create a client against `base_url` using the given settings.
    ///
    /// # Errors
    /// - `DiscoveryError::ParseError` - `base_url` is not a valid absolute URL
    /// - `DiscoveryError::NetworkError` - the HTTP client could not be constructed
    pub fn new(
        network: &NetworkConfig,
        catalog: &CatalogConfig,
        base_url: &str,
    ) -> Result<Self, DiscoveryError> {
        Url::parse(base_url).map_err(|e| DiscoveryError::ParseError {
            reason: format!("Invalid API base URL '{base_url}': {e}"),
        })?;

        let client = reqwest::Client::builder()
            .timeout(network.request_timeout)
            .user_agent(network.user_agent)
            .build()
            .map_err(|e| DiscoveryError::NetworkError {
                reason: format!("HTTP client construction failed: {e}"),
            })?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            page_size: catalog.page_size,
        })
    }

    /// Page size used by [`CatalogClient::page`].
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Fetch the complete listing for a genre and sort order.
    ///
    /// An empty genre selection means no filter and maps to the `all`
    /// listing, matching the gallery's behavior.
    ///
    /// # Errors
    /// - `DiscoveryError::NetworkError` - request never reached the API
    /// - `DiscoveryError::SearchFailed` - the API answered with an error status
    /// - `DiscoveryError::ParseError` - the listing payload was malformed
    pub async fn listing(
        &self,
        genre: &str,
        sort: SortKey,
    ) -> Result<CatalogListing, DiscoveryError> {
        let genre = normalize_genre(genre);
        let url = format!(
            "{}/genre_movies/{}_{}.json",
            self.base_url,
            urlencoding::encode(&genre),
            sort
        );

        let response =
            self.client
                .get(&url)
                .send()
                .await
                .map_err(|e| DiscoveryError::NetworkError {
                    reason: format!("Listing request failed: {e}"),
                })?;

        if !response.status().is_success() {
            return Err(DiscoveryError::SearchFailed {
                query: format!("{genre}/{sort}"),
                reason: format!("HTTP {}", response.status()),
            });
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|e| DiscoveryError::ParseError {
                reason: format!("Listing JSON parsing failed: {e}"),
            })?;

        let results = parse_movie_records(payload)?;
        debug!("Catalog listing {genre}/{sort}: {} movies", results.len());

        Ok(CatalogListing {
            genre,
            sort,
            results,
        })
    }

    /// Fetch one page of the listing for a genre and sort order.
    ///
    /// # Errors
    /// Same as [`CatalogClient::listing`].
    pub async fn page(
        &self,
        genre: &str,
        sort: SortKey,
        page: usize,
    ) -> Result<CatalogPage, DiscoveryError> {
        let listing = self.listing(genre, sort).await?;
        Ok(listing.page(page, self.page_size))
    }
}

/// Map the gallery's "no filter" selection onto the `all` listing.
fn normalize_genre(genre: &str) -> String {
    let trimmed = genre.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
        "all".to_string()
    } else {
        trimmed.to_string()
    }
}
