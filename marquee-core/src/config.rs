//! Centralized configuration for Marquee.
//!
//! All tunable parameters and default endpoints are defined here to avoid
//! hard-coded values scattered throughout the codebase.

use std::time::Duration;

/// Central configuration for all Marquee components.
///
/// Groups related settings into logical sections. Instances are passed
/// explicitly to whatever owns them; there is no process-wide state.
#[derive(Debug, Clone, Default)]
pub struct MarqueeConfig {
    pub suggest: SuggestConfig,
    pub network: NetworkConfig,
    pub catalog: CatalogConfig,
}

/// Autocomplete behavior configuration.
#[derive(Debug, Clone)]
pub struct SuggestConfig {
    /// Maximum number of suggestions returned per query
    pub max_suggestions: usize,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            max_suggestions: 10,
        }
    }
}

/// Network communication configuration.
///
/// Controls HTTP timeouts and the default endpoints of the external movie
/// API. The API is an external collaborator; Marquee only reads from it.
#[derive(Debug, Clone)]
pub struct NetworkConfig {
    /// HTTP request timeout for all API calls
    pub request_timeout: Duration,
    /// User agent for HTTP requests
    pub user_agent: &'static str,
    /// Default endpoint serving the autocomplete title list
    pub titles_url: &'static str,
    /// Default base URL of the search/catalog API
    pub api_base_url: &'static str,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(10),
            user_agent: "marquee/0.1.0",
            titles_url: "http://127.0.0.1:5000/data/hot_movies_title.json",
            api_base_url: "http://127.0.0.1:5000",
        }
    }
}

/// Catalog browsing configuration.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Movies shown per catalog page
    pub page_size: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self { page_size: 20 }
    }
}
