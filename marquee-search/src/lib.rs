//! Marquee Search - remote movie discovery
//!
//! Thin clients for the external movie API: full-text search, genre
//! listing, and the filterable/sortable/paginated catalog. Ranking and
//! sorting live on the server; these clients fetch and shape responses
//! for rendering.

pub mod catalog;
pub mod client;
pub mod errors;
pub mod types;

// Re-export main types
pub use catalog::{CatalogClient, CatalogListing, CatalogPage, SortKey};
pub use client::SearchClient;
pub use errors::DiscoveryError;
pub use types::{MovieRecord, SearchPage};

/// Convenience type alias for Results with DiscoveryError.
pub type Result<T> = std::result::Result<T, DiscoveryError>;
