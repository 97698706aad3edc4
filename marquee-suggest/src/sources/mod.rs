//! Corpus sources for title autocomplete.

use async_trait::async_trait;

use crate::errors::SuggestError;

pub mod http;
pub mod mock;

pub use http::HttpTitleSource;

/// Trait for title corpus sources.
///
/// Implementations deliver the complete list of known movie titles in a
/// single read (remote endpoint, static fixture for tests). The corpus is
/// fetched once per session; there is no incremental update.
#[async_trait]
pub trait TitleSource: Send + Sync + std::fmt::Debug {
    /// Fetch the complete title list.
    ///
    /// # Errors
    /// - `SuggestError::DataUnavailable` - the fetch or parse failed
    async fn fetch_titles(&self) -> Result<Vec<String>, SuggestError>;
}
