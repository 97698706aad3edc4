//! Error types for title autocomplete.

use thiserror::Error;

/// Errors that can occur while loading the autocomplete corpus.
///
/// Load failures are the only recognized failure kind: queries against an
/// index whose corpus never loaded degrade to empty results instead of
/// surfacing an error.
#[derive(Debug, Error)]
pub enum SuggestError {
    /// The title corpus could not be fetched or parsed.
    #[error("Title corpus unavailable: {reason}")]
    DataUnavailable {
        /// The reason the corpus could not be loaded
        reason: String,
    },
}
