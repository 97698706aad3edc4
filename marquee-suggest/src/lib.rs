//! Marquee Suggest - movie title autocomplete

#![deny(missing_docs)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![warn(clippy::too_many_lines)]
//!
//! Builds an in-memory prefix index over a remotely loaded movie title
//! corpus and answers per-keystroke queries with highlight-annotated
//! suggestions for the search box.

pub mod errors;
pub mod format;
pub mod index;
pub mod service;
pub mod sources;

// Re-export main types
pub use errors::SuggestError;
pub use format::{SuggestionEntry, format_suggestions};
pub use index::PrefixIndex;
pub use service::TitleIndex;
pub use sources::{HttpTitleSource, TitleSource};

/// Convenience type alias for Results with SuggestError.
pub type Result<T> = std::result::Result<T, SuggestError>;
