//! Title index service: corpus lifecycle and the per-keystroke query surface.

use marquee_core::config::SuggestConfig;
use tokio::sync::OnceCell;
use tracing::{debug, warn};

use crate::errors::SuggestError;
use crate::format::{SuggestionEntry, format_suggestions};
use crate::index::{PrefixIndex, tokenize};
use crate::sources::TitleSource;

/// A successfully loaded corpus with its derived prefix index.
#[derive(Debug)]
struct LoadedCorpus {
    titles: Vec<String>,
    index: PrefixIndex,
}

/// Movie title autocomplete index with an explicit lifecycle.
///
/// Construct once, `load` once, hold for the session, pass explicitly to
/// whatever owns the search input. The corpus and the prefix structure are
/// owned exclusively by this type; consumers only ever see titles and
/// suggestion entries.
#[derive(Debug)]
pub struct TitleIndex {
    source: Box<dyn TitleSource>,
    max_suggestions: usize,
    corpus: OnceCell<LoadedCorpus>,
}

impl TitleIndex {
    /// Create an index reading its corpus from `source`.
    pub fn new(source: Box<dyn TitleSource>, config: SuggestConfig) -> Self {
        Self {
            source,
            max_suggestions: config.max_suggestions,
            corpus: OnceCell::new(),
        }
    }

    /// Fetch the corpus and build the prefix index.
    ///
    /// Idempotent and single-flight: concurrent callers await one shared
    /// in-flight fetch, and a corpus that loaded once is never fetched
    /// again. A failed load leaves the index empty (queries return no
    /// results); calling `load` again retries the fetch.
    ///
    /// # Errors
    /// - `SuggestError::DataUnavailable` - the fetch or parse failed
    pub async fn load(&self) -> Result<(), SuggestError> {
        self.corpus
            .get_or_try_init(|| async {
                let titles = self.source.fetch_titles().await.inspect_err(|e| {
                    warn!("Title corpus load failed, autocomplete stays empty: {e}");
                })?;
                let index = PrefixIndex::build(&titles);
                debug!(
                    "Title corpus loaded: {} titles, {} indexed words",
                    titles.len(),
                    index.word_count()
                );
                Ok(LoadedCorpus { titles, index })
            })
            .await?;
        Ok(())
    }

    /// Whether a corpus has been loaded successfully.
    pub fn is_loaded(&self) -> bool {
        self.corpus.get().is_some()
    }

    /// Titles matching `term`, in corpus order, capped at the configured
    /// maximum with silent truncation.
    ///
    /// Matching is case-insensitive on word boundaries: the term is split
    /// on non-alphanumeric characters and every token must prefix some
    /// word of the title. Empty and whitespace-only terms return nothing
    /// without touching the index. Before `load` completes, or after a
    /// failed load, this returns nothing rather than blocking or erroring.
    pub fn query(&self, term: &str) -> Vec<String> {
        let tokens = tokenize(term);
        if tokens.is_empty() {
            return Vec::new();
        }

        let Some(corpus) = self.corpus.get() else {
            return Vec::new();
        };

        corpus
            .index
            .lookup(&tokens)
            .into_iter()
            .take(self.max_suggestions)
            .filter_map(|position| corpus.titles.get(position as usize).cloned())
            .collect()
    }

    /// Display-ready suggestions for `term`: matching titles with the
    /// queried fragment marked for the dropdown.
    pub fn suggestions(&self, term: &str) -> Vec<SuggestionEntry> {
        format_suggestions(&self.query(term), term, self.max_suggestions)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;

    use super::*;
    use crate::sources::mock::{FlakyTitleSource, StaticTitleSource};

    const CORPUS: &[&str] = &["Inception", "The Matrix", "Interstellar"];

    fn loaded_index() -> TitleIndex {
        TitleIndex::new(
            Box::new(StaticTitleSource::new(CORPUS)),
            SuggestConfig::default(),
        )
    }

    #[tokio::test]
    async fn test_query_before_load_is_empty() {
        let index = loaded_index();

        assert!(!index.is_loaded());
        assert!(index.query("in").is_empty());
        assert!(index.suggestions("in").is_empty());
    }

    #[tokio::test]
    async fn test_query_matches_corpus_order() {
        let index = loaded_index();
        index.load().await.unwrap();

        assert_eq!(index.query("in"), ["Inception", "Interstellar"]);
        assert_eq!(index.query("the ma"), ["The Matrix"]);
        assert!(index.query("dune").is_empty());
    }

    #[tokio::test]
    async fn test_results_are_subset_of_corpus() {
        let index = loaded_index();
        index.load().await.unwrap();

        for term in ["in", "the", "ma", "x", "interstellar"] {
            for title in index.query(term) {
                assert!(CORPUS.contains(&title.as_str()));
            }
        }
    }

    #[tokio::test]
    async fn test_empty_and_whitespace_queries() {
        let index = loaded_index();
        index.load().await.unwrap();

        assert!(index.query("").is_empty());
        assert!(index.query("   ").is_empty());
        assert!(index.query("?!,").is_empty());
    }

    #[tokio::test]
    async fn test_results_capped_at_maximum() {
        let titles: Vec<String> = (0..25).map(|i| format!("Inception Part {i}")).collect();
        let refs: Vec<&str> = titles.iter().map(String::as_str).collect();
        let index = TitleIndex::new(
            Box::new(StaticTitleSource::new(&refs)),
            SuggestConfig::default(),
        );
        index.load().await.unwrap();

        assert_eq!(index.query("inception").len(), 10);
        assert_eq!(index.suggestions("inception").len(), 10);
        // Truncation keeps the earliest corpus entries
        assert_eq!(index.query("inception")[0], "Inception Part 0");
    }

    #[tokio::test]
    async fn test_concurrent_loads_fetch_once() {
        let source = StaticTitleSource::new(CORPUS);
        let fetches = source.fetch_counter();
        let index = TitleIndex::new(Box::new(source), SuggestConfig::default());

        let (first, second) = tokio::join!(index.load(), index.load());
        first.unwrap();
        second.unwrap();
        index.load().await.unwrap();

        assert_eq!(fetches.load(Ordering::SeqCst), 1);
        assert_eq!(index.query("in"), ["Inception", "Interstellar"]);
    }

    #[tokio::test]
    async fn test_failed_load_degrades_to_empty() {
        let source = FlakyTitleSource::failing(usize::MAX);
        let index = TitleIndex::new(Box::new(source), SuggestConfig::default());

        assert!(matches!(
            index.load().await,
            Err(SuggestError::DataUnavailable { .. })
        ));
        assert!(!index.is_loaded());
        assert!(index.query("in").is_empty());
        assert!(index.suggestions("in").is_empty());
    }

    #[tokio::test]
    async fn test_explicit_retry_after_failure() {
        let source = FlakyTitleSource::new(CORPUS, 1);
        let fetches = source.fetch_counter();
        let index = TitleIndex::new(Box::new(source), SuggestConfig::default());

        assert!(index.load().await.is_err());
        index.load().await.unwrap();

        assert_eq!(fetches.load(Ordering::SeqCst), 2);
        assert_eq!(index.query("matrix"), ["The Matrix"]);
    }

    #[tokio::test]
    async fn test_suggestions_carry_highlights() {
        let index = loaded_index();
        index.load().await.unwrap();

        let entries = index.suggestions("incep");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].parts(), ("", "Incep", "tion"));

        let entries = index.suggestions("in");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].parts(), ("", "In", "ception"));
        assert_eq!(entries[1].parts(), ("", "In", "terstellar"));
    }

    #[tokio::test]
    async fn test_duplicate_titles_survive() {
        let index = TitleIndex::new(
            Box::new(StaticTitleSource::new(&["Dune", "Dune", "Dune: Part Two"])),
            SuggestConfig::default(),
        );
        index.load().await.unwrap();

        assert_eq!(index.query("dune"), ["Dune", "Dune", "Dune: Part Two"]);
    }
}
