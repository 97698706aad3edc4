//! Prefix index over the title corpus.
//!
//! Matching granularity is substring-on-word-boundaries: every word of a
//! title is indexed, and a query token matches every word it is a prefix
//! of. Multi-token queries intersect, so "the ma" finds "The Matrix" but
//! not "The Godfather".

use std::collections::{BTreeMap, BTreeSet};

/// Derived prefix-search structure over an ordered title corpus.
///
/// Maps every lowercased word of every title to the ascending list of
/// corpus positions containing it. Built deterministically once per
/// corpus; read-only afterwards.
#[derive(Debug, Default)]
pub struct PrefixIndex {
    words: BTreeMap<String, Vec<u32>>,
}

impl PrefixIndex {
    /// Build the index from a corpus, one posting per (word, title).
    pub fn build(titles: &[String]) -> Self {
        let mut words: BTreeMap<String, Vec<u32>> = BTreeMap::new();

        for (position, title) in titles.iter().enumerate() {
            let position = position as u32;
            for word in tokenize(title) {
                let postings = words.entry(word).or_default();
                // A word repeated within one title gets a single posting
                if postings.last() != Some(&position) {
                    postings.push(position);
                }
            }
        }

        Self { words }
    }

    /// Number of distinct indexed words.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Corpus positions whose title has a word starting with every token.
    ///
    /// Positions come back ascending, which is corpus insertion order.
    /// An empty token list matches nothing.
    pub fn lookup(&self, tokens: &[String]) -> Vec<u32> {
        let mut matched: Option<BTreeSet<u32>> = None;

        for token in tokens {
            let hits = self.positions_with_prefix(token);
            let narrowed = match matched {
                Some(previous) => previous.intersection(&hits).copied().collect(),
                None => hits,
            };
            if narrowed.is_empty() {
                return Vec::new();
            }
            matched = Some(narrowed);
        }

        matched
            .map(|positions| positions.into_iter().collect())
            .unwrap_or_default()
    }

    /// Union of postings for every indexed word the token prefixes.
    fn positions_with_prefix(&self, token: &str) -> BTreeSet<u32> {
        self.words
            .range(token.to_string()..)
            .take_while(|(word, _)| word.starts_with(token))
            .flat_map(|(_, postings)| postings.iter().copied())
            .collect()
    }
}

/// Lowercased alphanumeric words of `text`, in order.
///
/// Splitting on non-alphanumeric characters means punctuation and regex
/// metacharacters in queries are plain separators, never pattern syntax.
pub(crate) fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus(titles: &[&str]) -> Vec<String> {
        titles.iter().map(|t| t.to_string()).collect()
    }

    fn query(index: &PrefixIndex, term: &str) -> Vec<u32> {
        index.lookup(&tokenize(term))
    }

    #[test]
    fn test_tokenize_splits_on_non_alphanumeric() {
        assert_eq!(tokenize("Spider-Man: No Way Home"), [
            "spider", "man", "no", "way", "home"
        ]);
        assert_eq!(tokenize("  The  Matrix  "), ["the", "matrix"]);
        assert_eq!(tokenize("!!!"), Vec::<String>::new());
        assert_eq!(tokenize(""), Vec::<String>::new());
    }

    #[test]
    fn test_word_prefix_match_in_corpus_order() {
        let titles = corpus(&["Inception", "The Matrix", "Interstellar"]);
        let index = PrefixIndex::build(&titles);

        assert_eq!(query(&index, "in"), [0, 2]);
        assert_eq!(query(&index, "IN"), [0, 2]);
        assert_eq!(query(&index, "matrix"), [1]);
    }

    #[test]
    fn test_mid_word_substrings_do_not_match() {
        let titles = corpus(&["Inception", "The Matrix"]);
        let index = PrefixIndex::build(&titles);

        // "ception" occurs inside "Inception" but starts no word
        assert!(query(&index, "ception").is_empty());
    }

    #[test]
    fn test_inner_words_match() {
        let titles = corpus(&["Spider-Man: No Way Home", "The Matrix"]);
        let index = PrefixIndex::build(&titles);

        assert_eq!(query(&index, "man"), [0]);
        assert_eq!(query(&index, "home"), [0]);
    }

    #[test]
    fn test_multi_token_queries_intersect() {
        let titles = corpus(&["The Matrix", "The Godfather", "Matrix Reloaded"]);
        let index = PrefixIndex::build(&titles);

        assert_eq!(query(&index, "the ma"), [0]);
        // Token order does not matter
        assert_eq!(query(&index, "ma the"), [0]);
        assert_eq!(query(&index, "the"), [0, 1]);
    }

    #[test]
    fn test_regex_metacharacters_are_literal_text() {
        let titles = corpus(&["The Matrix", "8½"]);
        let index = PrefixIndex::build(&titles);

        // Pattern syntax must never reach a matcher; these are separators
        assert_eq!(query(&index, "(matrix"), [0]);
        assert_eq!(query(&index, "matrix.*"), [0]);
        assert!(query(&index, ".*+?[]").is_empty());
    }

    #[test]
    fn test_duplicate_titles_are_preserved() {
        let titles = corpus(&["Dune", "Dune"]);
        let index = PrefixIndex::build(&titles);

        assert_eq!(query(&index, "dune"), [0, 1]);
    }

    #[test]
    fn test_repeated_word_in_one_title_posts_once() {
        let titles = corpus(&["New York, New York"]);
        let index = PrefixIndex::build(&titles);

        assert_eq!(query(&index, "new"), [0]);
        assert_eq!(index.word_count(), 2);
    }

    #[test]
    fn test_empty_corpus_and_empty_tokens() {
        let index = PrefixIndex::build(&[]);
        assert!(query(&index, "in").is_empty());

        let titles = corpus(&["Inception"]);
        let index = PrefixIndex::build(&titles);
        assert!(index.lookup(&[]).is_empty());
    }
}
