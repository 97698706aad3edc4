//! Suggestion formatting: mark the queried fragment inside each title.
//!
//! Produces structured entries (prefix / matched span / suffix) instead of
//! embedding markup, so the view layer owns presentation entirely.

use std::ops::Range;

use serde::{Deserialize, Serialize};

/// A display-ready autocomplete candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionEntry {
    /// The matched title, unchanged
    pub title: String,
    /// Byte range of the highlighted fragment, when one was found
    pub highlight: Option<Range<usize>>,
}

impl SuggestionEntry {
    /// The title split as (prefix, matched fragment, suffix).
    ///
    /// Without a highlight, or with a range that does not land on char
    /// boundaries of this title, the whole title is the prefix.
    pub fn parts(&self) -> (&str, &str, &str) {
        if let Some(range) = &self.highlight
            && let Some(prefix) = self.title.get(..range.start)
            && let Some(matched) = self.title.get(range.start..range.end)
            && let Some(suffix) = self.title.get(range.end..)
        {
            return (prefix, matched, suffix);
        }
        (self.title.as_str(), "", "")
    }
}

/// Format matching titles into display entries, highlighting the first
/// case-insensitive occurrence of `fragment` in each.
///
/// Entries preserve input order and are capped at `limit`. An empty or
/// whitespace-only fragment marks nothing; a fragment absent from a title
/// (the index should not hand us one, but callers may) falls back to the
/// bare title instead of failing.
pub fn format_suggestions(
    titles: &[String],
    fragment: &str,
    limit: usize,
) -> Vec<SuggestionEntry> {
    let fragment = fragment.trim();

    titles
        .iter()
        .take(limit)
        .map(|title| SuggestionEntry {
            title: title.clone(),
            highlight: find_case_insensitive(title, fragment),
        })
        .collect()
}

/// Byte range of the first case-insensitive occurrence of `fragment`.
///
/// Lowercasing can change byte lengths, so this walks chars of the
/// original title instead of calling `find` on a lowered copy and trusting
/// its offsets.
fn find_case_insensitive(title: &str, fragment: &str) -> Option<Range<usize>> {
    let fragment_lowered: Vec<char> = fragment.to_lowercase().chars().collect();
    if fragment_lowered.is_empty() {
        return None;
    }

    title
        .char_indices()
        .find_map(|(start, _)| match_from(title, start, &fragment_lowered).map(|end| start..end))
}

/// Match `fragment` chars against `title[start..]`, returning the end
/// byte offset of the matched span.
fn match_from(title: &str, start: usize, fragment: &[char]) -> Option<usize> {
    let mut remaining = fragment.iter().copied();
    let mut expected = remaining.next();

    for (offset, ch) in title[start..].char_indices() {
        if expected.is_none() {
            return Some(start + offset);
        }
        for lowered in ch.to_lowercase() {
            match expected {
                Some(want) if want == lowered => expected = remaining.next(),
                // Mismatch, or the fragment ends inside this char's
                // lowercase expansion; either way no span ends here
                _ => return None,
            }
        }
    }

    expected.is_none().then_some(title.len())
}
