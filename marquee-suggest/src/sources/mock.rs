//! Mock title sources for testing.

#[cfg(test)]
use std::sync::Arc;
#[cfg(test)]
use std::sync::atomic::{AtomicUsize, Ordering};

#[cfg(test)]
use async_trait::async_trait;

#[cfg(test)]
use super::TitleSource;
#[cfg(test)]
use crate::errors::SuggestError;

/// Source serving a fixed title list, counting every fetch.
#[cfg(test)]
#[derive(Debug)]
pub(crate) struct StaticTitleSource {
    titles: Vec<String>,
    fetches: Arc<AtomicUsize>,
}

#[cfg(test)]
impl StaticTitleSource {
    pub(crate) fn new(titles: &[&str]) -> Self {
        Self {
            titles: titles.iter().map(|t| t.to_string()).collect(),
            fetches: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Handle onto the fetch counter, valid after the source is boxed away.
    pub(crate) fn fetch_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.fetches)
    }
}

#[cfg(test)]
#[async_trait]
impl TitleSource for StaticTitleSource {
    async fn fetch_titles(&self) -> Result<Vec<String>, SuggestError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        // Yield once so concurrent load() calls overlap the fetch window
        tokio::task::yield_now().await;
        Ok(self.titles.clone())
    }
}

/// Source that fails its first `failures` fetches, then serves titles.
///
/// With `failures` at least the number of load attempts this behaves as a
/// permanently dead endpoint.
#[cfg(test)]
#[derive(Debug)]
pub(crate) struct FlakyTitleSource {
    titles: Vec<String>,
    failures: usize,
    fetches: Arc<AtomicUsize>,
}

#[cfg(test)]
impl FlakyTitleSource {
    pub(crate) fn new(titles: &[&str], failures: usize) -> Self {
        Self {
            titles: titles.iter().map(|t| t.to_string()).collect(),
            failures,
            fetches: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub(crate) fn failing(failures: usize) -> Self {
        Self::new(&[], failures)
    }

    pub(crate) fn fetch_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.fetches)
    }
}

#[cfg(test)]
#[async_trait]
impl TitleSource for FlakyTitleSource {
    async fn fetch_titles(&self) -> Result<Vec<String>, SuggestError> {
        let attempt = self.fetches.fetch_add(1, Ordering::SeqCst);
        if attempt < self.failures {
            return Err(SuggestError::DataUnavailable {
                reason: "simulated network error".to_string(),
            });
        }
        Ok(self.titles.clone())
    }
}
