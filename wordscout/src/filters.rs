//! Length-based selection of the working word set.
//!
//! A [`Filter`] narrows the master dictionary down to the words a searcher will
//! look for. Lengths are measured in bytes, the same unit the automaton uses
//! for match offsets.
//!
//! The default filter drops single-character words:
//! ```rust
//! use wordscout::Filter;
//!
//! let filter = Filter::default();
//! assert!(!filter.accepts("a"));
//! assert!(filter.accepts("an"));
//! ```

use serde::{Deserialize, Serialize};

/// Criteria for selecting dictionary words.
///
/// A bound of zero means "no bound". When `exact_length` is non-zero it
/// overrides both `min_length` and `max_length`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Filter {
    /// Minimum word length (inclusive)
    pub min_length: usize,
    /// Maximum word length (inclusive)
    pub max_length: usize,
    /// Exact word length
    pub exact_length: usize,
    /// Collapse overlapping matches, keeping the longest word at each start
    pub prefer_longest_non_overlapping: bool,
}

impl Default for Filter {
    fn default() -> Self {
        Self {
            min_length: 2,
            max_length: 0,
            exact_length: 0,
            prefer_longest_non_overlapping: false,
        }
    }
}

impl Filter {
    /// A filter that keeps every word.
    pub fn unbounded() -> Self {
        Self {
            min_length: 0,
            ..Self::default()
        }
    }

    /// A filter that keeps only words of exactly `length` bytes.
    pub fn exact(length: usize) -> Self {
        Self::unbounded().with_exact_length(length)
    }

    /// A filter that keeps words between `min` and `max` bytes, inclusive.
    pub fn range(min: usize, max: usize) -> Self {
        Self::unbounded().with_min_length(min).with_max_length(max)
    }

    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    pub fn with_exact_length(mut self, exact_length: usize) -> Self {
        self.exact_length = exact_length;
        self
    }

    pub fn with_overlap_resolution(mut self, enabled: bool) -> Self {
        self.prefer_longest_non_overlapping = enabled;
        self
    }

    /// Checks whether a single word passes the length criteria
    pub fn accepts(&self, word: &str) -> bool {
        let len = word.len();

        if self.exact_length > 0 {
            return len == self.exact_length;
        }

        if self.min_length > 0 && len < self.min_length {
            return false;
        }

        if self.max_length > 0 && len > self.max_length {
            return false;
        }

        true
    }
}

/// Returns the words that pass `filter`, in their original order.
///
/// An empty result is valid; a searcher built from it matches nothing.
pub fn filter_words<'a, I>(words: I, filter: &Filter) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    words
        .into_iter()
        .filter(|word| filter.accepts(word))
        .map(str::to_owned)
        .collect()
}
