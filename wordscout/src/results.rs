//! Match and result types returned by a search.
//!
//! Results are plain owned values. A [`SearchResult`] is built fresh for every
//! call to `find` and shares nothing with the searcher that produced it, so
//! callers can keep, move or send it anywhere.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A single occurrence of a dictionary word in the scanned text
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Match {
    /// The dictionary word that was found
    pub word: String,
    /// Byte offset where the word starts in the lowercased text
    pub start_pos: usize,
    /// Byte offset one past the last byte of the word
    pub end_pos: usize,
}

impl Match {
    pub fn new(word: impl Into<String>, start_pos: usize) -> Self {
        let word = word.into();
        let end_pos = start_pos + word.len();
        Self {
            word,
            start_pos,
            end_pos,
        }
    }

    /// Length of the match in bytes
    pub fn len(&self) -> usize {
        self.end_pos - self.start_pos
    }

    pub fn is_empty(&self) -> bool {
        self.start_pos == self.end_pos
    }

    /// Whether the two matches share at least one byte
    pub fn overlaps(&self, other: &Match) -> bool {
        self.start_pos < other.end_pos && other.start_pos < self.end_pos
    }
}

/// The outcome of a single `find` call
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchResult {
    /// Number of matches returned
    pub word_count: usize,
    /// Distinct words among the matches, in no particular order
    pub unique_words: HashSet<String>,
    /// Every match returned, in scan order (or start order when overlaps
    /// were resolved)
    pub matches: Vec<Match>,
}

impl SearchResult {
    /// Creates an empty search result
    pub fn empty() -> Self {
        Default::default()
    }

    /// Aggregates a final match list into a result
    pub fn from_matches(matches: Vec<Match>) -> Self {
        let unique_words = matches.iter().map(|m| m.word.clone()).collect();
        Self {
            word_count: matches.len(),
            unique_words,
            matches,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Whether `word` was matched at least once
    pub fn contains_word(&self, word: &str) -> bool {
        self.unique_words.contains(word)
    }
}
