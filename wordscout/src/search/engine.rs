use rayon::prelude::*;
use tracing::{debug, trace};

use super::automaton::Automaton;
use super::resolver::resolve_overlaps;
use crate::dictionary::Dictionary;
use crate::filters::{filter_words, Filter};
use crate::metrics::AutomatonStats;
use crate::results::SearchResult as SearchOutput;

/// Finds dictionary words in text.
///
/// A searcher is built once from a dictionary and a [`Filter`] and is
/// read-only from then on: changing the filter means building a new searcher.
/// Every `find` call works on its own scratch state, so one searcher can be
/// shared (for example behind an `Arc`) by any number of threads without
/// locking.
#[derive(Debug, Clone)]
pub struct Searcher {
    automaton: Automaton,
    words: Vec<String>,
    filter: Filter,
    stats: AutomatonStats,
}

impl Searcher {
    /// Filters `dictionary` and builds the automaton for the surviving words
    pub fn new(dictionary: &Dictionary, filter: Filter) -> Self {
        let words = filter_words(dictionary.iter(), &filter);
        let automaton = Automaton::new(&words);
        let stats = automaton.stats();

        debug!(
            "Built searcher: {} of {} dictionary words kept by {:?}",
            words.len(),
            dictionary.len(),
            filter
        );
        stats.log_stats();

        Self {
            automaton,
            words,
            filter,
            stats,
        }
    }

    /// Number of words this searcher looks for
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// A copy of the working word set
    pub fn words(&self) -> Vec<String> {
        self.words.clone()
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn stats(&self) -> AutomatonStats {
        self.stats
    }

    /// Finds every dictionary word occurring in `text`.
    ///
    /// The text is lowercased before scanning and all offsets refer to the
    /// lowercased text. For ASCII (and most other input) lowercasing keeps the
    /// byte length, so offsets line up with the original; for the few
    /// characters whose lowercase form has a different UTF-8 length they do
    /// not.
    ///
    /// With `prefer_longest_non_overlapping` set, overlapping matches are
    /// collapsed as described in [`resolve_overlaps`]. Otherwise every
    /// occurrence is returned, ordered by end offset.
    pub fn find(&self, text: &str) -> SearchOutput {
        if text.is_empty() {
            return SearchOutput::empty();
        }

        let lowered = text.to_lowercase();
        if lowered.len() != text.len() {
            debug!(
                "Lowercasing changed text length from {} to {} bytes",
                text.len(),
                lowered.len()
            );
        }

        let mut matches = self.automaton.find_matches(&lowered);
        trace!("Scan found {} raw matches", matches.len());

        if self.filter.prefer_longest_non_overlapping {
            matches = resolve_overlaps(matches);
        }

        SearchOutput::from_matches(matches)
    }

    /// Runs [`find`](Self::find) over many texts in parallel.
    ///
    /// Results come back in the same order as `texts`.
    pub fn find_many<S>(&self, texts: &[S]) -> Vec<SearchOutput>
    where
        S: AsRef<str> + Sync,
    {
        texts.par_iter().map(|text| self.find(text.as_ref())).collect()
    }
}
