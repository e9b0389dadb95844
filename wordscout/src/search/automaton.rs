use std::collections::VecDeque;
use tracing::trace;

use crate::metrics::AutomatonStats;
use crate::results::Match;

type StateId = u32;
type PatternId = u32;

const ROOT: StateId = 0;

/// One node of the trie. Its position in the trie spells a prefix of at least
/// one pattern.
#[derive(Debug, Clone, Default)]
struct State {
    /// Goto transitions, sorted by byte
    transitions: Vec<(u8, StateId)>,
    /// Longest proper suffix of this prefix that is also a trie prefix
    fail: StateId,
    /// Pattern spelled exactly by this prefix
    output: Option<PatternId>,
    /// Nearest state on the failure chain that has an output
    output_link: Option<StateId>,
    depth: usize,
}

impl State {
    fn next(&self, byte: u8) -> Option<StateId> {
        self.transitions
            .binary_search_by_key(&byte, |&(b, _)| b)
            .ok()
            .map(|idx| self.transitions[idx].1)
    }
}

/// Multi-pattern matcher over a fixed set of words (Aho-Corasick).
///
/// The automaton is a trie of every pattern with failure links, so a scan
/// consumes each input byte once and never backtracks. Construction costs
/// time proportional to the total pattern length; a scan costs time
/// proportional to the text length plus the number of matches reported.
///
/// Matching is byte-wise and case-sensitive. Callers lowercase the text
/// first if they want case-insensitive matching.
///
/// Once built, the automaton is never mutated, so it can be shared freely
/// across threads.
#[derive(Debug, Clone)]
pub struct Automaton {
    states: Vec<State>,
    patterns: Vec<String>,
}

impl Automaton {
    /// Builds the automaton for `patterns`.
    ///
    /// Empty patterns are ignored and repeated patterns are stored once, so
    /// each occurrence in the text is reported a single time.
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut automaton = Self {
            states: vec![State::default()],
            patterns: Vec::new(),
        };

        for pattern in patterns {
            automaton.insert(pattern.as_ref());
        }
        automaton.build_failure_links();

        trace!(
            "Built automaton with {} patterns and {} states",
            automaton.patterns.len(),
            automaton.states.len()
        );
        automaton
    }

    fn insert(&mut self, pattern: &str) {
        if pattern.is_empty() {
            return;
        }

        let mut current = ROOT;
        for &byte in pattern.as_bytes() {
            current = match self.states[current as usize].next(byte) {
                Some(next) => next,
                None => self.add_child(current, byte),
            };
        }

        let state = &mut self.states[current as usize];
        if state.output.is_some() {
            trace!("Skipping duplicate pattern '{}'", pattern);
            return;
        }
        state.output = Some(self.patterns.len() as PatternId);
        self.patterns.push(pattern.to_owned());
    }

    fn add_child(&mut self, parent: StateId, byte: u8) -> StateId {
        let id = self.states.len() as StateId;
        let depth = self.states[parent as usize].depth + 1;
        self.states.push(State {
            depth,
            ..State::default()
        });

        let transitions = &mut self.states[parent as usize].transitions;
        let idx = transitions.partition_point(|&(b, _)| b < byte);
        transitions.insert(idx, (byte, id));
        id
    }

    /// Breadth-first pass computing failure and output links. Depth-one
    /// states keep the root as their failure target. Every other state's
    /// failure target is shallower than the state itself, so it is always
    /// finished before it is needed.
    fn build_failure_links(&mut self) {
        let mut queue = VecDeque::new();

        for &(_, child) in &self.states[ROOT as usize].transitions {
            queue.push_back(child);
        }

        while let Some(state) = queue.pop_front() {
            let children = self.states[state as usize].transitions.clone();
            let parent_fail = self.states[state as usize].fail;

            for (byte, child) in children {
                let fail = self.follow(parent_fail, byte);

                let target = &self.states[fail as usize];
                let output_link = if target.output.is_some() {
                    Some(fail)
                } else {
                    target.output_link
                };

                let node = &mut self.states[child as usize];
                node.fail = fail;
                node.output_link = output_link;
                queue.push_back(child);
            }
        }
    }

    /// Transition from `state` on `byte`, falling back along failure links
    /// until a goto edge exists or the root is reached.
    fn follow(&self, mut state: StateId, byte: u8) -> StateId {
        loop {
            if let Some(next) = self.states[state as usize].next(byte) {
                return next;
            }
            if state == ROOT {
                return ROOT;
            }
            state = self.states[state as usize].fail;
        }
    }

    /// Finds every occurrence of every pattern in `haystack`.
    ///
    /// Overlapping occurrences are all reported. Matches come out ordered by
    /// end offset; matches ending at the same offset come longest first.
    pub fn find_matches(&self, haystack: &str) -> Vec<Match> {
        let mut matches = Vec::new();
        if self.patterns.is_empty() {
            return matches;
        }

        let mut state = ROOT;
        for (pos, &byte) in haystack.as_bytes().iter().enumerate() {
            state = self.follow(state, byte);

            let node = &self.states[state as usize];
            let mut emit = if node.output.is_some() {
                Some(state)
            } else {
                node.output_link
            };

            while let Some(id) = emit {
                let node = &self.states[id as usize];
                if let Some(pattern) = node.output {
                    let word = &self.patterns[pattern as usize];
                    matches.push(Match::new(word.as_str(), pos + 1 - word.len()));
                }
                emit = node.output_link;
            }
        }

        matches
    }

    /// Number of distinct patterns in the automaton
    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }

    /// Number of trie states, including the root
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// The distinct patterns, in insertion order
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    pub fn stats(&self) -> AutomatonStats {
        AutomatonStats {
            patterns: self.patterns.len(),
            states: self.states.len(),
            transitions: self.states.iter().map(|s| s.transitions.len()).sum(),
            max_depth: self.states.iter().map(|s| s.depth).max().unwrap_or(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn found(automaton: &Automaton, text: &str) -> Vec<(String, usize, usize)> {
        automaton
            .find_matches(text)
            .into_iter()
            .map(|m| (m.word, m.start_pos, m.end_pos))
            .collect()
    }

    fn naive(patterns: &[&str], text: &str) -> Vec<(String, usize, usize)> {
        let mut out = Vec::new();
        for pattern in patterns.iter().filter(|p| !p.is_empty()) {
            let mut from = 0;
            while let Some(idx) = text[from..].find(pattern) {
                let start = from + idx;
                out.push((pattern.to_string(), start, start + pattern.len()));
                from = start + text[start..].chars().next().map_or(1, char::len_utf8);
            }
        }
        out.sort();
        out.dedup();
        out
    }

    fn state_for(automaton: &Automaton, prefix: &str) -> StateId {
        prefix.bytes().fold(ROOT, |state, byte| {
            automaton.states[state as usize].next(byte).unwrap()
        })
    }

    #[test]
    fn test_classic_example() {
        let automaton = Automaton::new(["he", "she", "his", "hers"]);
        let matches = found(&automaton, "ushers");
        assert_eq!(
            matches,
            vec![
                ("she".to_string(), 1, 4),
                ("he".to_string(), 2, 4),
                ("hers".to_string(), 2, 6),
            ]
        );
    }

    #[test]
    fn test_failure_links() {
        let automaton = Automaton::new(["he", "she", "his", "hers"]);

        let she = state_for(&automaton, "she");
        let he = state_for(&automaton, "he");
        let sh = state_for(&automaton, "sh");
        let h = state_for(&automaton, "h");
        let hers = state_for(&automaton, "hers");
        let s = state_for(&automaton, "s");

        assert_eq!(automaton.states[she as usize].fail, he);
        assert_eq!(automaton.states[sh as usize].fail, h);
        assert_eq!(automaton.states[hers as usize].fail, s);
        assert_eq!(automaton.states[h as usize].fail, ROOT);
        assert_eq!(automaton.states[she as usize].output_link, Some(he));
        assert_eq!(automaton.states[he as usize].output_link, None);
    }

    #[test]
    fn test_overlapping_repeats() {
        let automaton = Automaton::new(["a", "aa"]);
        let matches = found(&automaton, "aaaa");
        assert_eq!(matches.len(), 7);
        assert_eq!(matches[0], ("a".to_string(), 0, 1));
        assert_eq!(matches[1], ("aa".to_string(), 0, 2));
        assert_eq!(matches[2], ("a".to_string(), 1, 2));
    }

    #[test]
    fn test_nested_suffixes_all_reported() {
        let automaton = Automaton::new(["hello", "ello", "llo", "lo", "o"]);
        let matches = found(&automaton, "hello");
        let words: Vec<_> = matches.iter().map(|(w, _, _)| w.as_str()).collect();
        assert_eq!(words, vec!["hello", "ello", "llo", "lo", "o"]);
        assert!(matches.iter().all(|&(_, _, end)| end == 5));
    }

    #[test]
    fn test_matches_naive_search() {
        let patterns = ["he", "hell", "hello", "ell", "lo", "or", "world", "wo", "orl", "low"];
        let text = "hello world, yellow worlds below the hell";
        let automaton = Automaton::new(patterns);

        let mut actual = found(&automaton, text);
        actual.sort();
        assert_eq!(actual, naive(&patterns, text));
    }

    #[test]
    fn test_duplicates_are_stored_once() {
        let automaton = Automaton::new(["he", "he", "she"]);
        assert_eq!(automaton.pattern_count(), 2);
        assert_eq!(found(&automaton, "he").len(), 1);
    }

    #[test]
    fn test_empty_pattern_set() {
        let automaton = Automaton::new(Vec::<String>::new());
        assert!(automaton.is_empty());
        assert_eq!(automaton.state_count(), 1);
        assert!(automaton.find_matches("anything at all").is_empty());
    }

    #[test]
    fn test_empty_patterns_ignored() {
        let automaton = Automaton::new(["", "ab"]);
        assert_eq!(automaton.pattern_count(), 1);
        assert_eq!(found(&automaton, "xab"), vec![("ab".to_string(), 1, 3)]);
    }

    #[test]
    fn test_empty_text() {
        let automaton = Automaton::new(["a"]);
        assert!(automaton.find_matches("").is_empty());
    }

    #[test]
    fn test_multibyte_offsets() {
        let automaton = Automaton::new(["café", "fé"]);
        let matches = found(&automaton, "un café noir");
        assert_eq!(
            matches,
            vec![("café".to_string(), 3, 8), ("fé".to_string(), 5, 8)]
        );
    }

    #[test]
    fn test_case_sensitive() {
        let automaton = Automaton::new(["word"]);
        assert!(automaton.find_matches("WORD").is_empty());
        assert_eq!(automaton.find_matches("word").len(), 1);
    }

    #[test]
    fn test_stats() {
        let automaton = Automaton::new(["he", "she", "his", "hers"]);
        let stats = automaton.stats();
        assert_eq!(stats.patterns, 4);
        // root, h, he, her, hers, hi, his, s, sh, she
        assert_eq!(stats.states, 10);
        assert_eq!(stats.transitions, 9);
        assert_eq!(stats.max_depth, 4);
    }
}
