use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

use crate::errors::{SearchError, SearchResult};

/// The master word list that searchers are built from.
///
/// A dictionary is loaded once and never mutated afterwards. The words live
/// behind an `Arc`, so cloning a dictionary to hand it to several searchers
/// (or several threads) does not copy the list.
///
/// Words are expected to be lowercase already; the searcher lowercases the
/// text it scans, never the dictionary.
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Arc<[String]>,
}

impl Dictionary {
    /// Builds a dictionary from an ordered sequence of words.
    ///
    /// Order is preserved. Empty strings are dropped and only the first
    /// occurrence of a repeated word is kept.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut kept = Vec::new();
        let mut dropped = 0usize;

        for word in words {
            let word = word.into();
            if word.is_empty() || !seen.insert(word.clone()) {
                dropped += 1;
                continue;
            }
            kept.push(word);
        }

        if dropped > 0 {
            debug!("Dropped {} empty or duplicate dictionary entries", dropped);
        }

        Self { words: kept.into() }
    }

    /// Reads a newline-separated word list.
    ///
    /// Surrounding whitespace is trimmed; blank lines and lines starting with
    /// `#` are skipped.
    pub fn from_reader<R: Read>(reader: R) -> SearchResult<Self> {
        let mut words = Vec::new();
        for line in BufReader::new(reader).lines() {
            let line = line?;
            let word = line.trim();
            if word.is_empty() || word.starts_with('#') {
                continue;
            }
            words.push(word.to_string());
        }
        Ok(Self::from_words(words))
    }

    /// Loads a word list file from disk.
    pub fn load(path: &Path) -> SearchResult<Self> {
        let mut bytes = Vec::new();
        File::open(path)
            .and_then(|mut file| file.read_to_end(&mut bytes))
            .map_err(|e| SearchError::from_io(e, path))?;

        let contents =
            String::from_utf8(bytes).map_err(|e| SearchError::encoding_error(path, e))?;
        let dictionary = Self::from_reader(contents.as_bytes())?;

        debug!(
            "Loaded {} words from {}",
            dictionary.len(),
            path.display()
        );
        Ok(dictionary)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.words
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self {
            words: Arc::from(Vec::new()),
        }
    }
}

impl<S: Into<String>> FromIterator<S> for Dictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_words(iter)
    }
}
