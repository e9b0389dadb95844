//! # wordscout
//!
//! Finds known dictionary words inside arbitrary text.
//!
//! A [`Searcher`] is built once from a [`Dictionary`] and a [`Filter`]. It
//! compiles the filtered words into an Aho-Corasick automaton, then each call
//! to [`Searcher::find`] scans the lowercased text in a single pass and
//! reports every occurrence of every word. Overlapping matches can optionally
//! be collapsed, keeping the longest word at each position.
//!
//! ```rust
//! use wordscout::{Dictionary, Filter, Searcher};
//!
//! let dictionary = Dictionary::from_words(["he", "hell", "hello", "lo", "world"]);
//!
//! let searcher = Searcher::new(&dictionary, Filter::default());
//! let result = searcher.find("Hello world");
//! assert_eq!(result.word_count, 5);
//!
//! let filter = Filter::default().with_overlap_resolution(true);
//! let searcher = Searcher::new(&dictionary, filter);
//! let result = searcher.find("Hello world");
//! assert_eq!(result.word_count, 2);
//! assert!(result.unique_words.contains("hello"));
//! assert!(result.unique_words.contains("world"));
//! ```

pub mod config;
pub mod dictionary;
pub mod errors;
pub mod filters;
pub mod logging;
pub mod metrics;
pub mod results;
pub mod search;

pub use config::WordscoutConfig;
pub use dictionary::Dictionary;
pub use errors::{SearchError, SearchResult};
pub use filters::{filter_words, Filter};
pub use metrics::AutomatonStats;
pub use results::{Match, SearchResult as SearchOutput};
pub use search::{resolve_overlaps, Automaton, Searcher};
