//! Word detection: the automaton that scans text, the resolver that removes
//! overlapping matches, and the [`Searcher`] that ties them together.
//!
//! A query flows through the pieces in a fixed order:
//!
//! ```text
//! text -> lowercase -> Automaton::find_matches -> resolve_overlaps (optional) -> SearchResult
//! ```
//!
//! The automaton is built once per searcher; scans never modify it.

pub mod automaton;
pub mod engine;
pub mod resolver;

pub use automaton::Automaton;
pub use engine::Searcher;
pub use resolver::resolve_overlaps;
