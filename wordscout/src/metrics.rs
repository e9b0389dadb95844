use serde::Serialize;
use tracing::info;

/// Size figures for a built automaton.
///
/// Captured once when a searcher is constructed. Nothing here changes during
/// a search, so reading the stats never contends with running queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct AutomatonStats {
    /// Distinct patterns in the automaton
    pub patterns: usize,
    /// Trie states, including the root
    pub states: usize,
    /// Goto edges across all states
    pub transitions: usize,
    /// Length in bytes of the longest pattern
    pub max_depth: usize,
}

impl AutomatonStats {
    /// Rough heap footprint of the state table in bytes
    pub fn estimated_bytes(&self) -> usize {
        // fail + output + output_link + depth + transition vec header per state,
        // one (u8, u32) pair per edge
        const STATE_BYTES: usize = 4 + 8 + 8 + 8 + 24;
        const EDGE_BYTES: usize = 8;
        self.states * STATE_BYTES + self.transitions * EDGE_BYTES
    }

    /// Logs the current statistics
    pub fn log_stats(&self) {
        info!(
            "Automaton: {} patterns, {} states, {} transitions, max depth {}, ~{} bytes",
            self.patterns,
            self.states,
            self.transitions,
            self.max_depth,
            self.estimated_bytes()
        );
    }
}
