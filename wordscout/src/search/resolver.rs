use tracing::trace;

use crate::results::Match;

/// Reduces a raw match list to non-overlapping matches, longest first.
///
/// Matches are ordered by start offset, longer matches first at the same
/// start, then scanned greedily: a match is kept only if it starts at or
/// after the end of the last kept match. This is a greedy heuristic; it does
/// not maximize coverage or count, but it never keeps a shorter match over a
/// longer one that starts at the same offset.
///
/// The sort is stable, so among matches with the same start and length the
/// one discovered first wins.
pub fn resolve_overlaps(mut matches: Vec<Match>) -> Vec<Match> {
    let total = matches.len();
    matches.sort_by(|a, b| {
        a.start_pos
            .cmp(&b.start_pos)
            .then_with(|| b.len().cmp(&a.len()))
    });

    let mut accepted: Vec<Match> = Vec::with_capacity(matches.len());
    for candidate in matches {
        let free = accepted
            .last()
            .map_or(true, |last| candidate.start_pos >= last.end_pos);
        if free {
            accepted.push(candidate);
        }
    }

    trace!(
        "Overlap resolution kept {} of {} matches",
        accepted.len(),
        total
    );
    accepted
}
