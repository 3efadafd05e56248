//! Longest-match search over a bounded history window.

/// A candidate back-reference found by the [`MatchFinder`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Match {
    pub distance: usize,
    pub length: usize,
}

/// Count matching symbols between two positions of the same sequence
///
/// The comparison may run past `cur` when `src < cur`: the input is fully
/// known, so a self-overlapping match is checked against real data.
#[inline]
pub fn match_length(data: &[u8], src: usize, cur: usize, max_len: usize) -> usize {
    data[src..].iter().zip(&data[cur..]).take(max_len).take_while(|(a, b)| a == b).count()
}

/// Exhaustive longest-match finder
///
/// Splits a window of `W` symbols into a lookahead of `W / 3` symbols (the
/// longest match it will report) and a search span of the remaining
/// symbols (how far back a match may start).
#[derive(Clone, Copy, Debug)]
pub struct MatchFinder {
    lookahead: usize,
    search_span: usize,
}

impl MatchFinder {
    pub fn new(window_size: usize) -> Self {
        let lookahead = window_size / 3;
        Self { lookahead, search_span: window_size - lookahead }
    }

    pub fn lookahead(&self) -> usize {
        self.lookahead
    }

    pub fn search_span(&self) -> usize {
        self.search_span
    }

    /// Find the longest match for `data[pos..]` starting in the search span
    ///
    /// Candidates are scanned nearest first and only a strictly longer match
    /// replaces the current best, so equal-length ties resolve to the
    /// smallest distance.
    pub fn find_longest(&self, data: &[u8], pos: usize) -> Option<Match> {
        let max_len = self.lookahead.min(data.len() - pos);
        if max_len == 0 {
            return None;
        }

        let mut best: Option<Match> = None;
        for distance in 1..=self.search_span.min(pos) {
            let length = match_length(data, pos - distance, pos, max_len);
            if length > best.map_or(0, |m| m.length) {
                best = Some(Match { distance, length });
                if length == max_len {
                    break;
                }
            }
        }
        best
    }
}
