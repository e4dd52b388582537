//! Transition symbol derivation
//!
//! Splits a pattern into the right track (even positions) and the left track
//! (odd positions) and describes each hand's motion note by note.

use crate::models::{Pattern, TransitionSymbol};

/// Aligned symbol sequences for both hands
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TrackSymbols {
    pub left: Vec<TransitionSymbol>,
    pub right: Vec<TransitionSymbol>,
}

impl TrackSymbols {
    /// Number of aligned index pairs
    pub fn len(&self) -> usize {
        self.left.len().min(self.right.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Derive per-hand transition symbols
///
/// The left track is seeded with a `Hold` for its first note. The right
/// track gets one symbol per consecutive pair, plus a trailing `Hold` when
/// the pattern length is even. For `n >= 2` both end at `floor(n/2)`.
pub fn derive_symbols(pattern: &Pattern) -> TrackSymbols {
    let right_track = pattern.right_track();
    let left_track = pattern.left_track();

    let mut left = Vec::with_capacity(left_track.len() + 1);
    left.push(TransitionSymbol::Hold);
    left.extend(
        left_track
            .windows(2)
            .map(|pair| TransitionSymbol::between(pair[0], pair[1])),
    );

    let mut right: Vec<TransitionSymbol> = right_track
        .windows(2)
        .map(|pair| TransitionSymbol::between(pair[0], pair[1]))
        .collect();

    if pattern.len() % 2 == 0 {
        right.push(TransitionSymbol::Hold);
    }

    // Never taken: right holds ceil(n/2) - 1 symbols (+1 when n is even),
    // left holds max(floor(n/2), 1).
    if right.len() > left.len() {
        left.push(TransitionSymbol::Hold);
    }

    TrackSymbols { left, right }
}
