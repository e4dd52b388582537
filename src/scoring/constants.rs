//! Fixed scoring constants
//!
//! Base scores per transition symbol, the left/right interaction table,
//! the memory fatigue base and the strain step.

use crate::models::TransitionSymbol;

/// Base of the exponential memory weight: `FATIGUE_BASE^(depth - 1)`
pub const FATIGUE_BASE: f64 = 1.5;

/// Per-index increase of the strain factor: `1 + STRAIN_STEP * i`
pub const STRAIN_STEP: f64 = 0.005;

/// Difficulty of a single hand motion
pub fn base_score(symbol: TransitionSymbol) -> f64 {
    match symbol {
        TransitionSymbol::Rise => 1.2,
        TransitionSymbol::Fall => 1.1,
        TransitionSymbol::Hold => 1.0,
    }
}

/// Multipliers `(left, right)` for simultaneous motions of both hands
///
/// The opposing-motion entries `(Rise, Fall)` and `(Fall, Rise)` both give
/// `(0.5, 1.0)`: an easy alternating motion, not a symmetric pair.
pub fn interaction(left: TransitionSymbol, right: TransitionSymbol) -> (f64, f64) {
    use TransitionSymbol::*;

    match (left, right) {
        (Hold, Hold) | (Hold, Rise) | (Hold, Fall) => (1.0, 1.0),
        (Rise, Hold) | (Fall, Hold) => (1.0, 1.5),
        (Rise, Rise) | (Fall, Fall) => (1.5, 1.5),
        (Rise, Fall) | (Fall, Rise) => (0.5, 1.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use TransitionSymbol::*;

    #[test]
    fn test_base_scores() {
        assert_eq!(base_score(Rise), 1.2);
        assert_eq!(base_score(Fall), 1.1);
        assert_eq!(base_score(Hold), 1.0);
    }

    #[test]
    fn test_interaction_table() {
        assert_eq!(interaction(Hold, Rise), (1.0, 1.0));
        assert_eq!(interaction(Rise, Hold), (1.0, 1.5));
        assert_eq!(interaction(Fall, Fall), (1.5, 1.5));
        assert_eq!(interaction(Rise, Fall), (0.5, 1.0));
        assert_eq!(interaction(Fall, Rise), (0.5, 1.0));
    }
}
