//! Error types for strict pattern parsing
//!
//! Scoring itself never fails. These errors only come from `Pattern::from_str`,
//! which rejects text the lenient normalizer would silently clean up.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    /// A character that is neither `o` nor `x` (any case)
    #[error("Invalid note '{ch}' at position {position} (expected 'o' or 'x')")]
    InvalidNote { ch: char, position: usize },
}
