//! Scoring pipeline
//!
//! - `transitions`: per-hand transition symbols
//! - `memory`: chunk memory stack and exponential memory weights
//! - `aggregate`: weighted combination into total / average
//! - `reference`: fixed comparison patterns

pub mod aggregate;
pub mod constants;
pub mod memory;
pub mod reference;
pub mod transitions;

pub use aggregate::{score, score_breakdown, score_pattern};
pub use memory::{memory_weights, MemoryStack};
pub use reference::{reference_scores, ReferenceScore, REFERENCE_PATTERNS};
pub use transitions::{derive_symbols, TrackSymbols};
