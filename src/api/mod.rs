//! Complexity scorer WASM API
//!
//! This module provides the JavaScript-facing API.
//!
//! # Module Structure
//!
//! - `helpers`: logging macros, the API error type and serialization helpers
//! - `score`: scoring, normalization, preview and reference exports

pub mod helpers;
pub mod score;

pub use score::{
    normalize_pattern, preview_pattern, reference_patterns, score_breakdown_json, score_input,
    ScoreReport,
};
