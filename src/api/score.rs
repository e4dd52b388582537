//! JavaScript-facing scoring API
//!
//! `scorePattern` is the one call the page needs on every input change.
//! The other exports feed the preview strip, the detail panel and the
//! reference table.

use wasm_bindgen::prelude::*;

use crate::parse::{normalize, normalize_str, preview_tokens};
use crate::scoring::{reference_scores, score_breakdown, score_pattern};
use crate::{wasm_info, wasm_log, wasm_warn};

use super::helpers::{serialize, to_json};

/// Result of `scorePattern`
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScoreReport {
    pub total: f64,
    pub average: f64,
    /// Length of the normalized pattern
    #[wasm_bindgen(js_name = noteCount)]
    pub note_count: usize,
}

/// Normalize raw input and score it
///
/// # Parameters
/// - `input`: raw text; anything other than `o`/`x` (any case) is ignored
///
/// # Returns
/// `ScoreReport` with `total`, `average` and `noteCount`
#[wasm_bindgen(js_name = scorePattern)]
pub fn score_input(input: &str) -> ScoreReport {
    let pattern = normalize(input);
    let score = score_pattern(&pattern);

    let ignored = input.chars().filter(|ch| !ch.is_whitespace()).count() - pattern.len();
    if ignored > 0 {
        wasm_warn!("scorePattern: ignored {} non-note character(s)", ignored);
    }

    wasm_log!(
        "scorePattern: {} note(s), total={:.2}, average={:.3}",
        pattern.len(),
        score.total,
        score.average
    );

    ScoreReport {
        total: score.total,
        average: score.average,
        note_count: pattern.len(),
    }
}

/// Normalize raw input to lowercase `o`/`x` text
#[wasm_bindgen(js_name = normalizePattern)]
pub fn normalize_pattern(input: &str) -> String {
    normalize_str(input)
}

/// Full breakdown (hand/read split and per-index detail) as JSON
#[wasm_bindgen(js_name = scoreBreakdownJson)]
pub fn score_breakdown_json(input: &str) -> Result<String, JsValue> {
    let breakdown = score_breakdown(&normalize(input));
    Ok(to_json(&breakdown, "Breakdown serialization error")?)
}

/// Preview token classes: "don", "ka" or "unknown" per non-whitespace character
#[wasm_bindgen(js_name = previewPattern)]
pub fn preview_pattern(input: &str) -> js_sys::Array {
    let tokens = js_sys::Array::new();
    for token in preview_tokens(input) {
        tokens.push(&JsValue::from_str(token.as_str()));
    }
    tokens
}

/// Scores for the built-in reference patterns
#[wasm_bindgen(js_name = referencePatterns)]
pub fn reference_patterns() -> Result<JsValue, JsValue> {
    let scores = reference_scores();
    wasm_info!("referencePatterns: {} pattern(s)", scores.len());
    serialize(&scores, "Reference serialization error")
}
