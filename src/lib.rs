//! Taiko Pattern Complexity WASM Module
//!
//! Scores don/ka note patterns by hand motion, two-hand interaction and
//! short-term memory load, for use from a browser page.

pub mod api;
pub mod models;
pub mod parse;
pub mod scoring;

// Re-export commonly used types
pub use models::*;
pub use parse::{normalize, preview_tokens, PatternError, PreviewToken};
pub use scoring::{reference_scores, score, score_breakdown, score_pattern, ReferenceScore};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    init_logger();

    log::info!("Taiko complexity WASM module initialized");
}

#[cfg(feature = "console_log")]
fn init_logger() {
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::warn!("logger already initialized");
    }
}

#[cfg(not(feature = "console_log"))]
fn init_logger() {}
