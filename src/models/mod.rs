//! Models module for the complexity scorer
//!
//! This module contains the note, symbol and score types shared
//! by the parser, the scoring pipeline and the WASM API.

pub mod note;
pub mod score;
pub mod symbol;

// Re-export commonly used types
pub use note::*;
pub use score::*;
pub use symbol::*;
