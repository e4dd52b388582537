//! Parsing module for note patterns
//!
//! This module converts raw text input into note patterns
//! and preview tokens.

pub mod errors;
pub mod normalize;
pub mod preview;

// Re-export commonly used types
pub use errors::PatternError;
pub use normalize::*;
pub use preview::*;
