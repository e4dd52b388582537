//! Sequence normalizer
//!
//! Reduces arbitrary text to a pattern of `o`/`x` notes. Anything else,
//! whitespace included, is dropped without error.

use crate::models::{Note, Pattern};

/// Filter `input` down to its note characters, preserving order
pub fn normalize(input: &str) -> Pattern {
    let pattern: Pattern = input.chars().filter_map(Note::from_char).collect();

    let dropped = input.chars().count() - pattern.len();
    if dropped > 0 {
        log::debug!("normalize: dropped {} non-note character(s)", dropped);
    }

    pattern
}

/// Normalize and render back to canonical lowercase text
pub fn normalize_str(input: &str) -> String {
    normalize(input).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert!(normalize("").is_empty());
        assert!(normalize("   \t\n").is_empty());
    }

    #[test]
    fn test_drops_invalid_characters() {
        assert_eq!(normalize_str("o1x.o2x"), "oxox");
        assert_eq!(normalize_str("o x | x o"), "oxxo");
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(normalize_str("OoXx"), "ooxx");
    }

    #[test]
    fn test_idempotent() {
        let once = normalize_str("Oo x?Xo-");
        let twice = normalize_str(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_non_ascii_dropped() {
        assert_eq!(normalize_str("oö×x"), "ox");
    }
}
