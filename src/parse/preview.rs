//! Preview token classification
//!
//! Turns raw input into the token strip a renderer draws: one token per
//! non-whitespace character, with anything that is not a note shown as an
//! unknown placeholder.

use serde::{Deserialize, Serialize};

use crate::models::Note;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PreviewToken {
    Don,
    Ka,
    Unknown,
}

impl PreviewToken {
    /// CSS-style class name for the token
    pub fn as_str(&self) -> &'static str {
        match self {
            PreviewToken::Don => "don",
            PreviewToken::Ka => "ka",
            PreviewToken::Unknown => "unknown",
        }
    }
}

impl From<Note> for PreviewToken {
    fn from(note: Note) -> Self {
        match note {
            Note::Primary => PreviewToken::Don,
            Note::Secondary => PreviewToken::Ka,
        }
    }
}

/// Classify every non-whitespace character of `input`
pub fn preview_tokens(input: &str) -> Vec<PreviewToken> {
    input
        .chars()
        .filter(|ch| !ch.is_whitespace())
        .map(|ch| Note::from_char(ch).map(PreviewToken::from).unwrap_or(PreviewToken::Unknown))
        .collect()
}
