//! Notes and note patterns
//!
//! A pattern is a flat sequence of two note kinds. Source text uses `o` for
//! don (the primary note) and `x` for ka (the secondary note).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::parse::errors::PatternError;

/// One of the two interchangeable note kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Note {
    /// Don, written `o`
    Primary,
    /// Ka, written `x`
    Secondary,
}

impl Note {
    /// Map a source character to a note (case-insensitive)
    pub fn from_char(ch: char) -> Option<Note> {
        match ch {
            'o' | 'O' => Some(Note::Primary),
            'x' | 'X' => Some(Note::Secondary),
            _ => None,
        }
    }

    /// Canonical lowercase source character
    pub fn as_char(&self) -> char {
        match self {
            Note::Primary => 'o',
            Note::Secondary => 'x',
        }
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Ordered, possibly empty sequence of notes
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pattern {
    notes: Vec<Note>,
}

impl Pattern {
    pub fn new(notes: Vec<Note>) -> Self {
        Self { notes }
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Right-hand track: notes at even positions
    pub fn right_track(&self) -> Vec<Note> {
        self.notes.iter().step_by(2).copied().collect()
    }

    /// Left-hand track: notes at odd positions
    pub fn left_track(&self) -> Vec<Note> {
        self.notes.iter().skip(1).step_by(2).copied().collect()
    }

    /// Non-overlapping two-note chunks; a trailing odd note is dropped
    pub fn chunks(&self) -> impl Iterator<Item = [Note; 2]> + '_ {
        self.notes.chunks_exact(2).map(|pair| [pair[0], pair[1]])
    }
}

impl From<Vec<Note>> for Pattern {
    fn from(notes: Vec<Note>) -> Self {
        Self::new(notes)
    }
}

impl FromIterator<Note> for Pattern {
    fn from_iter<I: IntoIterator<Item = Note>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for note in &self.notes {
            write!(f, "{}", note)?;
        }
        Ok(())
    }
}

/// Strict parse: every character must be a note.
/// Use `parse::normalize` for lenient input.
impl FromStr for Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .enumerate()
            .map(|(position, ch)| {
                Note::from_char(ch).ok_or(PatternError::InvalidNote { ch, position })
            })
            .collect()
    }
}
