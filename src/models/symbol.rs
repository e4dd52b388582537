use serde::{Deserialize, Serialize};
use std::fmt;

use super::note::Note;

/// Per-track transition symbol
///
/// Describes how one hand moved between two consecutive notes of its own
/// track. The first note of a track has no predecessor and is a `Hold`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransitionSymbol {
    /// Primary → Secondary
    Rise,
    /// Secondary → Primary
    Fall,
    /// No change
    Hold,
}

impl TransitionSymbol {
    /// Symbol for the move from `prev` to `curr` on the same track
    pub fn between(prev: Note, curr: Note) -> TransitionSymbol {
        match (prev, curr) {
            (Note::Secondary, Note::Primary) => TransitionSymbol::Fall,
            (Note::Primary, Note::Secondary) => TransitionSymbol::Rise,
            _ => TransitionSymbol::Hold,
        }
    }

    /// Short form used in logs: u / d / k
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionSymbol::Rise => "u",
            TransitionSymbol::Fall => "d",
            TransitionSymbol::Hold => "k",
        }
    }
}

impl fmt::Display for TransitionSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_between_all_pairs() {
        assert_eq!(TransitionSymbol::between(Note::Primary, Note::Secondary), TransitionSymbol::Rise);
        assert_eq!(TransitionSymbol::between(Note::Secondary, Note::Primary), TransitionSymbol::Fall);
        assert_eq!(TransitionSymbol::between(Note::Primary, Note::Primary), TransitionSymbol::Hold);
        assert_eq!(TransitionSymbol::between(Note::Secondary, Note::Secondary), TransitionSymbol::Hold);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", TransitionSymbol::Rise), "u");
        assert_eq!(format!("{}", TransitionSymbol::Hold), "k");
    }
}
