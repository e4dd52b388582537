//! Score result types
//!
//! `Score` is the two-number result the presentation layer displays.
//! `ScoreBreakdown` carries the same numbers plus the hand/read split and
//! per-index detail.

use serde::{Deserialize, Serialize};

use super::symbol::TransitionSymbol;

/// Total and per-note average complexity
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Default)]
pub struct Score {
    pub total: f64,
    /// `total / n` over the full pattern length
    pub average: f64,
}

impl Score {
    pub const ZERO: Score = Score { total: 0.0, average: 0.0 };
}

/// Contribution of one scored index (one chunk / one note pair)
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NoteScore {
    pub index: usize,
    pub left: TransitionSymbol,
    pub right: TransitionSymbol,
    pub memory_weight: f64,
    pub strain: f64,
    /// Base scores times interaction multipliers, before memory and strain
    pub motion: f64,
    pub score: f64,
}

/// Full scoring result including the hand/read split
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub total: f64,
    pub average: f64,
    /// Motion-only component: sum of `motion` over the note count
    pub hand: f64,
    /// Memory and strain load: `average - hand`
    pub read: f64,
    /// `hand` as a percentage of `average`
    pub hand_share: f64,
    /// `read` as a percentage of `average`
    pub read_share: f64,
    pub note_count: usize,
    pub notes: Vec<NoteScore>,
}

impl ScoreBreakdown {
    pub fn score(&self) -> Score {
        Score {
            total: self.total,
            average: self.average,
        }
    }
}
