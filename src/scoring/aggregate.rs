//! Complexity aggregation
//!
//! Combines both hands' transition symbols, the memory weights and the
//! strain factor into a total and a per-note average.

use crate::models::{NoteScore, Pattern, Score, ScoreBreakdown};
use crate::parse::normalize;

use super::constants::{base_score, interaction, FATIGUE_BASE, STRAIN_STEP};
use super::memory::memory_weights;
use super::transitions::derive_symbols;

/// Shares are reported as zero below this average
const SHARE_EPSILON: f64 = 0.0001;

/// Normalize `input` and score it
pub fn score(input: &str) -> Score {
    score_pattern(&normalize(input))
}

/// Score an already-parsed pattern
pub fn score_pattern(pattern: &Pattern) -> Score {
    score_breakdown(pattern).score()
}

/// Score a pattern, keeping per-index detail and the hand/read split
pub fn score_breakdown(pattern: &Pattern) -> ScoreBreakdown {
    let n = pattern.len();
    if n < 2 {
        return ScoreBreakdown {
            note_count: n,
            ..ScoreBreakdown::default()
        };
    }

    let symbols = derive_symbols(pattern);
    let weights = memory_weights(pattern, FATIGUE_BASE);
    debug_assert_eq!(symbols.left.len(), n / 2);
    debug_assert_eq!(symbols.right.len(), n / 2);
    debug_assert_eq!(weights.len(), n / 2);

    let notes: Vec<NoteScore> = symbols
        .left
        .iter()
        .zip(&symbols.right)
        .zip(&weights)
        .enumerate()
        .map(|(index, ((&left, &right), &memory_weight))| {
            let (left_mult, right_mult) = interaction(left, right);
            let motion = base_score(left) * left_mult + base_score(right) * right_mult;
            let strain = 1.0 + STRAIN_STEP * index as f64;

            NoteScore {
                index,
                left,
                right,
                memory_weight,
                strain,
                motion,
                score: motion * memory_weight * strain,
            }
        })
        .collect();

    let total: f64 = notes.iter().map(|note| note.score).sum();
    let motion_total: f64 = notes.iter().map(|note| note.motion).sum();

    let average = total / n as f64;
    let hand = motion_total / n as f64;
    let read = average - hand;

    let (hand_share, read_share) = if average > SHARE_EPSILON {
        (hand / average * 100.0, read / average * 100.0)
    } else {
        (0.0, 0.0)
    };

    log::debug!(
        "score: n={} scored={} total={:.4} average={:.4}",
        n,
        notes.len(),
        total,
        average
    );

    ScoreBreakdown {
        total,
        average,
        hand,
        read,
        hand_share,
        read_share,
        note_count: n,
        notes,
    }
}
