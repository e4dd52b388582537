//! Reference patterns
//!
//! A fixed set of patterns scored side by side with user input so the
//! numbers have something to be compared against.

use serde::{Deserialize, Serialize};

use crate::models::Pattern;
use crate::parse::normalize;

use super::aggregate::score_breakdown;

pub const REFERENCE_PATTERNS: [&str; 5] = [
    "oooooooooooooooo",
    "ooxxooxxooxxooxx",
    "oxxooxxooxxooxxo",
    "xxoxxoxxoxxoxxox",
    "xxoxooxoxxoxooxo",
];

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceScore {
    pub pattern: String,
    pub total: f64,
    pub average: f64,
    pub hand: f64,
    pub read: f64,
    pub hand_share: f64,
    pub read_share: f64,
}

impl ReferenceScore {
    fn from_pattern(pattern: &Pattern) -> Self {
        let breakdown = score_breakdown(pattern);
        Self {
            pattern: pattern.to_string(),
            total: breakdown.total,
            average: breakdown.average,
            hand: breakdown.hand,
            read: breakdown.read,
            hand_share: breakdown.hand_share,
            read_share: breakdown.read_share,
        }
    }
}

/// Score every reference pattern, in table order
pub fn reference_scores() -> Vec<ReferenceScore> {
    REFERENCE_PATTERNS
        .iter()
        .map(|text| ReferenceScore::from_pattern(&normalize(text)))
        .collect()
}
