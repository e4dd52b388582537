//! Pattern memory stack
//!
//! Models short-term reading load. Chunks (non-overlapping note pairs) are
//! pushed onto a most-recent-first stack. When a chunk repeats one already
//! on the stack, everything from that earlier occurrence backwards is
//! forgotten. A run of fresh chunks deepens the stack and the weight grows
//! exponentially with depth.

use crate::models::{Note, Pattern};

type Chunk = [Note; 2];

/// Most-recent-first chunk history for a single scoring call
#[derive(Debug, Clone, Default)]
pub struct MemoryStack {
    chunks: Vec<Chunk>,
}

impl MemoryStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current stack depth
    pub fn depth(&self) -> usize {
        self.chunks.len()
    }

    /// Push `chunk` to the front, collapsing at its previous occurrence.
    /// Returns the depth after the push.
    pub fn push(&mut self, chunk: Chunk) -> usize {
        self.chunks.insert(0, chunk);

        if let Some(k) = self.find_repeat() {
            log::trace!(
                "memory: chunk {}{} repeats at depth {}, collapsing {} -> {}",
                chunk[0],
                chunk[1],
                k,
                self.chunks.len(),
                k
            );
            self.chunks.truncate(k);
        }

        self.chunks.len()
    }

    /// First index `k >= 1` holding the same chunk as the front
    fn find_repeat(&self) -> Option<usize> {
        let front = self.chunks.first()?;
        self.chunks
            .iter()
            .enumerate()
            .skip(1)
            .find(|(_, chunk)| *chunk == front)
            .map(|(k, _)| k)
    }
}

/// Memory weight for a stack depth: `base^(depth - 1)`
pub fn weight_for_depth(depth: usize, base: f64) -> f64 {
    base.powi(depth as i32 - 1)
}

/// One memory weight per chunk, in temporal order
///
/// Patterns shorter than two notes have no chunks; they get a neutral
/// `1.0` per note instead.
pub fn memory_weights(pattern: &Pattern, base: f64) -> Vec<f64> {
    if pattern.len() < 2 {
        return vec![1.0; pattern.len()];
    }

    let mut stack = MemoryStack::new();
    pattern
        .chunks()
        .map(|chunk| weight_for_depth(stack.push(chunk), base))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::constants::FATIGUE_BASE;

    fn weights(s: &str) -> Vec<f64> {
        memory_weights(&s.parse().unwrap(), FATIGUE_BASE)
    }

    #[test]
    fn test_short_patterns() {
        assert_eq!(weights(""), Vec::<f64>::new());
        assert_eq!(weights("o"), vec![1.0]);
        assert_eq!(weights("ox"), vec![1.0]);
    }

    #[test]
    fn test_single_chunk_repeated_stays_flat() {
        assert_eq!(weights("oooooooo"), vec![1.0; 4]);
    }

    #[test]
    fn test_alternating_chunks_settle() {
        // oo, xx, oo, xx: each repeat collapses back to depth 2
        assert_eq!(weights("ooxxooxxooxxooxx"), vec![1.0, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5, 1.5]);
    }

    #[test]
    fn test_distinct_chunks_grow() {
        // oo, xx, ox, xo are pairwise distinct
        assert_eq!(weights("ooxxoxxo"), vec![1.0, 1.5, 2.25, 3.375]);
    }

    #[test]
    fn test_collapse_keeps_chunks_since_repeat() {
        let chunk = |s: &str| -> Chunk {
            let p: Pattern = s.parse().unwrap();
            [p.notes()[0], p.notes()[1]]
        };

        let mut stack = MemoryStack::new();
        assert_eq!(stack.push(chunk("oo")), 1);
        assert_eq!(stack.push(chunk("xx")), 2);
        assert_eq!(stack.push(chunk("ox")), 3);
        // [xx, ox, xx, oo] -> [xx, ox]
        assert_eq!(stack.push(chunk("xx")), 2);
        assert_eq!(stack.push(chunk("oo")), 3);
        assert_eq!(stack.depth(), 3);
    }

    #[test]
    fn test_trailing_note_ignored() {
        assert_eq!(weights("ooxxo"), vec![1.0, 1.5]);
    }
}
