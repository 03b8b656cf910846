//! Ratcliff-Obershelp block matching.
//!
//! [`SequenceMatcher`] finds the longest contiguous block shared by two
//! sequences, then recurses on the unmatched stretches to its left and right.
//! The resulting matching blocks are turned into [`Opcode`]s: runs of
//! `Equal`, `Replace`, `Delete` and `Insert` that transform `a` into `b`.
//!
//! No junk heuristic is applied; every symbol takes part in matching.
//! Comparison is exact, so callers that want case-insensitivity should
//! normalize first (as [`similarity_ratio`] and
//! [`ratcliff_obershelp`](crate::distance::ratcliff_obershelp) do).

use std::collections::HashMap;

use crate::transform::normalize_case;

/// A matching block: `a[a..a + size] == b[b..b + size]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Block {
    pub a: usize,
    pub b: usize,
    pub size: usize,
}

/// Kind of edit group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpTag {
    Equal,
    Replace,
    Delete,
    Insert,
}

/// One edit group: `a[a_start..a_end]` becomes `b[b_start..b_end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Opcode {
    pub tag: OpTag,
    pub a_start: usize,
    pub a_end: usize,
    pub b_start: usize,
    pub b_end: usize,
}

/// Block matcher over two symbol sequences.
#[derive(Debug, Clone)]
pub struct SequenceMatcher {
    a: Vec<char>,
    b: Vec<char>,
    /// Positions of every symbol of `b`, ascending.
    b2j: HashMap<char, Vec<usize>>,
}

impl SequenceMatcher {
    pub fn new(a: &str, b: &str) -> Self {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        let mut b2j: HashMap<char, Vec<usize>> = HashMap::new();
        for (j, &symbol) in b.iter().enumerate() {
            b2j.entry(symbol).or_default().push(j);
        }
        Self { a, b, b2j }
    }

    /// Longest block within `a[alo..ahi]` and `b[blo..bhi]`.
    ///
    /// Ties go to the block starting earliest in `a`, then earliest in `b`.
    /// Returns a block of size 0 at `(alo, blo)` when nothing matches.
    pub fn find_longest_match(&self, alo: usize, ahi: usize, blo: usize, bhi: usize) -> Block {
        let mut best = Block { a: alo, b: blo, size: 0 };
        // Length of the match ending at a[i - 1], b[j], keyed by j.
        let mut j2len: HashMap<usize, usize> = HashMap::new();

        for i in alo..ahi {
            let mut next_j2len = HashMap::new();
            if let Some(positions) = self.b2j.get(&self.a[i]) {
                for &j in positions {
                    if j < blo {
                        continue;
                    }
                    if j >= bhi {
                        break;
                    }
                    let k = j
                        .checked_sub(1)
                        .and_then(|prev| j2len.get(&prev))
                        .copied()
                        .unwrap_or(0)
                        + 1;
                    next_j2len.insert(j, k);
                    if k > best.size {
                        best = Block { a: i + 1 - k, b: j + 1 - k, size: k };
                    }
                }
            }
            j2len = next_j2len;
        }
        best
    }

    /// All matching blocks, ascending, with adjacent blocks merged.
    ///
    /// The list always ends with the sentinel `(len(a), len(b), 0)`.
    pub fn matching_blocks(&self) -> Vec<Block> {
        let (la, lb) = (self.a.len(), self.b.len());
        let mut queue = vec![(0, la, 0, lb)];
        let mut blocks = Vec::new();

        while let Some((alo, ahi, blo, bhi)) = queue.pop() {
            let block = self.find_longest_match(alo, ahi, blo, bhi);
            if block.size == 0 {
                continue;
            }
            blocks.push(block);
            if alo < block.a && blo < block.b {
                queue.push((alo, block.a, blo, block.b));
            }
            if block.a + block.size < ahi && block.b + block.size < bhi {
                queue.push((block.a + block.size, ahi, block.b + block.size, bhi));
            }
        }
        blocks.sort();

        let mut merged: Vec<Block> = Vec::with_capacity(blocks.len() + 1);
        for block in blocks {
            match merged.last_mut() {
                Some(last) if last.a + last.size == block.a && last.b + last.size == block.b => {
                    last.size += block.size;
                }
                _ => merged.push(block),
            }
        }
        merged.push(Block { a: la, b: lb, size: 0 });
        merged
    }

    /// Edit groups turning `a` into `b`, in order.
    pub fn opcodes(&self) -> Vec<Opcode> {
        let (mut i, mut j) = (0, 0);
        let mut codes = Vec::new();

        for block in self.matching_blocks() {
            let tag = match (i < block.a, j < block.b) {
                (true, true) => Some(OpTag::Replace),
                (true, false) => Some(OpTag::Delete),
                (false, true) => Some(OpTag::Insert),
                (false, false) => None,
            };
            if let Some(tag) = tag {
                codes.push(Opcode { tag, a_start: i, a_end: block.a, b_start: j, b_end: block.b });
            }
            i = block.a + block.size;
            j = block.b + block.size;
            if block.size > 0 {
                codes.push(Opcode {
                    tag: OpTag::Equal,
                    a_start: block.a,
                    a_end: i,
                    b_start: block.b,
                    b_end: j,
                });
            }
        }
        codes
    }

    /// Similarity in `[0, 1]`: `2 * matched / (len(a) + len(b))`.
    ///
    /// Two empty sequences are identical (1.0).
    pub fn ratio(&self) -> f64 {
        let total = self.a.len() + self.b.len();
        if total == 0 {
            return 1.0;
        }
        let matched: usize = self.matching_blocks().iter().map(|b| b.size).sum();
        2.0 * matched as f64 / total as f64
    }
}

/// Case-insensitive Ratcliff-Obershelp similarity ratio.
pub fn similarity_ratio(x: &str, y: &str) -> f64 {
    SequenceMatcher::new(&normalize_case(x), &normalize_case(y)).ratio()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(a: &str, b: &str) -> Vec<OpTag> {
        SequenceMatcher::new(a, b).opcodes().iter().map(|op| op.tag).collect()
    }

    #[test]
    fn longest_match_prefers_earliest() {
        let m = SequenceMatcher::new("AAATTT", "ACTTT");
        assert_eq!(m.find_longest_match(0, 6, 0, 5), Block { a: 3, b: 2, size: 3 });
        assert_eq!(m.find_longest_match(0, 3, 0, 2), Block { a: 0, b: 0, size: 1 });
    }

    #[test]
    fn no_match_is_empty_block() {
        let m = SequenceMatcher::new("AAA", "CCC");
        assert_eq!(m.find_longest_match(0, 3, 0, 3), Block { a: 0, b: 0, size: 0 });
    }

    #[test]
    fn matching_blocks_end_with_sentinel() {
        let m = SequenceMatcher::new("AAATTT", "ACTTT");
        assert_eq!(
            m.matching_blocks(),
            vec![
                Block { a: 0, b: 0, size: 1 },
                Block { a: 3, b: 2, size: 3 },
                Block { a: 6, b: 5, size: 0 },
            ]
        );
    }

    #[test]
    fn adjacent_blocks_are_merged() {
        let m = SequenceMatcher::new("ACGT", "ACGT");
        assert_eq!(
            m.matching_blocks(),
            vec![Block { a: 0, b: 0, size: 4 }, Block { a: 4, b: 4, size: 0 }]
        );
    }

    #[test]
    fn opcodes_for_substitution() {
        assert_eq!(tags("AAATTT", "ACTTT"), [OpTag::Equal, OpTag::Replace, OpTag::Equal]);
        let ops = SequenceMatcher::new("AAATTT", "ACTTT").opcodes();
        assert_eq!(
            ops[1],
            Opcode { tag: OpTag::Replace, a_start: 1, a_end: 3, b_start: 1, b_end: 2 }
        );
    }

    #[test]
    fn opcodes_insert_and_delete() {
        assert_eq!(tags("AAAG", "TCGA"), [OpTag::Insert, OpTag::Equal, OpTag::Delete]);
        assert_eq!(tags("", "AC"), [OpTag::Insert]);
        assert_eq!(tags("AC", ""), [OpTag::Delete]);
        assert!(tags("", "").is_empty());
    }

    #[test]
    fn ratio_bounds() {
        assert_eq!(SequenceMatcher::new("ACGT", "ACGT").ratio(), 1.0);
        assert_eq!(SequenceMatcher::new("AAAA", "CCCC").ratio(), 0.0);
        assert_eq!(SequenceMatcher::new("", "").ratio(), 1.0);
        assert!((similarity_ratio("AAATTT", "acttt") - 8.0 / 11.0).abs() < 1e-12);
    }
}
