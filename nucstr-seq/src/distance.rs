//! Distances and similarities between sequences.
//!
//! All metrics uppercase their inputs first, so `acgt` and `ACGT` compare equal.
//!
//! - [`levenshtein`]: single-symbol insertions, deletions and substitutions
//! - [`hamming`]: positional mismatches over the shorter length
//! - [`ratcliff_obershelp`]: grouped edits from block matching
//! - [`correlation`]: complementarity across sliding offsets, optionally
//!   counting wobble pairs as matches

use crate::matcher::{OpTag, SequenceMatcher};
use crate::table::AlphabetTable;
use crate::transform::{normalize_case, reverse_complement};

/// Levenshtein distance: the number of insertions, deletions and
/// substitutions needed to turn `x` into `y`.
///
/// Fills the full `(|x| + 1) × (|y| + 1)` cost matrix.
pub fn levenshtein(x: &str, y: &str) -> usize {
    let x: Vec<char> = normalize_case(x).chars().collect();
    let y: Vec<char> = normalize_case(y).chars().collect();
    let (x_len, y_len) = (x.len(), y.len());

    let mut matrix = vec![vec![0usize; y_len + 1]; x_len + 1];
    for (i, row) in matrix.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in matrix[0].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..=x_len {
        for j in 1..=y_len {
            matrix[i][j] = if x[i - 1] == y[j - 1] {
                matrix[i - 1][j - 1]
            } else {
                1 + matrix[i - 1][j]
                    .min(matrix[i][j - 1])
                    .min(matrix[i - 1][j - 1])
            };
        }
    }
    matrix[x_len][y_len]
}

/// Hamming distance: positions where `x` and `y` differ.
///
/// Unlike the textbook definition this does not require equal lengths: the
/// longer sequence is truncated to the length of the shorter one, and its
/// trailing symbols are ignored.
pub fn hamming(x: &str, y: &str) -> usize {
    let (x, y) = (normalize_case(x), normalize_case(y));
    x.chars().zip(y.chars()).filter(|(a, b)| a != b).count()
}

/// Ratcliff-Obershelp distance: the number of grouped insertions, deletions
/// and substitutions needed to make `x` match `y`.
///
/// A run of adjacent edits counts once, so this is coarser than
/// [`levenshtein`].
pub fn ratcliff_obershelp(x: &str, y: &str) -> usize {
    SequenceMatcher::new(&normalize_case(x), &normalize_case(y))
        .opcodes()
        .iter()
        .filter(|op| op.tag != OpTag::Equal)
        .count()
}

/// Whether `a` opposite `b` is a tolerated wobble pair (G·A, or T/U·C in the
/// reverse-complemented frame).
fn is_wobble(a: char, b: char) -> bool {
    (a == 'G' && b == 'A') || (matches!(a, 'T' | 'U') && b == 'C')
}

/// Mismatches between `x` and `y` over their common length, not counting
/// wobble pairs when `wobble` is set.
fn mismatches(x: &[char], y: &[char], wobble: bool) -> usize {
    x.iter()
        .zip(y)
        .filter(|&(&a, &b)| a != b && !(wobble && is_wobble(a, b)))
        .count()
}

/// Autocorrelation of `x`, or correlation of `x` with `y`.
///
/// Without `y` (or with an empty `y`), `x` is compared against its own
/// reverse complement, which hints at secondary structure. With `y`, `x` is
/// compared against the reverse complement of `y`, which hints at binding
/// affinity.
///
/// For each offset `n` in `0..|x|`, `x[n..]` is laid against the reverse
/// complement and scores `(overlap - mismatches) / overlap`, where
/// `overlap = min(|x|, |y|) - n`. The scores are summed. Offsets where the
/// overlap is not positive contribute 0. With `wobble`, G·U (and G·T) pairs
/// count as matches.
///
/// ```
/// use nucstr_seq::{correlation, AlphabetTable};
///
/// let table = AlphabetTable::builtin().unwrap();
/// assert!((correlation(&table, "AAATTT", None, false) - 2.3).abs() < 1e-9);
/// assert_eq!(correlation(&table, "AAA", Some("TTT"), false), 3.0);
/// assert_eq!(correlation(&table, "GGG", Some("UUU"), true), 3.0);
/// ```
pub fn correlation(table: &AlphabetTable, x: &str, y: Option<&str>, wobble: bool) -> f64 {
    let x = normalize_case(x);
    let partner = match y {
        Some(y) if !y.is_empty() => normalize_case(y),
        _ => x.clone(),
    };
    let x: Vec<char> = x.chars().collect();
    let y: Vec<char> = reverse_complement(table, &partner).chars().collect();
    let max_len = x.len().min(y.len());

    (0..x.len())
        .map(|n| {
            if n >= max_len {
                return 0.0;
            }
            let overlap = (max_len - n) as f64;
            let mismatched = mismatches(&x[n..], &y, wobble) as f64;
            (overlap - mismatched) / overlap
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> AlphabetTable {
        AlphabetTable::builtin().unwrap()
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn levenshtein_known_values() {
        assert_eq!(levenshtein("AAATTT", "AAATTT"), 0);
        assert_eq!(levenshtein("AAATTT", "ACTTT"), 2);
        assert_eq!(levenshtein("AAATTT", "AACTTT"), 1);
        assert_eq!(levenshtein("AAAG", "TCGA"), 4);
    }

    #[test]
    fn levenshtein_empty_and_case() {
        assert_eq!(levenshtein("", "ACG"), 3);
        assert_eq!(levenshtein("ACG", ""), 3);
        assert_eq!(levenshtein("", ""), 0);
        assert_eq!(levenshtein("acgt", "ACGT"), 0);
    }

    #[test]
    fn hamming_known_values() {
        assert_eq!(hamming("AAA", "ATA"), 1);
        assert_eq!(hamming("AAA", "ATT"), 2);
        assert_eq!(hamming("AAA", "TTT"), 3);
        assert_eq!(hamming("aaa", "AAA"), 0);
    }

    #[test]
    fn hamming_truncates_to_shorter() {
        assert_eq!(hamming("AAAGGG", "ATA"), 1);
        assert_eq!(hamming("ATA", "AAAGGG"), 1);
        assert_eq!(hamming("", "ACGT"), 0);
    }

    #[test]
    fn ratcliff_obershelp_known_values() {
        assert_eq!(ratcliff_obershelp("AAATTT", "AAATTT"), 0);
        assert_eq!(ratcliff_obershelp("AAATTT", "ACTTT"), 1);
        assert_eq!(ratcliff_obershelp("AAATTT", "AACTTT"), 1);
        assert_eq!(ratcliff_obershelp("AAAG", "TCGA"), 2);
        assert_eq!(ratcliff_obershelp("aaatTT", "AAATTT"), 0);
    }

    #[test]
    fn correlation_self() {
        let t = table();
        assert_eq!(correlation(&t, "AACC", None, false), 0.0);
        assert!(approx(correlation(&t, "AAATTT", None, false), 2.3));
        assert!(approx(correlation(&t, "AAATTCT", None, false), 1.3047619047619046));
        assert!(approx(correlation(&t, "AAACTTT", None, false), 1.9238095238095236));
    }

    #[test]
    fn correlation_pairs() {
        let t = table();
        assert!(approx(correlation(&t, "AAA", Some("TTT"), false), 3.0));
        assert_eq!(correlation(&t, "AAA", Some("AAA"), false), 0.0);
        assert_eq!(correlation(&t, "AAATTT", Some(""), false), correlation(&t, "AAATTT", None, false));
    }

    #[test]
    fn correlation_wobble() {
        let t = table();
        assert_eq!(correlation(&t, "GGGTTT", None, false), 0.0);
        assert!(approx(correlation(&t, "GGGTTT", None, true), 2.3));
        assert!(approx(correlation(&t, "GGGUUU", None, true), 2.3));
        assert_eq!(correlation(&t, "GGG", Some("UUU"), false), 0.0);
        assert!(approx(correlation(&t, "GGG", Some("UUU"), true), 3.0));
    }

    #[test]
    fn correlation_is_case_insensitive() {
        let t = table();
        assert!(approx(correlation(&t, "aaattt", None, false), 2.3));
    }

    #[test]
    fn correlation_guards_short_partner() {
        let t = table();
        // Offsets past the partner's length contribute nothing.
        let score = correlation(&t, "AAAAA", Some("TT"), false);
        assert!(score.is_finite());
        assert!(approx(score, 2.0));
        assert_eq!(correlation(&t, "", None, false), 0.0);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn dna(max_len: usize) -> impl Strategy<Value = String> {
        proptest::collection::vec(
            prop_oneof![Just('A'), Just('C'), Just('G'), Just('T')],
            0..=max_len,
        )
        .prop_map(|v| v.into_iter().collect())
    }

    proptest! {
        #[test]
        fn levenshtein_identity(x in dna(30)) {
            prop_assert_eq!(levenshtein(&x, &x), 0);
        }

        #[test]
        fn levenshtein_symmetric(x in dna(20), y in dna(20)) {
            prop_assert_eq!(levenshtein(&x, &y), levenshtein(&y, &x));
        }

        #[test]
        fn hamming_symmetric(x in dna(30), y in dna(30)) {
            prop_assert_eq!(hamming(&x, &y), hamming(&y, &x));
        }

        #[test]
        fn ratcliff_obershelp_identity(x in dna(30)) {
            prop_assert_eq!(ratcliff_obershelp(&x, &x), 0);
        }
    }
}
