//! Text-level sequence transforms.
//!
//! Every transform here works on plain `&str` and returns a new `String`.
//! [`NucSeq`](crate::sequence::NucSeq) wraps these and re-applies the
//! linear/circular kind of its input.
//!
//! Case handling is two explicit steps: [`normalize_case`] before the
//! transform body, [`restore_case`] after it. [`complement`], [`to_rna`] and
//! [`to_dna`] do both. [`reverse`] does neither and returns the symbols
//! exactly as given.

use crate::table::AlphabetTable;

/// Uppercase a sequence for matching and scoring.
pub fn normalize_case(x: &str) -> String {
    x.to_uppercase()
}

/// Lowercase every position of `transformed` whose counterpart in `original`
/// is lowercase.
///
/// Positions are paired one to one; the result is as long as the shorter of
/// the two inputs.
pub fn restore_case(transformed: &str, original: &str) -> String {
    let mut out = String::with_capacity(transformed.len());
    for (symbol, source) in transformed.chars().zip(original.chars()) {
        if source.is_lowercase() {
            out.extend(symbol.to_lowercase());
        } else {
            out.push(symbol);
        }
    }
    out
}

/// Reverse a sequence. Casing is left untouched.
pub fn reverse(x: &str) -> String {
    x.chars().rev().collect()
}

/// Complement (but don't reverse) a sequence.
///
/// Symbols without a table entry pass through unchanged. Preserves case.
pub fn complement(table: &AlphabetTable, x: &str) -> String {
    let complemented: String = normalize_case(x)
        .chars()
        .map(|c| table.complement_of(c))
        .collect();
    restore_case(&complemented, x)
}

/// Reverse complement a sequence. Preserves case.
///
/// ```
/// use nucstr_seq::{transform::reverse_complement, AlphabetTable};
///
/// let table = AlphabetTable::builtin().unwrap();
/// assert_eq!(reverse_complement(&table, "ATCG"), "CGAT");
/// assert_eq!(reverse_complement(&table, "ATCg"), "cGAT");
/// ```
pub fn reverse_complement(table: &AlphabetTable, x: &str) -> String {
    complement(table, &reverse(x))
}

/// Convert nucleotides to RNA (`T` → `U`). Preserves case.
pub fn to_rna(x: &str) -> String {
    restore_case(&normalize_case(x).replace('T', "U"), x)
}

/// Convert nucleotides to DNA (`U` → `T`). Preserves case.
pub fn to_dna(x: &str) -> String {
    restore_case(&normalize_case(x).replace('U', "T"), x)
}
