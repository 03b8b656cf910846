//! Base composition.
//!
//! Each ratio counts the symbols that can resolve to the target bases,
//! including IUPAC ambiguity codes: `S` counts towards GC, `R` towards
//! purines and `Y` towards pyrimidines.

use crate::transform::normalize_case;

const GC: &str = "GCS";
const PURINES: &str = "GAR";
const PYRIMIDINES: &str = "CUTY";

fn content(x: &str, targets: &str) -> f64 {
    let x = normalize_case(x);
    let total = x.chars().count();
    if total == 0 {
        return 0.0;
    }
    let hits = x.chars().filter(|&c| targets.contains(c)).count();
    hits as f64 / total as f64
}

/// Proportion of G, C and S symbols. Returns 0.0 for an empty sequence.
///
/// ```
/// use nucstr_seq::gc_content;
///
/// assert_eq!(gc_content("AGGG"), 0.75);
/// ```
pub fn gc_content(x: &str) -> f64 {
    content(x, GC)
}

/// Proportion of G, A and R symbols. Returns 0.0 for an empty sequence.
pub fn purine_content(x: &str) -> f64 {
    content(x, PURINES)
}

/// Proportion of C, U, T and Y symbols. Returns 0.0 for an empty sequence.
pub fn pyrimidine_content(x: &str) -> f64 {
    content(x, PYRIMIDINES)
}
