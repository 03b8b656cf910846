//! Type IIS restriction site detection.
//!
//! Enzymes and their recognition sites come from the table's `type_iis_re`
//! section. The shipped table holds the usual Golden Gate enzymes:
//!
//! | enzyme | site    |
//! |--------|---------|
//! | BbsI   | GAAGAC  |
//! | BsmBI  | CGTCTC  |
//! | BtgZI  | GCGATG  |
//! | PaqCI  | CACCTGC |
//! | SapI   | GCTCTTC |
//! | BsaI   | GGTCTC  |

use crate::table::AlphabetTable;
use crate::transform::{normalize_case, reverse_complement};

/// List the enzymes whose site, or the site's reverse complement, occurs in `x`.
///
/// Names are returned in table order. Matching is literal and case-insensitive.
pub fn which_re_sites<'t>(table: &'t AlphabetTable, x: &str) -> Vec<&'t str> {
    let x = normalize_case(x);
    table
        .re_sites()
        .filter(|(_, site)| x.contains(site) || x.contains(&reverse_complement(table, site)))
        .map(|(name, _)| name)
        .collect()
}

/// Count the enzymes that have a site in `x`.
pub fn count_re_sites(table: &AlphabetTable, x: &str) -> usize {
    which_re_sites(table, x).len()
}
