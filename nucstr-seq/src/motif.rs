//! IUPAC-aware motif search.
//!
//! A query such as `ARY` is compiled into a regular expression by expanding
//! each symbol through the table's `base2regexp` section (`R` → `[AG]`,
//! `Y` → `[TUC]`, `N` → `.`, ...). Matches are reported left to right without
//! overlap: after a match ending at `q`, scanning resumes at `q`.
//!
//! ```
//! use nucstr_seq::{find_motif, AlphabetTable};
//!
//! let table = AlphabetTable::builtin().unwrap();
//! let spans: Vec<_> = find_motif(&table, "ARY", "AATAGCAGTGTGAAC")
//!     .unwrap()
//!     .map(|m| (m.start, m.end, m.matched))
//!     .collect();
//! assert_eq!(spans[0], (0, 3, "AAT".to_string()));
//! assert_eq!(spans.len(), 4);
//! ```

use log::trace;
use nucstr_core::{NucstrError, Result};
use regex::Regex;

use crate::table::AlphabetTable;
use crate::transform::normalize_case;

/// One occurrence of a motif.
///
/// `start..end` are byte offsets into the uppercased sequence; `matched` is
/// the uppercased text found there.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MatchSpan {
    pub start: usize,
    pub end: usize,
    pub matched: String,
}

impl MatchSpan {
    /// Length of the match.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the match is empty (only possible for an empty query).
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// A compiled IUPAC motif.
#[derive(Debug, Clone)]
pub struct MotifPattern {
    query: String,
    regex: Regex,
}

impl MotifPattern {
    /// Compile an IUPAC query. Case-insensitive.
    ///
    /// # Errors
    ///
    /// Returns [`NucstrError::InvalidPattern`] if a query symbol has no entry
    /// in the table's `base2regexp` section.
    pub fn compile(table: &AlphabetTable, query: &str) -> Result<Self> {
        let query = normalize_case(query);
        let mut pattern = String::with_capacity(query.len() * 4);
        for (i, symbol) in query.chars().enumerate() {
            let fragment = table.regex_fragment(symbol).ok_or_else(|| {
                NucstrError::InvalidPattern(format!(
                    "no IUPAC entry for {symbol:?} at position {i} of {query:?}"
                ))
            })?;
            pattern.push_str(fragment);
        }
        let regex = Regex::new(&pattern)?;
        trace!("Compiled motif {} to /{}/", query, pattern);
        Ok(Self { query, regex })
    }

    /// The uppercased query this pattern was compiled from.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The generated regular expression.
    pub fn as_regex_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Whether the motif occurs anywhere in `sequence`.
    pub fn is_match(&self, sequence: &str) -> bool {
        self.regex.is_match(&normalize_case(sequence))
    }

    /// Lazily scan `sequence` for non-overlapping matches.
    ///
    /// Each call starts a fresh scan.
    pub fn find_iter(&self, sequence: &str) -> MotifMatches {
        MotifMatches::new(self.regex.clone(), sequence)
    }

    /// Like [`find_iter`](Self::find_iter), consuming the pattern.
    pub fn into_matches(self, sequence: &str) -> MotifMatches {
        MotifMatches::new(self.regex, sequence)
    }
}

/// Iterator over the matches of a [`MotifPattern`].
#[derive(Debug, Clone)]
pub struct MotifMatches {
    regex: Regex,
    haystack: String,
    pos: usize,
}

impl MotifMatches {
    fn new(regex: Regex, sequence: &str) -> Self {
        Self {
            regex,
            haystack: normalize_case(sequence),
            pos: 0,
        }
    }
}

impl Iterator for MotifMatches {
    type Item = MatchSpan;

    fn next(&mut self) -> Option<MatchSpan> {
        if self.pos > self.haystack.len() {
            return None;
        }
        let m = self.regex.find_at(&self.haystack, self.pos)?;
        self.pos = if m.start() == m.end() {
            // Step past the empty match so the scan makes progress.
            self.haystack[m.end()..]
                .chars()
                .next()
                .map_or(m.end() + 1, |c| m.end() + c.len_utf8())
        } else {
            m.end()
        };
        Some(MatchSpan {
            start: m.start(),
            end: m.end(),
            matched: m.as_str().to_string(),
        })
    }
}

impl std::iter::FusedIterator for MotifMatches {}

/// Find occurrences of an IUPAC `query` in `sequence`.
///
/// Both inputs are uppercased before matching. An empty sequence yields no
/// matches.
pub fn find_motif(table: &AlphabetTable, query: &str, sequence: &str) -> Result<MotifMatches> {
    Ok(MotifPattern::compile(table, query)?.into_matches(sequence))
}

/// Find occurrences of a named PAM (e.g. `"SpCas9"` → `NGG`) in `sequence`.
///
/// # Errors
///
/// Returns [`NucstrError::InvalidInput`] if the table has no PAM by that name.
pub fn find_pam_sites(table: &AlphabetTable, pam: &str, sequence: &str) -> Result<MotifMatches> {
    let motif = table
        .pam(pam)
        .ok_or_else(|| NucstrError::InvalidInput(format!("unknown PAM {pam:?}")))?;
    find_motif(table, motif, sequence)
}
