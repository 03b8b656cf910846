//! Linear and circular nucleotide sequences behind one interface.
//!
//! [`NucSeq`] is either a plain linear sequence or a [`CircularSeq`]. The
//! transforms return the same variant they were called on, so a reversed
//! plasmid is still a plasmid.

use std::fmt;

use nucstr_core::{Result, Sequence, Summarizable};

use crate::circular::{check_step, get_symbol, ordinary_slice, CircularSeq};
use crate::table::AlphabetTable;
use crate::transform;

/// A nucleotide sequence tagged with its topology.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NucSeq {
    /// Ends are free; slicing clamps at the boundaries.
    Linear(String),
    /// Ends are joined; range slicing wraps around.
    Circular(CircularSeq),
}

impl NucSeq {
    /// A linear sequence.
    pub fn linear(text: impl Into<String>) -> Self {
        NucSeq::Linear(text.into())
    }

    /// A circular sequence.
    pub fn circular(text: impl Into<String>) -> Self {
        NucSeq::Circular(CircularSeq::new(text))
    }

    /// Consume the sequence and return the inner text.
    pub fn into_string(self) -> String {
        match self {
            NucSeq::Linear(text) => text,
            NucSeq::Circular(circ) => circ.into_string(),
        }
    }

    /// Reverse the sequence. Case is not touched.
    pub fn reverse(&self) -> NucSeq {
        self.with_text(transform::reverse(self.as_str()))
    }

    /// Complement the sequence, preserving case.
    pub fn complement(&self, table: &AlphabetTable) -> NucSeq {
        self.with_text(transform::complement(table, self.as_str()))
    }

    /// Reverse complement the sequence, preserving case.
    ///
    /// ```
    /// use nucstr_seq::{AlphabetTable, NucSeq};
    ///
    /// let table = AlphabetTable::builtin().unwrap();
    /// let rc = NucSeq::circular("ATCg").reverse_complement(&table);
    /// assert_eq!(rc, NucSeq::circular("cGAT"));
    /// ```
    pub fn reverse_complement(&self, table: &AlphabetTable) -> NucSeq {
        self.reverse().complement(table)
    }

    /// Convert to RNA (`T` → `U`), preserving case.
    pub fn to_rna(&self) -> NucSeq {
        self.with_text(transform::to_rna(self.as_str()))
    }

    /// Convert to DNA (`U` → `T`), preserving case.
    pub fn to_dna(&self) -> NucSeq {
        self.with_text(transform::to_dna(self.as_str()))
    }

    /// Slice `[start, stop)`: wraps for circular sequences, clamps for linear ones.
    pub fn slice(&self, start: Option<isize>, stop: Option<isize>) -> String {
        match self {
            NucSeq::Linear(text) => {
                let symbols: Vec<char> = text.chars().collect();
                ordinary_slice(&symbols, start, stop, 1).into_iter().collect()
            }
            NucSeq::Circular(circ) => circ.slice(start, stop),
        }
    }

    /// Slice with a step. See [`CircularSeq::slice_step`].
    pub fn slice_step(&self, start: Option<isize>, stop: Option<isize>, step: isize) -> Result<String> {
        match self {
            NucSeq::Linear(text) => {
                check_step(step)?;
                let symbols: Vec<char> = text.chars().collect();
                Ok(ordinary_slice(&symbols, start, stop, step).into_iter().collect())
            }
            NucSeq::Circular(circ) => circ.slice_step(start, stop, step),
        }
    }

    /// Symbol at `index`, negative counting from the end. Never wraps.
    pub fn get(&self, index: isize) -> Option<char> {
        get_symbol(self.as_str(), index)
    }

    fn with_text(&self, text: String) -> NucSeq {
        match self {
            NucSeq::Linear(_) => NucSeq::Linear(text),
            NucSeq::Circular(_) => NucSeq::Circular(CircularSeq::new(text)),
        }
    }
}

impl Sequence for NucSeq {
    fn as_str(&self) -> &str {
        match self {
            NucSeq::Linear(text) => text,
            NucSeq::Circular(circ) => circ.as_str(),
        }
    }

    fn is_circular(&self) -> bool {
        matches!(self, NucSeq::Circular(_))
    }
}

impl Summarizable for NucSeq {
    fn summary(&self) -> String {
        match self {
            NucSeq::Linear(text) => {
                let len = text.chars().count();
                let preview: String = text.chars().take(20).collect();
                let ellipsis = if len > 20 { "..." } else { "" };
                format!("linear sequence ({} bp): {}{}", len, preview, ellipsis)
            }
            NucSeq::Circular(circ) => circ.summary(),
        }
    }
}

impl fmt::Display for NucSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<CircularSeq> for NucSeq {
    fn from(circ: CircularSeq) -> Self {
        NucSeq::Circular(circ)
    }
}

impl From<String> for NucSeq {
    fn from(text: String) -> Self {
        NucSeq::Linear(text)
    }
}

impl From<&str> for NucSeq {
    fn from(text: &str) -> Self {
        NucSeq::Linear(text.to_string())
    }
}
