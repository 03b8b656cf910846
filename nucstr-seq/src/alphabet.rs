//! Nucleotide alphabets.
//!
//! The symbol sets themselves live in the [`AlphabetTable`](crate::table::AlphabetTable);
//! [`Alphabet`] only names which set to check against.

use std::fmt;

/// A nucleotide alphabet known to the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Alphabet {
    /// IUPAC DNA: `ACGTNRYSWKMBDHV` in the shipped table.
    Dna,
    /// IUPAC RNA: `ACGUNRYSWKMBDHV` in the shipped table.
    Rna,
}

impl Alphabet {
    /// Human-readable name, matching the key in the table's `alphabet` section.
    pub const fn name(self) -> &'static str {
        match self {
            Alphabet::Dna => "DNA",
            Alphabet::Rna => "RNA",
        }
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
