//! Core trait definitions for nucstr.
//!
//! These traits define the contracts that sequence types implement across crates.

/// A nucleotide sequence held as text.
pub trait Sequence {
    /// The sequence text, with whatever casing the caller supplied.
    fn as_str(&self) -> &str;

    /// The raw byte representation of the sequence.
    fn as_bytes(&self) -> &[u8] {
        self.as_str().as_bytes()
    }

    /// Length in symbols.
    fn len(&self) -> usize {
        self.as_str().chars().count()
    }

    /// Whether the sequence is empty.
    fn is_empty(&self) -> bool {
        self.as_str().is_empty()
    }

    /// Whether the two ends of the sequence are logically adjacent.
    fn is_circular(&self) -> bool {
        false
    }
}

impl Sequence for str {
    fn as_str(&self) -> &str {
        self
    }
}

impl Sequence for String {
    fn as_str(&self) -> &str {
        self
    }
}

/// A type that can produce a summary of its contents.
pub trait Summarizable {
    /// A one-line summary suitable for display.
    fn summary(&self) -> String;
}
