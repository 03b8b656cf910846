//! Circular sequences with wraparound slicing.
//!
//! A [`CircularSeq`] models a plasmid or bacterial chromosome: position
//! `len - 1` is adjacent to position `0`, so a window may run off the end and
//! continue from the start.
//!
//! Range slicing wraps; scalar indexing ([`CircularSeq::get`]) does not.
//!
//! ```
//! use nucstr_seq::CircularSeq;
//!
//! let plasmid = CircularSeq::new("ATCG");
//! assert_eq!(plasmid.slice(None, Some(3)), "ATC");
//! assert_eq!(plasmid.slice(Some(-1), Some(3)), "GATC");
//! assert_eq!(plasmid.slice(Some(2), Some(6)), "CGAT");
//! ```
//!
//! # Limitations
//!
//! Wraparound is only guaranteed when the window is no longer than the
//! sequence (`stop - start <= len`). Longer windows return whatever the
//! rotate-and-double construction yields and must not be relied on.

use std::fmt;

use nucstr_core::{NucstrError, Result, Sequence, Summarizable};

/// A nucleotide sequence whose ends are joined.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct CircularSeq {
    text: String,
}

impl CircularSeq {
    /// Wrap sequence text. Casing is kept as given.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Consume the sequence and return the inner text.
    pub fn into_string(self) -> String {
        self.text
    }

    /// Slice `[start, stop)` with wraparound.
    ///
    /// `start` defaults to 0 and `stop` to the sequence length. A negative
    /// `start` counts from the end, as with ordinary slices. The window is
    /// read from `x[start..] + x`, so it continues from the beginning when it
    /// crosses the end. The result is plain text.
    pub fn slice(&self, start: Option<isize>, stop: Option<isize>) -> String {
        self.window(start, stop).into_iter().collect()
    }

    /// Like [`slice`](Self::slice), then keep every `step`-th symbol of the
    /// window. A negative step walks the window backward.
    ///
    /// # Errors
    ///
    /// Returns [`NucstrError::InvalidInput`] if `step` is zero.
    pub fn slice_step(&self, start: Option<isize>, stop: Option<isize>, step: isize) -> Result<String> {
        check_step(step)?;
        let window = self.window(start, stop);
        Ok(ordinary_slice(&window, None, None, step).into_iter().collect())
    }

    /// Symbol at `index` without wraparound.
    ///
    /// Negative indices count from the end; anything outside `-len..len`
    /// is `None`.
    pub fn get(&self, index: isize) -> Option<char> {
        get_symbol(&self.text, index)
    }

    fn window(&self, start: Option<isize>, stop: Option<isize>) -> Vec<char> {
        let symbols: Vec<char> = self.text.chars().collect();
        let start = start.unwrap_or(0);
        let stop = stop.unwrap_or(symbols.len() as isize);

        let mut doubled = ordinary_slice(&symbols, Some(start), None, 1);
        doubled.extend_from_slice(&symbols);

        // Measured on the raw start, so a negative start widens the window.
        ordinary_slice(&doubled, None, Some(stop - start), 1)
    }
}

impl Sequence for CircularSeq {
    fn as_str(&self) -> &str {
        &self.text
    }

    fn is_circular(&self) -> bool {
        true
    }
}

impl Summarizable for CircularSeq {
    fn summary(&self) -> String {
        let len = Sequence::len(self);
        let preview: String = self.text.chars().take(20).collect();
        if len > 20 {
            format!("circular sequence ({} bp): {}...", len, preview)
        } else {
            format!("circular sequence ({} bp): {}", len, preview)
        }
    }
}

impl fmt::Display for CircularSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<String> for CircularSeq {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl From<&str> for CircularSeq {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

pub(crate) fn check_step(step: isize) -> Result<()> {
    if step == 0 {
        return Err(NucstrError::InvalidInput("slice step cannot be zero".into()));
    }
    Ok(())
}

pub(crate) fn get_symbol(text: &str, index: isize) -> Option<char> {
    let len = text.chars().count() as isize;
    let index = if index < 0 { index + len } else { index };
    if index < 0 || index >= len {
        return None;
    }
    text.chars().nth(index as usize)
}

/// Ordinary (non-wrapping) slice with clamped, end-relative bounds.
///
/// Follows the usual half-open slice rules: negative bounds count from the
/// end, out-of-range bounds clamp, and a negative `step` defaults the bounds
/// to walk from the last symbol toward the first. `step` must be non-zero.
pub(crate) fn ordinary_slice<T: Copy>(
    items: &[T],
    start: Option<isize>,
    stop: Option<isize>,
    step: isize,
) -> Vec<T> {
    debug_assert!(step != 0);
    let len = items.len() as isize;

    let clamp = |bound: isize, lower: isize, upper: isize| {
        let bound = if bound < 0 { bound + len } else { bound };
        bound.clamp(lower, upper)
    };

    let mut out = Vec::new();
    if step > 0 {
        let start = start.map_or(0, |s| clamp(s, 0, len));
        let stop = stop.map_or(len, |s| clamp(s, 0, len));
        let mut i = start;
        while i < stop {
            out.push(items[i as usize]);
            i += step;
        }
    } else {
        let start = start.map_or(len - 1, |s| clamp(s, -1, len - 1));
        let stop = stop.map_or(-1, |s| clamp(s, -1, len - 1));
        let mut i = start;
        while i > stop {
            out.push(items[i as usize]);
            i += step;
        }
    }
    out
}
