//! Shared primitives for the nucstr nucleotide toolkit.
//!
//! `nucstr-core` provides the pieces every nucstr crate builds on:
//!
//! - **Error types**: [`NucstrError`] and [`Result`] for structured error handling
//! - **Traits**: the [`Sequence`] abstraction over nucleotide text

pub mod error;
pub mod traits;

pub use error::{NucstrError, Result};
pub use traits::*;
