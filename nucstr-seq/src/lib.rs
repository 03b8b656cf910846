//! Nucleotide strings: circular slicing, transforms, motif search and
//! sequence comparison.
//!
//! Everything here is a pure function over `&str`. The only shared state is
//! the [`AlphabetTable`], built once and passed by reference:
//!
//! - **Table**: [`AlphabetTable`] with complements, IUPAC regex fragments,
//!   restriction sites, alphabets and PAMs, loaded from YAML
//! - **Sequences**: [`NucSeq`] (linear or circular) and [`CircularSeq`]
//!   with wraparound slicing
//! - **Transforms**: [`reverse`], [`complement`], [`reverse_complement`],
//!   [`to_rna`], [`to_dna`]
//! - **Search**: [`find_motif`] for IUPAC motifs, [`which_re_sites`] for
//!   Type IIS restriction sites
//! - **Metrics**: [`levenshtein`], [`hamming`], [`ratcliff_obershelp`],
//!   [`correlation`], [`gc_content`] and friends
//!
//! # Example
//!
//! ```
//! use nucstr_seq::{
//!     correlation, levenshtein, reverse_complement, which_re_sites, AlphabetTable, CircularSeq,
//! };
//!
//! let table = AlphabetTable::builtin().unwrap();
//!
//! // Mixed case survives the transform
//! assert_eq!(reverse_complement(&table, "ATCg"), "cGAT");
//!
//! // Windows wrap around the origin of a plasmid
//! let plasmid = CircularSeq::new("ATCG");
//! assert_eq!(plasmid.slice(Some(-1), Some(3)), "GATC");
//!
//! assert_eq!(levenshtein("AAATTT", "ACTTT"), 2);
//! assert_eq!(which_re_sites(&table, "AAAGAAGACACCTGC"), ["BbsI", "PaqCI"]);
//! assert_eq!(correlation(&table, "AAA", Some("AAA"), false), 0.0);
//! ```

pub mod alphabet;
pub mod circular;
pub mod composition;
pub mod distance;
pub mod matcher;
pub mod motif;
pub mod restriction;
pub mod sequence;
pub mod table;
pub mod transform;

pub use alphabet::Alphabet;
pub use circular::CircularSeq;
pub use composition::{gc_content, purine_content, pyrimidine_content};
pub use distance::{correlation, hamming, levenshtein, ratcliff_obershelp};
pub use matcher::{similarity_ratio, Block, OpTag, Opcode, SequenceMatcher};
pub use motif::{find_motif, find_pam_sites, MatchSpan, MotifMatches, MotifPattern};
pub use restriction::{count_re_sites, which_re_sites};
pub use sequence::NucSeq;
pub use table::{AlphabetTable, TABLE_ENV_VAR};
pub use transform::{complement, reverse, reverse_complement, to_dna, to_rna};
