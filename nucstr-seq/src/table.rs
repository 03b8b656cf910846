//! The alphabet table: complements, IUPAC regex fragments, restriction
//! sites, alphabets and PAM motifs.
//!
//! The table is read once from a YAML resource and is immutable afterwards.
//! It is `Send + Sync`, so one instance can be shared by reference across
//! threads. Nothing in this crate holds a global copy; every function that
//! needs lookups takes `&AlphabetTable`.
//!
//! ```
//! use nucstr_seq::{AlphabetTable, Alphabet};
//!
//! let table = AlphabetTable::builtin().unwrap();
//! assert_eq!(table.complement_of('A'), 'T');
//! assert!(table.is_valid(Alphabet::Dna, "acgtn"));
//! ```

use std::collections::HashMap;
use std::path::Path;

use indexmap::IndexMap;
use log::debug;
use nucstr_core::{NucstrError, Result};
use serde::Deserialize;

use crate::alphabet::Alphabet;

/// Environment variable naming a table file to use instead of the builtin one.
pub const TABLE_ENV_VAR: &str = "NUCSTR_TABLE";

const BUILTIN_TABLE: &str = include_str!("../data/sequences.yml");

#[derive(Debug, Deserialize)]
struct RawTable {
    complement: IndexMap<String, String>,
    type_iis_re: IndexMap<String, String>,
    alphabet: RawAlphabets,
    base2regexp: IndexMap<String, String>,
    #[serde(rename = "PAMs", default)]
    pams: IndexMap<String, String>,
}

#[derive(Debug, Deserialize)]
struct RawAlphabets {
    #[serde(rename = "DNA")]
    dna: String,
    #[serde(rename = "RNA")]
    rna: String,
}

/// Immutable lookup tables shared by every sequence operation.
#[derive(Debug, Clone)]
pub struct AlphabetTable {
    complement: HashMap<char, char>,
    re_sites: IndexMap<String, String>,
    dna: String,
    rna: String,
    base2regex: HashMap<char, String>,
    pams: IndexMap<String, String>,
}

impl AlphabetTable {
    /// Parse a table from YAML text.
    ///
    /// # Errors
    ///
    /// Returns [`NucstrError::Parse`] if a required section is missing, or a
    /// `complement`/`base2regexp` entry is not a single symbol.
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let raw: RawTable = serde_yaml::from_str(text)?;

        let mut complement = HashMap::with_capacity(raw.complement.len());
        for (from, to) in &raw.complement {
            complement.insert(
                single_symbol(from, "complement")?,
                single_symbol(to, "complement")?,
            );
        }

        let mut base2regex = HashMap::with_capacity(raw.base2regexp.len());
        for (base, fragment) in &raw.base2regexp {
            base2regex.insert(single_symbol(base, "base2regexp")?, fragment.to_uppercase());
        }

        let re_sites = raw
            .type_iis_re
            .into_iter()
            .map(|(name, site)| (name, site.to_uppercase()))
            .collect();
        let pams = raw
            .pams
            .into_iter()
            .map(|(name, motif)| (name, motif.to_uppercase()))
            .collect();

        Ok(Self {
            complement,
            re_sites,
            dna: raw.alphabet.dna.to_uppercase(),
            rna: raw.alphabet.rna.to_uppercase(),
            base2regex,
            pams,
        })
    }

    /// Read and parse a table file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            NucstrError::Io(std::io::Error::new(
                e.kind(),
                format!("{}: {}", path.display(), e),
            ))
        })?;
        let table = Self::from_yaml_str(&text)?;
        debug!("Loaded alphabet table from {}: {}", path.display(), table.describe());
        Ok(table)
    }

    /// The table shipped with the crate.
    pub fn builtin() -> Result<Self> {
        let table = Self::from_yaml_str(BUILTIN_TABLE)?;
        debug!("Loaded builtin alphabet table: {}", table.describe());
        Ok(table)
    }

    /// Load the file named by [`TABLE_ENV_VAR`] if it is set, otherwise the
    /// builtin table.
    pub fn from_env() -> Result<Self> {
        match std::env::var_os(TABLE_ENV_VAR) {
            Some(path) if !path.is_empty() => Self::load(path),
            _ => Self::builtin(),
        }
    }

    /// Complement of an uppercase symbol. Unknown symbols map to themselves.
    pub fn complement_of(&self, symbol: char) -> char {
        self.complement.get(&symbol).copied().unwrap_or(symbol)
    }

    /// Regex fragment for an uppercase IUPAC symbol.
    pub fn regex_fragment(&self, symbol: char) -> Option<&str> {
        self.base2regex.get(&symbol).map(String::as_str)
    }

    /// Restriction enzymes and their uppercase recognition sites, in table order.
    pub fn re_sites(&self) -> impl Iterator<Item = (&str, &str)> {
        self.re_sites.iter().map(|(n, s)| (n.as_str(), s.as_str()))
    }

    /// PAM names and their uppercase IUPAC motifs, in table order.
    pub fn pams(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pams.iter().map(|(n, m)| (n.as_str(), m.as_str()))
    }

    /// Look up a PAM motif by name.
    pub fn pam(&self, name: &str) -> Option<&str> {
        self.pams.get(name).map(String::as_str)
    }

    /// The uppercase symbol set of an alphabet.
    pub fn alphabet(&self, alphabet: Alphabet) -> &str {
        match alphabet {
            Alphabet::Dna => &self.dna,
            Alphabet::Rna => &self.rna,
        }
    }

    /// Whether every symbol of `x` (case-insensitive) belongs to `alphabet`.
    pub fn is_valid(&self, alphabet: Alphabet, x: &str) -> bool {
        let symbols = self.alphabet(alphabet);
        x.chars()
            .flat_map(char::to_uppercase)
            .all(|c| symbols.contains(c))
    }

    /// The first alphabet (DNA, then RNA) that accepts all of `x`.
    pub fn infer_alphabet(&self, x: &str) -> Option<Alphabet> {
        [Alphabet::Dna, Alphabet::Rna]
            .into_iter()
            .find(|&a| self.is_valid(a, x))
    }

    fn describe(&self) -> String {
        format!(
            "{} complement pairs, {} regex codes, {} restriction sites, {} PAMs",
            self.complement.len(),
            self.base2regex.len(),
            self.re_sites.len(),
            self.pams.len()
        )
    }
}

fn single_symbol(key: &str, section: &str) -> Result<char> {
    let mut chars = key.trim().chars().flat_map(char::to_uppercase);
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(NucstrError::Parse(format!(
            "{section}: expected a single symbol, got {key:?}"
        ))),
    }
}
