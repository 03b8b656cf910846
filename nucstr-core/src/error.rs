//! Structured error types for nucstr.

use thiserror::Error;

/// Unified error type for all nucstr operations.
#[derive(Debug, Error)]
pub enum NucstrError {
    /// I/O error (table file not found, permission denied, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error (malformed alphabet table)
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid input (bad arguments, unknown names)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Motif query that cannot be compiled into a pattern
    #[error("invalid pattern: {0}")]
    InvalidPattern(String),
}

impl From<serde_yaml::Error> for NucstrError {
    fn from(err: serde_yaml::Error) -> Self {
        NucstrError::Parse(err.to_string())
    }
}

impl From<regex::Error> for NucstrError {
    fn from(err: regex::Error) -> Self {
        NucstrError::InvalidPattern(err.to_string())
    }
}

/// Convenience alias used throughout nucstr.
pub type Result<T> = std::result::Result<T, NucstrError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_kind() {
        let err = NucstrError::InvalidPattern("no table entry for 'X'".into());
        assert_eq!(err.to_string(), "invalid pattern: no table entry for 'X'");
    }

    #[test]
    fn yaml_errors_become_parse_errors() {
        let yaml_err = serde_yaml::from_str::<Vec<u8>>("{ not: [a list").unwrap_err();
        assert!(matches!(NucstrError::from(yaml_err), NucstrError::Parse(_)));
    }

    #[test]
    fn regex_errors_become_pattern_errors() {
        let regex_err = regex::Regex::new("[AG").unwrap_err();
        assert!(matches!(
            NucstrError::from(regex_err),
            NucstrError::InvalidPattern(_)
        ));
    }
}
