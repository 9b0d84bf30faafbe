//! Error types for fixture I/O.
//!
//! Fixture loading is the one fatal precondition of a verification run:
//! every variant here aborts before any comparison happens.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or writing a fixture document.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// The fixture file could not be read.
    #[error("failed to read fixture {path}: {source}")]
    Read {
        /// Path that was being read
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The fixture file could not be written.
    #[error("failed to write fixture {path}: {source}")]
    Write {
        /// Path that was being written
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The fixture document is not valid JSON or does not match the schema.
    #[error("malformed fixture {path}: {source}")]
    Parse {
        /// Path of the malformed document
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// The in-memory fixture could not be serialized.
    #[error("failed to serialize fixture: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_carry_path() {
        let err = FixtureError::Read {
            path: PathBuf::from("missing.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        let msg = err.to_string();
        assert!(msg.contains("missing.json"));
        assert!(msg.contains("no such file"));
    }
}
