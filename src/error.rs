//! Error types for loading and querying a roster.

use std::path::PathBuf;
use thiserror::Error;

/// Why a roster source could not be turned into records.
///
/// Every variant is recoverable: [`crate::loader::load_or_sample`] answers all
/// of them with the built-in sample roster.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("student marks file not found: {}", .path.display())]
    SourceMissing { path: PathBuf },

    #[error("student marks source contains no records")]
    SourceEmpty,

    #[error("malformed student marks source at line {line}: {reason}")]
    SourceMalformed { line: usize, reason: String },
}

impl LoadError {
    /// Short stable label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            LoadError::SourceMissing { .. } => "source_missing",
            LoadError::SourceEmpty => "source_empty",
            LoadError::SourceMalformed { .. } => "source_malformed",
        }
    }

    pub(crate) fn malformed(line: usize, reason: impl Into<String>) -> Self {
        LoadError::SourceMalformed {
            line,
            reason: reason.into(),
        }
    }
}

/// A single comma-separated record that could not become a [`crate::record::StudentRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("expected at least 6 fields, found {found}")]
    TooFewFields { found: usize },

    #[error("{field} is not an integer: {value:?}")]
    InvalidScore { field: &'static str, value: String },
}

/// An aggregate query was issued against a roster with no records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no student records available")]
pub struct EmptyRoster;
