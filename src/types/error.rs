//! Error types for treedrift

use super::Side;
use thiserror::Error;

/// Error types for treedrift operations
#[derive(Debug, Error)]
pub enum DriftError {
    /// Standard IO error (automatically converted via #[from])
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A positional argument is neither an existing local path nor a
    /// plausible `user@host:path` remote specifier
    #[error("Incorrect path: {0}")]
    InvalidSource(String),

    /// The external traversal command exited non-zero
    #[error("Traversal command failed with {status}: {command}")]
    Traversal { command: String, status: String },

    /// A traversal output line did not split into the six expected fields
    #[error("Malformed traversal record ({fields} fields, expected 6): {line:?}")]
    MalformedRecord { line: String, fields: usize },

    /// A side was loaded into the store twice
    #[error("Side {0} is already loaded")]
    SideAlreadyLoaded(Side),

    /// A query touched a side that was never loaded
    #[error("Side {0} is not loaded")]
    SideNotLoaded(Side),
}

impl DriftError {
    /// Check if this error means the user gave us a bad source specifier
    pub fn is_usage_error(&self) -> bool {
        matches!(self, DriftError::InvalidSource(_))
    }

    /// Check if this error came from the external traversal (spawn or exit)
    pub fn is_traversal_error(&self) -> bool {
        matches!(self, DriftError::Traversal { .. } | DriftError::Io(_))
    }
}
