//! Error types for the certificate store auditor.
//!
//! Collaborator failures (external commands, the policy file) surface here;
//! policy violations are ordinary values, see [`crate::policy::Verdict`].

use std::io;
use thiserror::Error;

/// Result type alias using [`AuditError`] as the error type.
pub type Result<T> = std::result::Result<T, AuditError>;

/// Top-level error type for all auditor operations.
#[derive(Debug, Error)]
pub enum AuditError {
    /// External tool could not be spawned
    #[error("Failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    /// External tool exited with a nonzero status
    #[error("Command `{command}` failed: {stderr}")]
    CommandFailed { command: String, stderr: String },

    /// Policy file could not be opened
    #[error("Failed to open policy file {path}: {source}")]
    PolicyFile {
        path: String,
        #[source]
        source: io::Error,
    },

    /// Policy file row could not be decoded
    #[error("Invalid policy row: {0}")]
    PolicyFormat(#[from] csv::Error),
}
