//! Persistence error types.
//!
//! All persistence operations return structured errors that provide
//! user-friendly messages and optional remediation hints.

use std::path::PathBuf;
use thiserror::Error;

/// Persistence operation error.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// File I/O error.
    #[error("Failed to {operation} file: {path}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Atomic write failed (temp file couldn't be renamed).
    #[error("Failed to complete save operation")]
    AtomicWriteFailed {
        temp_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Storage key that cannot be mapped to a file name.
    #[error("Invalid storage key: {key:?}")]
    InvalidKey { key: String },

    /// Serialization error.
    #[error("Failed to serialize dashboard data")]
    Serialization {
        #[source]
        source: serde_json::Error,
    },

    /// The stored document no longer parses.
    #[error("Stored dashboard data under '{key}' is corrupt")]
    CorruptDocument {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Seeding was requested but a document already exists.
    #[error("Dashboard data is already initialized")]
    AlreadyInitialized,

    /// An operation needs a document but none has been written yet.
    #[error("No dashboard data has been saved yet")]
    NotInitialized,
}

impl PersistenceError {
    /// Get a user-friendly message for this error.
    pub fn user_message(&self) -> String {
        match self {
            Self::Io {
                operation, path, ..
            } => {
                format!("Could not {} the file at {}", operation, path.display())
            }
            Self::AtomicWriteFailed { target_path, .. } => {
                format!(
                    "Could not save the file to {}. Please check disk space and permissions.",
                    target_path.display()
                )
            }
            Self::InvalidKey { key } => {
                format!("'{key}' cannot be used as a storage key.")
            }
            Self::Serialization { .. } => {
                "An error occurred while saving the dashboard data.".to_string()
            }
            Self::CorruptDocument { .. } => {
                "The saved dashboard data could not be read. It may have been edited by hand or damaged."
                    .to_string()
            }
            Self::AlreadyInitialized => {
                "Dashboard data already exists and was left untouched.".to_string()
            }
            Self::NotInitialized => "There is no dashboard data yet.".to_string(),
        }
    }

    /// Get a suggestion for how to resolve this error.
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::Io { operation, .. } => {
                if *operation == "read" {
                    Some("Check that the file exists and you have permission to read it.".into())
                } else {
                    Some("Check that you have permission to write to this location.".into())
                }
            }
            Self::AtomicWriteFailed { .. } => {
                Some("Free up disk space or choose a different data directory.".into())
            }
            Self::InvalidKey { .. } => {
                Some("Use only letters, digits, '-', '_' and '.' in storage keys.".into())
            }
            Self::Serialization { .. } => None,
            Self::CorruptDocument { .. } => Some(
                "Import a backup, or clear all data to start over from the fixtures.".into(),
            ),
            Self::AlreadyInitialized => {
                Some("Clear all data first if you want to re-seed.".into())
            }
            Self::NotInitialized => Some("Initialize the data or import a backup.".into()),
        }
    }
}

/// Why an import was rejected.
///
/// Everything except [`ImportError::Storage`] means the input was bad and the
/// stored document is untouched.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The text is not JSON at all.
    #[error("Import is not valid JSON")]
    Syntax {
        #[source]
        source: serde_json::Error,
    },

    /// Valid JSON that is not a dashboard document.
    #[error("Import does not look like dashboard data: {reason}")]
    Shape { reason: String },

    /// Two records of one collection share an id.
    #[error("Duplicate id '{id}' in {collection}")]
    DuplicateId {
        collection: &'static str,
        id: String,
    },

    /// Document version below the first one ever written.
    #[error("Unsupported document version {found}")]
    InvalidVersion { found: u32 },

    /// The input was fine but writing it failed.
    #[error(transparent)]
    Storage(#[from] PersistenceError),
}

impl ImportError {
    /// Whether the input itself was rejected (as opposed to a storage failure).
    pub fn is_rejected_input(&self) -> bool {
        !matches!(self, Self::Storage(_))
    }
}

/// Result type alias for persistence operations.
pub type Result<T> = std::result::Result<T, PersistenceError>;
