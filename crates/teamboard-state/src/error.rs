//! State-layer error types.

use std::path::PathBuf;

use teamboard_model::ValidationIssue;
use teamboard_persistence::PersistenceError;
use thiserror::Error;

/// A navigation value that could not be parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    #[error("Unknown section: {name}")]
    UnknownSection { name: String },

    #[error("Unknown subsection: {name}")]
    UnknownSubsection { name: String },

    #[error("Unknown editor mode: {name}")]
    UnknownMode { name: String },
}

/// Failure to persist settings.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to create config directory {path}")]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize settings")]
    Serialize(#[from] toml::ser::Error),

    #[error("Failed to write settings to {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Why an editor could not open or save.
#[derive(Error, Debug)]
pub enum EditorError {
    /// The form has validation issues; nothing was saved.
    #[error("Form has {} issue(s)", .0.len())]
    Invalid(Vec<ValidationIssue>),

    #[error("Designer not found: {id}")]
    NotFound { id: String },

    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

impl EditorError {
    /// Get a user-friendly message for this error.
    pub fn user_message(&self) -> String {
        match self {
            Self::Invalid(issues) => {
                let lines: Vec<String> = issues.iter().map(ToString::to_string).collect();
                format!("Please fix the following:\n{}", lines.join("\n"))
            }
            Self::NotFound { id } => format!("The designer '{id}' no longer exists."),
            Self::Persistence(e) => e.user_message(),
        }
    }
}
