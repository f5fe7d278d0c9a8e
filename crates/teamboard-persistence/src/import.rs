//! Shape checking for imported documents.
//!
//! Policy: the input must be a JSON object with exactly the six collections
//! plus `version` and `lastUpdated`. Unknown top-level keys are rejected,
//! every record must parse, the version must be at least 1 and ids must be
//! unique within each collection. Unknown fields inside a record are kept.

use std::collections::HashSet;

use serde_json::Value;
use teamboard_model::{
    AppData, Designer, INITIAL_DOCUMENT_VERSION, LearningModule, Lesson, Project, Record, Skill,
    Test,
};

use crate::error::ImportError;

/// Top-level keys of a dashboard document.
const DOCUMENT_KEYS: [&str; 8] = [
    "designers",
    "skills",
    "learningModules",
    "projects",
    "tests",
    "lessons",
    "version",
    "lastUpdated",
];

/// Parse and shape-check document text without touching any storage.
pub fn parse_document(json: &str) -> Result<AppData, ImportError> {
    let value: Value =
        serde_json::from_str(json).map_err(|source| ImportError::Syntax { source })?;

    let Some(object) = value.as_object() else {
        return Err(ImportError::Shape {
            reason: "expected a JSON object at the top level".to_string(),
        });
    };

    if let Some(unknown) = object.keys().find(|key| !DOCUMENT_KEYS.contains(&key.as_str())) {
        return Err(ImportError::Shape {
            reason: format!("unexpected key '{unknown}'"),
        });
    }
    if let Some(missing) = DOCUMENT_KEYS.iter().find(|key| !object.contains_key(**key)) {
        return Err(ImportError::Shape {
            reason: format!("missing key '{missing}'"),
        });
    }

    let data: AppData = serde_json::from_value(value).map_err(|e| ImportError::Shape {
        reason: e.to_string(),
    })?;

    if data.version < INITIAL_DOCUMENT_VERSION {
        return Err(ImportError::InvalidVersion {
            found: data.version,
        });
    }

    ensure_unique::<Designer>(&data)?;
    ensure_unique::<Skill>(&data)?;
    ensure_unique::<LearningModule>(&data)?;
    ensure_unique::<Project>(&data)?;
    ensure_unique::<Test>(&data)?;
    ensure_unique::<Lesson>(&data)?;

    Ok(data)
}

fn ensure_unique<R: Record>(data: &AppData) -> Result<(), ImportError> {
    let mut seen = HashSet::new();
    for record in R::records(data) {
        if !seen.insert(record.id()) {
            return Err(ImportError::DuplicateId {
                collection: R::COLLECTION,
                id: record.id().to_string(),
            });
        }
    }
    Ok(())
}
