//! Skills matrix entries.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A skill tracked in the team's skills matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: String,
    pub name: String,
    /// Grouping shown as a matrix header (e.g. "Research", "Visual").
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Skill {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            description: String::new(),
            extra: Map::new(),
        }
    }
}
