//! Team projects.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: ProjectStatus,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::de::empty_as_none"
    )]
    pub start_date: Option<NaiveDate>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::de::empty_as_none"
    )]
    pub end_date: Option<NaiveDate>,
    /// Ids of the designers staffed on the project.
    #[serde(default)]
    pub team: Vec<String>,
    /// Percent complete, 0..=100.
    #[serde(default)]
    pub progress: u8,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Project {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            status: ProjectStatus::default(),
            start_date: None,
            end_date: None,
            team: Vec::new(),
            progress: 0,
            extra: Map::new(),
        }
    }

    /// Whether a designer is staffed on this project.
    pub fn has_member(&self, designer_id: &str) -> bool {
        self.team.iter().any(|id| id == designer_id)
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProjectStatus {
    #[default]
    Planning,
    Active,
    OnHold,
    Completed,
}
