//! Designer profile records.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Upper bound of every skill level slider.
pub const MAX_LEVEL: u8 = 100;

/// A member of the design team.
///
/// `version` and `last_modified` are a cosmetic "last edited" counter bumped
/// by the editor on every save. They are not an optimistic-lock token: the
/// store never rejects a save because of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Designer {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub department: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// Avatar as a data URL or path, already resized by the host.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::de::empty_as_none"
    )]
    pub hire_date: Option<NaiveDate>,
    #[serde(default)]
    pub skills: Vec<SkillRating>,
    /// Ids of projects the designer works on.
    #[serde(default)]
    pub projects: Vec<String>,
    /// Ids of learning modules assigned to the designer.
    #[serde(default)]
    pub learning_modules: Vec<String>,
    #[serde(default)]
    pub achievements: Vec<Achievement>,
    #[serde(default)]
    pub career_goals: Vec<CareerGoal>,
    #[serde(default)]
    pub kpis: Vec<Kpi>,
    #[serde(default)]
    pub peer_reviews: Vec<PeerReview>,
    #[serde(default)]
    pub version: u32,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::de::empty_as_none"
    )]
    pub last_modified: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Designer {
    /// Create a designer with only the identity fields filled in.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: String::new(),
            position: String::new(),
            department: String::new(),
            phone: None,
            location: None,
            bio: None,
            avatar: None,
            hire_date: None,
            skills: Vec::new(),
            projects: Vec::new(),
            learning_modules: Vec::new(),
            achievements: Vec::new(),
            career_goals: Vec::new(),
            kpis: Vec::new(),
            peer_reviews: Vec::new(),
            version: 0,
            last_modified: None,
            extra: Map::new(),
        }
    }

    /// Bump the edit counter and stamp the modification time.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.version = self.version.saturating_add(1);
        self.last_modified = Some(now);
    }

    /// Rating for a skill, if the designer has one.
    pub fn skill(&self, skill_id: &str) -> Option<&SkillRating> {
        self.skills.iter().find(|rating| rating.skill_id == skill_id)
    }

    /// Mean of all current skill levels, `None` without ratings.
    pub fn average_level(&self) -> Option<f64> {
        if self.skills.is_empty() {
            return None;
        }
        let total: u32 = self.skills.iter().map(|s| u32::from(s.current_level)).sum();
        Some(f64::from(total) / self.skills.len() as f64)
    }
}

/// A designer's rating on one skill of the matrix.
///
/// `target_level >= current_level` is kept by the editor's slider bounds,
/// the store accepts whatever it is given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillRating {
    pub skill_id: String,
    pub current_level: u8,
    pub target_level: u8,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::de::empty_as_none"
    )]
    pub last_updated: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SkillRating {
    pub fn new(skill_id: impl Into<String>, current_level: u8, target_level: u8) -> Self {
        Self {
            skill_id: skill_id.into(),
            current_level,
            target_level,
            last_updated: None,
            extra: Map::new(),
        }
    }

    /// Distance still to cover towards the target.
    pub fn gap(&self) -> u8 {
        self.target_level.saturating_sub(self.current_level)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::de::empty_as_none"
    )]
    pub date: Option<NaiveDate>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerGoal {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::de::empty_as_none"
    )]
    pub target_date: Option<NaiveDate>,
    /// Percent complete, 0..=100.
    #[serde(default)]
    pub progress: u8,
    #[serde(default)]
    pub status: GoalStatus,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GoalStatus {
    #[default]
    NotStarted,
    InProgress,
    Achieved,
}

/// A key performance indicator tracked for a designer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Kpi {
    pub id: String,
    pub name: String,
    pub value: f64,
    pub target: f64,
    #[serde(default)]
    pub unit: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Kpi {
    /// Share of the target reached, `None` when the target is zero.
    pub fn attainment(&self) -> Option<f64> {
        if self.target == 0.0 {
            None
        } else {
            Some(self.value / self.target)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeerReview {
    pub id: String,
    pub reviewer_id: String,
    /// 1 to 5 stars.
    pub rating: u8,
    #[serde(default)]
    pub comment: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::de::empty_as_none"
    )]
    pub date: Option<NaiveDate>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
