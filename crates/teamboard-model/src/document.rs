//! The persisted document.
//!
//! [`AppData`] is the single unit of persistence: every read and write at the
//! storage layer moves the whole document, never a partial patch.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Designer, LearningModule, Lesson, Project, Skill, Test};

/// Version written into a freshly seeded document.
///
/// The document version is informational: no read is gated on it and there
/// is no migration between versions.
pub const INITIAL_DOCUMENT_VERSION: u32 = 1;

/// All persisted dashboard state.
///
/// Unknown top-level keys are rejected so a foreign JSON file cannot be
/// imported by accident.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AppData {
    pub designers: Vec<Designer>,
    pub skills: Vec<Skill>,
    pub learning_modules: Vec<LearningModule>,
    pub projects: Vec<Project>,
    pub tests: Vec<Test>,
    pub lessons: Vec<Lesson>,
    pub version: u32,
    pub last_updated: DateTime<Utc>,
}

impl AppData {
    /// An empty version-1 document.
    pub fn empty(now: DateTime<Utc>) -> Self {
        Self::from_seed(SeedData::default(), now)
    }

    /// A version-1 document holding the seed collections, empty where the
    /// seed has none.
    pub fn from_seed(seed: SeedData, now: DateTime<Utc>) -> Self {
        Self {
            designers: seed.designers.unwrap_or_default(),
            skills: seed.skills.unwrap_or_default(),
            learning_modules: seed.learning_modules.unwrap_or_default(),
            projects: seed.projects.unwrap_or_default(),
            tests: seed.tests.unwrap_or_default(),
            lessons: seed.lessons.unwrap_or_default(),
            version: INITIAL_DOCUMENT_VERSION,
            last_updated: now,
        }
    }

    /// Stamp the document as written at `now`.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.last_updated = now;
    }

    /// Insert or replace a record by id.
    ///
    /// Returns `true` when an existing record was replaced.
    pub fn upsert<R: Record>(&mut self, record: R) -> bool {
        let records = R::records_mut(self);
        match records.iter_mut().find(|r| r.id() == record.id()) {
            Some(existing) => {
                *existing = record;
                true
            }
            None => {
                records.push(record);
                false
            }
        }
    }

    /// Remove a record by id, returning it if present.
    pub fn remove<R: Record>(&mut self, id: &str) -> Option<R> {
        let records = R::records_mut(self);
        let index = records.iter().position(|r| r.id() == id)?;
        Some(records.remove(index))
    }

    pub fn find<R: Record>(&self, id: &str) -> Option<&R> {
        R::records(self).iter().find(|r| r.id() == id)
    }

    /// Lessons belonging to a module, ordered by their `order` field.
    pub fn lessons_for_module(&self, module_id: &str) -> Vec<&Lesson> {
        let mut lessons: Vec<&Lesson> = self
            .lessons
            .iter()
            .filter(|lesson| lesson.module_id == module_id)
            .collect();
        lessons.sort_by_key(|lesson| lesson.order);
        lessons
    }

    /// Projects a designer is staffed on.
    pub fn projects_for_designer(&self, designer_id: &str) -> Vec<&Project> {
        self.projects
            .iter()
            .filter(|project| project.has_member(designer_id))
            .collect()
    }

    /// Total number of records across all collections.
    pub fn record_count(&self) -> usize {
        self.designers.len()
            + self.skills.len()
            + self.learning_modules.len()
            + self.projects.len()
            + self.tests.len()
            + self.lessons.len()
    }
}

/// Fixture content used to seed a first-run document.
///
/// Every collection is optional; missing ones become empty lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SeedData {
    pub designers: Option<Vec<Designer>>,
    pub skills: Option<Vec<Skill>>,
    pub learning_modules: Option<Vec<LearningModule>>,
    pub projects: Option<Vec<Project>>,
    pub tests: Option<Vec<Test>>,
    pub lessons: Option<Vec<Lesson>>,
}

/// A record kept in one of the document's collections.
pub trait Record: Clone + Sized {
    /// The collection's key in the JSON document.
    const COLLECTION: &'static str;

    fn id(&self) -> &str;
    fn records(data: &AppData) -> &[Self];
    fn records_mut(data: &mut AppData) -> &mut Vec<Self>;
}

macro_rules! impl_record {
    ($ty:ty, $field:ident, $key:literal) => {
        impl Record for $ty {
            const COLLECTION: &'static str = $key;

            fn id(&self) -> &str {
                &self.id
            }

            fn records(data: &AppData) -> &[Self] {
                &data.$field
            }

            fn records_mut(data: &mut AppData) -> &mut Vec<Self> {
                &mut data.$field
            }
        }
    };
}

impl_record!(Designer, designers, "designers");
impl_record!(Skill, skills, "skills");
impl_record!(LearningModule, learning_modules, "learningModules");
impl_record!(Project, projects, "projects");
impl_record!(Test, tests, "tests");
impl_record!(Lesson, lessons, "lessons");
