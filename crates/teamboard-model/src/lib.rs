//! Data model for Teamboard.
//!
//! Every record persisted by the dashboard lives here, together with the
//! [`AppData`] document that holds them all and the form-level validation
//! rules editors apply before saving.
//!
//! Records serialize with camelCase keys. Fields a record does not know about
//! are kept in its `extra` map so that a document written by a newer build
//! survives a load/save cycle unchanged.

mod de;
pub mod designer;
pub mod document;
pub mod learning;
pub mod project;
pub mod skill;
pub mod validation;

pub use designer::{
    Achievement, CareerGoal, Designer, GoalStatus, Kpi, MAX_LEVEL, PeerReview, SkillRating,
};
pub use document::{AppData, INITIAL_DOCUMENT_VERSION, Record, SeedData};
pub use learning::{LearningModule, Lesson, Question, Test};
pub use project::{Project, ProjectStatus};
pub use skill::Skill;
pub use validation::{Validate, ValidationIssue, is_valid_email};
