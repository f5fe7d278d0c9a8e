//! Learning content: modules, lessons and tests.
//!
//! A module owns its lessons and tests by id. Lessons and tests point back at
//! their module through `module_id`, and both are persisted in flat top-level
//! collections of the document.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningModule {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
    /// Lesson ids in display order.
    #[serde(default)]
    pub lessons: Vec<String>,
    /// Test ids in display order.
    #[serde(default)]
    pub tests: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LearningModule {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            category: String::new(),
            duration_minutes: None,
            lessons: Vec::new(),
            tests: Vec::new(),
            extra: Map::new(),
        }
    }

    /// Attach a lesson id, ignoring ids already present.
    pub fn attach_lesson(&mut self, lesson_id: &str) {
        if !self.lessons.iter().any(|id| id == lesson_id) {
            self.lessons.push(lesson_id.to_string());
        }
    }

    /// Attach a test id, ignoring ids already present.
    pub fn attach_test(&mut self, test_id: &str) {
        if !self.tests.iter().any(|id| id == test_id) {
            self.tests.push(test_id.to_string());
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    pub id: String,
    pub module_id: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
    #[serde(default)]
    pub order: u32,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Lesson {
    pub fn new(
        id: impl Into<String>,
        module_id: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            module_id: module_id.into(),
            title: title.into(),
            content: String::new(),
            duration_minutes: None,
            order: 0,
            extra: Map::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Test {
    pub id: String,
    pub module_id: String,
    pub title: String,
    /// Minimum score in percent needed to pass.
    #[serde(default)]
    pub passing_score: u8,
    #[serde(default)]
    pub questions: Vec<Question>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Test {
    pub fn new(
        id: impl Into<String>,
        module_id: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            module_id: module_id.into(),
            title: title.into(),
            passing_score: 70,
            questions: Vec::new(),
            extra: Map::new(),
        }
    }

    /// Score answers (one chosen option index per question) in percent.
    ///
    /// Missing answers count as wrong. Returns `None` for a test without
    /// questions.
    pub fn score(&self, answers: &[usize]) -> Option<u8> {
        if self.questions.is_empty() {
            return None;
        }
        let correct = self
            .questions
            .iter()
            .zip(answers.iter().map(Some).chain(std::iter::repeat(None)))
            .filter(|(question, answer)| *answer == Some(&question.correct_option))
            .count();
        let percent = correct * 100 / self.questions.len();
        Some(percent as u8)
    }

    pub fn passes(&self, answers: &[usize]) -> bool {
        self.score(answers)
            .is_some_and(|score| score >= self.passing_score)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub options: Vec<String>,
    /// Index into `options` of the right answer.
    #[serde(default)]
    pub correct_option: usize,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Question {
    pub fn new(
        id: impl Into<String>,
        text: impl Into<String>,
        options: Vec<String>,
        correct_option: usize,
    ) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            options,
            correct_option,
            extra: Map::new(),
        }
    }
}
